//! JSON persistence - one save file, fully overwritten on each save
//!
//! The document schema is fixed; see [`SaveFile`]. Furniture production
//! metadata (scores, defects, packing) is intentionally not persisted, only
//! the fields below survive a reload.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::state::FactoryState;
use crate::entities::{
    Customer, Furniture, FurnitureState, Material, MaterialKind, StockError, Tool,
    ValidationError, Warehouse, Worker, Workshop,
};

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("can't access save file: {0}")]
    Io(#[from] std::io::Error),

    #[error("save file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("save file holds invalid data: {0}")]
    Invalid(#[from] ValidationError),

    #[error("save file breaks a stock invariant: {0}")]
    Stock(#[from] StockError),

    #[error("save file is malformed: {0}")]
    Malformed(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct WarehouseDoc {
    name: String,
    capacity: f64,
    metal_amount: f64,
    wood_amount: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct WorkshopDoc {
    name: String,
    /// Completed furniture is stored by type name only; membership is
    /// re-established on load by matching type plus Stored status.
    completed: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WorkerDoc {
    name: String,
    age: u32,
    specialization: String,
    experience: u32,
    is_busy: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct ToolDoc {
    name: String,
    durability: i32,
}

#[derive(Debug, Serialize, Deserialize)]
struct CustomerDoc {
    name: String,
    age: u32,
    phone: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct MaterialDoc {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    amount: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct FurnitureDoc {
    #[serde(rename = "type")]
    furniture_type: String,
    #[serde(default)]
    customer: String,
    status: String,
    materials: Vec<MaterialDoc>,
}

/// The persisted document, mirroring the on-disk JSON field for field.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveFile {
    material_storage: WarehouseDoc,
    finished_storage: WarehouseDoc,
    workshop: WorkshopDoc,
    workers: Vec<WorkerDoc>,
    tools: Vec<ToolDoc>,
    customers: Vec<CustomerDoc>,
    furnitures: Vec<FurnitureDoc>,
}

impl SaveFile {
    /// Snapshot the current floor state.
    pub fn capture(state: &FactoryState) -> Self {
        Self {
            material_storage: warehouse_doc(&state.material_storage),
            finished_storage: warehouse_doc(&state.finished_storage),
            workshop: WorkshopDoc {
                name: state.workshop.name().to_string(),
                completed: state
                    .workshop
                    .completed()
                    .iter()
                    .filter_map(|&i| state.furnitures.get(i))
                    .map(|f| f.furniture_type().to_string())
                    .collect(),
            },
            workers: state
                .workers
                .iter()
                .map(|w| WorkerDoc {
                    name: w.name().to_string(),
                    age: w.age(),
                    specialization: w.specialization().to_string(),
                    experience: w.experience(),
                    is_busy: w.is_busy(),
                })
                .collect(),
            tools: state
                .tools
                .iter()
                .map(|t| ToolDoc {
                    name: t.name().to_string(),
                    durability: t.durability(),
                })
                .collect(),
            customers: state
                .customers
                .iter()
                .map(|c| CustomerDoc {
                    name: c.name().to_string(),
                    age: c.age(),
                    phone: c.phone().to_string(),
                })
                .collect(),
            furnitures: state
                .furnitures
                .iter()
                .map(|f| FurnitureDoc {
                    furniture_type: f.furniture_type().to_string(),
                    customer: f.customer().unwrap_or_default().to_string(),
                    status: f.status().to_string(),
                    materials: f
                        .materials()
                        .iter()
                        .map(|m| MaterialDoc {
                            kind: m.kind().to_string(),
                            name: m.name().to_string(),
                            amount: m.amount(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Rebuild the floor state, re-validating every entity on the way in.
    pub fn restore(self) -> Result<FactoryState, SaveError> {
        let material_storage = restore_warehouse(self.material_storage)?;
        let finished_storage = restore_warehouse(self.finished_storage)?;
        let mut workshop = Workshop::new(self.workshop.name)?;

        let mut workers = Vec::with_capacity(self.workers.len());
        for doc in self.workers {
            let mut worker = Worker::new(doc.name, doc.age, doc.specialization, doc.experience)?;
            worker.set_busy(doc.is_busy);
            workers.push(worker);
        }

        let tools = self
            .tools
            .into_iter()
            .map(|doc| Tool::with_wear(doc.name, doc.durability))
            .collect::<Result<Vec<_>, _>>()?;

        let customers = self
            .customers
            .into_iter()
            .map(|doc| Customer::new(doc.name, doc.age, doc.phone))
            .collect::<Result<Vec<_>, _>>()?;

        let mut furnitures = Vec::with_capacity(self.furnitures.len());
        for doc in self.furnitures {
            let materials = doc
                .materials
                .into_iter()
                .map(restore_material)
                .collect::<Result<Vec<_>, _>>()?;
            let mut furniture = Furniture::new(doc.furniture_type, materials)?;
            if !doc.customer.is_empty() {
                furniture.assign_customer(doc.customer);
            }
            let status: FurnitureState =
                doc.status.parse().map_err(SaveError::Malformed)?;
            furniture.set_status(status);
            furnitures.push(furniture);
        }

        // Re-link workshop membership: first furniture matching the saved
        // type name that is sitting in Stored. Duplicate type names stay
        // ambiguous on purpose; first match wins.
        for type_name in self.workshop.completed {
            if let Some(idx) = furnitures.iter().position(|f| {
                f.furniture_type() == type_name && f.status() == FurnitureState::Stored
            }) {
                workshop.add_completed(idx);
            }
        }

        Ok(FactoryState {
            material_storage,
            finished_storage,
            workshop,
            workers,
            tools,
            customers,
            furnitures,
        })
    }
}

fn warehouse_doc(warehouse: &Warehouse) -> WarehouseDoc {
    WarehouseDoc {
        name: warehouse.name().to_string(),
        capacity: warehouse.capacity(),
        metal_amount: warehouse.metal_amount(),
        wood_amount: warehouse.wood_amount(),
    }
}

fn restore_warehouse(doc: WarehouseDoc) -> Result<Warehouse, SaveError> {
    let mut warehouse = Warehouse::new(doc.name, doc.capacity)?;
    warehouse.set_stock(doc.metal_amount, doc.wood_amount)?;
    Ok(warehouse)
}

fn restore_material(doc: MaterialDoc) -> Result<Material, SaveError> {
    let kind: MaterialKind = doc.kind.parse().map_err(SaveError::Malformed)?;
    Ok(Material::new(kind, doc.name, doc.amount)?)
}

/// Serialize the whole floor state over `path`.
pub fn save(state: &FactoryState, path: &Path) -> Result<(), SaveError> {
    let doc = SaveFile::capture(state);
    let json = serde_json::to_string_pretty(&doc)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load the floor state from `path`; `Ok(None)` when no save exists yet.
pub fn load(path: &Path) -> Result<Option<FactoryState>, SaveError> {
    if !path.exists() {
        return Ok(None);
    }
    let json = fs::read_to_string(path)?;
    let doc: SaveFile = serde_json::from_str(&json)?;
    Ok(Some(doc.restore()?))
}
