//! Pipeline operations - one per production stage
//!
//! Every operation follows the same contract: validate the furniture's
//! status precondition and resource availability first, and only then
//! mutate anything. A successful stage claims its worker, consumes any tool
//! use, transitions the furniture exactly one step, and releases the worker
//! before returning. A failing stage leaves the floor untouched.

pub mod assemble;
pub mod deliver;
pub mod inspect;
pub mod manufacture;
pub mod pack;
pub mod prepare;
pub mod store;

use thiserror::Error;

use crate::core::state::Floor;
use crate::entities::{Furniture, FurnitureState, StockError, ToolError, Warehouse};

pub use assemble::AssembleOperation;
pub use deliver::DeliverOperation;
pub use inspect::{InspectOperation, DEFECT_CATALOG, INSPECTOR_SPECIALIZATION, PASS_SCORE};
pub use manufacture::ManufactureOperation;
pub use pack::{PackOperation, PACKING_CATALOG};
pub use prepare::PrepareOperation;
pub use store::StoreOperation;

/// Errors raised by pipeline operations, always before any mutation.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("can't run {stage} on '{item}': status is {found}, needs {required}")]
    InvalidTransition {
        stage: &'static str,
        item: String,
        required: FurnitureState,
        found: FurnitureState,
    },

    #[error("no free worker for {stage}")]
    NoWorkerAvailable { stage: &'static str },

    #[error("no usable tool for {stage}")]
    NoToolAvailable { stage: &'static str },

    #[error("no free {specialization} on the floor")]
    NoSpecialist { specialization: &'static str },

    #[error("{role} {name} is busy")]
    WorkerBusy { role: &'static str, name: String },

    #[error("no delivery address for '{item}'")]
    MissingAddress { item: String },

    #[error("no furniture at position {index}")]
    UnknownItem { index: usize },

    #[error(transparent)]
    Stock(#[from] StockError),

    #[error(transparent)]
    Tool(#[from] ToolError),
}

/// What a completed stage did, for reporting by the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub struct StageLog {
    pub stage: &'static str,
    pub worker: Option<String>,
    pub tool: Option<String>,
}

/// A single pipeline stage run against the shared floor.
pub trait Operation {
    /// Stage name used in logs and error messages.
    fn stage(&self) -> &'static str;

    /// Run the stage on the furniture at `item` in the floor's list.
    fn execute(&mut self, floor: &mut Floor<'_>, item: usize) -> Result<StageLog, OperationError>;
}

/// Look up the target furniture, failing on a bad index.
pub(crate) fn target<'f>(
    floor: &'f Floor<'_>,
    item: usize,
) -> Result<&'f Furniture, OperationError> {
    floor
        .furnitures
        .get(item)
        .ok_or(OperationError::UnknownItem { index: item })
}

/// Enforce the stage's status precondition.
pub(crate) fn require_status(
    stage: &'static str,
    furniture: &Furniture,
    required: FurnitureState,
) -> Result<(), OperationError> {
    let found = furniture.status();
    if found != required {
        return Err(OperationError::InvalidTransition {
            stage,
            item: furniture.furniture_type().to_string(),
            required,
            found,
        });
    }
    Ok(())
}

/// Verify the warehouse can cover a metal + wood requirement, without
/// touching stock.
pub(crate) fn ensure_stock(
    warehouse: &Warehouse,
    metal: f64,
    wood: f64,
) -> Result<(), StockError> {
    if metal > warehouse.metal_amount() {
        return Err(StockError::InsufficientMetal {
            have: warehouse.metal_amount(),
            need: metal,
        });
    }
    if wood > warehouse.wood_amount() {
        return Err(StockError::InsufficientWood {
            have: warehouse.wood_amount(),
            need: wood,
        });
    }
    Ok(())
}
