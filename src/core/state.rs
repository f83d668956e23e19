//! Factory floor state - the process-wide aggregate operations run against

use crate::entities::{
    Customer, Furniture, Tool, ValidationError, Warehouse, Worker, Workshop,
};

/// Mutable view of the shared floor resources, handed to each operation
/// at invocation time.
///
/// Operations receive everything they might touch through this one struct
/// instead of holding ambient state, so a single borrow of the floor
/// brackets each pipeline step.
pub struct Floor<'a> {
    pub warehouse: &'a mut Warehouse,
    pub workers: &'a mut [Worker],
    pub tools: &'a mut [Tool],
    pub workshop: &'a mut Workshop,
    pub furnitures: &'a mut [Furniture],
}

/// Everything the factory tracks between runs.
#[derive(Debug, Clone, PartialEq)]
pub struct FactoryState {
    pub material_storage: Warehouse,
    pub finished_storage: Warehouse,
    pub workshop: Workshop,
    pub workers: Vec<Worker>,
    pub tools: Vec<Tool>,
    pub customers: Vec<Customer>,
    pub furnitures: Vec<Furniture>,
}

impl FactoryState {
    /// Fresh floor with the stock crew, tool set, and seeded warehouses.
    pub fn seed() -> Result<Self, ValidationError> {
        let mut material_storage = Warehouse::new("Raw material store", 10_000.0)?;
        material_storage
            .set_stock(5_000.0, 8_000.0)
            .expect("seed stock fits seed capacity");
        let finished_storage = Warehouse::new("Finished goods store", 5_000.0)?;
        let workshop = Workshop::new("Assembly shop")?;

        let workers = vec![
            Worker::new("Ivan Petrov", 35, "generalist", 8)?,
            Worker::new("Anna Sidorova", 28, "carpenter", 5)?,
            Worker::new("Petr Ivanov", 42, "assembler", 12)?,
            Worker::new("Maria Kozlova", 30, "inspector", 6)?,
            Worker::new("Sergey Nikolaev", 38, "courier", 10)?,
        ];

        let tools = vec![
            Tool::new("Hammer", 100)?,
            Tool::new("Saw", 80)?,
            Tool::new("Screwdriver", 90)?,
            Tool::new("Plane", 70)?,
            Tool::new("Brush", 50)?,
        ];

        Ok(Self {
            material_storage,
            finished_storage,
            workshop,
            workers,
            tools,
            customers: Vec::new(),
            furnitures: Vec::new(),
        })
    }

    /// Borrow the shared resources as a [`Floor`] for one operation.
    ///
    /// Raw-material operations always run against `material_storage`;
    /// `finished_storage` only participates in persistence.
    pub fn floor(&mut self) -> Floor<'_> {
        Floor {
            warehouse: &mut self.material_storage,
            workers: &mut self.workers,
            tools: &mut self.tools,
            workshop: &mut self.workshop,
            furnitures: &mut self.furnitures,
        }
    }
}
