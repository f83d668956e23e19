//! Element manufacturing stage: Materials Prepared -> Elements Manufactured

use crate::core::state::Floor;
use crate::entities::{FurnitureState, Tool, Worker};
use crate::ops::{ensure_stock, require_status, target, Operation, OperationError, StageLog};

const STAGE: &str = "manufacturing";

/// Cuts the elements, performing the actual stock withdrawal the
/// preparation stage only validated.
#[derive(Debug, Default)]
pub struct ManufactureOperation;

impl Operation for ManufactureOperation {
    fn stage(&self) -> &'static str {
        STAGE
    }

    fn execute(&mut self, floor: &mut Floor<'_>, item: usize) -> Result<StageLog, OperationError> {
        let furniture = target(floor, item)?;
        require_status(STAGE, furniture, FurnitureState::MaterialsPrepared)?;
        let metal_needed = furniture.metal_required();
        let wood_needed = furniture.wood_required();

        let tool = Tool::first_usable(floor.tools)
            .ok_or(OperationError::NoToolAvailable { stage: STAGE })?;
        let worker = Worker::first_available(floor.workers)
            .ok_or(OperationError::NoWorkerAvailable { stage: STAGE })?;
        ensure_stock(floor.warehouse, metal_needed, wood_needed)?;

        floor.warehouse.remove_metal(metal_needed)?;
        floor.warehouse.remove_wood(wood_needed)?;
        floor.workers[worker].set_busy(true);
        floor.tools[tool].use_once()?;
        floor.furnitures[item].set_status(FurnitureState::ElementsManufactured);
        floor.workers[worker].set_busy(false);

        Ok(StageLog {
            stage: STAGE,
            worker: Some(floor.workers[worker].name().to_string()),
            tool: Some(floor.tools[tool].name().to_string()),
        })
    }
}
