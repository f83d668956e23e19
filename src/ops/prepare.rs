//! Material preparation stage: Created -> Materials Prepared

use crate::core::state::Floor;
use crate::entities::{FurnitureState, Tool, Worker};
use crate::ops::{ensure_stock, require_status, target, Operation, OperationError, StageLog};

const STAGE: &str = "preparation";

/// Validates that the warehouse can cover the bill of materials and stages
/// them for manufacturing. Deliberately no stock deduction here: this stage
/// only proves sufficiency, the manufacture stage does the withdrawal.
#[derive(Debug, Default)]
pub struct PrepareOperation;

impl Operation for PrepareOperation {
    fn stage(&self) -> &'static str {
        STAGE
    }

    fn execute(&mut self, floor: &mut Floor<'_>, item: usize) -> Result<StageLog, OperationError> {
        let furniture = target(floor, item)?;
        require_status(STAGE, furniture, FurnitureState::Created)?;
        let metal_needed = furniture.metal_required();
        let wood_needed = furniture.wood_required();

        let worker = Worker::first_available(floor.workers)
            .ok_or(OperationError::NoWorkerAvailable { stage: STAGE })?;
        let tool = Tool::first_usable(floor.tools)
            .ok_or(OperationError::NoToolAvailable { stage: STAGE })?;
        ensure_stock(floor.warehouse, metal_needed, wood_needed)?;

        floor.workers[worker].set_busy(true);
        floor.tools[tool].use_once()?;
        floor.furnitures[item].set_status(FurnitureState::MaterialsPrepared);
        floor.workers[worker].set_busy(false);

        Ok(StageLog {
            stage: STAGE,
            worker: Some(floor.workers[worker].name().to_string()),
            tool: Some(floor.tools[tool].name().to_string()),
        })
    }
}
