//! Storage stage: Packed -> Stored
//!
//! The on-hand terminal route. Delivery is the alternate terminal route;
//! both start from Packed and both hand the item to the workshop.

use crate::core::state::Floor;
use crate::entities::FurnitureState;
use crate::ops::{require_status, target, Operation, OperationError, StageLog};

const STAGE: &str = "storage";

/// Moves a packed item onto the finished-goods shelf. No resources are
/// claimed; the workshop just takes custody.
#[derive(Debug, Default)]
pub struct StoreOperation;

impl Operation for StoreOperation {
    fn stage(&self) -> &'static str {
        STAGE
    }

    fn execute(&mut self, floor: &mut Floor<'_>, item: usize) -> Result<StageLog, OperationError> {
        let furniture = target(floor, item)?;
        require_status(STAGE, furniture, FurnitureState::Packed)?;

        floor.furnitures[item].set_status(FurnitureState::Stored);
        floor.workshop.add_completed(item);

        Ok(StageLog {
            stage: STAGE,
            worker: None,
            tool: None,
        })
    }
}
