//! Assembly stage: Elements Manufactured -> Assembled

use crate::core::state::Floor;
use crate::entities::{FurnitureState, Worker};
use crate::ops::{require_status, target, Operation, OperationError, StageLog};

const STAGE: &str = "assembly";

/// Puts the elements together. Needs one free worker; no tool, no
/// warehouse interaction.
#[derive(Debug, Default)]
pub struct AssembleOperation;

impl Operation for AssembleOperation {
    fn stage(&self) -> &'static str {
        STAGE
    }

    fn execute(&mut self, floor: &mut Floor<'_>, item: usize) -> Result<StageLog, OperationError> {
        let furniture = target(floor, item)?;
        require_status(STAGE, furniture, FurnitureState::ElementsManufactured)?;

        let worker = Worker::first_available(floor.workers)
            .ok_or(OperationError::NoWorkerAvailable { stage: STAGE })?;

        floor.workers[worker].set_busy(true);
        floor.furnitures[item].set_status(FurnitureState::Assembled);
        floor.workers[worker].set_busy(false);

        Ok(StageLog {
            stage: STAGE,
            worker: Some(floor.workers[worker].name().to_string()),
            tool: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::testutil::{assert_nobody_busy, floor_with_chair};

    #[test]
    fn test_assemble_advances_one_step() {
        let mut state = floor_with_chair(FurnitureState::ElementsManufactured);
        let log = AssembleOperation.execute(&mut state.floor(), 0).unwrap();
        assert_eq!(state.furnitures[0].status(), FurnitureState::Assembled);
        assert_eq!(log.tool, None);
        // No tool wear, no stock movement.
        assert_eq!(state.tools[0].durability(), 100);
        assert_eq!(state.material_storage.total_amount(), 13_000.0);
        assert_nobody_busy(&state);
    }

    #[test]
    fn test_assemble_rejects_wrong_status() {
        for status in [
            FurnitureState::Created,
            FurnitureState::MaterialsPrepared,
            FurnitureState::Assembled,
            FurnitureState::QualityChecked,
            FurnitureState::Packed,
            FurnitureState::Stored,
            FurnitureState::Delivered,
        ] {
            let mut state = floor_with_chair(status);
            let err = AssembleOperation.execute(&mut state.floor(), 0).unwrap_err();
            assert!(matches!(err, OperationError::InvalidTransition { .. }));
            assert_eq!(state.furnitures[0].status(), status);
        }
    }

    #[test]
    fn test_assemble_needs_a_free_worker() {
        let mut state = floor_with_chair(FurnitureState::ElementsManufactured);
        for w in &mut state.workers {
            w.set_busy(true);
        }
        let err = AssembleOperation.execute(&mut state.floor(), 0).unwrap_err();
        assert_eq!(err, OperationError::NoWorkerAvailable { stage: STAGE });
    }
}
