//! Packing stage: Quality Checked -> Packed

use crate::core::sampler::Sampler;
use crate::core::state::Floor;
use crate::entities::{FurnitureState, Worker};
use crate::ops::{require_status, target, Operation, OperationError, StageLog};

const STAGE: &str = "packing";

/// Packing materials available on the floor.
pub const PACKING_CATALOG: [&str; 3] = ["Paper", "Box", "Film"];

/// Wraps a quality-checked item for storage or delivery.
///
/// The packer can be caller-selected; otherwise the pool is searched,
/// preferring a free "packer" specialist and falling back to any free
/// worker. Draws 1 to 3 distinct packing materials.
#[derive(Debug)]
pub struct PackOperation<S> {
    packer: Option<usize>,
    sampler: S,
}

impl<S: Sampler> PackOperation<S> {
    pub fn new(sampler: S) -> Self {
        Self {
            packer: None,
            sampler,
        }
    }

    pub fn with_packer(packer: usize, sampler: S) -> Self {
        Self {
            packer: Some(packer),
            sampler,
        }
    }
}

impl<S: Sampler> Operation for PackOperation<S> {
    fn stage(&self) -> &'static str {
        STAGE
    }

    fn execute(&mut self, floor: &mut Floor<'_>, item: usize) -> Result<StageLog, OperationError> {
        let furniture = target(floor, item)?;
        require_status(STAGE, furniture, FurnitureState::QualityChecked)?;

        let packer = match self.packer {
            Some(index) => {
                let worker = floor
                    .workers
                    .get(index)
                    .ok_or(OperationError::NoWorkerAvailable { stage: STAGE })?;
                if worker.is_busy() {
                    return Err(OperationError::WorkerBusy {
                        role: "packer",
                        name: worker.name().to_string(),
                    });
                }
                index
            }
            None => Worker::first_available_with(floor.workers, "packer")
                .or_else(|| Worker::first_available(floor.workers))
                .ok_or(OperationError::NoWorkerAvailable { stage: STAGE })?,
        };
        let packer_name = floor.workers[packer].name().to_string();

        floor.workers[packer].set_busy(true);

        let count = self.sampler.draw_in(1, 3) as usize;
        let materials = self.sampler.pick_distinct(&PACKING_CATALOG, count);

        let furniture = &mut floor.furnitures[item];
        furniture.record_packing(materials, packer_name.clone());
        furniture.set_status(FurnitureState::Packed);

        floor.workers[packer].set_busy(false);

        Ok(StageLog {
            stage: STAGE,
            worker: Some(packer_name),
            tool: None,
        })
    }
}
