//! Quality check stage: Assembled -> Quality Checked, or back to
//! Elements Manufactured when the item fails

use crate::core::sampler::Sampler;
use crate::core::state::Floor;
use crate::entities::FurnitureState;
use crate::ops::{require_status, target, Operation, OperationError, StageLog};

const STAGE: &str = "quality check";

/// Specialization a worker must hold to run inspections.
pub const INSPECTOR_SPECIALIZATION: &str = "inspector";

/// Defects an inspector can find.
pub const DEFECT_CATALOG: [&str; 4] = ["Scratch", "Crack", "Paint issue", "Loose screw"];

/// Minimum score that passes inspection.
pub const PASS_SCORE: i32 = 70;

/// Inspects an assembled item.
///
/// The inspector is caller-selected (an index into the floor's worker
/// list) and must be a free inspector. The check draws a defect count in
/// [0,3], that many distinct defects, and a score in [50,100]; a score
/// below [`PASS_SCORE`] demotes the item for rework. Failing quality is a
/// modeled business outcome, not an error: the operation still succeeds.
#[derive(Debug)]
pub struct InspectOperation<S> {
    inspector: usize,
    sampler: S,
}

impl<S: Sampler> InspectOperation<S> {
    pub fn new(inspector: usize, sampler: S) -> Self {
        Self { inspector, sampler }
    }
}

impl<S: Sampler> Operation for InspectOperation<S> {
    fn stage(&self) -> &'static str {
        STAGE
    }

    fn execute(&mut self, floor: &mut Floor<'_>, item: usize) -> Result<StageLog, OperationError> {
        let furniture = target(floor, item)?;
        require_status(STAGE, furniture, FurnitureState::Assembled)?;

        let inspector = floor
            .workers
            .get(self.inspector)
            .ok_or(OperationError::NoSpecialist {
                specialization: INSPECTOR_SPECIALIZATION,
            })?;
        if inspector.specialization() != INSPECTOR_SPECIALIZATION {
            return Err(OperationError::NoSpecialist {
                specialization: INSPECTOR_SPECIALIZATION,
            });
        }
        if inspector.is_busy() {
            return Err(OperationError::WorkerBusy {
                role: "inspector",
                name: inspector.name().to_string(),
            });
        }
        let inspector_name = inspector.name().to_string();

        floor.workers[self.inspector].set_busy(true);

        let defect_count = self.sampler.draw_in(0, 3) as usize;
        let defects = self.sampler.pick_distinct(&DEFECT_CATALOG, defect_count);
        let score = self.sampler.draw_in(50, 100);
        let passed = score >= PASS_SCORE;

        let furniture = &mut floor.furnitures[item];
        furniture.record_inspection(score, defects, inspector_name.clone(), passed);
        furniture.set_status(if passed {
            FurnitureState::QualityChecked
        } else {
            FurnitureState::ElementsManufactured
        });

        floor.workers[self.inspector].set_busy(false);

        Ok(StageLog {
            stage: STAGE,
            worker: Some(inspector_name),
            tool: None,
        })
    }
}
