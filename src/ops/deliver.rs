//! Delivery stage: Packed -> Delivered
//!
//! The alternate terminal route, mutually exclusive with storage for a
//! given item.

use chrono::Utc;

use crate::core::state::Floor;
use crate::entities::{FurnitureState, Worker};
use crate::ops::{require_status, target, Operation, OperationError, StageLog};

const STAGE: &str = "delivery";

/// Specialization searched for when no courier is selected explicitly.
pub const COURIER_SPECIALIZATION: &str = "courier";

/// Hands a packed item to a courier for delivery.
///
/// Needs a courier (caller-selected or found in the pool) and an address,
/// either given here or previously attached to the furniture. Records the
/// courier, address, and a UTC timestamp, then passes custody to the
/// workshop.
#[derive(Debug)]
pub struct DeliverOperation {
    courier: Option<usize>,
    address: Option<String>,
}

impl DeliverOperation {
    pub fn new(address: Option<String>) -> Self {
        Self {
            courier: None,
            address,
        }
    }

    pub fn with_courier(courier: usize, address: Option<String>) -> Self {
        Self {
            courier: Some(courier),
            address,
        }
    }
}

impl Operation for DeliverOperation {
    fn stage(&self) -> &'static str {
        STAGE
    }

    fn execute(&mut self, floor: &mut Floor<'_>, item: usize) -> Result<StageLog, OperationError> {
        let furniture = target(floor, item)?;
        require_status(STAGE, furniture, FurnitureState::Packed)?;

        let address = self
            .address
            .clone()
            .or_else(|| furniture.delivery_address().map(str::to_string))
            .ok_or_else(|| OperationError::MissingAddress {
                item: furniture.furniture_type().to_string(),
            })?;

        let courier = match self.courier {
            Some(index) => {
                let worker = floor
                    .workers
                    .get(index)
                    .ok_or(OperationError::NoSpecialist {
                        specialization: COURIER_SPECIALIZATION,
                    })?;
                if worker.is_busy() {
                    return Err(OperationError::WorkerBusy {
                        role: "courier",
                        name: worker.name().to_string(),
                    });
                }
                index
            }
            None => Worker::first_available_with(floor.workers, COURIER_SPECIALIZATION).ok_or(
                OperationError::NoSpecialist {
                    specialization: COURIER_SPECIALIZATION,
                },
            )?,
        };
        let courier_name = floor.workers[courier].name().to_string();

        floor.workers[courier].set_busy(true);

        let furniture = &mut floor.furnitures[item];
        furniture.record_delivery(courier_name.clone(), address, Utc::now());
        furniture.set_status(FurnitureState::Delivered);
        floor.workshop.add_completed(item);

        floor.workers[courier].set_busy(false);

        Ok(StageLog {
            stage: STAGE,
            worker: Some(courier_name),
            tool: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::testutil::{assert_nobody_busy, floor_with_chair};

    #[test]
    fn test_deliver_records_courier_address_and_time() {
        let mut state = floor_with_chair(FurnitureState::Packed);
        let mut op = DeliverOperation::new(Some("12 Pine St".to_string()));
        let log = op.execute(&mut state.floor(), 0).unwrap();

        let chair = &state.furnitures[0];
        assert_eq!(chair.status(), FurnitureState::Delivered);
        let record = chair.delivery().unwrap();
        assert_eq!(record.courier, "Sergey Nikolaev");
        assert_eq!(record.address, "12 Pine St");
        assert_eq!(log.worker.as_deref(), Some("Sergey Nikolaev"));
        assert_eq!(state.workshop.completed(), &[0]);
        assert_nobody_busy(&state);
    }

    #[test]
    fn test_deliver_uses_an_attached_address() {
        let mut state = floor_with_chair(FurnitureState::Packed);
        state.furnitures[0].set_delivery_address("3 Oak Ave");
        let mut op = DeliverOperation::new(None);
        op.execute(&mut state.floor(), 0).unwrap();
        assert_eq!(
            state.furnitures[0].delivery().unwrap().address,
            "3 Oak Ave"
        );
    }

    #[test]
    fn test_deliver_requires_an_address() {
        let mut state = floor_with_chair(FurnitureState::Packed);
        let mut op = DeliverOperation::new(None);
        let err = op.execute(&mut state.floor(), 0).unwrap_err();
        assert_eq!(
            err,
            OperationError::MissingAddress {
                item: "Chair".to_string()
            }
        );
        assert_eq!(state.furnitures[0].status(), FurnitureState::Packed);
        assert_eq!(state.workshop.completed_count(), 0);
    }

    #[test]
    fn test_deliver_requires_a_free_courier() {
        let mut state = floor_with_chair(FurnitureState::Packed);
        // Sergey, the only courier, is out on another job.
        let courier = state
            .workers
            .iter()
            .position(|w| w.specialization() == COURIER_SPECIALIZATION)
            .unwrap();
        state.workers[courier].set_busy(true);
        let mut op = DeliverOperation::new(Some("12 Pine St".to_string()));
        let err = op.execute(&mut state.floor(), 0).unwrap_err();
        assert_eq!(
            err,
            OperationError::NoSpecialist {
                specialization: COURIER_SPECIALIZATION
            }
        );
    }

    #[test]
    fn test_deliver_rejects_wrong_status() {
        let mut state = floor_with_chair(FurnitureState::Stored);
        let mut op = DeliverOperation::new(Some("12 Pine St".to_string()));
        let err = op.execute(&mut state.floor(), 0).unwrap_err();
        assert!(matches!(err, OperationError::InvalidTransition { .. }));
    }

    #[test]
    fn test_deliver_rejects_busy_selected_courier() {
        let mut state = floor_with_chair(FurnitureState::Packed);
        state.workers[1].set_busy(true);
        let mut op = DeliverOperation::with_courier(1, Some("12 Pine St".to_string()));
        let err = op.execute(&mut state.floor(), 0).unwrap_err();
        assert!(matches!(err, OperationError::WorkerBusy { role: "courier", .. }));
    }
}
