//! Entity types - the data model of the factory floor

pub mod customer;
pub mod furniture;
pub mod material;
pub mod tool;
pub mod warehouse;
pub mod worker;
pub mod workshop;

use thiserror::Error;

pub use customer::{Customer, Order};
pub use furniture::{DeliveryRecord, Furniture, FurnitureState};
pub use material::{Material, MaterialKind};
pub use tool::{Tool, ToolError, FULL_DURABILITY};
pub use warehouse::{StockError, Warehouse};
pub use worker::Worker;
pub use workshop::Workshop;

/// Errors raised when constructing or mutating an entity with bad data.
///
/// Entities are never left partially invalid: the failing constructor or
/// mutator returns before any field is written.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} can't be empty")]
    EmptyField { field: &'static str },

    #[error("age must be between 0 and 150, got {0}")]
    AgeOutOfRange(u32),

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("quantity must be positive")]
    ZeroQuantity,
}

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField { field })
    } else {
        Ok(())
    }
}

pub(crate) fn require_age(age: u32) -> Result<(), ValidationError> {
    if age > 150 {
        Err(ValidationError::AgeOutOfRange(age))
    } else {
        Ok(())
    }
}
