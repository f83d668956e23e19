//! Warehouse entity - bounded-capacity store of raw metal and wood

use thiserror::Error;

use crate::entities::{require_non_empty, Material, MaterialKind, ValidationError};

/// Errors from moving stock in or out of a warehouse.
#[derive(Debug, Error, PartialEq)]
pub enum StockError {
    #[error("can't add material: {space} free, {amount} required")]
    CapacityExceeded { space: f64, amount: f64 },

    #[error("not enough metal: have {have}, need {need}")]
    InsufficientMetal { have: f64, need: f64 },

    #[error("not enough wood: have {have}, need {need}")]
    InsufficientWood { have: f64, need: f64 },

    #[error("stock amount can't be negative: {amount}")]
    NegativeAmount { amount: f64 },
}

/// A raw-material store with a fixed capacity.
///
/// Invariant: `metal_amount + wood_amount <= capacity` and both quantities
/// stay non-negative. The mutators below are the only way stock moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Warehouse {
    name: String,
    capacity: f64,
    metal_amount: f64,
    wood_amount: f64,
}

impl Warehouse {
    pub fn new(name: impl Into<String>, capacity: f64) -> Result<Self, ValidationError> {
        let name = name.into();
        require_non_empty("warehouse name", &name)?;
        if capacity <= 0.0 {
            return Err(ValidationError::NonPositive {
                field: "warehouse capacity",
                value: capacity,
            });
        }
        Ok(Self {
            name,
            capacity,
            metal_amount: 0.0,
            wood_amount: 0.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn metal_amount(&self) -> f64 {
        self.metal_amount
    }

    pub fn wood_amount(&self) -> f64 {
        self.wood_amount
    }

    pub fn total_amount(&self) -> f64 {
        self.metal_amount + self.wood_amount
    }

    pub fn available_space(&self) -> f64 {
        self.capacity - self.total_amount()
    }

    /// Overwrite both stock quantities at once, used when seeding or
    /// restoring a saved floor. The capacity bound still applies.
    pub fn set_stock(&mut self, metal: f64, wood: f64) -> Result<(), StockError> {
        if metal < 0.0 {
            return Err(StockError::NegativeAmount { amount: metal });
        }
        if wood < 0.0 {
            return Err(StockError::NegativeAmount { amount: wood });
        }
        let total = metal + wood;
        if total > self.capacity {
            return Err(StockError::CapacityExceeded {
                space: self.capacity,
                amount: total,
            });
        }
        self.metal_amount = metal;
        self.wood_amount = wood;
        Ok(())
    }

    /// Put a material's amount into the matching stock pile.
    pub fn add_material(&mut self, material: &Material) -> Result<(), StockError> {
        if self.total_amount() + material.amount() > self.capacity {
            return Err(StockError::CapacityExceeded {
                space: self.available_space(),
                amount: material.amount(),
            });
        }
        match material.kind() {
            MaterialKind::Metal => self.metal_amount += material.amount(),
            MaterialKind::Wood => self.wood_amount += material.amount(),
        }
        Ok(())
    }

    pub fn remove_metal(&mut self, amount: f64) -> Result<(), StockError> {
        if amount > self.metal_amount {
            return Err(StockError::InsufficientMetal {
                have: self.metal_amount,
                need: amount,
            });
        }
        self.metal_amount -= amount;
        Ok(())
    }

    pub fn remove_wood(&mut self, amount: f64) -> Result<(), StockError> {
        if amount > self.wood_amount {
            return Err(StockError::InsufficientWood {
                have: self.wood_amount,
                need: amount,
            });
        }
        self.wood_amount -= amount;
        Ok(())
    }
}

impl std::fmt::Display for Warehouse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}/{} (metal {}, wood {})",
            self.name,
            self.total_amount(),
            self.capacity,
            self.metal_amount,
            self.wood_amount
        )
    }
}
