//! Tool entity - a shared implement that wears out with use

use thiserror::Error;

use crate::entities::{require_non_empty, ValidationError};

/// Durability a tool comes back with after a full repair.
pub const FULL_DURABILITY: i32 = 100;

/// Errors from working with a worn-out tool.
#[derive(Debug, Error, PartialEq)]
pub enum ToolError {
    #[error("tool '{name}' is broken")]
    Broken { name: String },
}

/// A floor tool with a wear counter.
///
/// Durability only goes down through [`Tool::use_once`] and only goes up
/// through the repair methods. A tool with durability at or below zero is
/// broken and refuses further use.
#[derive(Debug, Clone, PartialEq)]
pub struct Tool {
    name: String,
    durability: i32,
}

impl Tool {
    pub fn new(name: impl Into<String>, durability: i32) -> Result<Self, ValidationError> {
        let name = name.into();
        require_non_empty("tool name", &name)?;
        if durability <= 0 {
            return Err(ValidationError::NonPositive {
                field: "tool durability",
                value: durability as f64,
            });
        }
        Ok(Self { name, durability })
    }

    /// Rebuild a tool from persisted state, where zero or negative
    /// durability is legitimate (the tool broke in a previous session).
    pub fn with_wear(name: impl Into<String>, durability: i32) -> Result<Self, ValidationError> {
        let name = name.into();
        require_non_empty("tool name", &name)?;
        Ok(Self { name, durability })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn durability(&self) -> i32 {
        self.durability
    }

    pub fn is_broken(&self) -> bool {
        self.durability <= 0
    }

    /// Consume one use of the tool. The tool may break as a result; that is
    /// not an error, but using it again afterwards is.
    pub fn use_once(&mut self) -> Result<(), ToolError> {
        if self.is_broken() {
            return Err(ToolError::Broken {
                name: self.name.clone(),
            });
        }
        self.durability -= 1;
        Ok(())
    }

    /// Restore the tool to [`FULL_DURABILITY`].
    pub fn repair(&mut self) {
        self.durability = FULL_DURABILITY;
    }

    /// Add exactly `amount` durability.
    pub fn repair_by(&mut self, amount: i32) -> Result<(), ValidationError> {
        if amount <= 0 {
            return Err(ValidationError::NonPositive {
                field: "repair amount",
                value: amount as f64,
            });
        }
        self.durability += amount;
        Ok(())
    }

    /// Index of the first tool in `tools` that is still usable.
    pub fn first_usable(tools: &[Tool]) -> Option<usize> {
        tools.iter().position(|t| !t.is_broken())
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_broken() {
            write!(f, "Tool: {} [BROKEN]", self.name)
        } else {
            write!(f, "Tool: {} [durability: {}]", self.name, self.durability)
        }
    }
}
