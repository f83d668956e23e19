//! Workshop entity - terminal store for furniture that left the pipeline

use crate::entities::{require_non_empty, ValidationError};

/// Append-only record of completed furniture.
///
/// The workshop holds indices into the floor's furniture list rather than
/// copies; nothing is ever removed in the core flow.
#[derive(Debug, Clone, PartialEq)]
pub struct Workshop {
    name: String,
    completed: Vec<usize>,
}

impl Workshop {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        require_non_empty("workshop name", &name)?;
        Ok(Self {
            name,
            completed: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Indices of completed furniture, in completion order.
    pub fn completed(&self) -> &[usize] {
        &self.completed
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn add_completed(&mut self, furniture_index: usize) {
        self.completed.push(furniture_index);
    }
}
