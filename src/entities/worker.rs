//! Worker entity - a shared, reusable member of the floor crew

use crate::entities::{require_age, require_non_empty, ValidationError};

/// A factory worker.
///
/// Workers are claimed (`is_busy = true`) for the span of a single
/// operation and released when it finishes, pass or fail. The busy flag is
/// advisory: the floor runs one operation at a time, so it models
/// real-world exclusivity rather than enforcing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Worker {
    name: String,
    age: u32,
    specialization: String,
    experience: u32,
    is_busy: bool,
}

impl Worker {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        specialization: impl Into<String>,
        experience: u32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let specialization = specialization.into();
        require_non_empty("worker name", &name)?;
        require_age(age)?;
        require_non_empty("specialization", &specialization)?;
        Ok(Self {
            name,
            age,
            specialization,
            experience,
            is_busy: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn is_busy(&self) -> bool {
        self.is_busy
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.is_busy = busy;
    }

    /// Index of the first worker not currently claimed by an operation.
    pub fn first_available(workers: &[Worker]) -> Option<usize> {
        workers.iter().position(|w| !w.is_busy)
    }

    /// Index of the first free worker with the given specialization.
    pub fn first_available_with(workers: &[Worker], specialization: &str) -> Option<usize> {
        workers
            .iter()
            .position(|w| !w.is_busy && w.specialization == specialization)
    }
}

impl std::fmt::Display for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.specialization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_fields() {
        assert!(Worker::new("", 30, "carpenter", 5).is_err());
        assert_eq!(
            Worker::new("Ann", 151, "carpenter", 5),
            Err(ValidationError::AgeOutOfRange(151))
        );
        assert!(Worker::new("Ann", 30, "", 5).is_err());
        assert!(Worker::new("Ann", 30, "carpenter", 0).is_ok());
    }

    #[test]
    fn test_workers_start_free() {
        let w = Worker::new("Ann", 30, "carpenter", 5).unwrap();
        assert!(!w.is_busy());
    }

    #[test]
    fn test_first_available_skips_busy_workers() {
        let mut a = Worker::new("Ann", 30, "carpenter", 5).unwrap();
        let b = Worker::new("Ben", 40, "assembler", 10).unwrap();
        a.set_busy(true);
        let crew = [a, b];
        assert_eq!(Worker::first_available(&crew), Some(1));
    }

    #[test]
    fn test_first_available_with_matches_specialization_exactly() {
        let crew = [
            Worker::new("Ann", 30, "carpenter", 5).unwrap(),
            Worker::new("Mary", 33, "inspector", 6).unwrap(),
        ];
        assert_eq!(Worker::first_available_with(&crew, "inspector"), Some(1));
        assert_eq!(Worker::first_available_with(&crew, "courier"), None);
    }
}
