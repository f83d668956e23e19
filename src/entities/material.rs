//! Material entity - raw stock consumed by element manufacturing

use crate::entities::{require_non_empty, ValidationError};

/// Raw-material discriminant.
///
/// The warehouse tracks one aggregate quantity per kind, so every other
/// property of a material (its label, its amount) hangs off this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    Metal,
    Wood,
}

impl std::fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialKind::Metal => write!(f, "Metal"),
            MaterialKind::Wood => write!(f, "Wood"),
        }
    }
}

impl std::str::FromStr for MaterialKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metal" => Ok(MaterialKind::Metal),
            "wood" => Ok(MaterialKind::Wood),
            _ => Err(format!("Invalid material kind: {}. Use 'metal' or 'wood'", s)),
        }
    }
}

/// A quantity of one raw material, e.g. 10 units of "Oak" wood.
///
/// The amount is strictly positive for the whole life of the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    kind: MaterialKind,
    name: String,
    amount: f64,
}

impl Material {
    pub fn new(
        kind: MaterialKind,
        name: impl Into<String>,
        amount: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        require_non_empty("material name", &name)?;
        if amount <= 0.0 {
            return Err(ValidationError::NonPositive {
                field: "material amount",
                value: amount,
            });
        }
        Ok(Self { kind, name, amount })
    }

    /// Shorthand for `Material::new(MaterialKind::Metal, ..)`.
    pub fn metal(name: impl Into<String>, amount: f64) -> Result<Self, ValidationError> {
        Self::new(MaterialKind::Metal, name, amount)
    }

    /// Shorthand for `Material::new(MaterialKind::Wood, ..)`.
    pub fn wood(name: impl Into<String>, amount: f64) -> Result<Self, ValidationError> {
        Self::new(MaterialKind::Wood, name, amount)
    }

    pub fn kind(&self) -> MaterialKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Replace the amount, rejecting non-positive values.
    pub fn set_amount(&mut self, amount: f64) -> Result<(), ValidationError> {
        if amount <= 0.0 {
            return Err(ValidationError::NonPositive {
                field: "material amount",
                value: amount,
            });
        }
        self.amount = amount;
        Ok(())
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}' x {}", self.kind, self.name, self.amount)
    }
}
