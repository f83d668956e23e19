//! Furniture entity - the work item tracked through the pipeline

use chrono::{DateTime, Utc};

use crate::entities::{require_non_empty, Material, MaterialKind, ValidationError};

/// Production status of a furniture item.
///
/// Statuses form a straight pipeline with one designed back-edge: a failed
/// quality check demotes `Assembled` furniture to `ElementsManufactured`
/// for rework. `Stored` and `Delivered` are independent terminal states,
/// both reachable from `Packed`.
///
/// The `Display` strings are also the persisted values in the save file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FurnitureState {
    #[default]
    Created,
    MaterialsPrepared,
    ElementsManufactured,
    Assembled,
    QualityChecked,
    Packed,
    Stored,
    Delivered,
}

impl FurnitureState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FurnitureState::Stored | FurnitureState::Delivered)
    }
}

impl std::fmt::Display for FurnitureState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FurnitureState::Created => write!(f, "Created"),
            FurnitureState::MaterialsPrepared => write!(f, "Materials Prepared"),
            FurnitureState::ElementsManufactured => write!(f, "Elements Manufactured"),
            FurnitureState::Assembled => write!(f, "Assembled"),
            FurnitureState::QualityChecked => write!(f, "Quality Checked"),
            FurnitureState::Packed => write!(f, "Packed"),
            FurnitureState::Stored => write!(f, "Stored"),
            FurnitureState::Delivered => write!(f, "Delivered"),
        }
    }
}

impl std::str::FromStr for FurnitureState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Created" => Ok(FurnitureState::Created),
            "Materials Prepared" => Ok(FurnitureState::MaterialsPrepared),
            "Elements Manufactured" => Ok(FurnitureState::ElementsManufactured),
            "Assembled" => Ok(FurnitureState::Assembled),
            "Quality Checked" => Ok(FurnitureState::QualityChecked),
            "Packed" => Ok(FurnitureState::Packed),
            "Stored" => Ok(FurnitureState::Stored),
            "Delivered" => Ok(FurnitureState::Delivered),
            _ => Err(format!("Unknown furniture status: {}", s)),
        }
    }
}

/// Delivery details recorded when an item takes the `Delivered` route.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryRecord {
    pub courier: String,
    pub address: String,
    pub delivered_at: DateTime<Utc>,
}

/// A furniture item on its way through production.
///
/// The bill of materials is fixed at creation; everything else is metadata
/// that pipeline operations fill in as stages complete.
#[derive(Debug, Clone, PartialEq)]
pub struct Furniture {
    furniture_type: String,
    customer: Option<String>,
    materials: Vec<Material>,
    status: FurnitureState,
    quality_score: Option<i32>,
    defects: Vec<String>,
    inspector: Option<String>,
    quality_failed: bool,
    packing_materials: Vec<String>,
    packer: Option<String>,
    delivery_address: Option<String>,
    delivery: Option<DeliveryRecord>,
}

impl Furniture {
    pub fn new(
        furniture_type: impl Into<String>,
        materials: Vec<Material>,
    ) -> Result<Self, ValidationError> {
        let furniture_type = furniture_type.into();
        require_non_empty("furniture type", &furniture_type)?;
        Ok(Self {
            furniture_type,
            customer: None,
            materials,
            status: FurnitureState::Created,
            quality_score: None,
            defects: Vec::new(),
            inspector: None,
            quality_failed: false,
            packing_materials: Vec::new(),
            packer: None,
            delivery_address: None,
            delivery: None,
        })
    }

    pub fn furniture_type(&self) -> &str {
        &self.furniture_type
    }

    pub fn customer(&self) -> Option<&str> {
        self.customer.as_deref()
    }

    pub fn assign_customer(&mut self, name: impl Into<String>) {
        self.customer = Some(name.into());
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn status(&self) -> FurnitureState {
        self.status
    }

    /// Move to a new status. Pipeline sequencing is enforced by the
    /// operations, not here; this just records the transition.
    pub fn set_status(&mut self, status: FurnitureState) {
        self.status = status;
    }

    /// Total metal across the bill of materials.
    pub fn metal_required(&self) -> f64 {
        self.required(MaterialKind::Metal)
    }

    /// Total wood across the bill of materials.
    pub fn wood_required(&self) -> f64 {
        self.required(MaterialKind::Wood)
    }

    fn required(&self, kind: MaterialKind) -> f64 {
        self.materials
            .iter()
            .filter(|m| m.kind() == kind)
            .map(|m| m.amount())
            .sum()
    }

    pub fn quality_score(&self) -> Option<i32> {
        self.quality_score
    }

    pub fn defects(&self) -> &[String] {
        &self.defects
    }

    pub fn inspector(&self) -> Option<&str> {
        self.inspector.as_deref()
    }

    /// Whether the most recent quality check failed.
    pub fn quality_failed(&self) -> bool {
        self.quality_failed
    }

    /// Record a quality-check outcome. A failed check keeps the metadata
    /// and raises the failure marker; a later pass clears it.
    pub fn record_inspection(
        &mut self,
        score: i32,
        defects: Vec<String>,
        inspector: impl Into<String>,
        passed: bool,
    ) {
        self.quality_score = Some(score);
        self.defects = defects;
        self.inspector = Some(inspector.into());
        self.quality_failed = !passed;
    }

    pub fn packing_materials(&self) -> &[String] {
        &self.packing_materials
    }

    pub fn packer(&self) -> Option<&str> {
        self.packer.as_deref()
    }

    pub fn record_packing(&mut self, materials: Vec<String>, packer: impl Into<String>) {
        self.packing_materials = materials;
        self.packer = Some(packer.into());
    }

    pub fn delivery_address(&self) -> Option<&str> {
        self.delivery_address.as_deref()
    }

    /// Attach a delivery address ahead of the delivery stage.
    pub fn set_delivery_address(&mut self, address: impl Into<String>) {
        self.delivery_address = Some(address.into());
    }

    pub fn delivery(&self) -> Option<&DeliveryRecord> {
        self.delivery.as_ref()
    }

    pub fn record_delivery(
        &mut self,
        courier: impl Into<String>,
        address: impl Into<String>,
        delivered_at: DateTime<Utc>,
    ) {
        let address = address.into();
        self.delivery_address = Some(address.clone());
        self.delivery = Some(DeliveryRecord {
            courier: courier.into(),
            address,
            delivered_at,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chair() -> Furniture {
        Furniture::new("Chair", vec![Material::wood("Oak", 10.0).unwrap()]).unwrap()
    }

    #[test]
    fn test_furniture_starts_created() {
        assert_eq!(chair().status(), FurnitureState::Created);
    }

    #[test]
    fn test_empty_type_is_rejected() {
        assert!(Furniture::new("", vec![]).is_err());
    }

    #[test]
    fn test_requirement_sums_split_by_kind() {
        let table = Furniture::new(
            "Table",
            vec![
                Material::wood("Pine", 20.0).unwrap(),
                Material::metal("Steel", 5.0).unwrap(),
                Material::metal("Brass", 1.5).unwrap(),
            ],
        )
        .unwrap();
        assert_eq!(table.wood_required(), 20.0);
        assert_eq!(table.metal_required(), 6.5);
        assert_eq!(chair().metal_required(), 0.0);
    }

    #[test]
    fn test_status_display_round_trips() {
        for status in [
            FurnitureState::Created,
            FurnitureState::MaterialsPrepared,
            FurnitureState::ElementsManufactured,
            FurnitureState::Assembled,
            FurnitureState::QualityChecked,
            FurnitureState::Packed,
            FurnitureState::Stored,
            FurnitureState::Delivered,
        ] {
            let parsed: FurnitureState = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("In Flight".parse::<FurnitureState>().is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(FurnitureState::Stored.is_terminal());
        assert!(FurnitureState::Delivered.is_terminal());
        assert!(!FurnitureState::Packed.is_terminal());
    }

    #[test]
    fn test_inspection_failure_marker_clears_on_pass() {
        let mut item = chair();
        item.record_inspection(60, vec!["Crack".into()], "Mary", false);
        assert!(item.quality_failed());
        assert_eq!(item.quality_score(), Some(60));
        item.record_inspection(85, vec![], "Mary", true);
        assert!(!item.quality_failed());
        assert_eq!(item.quality_score(), Some(85));
    }
}
