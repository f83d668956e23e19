//! Orderable furniture catalog with fixed bills of materials

use crate::entities::{Material, ValidationError};

/// The furniture types customers can order, each with its fixed bill of
/// materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogItem {
    Chair,
    Table,
    Wardrobe,
}

impl CatalogItem {
    pub const ALL: [CatalogItem; 3] = [CatalogItem::Chair, CatalogItem::Table, CatalogItem::Wardrobe];

    /// Capitalized type name used on furniture records.
    pub fn type_name(&self) -> &'static str {
        match self {
            CatalogItem::Chair => "Chair",
            CatalogItem::Table => "Table",
            CatalogItem::Wardrobe => "Wardrobe",
        }
    }

    /// Materials consumed to build one item.
    pub fn bill_of_materials(&self) -> Result<Vec<Material>, ValidationError> {
        match self {
            CatalogItem::Chair => Ok(vec![Material::wood("Oak", 10.0)?]),
            CatalogItem::Table => Ok(vec![
                Material::wood("Pine", 20.0)?,
                Material::metal("Steel", 5.0)?,
            ]),
            CatalogItem::Wardrobe => Ok(vec![
                Material::wood("Oak", 30.0)?,
                Material::metal("Steel", 8.0)?,
            ]),
        }
    }

    /// One-line summary for menus.
    pub fn describe(&self) -> &'static str {
        match self {
            CatalogItem::Chair => "chair    - 10 wood",
            CatalogItem::Table => "table    - 20 wood, 5 metal",
            CatalogItem::Wardrobe => "wardrobe - 30 wood, 8 metal",
        }
    }
}

impl std::fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogItem::Chair => write!(f, "chair"),
            CatalogItem::Table => write!(f, "table"),
            CatalogItem::Wardrobe => write!(f, "wardrobe"),
        }
    }
}

impl std::str::FromStr for CatalogItem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chair" => Ok(CatalogItem::Chair),
            "table" => Ok(CatalogItem::Table),
            "wardrobe" => Ok(CatalogItem::Wardrobe),
            _ => Err(format!(
                "Unknown furniture type: {}. Use chair, table, or wardrobe",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bills_of_materials_match_the_catalog() {
        let chair = CatalogItem::Chair.bill_of_materials().unwrap();
        assert_eq!(chair.len(), 1);
        assert_eq!(chair[0].amount(), 10.0);

        let wardrobe = CatalogItem::Wardrobe.bill_of_materials().unwrap();
        assert_eq!(wardrobe.iter().map(|m| m.amount()).sum::<f64>(), 38.0);
    }

    #[test]
    fn test_parse_accepts_any_case() {
        assert_eq!("Table".parse::<CatalogItem>().unwrap(), CatalogItem::Table);
        assert!("bench".parse::<CatalogItem>().is_err());
    }
}
