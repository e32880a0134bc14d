//! Item specifications
//!
//! The wizard commits to a category when the customer picks one, so the item
//! is a tagged union: an equipment item and a freight item never coexist.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lenient;

/// Shipment category chosen on the first wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Equipment and machinery
    Equipment,
    /// General freight
    Freight,
}

impl Category {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Equipment => "Equipment",
            Category::Freight => "Freight",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the item reaches its destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMethod {
    /// Loaded onto a trailer
    Hauled,
    /// Towed behind a power unit
    Towed,
    /// Self-propelled to the destination
    Driven,
}

impl TransportMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMethod::Hauled => "hauled",
            TransportMethod::Towed => "towed",
            TransportMethod::Driven => "driven",
        }
    }
}

impl fmt::Display for TransportMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single measurement in feet and inches
///
/// Missing or `null` sub-fields default to 0. Inches are conventionally
/// 0..=11 but larger values are accepted and simply add to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Measurement {
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub feet: u32,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub inches: u32,
}

impl Measurement {
    pub fn new(feet: u32, inches: u32) -> Self {
        Self { feet, inches }
    }

    /// Total length in decimal feet (`feet + inches / 12`)
    pub fn total_feet(&self) -> Decimal {
        Decimal::from(self.feet) + Decimal::from(self.inches) / dec!(12)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{}\"", self.feet, self.inches)
    }
}

/// Length, width and height of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub length: Measurement,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub width: Measurement,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub height: Measurement,
}

impl Dimensions {
    pub fn new(length: Measurement, width: Measurement, height: Measurement) -> Self {
        Self { length, width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {} × {}", self.length, self.width, self.height)
    }
}

fn default_quantity() -> u32 {
    1
}

// `null` and `""` read as the neutral default on every field below.

/// Equipment or machinery being shipped
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentDetails {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub year: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub make: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub model: String,
    #[serde(default, rename = "type", deserialize_with = "lenient::null_as_default")]
    pub equipment_type: String,
    #[serde(default = "default_quantity", deserialize_with = "lenient::quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default, deserialize_with = "lenient::weight")]
    pub weight_lbs: Decimal,
}

/// General freight being shipped
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreightDetails {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub shipping_item: String,
    #[serde(default = "default_quantity", deserialize_with = "lenient::quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default, deserialize_with = "lenient::weight")]
    pub weight_lbs: Decimal,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub has_hazmat_placards: bool,
    #[serde(default, deserialize_with = "lenient::transport_method")]
    pub transportation_method: Option<TransportMethod>,
}

/// The item being shipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemSpecification {
    Equipment(EquipmentDetails),
    Freight(FreightDetails),
}

impl ItemSpecification {
    /// Category this item belongs to
    pub fn category(&self) -> Category {
        match self {
            ItemSpecification::Equipment(_) => Category::Equipment,
            ItemSpecification::Freight(_) => Category::Freight,
        }
    }

    /// Whether the item carries enough data to be priced
    ///
    /// Equipment needs a make or a model; freight needs a shipping item name
    /// or a positive weight.
    pub fn has_identifying_data(&self) -> bool {
        match self {
            ItemSpecification::Equipment(eq) => {
                !eq.make.trim().is_empty() || !eq.model.trim().is_empty()
            }
            ItemSpecification::Freight(fr) => {
                !fr.shipping_item.trim().is_empty() || fr.weight_lbs > Decimal::ZERO
            }
        }
    }

    pub fn weight_lbs(&self) -> Decimal {
        match self {
            ItemSpecification::Equipment(eq) => eq.weight_lbs,
            ItemSpecification::Freight(fr) => fr.weight_lbs,
        }
    }

    pub fn quantity(&self) -> u32 {
        match self {
            ItemSpecification::Equipment(eq) => eq.quantity,
            ItemSpecification::Freight(fr) => fr.quantity,
        }
    }

    pub fn dimensions(&self) -> Option<&Dimensions> {
        match self {
            ItemSpecification::Equipment(eq) => eq.dimensions.as_ref(),
            ItemSpecification::Freight(fr) => fr.dimensions.as_ref(),
        }
    }

    /// Hazmat placards declared on a freight item; always false for equipment
    pub fn has_hazmat_placards(&self) -> bool {
        match self {
            ItemSpecification::Equipment(_) => false,
            ItemSpecification::Freight(fr) => fr.has_hazmat_placards,
        }
    }

    /// Transport method declared on a freight item
    pub fn transport_method(&self) -> Option<TransportMethod> {
        match self {
            ItemSpecification::Equipment(_) => None,
            ItemSpecification::Freight(fr) => fr.transportation_method,
        }
    }

    /// Short description used in messages: "Make Model", the shipping item, or "Item"
    pub fn summary_label(&self) -> String {
        match self {
            ItemSpecification::Equipment(eq)
                if !eq.make.trim().is_empty() && !eq.model.trim().is_empty() =>
            {
                format!("{} {}", eq.make.trim(), eq.model.trim())
            }
            ItemSpecification::Freight(fr) if !fr.shipping_item.trim().is_empty() => {
                fr.shipping_item.trim().to_string()
            }
            _ => "Item".to_string(),
        }
    }
}
