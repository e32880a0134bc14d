//! Pre-filling equipment details from the catalog

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use domain_estimate::{Dimensions, EquipmentDetails, Measurement};

use crate::catalog::EquipmentModel;

/// Converts decimal feet to feet and whole inches
///
/// Inches are rounded to the nearest inch; 12 inches carry into a foot.
/// Negative input is treated as zero.
pub fn feet_and_inches(total_feet: Decimal) -> Measurement {
    let total_feet = total_feet.max(Decimal::ZERO);
    let mut feet = total_feet.trunc().to_u32().unwrap_or(0);
    let mut inches = ((total_feet - total_feet.trunc()) * dec!(12))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0);
    if inches >= 12 {
        feet += 1;
        inches -= 12;
    }
    Measurement::new(feet, inches)
}

impl EquipmentModel {
    /// Typical dimensions of the model
    pub fn typical_dimensions(&self) -> Dimensions {
        Dimensions::new(
            feet_and_inches(self.typical_length_ft),
            feet_and_inches(self.typical_width_ft),
            feet_and_inches(self.typical_height_ft),
        )
    }

    /// Equipment details populated with this model's typical specs
    pub fn prefill(&self, year: &str) -> EquipmentDetails {
        EquipmentDetails {
            year: year.trim().to_string(),
            make: self.manufacturer_name.clone(),
            model: self.name.clone(),
            equipment_type: String::new(),
            quantity: 1,
            dimensions: Some(self.typical_dimensions()),
            weight_lbs: self.typical_weight_lbs,
        }
    }
}
