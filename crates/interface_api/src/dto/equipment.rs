//! Equipment reference DTOs

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use domain_equipment::EquipmentModel;

#[derive(Debug, Default, Deserialize)]
pub struct ManufacturerSearch {
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct YearParams {
    #[serde(default)]
    pub year: String,
}

/// A model with numeric specs, ready for form pre-fill
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelResponse {
    pub id: String,
    pub name: String,
    pub manufacturer_id: String,
    pub manufacturer_name: String,
    pub typical_weight_lbs: f64,
    pub typical_length_ft: f64,
    pub typical_width_ft: f64,
    pub typical_height_ft: f64,
    /// `YYYY-YYYY`
    pub year_range: Option<String>,
}

impl From<&EquipmentModel> for ModelResponse {
    fn from(model: &EquipmentModel) -> Self {
        Self {
            id: model.id.clone(),
            name: model.name.clone(),
            manufacturer_id: model.manufacturer_id.clone(),
            manufacturer_name: model.manufacturer_name.clone(),
            typical_weight_lbs: model.typical_weight_lbs.to_f64().unwrap_or_default(),
            typical_length_ft: model.typical_length_ft.to_f64().unwrap_or_default(),
            typical_width_ft: model.typical_width_ft.to_f64().unwrap_or_default(),
            typical_height_ft: model.typical_height_ft.to_f64().unwrap_or_default(),
            year_range: model.year_range.map(|r| r.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearValidationResponse {
    pub model_id: String,
    pub year: String,
    pub valid: bool,
}
