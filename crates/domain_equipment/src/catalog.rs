//! Equipment catalog
//!
//! Loaded from a CSV with the header
//! `year_range,make,model,weight_lbs,length_ft,width_ft,height_ft`.
//! Manufacturer ids are slugs of the make; model ids join the make and
//! model slugs, e.g. `john-deere-333g`.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::CatalogError;

const BUILTIN_CATALOG: &str = include_str!("../data/equipment_specs.csv");
const COLUMNS: usize = 7;

/// Lower-cases a name and turns whitespace into dashes
pub fn slug(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

/// Inclusive production-year range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    pub start: u16,
    pub end: u16,
}

impl YearRange {
    pub fn contains(&self, year: u16) -> bool {
        (self.start..=self.end).contains(&year)
    }
}

impl FromStr for YearRange {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CatalogError::InvalidYearRange(s.to_string());
        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        let start: u16 = start.trim().parse().map_err(|_| invalid())?;
        let end: u16 = end.trim().parse().map_err(|_| invalid())?;
        if start > end {
            return Err(invalid());
        }
        Ok(Self { start, end })
    }
}

impl std::fmt::Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// An equipment manufacturer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manufacturer {
    pub id: String,
    pub name: String,
}

/// A catalogued model with its typical specifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentModel {
    pub id: String,
    pub name: String,
    pub manufacturer_id: String,
    pub manufacturer_name: String,
    pub typical_weight_lbs: Decimal,
    pub typical_length_ft: Decimal,
    pub typical_width_ft: Decimal,
    pub typical_height_ft: Decimal,
    pub year_range: Option<YearRange>,
}

impl EquipmentModel {
    /// Whether the model was produced in the given year
    ///
    /// A blank year, or a model without a known range, is always accepted.
    /// A year that is not a number is rejected.
    pub fn accepts_year(&self, year: &str) -> bool {
        let year = year.trim();
        let Some(range) = self.year_range else {
            return true;
        };
        if year.is_empty() {
            return true;
        }
        year.parse::<u16>().map(|y| range.contains(y)).unwrap_or(false)
    }
}

/// In-memory catalog of manufacturers and models
#[derive(Debug, Clone, Default)]
pub struct EquipmentCatalog {
    manufacturers: Vec<Manufacturer>,
    models: Vec<EquipmentModel>,
}

impl EquipmentCatalog {
    /// The catalog shipped with the crate
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_csv(BUILTIN_CATALOG)
    }

    /// Loads a catalog file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_csv(&text)
    }

    /// Parses catalog CSV text
    ///
    /// The first line is a header. Blank lines are skipped. Rows whose model
    /// id repeats an earlier row are dropped with a warning.
    pub fn from_csv(text: &str) -> Result<Self, CatalogError> {
        let mut manufacturers: BTreeMap<String, Manufacturer> = BTreeMap::new();
        let mut models: Vec<EquipmentModel> = Vec::new();

        for (index, line) in text.lines().enumerate().skip(1) {
            let line_no = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            let model = parse_row(line_no, line)?;
            if models.iter().any(|m| m.id == model.id) {
                warn!(line = line_no, model_id = %model.id, "Duplicate catalog model skipped");
                continue;
            }

            manufacturers
                .entry(model.manufacturer_name.clone())
                .or_insert_with(|| Manufacturer {
                    id: model.manufacturer_id.clone(),
                    name: model.manufacturer_name.clone(),
                });
            models.push(model);
        }

        debug!(
            manufacturers = manufacturers.len(),
            models = models.len(),
            "Equipment catalog loaded"
        );

        Ok(Self {
            manufacturers: manufacturers.into_values().collect(),
            models,
        })
    }

    /// All manufacturers, sorted by name
    pub fn manufacturers(&self) -> &[Manufacturer] {
        &self.manufacturers
    }

    pub fn manufacturer(&self, id: &str) -> Option<&Manufacturer> {
        self.manufacturers.iter().find(|m| m.id == id)
    }

    /// Manufacturers whose name contains the term, case-insensitively
    pub fn search_manufacturers(&self, term: &str) -> Vec<&Manufacturer> {
        let needle = term.trim().to_lowercase();
        self.manufacturers
            .iter()
            .filter(|m| m.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Models made by a manufacturer, in catalog order
    pub fn models_by_manufacturer(&self, manufacturer_id: &str) -> Result<Vec<&EquipmentModel>, CatalogError> {
        if self.manufacturer(manufacturer_id).is_none() {
            return Err(CatalogError::UnknownManufacturer(manufacturer_id.to_string()));
        }
        Ok(self
            .models
            .iter()
            .filter(|m| m.manufacturer_id == manufacturer_id)
            .collect())
    }

    pub fn model(&self, model_id: &str) -> Result<&EquipmentModel, CatalogError> {
        self.models
            .iter()
            .find(|m| m.id == model_id)
            .ok_or_else(|| CatalogError::UnknownModel(model_id.to_string()))
    }

    /// Checks a year against a model's production range
    pub fn validate_year(&self, model_id: &str, year: &str) -> Result<bool, CatalogError> {
        Ok(self.model(model_id)?.accepts_year(year))
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

fn parse_row(line: usize, text: &str) -> Result<EquipmentModel, CatalogError> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    if fields.len() != COLUMNS {
        return Err(CatalogError::Parse {
            line,
            reason: format!("expected {} columns, found {}", COLUMNS, fields.len()),
        });
    }

    let number = |column: usize, name: &str| -> Result<Decimal, CatalogError> {
        Decimal::from_str(fields[column]).map_err(|_| CatalogError::Parse {
            line,
            reason: format!("{} is not a number: {:?}", name, fields[column]),
        })
    };

    let make = fields[1];
    let model = fields[2];
    if make.is_empty() || model.is_empty() {
        return Err(CatalogError::Parse {
            line,
            reason: "make and model are required".to_string(),
        });
    }

    let year_range = if fields[0].is_empty() {
        None
    } else {
        Some(fields[0].parse::<YearRange>().map_err(|e| CatalogError::Parse {
            line,
            reason: e.to_string(),
        })?)
    };

    let manufacturer_id = slug(make);
    Ok(EquipmentModel {
        id: format!("{}-{}", manufacturer_id, slug(model)),
        name: model.to_string(),
        manufacturer_id,
        manufacturer_name: make.to_string(),
        typical_weight_lbs: number(3, "weight_lbs")?,
        typical_length_ft: number(4, "length_ft")?,
        typical_width_ft: number(5, "width_ft")?,
        typical_height_ft: number(6, "height_ft")?,
        year_range,
    })
}
