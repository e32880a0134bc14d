//! Equipment lookup port
//!
//! The HTTP layer reads reference data through [`EquipmentLookup`] so a
//! hosted data store can replace the in-memory catalog.

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::catalog::{EquipmentCatalog, EquipmentModel, Manufacturer};
use crate::error::CatalogError;

/// Read access to equipment reference data
#[async_trait]
pub trait EquipmentLookup: DomainPort {
    /// Manufacturers sorted by name, optionally filtered by a search term
    async fn manufacturers(&self, search: Option<&str>) -> Result<Vec<Manufacturer>, PortError>;

    /// Models of one manufacturer
    async fn models(&self, manufacturer_id: &str) -> Result<Vec<EquipmentModel>, PortError>;

    /// A single model
    async fn model(&self, model_id: &str) -> Result<EquipmentModel, PortError>;

    /// Whether the model was produced in the given year
    async fn validate_year(&self, model_id: &str, year: &str) -> Result<bool, PortError>;
}

impl From<CatalogError> for PortError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownModel(id) => PortError::not_found("EquipmentModel", id),
            CatalogError::UnknownManufacturer(id) => PortError::not_found("Manufacturer", id),
            CatalogError::InvalidYearRange(range) => PortError::validation(format!("Invalid year range: {}", range)),
            other => PortError::internal(other.to_string()),
        }
    }
}

impl DomainPort for EquipmentCatalog {}

#[async_trait]
impl EquipmentLookup for EquipmentCatalog {
    async fn manufacturers(&self, search: Option<&str>) -> Result<Vec<Manufacturer>, PortError> {
        let found = match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => self.search_manufacturers(term).into_iter().cloned().collect(),
            None => self.manufacturers().to_vec(),
        };
        Ok(found)
    }

    async fn models(&self, manufacturer_id: &str) -> Result<Vec<EquipmentModel>, PortError> {
        Ok(self
            .models_by_manufacturer(manufacturer_id)?
            .into_iter()
            .cloned()
            .collect())
    }

    async fn model(&self, model_id: &str) -> Result<EquipmentModel, PortError> {
        Ok(EquipmentCatalog::model(self, model_id)?.clone())
    }

    async fn validate_year(&self, model_id: &str, year: &str) -> Result<bool, PortError> {
        Ok(EquipmentCatalog::validate_year(self, model_id, year)?)
    }
}
