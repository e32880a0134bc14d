//! Pickup and dropoff locations, and the address-suggestion port
//!
//! Address suggestions only enrich `LocationInfo` before pricing; the
//! calculator itself reads nothing but the address type.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use core_kernel::{DomainPort, PortError};

use crate::lenient;

/// Kind of site at a pickup or dropoff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    /// Not chosen yet
    #[default]
    #[serde(rename = "")]
    Unspecified,
    Business,
    Residential,
    Port,
}

/// An address entered in the wizard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationInfo {
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub address_type: AddressType,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub is_verified: bool,
}

impl LocationInfo {
    pub fn new(address: impl Into<String>, address_type: AddressType) -> Self {
        Self {
            address: address.into(),
            address_type,
            is_verified: false,
        }
    }

    /// Text before the first comma of the address, if any
    pub fn city(&self) -> Option<&str> {
        self.address
            .split(',')
            .next()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }

    /// The address, or `None` when nothing was entered
    pub fn address_text(&self) -> Option<&str> {
        let trimmed = self.address.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Pickup and dropoff pair
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Locations {
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub pickup: LocationInfo,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub dropoff: LocationInfo,
}

impl Locations {
    pub fn new(pickup: LocationInfo, dropoff: LocationInfo) -> Self {
        Self { pickup, dropoff }
    }

    /// True if either end is of the given type
    pub fn either_is(&self, address_type: AddressType) -> bool {
        self.pickup.address_type == address_type || self.dropoff.address_type == address_type
    }
}

/// Queries shorter than this (after trimming) return no suggestions
pub const MIN_QUERY_CHARS: usize = 2;

/// Country searched when the caller names none
pub const DEFAULT_COUNTRY_CODE: &str = "us";

/// Upper bound on suggestions returned per query
pub const MAX_SUGGESTIONS: u32 = 8;

/// A validated address-autocomplete query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressQuery {
    text: String,
    country_code: String,
    limit: u32,
}

impl AddressQuery {
    /// Builds a query, or `None` when the text is too short to look up
    pub fn parse(text: &str, country_code: Option<&str>) -> Option<Self> {
        let text = text.trim();
        if text.chars().count() < MIN_QUERY_CHARS {
            return None;
        }

        let country_code = country_code
            .map(str::trim)
            .filter(|cc| !cc.is_empty())
            .unwrap_or(DEFAULT_COUNTRY_CODE)
            .to_lowercase();

        Some(Self {
            text: text.to_string(),
            country_code,
            limit: MAX_SUGGESTIONS,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

/// A ranked address suggestion from a geocoding provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressSuggestion {
    pub id: String,
    pub address: String,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub confidence: f64,
    pub lat: f64,
    pub lon: f64,
    pub result_type: Option<String>,
}

/// Port for address autocomplete providers
#[async_trait]
pub trait AddressLookup: DomainPort {
    /// Returns suggestions for the query, best match first
    async fn suggest(&self, query: &AddressQuery) -> Result<Vec<AddressSuggestion>, PortError>;
}
