//! Geoapify address autocomplete adapter
//!
//! Calls `GET /v1/geocode/autocomplete` with `format=json` and maps each
//! result to an [`AddressSuggestion`]. GeoJSON responses (`features`) are
//! accepted as well.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error};

use core_kernel::{DomainPort, PortError};
use domain_estimate::{AddressLookup, AddressQuery, AddressSuggestion};

use crate::http::{build_client, check_status, transport_error, DEFAULT_TIMEOUT};

const SERVICE: &str = "geoapify";

/// Geoapify connection settings
#[derive(Debug, Clone)]
pub struct GeoapifyConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl GeoapifyConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://api.geoapify.com".to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Default, Deserialize)]
struct AutocompleteResponse {
    #[serde(default)]
    results: Vec<Place>,
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: Place,
}

#[derive(Debug, Deserialize)]
struct Rank {
    #[serde(default)]
    confidence: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Place {
    place_id: Option<String>,
    formatted: Option<String>,
    address_line1: Option<String>,
    address_line2: Option<String>,
    city: Option<String>,
    state: Option<String>,
    postcode: Option<String>,
    country: Option<String>,
    rank: Option<Rank>,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
    result_type: Option<String>,
}

impl Place {
    fn into_suggestion(self) -> Option<AddressSuggestion> {
        let address = self.formatted.filter(|f| !f.trim().is_empty())?;
        let id = self
            .place_id
            .unwrap_or_else(|| format!("{:.6},{:.6}", self.lat, self.lon));
        Some(AddressSuggestion {
            id,
            address,
            address_line1: self.address_line1,
            address_line2: self.address_line2,
            city: self.city,
            state: self.state,
            postcode: self.postcode,
            country: self.country,
            confidence: self.rank.and_then(|r| r.confidence).unwrap_or(0.0),
            lat: self.lat,
            lon: self.lon,
            result_type: self.result_type,
        })
    }
}

/// Address lookup backed by the Geoapify API
#[derive(Debug, Clone)]
pub struct GeoapifyAddressLookup {
    client: reqwest::Client,
    config: GeoapifyConfig,
}

impl GeoapifyAddressLookup {
    pub fn new(config: GeoapifyConfig) -> Result<Self, PortError> {
        Ok(Self {
            client: build_client(config.timeout)?,
            config,
        })
    }
}

impl DomainPort for GeoapifyAddressLookup {}

#[async_trait]
impl AddressLookup for GeoapifyAddressLookup {
    async fn suggest(&self, query: &AddressQuery) -> Result<Vec<AddressSuggestion>, PortError> {
        let url = format!("{}/v1/geocode/autocomplete", self.config.base_url.trim_end_matches('/'));
        let filter = format!("countrycode:{}", query.country_code());
        let limit = query.limit().to_string();

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .query(&[
                ("text", query.text()),
                ("filter", filter.as_str()),
                ("limit", limit.as_str()),
                ("format", "json"),
                ("apiKey", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| transport_error(SERVICE, self.config.timeout, e))?;

        let response = check_status(SERVICE, response).await.map_err(|e| {
            error!(error = %e, "Geoapify autocomplete failed");
            e
        })?;

        let body: AutocompleteResponse = response
            .json()
            .await
            .map_err(|e| transport_error(SERVICE, self.config.timeout, e))?;

        let places = body
            .results
            .into_iter()
            .chain(body.features.into_iter().map(|f| f.properties));
        let suggestions: Vec<AddressSuggestion> = places
            .filter_map(Place::into_suggestion)
            .take(query.limit() as usize)
            .collect();

        debug!(
            query = query.text(),
            country = query.country_code(),
            count = suggestions.len(),
            "Address suggestions fetched"
        );
        Ok(suggestions)
    }
}
