//! Address autocomplete DTOs

use serde::{Deserialize, Serialize};

use domain_estimate::AddressSuggestion;

#[derive(Debug, Default, Deserialize)]
pub struct AutocompleteParams {
    pub q: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AutocompleteResponse {
    pub suggestions: Vec<AddressSuggestion>,
    pub query: String,
    pub country: String,
}
