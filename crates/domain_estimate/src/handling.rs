//! Loading/unloading methods and other extras
//!
//! Handling methods arrive either as a single selection or as a list. Both
//! shapes are normalised into a set when the request is deserialized, so
//! pricing only ever sees `BTreeSet<HandlingMethod>`.

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A loading or unloading method
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HandlingMethod {
    DriveOn,
    DriveOff,
    Forklift,
    Dock,
    Crane,
    RollOnRollOff,
    /// Anything outside the standard list, kept verbatim
    Other(String),
}

impl HandlingMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HandlingMethod::DriveOn => "DRIVE ON",
            HandlingMethod::DriveOff => "DRIVE OFF",
            HandlingMethod::Forklift => "FORKLIFT",
            HandlingMethod::Dock => "DOCK",
            HandlingMethod::Crane => "CRANE",
            HandlingMethod::RollOnRollOff => "ROLL ON / ROLL OFF",
            HandlingMethod::Other(name) => name,
        }
    }

    /// True for anything outside the standard method list
    pub fn is_non_standard(&self) -> bool {
        matches!(self, HandlingMethod::Other(_))
    }
}

impl From<String> for HandlingMethod {
    fn from(value: String) -> Self {
        match value.trim().to_uppercase().as_str() {
            "DRIVE ON" => HandlingMethod::DriveOn,
            "DRIVE OFF" => HandlingMethod::DriveOff,
            "FORKLIFT" => HandlingMethod::Forklift,
            "DOCK" => HandlingMethod::Dock,
            "CRANE" => HandlingMethod::Crane,
            "ROLL ON / ROLL OFF" => HandlingMethod::RollOnRollOff,
            _ => HandlingMethod::Other(value.trim().to_string()),
        }
    }
}

impl From<&str> for HandlingMethod {
    fn from(value: &str) -> Self {
        HandlingMethod::from(value.to_string())
    }
}

impl From<HandlingMethod> for String {
    fn from(method: HandlingMethod) -> Self {
        method.as_str().to_string()
    }
}

impl fmt::Display for HandlingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `null`, a single string, or a list of strings
fn one_or_many<'de, D>(deserializer: D) -> Result<BTreeSet<HandlingMethod>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OneOrMany;

    impl<'de> Visitor<'de> for OneOrMany {
        type Value = BTreeSet<HandlingMethod>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a handling method or a list of handling methods")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(BTreeSet::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(BTreeSet::new())
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            let mut set = BTreeSet::new();
            if !value.trim().is_empty() {
                set.insert(HandlingMethod::from(value));
            }
            Ok(set)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut set = BTreeSet::new();
            while let Some(value) = seq.next_element::<String>()? {
                if !value.trim().is_empty() {
                    set.insert(HandlingMethod::from(value));
                }
            }
            Ok(set)
        }
    }

    deserializer.deserialize_any(OneOrMany)
}

/// Extras collected on the additional-info step
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalInfo {
    #[serde(alias = "loadingMethod", deserialize_with = "one_or_many")]
    pub loading_methods: BTreeSet<HandlingMethod>,
    #[serde(alias = "unloadingMethod", deserialize_with = "one_or_many")]
    pub unloading_methods: BTreeSet<HandlingMethod>,
    pub ramps_needed: Option<bool>,
    pub handling_instructions: Option<String>,
    pub target_budget: Option<Decimal>,
    pub item_value: Option<Decimal>,
}

impl AdditionalInfo {
    pub fn ramps(&self) -> bool {
        self.ramps_needed.unwrap_or(false)
    }

    fn all_methods(&self) -> impl Iterator<Item = &HandlingMethod> {
        self.loading_methods.iter().chain(self.unloading_methods.iter())
    }

    /// Forklift requested at either end
    pub fn requests_forklift(&self) -> bool {
        self.all_methods().any(|m| *m == HandlingMethod::Forklift)
    }

    /// A non-standard method requested at either end
    pub fn requests_special_handling(&self) -> bool {
        self.all_methods().any(HandlingMethod::is_non_standard)
    }
}
