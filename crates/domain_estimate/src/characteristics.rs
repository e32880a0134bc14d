//! Load characteristics collected alongside equipment details

use serde::{Deserialize, Serialize};

use crate::item::TransportMethod;
use crate::lenient;

/// Auxiliary flags describing an equipment load
///
/// Every field is optional: a step the customer skipped leaves it unset,
/// which prices the same as "no".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Characteristics {
    pub has_hazmat: Option<bool>,
    pub has_duals: Option<bool>,
    pub has_front_weights: Option<bool>,
    pub has_attachments: Option<bool>,
    #[serde(deserialize_with = "lenient::transport_method")]
    pub transport_method: Option<TransportMethod>,
    pub will_disassemble: Option<bool>,
    pub is_load_drivable: Option<bool>,
    pub owns_load: Option<bool>,
    pub is_contact_at_pickup: Option<bool>,
    pub is_contact_at_dropoff: Option<bool>,
}

impl Characteristics {
    pub fn hazmat(&self) -> bool {
        self.has_hazmat.unwrap_or(false)
    }

    pub fn duals(&self) -> bool {
        self.has_duals.unwrap_or(false)
    }

    pub fn attachments(&self) -> bool {
        self.has_attachments.unwrap_or(false)
    }
}
