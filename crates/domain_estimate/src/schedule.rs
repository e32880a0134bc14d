//! Pickup and delivery scheduling windows

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lenient;

const SECONDS_PER_DAY: i64 = 86_400;

/// How a date or time constraint is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateType {
    Before,
    Between,
    On,
    After,
}

/// Inclusive date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(deserialize_with = "lenient::instant")]
    pub start: DateTime<Utc>,
    #[serde(deserialize_with = "lenient::instant")]
    pub end: DateTime<Utc>,
}

/// Time-of-day range, as entered ("08:00", "17:00")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

/// One side of the schedule (pickup or delivery)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateWindow {
    pub date_type: Option<DateType>,
    /// Calendar date (`2025-03-01`, read as midnight UTC) or full timestamp
    #[serde(deserialize_with = "lenient::optional_instant")]
    pub specific_date: Option<DateTime<Utc>>,
    pub date_range: Option<DateRange>,
    pub time_type: Option<DateType>,
    pub specific_time: Option<String>,
    pub time_range: Option<TimeRange>,
}

impl DateWindow {
    /// A window pinned to a specific date
    pub fn on(date: DateTime<Utc>) -> Self {
        Self {
            date_type: Some(DateType::On),
            specific_date: Some(date),
            ..Default::default()
        }
    }
}

/// Pickup and delivery windows
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub pickup: DateWindow,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub delivery: DateWindow,
}

impl Schedule {
    pub fn new(pickup: DateWindow, delivery: DateWindow) -> Self {
        Self { pickup, delivery }
    }

    /// Whole days from pickup to delivery, rounded up
    ///
    /// Only available when both sides carry a specific date. A delivery
    /// before the pickup yields a negative count.
    pub fn days_between(&self) -> Option<i64> {
        let pickup = self.pickup.specific_date?;
        let delivery = self.delivery.specific_date?;

        let seconds = (delivery - pickup).num_seconds();
        let whole_days = seconds.div_euclid(SECONDS_PER_DAY);
        let partial = seconds.rem_euclid(SECONDS_PER_DAY) > 0;
        Some(if partial { whole_days + 1 } else { whole_days })
    }
}
