//! Forgiving field deserializers for wizard payloads
//!
//! Wizard forms send `null` for untouched inputs and `""` for cleared ones.
//! Both read as the field's neutral default instead of failing the request.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::item::TransportMethod;

/// `null` reads as `T::default()`
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Quantity of at least one item; `null` reads as 1
pub(crate) fn quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(1))
}

/// A weight given as a number, a numeric string, blank or `null`
///
/// Blank, `null` and unreadable text all read as zero pounds.
pub(crate) fn weight<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    struct WeightVisitor;

    impl<'de> Visitor<'de> for WeightVisitor {
        type Value = Decimal;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a weight in pounds")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Decimal, E> {
            Ok(Decimal::ZERO)
        }

        fn visit_none<E: de::Error>(self) -> Result<Decimal, E> {
            Ok(Decimal::ZERO)
        }

        fn visit_some<D2: Deserializer<'de>>(self, deserializer: D2) -> Result<Decimal, D2::Error> {
            deserializer.deserialize_any(self)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
            Ok(Decimal::from(value))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
            Ok(Decimal::from(value))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Decimal, E> {
            Ok(Decimal::from_f64(value).unwrap_or(Decimal::ZERO))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Decimal, E> {
            let value = value.trim();
            Ok(Decimal::from_str(value)
                .or_else(|_| Decimal::from_scientific(value))
                .unwrap_or(Decimal::ZERO))
        }
    }

    deserializer.deserialize_any(WeightVisitor)
}

/// A transport method, with `null` and `""` meaning none was chosen
pub(crate) fn transport_method<'de, D>(deserializer: D) -> Result<Option<TransportMethod>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match raw.trim().to_lowercase().as_str() {
        "" => Ok(None),
        "hauled" => Ok(Some(TransportMethod::Hauled)),
        "towed" => Ok(Some(TransportMethod::Towed)),
        "driven" => Ok(Some(TransportMethod::Driven)),
        other => Err(de::Error::unknown_variant(other, &["hauled", "towed", "driven"])),
    }
}

/// Parses an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC)
fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

/// An optional calendar date or timestamp; blank reads as `None`
pub(crate) fn optional_instant<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    parse_instant(raw)
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("invalid date: {raw}")))
}

/// A required calendar date or timestamp
pub(crate) fn instant<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_instant(raw.trim()).ok_or_else(|| de::Error::custom(format!("invalid date: {raw}")))
}
