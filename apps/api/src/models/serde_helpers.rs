//! Field deserializers shared by the entity models.
//!
//! Entities come from clients that write empty references as `null` and
//! dates as full timestamps. Both are accepted here so a request never fails
//! before the prompt builder sees it.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de::Error as _, Deserialize, Deserializer};

/// `null` becomes the type's default. Pair with a struct-level
/// `#[serde(default)]` so absent keys behave the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `null`, `""`, `2020-01-15`, `2020-01-15T00:00:00[.fff]` and
/// RFC 3339 timestamps. Only the calendar date is kept.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
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

    parse_date(raw)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("invalid date '{raw}'")))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
