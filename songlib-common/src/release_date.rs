//! Release date text format
//!
//! Release dates travel over the wire as `DD.MM.YYYY` (e.g. `16.07.2006`).
//! Storage keeps `chrono::NaiveDate`, which sqlx writes as ISO `YYYY-MM-DD`.

use chrono::NaiveDate;

use crate::{Error, Result};

/// chrono format string for `DD.MM.YYYY`
pub const RELEASE_DATE_FORMAT: &str = "%d.%m.%Y";

/// Parse a `DD.MM.YYYY` string
pub fn parse(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), RELEASE_DATE_FORMAT)
        .map_err(|_| Error::InvalidDate(raw.to_string()))
}

/// Parse a `DD.MM.YYYY` string, treating empty input as "no date"
pub fn parse_optional(raw: &str) -> Result<Option<NaiveDate>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse(raw).map(Some)
}

/// Format a date as `DD.MM.YYYY`
pub fn format(date: &NaiveDate) -> String {
    date.format(RELEASE_DATE_FORMAT).to_string()
}

/// serde adapter for `Option<NaiveDate>` fields in `DD.MM.YYYY` form.
///
/// An empty string or `null` deserializes to `None`.
pub mod optional {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&super::format(date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            Some(raw) => super::parse_optional(&raw).map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}
