// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date key codec.
//!
//! A date key is the canonical `YYYY-MM-DD` string used as a document-map
//! key for holiday and vacation records. Keys sort lexicographically in
//! calendar order.
//!
//! Decoding is tolerant: a malformed key produces `None` (or a
//! `DomainError::MalformedKey` from the checked variant) so that a single
//! bad record never aborts processing of a larger map.

use crate::error::DomainError;
use time::{Date, Month};

/// Encodes a date as a `YYYY-MM-DD` key.
///
/// Month and day are zero-padded to two digits. Only the calendar fields
/// of the date are used; there is no timezone conversion.
#[must_use]
pub fn encode_date_key(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Decodes a `YYYY-MM-DD` key, returning `None` for anything malformed.
#[must_use]
pub fn decode_date_key(key: &str) -> Option<Date> {
    parse_date_key(key).ok()
}

/// Decodes a `YYYY-MM-DD` key.
///
/// The key is split on `-` and needs at least three parts. Every part must
/// be a non-empty run of ASCII digits. The first three parts are read as
/// year, month (1-12) and day.
///
/// # Errors
///
/// Returns `DomainError::MalformedKey` if:
/// - There are fewer than three parts
/// - A part is empty or not numeric
/// - The parts do not name a real calendar date (e.g. day 32, month 13)
pub fn parse_date_key(key: &str) -> Result<Date, DomainError> {
    let malformed = |reason: &str| DomainError::MalformedKey {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = key.split('-').collect();
    if parts.len() < 3 {
        return Err(malformed("expected YYYY-MM-DD"));
    }

    if parts
        .iter()
        .any(|part| part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(malformed("non-numeric component"));
    }

    let year: i32 = parts[0]
        .parse()
        .map_err(|_| malformed("year out of range"))?;
    let month_number: u8 = parts[1]
        .parse()
        .map_err(|_| malformed("month out of range"))?;
    let day: u8 = parts[2]
        .parse()
        .map_err(|_| malformed("day out of range"))?;

    let month: Month =
        Month::try_from(month_number).map_err(|_| malformed("month out of range"))?;

    Date::from_calendar_date(year, month, day).map_err(|_| malformed("not a calendar date"))
}

/// Serde adapter that reads and writes a `Date` as a date key.
///
/// Use with `#[serde(with = "gymdesk_domain::serde_date")]`.
pub mod serde_date {
    use super::{encode_date_key, parse_date_key};
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    /// Serializes a date as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode_date_key(*date))
    }

    /// Deserializes a `YYYY-MM-DD` string into a date.
    ///
    /// # Errors
    ///
    /// Fails if the string is not a valid date key.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: String = String::deserialize(deserializer)?;
        parse_date_key(&raw).map_err(serde::de::Error::custom)
    }
}
