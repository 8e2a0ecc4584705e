// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dated records and their persisted map form.
//!
//! The record store keeps holidays and vacations as a map of date key to
//! reason. These helpers convert between that map and an ordered list of
//! [`DatedReason`] values.

use crate::date_key::{decode_date_key, encode_date_key, serde_date};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use time::Date;
use tracing::debug;

/// Persisted form of a calendar: date key to reason.
///
/// Keys are plain strings because stored data may contain keys that do
/// not decode.
pub type DateReasonMap = BTreeMap<String, String>;

/// One holiday or vacation day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatedReason {
    /// The calendar day.
    #[serde(with = "serde_date")]
    pub date: Date,
    /// Free-text reason. May be empty and is never normalized.
    pub reason: String,
}

impl DatedReason {
    /// Creates a new `DatedReason`.
    #[must_use]
    pub fn new(date: Date, reason: &str) -> Self {
        Self {
            date,
            reason: reason.to_string(),
        }
    }

    /// Returns the date key for this record.
    #[must_use]
    pub fn key(&self) -> String {
        encode_date_key(self.date)
    }
}

/// Converts records into the persisted map form.
///
/// If two records share a date the later one wins, as it would when
/// written to the store one by one.
#[must_use]
pub fn to_map_form(records: &[DatedReason]) -> DateReasonMap {
    records
        .iter()
        .map(|record| (record.key(), record.reason.clone()))
        .collect()
}

/// Rebuilds records from the persisted map form.
///
/// Keys that do not decode are skipped. Keys that are not zero-padded
/// (`"2024-2-9"`) still decode, so a map can hold more than one key for the
/// same date; only one record per date is returned, taken from the
/// canonical key when present and otherwise from the first key in map
/// order. The result is ascending by date.
#[must_use]
pub fn from_map_form(map: &DateReasonMap) -> Vec<DatedReason> {
    let mut by_date: BTreeMap<Date, (&str, &str)> = BTreeMap::new();

    for (key, reason) in map {
        let Some(date) = decode_date_key(key) else {
            debug!(key = %key, "Skipping undecodable date key");
            continue;
        };
        match by_date.entry(date) {
            Entry::Vacant(slot) => {
                slot.insert((key, reason));
            }
            Entry::Occupied(mut slot) => {
                let (kept, _) = *slot.get();
                if *key == encode_date_key(date) {
                    debug!(dropped = %kept, kept = %key, "Duplicate date key");
                    slot.insert((key, reason));
                } else {
                    debug!(dropped = %key, kept = %kept, "Duplicate date key");
                }
            }
        }
    }

    by_date
        .into_iter()
        .map(|(date, (_, reason))| DatedReason::new(date, reason))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_to_map_form_single_record() {
        let records: Vec<DatedReason> = vec![DatedReason::new(date!(2024 - 03 - 31), "Pasqua")];
        let map: DateReasonMap = to_map_form(&records);

        let mut expected: DateReasonMap = DateReasonMap::new();
        expected.insert(String::from("2024-03-31"), String::from("Pasqua"));
        assert_eq!(map, expected);

        assert_eq!(from_map_form(&map), records);
    }

    #[test]
    fn test_from_map_form_skips_malformed_keys() {
        let mut map: DateReasonMap = DateReasonMap::new();
        map.insert(String::from("2024-12-25"), String::from("Nadal"));
        map.insert(String::from("not-a-date"), String::from("junk"));
        map.insert(String::from("2024-02-30"), String::from("impossible"));
        map.insert(String::from("2024"), String::from("short"));

        let records: Vec<DatedReason> = from_map_form(&map);
        assert_eq!(
            records,
            vec![DatedReason::new(date!(2024 - 12 - 25), "Nadal")]
        );
    }

    #[test]
    fn test_from_map_form_sorts_by_date() {
        let mut map: DateReasonMap = DateReasonMap::new();
        map.insert(String::from("2024-10-01"), String::from("b"));
        map.insert(String::from("2024-2-9"), String::from("a"));
        map.insert(String::from("2025-01-06"), String::from("c"));

        let dates: Vec<Date> = from_map_form(&map).iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![
                date!(2024 - 02 - 09),
                date!(2024 - 10 - 01),
                date!(2025 - 01 - 06)
            ]
        );
    }

    #[test]
    fn test_from_map_form_keeps_one_record_per_date() {
        let mut map: DateReasonMap = DateReasonMap::new();
        // "02024-02-09" sorts before the canonical key
        map.insert(String::from("02024-02-09"), String::from("padded year"));
        map.insert(String::from("2024-2-9"), String::from("short"));
        map.insert(String::from("2024-02-09"), String::from("canonical"));
        // Neither key is canonical, so map order decides
        map.insert(String::from("2024-7-01"), String::from("later"));
        map.insert(String::from("2024-07-1"), String::from("earlier"));

        let records: Vec<DatedReason> = from_map_form(&map);
        assert_eq!(
            records,
            vec![
                DatedReason::new(date!(2024 - 02 - 09), "canonical"),
                DatedReason::new(date!(2024 - 07 - 01), "earlier"),
            ]
        );
    }

    #[test]
    fn test_empty_reason_is_preserved() {
        let records: Vec<DatedReason> = vec![DatedReason::new(date!(2024 - 05 - 02), "")];
        let map: DateReasonMap = to_map_form(&records);
        assert_eq!(map.get("2024-05-02").map(String::as_str), Some(""));
        assert_eq!(from_map_form(&map), records);
    }

    #[test]
    fn test_reason_is_not_normalized() {
        let records: Vec<DatedReason> =
            vec![DatedReason::new(date!(2024 - 05 - 02), "  Pont de Maig ")];
        assert_eq!(from_map_form(&to_map_form(&records)), records);
    }

    #[test]
    fn test_dated_reason_serializes_date_as_key() {
        let record: DatedReason = DatedReason::new(date!(2025 - 01 - 01), "Any Nou");
        let json: String = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"date":"2025-01-01","reason":"Any Nou"}"#);
    }
}
