// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while working with calendar data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A persisted date key does not describe a real calendar date.
    MalformedKey {
        /// The offending key.
        key: String,
        /// Why the key was rejected.
        reason: String,
    },
    /// A string passed where a date was expected could not be parsed.
    UnparseableDateInput {
        /// The raw input.
        input: String,
    },
    /// The year cannot be handled by the calendar rules.
    YearOutOfRange {
        /// The rejected year.
        year: i32,
    },
    /// A center's local holiday points at a month/day that does not exist.
    InvalidLocalHoliday {
        /// The center identifier.
        center: String,
        /// The zero-based month as configured.
        month: u8,
        /// The day of month as configured.
        day: u8,
    },
    /// Center identifier or name is empty or invalid.
    InvalidCenter(String),
    /// Two centers share the same identifier.
    DuplicateCenter(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedKey { key, reason } => {
                write!(f, "Malformed date key '{key}': {reason}")
            }
            Self::UnparseableDateInput { input } => {
                write!(f, "Cannot parse '{input}' as a YYYY-MM-DD date")
            }
            Self::YearOutOfRange { year } => {
                write!(f, "Year {year} is outside the supported range")
            }
            Self::InvalidLocalHoliday { center, month, day } => {
                write!(
                    f,
                    "Center '{center}' has an invalid local holiday: month {month}, day {day}"
                )
            }
            Self::InvalidCenter(msg) => write!(f, "Invalid center: {msg}"),
            Self::DuplicateCenter(id) => write!(f, "Center '{id}' is configured more than once"),
        }
    }
}

impl std::error::Error for DomainError {}
