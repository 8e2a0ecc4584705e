// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gymdesk_domain::DomainError;
use time::Date;

/// Errors that can occur during calendar transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The date is not inside the calendar's work year.
    DateOutsideWorkYear {
        /// The rejected date.
        date: Date,
        /// The calendar's fiscal year.
        fiscal_year: i32,
    },
    /// The calendar has no entry for the date.
    DayNotFound {
        /// The requested date.
        date: Date,
    },
    /// Adding the day would exceed the member's vacation allotment.
    VacationAllotmentExceeded {
        /// Days granted for the fiscal year.
        allotted_days: u16,
    },
    /// The command does not apply to this kind of calendar.
    WrongScope {
        /// The command name.
        command: &'static str,
        /// The calendar's document id.
        document_id: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::DateOutsideWorkYear { date, fiscal_year } => {
                write!(f, "{date} is outside fiscal year {fiscal_year}")
            }
            Self::DayNotFound { date } => write!(f, "No entry for {date}"),
            Self::VacationAllotmentExceeded { allotted_days } => {
                write!(
                    f,
                    "Vacation allotment of {allotted_days} days is already used up"
                )
            }
            Self::WrongScope {
                command,
                document_id,
            } => {
                write!(f, "{command} cannot be applied to '{document_id}'")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
