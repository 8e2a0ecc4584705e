// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gymdesk_domain::{
    DateReasonMap, DatedReason, DomainError, VacationBalance, WorkYear,
    calculate_vacation_balance, decode_date_key, encode_date_key, filter_by_fiscal_year,
    from_map_form, work_year_window,
};
use serde::{Deserialize, Serialize};
use time::Date;

/// Which calendar a state belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scope {
    /// The shared holiday calendar of one fiscal year.
    Holidays {
        /// The fiscal year.
        fiscal_year: i32,
    },
    /// One member's vacation calendar for one fiscal year.
    Vacations {
        /// The fiscal year.
        fiscal_year: i32,
        /// The member identifier.
        member: String,
    },
}

impl Scope {
    /// Returns the fiscal year of the calendar.
    #[must_use]
    pub const fn fiscal_year(&self) -> i32 {
        match self {
            Self::Holidays { fiscal_year } | Self::Vacations { fiscal_year, .. } => *fiscal_year,
        }
    }

    /// Returns the store document id: `holidays/<year>` or
    /// `vacations/<year>/<member>`.
    #[must_use]
    pub fn document_id(&self) -> String {
        match self {
            Self::Holidays { fiscal_year } => format!("holidays/{fiscal_year}"),
            Self::Vacations {
                fiscal_year,
                member,
            } => format!("vacations/{fiscal_year}/{member}"),
        }
    }

    /// Parses a store document id back into a scope.
    ///
    /// Returns `None` for ids that were not produced by [`Scope::document_id`].
    #[must_use]
    pub fn from_document_id(document_id: &str) -> Option<Self> {
        let mut parts = document_id.splitn(3, '/');
        let kind: &str = parts.next()?;
        let fiscal_year: i32 = parts.next()?.parse().ok()?;
        match (kind, parts.next()) {
            ("holidays", None) => Some(Self::Holidays { fiscal_year }),
            ("vacations", Some(member)) if !member.is_empty() => Some(Self::Vacations {
                fiscal_year,
                member: member.to_string(),
            }),
            _ => None,
        }
    }
}

/// A holiday or vacation calendar scoped to one fiscal year.
///
/// Entries are kept in the persisted map form so that whatever the store
/// holds, including keys that do not decode, survives a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarState {
    /// The calendar this state belongs to.
    pub scope: Scope,
    /// Date key to reason.
    pub entries: DateReasonMap,
    /// Vacation days granted for the fiscal year, if enforced.
    pub allotted_days: Option<u16>,
}

impl CalendarState {
    /// Creates an empty calendar.
    #[must_use]
    pub const fn new(scope: Scope) -> Self {
        Self {
            scope,
            entries: DateReasonMap::new(),
            allotted_days: None,
        }
    }

    /// Creates a calendar from stored entries.
    #[must_use]
    pub const fn with_entries(scope: Scope, entries: DateReasonMap) -> Self {
        Self {
            scope,
            entries,
            allotted_days: None,
        }
    }

    /// Sets the vacation allotment enforced by `SetDay`.
    #[must_use]
    pub const fn with_allotment(mut self, allotted_days: u16) -> Self {
        self.allotted_days = Some(allotted_days);
        self
    }

    /// Returns the work year window of the calendar.
    ///
    /// # Errors
    ///
    /// Returns an error if the fiscal year has no representable window.
    pub fn work_year(&self) -> Result<WorkYear, DomainError> {
        work_year_window(self.scope.fiscal_year())
    }

    /// Returns the decodable entries as records, ascending by date.
    #[must_use]
    pub fn records(&self) -> Vec<DatedReason> {
        from_map_form(&self.entries)
    }

    /// Number of distinct days inside the calendar's fiscal year.
    #[must_use]
    pub fn days_in_fiscal_year(&self) -> usize {
        filter_by_fiscal_year(&self.records(), self.scope.fiscal_year()).len()
    }

    /// Every stored key that decodes to `date`, in map order.
    ///
    /// Stored maps are kept verbatim, so a day may sit under a key that is
    /// not zero-padded, or under several keys.
    #[must_use]
    pub fn keys_for(&self, date: Date) -> Vec<String> {
        self.entries
            .keys()
            .filter(|key| decode_date_key(key) == Some(date))
            .cloned()
            .collect()
    }

    /// The reason shown for `date`, as [`CalendarState::records`] reports it.
    #[must_use]
    pub fn reason_on(&self, date: Date) -> Option<&str> {
        self.entries
            .get(&encode_date_key(date))
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|(key, _)| decode_date_key(key) == Some(date))
                    .map(|(_, reason)| reason)
            })
            .map(String::as_str)
    }

    /// Returns the vacation balance if this is a vacation calendar with an
    /// allotment.
    #[must_use]
    pub fn vacation_balance(&self) -> Option<VacationBalance> {
        match (&self.scope, self.allotted_days) {
            (Scope::Vacations { fiscal_year, .. }, Some(allotted_days)) => Some(
                calculate_vacation_balance(allotted_days, &self.records(), *fiscal_year),
            ),
            _ => None,
        }
    }
}

/// The result of a successful calendar transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: CalendarState,
    /// What changed.
    pub change: ChangeEvent,
}

/// A fact about a calendar change, suitable for broadcasting to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChangeEvent {
    /// Holidays were regenerated.
    HolidaysGenerated {
        /// The calendar document.
        document_id: String,
        /// Number of holidays written.
        count: usize,
    },
    /// A day was added or its reason changed.
    DaySet {
        /// The calendar document.
        document_id: String,
        /// Date key of the day.
        date: String,
        /// The new reason.
        reason: String,
        /// The reason it replaced, if the day already existed.
        replaced: Option<String>,
    },
    /// A day was removed.
    DayRemoved {
        /// The calendar document.
        document_id: String,
        /// Date key of the day.
        date: String,
        /// The reason the day had.
        reason: String,
    },
    /// All days were removed.
    Cleared {
        /// The calendar document.
        document_id: String,
        /// Number of entries removed.
        removed: usize,
    },
}

impl ChangeEvent {
    /// Returns the document the change applies to.
    #[must_use]
    pub fn document_id(&self) -> &str {
        match self {
            Self::HolidaysGenerated { document_id, .. }
            | Self::DaySet { document_id, .. }
            | Self::DayRemoved { document_id, .. }
            | Self::Cleared { document_id, .. } => document_id,
        }
    }
}
