// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// A holiday observed only at one center.
///
/// The month is zero-based (0 = January) to match the stored
/// center configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalHoliday {
    /// Zero-based month (0-11).
    pub month: u8,
    /// Day of month (1-31).
    pub day: u8,
    /// Display name of the holiday.
    pub name: String,
}

impl LocalHoliday {
    /// Creates a new `LocalHoliday`.
    ///
    /// # Arguments
    ///
    /// * `month` - Zero-based month (0 = January)
    /// * `day` - Day of month
    /// * `name` - Display name
    #[must_use]
    pub fn new(month: u8, day: u8, name: &str) -> Self {
        Self {
            month,
            day,
            name: name.to_string(),
        }
    }

    /// Returns the calendar month, or `None` if the stored month is not 0-11.
    #[must_use]
    pub fn calendar_month(&self) -> Option<Month> {
        self.month
            .checked_add(1)
            .and_then(|m| Month::try_from(m).ok())
    }

    /// Instantiates this holiday in the given year.
    ///
    /// Returns `None` when the month/day does not exist that year
    /// (February 29 outside a leap year, or a misconfigured entry).
    #[must_use]
    pub fn date_in(&self, year: i32) -> Option<Date> {
        let month: Month = self.calendar_month()?;
        Date::from_calendar_date(year, month, self.day).ok()
    }
}

const fn default_active() -> bool {
    true
}

/// An operating location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Center {
    /// Unique identifier.
    pub id: String,
    /// Display name, used to tag local holidays.
    pub name: String,
    /// Holidays specific to this center.
    #[serde(default)]
    pub local_holidays: Vec<LocalHoliday>,
    /// Vacation days each member of this center may take per fiscal year.
    #[serde(default)]
    pub vacation_days: u16,
    /// Inactive centers contribute no local holidays.
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Center {
    /// Creates a new active `Center` without local holidays.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier
    /// * `name` - Display name
    /// * `vacation_days` - Per-fiscal-year vacation allotment
    #[must_use]
    pub fn new(id: &str, name: &str, vacation_days: u16) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            local_holidays: Vec::new(),
            vacation_days,
            active: true,
        }
    }

    /// Adds a local holiday, returning the updated center.
    #[must_use]
    pub fn with_local_holiday(mut self, holiday: LocalHoliday) -> Self {
        self.local_holidays.push(holiday);
        self
    }

    /// Marks the center inactive, returning the updated center.
    #[must_use]
    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }
}
