// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gymdesk_domain::Center;
use time::Date;

/// A command represents administrator intent as data only.
///
/// Commands are the only way to request calendar changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace a holiday calendar with the generated holidays of its fiscal year.
    GenerateHolidays {
        /// Centers whose local holidays are included.
        centers: Vec<Center>,
    },
    /// Add a day, or change the reason of an existing one.
    SetDay {
        /// The day to mark.
        date: Date,
        /// Free-text reason.
        reason: String,
    },
    /// Remove a day.
    RemoveDay {
        /// The day to remove.
        date: Date,
    },
    /// Remove every day from the calendar.
    Clear,
}

impl Command {
    /// Returns the command name used in change events and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GenerateHolidays { .. } => "GenerateHolidays",
            Self::SetDay { .. } => "SetDay",
            Self::RemoveDay { .. } => "RemoveDay",
            Self::Clear => "Clear",
        }
    }
}
