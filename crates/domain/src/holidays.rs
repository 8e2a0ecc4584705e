// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Holiday generation for a work year.
//!
//! Holidays come from three sources, added in this order:
//!
//! 1. Fixed national and regional holidays (same month/day every year)
//! 2. Movable holidays derived from Easter
//! 3. Local holidays configured per center
//!
//! Only one holiday is kept per date. Sources earlier in the list take
//! precedence, so a center-local holiday never replaces a national one.

use crate::easter::{easter_monday, good_friday};
use crate::error::DomainError;
use crate::fiscal_year::{WorkYear, work_year_window};
use crate::records::DatedReason;
use crate::types::Center;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use time::{Date, Month};
use tracing::{debug, warn};

/// A holiday that falls on the same month/day every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHoliday {
    /// Calendar month.
    pub month: Month,
    /// Day of month.
    pub day: u8,
    /// Display name.
    pub name: &'static str,
}

const fn fixed(month: Month, day: u8, name: &'static str) -> FixedHoliday {
    FixedHoliday { month, day, name }
}

/// National and regional holidays observed by every center.
const FIXED_HOLIDAYS: [FixedHoliday; 12] = [
    fixed(Month::January, 1, "Any Nou"),
    fixed(Month::January, 6, "Reis"),
    fixed(Month::May, 1, "Festa del Treball"),
    fixed(Month::June, 24, "Sant Joan"),
    fixed(Month::August, 15, "L'Assumpció"),
    fixed(Month::September, 11, "Diada Nacional de Catalunya"),
    fixed(Month::October, 12, "Festa Nacional d'Espanya"),
    fixed(Month::November, 1, "Tots Sants"),
    fixed(Month::December, 6, "Dia de la Constitució"),
    fixed(Month::December, 8, "La Immaculada"),
    fixed(Month::December, 25, "Nadal"),
    fixed(Month::December, 26, "Sant Esteve"),
];

/// Name used for Good Friday.
pub const GOOD_FRIDAY: &str = "Divendres Sant";

/// Name used for Easter Monday.
pub const EASTER_MONDAY: &str = "Dilluns de Pasqua";

/// Returns the fixed national and regional holiday table.
#[must_use]
pub const fn fixed_holidays() -> &'static [FixedHoliday] {
    &FIXED_HOLIDAYS
}

/// Collects candidates for a date window, first writer wins.
struct HolidayCollector {
    start: Date,
    end: Date,
    holidays: BTreeMap<Date, String>,
}

impl HolidayCollector {
    const fn new(start: Date, end: Date) -> Self {
        Self {
            start,
            end,
            holidays: BTreeMap::new(),
        }
    }

    fn offer(&mut self, date: Date, reason: String) {
        if date < self.start || date > self.end {
            return;
        }
        match self.holidays.entry(date) {
            Entry::Vacant(slot) => {
                slot.insert(reason);
            }
            Entry::Occupied(existing) => {
                debug!(
                    %date,
                    kept = %existing.get(),
                    dropped = %reason,
                    "Holiday date already taken"
                );
            }
        }
    }

    fn into_sorted(self) -> Vec<DatedReason> {
        self.holidays
            .into_iter()
            .map(|(date, reason)| DatedReason { date, reason })
            .collect()
    }
}

fn offer_national(collector: &mut HolidayCollector, year: i32) {
    for holiday in &FIXED_HOLIDAYS {
        if let Ok(date) = Date::from_calendar_date(year, holiday.month, holiday.day) {
            collector.offer(date, holiday.name.to_string());
        }
    }

    let movable: [(Result<Date, DomainError>, &str); 2] = [
        (good_friday(year), GOOD_FRIDAY),
        (easter_monday(year), EASTER_MONDAY),
    ];
    for (date, name) in movable {
        match date {
            Ok(date) => collector.offer(date, name.to_string()),
            Err(err) => warn!(year, error = %err, "Skipping movable holiday"),
        }
    }
}

fn offer_local(collector: &mut HolidayCollector, year: i32, centers: &[Center]) {
    for center in centers.iter().filter(|center| center.active) {
        for holiday in &center.local_holidays {
            match holiday.date_in(year) {
                Some(date) => {
                    collector.offer(date, format!("{} ({})", holiday.name, center.name));
                }
                None => debug!(
                    center = %center.id,
                    year,
                    month = holiday.month,
                    day = holiday.day,
                    "Local holiday does not exist this year"
                ),
            }
        }
    }
}

/// Generates the holidays inside `[work_year_start, work_year_end]`.
///
/// Every calendar year touched by the window is expanded, the fixed and
/// movable holidays of all years first, then each active center's local
/// holidays tagged as `"<name> (<center name>)"`. Dates outside the window
/// are dropped and only the first holiday per date is kept.
///
/// # Returns
///
/// Holidays ascending by date, at most one per date. Empty if the window
/// is empty.
#[must_use]
pub fn generate_holidays(
    work_year_start: Date,
    work_year_end: Date,
    centers: &[Center],
) -> Vec<DatedReason> {
    let mut collector: HolidayCollector = HolidayCollector::new(work_year_start, work_year_end);
    let years = work_year_start.year()..=work_year_end.year();

    for year in years.clone() {
        offer_national(&mut collector, year);
    }
    for year in years {
        offer_local(&mut collector, year, centers);
    }

    collector.into_sorted()
}

/// Generates the holidays of a fiscal year.
///
/// # Errors
///
/// Returns an error if the fiscal year has no representable work year.
pub fn generate_holidays_for_fiscal_year(
    fiscal_year: i32,
    centers: &[Center],
) -> Result<Vec<DatedReason>, DomainError> {
    let window: WorkYear = work_year_window(fiscal_year)?;
    Ok(generate_holidays(window.start(), window.end(), centers))
}
