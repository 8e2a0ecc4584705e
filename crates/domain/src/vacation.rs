// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vacation balance calculation.
//!
//! Read-only aggregation of a member's vacation days against the
//! allotment of their center for one fiscal year.

use crate::fiscal_year::fiscal_year_of_date;
use crate::records::DatedReason;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use time::Date;

/// Result of a vacation balance calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationBalance {
    /// The fiscal year the balance covers.
    pub fiscal_year: i32,
    /// Days granted for the fiscal year.
    pub allotted_days: u16,
    /// Distinct vacation days taken inside the fiscal year.
    pub used_days: u16,
    /// `allotted_days - used_days`. Negative if overdrawn.
    pub remaining_days: i32,
    /// Whether every allotted day has been used (`remaining_days == 0`).
    pub is_exhausted: bool,
    /// Whether more days were taken than allotted (`remaining_days < 0`).
    pub is_overdrawn: bool,
}

/// Calculates the vacation balance for one fiscal year.
///
/// Only records dated inside the fiscal year count, and a date listed
/// more than once counts once.
///
/// # Arguments
///
/// * `allotted_days` - The center's per-year allotment
/// * `vacations` - The member's vacation records (any fiscal year)
/// * `fiscal_year` - The fiscal year to evaluate
#[must_use]
pub fn calculate_vacation_balance(
    allotted_days: u16,
    vacations: &[DatedReason],
    fiscal_year: i32,
) -> VacationBalance {
    let used: BTreeSet<Date> = vacations
        .iter()
        .map(|record| record.date)
        .filter(|date| fiscal_year_of_date(*date) == fiscal_year)
        .collect();

    let used_days: u16 = u16::try_from(used.len()).unwrap_or(u16::MAX);
    let remaining_days: i32 = i32::from(allotted_days) - i32::from(used_days);

    VacationBalance {
        fiscal_year,
        allotted_days,
        used_days,
        remaining_days,
        is_exhausted: remaining_days == 0,
        is_overdrawn: remaining_days < 0,
    }
}
