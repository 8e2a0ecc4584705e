// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CliError;
use gymdesk::{CalendarState, ChangeEvent, Command, Scope, TransitionResult};
use gymdesk_domain::{
    Center, DateReasonMap, DatedReason, VacationBalance, WorkYear, easter_monday, easter_sunday,
    filter_by_fiscal_year, generate_holidays_for_fiscal_year, good_friday, serde_date,
    to_map_form, try_fiscal_year_of, validate_centers, work_year_window,
};
use gymdesk_store::{RecordStore, apply_and_persist, load_state};
use serde::Serialize;
use time::Date;

/// Output of `fiscal-year`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiscalYearReport {
    /// The work year containing the date.
    #[serde(flatten)]
    pub window: WorkYear,
    /// Number of days in the work year.
    pub days: i64,
}

/// Output of `easter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EasterReport {
    /// The calendar year.
    pub year: i32,
    /// Good Friday.
    #[serde(with = "serde_date")]
    pub good_friday: Date,
    /// Easter Sunday.
    #[serde(with = "serde_date")]
    pub easter_sunday: Date,
    /// Easter Monday.
    #[serde(with = "serde_date")]
    pub easter_monday: Date,
}

/// Generates the holidays of a fiscal year.
///
/// With a store, the result replaces the fiscal year's holiday document.
///
/// # Errors
///
/// Returns an error if the centers are invalid, the fiscal year is out of
/// range, or the store fails.
pub fn holidays(
    fiscal_year: i32,
    centers: &[Center],
    store: Option<&dyn RecordStore>,
) -> Result<DateReasonMap, CliError> {
    if let Some(store) = store {
        let result: TransitionResult = apply_and_persist(
            store,
            Scope::Holidays { fiscal_year },
            None,
            Command::GenerateHolidays {
                centers: centers.to_vec(),
            },
        )?;
        return Ok(result.new_state.entries);
    }

    validate_centers(centers)?;
    let holidays: Vec<DatedReason> = generate_holidays_for_fiscal_year(fiscal_year, centers)?;
    Ok(to_map_form(&holidays))
}

/// Reports the fiscal year a date key belongs to.
///
/// # Errors
///
/// Returns an error if `input` is not a date key.
pub fn fiscal_year(input: &str) -> Result<FiscalYearReport, CliError> {
    let window: WorkYear = work_year_window(try_fiscal_year_of(input)?)?;
    Ok(FiscalYearReport {
        days: window.num_days(),
        window,
    })
}

/// Reports the Easter dates of a year.
///
/// # Errors
///
/// Returns an error if the year is outside the Gregorian range.
pub fn easter(year: i32) -> Result<EasterReport, CliError> {
    Ok(EasterReport {
        year,
        good_friday: good_friday(year)?,
        easter_sunday: easter_sunday(year)?,
        easter_monday: easter_monday(year)?,
    })
}

/// Adds a vacation day, or changes its reason.
///
/// # Errors
///
/// Returns an error if the date is outside the fiscal year, the allotment
/// is used up, or the store fails.
pub fn vacation_add<S: RecordStore + ?Sized>(
    store: &S,
    scope: Scope,
    allotted_days: Option<u16>,
    date: Date,
    reason: String,
) -> Result<ChangeEvent, CliError> {
    let result: TransitionResult =
        apply_and_persist(store, scope, allotted_days, Command::SetDay { date, reason })?;
    Ok(result.change)
}

/// Removes a vacation day.
///
/// # Errors
///
/// Returns an error if the day is not booked or the store fails.
pub fn vacation_remove<S: RecordStore + ?Sized>(
    store: &S,
    scope: Scope,
    date: Date,
) -> Result<ChangeEvent, CliError> {
    let result: TransitionResult =
        apply_and_persist(store, scope, None, Command::RemoveDay { date })?;
    Ok(result.change)
}

/// Lists the vacation days inside the scope's fiscal year.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn vacation_list<S: RecordStore + ?Sized>(
    store: &S,
    scope: Scope,
) -> Result<Vec<DatedReason>, CliError> {
    let fiscal_year: i32 = scope.fiscal_year();
    let state: CalendarState = load_state(store, scope, None)?;
    Ok(filter_by_fiscal_year(&state.records(), fiscal_year))
}

/// Computes the vacation balance of the scope.
///
/// # Errors
///
/// Returns an error if no allotment is known or the store fails.
pub fn vacation_balance<S: RecordStore + ?Sized>(
    store: &S,
    scope: Scope,
    allotted_days: Option<u16>,
) -> Result<VacationBalance, CliError> {
    let allotted_days: u16 = allotted_days.ok_or(CliError::MissingAllotment)?;
    load_state(store, scope, Some(allotted_days))?
        .vacation_balance()
        .ok_or(CliError::MissingAllotment)
}
