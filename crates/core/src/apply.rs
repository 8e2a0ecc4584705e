// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{CalendarState, ChangeEvent, Scope, TransitionResult};
use gymdesk_domain::{
    DateReasonMap, DatedReason, WorkYear, encode_date_key, generate_holidays_for_fiscal_year,
    to_map_form, validate_centers,
};

/// Applies a command to a calendar, producing a new calendar and change event.
///
/// # Arguments
///
/// * `state` - The current calendar (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and change event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - `GenerateHolidays` targets a vacation calendar or the centers are invalid
/// - `SetDay` names a date outside the work year
/// - `SetDay` adds a vacation day beyond the allotment
/// - `RemoveDay` names a date with no entry
pub fn apply(state: &CalendarState, command: Command) -> Result<TransitionResult, CoreError> {
    let document_id: String = state.scope.document_id();

    match command {
        Command::GenerateHolidays { centers } => {
            let Scope::Holidays { fiscal_year } = &state.scope else {
                return Err(CoreError::WrongScope {
                    command: "GenerateHolidays",
                    document_id,
                });
            };

            validate_centers(&centers)?;

            let holidays: Vec<DatedReason> =
                generate_holidays_for_fiscal_year(*fiscal_year, &centers)?;
            let entries: DateReasonMap = to_map_form(&holidays);

            let change: ChangeEvent = ChangeEvent::HolidaysGenerated {
                document_id,
                count: entries.len(),
            };
            let new_state: CalendarState = CalendarState {
                entries,
                ..state.clone()
            };

            Ok(TransitionResult { new_state, change })
        }
        Command::SetDay { date, reason } => {
            let window: WorkYear = state.work_year()?;
            if !window.contains(date) {
                return Err(CoreError::DateOutsideWorkYear {
                    date,
                    fiscal_year: window.fiscal_year(),
                });
            }

            let key: String = encode_date_key(date);
            let replaced: Option<String> = state.reason_on(date).map(str::to_string);

            // Only a new day counts against the allotment
            if let (Scope::Vacations { .. }, Some(allotted_days), None) =
                (&state.scope, state.allotted_days, &replaced)
                && state.days_in_fiscal_year() >= usize::from(allotted_days)
            {
                return Err(CoreError::VacationAllotmentExceeded { allotted_days });
            }

            // Whatever keys the day was stored under collapse to the canonical one
            let mut new_state: CalendarState = state.clone();
            for stale in state.keys_for(date) {
                new_state.entries.remove(&stale);
            }
            new_state.entries.insert(key.clone(), reason.clone());

            let change: ChangeEvent = ChangeEvent::DaySet {
                document_id,
                date: key,
                reason,
                replaced,
            };

            Ok(TransitionResult { new_state, change })
        }
        Command::RemoveDay { date } => {
            let key: String = encode_date_key(date);
            let reason: String = state
                .reason_on(date)
                .map(str::to_string)
                .ok_or(CoreError::DayNotFound { date })?;

            let mut new_state: CalendarState = state.clone();
            for stale in state.keys_for(date) {
                new_state.entries.remove(&stale);
            }

            let change: ChangeEvent = ChangeEvent::DayRemoved {
                document_id,
                date: key,
                reason,
            };

            Ok(TransitionResult { new_state, change })
        }
        Command::Clear => {
            let change: ChangeEvent = ChangeEvent::Cleared {
                document_id,
                removed: state.entries.len(),
            };
            let new_state: CalendarState = CalendarState {
                entries: DateReasonMap::new(),
                ..state.clone()
            };

            Ok(TransitionResult { new_state, change })
        }
    }
}
