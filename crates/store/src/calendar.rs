// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::RecordStore;
use crate::error::StoreError;
use gymdesk::{CalendarState, Command, Scope, TransitionResult, apply};
use gymdesk_domain::DateReasonMap;
use tracing::{debug, info};

/// Loads the calendar for a scope.
///
/// A document that has never been saved loads as an empty calendar.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn load_state<S: RecordStore + ?Sized>(
    store: &S,
    scope: Scope,
    allotted_days: Option<u16>,
) -> Result<CalendarState, StoreError> {
    let document_id: String = scope.document_id();
    let entries: DateReasonMap = store.load(&document_id)?.unwrap_or_default();
    debug!(document_id, entries = entries.len(), "Loaded calendar");

    let mut state: CalendarState = CalendarState::with_entries(scope, entries);
    state.allotted_days = allotted_days;
    Ok(state)
}

/// Persists a transition result and notifies subscribers.
///
/// The new state is written first; subscribers only hear about changes
/// that were saved.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn persist_transition<S: RecordStore + ?Sized>(
    store: &S,
    result: &TransitionResult,
) -> Result<(), StoreError> {
    let document_id: String = result.new_state.scope.document_id();
    store.save(&document_id, &result.new_state.entries)?;
    store.notify(&result.change);

    info!(
        document_id,
        entries = result.new_state.entries.len(),
        "Persisted calendar transition"
    );
    Ok(())
}

/// Loads a calendar, applies a command and persists the result.
///
/// Nothing is written when the command is rejected.
///
/// # Errors
///
/// Returns an error if the store fails or the command is rejected.
pub fn apply_and_persist<S: RecordStore + ?Sized>(
    store: &S,
    scope: Scope,
    allotted_days: Option<u16>,
    command: Command,
) -> Result<TransitionResult, StoreError> {
    let command_name: &'static str = command.name();
    let state: CalendarState = load_state(store, scope, allotted_days)?;

    let result: TransitionResult = apply(&state, command)?;
    persist_transition(store, &result)?;

    debug!(command = command_name, "Applied command");
    Ok(result)
}
