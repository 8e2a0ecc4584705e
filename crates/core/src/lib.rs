// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use gymdesk_domain::{Center, DomainError};

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use state::{CalendarState, ChangeEvent, Scope, TransitionResult};

/// Looks up a center by id.
///
/// This is a read-only lookup used to resolve a member's vacation
/// allotment before building a vacation calendar.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` with `DomainError::InvalidCenter`
/// if no center has the id.
pub fn find_center<'a>(centers: &'a [Center], center_id: &str) -> Result<&'a Center, CoreError> {
    centers
        .iter()
        .find(|center| center.id == center_id)
        .ok_or_else(|| {
            CoreError::DomainViolation(DomainError::InvalidCenter(format!(
                "Center '{center_id}' not found"
            )))
        })
}
