// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Center;
use std::collections::HashSet;
use time::Date;

/// Any leap year works; it only has to accept February 29.
const REFERENCE_LEAP_YEAR: i32 = 2000;

/// Validates a single center's configuration.
///
/// # Arguments
///
/// * `center` - The center to validate
///
/// # Returns
///
/// * `Ok(())` if the center is valid
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The center id is empty
/// - The center name is empty
/// - A local holiday has a month outside 0-11
/// - A local holiday names a day that never exists in its month
pub fn validate_center(center: &Center) -> Result<(), DomainError> {
    // Rule: id must not be empty
    if center.id.trim().is_empty() {
        return Err(DomainError::InvalidCenter(String::from(
            "Center id cannot be empty",
        )));
    }

    // Rule: name must not be empty
    if center.name.trim().is_empty() {
        return Err(DomainError::InvalidCenter(format!(
            "Center '{}' has an empty name",
            center.id
        )));
    }

    // Rule: local holidays must exist at least in leap years
    for holiday in &center.local_holidays {
        let valid: bool = holiday.calendar_month().is_some_and(|month| {
            Date::from_calendar_date(REFERENCE_LEAP_YEAR, month, holiday.day).is_ok()
        });
        if !valid {
            return Err(DomainError::InvalidLocalHoliday {
                center: center.id.clone(),
                month: holiday.month,
                day: holiday.day,
            });
        }
    }

    Ok(())
}

/// Validates a full center configuration.
///
/// # Errors
///
/// Returns the first error from [`validate_center`], or
/// `DomainError::DuplicateCenter` if two centers share an id.
pub fn validate_centers(centers: &[Center]) -> Result<(), DomainError> {
    let mut seen: HashSet<&str> = HashSet::new();

    for center in centers {
        validate_center(center)?;
        if !seen.insert(center.id.as_str()) {
            return Err(DomainError::DuplicateCenter(center.id.clone()));
        }
    }

    Ok(())
}
