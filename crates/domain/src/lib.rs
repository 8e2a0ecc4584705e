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

mod date_key;
mod easter;
mod error;
mod fiscal_year;
mod holidays;
mod records;
mod types;
mod vacation;
mod validation;

#[cfg(test)]
mod tests;

pub use date_key::{decode_date_key, encode_date_key, parse_date_key, serde_date};
pub use easter::{FIRST_GREGORIAN_YEAR, LAST_SUPPORTED_YEAR, easter_monday, easter_sunday, good_friday};
pub use fiscal_year::{
    DateInput, FISCAL_YEAR_START_MONTH, WorkYear, filter_by_fiscal_year, filter_map_by_fiscal_year,
    fiscal_year_of, fiscal_year_of_date, fiscal_year_of_or, fiscal_year_range, try_fiscal_year_of,
    work_year_window,
};
pub use holidays::{
    EASTER_MONDAY, FixedHoliday, GOOD_FRIDAY, fixed_holidays, generate_holidays,
    generate_holidays_for_fiscal_year,
};

// Re-export public types
pub use error::DomainError;
pub use records::{DateReasonMap, DatedReason, from_map_form, to_map_form};
pub use types::{Center, LocalHoliday};
pub use vacation::{VacationBalance, calculate_vacation_balance};
pub use validation::{validate_center, validate_centers};
