// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Easter Sunday and the movable holidays derived from it.

use crate::error::DomainError;
use time::{Date, Duration, Month};

/// First year of the Gregorian calendar handled by the computation.
pub const FIRST_GREGORIAN_YEAR: i32 = 1583;

/// Last year representable by the date type.
pub const LAST_SUPPORTED_YEAR: i32 = 9999;

/// Computes Easter Sunday for a Gregorian year.
///
/// Uses the anonymous Gregorian algorithm (Meeus/Jones/Butcher) with
/// integer arithmetic only.
///
/// # Errors
///
/// Returns `DomainError::YearOutOfRange` for years before 1583 or after 9999.
#[allow(clippy::many_single_char_names)]
pub fn easter_sunday(year: i32) -> Result<Date, DomainError> {
    if !(FIRST_GREGORIAN_YEAR..=LAST_SUPPORTED_YEAR).contains(&year) {
        return Err(DomainError::YearOutOfRange { year });
    }

    let a: i32 = year % 19;
    let b: i32 = year / 100;
    let c: i32 = year % 100;
    let d: i32 = b / 4;
    let e: i32 = b % 4;
    let f: i32 = (b + 8) / 25;
    let g: i32 = (b - f + 1) / 3;
    let h: i32 = (19 * a + b - d - g + 15) % 30;
    let i: i32 = c / 4;
    let k: i32 = c % 4;
    let l: i32 = (32 + 2 * e + 2 * i - h - k) % 7;
    let m: i32 = (a + 11 * h + 22 * l) / 451;
    let n: i32 = h + l - 7 * m + 114;

    // n / 31 is 3 or 4, n % 31 + 1 is at most 31
    let month: Month = if n / 31 == 3 {
        Month::March
    } else {
        Month::April
    };
    let day: u8 = u8::try_from(n % 31 + 1).map_err(|_| DomainError::YearOutOfRange { year })?;

    Date::from_calendar_date(year, month, day).map_err(|_| DomainError::YearOutOfRange { year })
}

/// Good Friday: two days before Easter Sunday.
///
/// # Errors
///
/// Same as [`easter_sunday`].
pub fn good_friday(year: i32) -> Result<Date, DomainError> {
    shift(easter_sunday(year)?, -2, year)
}

/// Easter Monday: the day after Easter Sunday.
///
/// # Errors
///
/// Same as [`easter_sunday`].
pub fn easter_monday(year: i32) -> Result<Date, DomainError> {
    shift(easter_sunday(year)?, 1, year)
}

fn shift(easter: Date, days: i64, year: i32) -> Result<Date, DomainError> {
    easter
        .checked_add(Duration::days(days))
        .ok_or(DomainError::YearOutOfRange { year })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::Weekday;
    use time::macros::date;

    #[test]
    fn test_known_easter_dates() {
        assert_eq!(easter_sunday(2024).unwrap(), date!(2024 - 03 - 31));
        assert_eq!(easter_sunday(2025).unwrap(), date!(2025 - 04 - 20));
        assert_eq!(easter_sunday(2026).unwrap(), date!(2026 - 04 - 05));
        assert_eq!(easter_sunday(2000).unwrap(), date!(2000 - 04 - 23));
        assert_eq!(easter_sunday(1997).unwrap(), date!(1997 - 03 - 30));
        assert_eq!(easter_sunday(2019).unwrap(), date!(2019 - 04 - 21));
    }

    #[test]
    fn test_extreme_easter_dates() {
        // Earliest and latest possible Easter Sundays
        assert_eq!(easter_sunday(1818).unwrap(), date!(1818 - 03 - 22));
        assert_eq!(easter_sunday(2285).unwrap(), date!(2285 - 03 - 22));
        assert_eq!(easter_sunday(1943).unwrap(), date!(1943 - 04 - 25));
        assert_eq!(easter_sunday(2038).unwrap(), date!(2038 - 04 - 25));
    }

    #[test]
    fn test_easter_is_always_a_sunday_in_march_or_april() {
        for year in FIRST_GREGORIAN_YEAR..=LAST_SUPPORTED_YEAR {
            let easter: Date = easter_sunday(year).unwrap();
            assert_eq!(easter.weekday(), Weekday::Sunday, "year {year}");
            assert!(
                matches!(easter.month(), Month::March | Month::April),
                "year {year}"
            );
            assert_eq!(easter.year(), year);
        }
    }

    #[test]
    fn test_good_friday_and_easter_monday() {
        assert_eq!(good_friday(2024).unwrap(), date!(2024 - 03 - 29));
        assert_eq!(easter_monday(2024).unwrap(), date!(2024 - 04 - 01));
        assert_eq!(good_friday(2025).unwrap().weekday(), Weekday::Friday);
        assert_eq!(easter_monday(2025).unwrap().weekday(), Weekday::Monday);
    }

    #[test]
    fn test_years_outside_range_are_rejected() {
        assert_eq!(
            easter_sunday(1582),
            Err(DomainError::YearOutOfRange { year: 1582 })
        );
        assert_eq!(
            easter_sunday(10_000),
            Err(DomainError::YearOutOfRange { year: 10_000 })
        );
        assert!(good_friday(-5).is_err());
    }

    #[test]
    fn test_derived_holidays_report_year_out_of_range() {
        assert_eq!(
            good_friday(1500),
            Err(DomainError::YearOutOfRange { year: 1500 })
        );
        assert_eq!(
            easter_monday(10_000),
            Err(DomainError::YearOutOfRange { year: 10_000 })
        );
        assert_eq!(easter_monday(9999).unwrap().year(), 9999);
        assert_eq!(good_friday(FIRST_GREGORIAN_YEAR).unwrap().year(), 1583);
    }
}
