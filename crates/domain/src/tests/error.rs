// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::MalformedKey {
        key: String::from("2024-13-01"),
        reason: String::from("month out of range"),
    };
    assert_eq!(
        format!("{err}"),
        "Malformed date key '2024-13-01': month out of range"
    );

    let err: DomainError = DomainError::UnparseableDateInput {
        input: String::from("soon"),
    };
    assert_eq!(
        format!("{err}"),
        "Cannot parse 'soon' as a YYYY-MM-DD date"
    );

    let err: DomainError = DomainError::YearOutOfRange { year: 1500 };
    assert_eq!(format!("{err}"), "Year 1500 is outside the supported range");

    let err: DomainError = DomainError::InvalidLocalHoliday {
        center: String::from("bcn"),
        month: 1,
        day: 30,
    };
    assert_eq!(
        format!("{err}"),
        "Center 'bcn' has an invalid local holiday: month 1, day 30"
    );

    let err: DomainError = DomainError::InvalidCenter(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid center: test");

    let err: DomainError = DomainError::DuplicateCenter(String::from("bcn"));
    assert_eq!(format!("{err}"), "Center 'bcn' is configured more than once");
}

#[test]
fn test_domain_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(DomainError::YearOutOfRange { year: 0 });
    assert!(err.source().is_none());
}
