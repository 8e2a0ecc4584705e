// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Center, DomainError, LocalHoliday, validate_center, validate_centers};

fn create_test_center(id: &str) -> Center {
    Center::new(id, "Test Center", 22).with_local_holiday(LocalHoliday::new(8, 24, "La Mercè"))
}

#[test]
fn test_validate_center_accepts_valid_center() {
    let center: Center = create_test_center("bcn");
    let result: Result<(), DomainError> = validate_center(&center);
    assert!(result.is_ok());
}

#[test]
fn test_validate_center_rejects_empty_id() {
    let center: Center = create_test_center("  ");
    let result: Result<(), DomainError> = validate_center(&center);
    assert!(matches!(result, Err(DomainError::InvalidCenter(_))));
}

#[test]
fn test_validate_center_rejects_empty_name() {
    let center: Center = Center::new("bcn", "", 22);
    let result: Result<(), DomainError> = validate_center(&center);
    assert!(matches!(result, Err(DomainError::InvalidCenter(_))));
}

#[test]
fn test_validate_center_accepts_leap_day() {
    let center: Center =
        Center::new("bcn", "Barcelona", 22).with_local_holiday(LocalHoliday::new(1, 29, "Leap"));
    assert!(validate_center(&center).is_ok());
}

#[test]
fn test_validate_center_rejects_impossible_day() {
    let center: Center =
        Center::new("bcn", "Barcelona", 22).with_local_holiday(LocalHoliday::new(1, 30, "Never"));
    let result: Result<(), DomainError> = validate_center(&center);
    assert_eq!(
        result,
        Err(DomainError::InvalidLocalHoliday {
            center: String::from("bcn"),
            month: 1,
            day: 30,
        })
    );
}

#[test]
fn test_validate_center_rejects_month_twelve() {
    let center: Center =
        Center::new("bcn", "Barcelona", 22).with_local_holiday(LocalHoliday::new(12, 1, "Never"));
    assert!(matches!(
        validate_center(&center),
        Err(DomainError::InvalidLocalHoliday { month: 12, .. })
    ));
}

#[test]
fn test_validate_center_rejects_day_zero() {
    let center: Center =
        Center::new("bcn", "Barcelona", 22).with_local_holiday(LocalHoliday::new(0, 0, "Never"));
    assert!(validate_center(&center).is_err());
}

#[test]
fn test_validate_centers_accepts_unique_ids() {
    let centers: Vec<Center> = vec![create_test_center("bcn"), create_test_center("gir")];
    assert!(validate_centers(&centers).is_ok());
}

#[test]
fn test_validate_centers_rejects_duplicate_ids() {
    let centers: Vec<Center> = vec![create_test_center("bcn"), create_test_center("bcn")];
    assert_eq!(
        validate_centers(&centers),
        Err(DomainError::DuplicateCenter(String::from("bcn")))
    );
}

#[test]
fn test_validate_centers_accepts_empty_list() {
    assert!(validate_centers(&[]).is_ok());
}
