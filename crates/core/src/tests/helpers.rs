// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CalendarState, Scope};
use gymdesk_domain::{Center, LocalHoliday};

pub fn create_test_centers() -> Vec<Center> {
    vec![
        Center::new("bcn", "Barcelona", 22)
            .with_local_holiday(LocalHoliday::new(8, 24, "La Mercè")),
        Center::new("gir", "Girona", 23)
            .with_local_holiday(LocalHoliday::new(9, 29, "Sant Narcís")),
    ]
}

pub fn create_holiday_state(fiscal_year: i32) -> CalendarState {
    CalendarState::new(Scope::Holidays { fiscal_year })
}

pub fn create_vacation_state(fiscal_year: i32, allotted_days: u16) -> CalendarState {
    CalendarState::new(Scope::Vacations {
        fiscal_year,
        member: String::from("marta"),
    })
    .with_allotment(allotted_days)
}
