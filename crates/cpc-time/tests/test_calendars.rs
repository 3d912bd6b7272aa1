//! Integration tests for the Swiss civil-court calendar predicates.

use cpc_time::calendars::switzerland::FIXED_HOLIDAYS;
use cpc_time::recess::{SUMMER_RECESS, YEAR_END_RECESS};
use cpc_time::{Calendar, Date, SwissCivilCourts};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Collect the non-weekend holidays in the inclusive range `[from, to]`.
fn holiday_list(cal: &dyn Calendar, from: Date, to: Date) -> Vec<Date> {
    from.range_inclusive(to)
        .filter(|&d| cal.is_public_holiday(d) && !cal.is_weekend(d))
        .collect()
}

// ─── Holidays ─────────────────────────────────────────────────────────────────

#[test]
fn holidays_2024() {
    let cal = SwissCivilCourts;
    let expected = vec![
        date(2024, 1, 1),
        date(2024, 1, 2),
        date(2024, 8, 1),
        date(2024, 12, 25),
        date(2024, 12, 26),
    ];
    assert_eq!(holiday_list(&cal, date(2024, 1, 1), date(2024, 12, 31)), expected);
}

#[test]
fn holidays_on_weekends_are_still_holidays() {
    let cal = SwissCivilCourts;
    // 2021-12-25 is a Saturday
    assert!(cal.is_weekend(date(2021, 12, 25)));
    assert!(cal.is_public_holiday(date(2021, 12, 25)));
    assert!(holiday_list(&cal, date(2021, 12, 25), date(2021, 12, 26)).is_empty());
}

#[test]
fn every_fixed_holiday_is_named() {
    let cal = SwissCivilCourts;
    for (m, d, name) in FIXED_HOLIDAYS {
        for y in [1999, 2024, 2150] {
            assert_eq!(cal.holiday_name(date(y, m, d)), Some(name));
        }
    }
}

// ─── Recess ───────────────────────────────────────────────────────────────────

#[test]
fn recess_names() {
    let cal = SwissCivilCourts;
    assert_eq!(
        cal.recess_period(date(2024, 12, 20)).map(|r| r.name()),
        Some("Féries de fin d'année")
    );
    assert_eq!(
        cal.recess_period(date(2024, 7, 15)).map(|r| r.name()),
        Some("Féries d'été")
    );
    assert_eq!(cal.recess_period(date(2024, 4, 1)), None);
}

#[test]
fn recess_days_per_year() {
    let cal = SwissCivilCourts;
    // 32 summer days, 14 days of December and 2 of January
    assert_eq!(cal.count_recess_days(date(2024, 1, 1), date(2024, 12, 31)), 48);
    assert_eq!(cal.count_recess_days(date(2024, 1, 31), date(2024, 4, 30)), 0);
}

#[test]
fn windows_do_not_overlap() {
    let cal = SwissCivilCourts;
    for d in date(2023, 1, 1).range_inclusive(date(2024, 12, 31)) {
        assert!(!(SUMMER_RECESS.contains(d) && YEAR_END_RECESS.contains(d)));
        assert_eq!(
            cal.is_recess(d),
            SUMMER_RECESS.contains(d) || YEAR_END_RECESS.contains(d)
        );
    }
}

proptest! {
    #[test]
    fn recess_count_is_additive(a in 1i32..90_000, len1 in 0i32..400, len2 in 1i32..400) {
        let cal = SwissCivilCourts;
        let start = Date::MIN.add_days(a).unwrap();
        let mid = start.add_days(len1).unwrap();
        let end = mid.add_days(len2).unwrap();
        let whole = cal.count_recess_days(start, end);
        let parts = cal.count_recess_days(start, mid)
            + cal.count_recess_days(mid.succ().unwrap(), end);
        prop_assert_eq!(whole, parts);
        prop_assert!(whole as i32 <= (end - start) + 1);
    }

    #[test]
    fn roll_forward_lands_on_business_day(a in 1i32..100_000) {
        let cal = SwissCivilCourts;
        let d = Date::MIN.add_days(a).unwrap();
        let rolled = cal.roll_forward(d).unwrap();
        prop_assert!(rolled >= d);
        prop_assert!(cal.is_business_day(rolled));
        prop_assert_eq!(cal.roll_forward(rolled).unwrap(), rolled);
    }
}
