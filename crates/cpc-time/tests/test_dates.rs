//! Integration tests for `Date` arithmetic and parsing.

use cpc_time::date::{days_in_month, is_leap_year};
use cpc_time::{Date, Weekday};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
}

#[test]
fn consecutive_serials_cover_every_day() {
    // Walk 1900..2199 and check that the serial number increases by one each
    // day and that (y, m, d) always round-trips.
    let mut prev = date(1900, 1, 1);
    let mut d = prev.succ().unwrap();
    while d < Date::MAX {
        assert_eq!(d.serial(), prev.serial() + 1);
        let again = date(d.year(), d.month(), d.day_of_month());
        assert_eq!(again, d, "{d:?} does not round-trip");
        prev = d;
        d = d.succ().unwrap();
    }
}

#[test]
fn day_and_month_arithmetic() {
    let d = date(2024, 1, 31);
    assert_eq!(d.add_days(30).unwrap(), date(2024, 3, 1));
    assert_eq!(d.add_months(3).unwrap(), date(2024, 4, 30));
}

#[test]
fn date_difference_is_signed() {
    let a = date(2024, 7, 2);
    let b = date(2024, 9, 1);
    assert_eq!(b - a, 61);
    assert_eq!(a - b, -61);
}

#[test]
fn known_weekdays() {
    assert_eq!(date(1900, 1, 1).weekday(), Weekday::Monday);
    assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
    assert_eq!(date(2024, 4, 1).weekday(), Weekday::Monday);
    assert_eq!(date(2024, 5, 20).weekday(), Weekday::Monday);
}

proptest! {
    #[test]
    fn weekday_cycles_every_seven_days(serial in 1i32..100_000, n in 0i32..1_000) {
        let d = Date::MIN.add_days(serial - 1).unwrap();
        let later = d.add_days(7 * n).unwrap();
        prop_assert_eq!(d.weekday(), later.weekday());
    }

    #[test]
    fn add_months_never_overflows_target_month(
        y in 1900u16..2190, m in 1u8..=12, d in 1u8..=31, n in 1i32..=36,
    ) {
        let d = d.min(days_in_month(y, m));
        let start = date(y, m, d);
        let end = start.add_months(n).unwrap();
        let months = (end.year() as i32 - y as i32) * 12 + end.month() as i32 - m as i32;
        prop_assert_eq!(months, n);
        prop_assert!(end.day_of_month() <= d);
        if end.day_of_month() != d {
            prop_assert_eq!(end, end.end_of_month());
        }
    }

    #[test]
    fn iso_and_swiss_text_parse_to_same_date(serial in 1i32..100_000) {
        let d = Date::MIN.add_days(serial - 1).unwrap();
        prop_assert_eq!(d.to_string().parse::<Date>().unwrap(), d);
        prop_assert_eq!(d.to_swiss_string().parse::<Date>().unwrap(), d);
    }
}
