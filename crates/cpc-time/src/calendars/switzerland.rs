//! Switzerland civil-court calendar.

use crate::calendar::Calendar;
use crate::date::Date;
use crate::recess::{RecessPeriod, CIVIL_RECESSES};

/// Fixed public holidays as `(month, day, name)`.
///
/// Movable feasts (Good Friday, Easter Monday, Ascension, Whit Monday) and
/// cantonal holidays are not observed.
pub const FIXED_HOLIDAYS: [(u8, u8, &str); 5] = [
    (1, 1, "Nouvel An"),
    (1, 2, "Berchtoldstag"),
    (8, 1, "Fête nationale"),
    (12, 25, "Noël"),
    (12, 26, "Saint-Étienne"),
];

/// Calendar of the Swiss civil courts.
///
/// Weekends and the following holidays are observed, every year:
/// * New Year's Day (Jan 1)
/// * Berchtoldstag (Jan 2)
/// * Swiss National Day (Aug 1)
/// * Christmas Day (Dec 25)
/// * St. Stephen's Day (Dec 26)
///
/// Two recesses suspend day-counting: 15 July – 15 August and
/// 18 December – 2 January.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwissCivilCourts;

impl Calendar for SwissCivilCourts {
    fn name(&self) -> &str {
        "Suisse (tribunaux civils)"
    }

    fn holiday_name(&self, date: Date) -> Option<&'static str> {
        let (m, d) = date.month_day();
        FIXED_HOLIDAYS
            .iter()
            .find(|&&(hm, hd, _)| hm == m && hd == d)
            .map(|&(_, _, name)| name)
    }

    fn recess_periods(&self) -> &[RecessPeriod] {
        &CIVIL_RECESSES
    }
}
