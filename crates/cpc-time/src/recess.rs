//! Court recesses ("féries").
//!
//! During a recess, day-counting of most procedural delays is suspended
//! (art. 145 CPC).  A recess is a fixed month/day window that repeats every
//! year; a window whose start is later in the year than its end wraps over
//! New Year.

use crate::date::Date;

/// A recurring recess window, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecessPeriod {
    name: &'static str,
    from: (u8, u8),
    to: (u8, u8),
}

impl RecessPeriod {
    /// Create a recess running from `from` to `to`, both `(month, day)` and
    /// inclusive.
    pub const fn new(name: &'static str, from: (u8, u8), to: (u8, u8)) -> Self {
        Self { name, from, to }
    }

    /// Display name of the recess.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Return `true` if `date` falls inside the window, whatever its year.
    pub fn contains(&self, date: Date) -> bool {
        let md = date.month_day();
        if self.from <= self.to {
            self.from <= md && md <= self.to
        } else {
            md >= self.from || md <= self.to
        }
    }
}

/// 18 December – 2 January (art. 145 al. 1 let. c CPC).
pub const YEAR_END_RECESS: RecessPeriod =
    RecessPeriod::new("Féries de fin d'année", (12, 18), (1, 2));

/// 15 July – 15 August (art. 145 al. 1 let. b CPC).
pub const SUMMER_RECESS: RecessPeriod = RecessPeriod::new("Féries d'été", (7, 15), (8, 15));

/// The recesses observed by the civil courts.
pub static CIVIL_RECESSES: [RecessPeriod; 2] = [YEAR_END_RECESS, SUMMER_RECESS];

/// Return the recess among `periods` that contains `date`, if any.
pub fn recess_containing(periods: &[RecessPeriod], date: Date) -> Option<&RecessPeriod> {
    periods.iter().find(|p| p.contains(date))
}

/// Count the days of `[start, end]` that fall inside one of `periods`.
///
/// Returns 0 when `start > end`.
pub fn count_recess_days(periods: &[RecessPeriod], start: Date, end: Date) -> u32 {
    start
        .range_inclusive(end)
        .filter(|&d| recess_containing(periods, d).is_some())
        .count() as u32
}
