//! `Date` type.
//!
//! Dates are stored as a serial number of days since an epoch, which makes
//! day arithmetic a plain integer addition and comparisons trivial.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900.
//! * The valid date range is 1900-01-01 to 2199-12-31.
//!
//! Every arithmetic operation returns a new `Date`; a value is never mutated
//! in place.

use std::str::FromStr;

use crate::weekday::Weekday;
use cpc_core::errors::{Error, Result};
use cpc_core::utilities::data_formatters::{format_iso_date, format_swiss_date};
use cpc_core::utilities::data_parsers::parse_date;

/// A civil calendar date with no time-of-day component.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(month, day)`, the part of the date that fixed holidays and
    /// recess windows are keyed on.
    pub fn month_day(&self) -> (u8, u8) {
        let (_, m, d) = ymd_from_serial(self.0);
        (m, d)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Jan 1, 1900 is a Monday (ordinal 1).
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).unwrap_or(Weekday::Monday)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .filter(|&serial| serial >= Self::MIN.0 && serial <= Self::MAX.0)
            .map(Date)
            .ok_or_else(|| {
                Error::Date(format!("date arithmetic: {self} {n:+} days is out of range"))
            })
    }

    /// The following calendar day.
    pub fn succ(self) -> Result<Self> {
        self.add_days(1)
    }

    /// Advance by `n` calendar months.
    ///
    /// When the target month is shorter than the current day-of-month the
    /// result is clamped to the target month's last day (Jan 31 + 1 month =
    /// Feb 28/29).  Callers detect the clamp by comparing
    /// [`day_of_month`](Self::day_of_month) before and after.
    pub fn add_months(self, n: i32) -> Result<Self> {
        let (y, m, d) = ymd_from_serial(self.0);
        let total_months = m as i32 - 1 + n;
        let new_y = y as i32 + total_months.div_euclid(12);
        let new_m = (total_months.rem_euclid(12) + 1) as u8;
        if !(1900..=2199).contains(&new_y) {
            return Err(Error::Date(format!("year {new_y} out of range")));
        }
        let new_y = new_y as u16;
        let new_d = d.min(days_in_month(new_y, new_m));
        Ok(Date(serial_from_ymd(new_y, new_m, new_d)))
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Iterate over every date in the closed interval `[self, end]`.
    ///
    /// Yields nothing when `end < self`.
    pub fn range_inclusive(self, end: Date) -> impl Iterator<Item = Date> {
        (self.0..=end.0).map(Date)
    }

    // ── Formatting ────────────────────────────────────────────────────────────

    /// Format as `dd.mm.yyyy`, the way Swiss courts write dates.
    pub fn to_swiss_string(&self) -> String {
        let (y, m, d) = ymd_from_serial(self.0);
        format_swiss_date(y, m, d)
    }
}

/// Signed number of calendar days from `rhs` to `self`.
impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    /// Parse `YYYY-MM-DD` or `DD.MM.YYYY`.
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) =
            parse_date(s).ok_or_else(|| Error::Date(format!("cannot parse date `{s}`")))?;
        Date::from_ymd(y, m, d)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        f.write_str(&format_iso_date(y, m, d))
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Convert (year, month, day) to a serial number.
///
/// Serial 1 = 1900-01-01.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;

    // Days in years 1900..year
    let mut serial = (y - 1900) * 365;
    // Leap years in [1901, year); 1900 itself is not a leap year
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // Estimate, then adjust until serial falls within the year
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
