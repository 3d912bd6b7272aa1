//! `Calendar` trait.
//!
//! A calendar answers three questions about a date: is it a weekend, is it a
//! public holiday, and does it fall inside a court recess.  Weekends and
//! holidays are *non-business days* and push a finished due date forward;
//! recess days are business days that only suspend day-counting.

use crate::date::Date;
use crate::recess::{self, RecessPeriod};
use cpc_core::errors::Result;

/// A court calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Suisse (tribunaux civils)"`).
    fn name(&self) -> &str;

    /// Name of the public holiday falling on `date`, if any.
    fn holiday_name(&self, date: Date) -> Option<&'static str>;

    /// The recess windows observed by this calendar.
    fn recess_periods(&self) -> &[RecessPeriod] {
        &[]
    }

    /// Return `true` if `date` is a public holiday.
    fn is_public_holiday(&self, date: Date) -> bool {
        self.holiday_name(date).is_some()
    }

    /// Return `true` if `date` is a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is a weekend day or a public holiday.
    ///
    /// Recess days are not non-business days.
    fn is_non_business_day(&self, date: Date) -> bool {
        self.is_weekend(date) || self.is_public_holiday(date)
    }

    /// Return `true` if `date` is a business day.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_non_business_day(date)
    }

    /// Return the recess containing `date`, if any.
    fn recess_period(&self, date: Date) -> Option<&RecessPeriod> {
        recess::recess_containing(self.recess_periods(), date)
    }

    /// Return `true` if `date` falls inside a recess window.
    fn is_recess(&self, date: Date) -> bool {
        self.recess_period(date).is_some()
    }

    /// Count the recess days in the closed interval `[start, end]`.
    ///
    /// Returns 0 when `start > end`.
    fn count_recess_days(&self, start: Date, end: Date) -> u32 {
        recess::count_recess_days(self.recess_periods(), start, end)
    }

    /// Move `date` forward to the first business day on or after it.
    ///
    /// A business day is returned unchanged.
    fn roll_forward(&self, mut date: Date) -> Result<Date> {
        while self.is_non_business_day(date) {
            date = date.succ()?;
        }
        Ok(date)
    }
}
