//! # cpc-time
//!
//! Date, weekday, delay-period and court-calendar types: the calendar
//! predicates (weekend, public holiday, recess) and the recess day counter
//! that the deadline engine is built on.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Calendar` trait.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// `Date` type.
pub mod date;

/// `Period`: a delay length in a `TimeUnit`.
pub mod period;

/// Court recess windows and the recess day counter.
pub mod recess;

/// `TimeUnit`: days or months.
pub mod time_unit;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::Calendar;
pub use calendars::SwissCivilCourts;
pub use date::Date;
pub use period::Period;
pub use recess::RecessPeriod;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
