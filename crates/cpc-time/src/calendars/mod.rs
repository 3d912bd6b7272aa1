//! Concrete court calendars.

/// Swiss civil-court calendar.
pub mod switzerland;

pub use switzerland::SwissCivilCourts;
