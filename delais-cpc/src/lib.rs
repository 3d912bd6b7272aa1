//! # delais-cpc
//!
//! Deadline calculation for Swiss civil procedure (CPC).
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `cpc-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use delais_cpc::deadlines::compute_deadline;
//! use delais_cpc::time::Date;
//!
//! let notified = Date::from_ymd(2024, 7, 1).unwrap();
//! let deadline = compute_deadline("appel", Some("ordinaire"), notified).unwrap();
//! assert_eq!(deadline.due_date, Date::from_ymd(2024, 9, 2).unwrap());
//! for line in deadline.lines() {
//!     println!("{line}");
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and text helpers.
pub use cpc_core as core;

/// Dates, calendars, holidays and recesses.
pub use cpc_time as time;

/// Act rule table and deadline calculator.
pub use cpc_deadlines as deadlines;
