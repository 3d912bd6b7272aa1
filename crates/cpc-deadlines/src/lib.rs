//! # cpc-deadlines
//!
//! Deadline calculation for Swiss civil procedure.
//!
//! The [`act`] module holds the rule table mapping each procedural act to
//! its delay; [`DeadlineCalculator`] applies a delay to a notification date,
//! honouring court recesses and moving the result off weekends and public
//! holidays, and explains every step in a [`TraceStep`] list.
//!
//! ```
//! use cpc_deadlines::act::{Act, AuthorizationType};
//! use cpc_deadlines::{DeadlineCalculator, DeadlineRequest};
//! use cpc_time::Date;
//!
//! let request = DeadlineRequest::new(Act::AuthorizationToProceed)
//!     .selector(AuthorizationType::Lease)
//!     .notified(Date::from_ymd(2024, 3, 1).unwrap());
//! let deadline = DeadlineCalculator::new().compute(&request).unwrap();
//! assert_eq!(deadline.due_date, Date::from_ymd(2024, 4, 1).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Procedural acts, selectors and the rule table.
pub mod act;

/// The deadline calculator.
pub mod calculator;

/// Delay specification.
pub mod delay;

/// Calculator settings.
pub mod settings;

/// Computation trace.
pub mod trace;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use act::{Act, AuthorizationType, ProcedureType, Selector, SelectorKind};
pub use calculator::{compute_deadline, Deadline, DeadlineCalculator, DeadlineRequest};
pub use delay::{DelaySpec, StartRule};
pub use settings::{RecessExtension, Settings};
pub use trace::TraceStep;
