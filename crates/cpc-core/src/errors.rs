//! Error types for delais-cpc.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum below.  Preconditions and
//! postconditions are raised through the [`ensure!`](crate::ensure) and
//! [`ensure_post!`](crate::ensure_post) macros.

use thiserror::Error;

/// The top-level error type used throughout delais-cpc.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated (raised by `ensure_post!`).
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),

    /// Date-related error (out of range, invalid day, unparsable text).
    #[error("date error: {0}")]
    Date(String),

    /// The act identifier is not part of the rule table.
    #[error("unknown act: {0}")]
    UnknownAct(String),

    /// The act requires a selector (procedure or authorization type) and
    /// none was supplied.
    #[error("act `{act}` requires a {selector} selector")]
    MissingSelector {
        /// Key of the act being computed.
        act: &'static str,
        /// Kind of selector the act expects.
        selector: &'static str,
    },

    /// A selector was supplied but it is unknown or of the wrong kind.
    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    /// A required input field is absent.
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Return `true` when the error means the caller did not supply every
    /// required field, as opposed to supplying something wrong.
    pub fn is_incomplete_input(&self) -> bool {
        matches!(self, Error::MissingSelector { .. } | Error::MissingInput(_))
    }
}

/// Shorthand `Result` type used throughout delais-cpc.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cpc_core::{ensure, errors::Error};
/// fn positive(x: u32) -> cpc_core::errors::Result<u32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Postcondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cpc_core::{ensure_post, errors::Error};
/// fn double(x: u32) -> cpc_core::errors::Result<u32> {
///     let result = x * 2;
///     ensure_post!(result % 2 == 0, "result must be even, got {result}");
///     Ok(result)
/// }
/// assert!(double(3).is_ok());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_selector_message() {
        let err = Error::MissingSelector {
            act: "appel",
            selector: "procedure",
        };
        assert_eq!(err.to_string(), "act `appel` requires a procedure selector");
        assert!(err.is_incomplete_input());
    }

    #[test]
    fn unknown_act_is_not_incomplete() {
        let err = Error::UnknownAct("divorce".into());
        assert!(!err.is_incomplete_input());
        assert_eq!(err.to_string(), "unknown act: divorce");
    }
}
