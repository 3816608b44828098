//! Error types for ethiocal.
//!
//! Every fallible operation in the workspace reports a variant of the single
//! `thiserror`-derived [`Error`] enum.  Precondition checks go through the
//! [`ensure!`](crate::ensure) macro.

use thiserror::Error;

/// The top-level error type used throughout ethiocal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Ethiopian month index outside `[1, 13]`.
    #[error("invalid month {0}: expected a value in [1, 13]")]
    InvalidMonth(i64),

    /// A year/month/day combination that does not exist in its calendar.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// The calendar converter rejected its input.
    #[error("conversion failed: {0}")]
    ConversionFailed(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

impl Error {
    /// Return `true` for errors produced by a calendar converter.
    pub fn is_conversion_failure(&self) -> bool {
        matches!(self, Error::ConversionFailed(_))
    }
}

/// Shorthand `Result` type used throughout ethiocal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ec_core::{ensure, errors::Error};
/// fn positive(x: i32) -> ec_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::InvalidMonth(14).to_string(),
            "invalid month 14: expected a value in [1, 13]"
        );
        assert_eq!(
            Error::ConversionFailed("year 0".into()).to_string(),
            "conversion failed: year 0"
        );
    }

    #[test]
    fn conversion_failure_predicate() {
        assert!(Error::ConversionFailed(String::new()).is_conversion_failure());
        assert!(!Error::InvalidMonth(0).is_conversion_failure());
    }
}
