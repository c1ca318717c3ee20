//! Error types for the jalali workspace.
//!
//! A single `thiserror`-derived enum covers every failure the engine can
//! report.  Conversions themselves are total; errors only arise from
//! impossible calendar dates supplied by the caller, from results that the
//! host date type cannot represent, and from unparseable date text.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The caller supplied an impossible calendar date (month or day out of
    /// range for the given year).
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A computed date falls outside the range of the host date type.
    #[error("date out of range: {0}")]
    OutOfRange(String),

    /// Date text could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate a calendar-date precondition.
///
/// Returns `Err(Error::InvalidDate(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use jl_core::{ensure_date, errors::Error};
/// fn check_month(m: u8) -> jl_core::errors::Result<u8> {
///     ensure_date!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(check_month(12).is_ok());
/// assert_eq!(
///     check_month(13),
///     Err(Error::InvalidDate("month 13 out of range [1, 12]".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure_date {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidDate(
                format!($($msg)*)
            ));
        }
    };
}

/// Return a parse error immediately.
///
/// # Example
/// ```
/// use jl_core::{fail_parse, errors::Error};
/// fn never() -> jl_core::errors::Result<()> {
///     fail_parse!("unexpected input {:?}", "x");
/// }
/// assert_eq!(never(), Err(Error::Parse("unexpected input \"x\"".into())));
/// ```
#[macro_export]
macro_rules! fail_parse {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Parse(format!($($msg)*)))
    };
}
