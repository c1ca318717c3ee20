//! # jl-core
//!
//! Core types and error definitions for the jalali workspace.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace – the error type and its macros, the process-wide `Settings`
//! (the reference date used as "today"), and the digit formatting and parsing
//! helpers used for Persian numerals.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure_date!` / `fail_parse!` macros.
pub mod errors;

/// Global library settings (reference date).
pub mod settings;

/// Digit transliteration and date-text parsing helpers.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedReferenceDate, Settings};
pub use utilities::data_formatters::{to_localized_digits, PERSIAN_DIGITS};
pub use utilities::data_parsers::normalize_digits;
