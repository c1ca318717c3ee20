//! Subcommand handlers.

pub mod convert;
pub mod holidays;
pub mod month;
