//! Concrete holiday calendars.

/// Iran official calendar.
pub mod iran;

pub use iran::{IranianCalendar, HOLIDAYS};
