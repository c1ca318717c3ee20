//! # jl-time
//!
//! Jalali date, leap-year, conversion, formatting, holiday-calendar, and
//! month-grid types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` trait and holiday records.
pub mod calendar;

/// Concrete holiday calendars.
pub mod calendars;

/// `JalaliDate` type and the Gregorian ⇄ Jalali converter.
pub mod date;

/// Localized date formatting.
pub mod format;

/// Month grids for calendar widgets.
pub mod grid;

/// Leap-year determination.
pub mod leap;

/// `JalaliMonth`, the month of the year.
pub mod month;

/// `Weekday`, the day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Holiday, HolidayCalendar, HolidayCategory, HolidayOccurrence, NullCalendar};
pub use calendars::{IranianCalendar, HOLIDAYS};
pub use date::{days_in_month, days_in_year, to_gregorian, to_jalali, JalaliDate};
pub use format::{format_date, FormatOptions};
pub use grid::{month_grid, month_grid_with, CalendarCell, CalendarGrid};
pub use leap::{is_leap_year, BREAKS};
pub use month::{JalaliMonth, MONTH_NAMES};
pub use weekday::{Weekday, WEEKDAY_NAMES};
