//! # jalali
//!
//! Persian (Jalali / Solar Hijri) calendar: leap years, Gregorian ⇄ Jalali
//! conversion, localized formatting, Iranian holidays, and month grids.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than on the individual `jl-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! jalali = "0.1"
//! ```
//!
//! ```rust
//! use chrono::NaiveDate;
//! use jalali::{format_date, to_jalali, FormatOptions};
//!
//! let nowruz = to_jalali(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
//! assert_eq!((nowruz.year(), nowruz.month(), nowruz.day()), (1403, 1, 1));
//!
//! let text = format_date(1403, 1, 1, &FormatOptions::default()).unwrap();
//! assert_eq!(text, "۱۴۰۳/۰۱/۰۱");
//! ```
//!
//! ## Static tables
//!
//! ```rust
//! use jalali::{days_in_month, days_in_year, HOLIDAYS, MONTH_NAMES, PERSIAN_DIGITS, WEEKDAY_NAMES};
//!
//! assert_eq!(MONTH_NAMES[0], "فروردین");
//! assert_eq!(WEEKDAY_NAMES[6], "شنبه");
//! assert_eq!(PERSIAN_DIGITS[4], '۴');
//! assert_eq!(HOLIDAYS[0].name, "Nowruz");
//! assert_eq!(days_in_month(1403, 12), Ok(30));
//! assert_eq!(days_in_year(1404), 365);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions, reference-date settings, and digit utilities.
pub use jl_core as core;

/// Dates, conversion, formatting, holiday calendars, and month grids.
pub use jl_time as time;

pub use jl_core::{
    normalize_digits, to_localized_digits, Error, Result, ScopedReferenceDate, Settings,
    PERSIAN_DIGITS,
};
pub use jl_time::{
    days_in_month, days_in_year, format_date, is_leap_year, month_grid, month_grid_with,
    to_gregorian, to_jalali, CalendarCell, CalendarGrid, FormatOptions, Holiday, HolidayCalendar,
    HolidayCategory, HolidayOccurrence, IranianCalendar, JalaliDate, JalaliMonth, NullCalendar,
    Weekday, HOLIDAYS, MONTH_NAMES, WEEKDAY_NAMES,
};
