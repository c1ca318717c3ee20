//! `JalaliDate` type and the Gregorian ⇄ Jalali converter.
//!
//! Both directions are day-offset arithmetic over a single epoch: the
//! proleptic Gregorian day number, with 0001-01-01 as day 1 (the same
//! numbering as `chrono::Datelike::num_days_from_ce`).  A Jalali year is
//! located by the day number of its Farvardin 1, which the break-point walk
//! in [`crate::leap`] yields as a day of March; everything else is the fixed
//! month layout (six 31-day months, five 30-day months, Esfand).
//!
//! # Supported range
//! Conversions round-trip exactly for every date `chrono::NaiveDate` can
//! represent: leap years are defined by the spacing of consecutive Nowruz
//! dates, so month lengths always tile the year.  The leap pattern itself is
//! authoritative for Jalali years −61 ..= 3177; outside that window it is an
//! extrapolation (see [`crate::leap`]).

use chrono::{Datelike, Days, NaiveDate};
use jl_core::ensure_date;
use jl_core::errors::{Error, Result};
use jl_core::utilities::data_parsers::parse_ymd;
use jl_core::Settings;

use crate::leap::{is_leap_year, nowruz_day_number, GREGORIAN_OFFSET};
use crate::month::JalaliMonth;
use crate::weekday::Weekday;

/// A date in the Persian (Jalali) solar calendar.
///
/// Always a valid calendar date: values are produced by the converter or by
/// the validating constructor [`JalaliDate::from_ymd`].  Ordering is
/// chronological.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDate {
    year: i32,
    month: JalaliMonth,
    day: u8,
    gregorian: NaiveDate,
}

impl JalaliDate {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// # Errors
    /// [`Error::InvalidDate`] if the month or day is out of range for the
    /// year, [`Error::OutOfRange`] if the date has no `NaiveDate` equivalent.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        let month = validate(year, month, day)?;
        let gregorian = gregorian_from_validated(year, month, day)?;
        Ok(JalaliDate {
            year,
            month,
            day,
            gregorian,
        })
    }

    /// Convert a Gregorian date.
    pub fn from_gregorian(date: NaiveDate) -> Self {
        to_jalali(date)
    }

    /// The Jalali date of [`Settings::today`].
    pub fn today() -> Self {
        to_jalali(Settings::instance().today())
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        self.month.number()
    }

    /// Return the month as an enum.
    pub fn jalali_month(&self) -> JalaliMonth {
        self.month
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return the weekday of the underlying Gregorian date.
    pub fn weekday(&self) -> Weekday {
        self.gregorian.weekday().into()
    }

    /// Return the equivalent Gregorian date.
    pub fn to_gregorian(&self) -> NaiveDate {
        self.gregorian
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        self.month.first_day_offset() + u16::from(self.day)
    }

    /// Return `true` if the year of this date is a leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days in the month containing this date.
    pub fn days_in_month(&self) -> u8 {
        self.month.days(self.year)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative moves backwards).
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if the result leaves the `NaiveDate` range.
    pub fn add_days(self, n: i64) -> Result<Self> {
        let days = Days::new(n.unsigned_abs());
        let shifted = if n >= 0 {
            self.gregorian.checked_add_days(days)
        } else {
            self.gregorian.checked_sub_days(days)
        };
        shifted
            .map(to_jalali)
            .ok_or_else(|| Error::OutOfRange(format!("{self} advanced by {n} days")))
    }

    /// Number of days from `self` to `other`; positive if `other` is later.
    pub fn days_between(&self, other: &JalaliDate) -> i64 {
        (other.gregorian - self.gregorian).num_days()
    }

    /// Return the first day of the month containing this date.
    pub fn first_of_month(self) -> Result<Self> {
        self.add_days(1 - i64::from(self.day))
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Result<Self> {
        self.add_days(i64::from(self.days_in_month()) - i64::from(self.day))
    }

    /// Return `true` if this is the last day of its month.
    pub fn is_end_of_month(&self) -> bool {
        self.day == self.days_in_month()
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl From<NaiveDate> for JalaliDate {
    fn from(date: NaiveDate) -> Self {
        to_jalali(date)
    }
}

impl From<JalaliDate> for NaiveDate {
    fn from(date: JalaliDate) -> Self {
        date.gregorian
    }
}

impl std::str::FromStr for JalaliDate {
    type Err = Error;

    /// Parse `YYYY/MM/DD` (or `YYYY-MM-DD`), ASCII or Persian digits.
    fn from_str(s: &str) -> Result<Self> {
        let (year, month, day) = parse_ymd(s)?;
        JalaliDate::from_ymd(year, month, day)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month(), self.day)
    }
}

impl std::fmt::Debug for JalaliDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "JalaliDate({:04}/{:02}/{:02}, {})",
            self.year,
            self.month(),
            self.day,
            self.weekday()
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for JalaliDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("JalaliDate", 4)?;
        s.serialize_field("year", &self.year)?;
        s.serialize_field("month", &self.month())?;
        s.serialize_field("day", &self.day)?;
        s.serialize_field("weekday", &self.weekday().number())?;
        s.end()
    }
}

// ── Converter ─────────────────────────────────────────────────────────────────

/// Convert a Gregorian date to the Jalali calendar.
///
/// ```
/// use chrono::NaiveDate;
/// use jl_time::date::to_jalali;
///
/// let d = to_jalali(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
/// assert_eq!((d.year(), d.month(), d.day()), (1403, 1, 1));
/// ```
pub fn to_jalali(date: NaiveDate) -> JalaliDate {
    let mut year = date.year() - GREGORIAN_OFFSET;
    let mut k = i64::from(date.num_days_from_ce()) - nowruz_day_number(i64::from(year));

    let (month, day) = if (0..=185).contains(&k) {
        (1 + k / 31, 1 + k % 31)
    } else {
        if k > 185 {
            k -= 186;
        } else {
            // Before Farvardin 1: the tail of the previous year.
            year -= 1;
            k += 179 + i64::from(is_leap_year(year));
        }
        (7 + k / 30, 1 + k % 30)
    };

    JalaliDate {
        year,
        month: JalaliMonth::ALL[month as usize - 1],
        day: day as u8,
        gregorian: date,
    }
}

/// Convert a Jalali date to the Gregorian calendar.
///
/// # Errors
/// [`Error::InvalidDate`] if `month` is outside 1–12 or `day` is outside the
/// month's length for `year`; [`Error::OutOfRange`] if the result cannot be
/// represented as a `NaiveDate`.
pub fn to_gregorian(year: i32, month: u8, day: u8) -> Result<NaiveDate> {
    let month = validate(year, month, day)?;
    gregorian_from_validated(year, month, day)
}

fn gregorian_from_validated(year: i32, month: JalaliMonth, day: u8) -> Result<NaiveDate> {
    let day_number = nowruz_day_number(i64::from(year))
        + i64::from(month.first_day_offset())
        + i64::from(day)
        - 1;
    i32::try_from(day_number)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or_else(|| {
            Error::OutOfRange(format!(
                "{year}/{:02}/{day:02} has no Gregorian equivalent",
                month.number()
            ))
        })
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// [`Error::InvalidDate`] if `month` is outside 1–12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8> {
    match JalaliMonth::from_number(month) {
        Some(m) => Ok(m.days(year)),
        None => Err(month_out_of_range(month)),
    }
}

/// Number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Check that `month`/`day` form a date of `year`.
pub(crate) fn validate(year: i32, month: u8, day: u8) -> Result<JalaliMonth> {
    let Some(m) = JalaliMonth::from_number(month) else {
        return Err(month_out_of_range(month));
    };
    let len = m.days(year);
    ensure_date!(
        (1..=len).contains(&day),
        "day {day} out of range [1, {len}] for {year}/{month:02}"
    );
    Ok(m)
}

fn month_out_of_range(month: u8) -> Error {
    Error::InvalidDate(format!("month {month} out of range [1, 12]"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
