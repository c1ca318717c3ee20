//! `HolidayCalendar` trait and the holiday record types.
//!
//! A holiday calendar is a compiled-in table of observances on fixed Jalali
//! month/day positions.  Every entry recurs on the same month and day each
//! year, so membership tests ignore the year; resolving a concrete
//! occurrence for a year goes through the converter.

use chrono::NaiveDate;
use jl_core::errors::Result;
use tracing::debug;

use crate::date::{to_gregorian, JalaliDate};
use crate::weekday::Weekday;

/// Kind of observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum HolidayCategory {
    /// Civil / national observance.
    National,
    /// Religious observance.
    Religious,
}

impl HolidayCategory {
    /// Whether observances of this category are official days off.
    ///
    /// Both categories currently are.
    pub fn is_official(&self) -> bool {
        match self {
            HolidayCategory::National | HolidayCategory::Religious => true,
        }
    }
}

/// A recurring observance on a fixed Jalali month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Holiday {
    /// Latin name.
    pub name: &'static str,
    /// Persian name.
    pub localized_name: &'static str,
    /// Month of the first day (1–12).
    pub month: u8,
    /// Day of the first day.
    pub day: u8,
    /// Number of consecutive days observed, starting at `day`.
    pub duration_days: u8,
    /// Kind of observance.
    pub category: HolidayCategory,
    /// Short description.
    pub description: &'static str,
}

impl Holiday {
    /// Return `true` if `(month, day)` falls on one of the observed days.
    pub fn covers(&self, month: u8, day: u8) -> bool {
        month == self.month
            && day >= self.day
            && u16::from(day) < u16::from(self.day) + u16::from(self.duration_days)
    }
}

/// A holiday resolved to a concrete year.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HolidayOccurrence {
    /// Latin name.
    pub name: &'static str,
    /// Persian name.
    pub localized_name: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Kind of observance.
    pub category: HolidayCategory,
    /// First observed day as `YYYY/MM/DD`.
    pub jalali_date: String,
    /// Gregorian date of the first observed day.
    pub gregorian_date: NaiveDate,
    /// Whether the day is an official day off.
    pub is_official: bool,
}

/// A table of recurring holidays.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// The compiled-in holiday table.
    fn holidays(&self) -> &[Holiday];

    /// Return `true` if the given Jalali date is a holiday.
    ///
    /// Only `(month, day)` is consulted; every entry recurs yearly.  A
    /// multi-day entry matches each of its `duration_days` consecutive days
    /// (see [`Holiday::covers`]), so Nowruz marks Farvardin 1 through 4.
    fn is_holiday(&self, _year: i32, month: u8, day: u8) -> bool {
        self.holidays().iter().any(|h| h.covers(month, day))
    }

    /// Return `true` if `weekday` is a weekly day of rest.
    ///
    /// The Persian week ends on Friday.
    fn is_weekend(&self, weekday: Weekday) -> bool {
        weekday == Weekday::Friday
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    fn is_business_day(&self, date: &JalaliDate) -> bool {
        !self.is_weekend(date.weekday()) && !self.is_holiday(date.year(), date.month(), date.day())
    }

    /// Resolve every table entry to its occurrence in `year`.
    ///
    /// # Errors
    /// Propagates [`jl_core::Error::OutOfRange`] when `year` lies outside the
    /// Gregorian range of the host date type.
    fn occurrences_in_year(&self, year: i32) -> Result<Vec<HolidayOccurrence>> {
        let occurrences = self
            .holidays()
            .iter()
            .map(|h| {
                Ok(HolidayOccurrence {
                    name: h.name,
                    localized_name: h.localized_name,
                    description: h.description,
                    category: h.category,
                    jalali_date: format!("{year:04}/{:02}/{:02}", h.month, h.day),
                    gregorian_date: to_gregorian(year, h.month, h.day)?,
                    is_official: h.category.is_official(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(
            calendar = self.name(),
            year,
            count = occurrences.len(),
            "resolved holiday occurrences"
        );
        Ok(occurrences)
    }
}

/// A calendar without holidays or weekends.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl HolidayCalendar for NullCalendar {
    fn name(&self) -> &str {
        "Null"
    }

    fn holidays(&self) -> &[Holiday] {
        &[]
    }

    fn is_weekend(&self, _weekday: Weekday) -> bool {
        false
    }
}
