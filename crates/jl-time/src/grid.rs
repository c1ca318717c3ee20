//! Month grids for calendar widgets.
//!
//! A [`CalendarGrid`] lays out one Jalali month as Saturday-first weeks of
//! seven [`CalendarCell`]s.  Cells before day 1 and after the last day of the
//! month are padding cells (`day == 0`).

use chrono::{Datelike, NaiveDate};
use jl_core::errors::Result;
use jl_core::Settings;
use tracing::{debug, trace};

use crate::calendar::HolidayCalendar;
use crate::calendars::IranianCalendar;
use crate::date::{days_in_month, to_gregorian, to_jalali};
use crate::weekday::Weekday;

/// Days per grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalendarCell {
    /// Day of the month, or `0` for a padding cell.
    pub day: u8,
    /// `true` for every non-padding cell.
    pub is_current_month: bool,
    /// `true` if the cell is the reference "today".
    pub is_today: bool,
    /// `true` if the cell falls on a holiday.
    pub is_holiday: bool,
    /// Gregorian date of the cell; `None` for padding.
    pub gregorian_date: Option<NaiveDate>,
}

impl CalendarCell {
    /// A padding cell.
    pub const PADDING: CalendarCell = CalendarCell {
        day: 0,
        is_current_month: false,
        is_today: false,
        is_holiday: false,
        gregorian_date: None,
    };

    /// Return `true` for padding cells.
    pub fn is_padding(&self) -> bool {
        self.day == 0
    }
}

/// A Jalali month laid out in Saturday-first weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalendarGrid {
    year: i32,
    month: u8,
    start_weekday: u8,
    weeks: Vec<[CalendarCell; DAYS_PER_WEEK]>,
}

impl CalendarGrid {
    /// Year of the month shown.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month shown (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Column of day 1 (Saturday = 0); equals the number of leading padding
    /// cells.
    pub fn start_weekday(&self) -> u8 {
        self.start_weekday
    }

    /// The weeks, in order.
    pub fn weeks(&self) -> &[[CalendarCell; DAYS_PER_WEEK]] {
        &self.weeks
    }

    /// Every cell in emission order, padding included.
    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks.iter().flatten()
    }

    /// Number of non-padding cells.
    pub fn day_count(&self) -> usize {
        self.cells().filter(|c| !c.is_padding()).count()
    }

    /// Consume the grid, returning its weeks.
    pub fn into_weeks(self) -> Vec<[CalendarCell; DAYS_PER_WEEK]> {
        self.weeks
    }
}

/// Build the grid for `month` of `year` with the Iranian holiday table and
/// [`Settings::today`] as the current day.
///
/// # Errors
/// [`jl_core::Error::InvalidDate`] if `month` is outside 1–12.
pub fn month_grid(year: i32, month: u8) -> Result<CalendarGrid> {
    month_grid_with(&IranianCalendar, year, month, Settings::instance().today())
}

/// Build the grid for `month` of `year` against an explicit holiday calendar
/// and reference date.
///
/// # Errors
/// [`jl_core::Error::InvalidDate`] if `month` is outside 1–12;
/// [`jl_core::Error::OutOfRange`] if the month has no Gregorian equivalent.
pub fn month_grid_with(
    calendar: &dyn HolidayCalendar,
    year: i32,
    month: u8,
    today: NaiveDate,
) -> Result<CalendarGrid> {
    let first = to_gregorian(year, month, 1)?;
    let start_weekday = Weekday::from(first.weekday()).saturday_first_index();
    let days = days_in_month(year, month)?;
    let today = to_jalali(today);

    let mut cells = Vec::with_capacity(usize::from(start_weekday) + usize::from(days) + 6);
    cells.extend(std::iter::repeat(CalendarCell::PADDING).take(usize::from(start_weekday)));
    for day in 1..=days {
        cells.push(CalendarCell {
            day,
            is_current_month: true,
            is_today: today.year() == year && today.month() == month && today.day() == day,
            is_holiday: calendar.is_holiday(year, month, day),
            gregorian_date: Some(to_gregorian(year, month, day)?),
        });
    }
    while cells.len() % DAYS_PER_WEEK != 0 {
        cells.push(CalendarCell::PADDING);
    }

    let weeks: Vec<[CalendarCell; DAYS_PER_WEEK]> = cells
        .chunks_exact(DAYS_PER_WEEK)
        .map(|w| [w[0], w[1], w[2], w[3], w[4], w[5], w[6]])
        .collect();

    trace!(year, month, start_weekday, days, "laid out month grid");
    debug!(
        calendar = calendar.name(),
        year,
        month,
        weeks = weeks.len(),
        "built month grid"
    );

    Ok(CalendarGrid {
        year,
        month,
        start_weekday,
        weeks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::NullCalendar;

    fn greg(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn farvardin_1403_layout() {
        // 1403/01/01 = 2024-03-20, a Wednesday: column 4 in a Saturday-first week.
        let grid = month_grid_with(&IranianCalendar, 1403, 1, greg(2024, 3, 25)).unwrap();
        assert_eq!(grid.start_weekday(), 4);
        assert_eq!(grid.weeks().len(), 5);
        assert_eq!(grid.day_count(), 31);

        let first_week = &grid.weeks()[0];
        assert!(first_week[..4].iter().all(CalendarCell::is_padding));
        assert_eq!(first_week[4].day, 1);
        assert_eq!(first_week[4].gregorian_date, Some(greg(2024, 3, 20)));
        assert!(first_week[4].is_holiday);
    }

    #[test]
    fn marks_today() {
        let grid = month_grid_with(&NullCalendar, 1403, 1, greg(2024, 3, 25)).unwrap();
        let today: Vec<u8> = grid.cells().filter(|c| c.is_today).map(|c| c.day).collect();
        assert_eq!(today, vec![6]);
        assert!(grid.cells().all(|c| !c.is_holiday));
    }

    #[test]
    fn today_in_other_month_marks_nothing() {
        let grid = month_grid_with(&NullCalendar, 1403, 2, greg(2024, 3, 25)).unwrap();
        assert!(grid.cells().all(|c| !c.is_today));
    }

    #[test]
    fn rejects_invalid_month() {
        assert!(month_grid_with(&NullCalendar, 1403, 13, greg(2024, 3, 25)).is_err());
        assert!(month_grid_with(&NullCalendar, 1403, 0, greg(2024, 3, 25)).is_err());
    }

    #[test]
    fn esfand_length_follows_leap_year() {
        let today = greg(2000, 1, 1);
        let leap = month_grid_with(&NullCalendar, 1403, 12, today).unwrap();
        let common = month_grid_with(&NullCalendar, 1404, 12, today).unwrap();
        assert_eq!(leap.day_count(), 30);
        assert_eq!(common.day_count(), 29);
    }
}
