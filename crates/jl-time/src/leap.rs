//! Jalali leap-year determination and Nowruz placement.
//!
//! The Persian calendar starts each year at the March equinox, so its leap
//! pattern follows astronomy rather than a fixed rule.  The arithmetic
//! approximation used here walks a table of *break years*; between two
//! breaks the years follow 33-year sub-cycles with eight leap years each,
//! and the table absorbs the irregularities where the astronomical pattern
//! drifts from that cycle.
//!
//! The walk yields the Gregorian day on which each Farvardin 1 falls.  A
//! year is a leap year exactly when 366 days separate its Nowruz from the
//! next one, so month lengths and year starts can never disagree.
//!
//! # Supported range
//! The table is authoritative for Jalali years −61 ..= 3177.  Outside that
//! range the walk still terminates and answers, but the result is an
//! extrapolation of the nearest sub-cycle rather than a reference value.

/// Break years delimiting the 33-year sub-cycles (Jalali years).
pub const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Offset between a Jalali year and the Gregorian year in which it begins.
pub(crate) const GREGORIAN_OFFSET: i32 = 621;

/// Where a Jalali year begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CyclePoint {
    /// Gregorian year in which the Jalali year begins.
    pub gregorian_year: i64,
    /// Day of March (Gregorian) on which Farvardin 1 falls.
    pub march: i64,
}

/// Return `true` if the Jalali `year` has 366 days (Esfand has 30 days).
///
/// ```
/// use jl_time::leap::is_leap_year;
/// assert!(is_leap_year(1403));
/// assert!(!is_leap_year(1404));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    let year = i64::from(year);
    nowruz_day_number(year + 1) - nowruz_day_number(year) == 366
}

/// Day number of Farvardin 1 of the Jalali `year`, on the proleptic
/// Gregorian count where 0001-01-01 is day 1.
pub(crate) fn nowruz_day_number(year: i64) -> i64 {
    let p = cycle_point(year);
    gregorian_day_number(p.gregorian_year, 3, p.march)
}

/// Walk the break table for `year`.
///
/// Arithmetic is carried out in `i64` so that every `i32` year (and its
/// successor) is accepted.
pub(crate) fn cycle_point(year: i64) -> CyclePoint {
    let mut leap: i64 = -14;
    let mut jp = i64::from(BREAKS[0]);
    let mut jump: i64 = 0;

    for jm in BREAKS[1..].iter().copied().map(i64::from) {
        jump = jm - jp;
        if year < jm {
            break;
        }
        leap += jump.div_euclid(33) * 8 + jump.rem_euclid(33).div_euclid(4);
        jp = jm;
    }

    let n = year - jp;
    leap += n.div_euclid(33) * 8 + (n.rem_euclid(33) + 3).div_euclid(4);
    if jump.rem_euclid(33) == 4 && jump - n == 4 {
        leap += 1;
    }

    let gregorian_year = year + i64::from(GREGORIAN_OFFSET);
    let gregorian_leaps = gregorian_year.div_euclid(4)
        - ((gregorian_year.div_euclid(100) + 1) * 3).div_euclid(4)
        - 150;

    CyclePoint {
        gregorian_year,
        march: 20 + leap - gregorian_leaps,
    }
}

/// Cumulative day-of-year offset at the start of each Gregorian month
/// (non-leap).
const MONTH_OFFSET: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

fn is_gregorian_leap(year: i64) -> bool {
    (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
}

/// Proleptic Gregorian day number, 0001-01-01 being day 1.
///
/// `month` must be in 1–12; `day` may exceed the month length, in which case
/// the count simply runs on into the following days.
fn gregorian_day_number(year: i64, month: usize, day: i64) -> i64 {
    let y = year - 1;
    let mut days = 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400);
    days += MONTH_OFFSET[month - 1];
    if month > 2 && is_gregorian_leap(year) {
        days += 1;
    }
    days + day
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn breaks_are_sorted() {
        assert!(BREAKS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(BREAKS.iter().filter(|&&b| b < 0).count(), 1);
    }

    #[test]
    fn known_leap_years() {
        let leaps: Vec<i32> = (1395..1420).filter(|&y| is_leap_year(y)).collect();
        assert_eq!(leaps, vec![1395, 1399, 1403, 1408, 1412, 1416]);
    }

    #[test]
    fn nowruz_day_of_march() {
        // Farvardin 1 of 1403 was 2024-03-20, of 1404 was 2025-03-21.
        let p = cycle_point(1403);
        assert_eq!(p.gregorian_year, 2024);
        assert_eq!(p.march, 20);
        assert_eq!(cycle_point(1404).march, 21);
        // 1357 began on 1978-03-21.
        assert_eq!(cycle_point(1357).march, 21);
    }

    #[test]
    fn day_number_matches_chrono() {
        let dates = [
            (1, 1, 1),
            (0, 1, 1),
            (0, 12, 31),
            (1600, 2, 29),
            (1900, 3, 1),
            (2024, 12, 31),
            (-400, 3, 1),
        ];
        for (y, m, d) in dates {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            assert_eq!(
                gregorian_day_number(i64::from(y), m as usize, i64::from(d)),
                i64::from(date.num_days_from_ce()),
                "{date}"
            );
        }
    }

    #[test]
    fn year_lengths_past_table_end() {
        // 3899 spans 366 days between Nowruz dates; 3900 spans 365.
        assert!(is_leap_year(3899));
        assert!(!is_leap_year(3900));
        for y in 3100..5000 {
            let len = nowruz_day_number(y + 1) - nowruz_day_number(y);
            assert!(len == 365 || len == 366, "year {y} spans {len} days");
        }
    }

    #[test]
    fn total_outside_table() {
        // Must not panic; values are extrapolated.
        for y in [i32::MIN, -10_000, -62, 3178, 5000, i32::MAX] {
            let _ = is_leap_year(y);
        }
    }
}
