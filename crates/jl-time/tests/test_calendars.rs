//! Holiday calendar tests.

use chrono::NaiveDate;
use jl_time::{
    Holiday, HolidayCalendar, HolidayCategory, IranianCalendar, JalaliDate, NullCalendar, HOLIDAYS,
};

fn greg(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A calendar with one two-day observance and no weekend override.
#[derive(Debug)]
struct HarvestCalendar;

static HARVEST: [Holiday; 1] = [Holiday {
    name: "Harvest",
    localized_name: "برداشت",
    month: 6,
    day: 30,
    duration_days: 2,
    category: HolidayCategory::National,
    description: "two-day test observance",
}];

impl HolidayCalendar for HarvestCalendar {
    fn name(&self) -> &str {
        "Harvest"
    }

    fn holidays(&self) -> &[Holiday] {
        &HARVEST
    }
}

// ─── Membership ───────────────────────────────────────────────────────────────

#[test]
fn nowruz_is_holiday_regardless_of_year() {
    let cal = IranianCalendar;
    for year in [1, 1200, 1357, 1403, 1404, 2000] {
        assert!(cal.is_holiday(year, 1, 1), "Nowruz {year}");
    }
}

#[test]
fn every_table_entry_is_a_holiday() {
    let cal = IranianCalendar;
    for h in cal.holidays() {
        for offset in 0..h.duration_days {
            assert!(cal.is_holiday(1403, h.month, h.day + offset), "{}", h.name);
        }
    }
}

#[test]
fn multi_day_entries_cover_each_day() {
    let cal = IranianCalendar;
    for day in 1..=4 {
        assert!(cal.is_holiday(1403, 1, day), "Farvardin {day}");
    }
    assert!(!cal.is_holiday(1403, 1, 5));

    let harvest = HarvestCalendar;
    assert!(!harvest.is_holiday(1403, 6, 29));
    assert!(harvest.is_holiday(1403, 6, 30));
    assert!(harvest.is_holiday(1403, 6, 31));
    assert!(!harvest.is_holiday(1403, 7, 1));
}

#[test]
fn occurrences_report_first_day_of_span() {
    let occurrences = HarvestCalendar.occurrences_in_year(1403).unwrap();
    assert_eq!(occurrences.len(), 1);
    assert_eq!(occurrences[0].jalali_date, "1403/06/30");
    assert_eq!(occurrences[0].gregorian_date, greg(2024, 9, 20));
}

#[test]
fn non_holidays() {
    let cal = IranianCalendar;
    assert!(!cal.is_holiday(1403, 1, 5));
    assert!(!cal.is_holiday(1403, 7, 10));
    assert!(!cal.is_holiday(1403, 12, 30));
    // Out-of-range inputs are simply not holidays.
    assert!(!cal.is_holiday(1403, 13, 1));
    assert!(!cal.is_holiday(1403, 1, 0));
}

#[test]
fn business_days() {
    let cal = IranianCalendar;
    // 1403/01/02 falls inside Nowruz.
    assert!(!cal.is_business_day(&JalaliDate::from_ymd(1403, 1, 2).unwrap()));
    // 1403/01/17 (2024-04-05) is a Friday.
    assert!(!cal.is_business_day(&JalaliDate::from_ymd(1403, 1, 17).unwrap()));
    // 1403/01/18 (2024-04-06) is an ordinary Saturday.
    assert!(cal.is_business_day(&JalaliDate::from_ymd(1403, 1, 18).unwrap()));
}

// ─── Occurrences ──────────────────────────────────────────────────────────────

#[test]
fn occurrences_in_1403() {
    let occurrences = IranianCalendar.occurrences_in_year(1403).unwrap();
    assert_eq!(occurrences.len(), HOLIDAYS.len());

    let nowruz = &occurrences[0];
    assert_eq!(nowruz.name, "Nowruz");
    assert_eq!(nowruz.jalali_date, "1403/01/01");
    assert_eq!(nowruz.gregorian_date, greg(2024, 3, 20));
    assert_eq!(nowruz.category, HolidayCategory::National);
    assert!(nowruz.is_official);

    let revolution = occurrences
        .iter()
        .find(|o| o.name == "Revolution Victory Day")
        .unwrap();
    assert_eq!(revolution.jalali_date, "1403/11/22");
    assert_eq!(revolution.gregorian_date, greg(2025, 2, 10));
}

#[test]
fn revolution_day_1357() {
    let occurrences = IranianCalendar.occurrences_in_year(1357).unwrap();
    let revolution = occurrences.iter().find(|o| o.jalali_date == "1357/11/22").unwrap();
    assert_eq!(revolution.gregorian_date, greg(1979, 2, 11));
}

#[test]
fn occurrences_follow_table_order() {
    let occurrences = IranianCalendar.occurrences_in_year(1404).unwrap();
    let names: Vec<&str> = occurrences.iter().map(|o| o.name).collect();
    let table: Vec<&str> = HOLIDAYS.iter().map(|h| h.name).collect();
    assert_eq!(names, table);
    assert!(occurrences.windows(2).all(|w| w[0].gregorian_date < w[1].gregorian_date));
}

#[test]
fn null_calendar_has_no_occurrences() {
    assert!(NullCalendar.occurrences_in_year(1403).unwrap().is_empty());
    assert!(!NullCalendar.is_holiday(1403, 1, 1));
}
