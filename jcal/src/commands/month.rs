use std::fmt::Display;

use anyhow::{Context, Result};
use jalali::{month_grid, to_localized_digits, CalendarGrid, JalaliDate, JalaliMonth, Weekday};

/// Print the grid for `year`/`month`, or for the current month when omitted.
pub fn run(year: Option<i32>, month: Option<u8>, localized: bool) -> Result<()> {
    let (year, month) = match (year, month) {
        (Some(y), Some(m)) => (y, m),
        _ => {
            let today = JalaliDate::today();
            (today.year(), today.month())
        }
    };
    let grid =
        month_grid(year, month).with_context(|| format!("failed to build grid for {year}/{month}"))?;
    print!("{}", render(&grid, localized));
    Ok(())
}

/// Render a grid as text: title, Saturday-first header, one line per week.
///
/// Holidays carry a trailing `*`; today is bracketed.
pub(crate) fn render(grid: &CalendarGrid, localized: bool) -> String {
    let name = JalaliMonth::from_number(grid.month()).map_or("", |m| {
        if localized {
            m.localized_name()
        } else {
            m.long_name()
        }
    });
    let mut lines = vec![format!("{name} {}", number(grid.year(), localized))];

    let header: String = (0..7u8)
        .filter_map(|i| Weekday::from_number((i + 6) % 7))
        .map(|w| -> String {
            if localized {
                w.localized_name().chars().take(1).collect()
            } else {
                w.to_string().chars().take(2).collect()
            }
        })
        .map(|s| format!("{s:>4}"))
        .collect();
    lines.push(header);

    for week in grid.weeks() {
        let row: String = week
            .iter()
            .map(|cell| {
                let mut text = String::new();
                if !cell.is_padding() {
                    text = number(cell.day, localized);
                    if cell.is_holiday {
                        text.push('*');
                    }
                    if cell.is_today {
                        text = format!("[{text}]");
                    }
                }
                format!("{text:>4}")
            })
            .collect();
        lines.push(row);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn number(n: impl Display, localized: bool) -> String {
    if localized {
        to_localized_digits(n)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use jalali::{month_grid_with, IranianCalendar};

    #[test]
    fn renders_farvardin_1403() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 25).unwrap();
        let grid = month_grid_with(&IranianCalendar, 1403, 1, today).unwrap();
        let text = render(&grid, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Farvardin 1403");
        assert_eq!(lines[1], "  Sa  Su  Mo  Tu  We  Th  Fr");
        assert_eq!(lines[2], "                  1*  2*  3*");
        assert!(lines[3].contains("[6]"));
        assert_eq!(lines.len(), 2 + grid.weeks().len());
    }

    #[test]
    fn renders_persian_digits() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 25).unwrap();
        let grid = month_grid_with(&IranianCalendar, 1403, 1, today).unwrap();
        let text = render(&grid, true);
        assert!(text.ends_with('\n'));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "فروردین ۱۴۰۳");
        assert_eq!(lines[1].chars().filter(|c| !c.is_whitespace()).count(), 7);
        assert!(lines[2].ends_with("  ۱*  ۲*  ۳*"));
        assert!(lines[3].contains("[۶]"));
    }
}
