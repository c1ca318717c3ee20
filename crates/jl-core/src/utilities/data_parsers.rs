//! Data parsing helpers.
//!
//! Normalizes Persian and Arabic-Indic digits back to ASCII and splits
//! `YYYY/MM/DD`-style date text into its numeric components.

use crate::errors::Result;
use crate::fail_parse;

/// Replace Persian (`۰`–`۹`) and Arabic-Indic (`٠`–`٩`) digits with their
/// ASCII equivalents.  Other characters pass through unchanged.
pub fn normalize_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
            '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
            _ => c,
        })
        .collect()
}

/// Parse `year/month/day` text into its components.
///
/// Either `/` or `-` may separate the fields, and digits may be ASCII,
/// Persian, or Arabic-Indic.  A leading `-` marks a negative year.  Only the
/// shape is checked here; calendar validity is the caller's concern.
pub fn parse_ymd(s: &str) -> Result<(i32, u8, u8)> {
    let normalized = normalize_digits(s.trim());
    let (sign, body) = match normalized.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, normalized.as_str()),
    };
    let parts: Vec<&str> = body.split(['/', '-']).collect();
    let [year, month, day] = parts.as_slice() else {
        fail_parse!("expected year/month/day, got {s:?}");
    };
    let Ok(year) = year.parse::<i32>() else {
        fail_parse!("invalid year {year:?} in {s:?}");
    };
    let year = sign * year;
    let Ok(month) = month.parse::<u8>() else {
        fail_parse!("invalid month {month:?} in {s:?}");
    };
    let Ok(day) = day.parse::<u8>() else {
        fail_parse!("invalid day {day:?} in {s:?}");
    };
    Ok((year, month, day))
}
