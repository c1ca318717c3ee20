//! Data formatting helpers.
//!
//! Transliterates ASCII digits into Extended Arabic-Indic (Persian) numerals,
//! the script used when rendering Jalali dates.

use std::fmt::Display;

/// Persian numeral glyphs, indexed by digit value (`۰` … `۹`).
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Replace every ASCII digit in the rendered `value` with its Persian glyph.
///
/// Any other character passes through unchanged, so the substitution is
/// length-preserving in characters.
///
/// ```
/// use jl_core::to_localized_digits;
/// assert_eq!(to_localized_digits(1403), "۱۴۰۳");
/// assert_eq!(to_localized_digits("1403/01/01"), "۱۴۰۳/۰۱/۰۱");
/// ```
pub fn to_localized_digits(value: impl Display) -> String {
    value.to_string().chars().map(localize_char).collect()
}

/// Render `n` zero-padded to `width` digits, optionally localized.
pub fn format_padded(n: u32, width: usize, localized: bool) -> String {
    let s = format!("{n:0width$}");
    if localized {
        to_localized_digits(s)
    } else {
        s
    }
}

fn localize_char(c: char) -> char {
    match c.to_digit(10) {
        Some(d) if c.is_ascii_digit() => PERSIAN_DIGITS[d as usize],
        _ => c,
    }
}
