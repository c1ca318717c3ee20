//! Localized rendering of Jalali dates.
//!
//! [`format_date`] composes `year<sep>month<sep>day` according to a
//! [`FormatOptions`] value.  Numerals can be rendered in Persian digits and
//! the month can be spelled out by its Persian name.

use jl_core::errors::Result;
use jl_core::utilities::data_formatters::{format_padded, to_localized_digits};

use crate::date::{validate, JalaliDate};
use crate::month::JalaliMonth;

/// Display options for [`format_date`].
///
/// With the `serde` feature enabled the options deserialize from camelCase
/// keys (`useLocalizedDigits`, `includeMonthName`, `includeYear`,
/// `separator`); missing keys take their defaults and unknown keys are
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase", deny_unknown_fields)
)]
pub struct FormatOptions {
    /// Render numerals with Persian digits (default `true`).
    pub use_localized_digits: bool,
    /// Spell the month out by name instead of a two-digit number
    /// (default `false`).
    pub include_month_name: bool,
    /// Emit the year segment (default `true`).
    pub include_year: bool,
    /// Text placed between segments (default `"/"`).
    pub separator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            use_localized_digits: true,
            include_month_name: false,
            include_year: true,
            separator: "/".to_string(),
        }
    }
}

/// Format a Jalali date.
///
/// # Errors
/// [`jl_core::Error::InvalidDate`] if `month` or `day` is out of range.
///
/// ```
/// use jl_time::format::{format_date, FormatOptions};
///
/// assert_eq!(format_date(1403, 1, 1, &FormatOptions::default()).unwrap(), "۱۴۰۳/۰۱/۰۱");
/// ```
pub fn format_date(year: i32, month: u8, day: u8, options: &FormatOptions) -> Result<String> {
    let month = validate(year, month, day)?;
    Ok(compose(year, month, day, options))
}

impl JalaliDate {
    /// Format this date with the given options.
    pub fn format(&self, options: &FormatOptions) -> String {
        compose(self.year(), self.jalali_month(), self.day(), options)
    }
}

fn compose(year: i32, month: JalaliMonth, day: u8, options: &FormatOptions) -> String {
    let localized = options.use_localized_digits;
    let mut segments = Vec::with_capacity(3);
    if options.include_year {
        segments.push(if localized {
            to_localized_digits(year)
        } else {
            year.to_string()
        });
    }
    // Month names are never digit-localized.
    segments.push(if options.include_month_name {
        month.localized_name().to_string()
    } else {
        format_padded(u32::from(month.number()), 2, localized)
    });
    segments.push(format_padded(u32::from(day), 2, localized));
    segments.join(&options.separator)
}
