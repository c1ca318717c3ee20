use anyhow::{Context, Result};
use chrono::NaiveDate;
use jalali::{FormatOptions, JalaliDate};
use tracing::info;

/// Print the Jalali date for a Gregorian date.
pub fn to_jalali(date: NaiveDate, options: &FormatOptions) -> Result<()> {
    let jalali = JalaliDate::from_gregorian(date);
    info!(%date, %jalali, "converted to jalali");
    println!("{}", describe(&jalali, options));
    Ok(())
}

/// Print the Gregorian date for Jalali text such as `1403/01/01`.
pub fn to_gregorian(text: &str, options: &FormatOptions) -> Result<()> {
    let jalali: JalaliDate = text
        .parse()
        .with_context(|| format!("failed to read Jalali date {text:?}"))?;
    let gregorian = jalali.to_gregorian();
    info!(%jalali, %gregorian, "converted to gregorian");
    println!(
        "{} {}",
        gregorian.format("%Y-%m-%d"),
        weekday_name(&jalali, options)
    );
    Ok(())
}

/// A formatted date followed by its weekday name.
pub(crate) fn describe(date: &JalaliDate, options: &FormatOptions) -> String {
    format!("{} {}", date.format(options), weekday_name(date, options))
}

fn weekday_name(date: &JalaliDate, options: &FormatOptions) -> String {
    if options.use_localized_digits {
        date.weekday().localized_name().to_string()
    } else {
        date.weekday().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_nowruz() {
        let date = JalaliDate::from_ymd(1403, 1, 1).unwrap();
        let latin = FormatOptions {
            use_localized_digits: false,
            ..FormatOptions::default()
        };
        assert_eq!(describe(&date, &latin), "1403/01/01 Wednesday");
        assert_eq!(describe(&date, &FormatOptions::default()), "۱۴۰۳/۰۱/۰۱ چهارشنبه");
    }

    #[test]
    fn rejects_bad_jalali_text() {
        let err = to_gregorian("1403/13/01", &FormatOptions::default()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid date"));
    }
}
