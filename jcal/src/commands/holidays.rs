use anyhow::{Context, Result};
use jalali::{FormatOptions, HolidayCalendar, IranianCalendar, JalaliDate};

/// Print every official holiday of `year`.
pub fn run(year: i32, options: &FormatOptions) -> Result<()> {
    let occurrences = IranianCalendar
        .occurrences_in_year(year)
        .with_context(|| format!("failed to resolve holidays for {year}"))?;

    for o in &occurrences {
        let date = JalaliDate::from_gregorian(o.gregorian_date);
        let name = if options.use_localized_digits {
            o.localized_name
        } else {
            o.name
        };
        println!(
            "{}  {}  {name}",
            date.format(options),
            o.gregorian_date.format("%Y-%m-%d")
        );
    }
    Ok(())
}
