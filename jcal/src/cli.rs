use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use jalali::FormatOptions;

/// Persian (Jalali) calendar.
#[derive(Parser)]
#[command(name = "jcal", version, about = "Persian (Jalali) calendar")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Treat this Gregorian date (YYYY-MM-DD) as today.
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    #[command(flatten)]
    pub format: FormatArgs,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Output formatting flags.
#[derive(Args)]
pub struct FormatArgs {
    /// Print ASCII digits instead of Persian digits.
    #[arg(long, global = true)]
    pub latin_digits: bool,

    /// Spell the month name instead of its number.
    #[arg(long, global = true)]
    pub month_name: bool,

    /// Separator placed between date components.
    #[arg(long, global = true, default_value = "/", value_name = "SEP")]
    pub separator: String,
}

impl FormatArgs {
    /// Map the flags onto library formatting options.
    pub fn options(&self) -> FormatOptions {
        FormatOptions {
            use_localized_digits: !self.latin_digits,
            include_month_name: self.month_name,
            include_year: true,
            separator: self.separator.clone(),
        }
    }
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to Jalali.
    ToJalali {
        /// Gregorian date as YYYY-MM-DD.
        date: NaiveDate,
    },
    /// Convert a Jalali date to Gregorian.
    ToGregorian {
        /// Jalali date as YYYY/MM/DD (Persian digits accepted).
        date: String,
    },
    /// Print a month grid; defaults to the current month.
    Month(MonthArgs),
    /// List the official holidays of a Jalali year.
    Holidays {
        /// Jalali year.
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },
}

/// Arguments for the `month` subcommand.
#[derive(Args)]
pub struct MonthArgs {
    /// Jalali year.
    #[arg(requires = "month", allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Month (1–12).
    pub month: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "jcal",
            "to-jalali",
            "2024-03-20",
            "--latin-digits",
            "--separator",
            "-",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let options = cli.format.options();
        assert!(!options.use_localized_digits);
        assert_eq!(options.separator, "-");
        assert!(matches!(cli.command, Command::ToJalali { .. }));
    }

    #[test]
    fn month_requires_both_or_neither() {
        assert!(Cli::try_parse_from(["jcal", "month"]).is_ok());
        assert!(Cli::try_parse_from(["jcal", "month", "1403", "1"]).is_ok());
        assert!(Cli::try_parse_from(["jcal", "month", "1403"]).is_err());
    }
}
