mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;
use jalali::Settings;
use tracing::debug;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(today) = cli.today {
        debug!(%today, "reference date set");
        Settings::instance().set_reference_date(today);
    }
    let options = cli.format.options();

    match cli.command {
        Command::ToJalali { date } => commands::convert::to_jalali(date, &options),
        Command::ToGregorian { date } => commands::convert::to_gregorian(&date, &options),
        Command::Month(args) => {
            commands::month::run(args.year, args.month, options.use_localized_digits)
        }
        Command::Holidays { year } => commands::holidays::run(year, &options),
    }
}
