use std::{env, path::PathBuf, process};

use chrono::NaiveDate;

use school_admin::{
    cli::{self, CliError, ShellContext},
    config::ConfigManager,
    core::{Clock, FixedClock, SchoolManager, SystemClock},
    errors::SchoolError,
    init_with_filter,
    sample::demo_school,
};

#[derive(Debug, Default)]
struct Options {
    empty: bool,
    today: Option<NaiveDate>,
    config: Option<PathBuf>,
}

fn main() {
    let options = match parse_options(env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {message}");
            print_usage();
            process::exit(2);
        }
    };

    if let Err(err) = run(options) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(options: Options) -> Result<(), CliError> {
    let config_manager = match options.config {
        Some(path) => ConfigManager::new(path),
        None => ConfigManager::default_location(),
    };
    let config = config_manager.load()?;
    init_with_filter(config.log_filter.as_deref());

    let clock: Box<dyn Clock> = match options.today {
        Some(date) => Box::new(FixedClock::new(date)),
        None => Box::new(SystemClock),
    };
    let manager = if options.empty {
        SchoolManager::new(config, clock)
    } else {
        let school = demo_school(clock.today());
        SchoolManager::with_school(school, config, clock)
    };

    let mut context = ShellContext::new(manager);
    cli::run_cli(&mut context)
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<Options, SchoolError> {
    let mut options = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--empty" => options.empty = true,
            "--today" => {
                let raw = args
                    .next()
                    .ok_or_else(|| SchoolError::Config("--today needs a date".into()))?;
                let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
                    SchoolError::Config(format!("invalid date `{raw}`, expected YYYY-MM-DD"))
                })?;
                options.today = Some(date);
            }
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| SchoolError::Config("--config needs a path".into()))?;
                options.config = Some(PathBuf::from(path));
            }
            other => return Err(SchoolError::Config(format!("unknown option `{other}`"))),
        }
    }
    Ok(options)
}

fn print_usage() {
    eprintln!("Usage: school_admin_cli [--empty] [--today YYYY-MM-DD] [--config PATH]");
    eprintln!("Commands are read from stdin, one per line. Type `help` for the list.");
}
