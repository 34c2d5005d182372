use std::process::ExitCode;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone, Utc};
use clap::Parser;
use tracing::debug;

use calweek::cli::Cli;
use calweek::config::Config;
use calweek::{events_from_ical_url, CalweekError, Result, WeekWindow};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = calweek::logging::init_tracing(cli.debug) {
        eprintln!("warning: logging disabled: {}", e);
    }

    match run(cli) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<Vec<String>> {
    let config = Config::load(cli.config.as_deref())?;

    let url = cli.url.or(config.url.clone()).ok_or_else(|| {
        CalweekError::Config(format!(
            "no calendar URL; pass --url or set `url` in {}",
            Config::default_path().display()
        ))
    })?;
    let timeout = cli.timeout.map(Duration::from_secs).unwrap_or_else(|| config.timeout());
    let midnight = cli.midnight || config.midnight_aligned;

    let window = match config.tz()? {
        Some(tz) => week_window(&Utc::now().with_timezone(&tz), midnight),
        None => week_window(&Local::now(), midnight),
    };
    debug!(start = %window.start(), end = %window.end(), "week window");

    events_from_ical_url(&url, &cli.filter, &window, timeout)
}

fn week_window<Tz: TimeZone>(now: &DateTime<Tz>, midnight: bool) -> WeekWindow {
    if midnight {
        WeekWindow::midnight_aligned(now)
    } else {
        WeekWindow::containing(now)
    }
}
