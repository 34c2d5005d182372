//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

/// calweek - this week's events from an iCalendar feed
#[derive(Debug, Parser)]
#[command(name = "calweek")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Only show events whose summary contains this text (case-sensitive)
    #[arg(default_value = "")]
    pub filter: String,

    /// Calendar feed URL (overrides the configuration)
    #[arg(long, env = "CALWEEK_URL")]
    pub url: Option<String>,

    /// Path to configuration file
    #[arg(long, short, env = "CALWEEK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Download timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Use a Sunday 00:00 to Saturday 23:59:59 week
    #[arg(long)]
    pub midnight: bool,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,
}
