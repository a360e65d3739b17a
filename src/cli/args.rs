//! Command-line argument definitions for the beach forecast
//!
//! The CLI is a single command: fetch the forecast once and print the
//! playability verdicts. Source selection, timeout and output shape can be
//! overridden on the command line, the target also through the environment.

use crate::constants::TARGET_ENV_VAR;
use crate::{Error, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the beach forecast
///
/// Scrapes an hourly wind forecast and reports, for the next five days,
/// whether the wind is playable for beach volleyball.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "beach-forecast",
    version,
    about = "Five-day beach volleyball wind forecast",
    long_about = "Fetches an hourly wind forecast table, splits it into the next five days and \
                  rates the weekday evening (from 5PM) and weekend morning (from 9AM) and \
                  afternoon (from 3PM) windows for wind strength and gustiness."
)]
pub struct Args {
    /// Forecast page URL
    #[arg(
        long = "target",
        value_name = "URL",
        env = TARGET_ENV_VAR,
        help = "Forecast page URL"
    )]
    pub target: Option<String>,

    /// Saved forecast page to read instead of fetching; wins over the target
    #[arg(long = "snapshot", value_name = "FILE", help = "Read a saved forecast page")]
    pub snapshot: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long = "config", value_name = "FILE", help = "JSON configuration file")]
    pub config: Option<PathBuf>,

    /// Page wait in seconds
    #[arg(
        long = "timeout",
        value_name = "SECS",
        help = "Seconds to wait for the forecast page [default: 10]"
    )]
    pub timeout: Option<u64>,

    /// Draw an hourly chart for each day before the verdicts
    #[arg(long = "plot", help = "Draw hourly wind charts")]
    pub plot: bool,

    /// Output format
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output formats for the verdicts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One verdict line per window
    #[default]
    Human,
    /// Forecast document with per-window statistics
    Json,
}

impl Args {
    /// Validate argument combinations clap cannot express
    pub fn validate(&self) -> Result<()> {
        if self.timeout == Some(0) {
            return Err(Error::configuration("--timeout must be at least 1 second"));
        }

        if let Some(snapshot) = &self.snapshot {
            if !snapshot.exists() {
                return Err(Error::configuration(format!(
                    "Snapshot file does not exist: {}",
                    snapshot.display()
                )));
            }
        }

        if self.plot && self.output_format == OutputFormat::Json {
            return Err(Error::configuration(
                "--plot is only available with human output",
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
