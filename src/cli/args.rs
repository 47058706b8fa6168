//! Command-line argument definitions for the dive log book
//!
//! This module defines the CLI interface using the clap derive API and turns
//! parsed arguments into a [`LogbookConfig`].

use crate::config::LogbookConfig;
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// CLI arguments for the dive log book viewer
///
/// Reads dive log entries recorded through a Google Form from the published
/// response sheet and shows them grouped by session date.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dive-logbook",
    version,
    about = "Show scuba dive log entries from a shared Google Sheet",
    long_about = "Fetches the published CSV export of a dive log response sheet, parses each \
                  row into a dive record and renders the dives of one session date. Optional \
                  AI-generated insights can be requested per dive."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Also hides the sync spinner.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Show the dives of one session (newest session by default)
    Show(ShowArgs),
    /// List the session dates in the log book
    Dates(DatesArgs),
}

/// Where records come from and how the request behaves
#[derive(Debug, Clone, ClapArgs)]
pub struct SourceArgs {
    /// Published spreadsheet identifier
    #[arg(
        long = "sheet-id",
        value_name = "ID",
        global = true,
        help = "Google Sheet identifier to read from"
    )]
    pub sheet_id: Option<String>,

    /// Sheet tab holding the form responses
    #[arg(
        long = "tab",
        value_name = "NAME",
        global = true,
        help = "Sheet tab holding the form responses"
    )]
    pub tab: Option<String>,

    /// Local CSV export to read instead of the published sheet
    #[arg(
        long = "csv-file",
        value_name = "PATH",
        global = true,
        help = "Read a local CSV export instead of the published sheet"
    )]
    pub csv_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(
        long = "timeout",
        value_name = "SECS",
        global = true,
        help = "Timeout for outbound requests in seconds"
    )]
    pub timeout_secs: Option<u64>,

    /// Model used for insights
    #[arg(
        long = "model",
        value_name = "MODEL",
        global = true,
        help = "Model used for dive insights"
    )]
    pub model: Option<String>,
}

/// Arguments for the show command
#[derive(Debug, Clone, ClapArgs)]
pub struct ShowArgs {
    /// Session date to show
    ///
    /// Matched exactly against the date column. Defaults to the newest
    /// session in the log book.
    #[arg(
        short = 'd',
        long = "date",
        value_name = "DATE",
        help = "Session date to show (exact match)"
    )]
    pub date: Option<String>,

    /// Request a Pro Diver Insight for each shown dive
    ///
    /// Needs GEMINI_API_KEY (or API_KEY) in the environment; skipped with a
    /// warning otherwise.
    #[arg(long = "insights", help = "Request AI insights for each shown dive")]
    pub insights: bool,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format"
    )]
    pub format: OutputFormat,

    /// Re-fetch periodically until interrupted
    #[arg(
        long = "watch",
        value_name = "SECS",
        help = "Re-fetch every SECS seconds until Ctrl+C"
    )]
    pub watch_secs: Option<u64>,
}

/// Arguments for the dates command
#[derive(Debug, Clone, ClapArgs)]
pub struct DatesArgs {
    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format"
    )]
    pub format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered terminal page
    Text,
    /// JSON for scripting
    Json,
}

impl Default for ShowArgs {
    fn default() -> Self {
        Self {
            date: None,
            insights: false,
            format: OutputFormat::Text,
            watch_secs: None,
        }
    }
}

impl Args {
    /// Subcommand to run, `show` when none was given
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Show(ShowArgs::default()))
    }

    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(csv_file) = &self.source.csv_file {
            if !csv_file.is_file() {
                return Err(Error::configuration(format!(
                    "CSV file does not exist: {}",
                    csv_file.display()
                )));
            }
        }

        if self.source.timeout_secs == Some(0) {
            return Err(Error::configuration("Timeout must be at least 1 second"));
        }

        if let Some(Commands::Show(show)) = &self.command {
            if show.watch_secs == Some(0) {
                return Err(Error::configuration(
                    "Watch interval must be at least 1 second",
                ));
            }
            if show.watch_secs.is_some() && show.format == OutputFormat::Json {
                return Err(Error::configuration(
                    "--watch cannot be combined with --format json",
                ));
            }
        }

        Ok(())
    }

    /// Build the configuration: defaults, then the environment, then flags
    pub fn to_config(&self) -> LogbookConfig {
        let mut config = LogbookConfig::from_env();

        if let Some(sheet_id) = &self.source.sheet_id {
            config = config.with_sheet_id(sheet_id);
        }
        if let Some(tab) = &self.source.tab {
            config = config.with_tab_name(tab);
        }
        if let Some(csv_file) = &self.source.csv_file {
            config = config.with_csv_file(csv_file);
        }
        if let Some(secs) = self.source.timeout_secs {
            config = config.with_request_timeout(Duration::from_secs(secs));
        }
        if let Some(model) = &self.source.model {
            config = config.with_insight_model(model);
        }
        if let Commands::Show(show) = self.get_command() {
            if show.insights {
                config = config.with_insights();
            }
        }

        config
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

    /// Check if we should show the sync spinner (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
