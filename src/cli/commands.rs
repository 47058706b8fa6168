//! Command implementations for the dive log book CLI
//!
//! This module wires configuration, logging, fetching and rendering together
//! for each subcommand.

use crate::app::models::{DiveEntry, GeminiInsight};
use crate::app::services::insight::{InsightProvider, fetch_insights, provider_from_config};
use crate::app::services::selection::unique_dates;
use crate::app::services::sheet_source::{DiveLogService, FetchOutcome, SheetSource};
use crate::app::state::{LoadState, LogbookController};
use crate::app::view;
use crate::cli::args::{Args, Commands, DatesArgs, OutputFormat, ShowArgs};
use crate::config::LogbookConfig;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// JSON document emitted by `show --format json`
#[derive(Debug, Serialize)]
pub struct SessionReport<'a> {
    /// `"loaded"` or `"failed"`
    pub status: &'static str,
    pub dates: Vec<String>,
    pub selected_date: Option<String>,
    pub dives: Vec<DiveReport<'a>>,
}

/// One dive with its insight, if one was requested and returned
#[derive(Debug, Serialize)]
pub struct DiveReport<'a> {
    #[serde(flatten)]
    pub dive: &'a DiveEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight: Option<&'a GeminiInsight>,
}

/// Main command runner
///
/// Sets up logging, validates the arguments, builds the configuration and
/// dispatches to the chosen subcommand (`show` when none is given).
pub async fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;

    info!("Starting dive log book");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = args.to_config();
    config.validate()?;
    debug!("Loaded configuration: {:?}", config);

    let service = DiveLogService::new(SheetSource::from_config(&config)?);

    match args.get_command() {
        Commands::Show(show) => run_show(&args, &config, &service, &show).await,
        Commands::Dates(dates) => run_dates(&args, &service, &dates).await,
    }
}

/// Set up tracing on stderr, with `RUST_LOG` taking precedence over flags
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dive_logbook={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Show one session, once or on a fixed interval
async fn run_show(
    args: &Args,
    config: &LogbookConfig,
    service: &DiveLogService<SheetSource>,
    show: &ShowArgs,
) -> Result<()> {
    let provider = provider_from_config(config);
    if config.insight.enabled && provider.is_none() {
        warn!("Insights requested but unavailable; showing dives without them");
    }

    let mut controller = LogbookController::new();
    let mut requested_date = show.date.clone();

    let Some(secs) = show.watch_secs else {
        return sync_and_present(
            args,
            service,
            provider.as_ref(),
            show,
            &mut controller,
            &mut requested_date,
        )
        .await;
    };

    info!("Refreshing every {}s, press Ctrl+C to stop", secs);
    let mut ticker = tokio::time::interval(Duration::from_secs(secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        // --date stays pending until a loaded sync applies it; later syncs
        // keep whatever session the controller remembers.
        sync_and_present(
            args,
            service,
            provider.as_ref(),
            show,
            &mut controller,
            &mut requested_date,
        )
        .await?;
    }
}

/// One fetch cycle: load, select, request insights, print
///
/// `requested_date` is cleared once it has been applied to loaded records.
/// A failed fetch leaves it in place for the next cycle.
async fn sync_and_present<P: InsightProvider>(
    args: &Args,
    service: &DiveLogService<SheetSource>,
    provider: Option<&P>,
    show: &ShowArgs,
    controller: &mut LogbookController,
    requested_date: &mut Option<String>,
) -> Result<()> {
    let token = controller.begin_fetch();
    let spinner = (args.show_progress() && show.format == OutputFormat::Text).then(sync_spinner);

    let outcome = service.fetch().await;
    if let FetchOutcome::Loaded { stats, .. } = &outcome {
        info!(
            "Parsed {} records from {} lines ({:.1}% usable)",
            stats.records_parsed,
            stats.lines_read,
            stats.success_rate()
        );
    }
    controller.complete_fetch(token, outcome);

    if let Some(date) = requested_date.take_if(|date| controller.select_date(date.as_str())) {
        if controller.selection().is_some_and(|selection| selection.is_empty()) {
            warn!("No dives logged for session {}", date);
        }
    }

    let insights = match (provider, controller.selection()) {
        (Some(provider), Some(selection)) if !selection.is_empty() => {
            if let Some(spinner) = &spinner {
                spinner.set_message("Asking for dive insights...");
            }
            fetch_insights(provider, &selection.dives).await
        }
        _ => Vec::new(),
    };

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match show.format {
        OutputFormat::Text => println!("{}", view::render_page(controller, &insights)),
        OutputFormat::Json => println!("{}", session_report_json(controller, &insights)?),
    }
    Ok(())
}

/// List the session dates
async fn run_dates(
    args: &Args,
    service: &DiveLogService<SheetSource>,
    dates_args: &DatesArgs,
) -> Result<()> {
    let spinner = (args.show_progress() && dates_args.format == OutputFormat::Text)
        .then(sync_spinner);
    let records = service.fetch_dive_data().await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let dates = unique_dates(&records);
    match dates_args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&dates)
                .map_err(|e| Error::json("Failed to serialize session dates", e))?;
            println!("{}", json);
        }
        OutputFormat::Text if dates.is_empty() => println!("No Dives Found"),
        OutputFormat::Text => {
            for date in &dates {
                let count = records.iter().filter(|dive| &dive.date == date).count();
                println!("{}  ({} dives)", date, count);
            }
        }
    }
    Ok(())
}

/// Serialize the current selection with its insights
pub fn session_report_json(
    controller: &LogbookController,
    insights: &[Option<GeminiInsight>],
) -> Result<String> {
    let status = match controller.state() {
        LoadState::Failed { .. } => "failed",
        _ => "loaded",
    };

    let report = match controller.selection() {
        Some(selection) => SessionReport {
            status,
            dates: selection.dates.clone(),
            selected_date: selection.selected_date.clone(),
            dives: selection
                .dives
                .iter()
                .enumerate()
                .map(|(index, &dive)| DiveReport {
                    dive,
                    insight: insights.get(index).and_then(Option::as_ref),
                })
                .collect(),
        },
        None => SessionReport {
            status,
            dates: Vec::new(),
            selected_date: None,
            dives: Vec::new(),
        },
    };

    serde_json::to_string_pretty(&report).map_err(|e| Error::json("Failed to serialize session", e))
}

fn sync_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Syncing Log Book...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::insight::GeminiInsightClient;
    use crate::app::services::sheet_parser::ParseStats;
    use crate::app::services::sheet_source::CsvFileSource;
    use clap::Parser;
    use tempfile::TempDir;

    fn dive(date: &str, site: &str) -> DiveEntry {
        DiveEntry {
            date: date.to_string(),
            dive_site: site.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_session_report_json() {
        let mut controller = LogbookController::new();
        let token = controller.begin_fetch();
        controller.complete_fetch(
            token,
            FetchOutcome::Loaded {
                entries: vec![
                    dive("2024-05-02", "Wreck Point"),
                    dive("2024-05-01", "Blue Hole"),
                ],
                stats: ParseStats::default(),
            },
        );
        let insights = vec![Some(GeminiInsight {
            title: "Calm Seas".to_string(),
            content: "Great visibility.".to_string(),
            advice: "Bring a camera.".to_string(),
        })];

        let json = session_report_json(&controller, &insights).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["status"], "loaded");
        assert_eq!(value["selected_date"], "2024-05-02");
        assert_eq!(value["dates"], serde_json::json!(["2024-05-02", "2024-05-01"]));
        assert_eq!(value["dives"][0]["dive_site"], "Wreck Point");
        assert_eq!(value["dives"][0]["insight"]["advice"], "Bring a camera.");
    }

    #[test]
    fn test_failed_report_is_empty() {
        let mut controller = LogbookController::new();
        let token = controller.begin_fetch();
        controller.complete_fetch(
            token,
            FetchOutcome::Failed {
                reason: "HTTP 404".to_string(),
            },
        );

        let json = session_report_json(&controller, &[]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["status"], "failed");
        assert_eq!(value["dives"], serde_json::json!([]));
        assert!(value["selected_date"].is_null());
        assert!(value["dives"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_requested_date_survives_failed_sync() {
        let dir = TempDir::new().unwrap();
        let export = dir.path().join("responses.csv");
        let service = DiveLogService::new(SheetSource::File(CsvFileSource::new(export.clone())));

        let args =
            Args::try_parse_from(["dive-logbook", "-q", "show", "--date", "2024-05-01"]).unwrap();
        let Commands::Show(show) = args.get_command() else {
            panic!("expected show");
        };
        let no_provider: Option<&GeminiInsightClient> = None;
        let mut controller = LogbookController::new();
        let mut requested_date = show.date.clone();

        // Export not written yet
        sync_and_present(&args, &service, no_provider, &show, &mut controller, &mut requested_date)
            .await
            .unwrap();
        assert!(matches!(controller.state(), LoadState::Failed { .. }));
        assert_eq!(requested_date.as_deref(), Some("2024-05-01"));

        std::fs::write(
            &export,
            "Timestamp,Date,Dive Site\n\
             5/1/2024 09:12:00,2024-05-01,Catalinas\n\
             5/2/2024 08:55:00,2024-05-02,Tortuga\n",
        )
        .unwrap();

        sync_and_present(&args, &service, no_provider, &show, &mut controller, &mut requested_date)
            .await
            .unwrap();
        assert_eq!(controller.selected_date(), Some("2024-05-01"));
        assert!(requested_date.is_none());

        // Later syncs keep the applied session rather than the newest one
        sync_and_present(&args, &service, no_provider, &show, &mut controller, &mut requested_date)
            .await
            .unwrap();
        assert_eq!(controller.selected_date(), Some("2024-05-01"));
    }
}
