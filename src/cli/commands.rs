//! Command implementation for the beach forecast CLI
//!
//! Sets up logging, layers configuration (defaults, config file, environment
//! and flags), picks the forecast source and sink, and runs the pipeline once.

use crate::app::adapters::sink::{ForecastSink, JsonSink, TextSink};
use crate::app::adapters::source::{ForecastSource, HttpTableSource, SnapshotSource};
use crate::cli::args::{Args, OutputFormat};
use crate::config::ForecastConfig;
use crate::{Forecast, ForecastPipeline};
use anyhow::{Context, Result};
use std::io::IsTerminal;
use tracing::{debug, info};

/// Main entry point for the CLI
pub async fn run(args: Args) -> Result<()> {
    setup_logging(&args);

    info!("Starting beach forecast");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let pipeline = ForecastPipeline::new().with_plot(config.plot);

    let forecast = match &args.snapshot {
        Some(path) => {
            let source = SnapshotSource::new(path.clone(), config.source.table_class.as_str());
            emit(&pipeline, &source, args.output_format).await?
        }
        None => {
            let target = config.require_target()?;
            let source = HttpTableSource::new(target, config.source.clone());
            emit(&pipeline, &source, args.output_format).await?
        }
    };

    info!(
        "Reported {} verdicts over {} days",
        forecast.verdicts.len(),
        forecast.days.len()
    );
    Ok(())
}

/// Run the pipeline into the sink matching the output format
async fn emit<S: ForecastSource>(
    pipeline: &ForecastPipeline,
    source: &S,
    format: OutputFormat,
) -> Result<Forecast> {
    let stdout = std::io::stdout();
    let forecast = match format {
        OutputFormat::Human => {
            let color = stdout.is_terminal();
            let mut sink = TextSink::new(stdout.lock()).with_color(color);
            drive(pipeline, source, &mut sink).await?
        }
        OutputFormat::Json => {
            let mut sink = JsonSink::new(stdout.lock());
            drive(pipeline, source, &mut sink).await?
        }
    };
    Ok(forecast)
}

async fn drive<S: ForecastSource, K: ForecastSink>(
    pipeline: &ForecastPipeline,
    source: &S,
    sink: &mut K,
) -> Result<Forecast> {
    pipeline
        .run(source, sink)
        .await
        .with_context(|| format!("Forecast from {} could not be reported", source.describe()))
}

/// Set up structured logging to stderr
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // RUST_LOG wins over the verbosity flags
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("beach_forecast={}", log_level)));

    let layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_timer(fmt::time::uptime()))
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration using layered approach (file -> env -> args)
fn load_configuration(args: &Args) -> Result<ForecastConfig> {
    let mut config = match &args.config {
        Some(path) => ForecastConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ForecastConfig::default(),
    };

    // Environment and flags share one clap field
    if let Some(target) = &args.target {
        config = config.with_target(target.as_str());
    }
    if let Some(timeout) = args.timeout {
        config = config.with_timeout_secs(timeout);
    }
    if args.plot {
        config = config.with_plot();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}
