//! End-to-end forecast pipeline
//!
//! Fetches the raw lists from a source exactly once, builds the five day
//! records, analyzes each of them and only then hands anything to the sink.
//! A failure anywhere before the sink leaves the sink untouched.

use crate::app::adapters::sink::ForecastSink;
use crate::app::adapters::source::ForecastSource;
use crate::app::models::{Forecast, RawForecast};
use crate::app::services::day_builder::build_days;
use crate::app::services::playability::analyze_day;
use crate::Result;
use std::time::Instant;
use tracing::{debug, info};

/// Orchestrates source, day building, analysis and sink
#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastPipeline {
    plot: bool,
}

impl ForecastPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand every day record to the sink for charting before the verdicts
    pub fn with_plot(mut self, plot: bool) -> Self {
        self.plot = plot;
        self
    }

    /// Build and analyze the five forecast days without any I/O
    pub fn analyze(&self, raw: &RawForecast) -> Result<Forecast> {
        let days = build_days(raw)?;

        let mut verdicts = Vec::with_capacity(days.len() * 2);
        for day in &days {
            verdicts.extend(analyze_day(day)?);
        }

        debug!("Produced {} verdicts for {} days", verdicts.len(), days.len());
        Ok(Forecast { days, verdicts })
    }

    /// Fetch once, analyze everything, then emit to the sink
    pub async fn run<S, K>(&self, source: &S, sink: &mut K) -> Result<Forecast>
    where
        S: ForecastSource,
        K: ForecastSink,
    {
        let started = Instant::now();
        let raw = source.fetch_raw_forecast().await?;
        info!(
            "Fetched forecast from {} in {:.2}s",
            source.describe(),
            started.elapsed().as_secs_f64()
        );

        let forecast = self.analyze(&raw)?;

        if self.plot {
            for day in &forecast.days {
                sink.render(day)?;
            }
        }
        sink.write_verdicts(&forecast)?;

        Ok(forecast)
    }
}
