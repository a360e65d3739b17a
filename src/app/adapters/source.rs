//! Forecast sources
//!
//! A source yields the three flat lists of a [`RawForecast`]. The live source
//! fetches the forecast page over HTTP with a bounded wait, the snapshot
//! source reads a saved copy of the page, and the in-memory source hands out
//! a prepared forecast for tests and offline runs.

use crate::app::adapters::forecast_table::extract_forecast;
use crate::app::models::RawForecast;
use crate::config::SourceConfig;
use crate::{Error, Result};
use std::future::Future;
use std::path::PathBuf;
use tracing::{debug, info};

/// Anything that can produce a raw forecast
pub trait ForecastSource {
    /// Fetch the day labels, hour labels and measurement strings
    fn fetch_raw_forecast(&self) -> impl Future<Output = Result<RawForecast>> + Send;

    /// Short description for log lines
    fn describe(&self) -> String;
}

/// Live forecast page fetched over HTTP
#[derive(Debug, Clone)]
pub struct HttpTableSource {
    url: String,
    config: SourceConfig,
}

impl HttpTableSource {
    pub fn new(url: impl Into<String>, config: SourceConfig) -> Self {
        Self {
            url: url.into(),
            config,
        }
    }
}

impl ForecastSource for HttpTableSource {
    async fn fetch_raw_forecast(&self) -> Result<RawForecast> {
        let client = reqwest::Client::builder()
            .timeout(self.config.timeout())
            .user_agent(self.config.user_agent.as_str())
            .build()?;

        info!(
            "Fetching forecast from {} (timeout {}s)",
            self.url, self.config.timeout_secs
        );
        let response = client.get(&self.url).send().await?.error_for_status()?;
        let html = response.text().await?;
        debug!("Received {} bytes", html.len());

        extract_forecast(&html, &self.config.table_class)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Saved copy of the forecast page on disk
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    path: PathBuf,
    table_class: String,
}

impl SnapshotSource {
    pub fn new(path: impl Into<PathBuf>, table_class: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            table_class: table_class.into(),
        }
    }
}

impl ForecastSource for SnapshotSource {
    async fn fetch_raw_forecast(&self) -> Result<RawForecast> {
        info!("Reading forecast snapshot {}", self.path.display());
        let html = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            Error::io(format!("Failed to read snapshot {}", self.path.display()), e)
        })?;

        extract_forecast(&html, &self.table_class)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Prepared forecast held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    forecast: RawForecast,
}

impl InMemorySource {
    pub fn new(forecast: RawForecast) -> Self {
        Self { forecast }
    }
}

impl ForecastSource for InMemorySource {
    async fn fetch_raw_forecast(&self) -> Result<RawForecast> {
        Ok(self.forecast.clone())
    }

    fn describe(&self) -> String {
        "in-memory forecast".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SNAPSHOT: &str = r#"<table class="jw-fxt-table"><tbody>
<tr><td>Tue, 5/31</td><td>Wed, 6/1</td></tr>
<tr><td>11PM</td><td>12AM</td></tr>
<tr><td title="3 (5) mph N"></td><td title="4 (6) mph NE"></td></tr>
</tbody></table>"#;

    #[tokio::test]
    async fn test_in_memory_source_returns_forecast() {
        let raw = RawForecast::new(
            vec!["Tue, 5/31".to_string()],
            vec!["12AM".to_string()],
            vec!["1 (2) mph N".to_string()],
        );
        let source = InMemorySource::new(raw.clone());

        assert_eq!(source.fetch_raw_forecast().await.unwrap(), raw);
    }

    #[tokio::test]
    async fn test_snapshot_source_reads_table() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SNAPSHOT).unwrap();

        let source = SnapshotSource::new(file.path(), "jw-fxt-table");
        let raw = source.fetch_raw_forecast().await.unwrap();

        assert_eq!(raw.day_labels, vec!["Tue, 5/31", "Wed, 6/1"]);
        assert_eq!(raw.hour_labels, vec!["11PM", "12AM"]);
        assert_eq!(raw.measurements, vec!["3 (5) mph N", "4 (6) mph NE"]);
    }

    #[tokio::test]
    async fn test_snapshot_source_missing_file() {
        let source = SnapshotSource::new("/nonexistent/forecast.html", "jw-fxt-table");
        assert!(matches!(
            source.fetch_raw_forecast().await,
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn test_http_source_describes_its_url() {
        let source = HttpTableSource::new("https://example.com/spot", SourceConfig::default());
        assert_eq!(source.describe(), "https://example.com/spot");
    }

    #[tokio::test]
    async fn test_http_source_unreachable_target() {
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let config = SourceConfig {
            timeout_secs: 2,
            ..SourceConfig::default()
        };
        let source = HttpTableSource::new("http://127.0.0.1:9/forecast", config);

        assert!(matches!(
            source.fetch_raw_forecast().await,
            Err(Error::SourceUnavailable { .. })
        ));
    }
}
