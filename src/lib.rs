//! Beach Forecast Library
//!
//! A Rust library for turning a scraped hourly wind forecast into a five-day
//! beach volleyball playability report.
//!
//! This library provides tools for:
//! - Parsing composite `"<wind> (<gust>) mph <direction>"` measurement strings
//! - Segmenting flat hour/measurement lists into per-day windows at `12AM` anchors
//! - Building immutable per-day records with weekday/weekend classification
//! - Applying fixed wind and gust thresholds to evening or morning/afternoon windows
//! - Fetching the forecast table from a page (or a saved snapshot) and rendering results

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod day_builder;
        pub mod day_segmenter;
        pub mod measurement_parser;
        pub mod pipeline;
        pub mod playability;
    }
    pub mod adapters {
        pub mod forecast_table;
        pub mod sink;
        pub mod source;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DayName, DayRecord, Forecast, ForecastVerdict, RawForecast};
pub use app::services::pipeline::ForecastPipeline;
pub use config::ForecastConfig;

/// Result type alias for the beach forecast
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for forecast parsing, segmentation and analysis
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Composite measurement string does not have the expected shape
    #[error("Malformed measurement{} '{input}': {reason}", index_suffix(.index))]
    MalformedMeasurement {
        input: String,
        reason: String,
        index: Option<usize>,
    },

    /// Expected boundary or window marker is absent from the hour labels
    #[error("Anchor '{anchor}' not found: {context}")]
    AnchorNotFound { anchor: String, context: String },

    /// Not enough hour positions remain after a window anchor
    #[error(
        "Window starting at '{anchor}' (position {start}) needs {required} hours, only {available} available"
    )]
    WindowTooShort {
        anchor: String,
        start: usize,
        required: usize,
        available: usize,
    },

    /// Fewer day labels than today plus the five forecast days
    #[error("Insufficient day labels: need at least {required}, found {found}")]
    InsufficientDays { required: usize, found: usize },

    /// A parallel list is not long enough for the computed day boundaries
    #[error("Index {index} out of range for {list} list of length {len}")]
    IndexOutOfRange {
        list: String,
        index: usize,
        len: usize,
    },

    /// Analysis window contains no values
    #[error("Empty analysis window: {window}")]
    EmptyWindow { window: String },

    /// Day label prefix is not one of the seven known abbreviations
    #[error("Unmapped day label '{label}'")]
    UnmappedDayLabel { label: String },

    /// Forecast table could not be located in the fetched page
    #[error("Forecast table not found: {message}")]
    TableNotFound { message: String },

    /// The forecast source failed to deliver data
    #[error("Forecast source unavailable: {message}")]
    SourceUnavailable {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

fn index_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {}", i),
        None => String::new(),
    }
}

impl Error {
    /// Create a malformed measurement error
    pub fn malformed_measurement(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedMeasurement {
            input: input.into(),
            reason: reason.into(),
            index: None,
        }
    }

    /// Attach a list position to a malformed measurement error
    ///
    /// Other variants are returned unchanged.
    pub fn at_index(self, position: usize) -> Self {
        match self {
            Self::MalformedMeasurement { input, reason, .. } => Self::MalformedMeasurement {
                input,
                reason,
                index: Some(position),
            },
            other => other,
        }
    }

    /// Create an anchor not found error
    pub fn anchor_not_found(anchor: impl Into<String>, context: impl Into<String>) -> Self {
        Self::AnchorNotFound {
            anchor: anchor.into(),
            context: context.into(),
        }
    }

    /// Create a window too short error
    pub fn window_too_short(
        anchor: impl Into<String>,
        start: usize,
        required: usize,
        available: usize,
    ) -> Self {
        Self::WindowTooShort {
            anchor: anchor.into(),
            start,
            required,
            available,
        }
    }

    /// Create an insufficient days error
    pub fn insufficient_days(required: usize, found: usize) -> Self {
        Self::InsufficientDays { required, found }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(list: impl Into<String>, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            list: list.into(),
            index,
            len,
        }
    }

    /// Create an empty window error
    pub fn empty_window(window: impl Into<String>) -> Self {
        Self::EmptyWindow {
            window: window.into(),
        }
    }

    /// Create an unmapped day label error
    pub fn unmapped_day_label(label: impl Into<String>) -> Self {
        Self::UnmappedDayLabel {
            label: label.into(),
        }
    }

    /// Create a table not found error
    pub fn table_not_found(message: impl Into<String>) -> Self {
        Self::TableNotFound {
            message: message.into(),
        }
    }

    /// Create a source unavailable error without an underlying cause
    pub fn source_unavailable(message: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create a source unavailable error wrapping the underlying cause
    pub fn source_unavailable_with(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::SourceUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        let message = if error.is_timeout() {
            "Timed out waiting for forecast page".to_string()
        } else if let Some(status) = error.status() {
            format!("Forecast page returned HTTP {}", status)
        } else {
            "Forecast page request failed".to_string()
        };
        Self::SourceUnavailable {
            message,
            source: Some(Box::new(error)),
        }
    }
}
