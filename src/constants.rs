//! Application constants for the beach forecast
//!
//! This module contains the fixed anchors, analysis windows, playability
//! thresholds and label tables used throughout the forecast pipeline.

// =============================================================================
// Day Segmentation
// =============================================================================

/// Hour label that starts every day in the flat hour sequence
pub const DAY_START_ANCHOR: &str = "12AM";

/// Number of forecast days produced after "today" is dropped
pub const FORECAST_DAYS: usize = 5;

/// Day boundaries needed: end of today plus the end of each forecast day
pub const DAY_BOUNDARY_COUNT: usize = FORECAST_DAYS + 1;

/// Minimum number of raw day labels (today plus the forecast days)
pub const MIN_DAY_LABELS: usize = FORECAST_DAYS + 1;

/// Hour labels in order, 12-hour clock with AM/PM suffix
pub const HOUR_LABELS: [&str; 24] = [
    "12AM", "1AM", "2AM", "3AM", "4AM", "5AM", "6AM", "7AM", "8AM", "9AM", "10AM", "11AM",
    "12PM", "1PM", "2PM", "3PM", "4PM", "5PM", "6PM", "7PM", "8PM", "9PM", "10PM", "11PM",
];

// =============================================================================
// Analysis Windows
// =============================================================================

/// A contiguous run of hours analyzed together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpec {
    /// Hour label the window starts at (first occurrence in the day)
    pub anchor: &'static str,
    /// Number of consecutive hourly positions covered
    pub span: usize,
}

/// Weekday after-work window: 5PM for five hours
pub const WEEKDAY_EVENING: WindowSpec = WindowSpec {
    anchor: "5PM",
    span: 5,
};

/// Weekend morning window: 9AM for seven hours
pub const WEEKEND_MORNING: WindowSpec = WindowSpec {
    anchor: "9AM",
    span: 7,
};

/// Weekend afternoon window: 3PM for seven hours
pub const WEEKEND_AFTERNOON: WindowSpec = WindowSpec {
    anchor: "3PM",
    span: 7,
};

// =============================================================================
// Playability Thresholds (mph)
// =============================================================================

/// Wind thresholds applied to the window's mean and max wind speed
pub mod wind_thresholds {
    /// Any single hour above this makes the window unplayable
    pub const MAX_PLAYABLE: u32 = 25;

    /// Mean below this is low wind
    pub const LOW_BELOW: f64 = 10.0;

    /// Mean below this is moderate wind
    pub const MODERATE_BELOW: f64 = 15.0;

    /// Mean below this is moderately high wind; at or above is unplayable
    pub const MODERATELY_HIGH_BELOW: f64 = 20.0;
}

/// Gust thresholds applied to the window's mean gust and gust spread
pub mod gust_thresholds {
    /// Gust spread (mean gust - mean wind) below this means no gusts
    pub const SPREAD_NOTICEABLE: f64 = 5.0;

    /// Mean gust below this means no gusts
    pub const MEAN_GUST_NOTICEABLE: f64 = 15.0;

    /// Any single gust above this makes the window unplayable
    pub const MAX_PLAYABLE: u32 = 25;

    /// Gust spread below this is gusty; at or above is very gusty
    pub const SPREAD_VERY_GUSTY: f64 = 10.0;
}

// =============================================================================
// Day Labels
// =============================================================================

/// Day-label abbreviations and their full weekday names, Monday first
pub const DAY_ABBREVIATIONS: [(&str, &str); 7] = [
    ("Mon", "Monday"),
    ("Tue", "Tuesday"),
    ("Wed", "Wednesday"),
    ("Thu", "Thursday"),
    ("Fri", "Friday"),
    ("Sat", "Saturday"),
    ("Sun", "Sunday"),
];

/// Full names of the days that get the weekday (evening) analysis
pub const WEEKDAY_NAMES: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

// =============================================================================
// Source Defaults
// =============================================================================

/// Environment variable holding the forecast page URL
pub const TARGET_ENV_VAR: &str = "BEACH_FORECAST_TARGET";

/// Bounded wait for the forecast page, in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// CSS class identifying the hourly forecast table
pub const DEFAULT_TABLE_CLASS: &str = "jw-fxt-table";

/// User agent sent with page requests
pub const DEFAULT_USER_AGENT: &str = concat!("beach-forecast/", env!("CARGO_PKG_VERSION"));

/// Row positions inside the forecast table body
pub mod table_rows {
    /// Day labels ("Wed, 6/1")
    pub const DAYS: usize = 0;
    /// Hour labels ("5PM")
    pub const HOURS: usize = 1;
    /// Measurement strings, carried in each cell's `title` attribute
    pub const MEASUREMENTS: usize = 2;
}

// =============================================================================
// Rendering
// =============================================================================

/// Width of the hourly chart's bar area in characters
pub const CHART_WIDTH: usize = 40;

/// Speed (mph) mapped to a full-width bar
pub const CHART_MAX_SPEED: u32 = 40;
