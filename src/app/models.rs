//! Data models for the beach forecast
//!
//! This module contains the core data structures flowing through the pipeline:
//! the raw scraped lists, parsed measurements, immutable per-day records and
//! the verdicts produced by the playability analysis.

use crate::constants::{DAY_ABBREVIATIONS, WEEKDAY_NAMES};
use crate::{Error, Result};
use chrono::Weekday;
use serde::{Serialize, Serializer};
use std::str::FromStr;

// =============================================================================
// Raw Source Data
// =============================================================================

/// The three flat lists scraped from the forecast table
///
/// `hour_labels` and `measurements` are index-aligned: position i of each
/// describes the same forecast hour. `day_labels` holds one entry per day,
/// starting with "today".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawForecast {
    /// Raw day labels such as "Wed, 6/1"
    pub day_labels: Vec<String>,
    /// Hour labels such as "12AM" or "5PM"
    pub hour_labels: Vec<String>,
    /// Composite measurement strings such as "Wind 12 (gust 18) mph NW"
    pub measurements: Vec<String>,
}

impl RawForecast {
    pub fn new(day_labels: Vec<String>, hour_labels: Vec<String>, measurements: Vec<String>) -> Self {
        Self {
            day_labels,
            hour_labels,
            measurements,
        }
    }
}

// =============================================================================
// Measurements
// =============================================================================

/// One parsed hourly measurement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Measurement {
    /// Average wind speed in mph
    pub wind_speed: u32,
    /// Gust speed in mph
    pub gust_speed: u32,
    /// Compass direction token, e.g. "NW"
    pub direction: String,
}

// =============================================================================
// Day Names
// =============================================================================

/// Full weekday name resolved from a raw day label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayName(Weekday);

impl DayName {
    /// Resolve a raw label like "Sat, 6/4" through the abbreviation table
    ///
    /// Only the text before the first comma is used, with surrounding
    /// whitespace left by tag stripping removed. A label without a comma or
    /// with an unknown prefix is an error.
    pub fn from_label(label: &str) -> Result<Self> {
        let (prefix, _) = label
            .split_once(',')
            .ok_or_else(|| Error::unmapped_day_label(label))?;
        prefix.trim().parse()
    }

    /// Full English name, e.g. "Saturday"
    pub fn full_name(self) -> &'static str {
        DAY_ABBREVIATIONS[self.0.num_days_from_monday() as usize].1
    }

    /// Three-letter abbreviation, e.g. "Sat"
    pub fn abbreviation(self) -> &'static str {
        DAY_ABBREVIATIONS[self.0.num_days_from_monday() as usize].0
    }

    /// Monday through Friday
    pub fn is_weekday(self) -> bool {
        WEEKDAY_NAMES.contains(&self.full_name())
    }

    /// All seven days, Monday first
    pub fn all_values() -> [DayName; 7] {
        [
            DayName(Weekday::Mon),
            DayName(Weekday::Tue),
            DayName(Weekday::Wed),
            DayName(Weekday::Thu),
            DayName(Weekday::Fri),
            DayName(Weekday::Sat),
            DayName(Weekday::Sun),
        ]
    }
}

impl FromStr for DayName {
    type Err = Error;

    /// Parse a bare three-letter abbreviation ("Mon" .. "Sun")
    fn from_str(s: &str) -> Result<Self> {
        DAY_ABBREVIATIONS
            .iter()
            .position(|(abbr, _)| *abbr == s)
            .map(|i| DayName::all_values()[i])
            .ok_or_else(|| Error::unmapped_day_label(s))
    }
}

impl From<Weekday> for DayName {
    fn from(weekday: Weekday) -> Self {
        DayName(weekday)
    }
}

impl std::fmt::Display for DayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.full_name())
    }
}

impl Serialize for DayName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.full_name())
    }
}

// =============================================================================
// Day Records
// =============================================================================

/// Hourly wind data for one forecast day
///
/// Built once by the day builder and read-only afterwards. The hour, wind,
/// gust and direction sequences are equal length and index-aligned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    day_name: DayName,
    hours: Vec<String>,
    wind_speeds: Vec<u32>,
    gust_speeds: Vec<u32>,
    directions: Vec<String>,
    is_weekday: bool,
}

impl DayRecord {
    /// Create a new day record, checking that the hourly sequences line up
    pub fn new(day_name: DayName, hours: Vec<String>, measurements: Vec<Measurement>) -> Result<Self> {
        if hours.len() != measurements.len() {
            return Err(Error::index_out_of_range(
                format!("{} measurement", day_name),
                hours.len(),
                measurements.len(),
            ));
        }

        let mut wind_speeds = Vec::with_capacity(measurements.len());
        let mut gust_speeds = Vec::with_capacity(measurements.len());
        let mut directions = Vec::with_capacity(measurements.len());
        for m in measurements {
            wind_speeds.push(m.wind_speed);
            gust_speeds.push(m.gust_speed);
            directions.push(m.direction);
        }

        Ok(Self {
            day_name,
            hours,
            wind_speeds,
            gust_speeds,
            directions,
            is_weekday: day_name.is_weekday(),
        })
    }

    pub fn day_name(&self) -> DayName {
        self.day_name
    }

    pub fn hours(&self) -> &[String] {
        &self.hours
    }

    pub fn wind_speeds(&self) -> &[u32] {
        &self.wind_speeds
    }

    pub fn gust_speeds(&self) -> &[u32] {
        &self.gust_speeds
    }

    pub fn directions(&self) -> &[String] {
        &self.directions
    }

    pub fn is_weekday(&self) -> bool {
        self.is_weekday
    }

    pub fn len(&self) -> usize {
        self.hours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// Iterate the aligned (hour, wind, gust, direction) rows
    pub fn hourly(&self) -> impl Iterator<Item = (&str, u32, u32, &str)> + '_ {
        self.hours
            .iter()
            .zip(&self.wind_speeds)
            .zip(&self.gust_speeds)
            .zip(&self.directions)
            .map(|(((h, w), g), d)| (h.as_str(), *w, *g, d.as_str()))
    }
}

// =============================================================================
// Verdicts
// =============================================================================

/// Which part of the day a verdict covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    WeekdayEvening,
    WeekendMorning,
    WeekendAfternoon,
}

impl WindowKind {
    /// Suffix appended to the day name in verdict lines
    pub fn label_suffix(self) -> Option<&'static str> {
        match self {
            WindowKind::WeekdayEvening => None,
            WindowKind::WeekendMorning => Some("After 9AM"),
            WindowKind::WeekendAfternoon => Some("After 3PM"),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WindowKind::WeekdayEvening => "weekday evening",
            WindowKind::WeekendMorning => "weekend morning",
            WindowKind::WeekendAfternoon => "weekend afternoon",
        }
    }
}

/// Playability of the average wind
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum WindVerdict {
    Low,
    Moderate,
    ModeratelyHigh,
    UnplayablyHigh,
}

impl WindVerdict {
    pub fn as_str(self) -> &'static str {
        match self {
            WindVerdict::Low => "Low wind",
            WindVerdict::Moderate => "Moderate wind",
            WindVerdict::ModeratelyHigh => "Moderately high wind",
            WindVerdict::UnplayablyHigh => "Unplayably high winds",
        }
    }
}

impl std::fmt::Display for WindVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Playability of the gusts relative to the average wind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GustVerdict {
    NoGusts,
    Gusty,
    VeryGusty,
    UnplayablyGusty,
}

impl GustVerdict {
    pub fn as_str(self) -> &'static str {
        match self {
            GustVerdict::NoGusts => "No gusts",
            GustVerdict::Gusty => "Gusty",
            GustVerdict::VeryGusty => "Very Gusty",
            GustVerdict::UnplayablyGusty => "Unplayably gusty",
        }
    }
}

impl std::fmt::Display for GustVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary statistics of one analysis window
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowStats {
    pub mean_wind: f64,
    pub max_wind: u32,
    pub mean_gust: f64,
    pub max_gust: u32,
}

impl WindowStats {
    /// Mean gust minus mean wind
    pub fn gust_spread(&self) -> f64 {
        self.mean_gust - self.mean_wind
    }
}

/// Wind and gust verdicts for one window of one day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastVerdict {
    pub day: DayName,
    pub window: WindowKind,
    pub wind: WindVerdict,
    pub gust: GustVerdict,
    pub stats: WindowStats,
}

impl ForecastVerdict {
    /// "Saturday After 9AM" for weekend windows, the bare day name otherwise
    pub fn label(&self) -> String {
        match self.window.label_suffix() {
            Some(suffix) => format!("{} {}", self.day, suffix),
            None => self.day.to_string(),
        }
    }
}

impl std::fmt::Display for ForecastVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}, {}", self.label(), self.wind, self.gust)
    }
}

/// Complete five-day result of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub days: Vec<DayRecord>,
    pub verdicts: Vec<ForecastVerdict>,
}

impl Forecast {
    /// Verdict lines in chronological order
    pub fn lines(&self) -> Vec<String> {
        self.verdicts.iter().map(ToString::to_string).collect()
    }
}
