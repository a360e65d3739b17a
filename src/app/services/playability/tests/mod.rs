//! Test utilities for playability analysis
//!
//! Helpers for building day records with controlled wind and gust values
//! in specific hours.

use crate::app::models::{DayName, DayRecord, Measurement, WindowStats};
use crate::constants::HOUR_LABELS;
use chrono::Weekday;


/// Helper to build a full 24-hour day with constant wind and gust
pub fn flat_day(weekday: Weekday, wind: u32, gust: u32) -> DayRecord {
    day_with(weekday, &HOUR_LABELS, |_| (wind, gust))
}

/// Helper to build a day over the given hours, with per-hour values from `values`
pub fn day_with(
    weekday: Weekday,
    hours: &[&str],
    values: impl Fn(&str) -> (u32, u32),
) -> DayRecord {
    let measurements = hours
        .iter()
        .map(|h| {
            let (wind, gust) = values(*h);
            Measurement {
                wind_speed: wind,
                gust_speed: gust,
                direction: "SW".to_string(),
            }
        })
        .collect();
    DayRecord::new(
        DayName::from(weekday),
        hours.iter().map(|h| h.to_string()).collect(),
        measurements,
    )
    .unwrap()
}

/// Helper to build stats with max values at the means
pub fn stats(mean_wind: f64, mean_gust: f64) -> WindowStats {
    WindowStats {
        mean_wind,
        max_wind: mean_wind.ceil() as u32,
        mean_gust,
        max_gust: mean_gust.ceil() as u32,
    }
}
