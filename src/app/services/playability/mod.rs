//! Playability analysis for beach volleyball
//!
//! This module turns one [`DayRecord`] into wind and gust verdicts for the
//! part of the day people actually play in.
//!
//! # Architecture
//!
//! - [`window`] - Locates the analysis window(s) in a day's hours
//! - [`rules`] - Window statistics and the fixed wind/gust thresholds
//!
//! # Windows
//!
//! Weekdays are judged on the after-work evening: five hours from 5PM.
//! Weekend days get two verdicts: seven hours from 9AM and seven hours from
//! 3PM.
//!
//! # Thresholds
//!
//! | Wind (mean, mph)      | Verdict                 |
//! |-----------------------|-------------------------|
//! | any hour > 25         | Unplayably high winds   |
//! | < 10                  | Low wind                |
//! | < 15                  | Moderate wind           |
//! | < 20                  | Moderately high wind    |
//! | otherwise             | Unplayably high winds   |
//!
//! Gusts are judged on the spread between mean gust and mean wind. A spread
//! under 5 mph or a mean gust under 15 mph means no gusts, checked before the
//! 25 mph single-gust limit.

pub mod rules;
pub mod window;

#[cfg(test)]
pub mod tests;

use crate::{Error, Result};
use crate::app::models::{DayRecord, ForecastVerdict, WindowKind};
use crate::constants::{WEEKDAY_EVENING, WEEKEND_AFTERNOON, WEEKEND_MORNING, WindowSpec};
use tracing::debug;

pub use rules::{gust_verdict, wind_verdict, window_stats};
pub use window::{AnalysisWindow, select_window};

/// Windows analyzed for a day, in output order
pub fn windows_for(record: &DayRecord) -> &'static [(WindowKind, WindowSpec)] {
    const WEEKDAY: &[(WindowKind, WindowSpec)] = &[(WindowKind::WeekdayEvening, WEEKDAY_EVENING)];
    const WEEKEND: &[(WindowKind, WindowSpec)] = &[
        (WindowKind::WeekendMorning, WEEKEND_MORNING),
        (WindowKind::WeekendAfternoon, WEEKEND_AFTERNOON),
    ];

    if record.is_weekday() { WEEKDAY } else { WEEKEND }
}

/// Produce the verdicts for one day: one for a weekday, two for a weekend day
pub fn analyze_day(record: &DayRecord) -> Result<Vec<ForecastVerdict>> {
    windows_for(record)
        .iter()
        .map(|(kind, spec)| -> Result<ForecastVerdict> {
            let window = select_window(record, spec)?;
            let stats = window_stats(window.wind_speeds, window.gust_speeds)
                .map_err(|_| Error::empty_window(window_label(record, *kind)))?;

            let verdict = ForecastVerdict {
                day: record.day_name(),
                window: *kind,
                wind: wind_verdict(&stats),
                gust: gust_verdict(&stats),
                stats,
            };
            debug!(
                "{} {} from {}: mean wind {:.1}, max wind {}, mean gust {:.1}, max gust {} -> {}",
                record.day_name(),
                kind.description(),
                window.anchor,
                stats.mean_wind,
                stats.max_wind,
                stats.mean_gust,
                stats.max_gust,
                verdict
            );
            Ok(verdict)
        })
        .collect()
}

fn window_label(record: &DayRecord, kind: WindowKind) -> String {
    format!("{} {}", record.day_name(), kind.description())
}
