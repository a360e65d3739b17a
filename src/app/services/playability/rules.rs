//! Window statistics and playability thresholds

use crate::app::models::{GustVerdict, WindVerdict, WindowStats};
use crate::constants::{gust_thresholds, wind_thresholds};
use crate::{Error, Result};

fn mean(values: &[u32]) -> f64 {
    values.iter().map(|v| f64::from(*v)).sum::<f64>() / values.len() as f64
}

/// Compute mean and max of the wind and gust values of a window
///
/// Both slices must be non-empty; an empty window has no meaningful verdict.
pub fn window_stats(wind: &[u32], gust: &[u32]) -> Result<WindowStats> {
    let (Some(&max_wind), Some(&max_gust)) = (wind.iter().max(), gust.iter().max()) else {
        return Err(Error::empty_window(format!(
            "{} wind and {} gust values",
            wind.len(),
            gust.len()
        )));
    };

    Ok(WindowStats {
        mean_wind: mean(wind),
        max_wind,
        mean_gust: mean(gust),
        max_gust,
    })
}

/// Classify the average wind; a single hour above the limit overrides the mean
pub fn wind_verdict(stats: &WindowStats) -> WindVerdict {
    if stats.max_wind > wind_thresholds::MAX_PLAYABLE {
        WindVerdict::UnplayablyHigh
    } else if stats.mean_wind < wind_thresholds::LOW_BELOW {
        WindVerdict::Low
    } else if stats.mean_wind < wind_thresholds::MODERATE_BELOW {
        WindVerdict::Moderate
    } else if stats.mean_wind < wind_thresholds::MODERATELY_HIGH_BELOW {
        WindVerdict::ModeratelyHigh
    } else {
        WindVerdict::UnplayablyHigh
    }
}

/// Classify the gusts; "no gusts" is decided before the single-gust limit
pub fn gust_verdict(stats: &WindowStats) -> GustVerdict {
    let spread = stats.gust_spread();

    if spread < gust_thresholds::SPREAD_NOTICEABLE
        || stats.mean_gust < gust_thresholds::MEAN_GUST_NOTICEABLE
    {
        GustVerdict::NoGusts
    } else if stats.max_gust > gust_thresholds::MAX_PLAYABLE {
        GustVerdict::UnplayablyGusty
    } else if spread < gust_thresholds::SPREAD_VERY_GUSTY {
        GustVerdict::Gusty
    } else {
        GustVerdict::VeryGusty
    }
}
