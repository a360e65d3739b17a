//! Day record construction
//!
//! Combines the raw day labels with the segmented hour and measurement groups
//! into five immutable [`DayRecord`]s, soonest first.

use crate::app::models::{DayName, DayRecord, RawForecast};
use crate::app::services::day_segmenter::segment_days;
use crate::app::services::measurement_parser::parse_measurements;
use crate::constants::{FORECAST_DAYS, MIN_DAY_LABELS};
use crate::{Error, Result};
use tracing::{debug, info};

/// Map the five day labels after "today" to full weekday names
pub fn forecast_day_names<S: AsRef<str>>(day_labels: &[S]) -> Result<Vec<DayName>> {
    if day_labels.len() < MIN_DAY_LABELS {
        return Err(Error::insufficient_days(MIN_DAY_LABELS, day_labels.len()));
    }

    day_labels[1..MIN_DAY_LABELS]
        .iter()
        .map(|label| DayName::from_label(label.as_ref()))
        .collect()
}

/// Build the five forecast day records from the raw scraped lists
pub fn build_days(raw: &RawForecast) -> Result<Vec<DayRecord>> {
    let day_names = forecast_day_names(&raw.day_labels)?;
    let groups = segment_days(&raw.hour_labels, &raw.measurements)?;

    let mut days = Vec::with_capacity(FORECAST_DAYS);
    for (day_name, group) in day_names.into_iter().zip(groups) {
        let measurements =
            parse_measurements(group.measurements).map_err(|e| shift_index(e, group.start))?;
        let record = DayRecord::new(day_name, group.hours.to_vec(), measurements)?;

        debug!(
            "Built {} record with {} hours starting at position {}",
            day_name,
            record.len(),
            group.start
        );
        days.push(record);
    }

    info!(
        "Built {} day records: {}",
        days.len(),
        days.iter()
            .map(|d| d.day_name().full_name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(days)
}

/// Rebase a per-day error index onto the full measurement list
fn shift_index(error: Error, offset: usize) -> Error {
    match error {
        Error::MalformedMeasurement {
            input,
            reason,
            index: Some(i),
        } => Error::MalformedMeasurement {
            input,
            reason,
            index: Some(offset + i),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HOUR_LABELS;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn week_labels() -> Vec<String> {
        labels(&[
            "Wed, 6/1", "Thu, 6/2", "Fri, 6/3", "Sat, 6/4", "Sun, 6/5", "Mon, 6/6", "Tue, 6/7",
        ])
    }

    /// Today from 6PM, then six full days, with wind = day number
    fn raw_forecast(day_labels: Vec<String>) -> RawForecast {
        let mut hours = labels(&HOUR_LABELS[18..]);
        let mut measurements: Vec<String> = hours.iter().map(|_| "3 (4) mph S".to_string()).collect();
        for day in 1..=6u32 {
            for hour in HOUR_LABELS {
                hours.push(hour.to_string());
                measurements.push(format!("Wind {} (gust {}) mph NW", day, day + 5));
            }
        }
        RawForecast::new(day_labels, hours, measurements)
    }

    #[test]
    fn test_forecast_day_names_drops_today() {
        let names = forecast_day_names(&week_labels()).unwrap();
        let full: Vec<&str> = names.iter().map(|n| n.full_name()).collect();
        assert_eq!(full, vec!["Thursday", "Friday", "Saturday", "Sunday", "Monday"]);
    }

    #[test]
    fn test_forecast_day_names_requires_six_labels() {
        let err = forecast_day_names(&week_labels()[..5]).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientDays {
                required: 6,
                found: 5
            }
        ));
    }

    #[test]
    fn test_forecast_day_names_unmapped_label() {
        let mut days = week_labels();
        days[3] = "Sab, 6/4".to_string();
        assert!(matches!(
            forecast_day_names(&days),
            Err(Error::UnmappedDayLabel { .. })
        ));
    }

    #[test]
    fn test_build_days_yields_five_records_in_order() {
        let days = build_days(&raw_forecast(week_labels())).unwrap();

        assert_eq!(days.len(), 5);
        let names: Vec<&str> = days.iter().map(|d| d.day_name().full_name()).collect();
        assert_eq!(names, vec!["Thursday", "Friday", "Saturday", "Sunday", "Monday"]);

        for (i, day) in days.iter().enumerate() {
            let expected = i as u32 + 1;
            assert_eq!(day.len(), 24);
            assert_eq!(day.hours()[0], "12AM");
            assert!(day.wind_speeds().iter().all(|w| *w == expected));
            assert!(day.gust_speeds().iter().all(|g| *g == expected + 5));
            assert!(day.directions().iter().all(|d| d == "NW"));
        }
        assert!(days[0].is_weekday());
        assert!(!days[2].is_weekday());
        assert!(!days[3].is_weekday());
        assert!(days[4].is_weekday());
    }

    #[test]
    fn test_build_days_records_own_their_sequences() {
        let days = build_days(&raw_forecast(week_labels())).unwrap();

        assert_ne!(days[0].wind_speeds(), days[1].wind_speeds());
        assert_ne!(
            days[0].wind_speeds().as_ptr(),
            days[1].wind_speeds().as_ptr()
        );
    }

    #[test]
    fn test_build_days_skips_malformed_today() {
        // Today's measurements are never parsed
        let mut raw = raw_forecast(week_labels());
        raw.measurements[0] = "garbage".to_string();
        assert!(build_days(&raw).is_ok());
    }

    #[test]
    fn test_build_days_reports_absolute_index_of_bad_measurement() {
        let mut raw = raw_forecast(week_labels());
        // Today spans 6 positions, so position 6 + 24 + 5 is Friday 5AM
        raw.measurements[35] = "Wind 7 gust 9 mph NW".to_string();

        match build_days(&raw).unwrap_err() {
            Error::MalformedMeasurement { index, .. } => assert_eq!(index, Some(35)),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_build_days_short_measurement_list() {
        let mut raw = raw_forecast(week_labels());
        raw.measurements.truncate(100);
        assert!(matches!(
            build_days(&raw),
            Err(Error::IndexOutOfRange { .. })
        ));
    }
}
