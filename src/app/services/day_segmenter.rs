//! Day segmentation of the flat forecast lists
//!
//! The forecast table is one long row of hours. Each day starts at a `12AM`
//! cell, so the successive `12AM` positions split the flat lists into days.
//! The first boundary ends "today", which is not forecast; the next five
//! boundaries close the five forecast days.
//!
//! Alignment is purely positional: callers must hand in lists that are
//! already index-aligned with the hour labels.

use crate::constants::{DAY_BOUNDARY_COUNT, DAY_START_ANCHOR, FORECAST_DAYS};
use crate::{Error, Result};
use std::ops::Range;
use tracing::debug;

/// Day boundary positions found in an hour sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBoundaries {
    positions: [usize; DAY_BOUNDARY_COUNT],
}

impl DayBoundaries {
    /// Locate the first six `12AM` anchors in `hours`
    ///
    /// Each anchor is searched for strictly after the previous one.
    pub fn locate<S: AsRef<str>>(hours: &[S]) -> Result<Self> {
        let mut positions = [0usize; DAY_BOUNDARY_COUNT];
        let mut search_from = 0;

        for (occurrence, slot) in positions.iter_mut().enumerate() {
            let found = hours[search_from..]
                .iter()
                .position(|h| h.as_ref() == DAY_START_ANCHOR)
                .map(|offset| search_from + offset)
                .ok_or_else(|| {
                    Error::anchor_not_found(
                        DAY_START_ANCHOR,
                        format!(
                            "day boundary {} of {} missing from {} hour labels",
                            occurrence + 1,
                            DAY_BOUNDARY_COUNT,
                            hours.len()
                        ),
                    )
                })?;
            *slot = found;
            search_from = found + 1;
        }

        debug!("Located day boundaries at {:?}", positions);
        Ok(Self { positions })
    }

    pub fn positions(&self) -> &[usize; DAY_BOUNDARY_COUNT] {
        &self.positions
    }

    /// Half-open ranges of the five forecast days, soonest first
    pub fn day_ranges(&self) -> [Range<usize>; FORECAST_DAYS] {
        std::array::from_fn(|i| self.positions[i]..self.positions[i + 1])
    }

    /// Range covering all five forecast days
    pub fn span(&self) -> Range<usize> {
        self.positions[0]..self.positions[DAY_BOUNDARY_COUNT - 1]
    }

    /// Slice a parallel list into five per-day groups
    ///
    /// `list_name` names the list in the error when it is too short.
    pub fn split<'a, T>(&self, list: &'a [T], list_name: &str) -> Result<[&'a [T]; FORECAST_DAYS]> {
        let end = self.span().end;
        if list.len() < end {
            return Err(Error::index_out_of_range(list_name, end, list.len()));
        }

        let ranges = self.day_ranges();
        Ok(std::array::from_fn(|i| &list[ranges[i].clone()]))
    }
}

/// Per-day hour labels and raw measurement strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup<'a> {
    /// Position of the day's first hour in the flat lists
    pub start: usize,
    pub hours: &'a [String],
    pub measurements: &'a [String],
}

/// Split aligned hour and measurement lists into the five forecast days
pub fn segment_days<'a>(
    hours: &'a [String],
    measurements: &'a [String],
) -> Result<[DayGroup<'a>; FORECAST_DAYS]> {
    let boundaries = DayBoundaries::locate(hours)?;
    let hour_groups = boundaries.split(hours, "hour")?;
    let measurement_groups = boundaries.split(measurements, "measurement")?;
    let ranges = boundaries.day_ranges();

    Ok(std::array::from_fn(|i| DayGroup {
        start: ranges[i].start,
        hours: hour_groups[i],
        measurements: measurement_groups[i],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HOUR_LABELS;

    /// Hours starting mid-day "today", followed by `days` full days and a partial tail
    fn hour_sequence(today_from: usize, days: usize) -> Vec<String> {
        let mut hours: Vec<String> = HOUR_LABELS[today_from..]
            .iter()
            .map(|h| h.to_string())
            .collect();
        for _ in 0..days {
            hours.extend(HOUR_LABELS.iter().map(|h| h.to_string()));
        }
        hours
    }

    #[test]
    fn test_locate_six_anchors() {
        let hours = hour_sequence(14, 6);
        let boundaries = DayBoundaries::locate(&hours).unwrap();

        assert_eq!(boundaries.positions(), &[10, 34, 58, 82, 106, 130]);
    }

    #[test]
    fn test_locate_ignores_anchors_beyond_sixth() {
        let hours = hour_sequence(0, 9);
        let boundaries = DayBoundaries::locate(&hours).unwrap();

        assert_eq!(boundaries.positions(), &[0, 24, 48, 72, 96, 120]);
    }

    #[test]
    fn test_locate_fails_with_five_anchors() {
        let hours = hour_sequence(3, 5);
        let err = DayBoundaries::locate(&hours).unwrap_err();

        match err {
            Error::AnchorNotFound { anchor, context } => {
                assert_eq!(anchor, "12AM");
                assert!(context.contains("day boundary 6"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_locate_on_empty_hours() {
        let hours: Vec<String> = Vec::new();
        assert!(matches!(
            DayBoundaries::locate(&hours),
            Err(Error::AnchorNotFound { .. })
        ));
    }

    #[test]
    fn test_day_ranges_are_contiguous_and_cover_span() {
        // Irregular day lengths: positions come from the anchors, not from 24-hour arithmetic
        let mut hours: Vec<String> = ["9PM", "10PM", "11PM"].iter().map(|h| h.to_string()).collect();
        for len in [24usize, 23, 25, 24, 24, 3] {
            hours.push("12AM".to_string());
            hours.extend((1..len).map(|i| format!("h{}", i)));
        }
        let boundaries = DayBoundaries::locate(&hours).unwrap();
        let ranges = boundaries.day_ranges();

        assert_eq!(ranges[0].start, boundaries.span().start);
        assert_eq!(ranges[4].end, boundaries.span().end);
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        let lengths: Vec<usize> = ranges.iter().map(|r| r.len()).collect();
        assert_eq!(lengths, vec![24, 23, 25, 24, 24]);

        let covered: Vec<usize> = ranges.iter().cloned().flatten().collect();
        let expected: Vec<usize> = boundaries.span().collect();
        assert_eq!(covered, expected);
    }

    #[test]
    fn test_split_rejects_short_parallel_list() {
        let hours = hour_sequence(20, 6);
        let boundaries = DayBoundaries::locate(&hours).unwrap();
        let short: Vec<u32> = vec![0; boundaries.span().end - 1];

        let err = boundaries.split(&short, "measurement").unwrap_err();
        assert!(matches!(
            err,
            Error::IndexOutOfRange { ref list, index: 124, len: 123 } if list == "measurement"
        ));
    }

    #[test]
    fn test_split_accepts_list_ending_at_last_boundary() {
        let hours = hour_sequence(20, 6);
        let boundaries = DayBoundaries::locate(&hours).unwrap();
        let exact: Vec<usize> = (0..boundaries.span().end).collect();

        let groups = boundaries.split(&exact, "values").unwrap();
        assert_eq!(groups[0].first(), Some(&4));
        assert_eq!(groups[4].last(), Some(&123));
    }

    #[test]
    fn test_segment_days_keeps_lists_aligned() {
        let hours = hour_sequence(12, 6);
        let measurements: Vec<String> = hours.iter().map(|h| format!("m-{}", h)).collect();

        let groups = segment_days(&hours, &measurements).unwrap();

        for (i, group) in groups.iter().enumerate() {
            assert_eq!(group.start, 12 + 24 * i);
            assert_eq!(group.hours.len(), 24);
            assert_eq!(group.hours[0], "12AM");
            for (h, m) in group.hours.iter().zip(group.measurements) {
                assert_eq!(m, &format!("m-{}", h));
            }
        }
    }
}
