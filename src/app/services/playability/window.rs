//! Analysis window selection

use crate::app::models::DayRecord;
use crate::constants::WindowSpec;
use crate::{Error, Result};

/// Wind and gust values of one window, borrowed from a day record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisWindow<'a> {
    pub anchor: &'static str,
    pub start: usize,
    pub wind_speeds: &'a [u32],
    pub gust_speeds: &'a [u32],
}

/// Select `spec.span` hours starting at the first occurrence of `spec.anchor`
pub fn select_window<'a>(record: &'a DayRecord, spec: &WindowSpec) -> Result<AnalysisWindow<'a>> {
    let start = record
        .hours()
        .iter()
        .position(|h| h == spec.anchor)
        .ok_or_else(|| {
            Error::anchor_not_found(
                spec.anchor,
                format!("window start missing from {} hours", record.day_name()),
            )
        })?;

    let available = record.len() - start;
    if available < spec.span {
        return Err(Error::window_too_short(
            spec.anchor,
            start,
            spec.span,
            available,
        ));
    }

    let range = start..start + spec.span;
    Ok(AnalysisWindow {
        anchor: spec.anchor,
        start,
        wind_speeds: &record.wind_speeds()[range.clone()],
        gust_speeds: &record.gust_speeds()[range],
    })
}
