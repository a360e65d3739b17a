//! Forecast sinks
//!
//! A sink receives each day's hourly series (for optional charting) and then
//! the ordered verdicts. [`TextSink`] prints verdict lines and draws a text
//! bar chart for each rendered day. [`JsonSink`] writes the whole
//! forecast as one JSON document.

use crate::app::models::{DayRecord, Forecast};
use crate::constants::{CHART_MAX_SPEED, CHART_WIDTH};
use crate::{Error, Result};
use colored::*;
use std::io::Write;

/// Destination for rendered days and verdict lines
pub trait ForecastSink {
    /// Visualize one day's hours, wind and gust series
    fn render(&mut self, day: &DayRecord) -> Result<()>;

    /// Emit the ordered verdicts
    fn write_verdicts(&mut self, forecast: &Forecast) -> Result<()>;
}

/// Plain-text sink: one verdict per line, hourly charts for rendered days
pub struct TextSink<W: Write> {
    writer: W,
    color: bool,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            color: false,
        }
    }

    /// Highlight chart headings with terminal colors
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn heading(&self, day: &DayRecord) -> String {
        let title = format!("{} hourly wind (mph)", day.day_name());
        if self.color {
            title.bright_cyan().bold().to_string()
        } else {
            title
        }
    }
}

impl<W: Write> ForecastSink for TextSink<W> {
    fn render(&mut self, day: &DayRecord) -> Result<()> {
        let heading = self.heading(day);
        writeln!(self.writer, "{}", heading)?;
        for (hour, wind, gust, direction) in day.hourly() {
            writeln!(
                self.writer,
                "{:>4} |{:<width$}| {:>2} ({:>2}) {}",
                hour,
                chart_bar(wind, gust),
                wind,
                gust,
                direction,
                width = CHART_WIDTH
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_verdicts(&mut self, forecast: &Forecast) -> Result<()> {
        for line in forecast.lines() {
            writeln!(self.writer, "{}", line)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// JSON sink: the whole forecast with per-window statistics
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ForecastSink for JsonSink<W> {
    fn render(&mut self, _day: &DayRecord) -> Result<()> {
        // Days are part of the document written with the verdicts
        Ok(())
    }

    fn write_verdicts(&mut self, forecast: &Forecast) -> Result<()> {
        let document = serde_json::json!({
            "lines": forecast.lines(),
            "verdicts": forecast.verdicts,
            "days": forecast.days,
        });
        serde_json::to_writer_pretty(&mut self.writer, &document)
            .map_err(|e| Error::io("Failed to write forecast JSON", e.into()))?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Bar of `#` up to the wind speed, extended with `+` up to the gust speed
fn chart_bar(wind: u32, gust: u32) -> String {
    let wind_cols = scale(wind);
    let gust_cols = scale(gust).max(wind_cols);
    let mut bar = "#".repeat(wind_cols);
    bar.push_str(&"+".repeat(gust_cols - wind_cols));
    bar
}

fn scale(speed: u32) -> usize {
    let clamped = speed.min(CHART_MAX_SPEED) as usize;
    clamped * CHART_WIDTH / CHART_MAX_SPEED as usize
}
