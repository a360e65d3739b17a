//! Measurement string parser
//!
//! The forecast table carries each hour's wind data as one composite string,
//! e.g. `"12 (18) mph NW"` or, as rendered on the page, `"Wind 12 (gust 18) mph NW"`.
//! This module splits such strings into wind speed, gust speed and direction.
//!
//! ## Architecture
//!
//! - [`field_parsers`] - Shape validation and one parser per field
//!
//! Every field parser validates the string's shape before slicing, so a
//! malformed string is reported rather than silently producing a wrong number.
//!
//! ## Usage
//!
//! ```rust
//! use beach_forecast::app::services::measurement_parser::parse_measurement;
//!
//! let m = parse_measurement("Wind 12 (gust 18) mph NW").unwrap();
//! assert_eq!((m.wind_speed, m.gust_speed, m.direction.as_str()), (12, 18, "NW"));
//! ```

pub mod field_parsers;

#[cfg(test)]
pub mod tests;

use crate::Result;
use crate::app::models::Measurement;
use tracing::debug;

pub use field_parsers::{parse_direction, parse_gust_speed, parse_wind_speed};

/// Parse all three fields of one measurement string
pub fn parse_measurement(raw: &str) -> Result<Measurement> {
    Ok(Measurement {
        wind_speed: parse_wind_speed(raw)?,
        gust_speed: parse_gust_speed(raw)?,
        direction: parse_direction(raw)?,
    })
}

/// Parse a slice of measurement strings in order
///
/// Stops at the first malformed string and reports its position in `raw`.
pub fn parse_measurements<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Measurement>> {
    let measurements = raw
        .iter()
        .enumerate()
        .map(|(i, s)| parse_measurement(s.as_ref()).map_err(|e| e.at_index(i)))
        .collect::<Result<Vec<_>>>()?;

    debug!("Parsed {} measurement strings", measurements.len());
    Ok(measurements)
}
