//! Tests for the individual field parsers

use super::*;
use crate::Error;
use crate::app::services::measurement_parser::{
    parse_direction, parse_gust_speed, parse_measurement, parse_wind_speed,
};

#[test]
fn test_bare_shape_round_trips_over_generated_values() {
    // Sweep speeds and every direction token
    for wind in (0..=60).step_by(3) {
        for gust in (0..=80).step_by(7) {
            for direction in DIRECTIONS {
                let raw = bare_measurement(wind, gust, direction);
                let m = parse_measurement(&raw).unwrap();
                assert_eq!(m.wind_speed, wind, "{}", raw);
                assert_eq!(m.gust_speed, gust, "{}", raw);
                assert_eq!(m.direction, *direction, "{}", raw);
            }
        }
    }
}

#[test]
fn test_labelled_shape_round_trips_over_generated_values() {
    for wind in [0, 1, 9, 10, 25, 26, 99, 123] {
        for direction in DIRECTIONS {
            let raw = labelled_measurement(wind, wind + 6, direction);
            let m = parse_measurement(&raw).unwrap();
            assert_eq!(m.wind_speed, wind);
            assert_eq!(m.gust_speed, wind + 6);
            assert_eq!(m.direction, *direction);
        }
    }
}

#[test]
fn test_wind_speed_missing_paren() {
    let err = parse_wind_speed("12 mph NW").unwrap_err();
    assert!(matches!(err, Error::MalformedMeasurement { .. }));
}

#[test]
fn test_wind_speed_nothing_before_paren() {
    let err = parse_wind_speed("(18) mph NW").unwrap_err();
    assert!(matches!(err, Error::MalformedMeasurement { .. }));
}

#[test]
fn test_wind_speed_not_numeric() {
    let err = parse_wind_speed("Wind calm (gust 18) mph NW").unwrap_err();
    match err {
        Error::MalformedMeasurement { reason, index, .. } => {
            assert!(reason.contains("wind"));
            assert_eq!(index, None);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_wind_speed_requires_space_before_paren() {
    let err = parse_wind_speed("12(18) mph NW").unwrap_err();
    match err {
        Error::MalformedMeasurement { reason, .. } => assert!(reason.contains("no space")),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(parse_wind_speed("Wind 12(gust 18) mph NW").is_err());
}

#[test]
fn test_wind_speed_rejects_extra_label_tokens() {
    assert!(parse_wind_speed("Wind speed 12 (gust 18) mph NW").is_err());
    assert!(parse_wind_speed("about 12 14 (18) mph NW").is_err());
}

#[test]
fn test_wind_speed_rejects_negative() {
    assert!(parse_wind_speed("-3 (18) mph NW").is_err());
}

#[test]
fn test_gust_speed_unbalanced_parens() {
    assert!(parse_gust_speed("12 (18 mph NW").is_err());
    assert!(parse_gust_speed("12 18) mph NW").is_err());
    assert!(parse_gust_speed("12 )18( mph NW").is_err());
    assert!(parse_gust_speed("12 ((18)) mph NW").is_err());
}

#[test]
fn test_gust_speed_empty_or_non_numeric() {
    assert!(parse_gust_speed("12 () mph NW").is_err());
    assert!(parse_gust_speed("12 (gust ?) mph NW").is_err());
}

#[test]
fn test_gust_speed_rejects_trailing_space_inside_parens() {
    assert!(parse_gust_speed("Wind 12 (gust 18 ) mph NW").is_err());
    assert!(parse_gust_speed("12 (18 ) mph NW").is_err());
}

#[test]
fn test_gust_speed_uses_last_inner_token() {
    assert_eq!(parse_gust_speed("Wind 12 (max gust 31) mph NW").unwrap(), 31);
}

#[test]
fn test_direction_requires_space() {
    assert!(parse_direction("12(18)mph").is_err());
}

#[test]
fn test_direction_rejects_trailing_space() {
    assert!(parse_direction("12 (18) mph ").is_err());
}

#[test]
fn test_fields_parse_independently() {
    // Direction does not depend on the parentheses being well formed
    let raw = "12 18 mph SW";
    assert_eq!(parse_direction(raw).unwrap(), "SW");
    assert!(parse_wind_speed(raw).is_err());
    assert!(parse_gust_speed(raw).is_err());
}
