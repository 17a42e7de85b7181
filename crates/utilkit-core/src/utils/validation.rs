//! Parsing and validation of command line input
//!
//! Turns loosely formatted user text into the typed values the core helpers take.

use crate::error::UtilsError;
use chrono::{NaiveDate, NaiveDateTime};

const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse three comma or space separated integers, e.g. `"15,87,69"` or `"15 87 69"`.
///
/// Range checking is left to [`crate::core::color::Rgb`].
pub fn parse_rgb_channels(input: &str) -> crate::Result<[i64; 3]> {
    let parts: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    if parts.len() != 3 {
        return Err(UtilsError::Validation {
            message: format!(
                "Expected 3 RGB channels, found {} in '{}'",
                parts.len(),
                input
            ),
        }
        .into());
    }

    let mut channels = [0i64; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|_| UtilsError::Validation {
            message: format!("Invalid RGB channel '{}': not an integer", part),
        })?;
    }
    Ok(channels)
}

/// Parse a wall-clock timestamp (`2024-01-11T05:03:07`, `2024-01-11 05:03:07`,
/// `2024-01-11T05:03` or a bare date at midnight).
pub fn parse_timestamp(input: &str) -> crate::Result<NaiveDateTime> {
    let input = input.trim();

    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(ts);
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            UtilsError::Validation {
                message: format!(
                    "Invalid timestamp '{}': expected YYYY-MM-DD[THH:MM[:SS]]",
                    input
                ),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_rgb_channels_accepts_separators() {
        assert_eq!(parse_rgb_channels("15,87,69").unwrap(), [15, 87, 69]);
        assert_eq!(parse_rgb_channels("15, 87, 69").unwrap(), [15, 87, 69]);
        assert_eq!(parse_rgb_channels("15 87 69").unwrap(), [15, 87, 69]);
        assert_eq!(parse_rgb_channels("300,-1,0").unwrap(), [300, -1, 0]);
    }

    #[test]
    fn test_parse_rgb_channels_rejects_bad_input() {
        assert!(parse_rgb_channels("").is_err());
        assert!(parse_rgb_channels("1,2").is_err());
        assert!(parse_rgb_channels("1,2,3,4").is_err());
        assert!(parse_rgb_channels("1,two,3").is_err());
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let ts = parse_timestamp("2024-01-11T05:03:07").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 1, 11));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (5, 3, 7));

        let ts = parse_timestamp("2024-01-11 05:03:07").unwrap();
        assert_eq!(ts.second(), 7);

        let ts = parse_timestamp("2024-01-11T05:03").unwrap();
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (5, 3, 0));

        let ts = parse_timestamp(" 2024-02-29 ").unwrap();
        assert_eq!((ts.month(), ts.day(), ts.hour()), (2, 29, 0));
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("2023-02-29").is_err());
        assert!(parse_timestamp("").is_err());
    }
}
