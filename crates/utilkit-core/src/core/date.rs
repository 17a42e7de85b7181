//! Token-based date formatting
//!
//! Format strings embed `#TOKEN#` markers, e.g. `"#YYYY#-#MM#-#DD# #hhhh#:#mm#"`.
//! All field values are computed once per call, then the format string is
//! scanned a single time from left to right. Substituted text is never scanned
//! again, and anything that is not a known marker is copied through unchanged.
//!
//! | Token  | Meaning                               | Example    |
//! |--------|---------------------------------------|------------|
//! | `YYYY` | year, 4 digits                        | `2024`     |
//! | `YY`   | last two digits of the year           | `24`       |
//! | `MMMM` | month name                            | `January`  |
//! | `MMM`  | month abbreviation                    | `Jan`      |
//! | `MM`   | month, zero-padded                    | `01`       |
//! | `M`    | month                                 | `1`        |
//! | `DDDD` | weekday name                          | `Thursday` |
//! | `DDD`  | weekday abbreviation                  | `Thu`      |
//! | `DD`   | day of month, zero-padded             | `07`       |
//! | `D`    | day of month                          | `7`        |
//! | `th`   | ordinal suffix of the day of month    | `th`       |
//! | `hhhh` | hour (24h), zero-padded               | `05`       |
//! | `hhh`  | hour (24h)                            | `5`        |
//! | `hh`   | hour (12h), zero-padded               | `05`       |
//! | `h`    | hour (12h)                            | `5`        |
//! | `mm`   | minute, zero-padded                   | `03`       |
//! | `m`    | minute                                | `3`        |
//! | `ss`   | second, zero-padded                   | `07`       |
//! | `s`    | second                                | `7`        |
//! | `ampm` | `am` / `pm`                           | `am`       |
//! | `AMPM` | `AM` / `PM`                           | `AM`       |

use chrono::{Datelike, Timelike};

pub const TOKEN_DELIMITER: char = '#';

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Indexed by days from Monday.
const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// English ordinal suffix for a day of the month.
///
/// # Examples
/// ```
/// use utilkit_core::core::date::ordinal_suffix;
/// assert_eq!(ordinal_suffix(1), "st");
/// assert_eq!(ordinal_suffix(12), "th");
/// assert_eq!(ordinal_suffix(22), "nd");
/// ```
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (10..=20).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Convert a 0-23 hour to the 12-hour clock (0 -> 12, 13 -> 1).
fn twelve_hour(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// Field values for one timestamp, keyed by token.
struct TokenValues {
    values: Vec<(&'static str, String)>,
}

impl TokenValues {
    fn from_timestamp<T: Datelike + Timelike>(timestamp: &T) -> Self {
        let year = timestamp.year();
        let month = timestamp.month();
        let day = timestamp.day();
        let hour = timestamp.hour();
        let minute = timestamp.minute();
        let second = timestamp.second();

        let month_name = MONTH_NAMES[timestamp.month0() as usize];
        let weekday_name = WEEKDAY_NAMES[timestamp.weekday().num_days_from_monday() as usize];
        let hour12 = twelve_hour(hour);
        let ampm = if hour < 12 { "am" } else { "pm" };

        let values = vec![
            ("YYYY", format!("{:04}", year)),
            ("YY", format!("{:02}", year.rem_euclid(100))),
            ("MMMM", month_name.to_string()),
            ("MMM", month_name[..3].to_string()),
            ("MM", format!("{:02}", month)),
            ("M", month.to_string()),
            ("DDDD", weekday_name.to_string()),
            ("DDD", weekday_name[..3].to_string()),
            ("DD", format!("{:02}", day)),
            ("D", day.to_string()),
            ("th", ordinal_suffix(day).to_string()),
            ("hhhh", format!("{:02}", hour)),
            ("hhh", hour.to_string()),
            ("hh", format!("{:02}", hour12)),
            ("h", hour12.to_string()),
            ("mm", format!("{:02}", minute)),
            ("m", minute.to_string()),
            ("ss", format!("{:02}", second)),
            ("s", second.to_string()),
            ("ampm", ampm.to_string()),
            ("AMPM", ampm.to_uppercase()),
        ];

        Self { values }
    }

    fn get(&self, token: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, value)| value.as_str())
    }
}

/// Format a timestamp with a `#TOKEN#` format string.
///
/// Works with any chrono value exposing date and time fields
/// (`NaiveDateTime`, `DateTime<Local>`, ...). No time zone conversion is done.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use utilkit_core::core::date::custom_format;
///
/// let ts = NaiveDate::from_ymd_opt(2024, 1, 11)
///     .unwrap()
///     .and_hms_opt(5, 3, 7)
///     .unwrap();
/// assert_eq!(
///     custom_format(&ts, "#YYYY#-#MM#-#DD# #DDDD# #D##th# #hh#:#mm#:#ss# #ampm#"),
///     "2024-01-11 Thursday 11th 05:03:07 am"
/// );
/// ```
pub fn custom_format<T: Datelike + Timelike>(timestamp: &T, format: &str) -> String {
    let values = TokenValues::from_timestamp(timestamp);
    let mut output = String::with_capacity(format.len() + 16);
    let mut rest = format;

    while let Some(start) = rest.find(TOKEN_DELIMITER) {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 1..];

        let replaced = after_open.find(TOKEN_DELIMITER).and_then(|end| {
            values
                .get(&after_open[..end])
                .map(|value| (value, &after_open[end + 1..]))
        });

        match replaced {
            Some((value, remaining)) => {
                output.push_str(value);
                rest = remaining;
            }
            None => {
                // Not a marker: keep the delimiter and resume right after it,
                // so a closing '#' can still open the next marker.
                output.push(TOKEN_DELIMITER);
                rest = after_open;
            }
        }
    }

    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .expect("valid test timestamp")
    }

    #[test]
    fn test_reference_timestamp() {
        let ts = at(2024, 1, 11, 5, 3, 7);
        assert_eq!(
            custom_format(&ts, "#YYYY#-#MM#-#DD# #DDDD# #D##th# #hh#:#mm#:#ss# #ampm#"),
            "2024-01-11 Thursday 11th 05:03:07 am"
        );
    }

    #[test]
    fn test_year_month_and_weekday_variants() {
        let ts = at(2024, 1, 11, 5, 3, 7);
        assert_eq!(custom_format(&ts, "#YY#"), "24");
        assert_eq!(custom_format(&ts, "#MMMM# #MMM# #MM# #M#"), "January Jan 01 1");
        assert_eq!(custom_format(&ts, "#DDDD# #DDD# #DD# #D#"), "Thursday Thu 11 11");

        let ts = at(2005, 9, 3, 0, 0, 0);
        assert_eq!(custom_format(&ts, "#YY#/#M#/#D#"), "05/9/3");
        assert_eq!(custom_format(&ts, "#DDDD#"), "Saturday");
        assert_eq!(custom_format(&ts, "#MMM#"), "Sep");
    }

    #[test]
    fn test_hour_tokens() {
        let midnight = at(2024, 1, 1, 0, 0, 0);
        assert_eq!(custom_format(&midnight, "#hhhh# #hhh# #hh# #h# #ampm#"), "00 0 12 12 am");

        let noon = at(2024, 1, 1, 12, 0, 0);
        assert_eq!(custom_format(&noon, "#hhhh# #hh# #h# #AMPM#"), "12 12 12 PM");

        let evening = at(2024, 1, 1, 23, 9, 4);
        assert_eq!(
            custom_format(&evening, "#hhhh# #hhh# #hh# #h#:#m#:#s# #ampm#"),
            "23 23 11 11:9:4 pm"
        );

        let morning = at(2024, 1, 1, 9, 30, 45);
        assert_eq!(custom_format(&morning, "#hh#:#mm#:#ss#"), "09:30:45");
    }

    #[test]
    fn test_ordinal_suffix_table() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (10, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (20, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "day {}", day);
        }

        let ts = at(2024, 3, 22, 0, 0, 0);
        assert_eq!(custom_format(&ts, "#D##th#"), "22nd");
    }

    #[test]
    fn test_unknown_text_passes_through() {
        let ts = at(2024, 1, 11, 5, 3, 7);
        assert_eq!(custom_format(&ts, "no tokens here"), "no tokens here");
        assert_eq!(custom_format(&ts, "YYYY-MM-DD"), "YYYY-MM-DD");
        assert_eq!(custom_format(&ts, "#nope# #YYYY#"), "#nope# 2024");
        assert_eq!(custom_format(&ts, "##YYYY#"), "#2024");
        assert_eq!(custom_format(&ts, "issue #42"), "issue #42");
        assert_eq!(custom_format(&ts, "#"), "#");
        assert_eq!(custom_format(&ts, ""), "");
    }

    #[test]
    fn test_every_occurrence_is_replaced() {
        let ts = at(2024, 1, 11, 5, 3, 7);
        assert_eq!(custom_format(&ts, "#D#/#D#/#D#"), "11/11/11");
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        // Month names contain token-like letters; they must stay intact.
        let ts = at(2024, 5, 6, 7, 8, 9);
        assert_eq!(custom_format(&ts, "#MMMM##M#"), "May5");
        assert_eq!(custom_format(&ts, "#DDDD#"), "Monday");
    }

    #[test]
    fn test_works_with_local_datetime() {
        let now = chrono::Local::now();
        let formatted = custom_format(&now, "#YYYY#");
        assert_eq!(formatted, format!("{:04}", now.year()));
    }
}
