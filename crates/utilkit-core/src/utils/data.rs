use crate::error::FormatError;

pub const DEFAULT_DECIMALS: i32 = 2;

const UNIT_BASE: f64 = 1024.0;
// Beyond this many places an f64 has no ties left to round.
const MAX_ROUNDED_DECIMALS: usize = 15;
const UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count as a human readable string.
///
/// The unit is the largest power of 1024 not exceeding `bytes` (up to YB).
/// `decimals` defaults to [`DEFAULT_DECIMALS`]; negative values count as 0.
/// Trailing zeros are dropped, so `1024` is `"1 KB"` rather than `"1.00 KB"`.
///
/// # Examples
/// ```
/// use utilkit_core::utils::data::format_bytes;
/// assert_eq!(format_bytes(0.0, None).unwrap(), "0 Bytes");
/// assert_eq!(format_bytes(645952.0, None).unwrap(), "630.81 KB");
/// assert_eq!(format_bytes(1024.0, Some(0)).unwrap(), "1 KB");
/// ```
pub fn format_bytes(bytes: f64, decimals: Option<i32>) -> crate::Result<String> {
    if !bytes.is_finite() || bytes < 0.0 {
        return Err(FormatError::InvalidByteCount { value: bytes }.into());
    }
    if bytes == 0.0 {
        return Ok("0 Bytes".to_string());
    }

    let decimals = decimals.unwrap_or(DEFAULT_DECIMALS).max(0) as usize;

    // floor(log1024(bytes)), clamped to the unit table
    let mut unit = 0;
    let mut value = bytes;
    while value >= UNIT_BASE && unit < UNITS.len() - 1 {
        value /= UNIT_BASE;
        unit += 1;
    }

    Ok(format!("{} {}", trim_decimal(value, decimals), UNITS[unit]))
}

/// Round half away from zero to `decimals` places and drop trailing zeros.
fn trim_decimal(value: f64, decimals: usize) -> String {
    let value = if decimals <= MAX_ROUNDED_DECIMALS {
        let factor = 10f64.powi(decimals as i32);
        (value * factor).round() / factor
    } else {
        value
    };
    let rounded = format!("{:.*}", decimals, value);
    if rounded.contains('.') {
        rounded
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;

    #[test]
    fn test_format_bytes_zero() {
        assert_eq!(format_bytes(0.0, None).unwrap(), "0 Bytes");
        assert_eq!(format_bytes(0.0, Some(5)).unwrap(), "0 Bytes");
    }

    #[test]
    fn test_format_bytes_units() {
        assert_eq!(format_bytes(1.0, None).unwrap(), "1 Bytes");
        assert_eq!(format_bytes(1023.0, None).unwrap(), "1023 Bytes");
        assert_eq!(format_bytes(1024.0, None).unwrap(), "1 KB");
        assert_eq!(format_bytes(1536.0, None).unwrap(), "1.5 KB");
        assert_eq!(format_bytes(1_048_576.0, None).unwrap(), "1 MB");
        assert_eq!(format_bytes(584_972_157.0, None).unwrap(), "557.87 MB");
        assert_eq!(format_bytes(1_073_741_824.0, None).unwrap(), "1 GB");
    }

    #[test]
    fn test_format_bytes_decimals() {
        let formatted = format_bytes(645_952.0, Some(2)).unwrap();
        assert!(formatted.starts_with("630.8"));
        assert!(formatted.ends_with(" KB"));

        assert_eq!(format_bytes(1024.0, Some(0)).unwrap(), "1 KB");
        assert_eq!(format_bytes(645_952.0, Some(0)).unwrap(), "631 KB");
        assert_eq!(format_bytes(645_952.0, Some(-3)).unwrap(), "631 KB");
        assert_eq!(
            format_bytes(84_537_652_657_555.0, Some(10)).unwrap(),
            "76.8865471924 TB"
        );
    }

    #[test]
    fn test_format_bytes_rounds_ties_up() {
        // 1152 / 1024 = 1.125 and 2560 / 1024 = 2.5 are exact ties
        assert_eq!(format_bytes(1152.0, None).unwrap(), "1.13 KB");
        assert_eq!(format_bytes(2560.0, Some(0)).unwrap(), "3 KB");
        assert_eq!(format_bytes(1536.0, Some(0)).unwrap(), "2 KB");
        assert_eq!(format_bytes(1024.0 + 128.0, Some(1)).unwrap(), "1.1 KB");
        assert_eq!(format_bytes(1.5, Some(30)).unwrap(), "1.5 Bytes");
    }

    #[test]
    fn test_format_bytes_clamps_to_yottabytes() {
        let yb = 1024f64.powi(8);
        assert_eq!(format_bytes(yb, None).unwrap(), "1 YB");
        assert_eq!(format_bytes(yb * 2048.0, None).unwrap(), "2048 YB");
    }

    #[test]
    fn test_format_bytes_fractional_input() {
        assert_eq!(format_bytes(0.5, None).unwrap(), "0.5 Bytes");
    }

    #[test]
    fn test_format_bytes_rejects_invalid() {
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let err = format_bytes(bad, None).unwrap_err();
            assert!(matches!(
                err,
                AppError::Format(FormatError::InvalidByteCount { .. })
            ));
        }
    }

    #[test]
    fn test_trim_decimal() {
        assert_eq!(trim_decimal(1.0, 2), "1");
        assert_eq!(trim_decimal(1.10, 2), "1.1");
        assert_eq!(trim_decimal(12.0, 0), "12");
        assert_eq!(trim_decimal(100.0, 3), "100");
        assert_eq!(trim_decimal(0.5, 0), "1");
    }
}
