//! Environment variable configuration
//!
//! Reads the UTILKIT_* overrides and NO_COLOR used across the application.

pub const DECIMALS_VAR: &str = "UTILKIT_DECIMALS";
pub const DATE_FORMAT_VAR: &str = "UTILKIT_DATE_FORMAT";

/// Environment variable configuration reader
pub struct EnvConfigReader;

impl EnvConfigReader {
    /// Read NO_COLOR environment variable
    pub fn read_no_color() -> bool {
        std::env::var("NO_COLOR").is_ok()
    }

    /// Read UTILKIT_DECIMALS environment variable
    pub fn read_decimals() -> Option<i32> {
        std::env::var(DECIMALS_VAR)
            .ok()
            .and_then(|s| s.trim().parse::<i32>().ok())
    }

    /// Read UTILKIT_DATE_FORMAT environment variable
    pub fn read_date_format() -> Option<String> {
        std::env::var(DATE_FORMAT_VAR)
            .ok()
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns a different variable so they can run in parallel.

    #[test]
    fn test_read_decimals() {
        unsafe {
            std::env::set_var(DECIMALS_VAR, "invalid");
        }
        assert!(EnvConfigReader::read_decimals().is_none());

        unsafe {
            std::env::set_var(DECIMALS_VAR, " 4 ");
        }
        assert_eq!(EnvConfigReader::read_decimals(), Some(4));

        unsafe {
            std::env::remove_var(DECIMALS_VAR);
        }
        assert!(EnvConfigReader::read_decimals().is_none());
    }

    #[test]
    fn test_read_date_format() {
        unsafe {
            std::env::set_var(DATE_FORMAT_VAR, "");
        }
        assert!(EnvConfigReader::read_date_format().is_none());

        unsafe {
            std::env::set_var(DATE_FORMAT_VAR, "#YYYY#");
        }
        assert_eq!(EnvConfigReader::read_date_format().as_deref(), Some("#YYYY#"));

        unsafe {
            std::env::remove_var(DATE_FORMAT_VAR);
        }
    }
}
