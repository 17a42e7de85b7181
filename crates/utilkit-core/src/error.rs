use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ColorError: {0}")]
    Color(#[from] ColorError),
    #[error("FormatError: {0}")]
    Format(#[from] FormatError),
    #[error("RandomError: {0}")]
    Random(#[from] RandomError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("UtilsError: {0}")]
    Utils(#[from] UtilsError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid HEX color: {input}")]
    InvalidHex { input: String },
    #[error("{channel} channel value {value} is outside 0..=255")]
    ChannelOutOfRange { channel: &'static str, value: i64 },
}

#[derive(Error, Debug, PartialEq)]
pub enum FormatError {
    #[error("Byte count must be a finite, non-negative number (got {value})")]
    InvalidByteCount { value: f64 },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RandomError {
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
    #[error("Degenerate range for {num}: value must not be -1, 0 or 1")]
    DegenerateRange { num: i64 },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON error in {path}: {source}")]
    JsonParse {
        path: String,
        source: serde_json::Error,
    },
    #[error("JSON serialization failed: {0}")]
    JsonSerialize(serde_json::Error),
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Validation error: {message}")]
    Validation { message: String },
    #[error("Logger initialization failed: {message}")]
    Logging { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Color(_) => ErrorSeverity::Medium,
            AppError::Format(_) => ErrorSeverity::Medium,
            AppError::Random(_) => ErrorSeverity::Medium,
            AppError::Storage(storage_error) => match storage_error {
                StorageError::FileIo { .. } => ErrorSeverity::High,
                StorageError::ConfigDirNotFound => ErrorSeverity::Critical,
                _ => ErrorSeverity::Medium,
            },
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Utils(_) => ErrorSeverity::Low,
        }
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Color(ColorError::InvalidHex { input }) => {
                format!("'{}' is not a HEX color", input)
            }
            AppError::Storage(StorageError::FileIo { path, .. }) => {
                format!("Could not access {}", path)
            }
            AppError::Random(RandomError::DegenerateRange { num }) => {
                format!("{} has no usable random range", num)
            }
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Color(ColorError::InvalidHex { .. }) => {
                Some("Use #RGB or #RRGGBB, e.g. '#3F2' or '#0F5745'".to_string())
            }
            AppError::Color(ColorError::ChannelOutOfRange { .. }) => {
                Some("Each RGB channel must be between 0 and 255".to_string())
            }
            AppError::Random(RandomError::InvalidRange { .. }) => {
                Some("Pass the smaller bound first: 'utilkit random range <min> <max>'".to_string())
            }
            AppError::Storage(StorageError::JsonParse { .. }) => {
                Some("Check the file is valid UTF-8 JSON".to_string())
            }
            AppError::Config(ConfigError::InvalidValue { field, .. }) => Some(format!(
                "Fix '{}' in config.toml or the matching UTILKIT_* variable",
                field
            )),
            _ => None,
        }
    }
}
