use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Input file not found: '{}'", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Input file could not be read: '{}': {source}", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Invalid match pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Config,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::InputNotFound { .. } | EtlError::InputUnreadable { .. } => {
                ErrorCategory::Input
            }
            EtlError::IoError(_) => ErrorCategory::Output,
            EtlError::SerializationError(_)
            | EtlError::CsvError(_)
            | EtlError::ProcessingError { .. } => ErrorCategory::Serialization,
            EtlError::PatternError(_)
            | EtlError::ConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Config | ErrorCategory::Serialization => {
                ErrorSeverity::High
            }
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// 根據嚴重程度決定的進程退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::InputNotFound { path } => {
                format!("ERROR: Input file not found → '{}'", path.display())
            }
            EtlError::InputUnreadable { path, source } => {
                format!("ERROR: Could not read input file '{}' ({})", path.display(), source)
            }
            EtlError::IoError(e) => format!("Could not write the report: {}", e),
            EtlError::SerializationError(e) => format!("Could not encode the report as JSON: {}", e),
            EtlError::CsvError(e) => format!("Could not encode the report as CSV: {}", e),
            EtlError::ProcessingError { message } => format!("Could not build the report: {}", message),
            EtlError::PatternError(e) => format!("The address pattern failed to compile: {}", e),
            EtlError::ConfigError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            EtlError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' has an invalid value '{}': {}", field, value, reason),
            EtlError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::InputNotFound { path } => format!(
                "Make sure '{}' exists, or point --input at the text file to scan",
                path.display()
            ),
            EtlError::InputUnreadable { .. } => {
                "Check the file permissions and that the file is UTF-8 encoded text".to_string()
            }
            EtlError::IoError(_) => {
                "Check that the output location is writable and has free space".to_string()
            }
            EtlError::SerializationError(_)
            | EtlError::CsvError(_)
            | EtlError::ProcessingError { .. } => {
                "Try the default text format with --format text".to_string()
            }
            EtlError::PatternError(_) => "Rebuild the tool; the built-in pattern is invalid".to_string(),
            EtlError::ConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => {
                "Review the command-line arguments or the TOML configuration file".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_is_fatal_input_error() {
        let err = EtlError::InputNotFound {
            path: PathBuf::from("missing.txt"),
        };

        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("missing.txt"));
        assert!(err.recovery_suggestion().contains("missing.txt"));
    }

    #[test]
    fn test_unreadable_input_shares_input_category() {
        let err = EtlError::InputUnreadable {
            path: PathBuf::from("locked.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(err.category(), ErrorCategory::Input);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_config_errors_exit_non_zero() {
        let err = EtlError::MissingConfigError {
            field: "input.path".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Config);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_write_failure_is_critical() {
        let err = EtlError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));

        assert_eq!(err.category(), ErrorCategory::Output);
        assert_eq!(err.exit_code(), 3);
    }
}
