use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid input '{value}': {reason}")]
    InvalidInput { value: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn invalid_input(value: impl Into<String>, reason: impl Into<String>) -> Self {
        SiteError::InvalidInput {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::IoError(_) | SiteError::SerializationError(_) => ErrorCategory::Io,
            SiteError::ConfigParseError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SiteError::InvalidInput { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SiteError::InvalidInput { .. } => ErrorSeverity::Medium,
            SiteError::ConfigParseError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorSeverity::High,
            SiteError::IoError(_) | SiteError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::IoError(e) => format!("Could not read or write a file: {}", e),
            SiteError::SerializationError(e) => format!("Could not serialize output: {}", e),
            SiteError::ConfigParseError { message } => {
                format!("The settings file is not valid TOML: {}", message)
            }
            SiteError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Setting '{}' has an invalid value '{}': {}", field, value, reason),
            SiteError::MissingConfigError { field } => {
                format!("Setting '{}' is required but missing", field)
            }
            SiteError::InvalidInput { value, reason } => {
                format!("Input '{}' was rejected: {}", value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the path exists and is readable",
            ErrorCategory::Configuration => "Fix the settings file and run check-config again",
            ErrorCategory::Input => {
                "Pass a date like 2024-01-05 or a positive words-per-minute value"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
