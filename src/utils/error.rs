use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error in '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Cannot parse '{input}' as {expected}")]
    ParseError { input: String, expected: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Storage,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReadingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReadingError::ConfigValidationError { .. }
            | ReadingError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ReadingError::ValidationError { .. } | ReadingError::ParseError { .. } => {
                ErrorCategory::Input
            }
            ReadingError::SerializationError(_)
            | ReadingError::CsvError(_)
            | ReadingError::StorageError { .. } => ErrorCategory::Storage,
            ReadingError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ReadingError::IoError(_) => {
                "Check that the history path exists and is writable".to_string()
            }
            ReadingError::SerializationError(_) => {
                "The history file may be corrupted; move it aside and try again".to_string()
            }
            ReadingError::CsvError(_) => "Try exporting with --format json instead".to_string(),
            ReadingError::ConfigValidationError { field, .. }
            | ReadingError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in your configuration file", field)
            }
            ReadingError::ValidationError { field, .. } => {
                format!("Check the value given for '{}'", field)
            }
            ReadingError::ParseError { expected, .. } => {
                format!("Provide a valid {}", expected)
            }
            ReadingError::StorageError { .. } => {
                "Disable history with [history] enabled = false to keep going".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Storage => format!("Could not access reading history: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReadingError>;
