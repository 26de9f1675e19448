use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("No person with id {id}")]
    PersonNotFound { id: i32 },

    #[error("Sequence completed without emitting an element")]
    EmptySequence,

    #[error("Sequence emitted more than one element")]
    MultipleElements,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
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
    Lookup,
    Sequence,
    Io,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DirectoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DirectoryError::PersonNotFound { .. } => ErrorCategory::Lookup,
            DirectoryError::EmptySequence | DirectoryError::MultipleElements => {
                ErrorCategory::Sequence
            }
            DirectoryError::IoError(_) => ErrorCategory::Io,
            DirectoryError::ConfigError { .. }
            | DirectoryError::InvalidConfigValueError { .. }
            | DirectoryError::MissingConfigError { .. } => ErrorCategory::Configuration,
            DirectoryError::SerializationError(_) | DirectoryError::ValidationError { .. } => {
                ErrorCategory::Data
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup => ErrorSeverity::Medium,
            ErrorCategory::Sequence | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            DirectoryError::PersonNotFound { id } => format!("Person {} does not exist", id),
            DirectoryError::EmptySequence => "The query matched no person".to_string(),
            DirectoryError::MultipleElements => {
                "The query matched more than one person".to_string()
            }
            DirectoryError::IoError(e) => format!("Could not read file: {}", e),
            DirectoryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Lookup => "Run without --id to list every known person",
            ErrorCategory::Sequence => "Narrow or widen the filter so exactly one person matches",
            ErrorCategory::Io => "Check that the seed file exists and is readable",
            ErrorCategory::Configuration => "Check the command line options and seed file",
            ErrorCategory::Data => "Check the seed file contents",
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_miss_is_medium_severity() {
        let err = DirectoryError::PersonNotFound { id: 9 };
        assert_eq!(err.category(), ErrorCategory::Lookup);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.to_string(), "No person with id 9");
        assert_eq!(err.user_friendly_message(), "Person 9 does not exist");
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = DirectoryError::MissingConfigError {
            field: "seed_file".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_sequence_errors() {
        assert_eq!(
            DirectoryError::EmptySequence.category(),
            ErrorCategory::Sequence
        );
        assert_eq!(
            DirectoryError::MultipleElements.severity(),
            ErrorSeverity::High
        );
    }
}
