use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {message}")]
    TomlError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl GuideError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            GuideError::IoError(e) => format!("Failed to read or write data: {}", e),
            GuideError::SerializationError(_) => {
                "Failed to render the example document".to_string()
            }
            GuideError::TomlError { .. } => "The account file is not valid TOML".to_string(),
            GuideError::ConfigError { message } => format!("Configuration problem: {}", message),
            GuideError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value in '{}': {}", field, reason)
            }
            GuideError::MissingConfigError { field } => {
                format!("Missing required setting '{}'", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GuideError::IoError(_) => "Check that the file exists and that stdout is writable",
            GuideError::SerializationError(_) => "Check the account fields for unusual characters",
            GuideError::TomlError { .. } => {
                "Each entry must be an [[accounts]] table with email, password, display_name and staff_id"
            }
            GuideError::ConfigError { .. } | GuideError::MissingConfigError { .. } => {
                "Run without --config to use the built-in staff accounts"
            }
            GuideError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the account file and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GuideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message_names_field() {
        let err = GuideError::InvalidConfigValueError {
            field: "accounts[0].email".to_string(),
            value: "nope".to_string(),
            reason: "Email must contain '@'".to_string(),
        };

        assert!(err.to_string().contains("accounts[0].email"));
        assert!(err.user_friendly_message().contains("Email must contain '@'"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: GuideError = io.into();

        assert!(matches!(err, GuideError::IoError(_)));
        assert!(!err.recovery_suggestion().is_empty());
    }
}
