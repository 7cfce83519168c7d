use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Selector error: {message}")]
    SelectorError { message: String },

    #[error("Markup error: {message}")]
    MarkupError { message: String },

    #[error("Element error for <{tag}>: {reason}")]
    ElementError { tag: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Render,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RenderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RenderError::ConfigError { .. }
            | RenderError::InvalidConfigValueError { .. }
            | RenderError::TomlError(_)
            | RenderError::SelectorError { .. } => ErrorCategory::Configuration,
            RenderError::MarkupError { .. } => ErrorCategory::Input,
            RenderError::ElementError { .. }
            | RenderError::SerializationError(_)
            | RenderError::ProcessingError { .. } => ErrorCategory::Render,
            RenderError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RenderError::ConfigError { .. }
            | RenderError::InvalidConfigValueError { .. }
            | RenderError::TomlError(_)
            | RenderError::SelectorError { .. } => ErrorSeverity::Medium,
            RenderError::MarkupError { .. }
            | RenderError::ElementError { .. }
            | RenderError::SerializationError(_)
            | RenderError::ProcessingError { .. } => ErrorSeverity::High,
            RenderError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RenderError::IoError(_) => {
                "Check that the input file exists and the output directory is writable".to_string()
            }
            RenderError::SerializationError(_) => {
                "Element properties could not be converted; check the card data".to_string()
            }
            RenderError::TomlError(_) => {
                "Check the configuration file for TOML syntax errors".to_string()
            }
            RenderError::SelectorError { .. } => {
                "Check the block selector; it must be a valid CSS selector".to_string()
            }
            RenderError::MarkupError { .. } => {
                "Check that the input document contains the expected block element".to_string()
            }
            RenderError::ElementError { .. } => {
                "Check element registrations; each tag may be defined only once".to_string()
            }
            RenderError::ConfigError { .. } | RenderError::InvalidConfigValueError { .. } => {
                "Review the configuration values and retry".to_string()
            }
            RenderError::ProcessingError { .. } => {
                "The block markup could not be decorated; check the row structure".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RenderError::IoError(e) => format!("File operation failed: {}", e),
            RenderError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            RenderError::SelectorError { message } => {
                format!("The block selector is invalid: {}", message)
            }
            RenderError::MarkupError { message } => {
                format!("The input markup is not usable: {}", message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_are_critical_system_errors() {
        let err = RenderError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn missing_block_is_an_input_error() {
        let err = RenderError::MarkupError {
            message: "no element matched selector 'div.design-support'".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("design-support"));
    }

    #[test]
    fn invalid_config_value_formats_field_and_reason() {
        let err = RenderError::InvalidConfigValueError {
            field: "output_file".to_string(),
            value: "grid.pdf".to_string(),
            reason: "unsupported extension".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("output_file"));
        assert!(msg.contains("grid.pdf"));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
