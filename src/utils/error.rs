use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Workbook error: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON decoding error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid input: {message}")]
    InvalidInputError { message: String },

    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// 錯誤分類，供呼叫端決定如何回報
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidInput,
    Serialization,
    Configuration,
    Io,
}

impl ExportError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInputError {
            message: message.into(),
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInputError { .. } | Self::JsonError(_) => ErrorCategory::InvalidInput,
            Self::XlsxError(_) | Self::CsvError(_) | Self::SerializationError { .. } => {
                ErrorCategory::Serialization
            }
            Self::TomlError(_)
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        self.category() == ErrorCategory::InvalidInput
    }

    pub fn is_serialization(&self) -> bool {
        self.category() == ErrorCategory::Serialization
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::InvalidInput => {
                "Check that the input is a JSON array of employee objects without null entries"
            }
            ErrorCategory::Serialization => {
                "The document could not be built; retrying with the same input will not help"
            }
            ErrorCategory::Configuration => "Review the configuration file and CLI arguments",
            ErrorCategory::Io => "Check that the paths exist and are writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::InvalidInput => format!("Input data rejected: {}", self),
            ErrorCategory::Serialization => format!("Export failed: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Io => format!("File access failed: {}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(
            ExportError::invalid_input("null employee").category(),
            ErrorCategory::InvalidInput
        );
        assert!(ExportError::serialization("broken").is_serialization());
        assert_eq!(
            ExportError::MissingConfigError {
                field: "export.delimiter".to_string()
            }
            .category(),
            ErrorCategory::Configuration
        );

        let mut workbook = rust_xlsxwriter::Workbook::new();
        let xlsx_err = workbook.add_worksheet().set_name("a[b").err().unwrap();
        assert!(ExportError::from(xlsx_err).is_serialization());

        let io = ExportError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.category(), ErrorCategory::Io);
    }

    #[test]
    fn test_json_error_is_invalid_input() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ExportError::from(err);
        assert!(err.is_invalid_input());
        assert!(err.user_friendly_message().starts_with("Input data rejected"));
    }
}
