//! Error types for the harmonizer-rs library.
//!
//! Construction of the lexicon is the only place the semantic core can fail;
//! once an engine exists every analysis call produces a complete result. The
//! remaining variants cover the configuration loader, the parser adapters,
//! and the I/O performed by the binary.

use std::io;
use std::str::Utf8Error;

use thiserror::Error;

/// Main result type for harmonizer operations.
pub type Result<T> = std::result::Result<T, HarmonizerError>;

/// Error type for all harmonizer operations.
#[derive(Error, Debug)]
pub enum HarmonizerError {
    /// Lexicon construction failed (duplicate/conflicting key, bad coordinate)
    #[error("Construction error: {message}")]
    Construction {
        /// Error description
        message: String,
        /// Token whose registration failed
        token: Option<String>,
        /// Literal context tag of the failing entry, if any
        context: Option<String>,
    },

    /// A parser adapter handed the core something it cannot represent
    #[error("Malformed input: {message}")]
    MalformedInput {
        /// Error description
        message: String,
        /// Structural kind that triggered the violation
        kind: Option<String>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
    },

    /// Parsing and language processing errors
    #[error("Parse error in {language}: {message}")]
    Parse {
        /// Programming language being parsed
        language: String,
        /// Error description
        message: String,
        /// File path where error occurred
        file_path: Option<String>,
    },

    /// I/O related errors
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data format being handled
        data_type: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl HarmonizerError {
    /// Create a new construction error
    pub fn construction(message: impl Into<String>) -> Self {
        Self::Construction {
            message: message.into(),
            token: None,
            context: None,
        }
    }

    /// Create a construction error naming the offending lexicon key
    pub fn construction_for_key(
        message: impl Into<String>,
        token: impl Into<String>,
        context: Option<String>,
    ) -> Self {
        Self::Construction {
            message: message.into(),
            token: Some(token.into()),
            context,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new validation error with field context
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new parse error
    pub fn parse(language: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            language: language.into(),
            message: message.into(),
            file_path: None,
        }
    }

    /// Create a new parse error with file context
    pub fn parse_with_file(
        language: impl Into<String>,
        message: impl Into<String>,
        file_path: impl Into<String>,
    ) -> Self {
        Self::Parse {
            language: language.into(),
            message: message.into(),
            file_path: Some(file_path.into()),
        }
    }

    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Prefix the error message with additional context
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        let context = context.into();
        match &mut self {
            Self::Construction { message, .. }
            | Self::MalformedInput { message, .. }
            | Self::Config { message, .. }
            | Self::Validation { message, .. }
            | Self::Parse { message, .. }
            | Self::Io { message, .. }
            | Self::Serialization { message, .. } => {
                *message = format!("{context}: {message}");
            }
        }
        self
    }

    /// Whether this error was raised while building the lexicon
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::Construction { .. })
    }
}

impl From<io::Error> for HarmonizerError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for HarmonizerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            data_type: Some("JSON".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for HarmonizerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            data_type: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<Utf8Error> for HarmonizerError {
    fn from(err: Utf8Error) -> Self {
        Self::parse("unknown", format!("UTF-8 encoding error: {err}"))
    }
}

/// Result extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add lazily built context to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error result
    fn context(self, msg: &'static str) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<HarmonizerError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }

    fn context(self, msg: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_error_names_key() {
        let err = HarmonizerError::construction_for_key(
            "conflicting coordinate",
            "render",
            Some("receiver=view".to_string()),
        );

        if let HarmonizerError::Construction {
            message,
            token,
            context,
        } = &err
        {
            assert_eq!(message, "conflicting coordinate");
            assert_eq!(token.as_deref(), Some("render"));
            assert_eq!(context.as_deref(), Some("receiver=view"));
        } else {
            panic!("Expected Construction error");
        }
        assert!(err.is_construction());
    }

    #[test]
    fn test_config_error() {
        let err = HarmonizerError::config("Invalid config file harmonizer.yml");

        if let HarmonizerError::Config { message, field } = &err {
            assert_eq!(message, "Invalid config file harmonizer.yml");
            assert_eq!(*field, None);
        } else {
            panic!("Expected Config error");
        }
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_with_context_prefixes_message() {
        let err = HarmonizerError::validation_field("top_n must be greater than 0", "top_n")
            .with_context("naming section");
        assert_eq!(
            err.to_string(),
            "Validation error: naming section: top_n must be greater than 0"
        );
    }

    #[test]
    fn test_result_extension() {
        let result: std::result::Result<i32, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "File not found",
        ));

        let err = result.context("Failed to read configuration file").unwrap_err();
        assert!(matches!(err, HarmonizerError::Io { .. }));
        assert!(err.to_string().contains("Failed to read configuration file"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<i32>("invalid json").unwrap_err();
        let err: HarmonizerError = json_err.into();

        if let HarmonizerError::Serialization { data_type, .. } = err {
            assert_eq!(data_type, Some("JSON".to_string()));
        } else {
            panic!("Expected Serialization error");
        }
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<i32>("invalid: yaml: content").unwrap_err();
        let err: HarmonizerError = yaml_err.into();
        assert!(matches!(err, HarmonizerError::Serialization { .. }));
    }

    #[test]
    fn test_from_utf8_error() {
        let invalid_utf8 = vec![0, 159, 146, 150];
        let utf8_err = std::str::from_utf8(&invalid_utf8).unwrap_err();
        let err: HarmonizerError = utf8_err.into();
        assert!(matches!(err, HarmonizerError::Parse { .. }));
    }

    #[test]
    fn test_malformed_input_display() {
        let err = HarmonizerError::MalformedInput {
            message: "no extraction mapping".to_string(),
            kind: Some("lambda".to_string()),
        };
        assert_eq!(err.to_string(), "Malformed input: no extraction mapping");
        assert!(!err.is_construction());
    }

    #[test]
    fn test_parse_error_display() {
        let err = HarmonizerError::parse_with_file("python", "Syntax error", "test.py");
        let display = format!("{}", err);
        assert!(display.contains("Parse error in python"));
        assert!(display.contains("Syntax error"));
    }
}
