//! Error types and handling infrastructure for JSON to HTML conversion

use anyhow::Error;
use std::fmt;
use std::path::PathBuf;

/// Core error types for the conversion process
#[derive(Debug, thiserror::Error)]
pub enum ConversionErrorKind {
    #[error("Invalid input: top-level value must be an object or an array, found {found}")]
    InvalidInputKind { found: &'static str },

    #[error("Malformed item at index {index}: expected an object, found {found}")]
    MalformedItem { index: usize, found: &'static str },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge { size: usize, limit: usize },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("Conversion failed: {message}")]
    ConversionFailed { message: String },
}

impl ConversionErrorKind {
    pub fn invalid_input_kind(found: &'static str) -> Self {
        Self::InvalidInputKind { found }
    }

    pub fn malformed_item(index: usize, found: &'static str) -> Self {
        Self::MalformedItem { index, found }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error("{kind}")]
    Conversion {
        kind: ConversionErrorKind,
        source: Option<anyhow::Error>,
    },

    #[error(transparent)]
    Other(#[from] Error),
}

impl ConversionError {
    pub fn parse(message: String, location: Option<(usize, usize)>) -> Self {
        Self::ParseError(ParseError::new(message, location))
    }

    pub fn conversion(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind, source: None }
    }

    pub fn conversion_with_source(kind: ConversionErrorKind, source: anyhow::Error) -> Self {
        Self::Conversion {
            kind,
            source: Some(source),
        }
    }

    /// Wrap an IO failure on `path`, keeping the original error as the source
    pub fn io(error: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::conversion_with_source(
            ConversionErrorKind::io(format!("{}: {}", path.display(), error), Some(path)),
            error.into(),
        )
    }

    /// The conversion error kind, if this is not a parse or foreign error
    pub fn kind(&self) -> Option<&ConversionErrorKind> {
        match self {
            Self::Conversion { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ParseError(err) => {
                let mut message = if let Some((line, col)) = err.location {
                    format!(
                        "JSON parse error at line {}, column {}: {}",
                        line, col, err.message
                    )
                } else {
                    format!("JSON parse error: {}", err.message)
                };
                if let Some(preview) = &err.input_preview {
                    message.push('\n');
                    message.push_str(preview);
                }
                message
            }
            Self::Conversion { kind, .. } => match kind {
                ConversionErrorKind::InvalidInputKind { found } => {
                    format!(
                        "Cannot convert a top-level {}: input must be a JSON object or array",
                        found
                    )
                }
                ConversionErrorKind::MalformedItem { index, found } => {
                    format!(
                        "Array item {} is {}, but every item must be a JSON object",
                        index, found
                    )
                }
                ConversionErrorKind::InputTooLarge { size, limit } => {
                    format!(
                        "JSON input too large: {} bytes (limit: {} bytes)",
                        size, limit
                    )
                }
                _ => self.to_string(),
            },
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
        }
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub input_preview: Option<String>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            input_preview: None,
        }
    }

    pub fn with_preview(mut self, preview: String) -> Self {
        self.input_preview = Some(preview);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
