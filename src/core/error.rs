//! Error types for fleet_encoder
//!
//! This module provides structured error handling using thiserror.

use thiserror::Error;

/// Result type alias for encoder operations
pub type Result<T> = std::result::Result<T, EncoderError>;

/// Errors that can occur while producing serialized fleets
#[derive(Error, Debug)]
pub enum EncoderError {
    /// Format identifier not recognized by the serializer factory
    #[error("Unsupported format: {format}")]
    UnsupportedFormat { format: String },

    /// IO error while reading a fleet file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error in a fleet file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EncoderError {
    /// Create an unsupported format error
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        EncoderError::UnsupportedFormat {
            format: format.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_names_identifier() {
        let err = EncoderError::unsupported_format("yaml");
        assert_eq!(err.to_string(), "Unsupported format: yaml");
        assert!(matches!(err, EncoderError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: EncoderError = io_err.into();
        assert!(matches!(err, EncoderError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err: serde_json::Error = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: EncoderError = json_err.into();
        assert!(matches!(err, EncoderError::Json(_)));
    }
}
