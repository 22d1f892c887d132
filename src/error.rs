// Copyright 2026 NDT Pulse Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for pulse validation and the CLI.

use std::fmt;

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for operations that only fail on bad pulse parameters.
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Top-level error type.
#[derive(Debug)]
pub enum Error {
    /// Configuration error
    Config(String),
    /// Pulse parameter validation error
    Validation(ValidationError),
    /// IO error
    Io(std::io::Error),
    /// Serialization error
    Serialization(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Validation(e) => write!(f, "Validation error: {}", e),
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Validation(e)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Pulse parameter errors, tagged with the input field they came from.
///
/// Field names match the form fields: `amplitude`, `time`, `frequency`
/// and `cycles`. A bad sampling grid is reported against `sampling`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The raw text could not be parsed as a real number
    Parse { field: String, input: String },
    /// The parsed value violates a domain constraint
    Range { field: String, reason: String },
    /// The sampling grid cannot produce a time axis
    Sampling { reason: String },
}

impl ValidationError {
    pub(crate) fn parse(field: &str, input: &str) -> Self {
        ValidationError::Parse {
            field: field.into(),
            input: input.into(),
        }
    }

    pub(crate) fn range(field: &str, reason: &str) -> Self {
        ValidationError::Range {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending input field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Parse { field, .. } | ValidationError::Range { field, .. } => field,
            ValidationError::Sampling { .. } => "sampling",
        }
    }

    /// Why a parsed value was rejected. `None` for parse failures.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ValidationError::Parse { .. } => None,
            ValidationError::Range { reason, .. } | ValidationError::Sampling { reason } => {
                Some(reason)
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Parse { field, input } => {
                write!(f, "Field '{}': cannot parse '{}' as a number", field, input)
            }
            ValidationError::Range { field, reason } => {
                write!(f, "Field '{}': {}", field, reason)
            }
            ValidationError::Sampling { reason } => {
                write!(f, "Invalid sampling grid: {}", reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    // =========================================================================
    // Display
    // =========================================================================

    #[test]
    fn test_error_display_config() {
        let e = Error::Config("bad interval".into());
        assert_eq!(e.to_string(), "Configuration error: bad interval");
    }

    #[test]
    fn test_error_display_validation() {
        let e = Error::Validation(ValidationError::range("cycles", "too large"));
        assert_eq!(e.to_string(), "Validation error: Field 'cycles': too large");
    }

    #[test]
    fn test_error_display_io() {
        let e = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(e.to_string(), "IO error: gone");
    }

    #[test]
    fn test_error_display_serialization() {
        let e = Error::Serialization("invalid yaml".into());
        assert_eq!(e.to_string(), "Serialization error: invalid yaml");
    }

    #[test]
    fn test_validation_error_display_parse() {
        let e = ValidationError::parse("amplitude", "abc");
        assert_eq!(e.to_string(), "Field 'amplitude': cannot parse 'abc' as a number");
    }

    #[test]
    fn test_validation_error_display_range() {
        let e = ValidationError::range("frequency", "out of range");
        assert_eq!(e.to_string(), "Field 'frequency': out of range");
    }

    #[test]
    fn test_validation_error_display_sampling() {
        let e = ValidationError::Sampling {
            reason: "min_samples must be >= 2, got 0".into(),
        };
        assert_eq!(
            e.to_string(),
            "Invalid sampling grid: min_samples must be >= 2, got 0"
        );
        assert_eq!(e.field(), "sampling");
        assert_eq!(e.reason(), Some("min_samples must be >= 2, got 0"));
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[test]
    fn test_validation_error_field() {
        assert_eq!(ValidationError::parse("time", "x").field(), "time");
        assert_eq!(ValidationError::range("cycles", "too large").field(), "cycles");
    }

    #[test]
    fn test_validation_error_reason() {
        assert_eq!(ValidationError::parse("time", "x").reason(), None);
        assert_eq!(
            ValidationError::range("cycles", "too large").reason(),
            Some("too large")
        );
    }

    // =========================================================================
    // source() and From impls
    // =========================================================================

    #[test]
    fn test_error_source() {
        assert!(Error::Io(std::io::Error::other("disk")).source().is_some());
        assert!(Error::Validation(ValidationError::parse("time", "")).source().is_some());
        assert!(Error::Config("x".into()).source().is_none());
        assert!(Error::Serialization("x".into()).source().is_none());
    }

    #[test]
    fn test_from_validation_error() {
        let e: Error = ValidationError::range("time", "too long").into();
        assert!(matches!(e, Error::Validation(ValidationError::Range { .. })));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let e: Error = io_err.into();
        assert!(matches!(e, Error::Io(_)));
    }

    #[test]
    fn test_from_serde_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("{{{{").unwrap_err();
        let e: Error = yaml_err.into();
        assert!(matches!(e, Error::Serialization(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{bad}").unwrap_err();
        let e: Error = json_err.into();
        assert!(matches!(e, Error::Serialization(_)));
    }
}
