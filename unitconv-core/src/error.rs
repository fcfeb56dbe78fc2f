//! Conversion errors and structured error reports
//!
//! The only failure a conversion can produce is an unsupported unit pair.
//! Everything that reaches a caller is turned into an `ErrorReport`: a
//! machine-readable code plus a human message, ready to serialize.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::{Unit, UnitError};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNSUPPORTED_CONVERSION: &str = "UNSUPPORTED_CONVERSION";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const INVALID_PARAMS: &str = "INVALID_PARAMS";
    pub const UNKNOWN_METHOD: &str = "UNKNOWN_METHOD";
}

/// Message shown to the user when a pair has no formula
pub const INVALID_CONVERSION_MESSAGE: &str = "Invalid conversion! Please choose compatible units.";

/// Error returned when the table has no formula for a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("cannot convert {from} to {to}: unsupported conversion")]
    Unsupported { from: Unit, to: Unit },
}

/// Structured error for callers of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorReport {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn unsupported(from: Unit, to: Unit) -> Self {
        Self::new(codes::UNSUPPORTED_CONVERSION, format!("No conversion from {} to {}", from, to))
            .with_suggestion(INVALID_CONVERSION_MESSAGE)
    }

    pub fn unknown_unit(name: &str) -> Self {
        Self::new(codes::UNKNOWN_UNIT, format!("Unknown unit: {}", name))
            .with_suggestion("Use the units method to list unit names")
    }

    pub fn unknown_category(name: &str) -> Self {
        Self::new(codes::UNKNOWN_CATEGORY, format!("Unknown category: {}", name))
            .with_suggestion("Choose Length, Temperature or Weight")
    }

    pub fn invalid_value(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_VALUE, format!("Invalid value: {}", details.into()))
            .with_suggestion("Enter a finite number of at least 0")
    }

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
    }

    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_PARAMS, format!("Invalid params: {}", details.into()))
    }

    pub fn unknown_method(method: &str) -> Self {
        Self::new(codes::UNKNOWN_METHOD, format!("Unknown method: {}", method))
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorReport {}

impl From<ConversionError> for ErrorReport {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::Unsupported { from, to } => Self::unsupported(from, to),
        }
    }
}

impl From<UnitError> for ErrorReport {
    fn from(err: UnitError) -> Self {
        match err {
            UnitError::Unknown(name) => Self::unknown_unit(&name),
            UnitError::UnknownCategory(name) => Self::unknown_category(&name),
        }
    }
}
