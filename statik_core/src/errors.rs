//! # Error Types
//!
//! Structured error types for statik_core. Every fatal condition is raised at
//! the offending analyzer call and carries enough context to be shown to the
//! end user verbatim.
//!
//! Lookup misses (unknown material or section names) are deliberately *not*
//! errors: they resolve to a documented default, see [`crate::materials`].
//!
//! ## Example
//!
//! ```rust
//! use statik_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::invalid_parameter(
//!             "span_m",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for statik_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A length, load, modulus, inertia or thickness is zero, negative or not finite
    #[error("Invalid parameter '{field}': {value} - {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },

    /// A continuous member was given a span count the analyzer does not support
    #[error("Unsupported span count for {member}: {count} (supported: {supported})")]
    UnsupportedSpanCount {
        member: String,
        count: usize,
        supported: String,
    },

    /// Valid inputs whose intermediate or output quantities leave the f64 range
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidParameter error
    pub fn invalid_parameter(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidParameter {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedSpanCount error.
    ///
    /// `supported` lists the accepted counts, e.g. `&[2, 3]`.
    pub fn unsupported_span_count(
        member: impl Into<String>,
        count: usize,
        supported: &[usize],
    ) -> Self {
        let supported = supported
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        CalcError::UnsupportedSpanCount {
            member: member.into(),
            count,
            supported,
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidParameter { .. } => "INVALID_PARAMETER",
            CalcError::UnsupportedSpanCount { .. } => "UNSUPPORTED_SPAN_COUNT",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

/// Fail with `InvalidParameter` unless `value` is finite and strictly positive.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_parameter(
            field,
            value.to_string(),
            "Value must be a finite number",
        ));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_parameter(
            field,
            value.to_string(),
            "Value must be greater than zero",
        ));
    }
    Ok(())
}

/// Pass `value` through unless it is non-finite.
///
/// Used on intermediate quantities (E in kN/m², E·I, plate rigidity) where an
/// overflow would otherwise turn into a finite but meaningless result.
pub(crate) fn require_finite(calculation: &str, quantity: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::calculation_failed(
            calculation,
            format!("{} = {} is out of range", quantity, value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_parameter("span_m", "-5", "Value must be greater than zero");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidParameter\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::invalid_parameter("load", "0", "zero").error_code(),
            "INVALID_PARAMETER"
        );
        assert_eq!(
            CalcError::unsupported_span_count("continuous beam", 4, &[2, 3]).error_code(),
            "UNSUPPORTED_SPAN_COUNT"
        );
    }

    #[test]
    fn test_unsupported_span_count_message() {
        let err = CalcError::unsupported_span_count("continuous slab", 5, &[2, 3, 4]);
        assert_eq!(
            err.to_string(),
            "Unsupported span count for continuous slab: 5 (supported: 2, 3, 4)"
        );
    }

    #[test]
    fn test_require_finite() {
        assert_eq!(require_finite("simple beam", "E·I", 2.5).unwrap(), 2.5);
        let err = require_finite("simple beam", "E·I", f64::INFINITY).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
        assert!(err.to_string().starts_with("Calculation failed: simple beam - E·I = inf"));
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("x", 1.0).is_ok());
        assert!(require_positive("x", 0.0).is_err());
        assert!(require_positive("x", -2.0).is_err());
        assert!(require_positive("x", f64::NAN).is_err());
        assert!(require_positive("x", f64::INFINITY).is_err());
    }
}
