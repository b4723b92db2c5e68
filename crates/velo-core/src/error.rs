//! # Error Types
//!
//! Domain-specific error types for velo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  velo-core errors (this file)                                       │
//! │  ├── CoreError        - Business rule violations                    │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  velo-db errors (separate crate)                                    │
//! │  └── DbError          - Persistence failures                        │
//! │                                                                     │
//! │  Tauri API errors (in app)                                          │
//! │  └── ApiError         - What the frontend sees (serialized)         │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → DbError → ApiError → Frontend  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No error is fatal to the process: every failure is reported back to
//! the triggering action and the application stays usable.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Lookup and stock failures are the persistence layer's to raise; the
/// core only ever reports invalid input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Order draft failed validation; carries every failing field.
    #[error("Order draft is invalid: {0}")]
    InvalidDraft(DraftErrors),

    /// Single-field validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// A collection of validation failures from a single draft submission,
/// so the UI can highlight every bad field at once instead of the first.
#[derive(Debug, Default)]
pub struct DraftErrors(pub Vec<ValidationError>);

impl std::fmt::Display for DraftErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for err in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", err)?;
            first = false;
        }
        Ok(())
    }
}

impl From<Vec<ValidationError>> for CoreError {
    fn from(errors: Vec<ValidationError>) -> Self {
        CoreError::InvalidDraft(DraftErrors(errors))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Occur when user input doesn't meet requirements; used for early
/// validation before business logic runs. Recoverable and side-effect
/// free: nothing is persisted when validation fails.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A collection that must contain at least one entry is empty.
    #[error("{field} must contain at least one entry")]
    Empty { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g. malformed mobile number or email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g. duplicate SKU).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    /// Name of the offending field, for per-field UI highlighting.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::Empty { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::Negative { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::Duplicate { field, .. } => field,
        }
    }
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_errors_join_with_semicolons() {
        let err: CoreError = vec![
            ValidationError::Required {
                field: "customer_name".to_string(),
            },
            ValidationError::Empty {
                field: "items".to_string(),
            },
        ]
        .into();
        assert_eq!(
            err.to_string(),
            "Order draft is invalid: customer_name is required; items must contain at least one entry"
        );
    }

    #[test]
    fn validation_error_exposes_field() {
        let err = ValidationError::Negative {
            field: "advance".to_string(),
        };
        assert_eq!(err.field(), "advance");
    }

    #[test]
    fn validation_converts_to_core_error() {
        let err: CoreError = ValidationError::Required {
            field: "sku".to_string(),
        }
        .into();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
