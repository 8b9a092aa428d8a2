//! # Error Types
//!
//! Domain-specific error types for shopkit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopkit-core errors (this file)                                       │
//! │  ├── CoreError        - Rule violations (price, code, country, user)   │
//! │  ├── ValidationError  - Single field failures                          │
//! │  └── UserInputErrors  - Every violated rule of one sign-up form        │
//! │                                                                         │
//! │  shopkit-services errors (separate crate)                              │
//! │  └── ServiceError     - Collaborator failures                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Message Contract
//! Every `CoreError` message starts with "Invalid", so callers that only
//! look at text (CLI output, logs, JSON payloads) can match on it.

use std::fmt;

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Price is negative, or was not a number at all.
    #[error("Invalid price: {reason}")]
    InvalidPrice { reason: String },

    /// Coupon code argument was not a string.
    #[error("Invalid coupon code: {0}")]
    InvalidCouponCode(String),

    /// Country code has no driving-age rule.
    ///
    /// ## When This Occurs
    /// - Typo in the code ("USA" instead of "US")
    /// - A jurisdiction missing from `[driving] minimum_ages` in shop.toml
    #[error("Invalid country code: {0}")]
    InvalidCountry(String),

    /// One or more sign-up fields failed validation.
    #[error("{0}")]
    InvalidUserInput(UserInputErrors),

    /// Validation error (wraps ValidationError).
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Argument had the wrong runtime type (loose JSON boundary).
    #[error("{field} must be a {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },

    /// Invalid format (e.g., unparsable amount, malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., the same coupon code twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// User Input Errors
// =============================================================================

/// The sign-up field a violation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Username,
    Age,
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserField::Username => write!(f, "username"),
            UserField::Age => write!(f, "age"),
        }
    }
}

/// Every rule a `validate_user_input` call violated, in field order.
///
/// ## Rendering
/// ```text
/// Invalid username: username must be at least 3 characters; Invalid age: age must be between 18 and 100
/// ```
/// The list is the contract; the rendered string is for humans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInputErrors {
    violations: Vec<(UserField, ValidationError)>,
}

impl UserInputErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation for `field`.
    pub fn push(&mut self, field: UserField, error: ValidationError) {
        self.violations.push((field, error));
    }

    /// Returns true when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the recorded violations.
    pub fn violations(&self) -> &[(UserField, ValidationError)] {
        &self.violations
    }

    /// Returns true if `field` has at least one violation.
    pub fn has(&self, field: UserField) -> bool {
        self.violations.iter().any(|(f, _)| *f == field)
    }

    /// Turns the collection into a result: `Ok` when empty.
    pub fn into_result(self) -> CoreResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidUserInput(self))
        }
    }
}

impl fmt::Display for UserInputErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, error)) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "Invalid {}: {}", field, error)?;
        }
        Ok(())
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
