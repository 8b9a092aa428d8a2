//! # Service Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Service Error Categories                            │
//! │                                                                         │
//! │  ┌───────────────────────────────┐  ┌───────────────────────────────┐ │
//! │  │  Collaborator                 │  │  Unavailable                  │ │
//! │  │                               │  │                               │ │
//! │  │  service said no / broke      │  │  service has nothing          │ │
//! │  │                               │  │  for this request             │ │
//! │  └───────────────────────────────┘  └───────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for service flows and collaborator calls.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// A collaborator returned an error.
    #[error("{service} failed: {reason}")]
    Collaborator { service: String, reason: String },

    /// A collaborator has no answer for this request.
    #[error("{0} unavailable")]
    Unavailable(String),
}

impl ServiceError {
    /// Shorthand for `ServiceError::Collaborator`.
    pub fn collaborator(service: impl Into<String>, reason: impl Into<String>) -> Self {
        ServiceError::Collaborator {
            service: service.into(),
            reason: reason.into(),
        }
    }
}
