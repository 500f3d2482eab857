//! Failure kinds signalled by use cases.
//!
//! Use cases return these as tagged values; controllers pattern-match the
//! kinds they recognize and propagate everything else to the driver's single
//! 500 handler. There is no error-as-exception control flow anywhere in the
//! core.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Credentials rejected. Covers both unknown email and wrong password so
    /// the two cases are indistinguishable to the caller.
    Authentication,
    /// Email already registered. A dedicated kind, not a generic field error.
    EmailInUse,
    /// No task matches both the id and the owning user. Absence and
    /// "not yours" are deliberately the same failure.
    TaskNotFound,
    /// Request rejected by the authentication gate.
    Forbidden,
    /// Anything a collaborator failed with that the core does not interpret.
    Unexpected(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DomainError::Authentication => write!(f, "Authentication failed"),
            DomainError::EmailInUse => write!(f, "Email already in use"),
            DomainError::TaskNotFound => write!(f, "Task not found"),
            DomainError::Forbidden => write!(f, "Access forbidden"),
            DomainError::Unexpected(message) => write!(f, "Unexpected failure: {message}"),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<sqlx::Error> for DomainError {
    fn from(error: sqlx::Error) -> DomainError {
        match error {
            sqlx::Error::RowNotFound => DomainError::TaskNotFound,
            _ => DomainError::Unexpected(error.to_string()),
        }
    }
}

impl From<bcrypt::BcryptError> for DomainError {
    fn from(error: bcrypt::BcryptError) -> DomainError {
        DomainError::Unexpected(error.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for DomainError {
    fn from(_: jsonwebtoken::errors::Error) -> DomainError {
        // Expired, malformed, and bad-signature tokens all collapse into the
        // same kind; no token error subtype crosses this boundary.
        DomainError::Authentication
    }
}
