//! Capability contracts for hashing and tokens, implemented in `infra`.

use async_trait::async_trait;

use crate::domain::error::DomainError;

/// How long an issued access token stays valid.
pub const ACCESS_TOKEN_EXPIRATION_MS: i64 = 24 * 60 * 60 * 1000;

#[async_trait]
pub trait HashGenerator: Send + Sync {
    async fn hash(&self, plaintext: &str) -> Result<String, DomainError>;
}

#[async_trait]
pub trait HashComparer: Send + Sync {
    async fn compare(&self, plaintext: &str, hash: &str) -> Result<bool, DomainError>;
}

#[async_trait]
pub trait TokenGenerator: Send + Sync {
    /// Issues a token for the given subject key, expiring after
    /// `expiration_in_ms` milliseconds.
    async fn generate(&self, key: &str, expiration_in_ms: i64) -> Result<String, DomainError>;
}

#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Resolves a token to its subject key, failing on invalid or expired
    /// tokens.
    async fn validate(&self, token: &str) -> Result<String, DomainError>;
}
