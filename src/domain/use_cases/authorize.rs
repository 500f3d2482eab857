use std::sync::Arc;

use crate::domain::error::DomainError;
use crate::domain::gateways::TokenValidator;

pub struct Authorize {
    tokens: Arc<dyn TokenValidator>,
}

impl Authorize {
    pub fn new(tokens: Arc<dyn TokenValidator>) -> Self {
        Self { tokens }
    }

    /// Resolves a bearer token to the subject id it was issued for. Every
    /// token failure (expired, malformed, bad signature) surfaces uniformly
    /// as [`DomainError::Authentication`].
    pub async fn authorize(&self, token: &str) -> Result<i64, DomainError> {
        let subject = self
            .tokens
            .validate(token)
            .await
            .map_err(|_| DomainError::Authentication)?;

        subject.parse().map_err(|_| DomainError::Authentication)
    }
}
