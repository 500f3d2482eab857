use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::gateways::{TokenGenerator, TokenValidator};

/// Claims encoded within an issued JWT.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject of the token: the user's id.
    sub: String,
    /// Expiration timestamp, seconds since epoch.
    exp: usize,
}

/// JWT adapter for issuing and validating access tokens. The signing secret
/// is owned by the adapter; it is injected at construction, never read from
/// the environment at call time.
pub struct JwtAdapter {
    secret: String,
}

impl JwtAdapter {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

#[async_trait]
impl TokenGenerator for JwtAdapter {
    async fn generate(&self, key: &str, expiration_in_ms: i64) -> Result<String, DomainError> {
        let expiration = Utc::now()
            .checked_add_signed(Duration::milliseconds(expiration_in_ms))
            .ok_or_else(|| DomainError::Unexpected("token expiration out of range".into()))?
            .timestamp() as usize;

        let claims = Claims {
            sub: key.to_owned(),
            exp: expiration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|error| DomainError::Unexpected(format!("failed to generate token: {error}")))
    }
}

#[async_trait]
impl TokenValidator for JwtAdapter {
    async fn validate(&self, token: &str) -> Result<String, DomainError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims.sub)
        .map_err(DomainError::from)
    }
}
