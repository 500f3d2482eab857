use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::gateways::{HashComparer, TokenGenerator, ACCESS_TOKEN_EXPIRATION_MS};
use crate::domain::repos::UserRepository;

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginOutput {
    pub access_token: String,
    pub user: AuthenticatedUser,
}

pub struct LoginUser {
    users: Arc<dyn UserRepository>,
    comparer: Arc<dyn HashComparer>,
    tokens: Arc<dyn TokenGenerator>,
}

impl LoginUser {
    pub fn new(
        users: Arc<dyn UserRepository>,
        comparer: Arc<dyn HashComparer>,
        tokens: Arc<dyn TokenGenerator>,
    ) -> Self {
        Self {
            users,
            comparer,
            tokens,
        }
    }

    /// Authenticates by email and password. An unknown email and a wrong
    /// password both fail with [`DomainError::Authentication`]; the caller
    /// cannot tell which happened.
    pub async fn login(&self, input: LoginInput) -> Result<LoginOutput, DomainError> {
        let user = self
            .users
            .load_by_email(&input.email)
            .await?
            .ok_or(DomainError::Authentication)?;

        let matches = self.comparer.compare(&input.password, &user.password).await?;
        if !matches {
            return Err(DomainError::Authentication);
        }

        let access_token = self
            .tokens
            .generate(&user.id.to_string(), ACCESS_TOKEN_EXPIRATION_MS)
            .await?;

        Ok(LoginOutput {
            access_token,
            user: AuthenticatedUser {
                id: user.id,
                email: user.email,
                name: user.name,
            },
        })
    }
}
