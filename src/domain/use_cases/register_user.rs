use std::sync::Arc;

use crate::domain::entities::UserProfile;
use crate::domain::error::DomainError;
use crate::domain::gateways::HashGenerator;
use crate::domain::repos::{CreateUserParams, UserRepository};

#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub email: String,
    pub name: String,
    pub password: String,
}

pub struct RegisterUser {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn HashGenerator>,
}

impl RegisterUser {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn HashGenerator>) -> Self {
        Self { users, hasher }
    }

    /// Registers a new account. Fails with [`DomainError::EmailInUse`] when
    /// the email is taken; the returned profile never contains the password.
    pub async fn register(&self, input: RegisterInput) -> Result<UserProfile, DomainError> {
        if self.users.email_exists(&input.email).await? {
            return Err(DomainError::EmailInUse);
        }

        let hashed = self.hasher.hash(&input.password).await?;

        self.users
            .create(CreateUserParams {
                email: input.email,
                name: input.name,
                password: hashed,
            })
            .await
    }
}
