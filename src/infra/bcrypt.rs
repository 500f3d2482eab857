use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::gateways::{HashComparer, HashGenerator};

pub struct BcryptAdapter {
    cost: u32,
}

impl BcryptAdapter {
    pub const DEFAULT_COST: u32 = 12;

    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COST)
    }
}

#[async_trait]
impl HashGenerator for BcryptAdapter {
    async fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        bcrypt::hash(plaintext, self.cost).map_err(DomainError::from)
    }
}

#[async_trait]
impl HashComparer for BcryptAdapter {
    async fn compare(&self, plaintext: &str, hash: &str) -> Result<bool, DomainError> {
        bcrypt::verify(plaintext, hash).map_err(DomainError::from)
    }
}
