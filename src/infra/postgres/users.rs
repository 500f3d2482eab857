use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::{User, UserProfile};
use crate::domain::error::DomainError;
use crate::domain::repos::{CreateUserParams, UserRepository};

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, params: CreateUserParams) -> Result<UserProfile, DomainError> {
        let profile = sqlx::query_as::<_, UserProfile>(
            "INSERT INTO users (email, name, password) VALUES ($1, $2, $3) \
             RETURNING id, email, name, created_at, updated_at",
        )
        .bind(&params.email)
        .bind(&params.name)
        .bind(&params.password)
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    async fn load_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, name, password, created_at, updated_at \
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn load_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, name, password, created_at, updated_at \
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}
