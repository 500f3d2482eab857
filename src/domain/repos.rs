//! Repository contracts consumed by the use cases.
//!
//! Every task operation is scoped by the owning user id: load, update, and
//! delete match on both the task id and the owner, so a caller cannot tell a
//! missing task from somebody else's task.

use async_trait::async_trait;

use crate::domain::entities::{Task, TaskStatus, User, UserProfile};
use crate::domain::error::DomainError;

#[derive(Debug, Clone)]
pub struct CreateTaskParams {
    pub title: String,
    pub description: String,
    pub user_id: i64,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTaskParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

/// Filters are purely additive: an omitted filter imposes no constraint.
#[derive(Debug, Clone)]
pub struct TaskFilter {
    pub user_id: i64,
    pub status: Option<TaskStatus>,
    pub search: Option<String>,
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persists a new task for the owner; the id, `pending` status, and
    /// timestamps are assigned by storage.
    async fn create(&self, params: CreateTaskParams) -> Result<Task, DomainError>;

    async fn load_by_id(&self, id: i64, user_id: i64) -> Result<Option<Task>, DomainError>;

    /// Lists the owner's tasks, newest first by creation time.
    async fn list_all(&self, filter: TaskFilter) -> Result<Vec<Task>, DomainError>;

    /// Patches only the supplied fields and refreshes `updated_at`.
    async fn update(
        &self,
        id: i64,
        user_id: i64,
        params: UpdateTaskParams,
    ) -> Result<(), DomainError>;

    async fn delete_by_id(&self, id: i64, user_id: i64) -> Result<(), DomainError>;
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
    /// Already hashed by the caller; repositories never see a plaintext
    /// password.
    pub password: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, params: CreateUserParams) -> Result<UserProfile, DomainError>;

    async fn load_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    async fn load_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    async fn email_exists(&self, email: &str) -> Result<bool, DomainError>;
}
