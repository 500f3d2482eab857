//! In-memory collaborator doubles for exercising the pipeline without a
//! database or real crypto.

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use taskline::domain::entities::{Task, TaskStatus, User, UserProfile};
use taskline::domain::error::DomainError;
use taskline::domain::gateways::{HashComparer, HashGenerator, TokenGenerator, TokenValidator};
use taskline::domain::repos::{
    CreateTaskParams, CreateUserParams, TaskFilter, TaskRepository, UpdateTaskParams,
    UserRepository,
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, params: CreateUserParams) -> Result<UserProfile, DomainError> {
        let mut users = self.users.lock().unwrap();
        let now = Utc::now();
        let user = User {
            id: users.len() as i64 + 1,
            email: params.email,
            name: params.name,
            password: params.password,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(UserProfile::from(user))
    }

    async fn load_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn load_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|user| user.email == email))
    }
}

struct StoredTask {
    task: Task,
    user_id: i64,
}

#[derive(Default)]
pub struct InMemoryTaskRepository {
    rows: Mutex<Vec<StoredTask>>,
    next_id: AtomicI64,
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, params: CreateTaskParams) -> Result<Task, DomainError> {
        let now = Utc::now();
        let task = Task {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            title: params.title,
            description: params.description,
            status: TaskStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(StoredTask {
            task: task.clone(),
            user_id: params.user_id,
        });
        Ok(task)
    }

    async fn load_by_id(&self, id: i64, user_id: i64) -> Result<Option<Task>, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.task.id == id && row.user_id == user_id)
            .map(|row| row.task.clone()))
    }

    async fn list_all(&self, filter: TaskFilter) -> Result<Vec<Task>, DomainError> {
        let rows = self.rows.lock().unwrap();
        let mut tasks: Vec<Task> = rows
            .iter()
            .filter(|row| row.user_id == filter.user_id)
            .filter(|row| filter.status.map_or(true, |status| row.task.status == status))
            .filter(|row| {
                filter.search.as_deref().map_or(true, |term| {
                    let term = term.to_lowercase();
                    row.task.title.to_lowercase().contains(&term)
                        || row.task.description.to_lowercase().contains(&term)
                })
            })
            .map(|row| row.task.clone())
            .collect();
        tasks.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(tasks)
    }

    async fn update(
        &self,
        id: i64,
        user_id: i64,
        params: UpdateTaskParams,
    ) -> Result<(), DomainError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows
            .iter_mut()
            .find(|row| row.task.id == id && row.user_id == user_id)
        {
            if let Some(title) = params.title {
                row.task.title = title;
            }
            if let Some(description) = params.description {
                row.task.description = description;
            }
            if let Some(status) = params.status {
                row.task.status = status;
            }
            row.task.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64, user_id: i64) -> Result<(), DomainError> {
        self.rows
            .lock()
            .unwrap()
            .retain(|row| !(row.task.id == id && row.user_id == user_id));
        Ok(())
    }
}

/// Reversible stand-in for bcrypt: hashing prefixes the plaintext so
/// comparison is a string check.
pub struct FakeHasher;

#[async_trait]
impl HashGenerator for FakeHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        Ok(format!("hashed:{plaintext}"))
    }
}

#[async_trait]
impl HashComparer for FakeHasher {
    async fn compare(&self, plaintext: &str, hash: &str) -> Result<bool, DomainError> {
        Ok(hash == format!("hashed:{plaintext}"))
    }
}

/// Stand-in token gateway: tokens are `token-<subject>` and validation
/// counts how often it is consulted.
#[derive(Default)]
pub struct FakeTokens {
    validate_calls: AtomicUsize,
}

impl FakeTokens {
    pub fn validate_calls(&self) -> usize {
        self.validate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenGenerator for FakeTokens {
    async fn generate(&self, key: &str, _expiration_in_ms: i64) -> Result<String, DomainError> {
        Ok(format!("token-{key}"))
    }
}

#[async_trait]
impl TokenValidator for FakeTokens {
    async fn validate(&self, token: &str) -> Result<String, DomainError> {
        self.validate_calls.fetch_add(1, Ordering::SeqCst);
        token
            .strip_prefix("token-")
            .map(str::to_owned)
            .ok_or(DomainError::Authentication)
    }
}

pub fn in_memory_users() -> Arc<InMemoryUserRepository> {
    Arc::new(InMemoryUserRepository::default())
}

pub fn in_memory_tasks() -> Arc<InMemoryTaskRepository> {
    Arc::new(InMemoryTaskRepository::default())
}
