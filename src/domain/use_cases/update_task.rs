use std::sync::Arc;

use crate::domain::entities::TaskStatus;
use crate::domain::error::DomainError;
use crate::domain::repos::{TaskRepository, UpdateTaskParams};

#[derive(Debug, Clone)]
pub struct UpdateTaskInput {
    pub id: i64,
    pub user_id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

pub struct UpdateTask {
    tasks: Arc<dyn TaskRepository>,
}

impl UpdateTask {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    /// Patches one of the caller's tasks, touching only the supplied fields.
    pub async fn update(&self, input: UpdateTaskInput) -> Result<(), DomainError> {
        self.tasks
            .load_by_id(input.id, input.user_id)
            .await?
            .ok_or(DomainError::TaskNotFound)?;

        self.tasks
            .update(
                input.id,
                input.user_id,
                UpdateTaskParams {
                    title: input.title,
                    description: input.description,
                    status: input.status,
                },
            )
            .await
    }
}
