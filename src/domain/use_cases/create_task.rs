use std::sync::Arc;

use crate::domain::entities::Task;
use crate::domain::error::DomainError;
use crate::domain::repos::{CreateTaskParams, TaskRepository};

#[derive(Debug, Clone)]
pub struct CreateTaskInput {
    pub title: String,
    pub description: String,
    pub user_id: i64,
}

pub struct CreateTask {
    tasks: Arc<dyn TaskRepository>,
}

impl CreateTask {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    pub async fn create(&self, input: CreateTaskInput) -> Result<Task, DomainError> {
        self.tasks
            .create(CreateTaskParams {
                title: input.title,
                description: input.description,
                user_id: input.user_id,
            })
            .await
    }
}
