use std::sync::Arc;

use crate::domain::entities::{Task, TaskStatus};
use crate::domain::error::DomainError;
use crate::domain::repos::{TaskFilter, TaskRepository};

#[derive(Debug, Clone)]
pub struct ListTasksInput {
    pub user_id: i64,
    pub status: Option<TaskStatus>,
    pub search: Option<String>,
}

pub struct ListTasks {
    tasks: Arc<dyn TaskRepository>,
}

impl ListTasks {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    /// Lists the caller's tasks, newest first. The status and search filters
    /// are conjunctive and purely additive.
    pub async fn list(&self, input: ListTasksInput) -> Result<Vec<Task>, DomainError> {
        self.tasks
            .list_all(TaskFilter {
                user_id: input.user_id,
                status: input.status,
                search: input.search,
            })
            .await
    }
}
