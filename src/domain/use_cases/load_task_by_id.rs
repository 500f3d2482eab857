use std::sync::Arc;

use crate::domain::entities::Task;
use crate::domain::error::DomainError;
use crate::domain::repos::TaskRepository;

pub struct LoadTaskById {
    tasks: Arc<dyn TaskRepository>,
}

impl LoadTaskById {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    /// Loads one of the caller's tasks. The dual predicate on id and owner
    /// means a task that exists but belongs to someone else is reported as
    /// [`DomainError::TaskNotFound`], same as a missing one.
    pub async fn load(&self, id: i64, user_id: i64) -> Result<Task, DomainError> {
        self.tasks
            .load_by_id(id, user_id)
            .await?
            .ok_or(DomainError::TaskNotFound)
    }
}
