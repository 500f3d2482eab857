use std::sync::Arc;

use crate::domain::error::DomainError;
use crate::domain::repos::TaskRepository;

pub struct DeleteTask {
    tasks: Arc<dyn TaskRepository>,
}

impl DeleteTask {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    /// Deletes one of the caller's tasks. A second delete of the same id
    /// fails with [`DomainError::TaskNotFound`].
    pub async fn delete(&self, id: i64, user_id: i64) -> Result<(), DomainError> {
        self.tasks
            .load_by_id(id, user_id)
            .await?
            .ok_or(DomainError::TaskNotFound)?;

        self.tasks.delete_by_id(id, user_id).await
    }
}
