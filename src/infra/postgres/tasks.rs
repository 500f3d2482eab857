use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::Task;
use crate::domain::error::DomainError;
use crate::domain::repos::{CreateTaskParams, TaskFilter, TaskRepository, UpdateTaskParams};

const TASK_COLUMNS: &str = "id, title, description, status, created_at, updated_at";

pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, params: CreateTaskParams) -> Result<Task, DomainError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "INSERT INTO tasks (title, description, user_id) VALUES ($1, $2, $3) \
             RETURNING {TASK_COLUMNS}"
        ))
        .bind(&params.title)
        .bind(&params.description)
        .bind(params.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    async fn load_by_id(&self, id: i64, user_id: i64) -> Result<Option<Task>, DomainError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    async fn list_all(&self, filter: TaskFilter) -> Result<Vec<Task>, DomainError> {
        // Base query scoped to the owner; filter conditions are appended in
        // the order their bind parameters are pushed below.
        let mut sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE user_id = $1");
        let mut param_count = 2;

        if filter.status.is_some() {
            sql.push_str(&format!(" AND status = ${param_count}"));
            param_count += 1;
        }
        if filter.search.is_some() {
            sql.push_str(&format!(
                " AND (title ILIKE ${param_count} OR description ILIKE ${})",
                param_count + 1
            ));
        }
        sql.push_str(" ORDER BY created_at DESC, id DESC");

        let mut query = sqlx::query_as::<_, Task>(&sql).bind(filter.user_id);

        if let Some(status) = filter.status {
            query = query.bind(status);
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{search}%");
            query = query.bind(pattern.clone());
            query = query.bind(pattern);
        }

        let tasks = query.fetch_all(&self.pool).await?;

        Ok(tasks)
    }

    async fn update(
        &self,
        id: i64,
        user_id: i64,
        params: UpdateTaskParams,
    ) -> Result<(), DomainError> {
        sqlx::query(
            "UPDATE tasks SET title = COALESCE($1, title), \
             description = COALESCE($2, description), \
             status = COALESCE($3, status), \
             updated_at = NOW() \
             WHERE id = $4 AND user_id = $5",
        )
        .bind(params.title)
        .bind(params.description)
        .bind(params.status)
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_by_id(&self, id: i64, user_id: i64) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
