//! Task CRUD endpoints, all scoped to the authenticated user.

use async_trait::async_trait;

use crate::application::controller::Controller;
use crate::application::controllers::authenticated_user_id;
use crate::application::http::{
    created, no_content, not_found, ok, ErrorDescriptor, Request, Response,
};
use crate::application::validation::Validator;
use crate::domain::entities::TaskStatus;
use crate::domain::error::DomainError;
use crate::domain::use_cases::{
    CreateTask, CreateTaskInput, DeleteTask, ListTasks, ListTasksInput, LoadTaskById, UpdateTask,
    UpdateTaskInput,
};

pub struct CreateTaskController {
    create_task: CreateTask,
}

impl CreateTaskController {
    pub fn new(create_task: CreateTask) -> Self {
        Self { create_task }
    }
}

#[async_trait]
impl Controller for CreateTaskController {
    fn build_validators(&self, request: &Request) -> Vec<Validator> {
        // id, status, and the timestamps are server-assigned.
        vec![
            Validator::required_string(request.get("title"), "title"),
            Validator::required_string(request.get("description"), "description"),
            Validator::forbidden(request.get("id"), "id"),
            Validator::forbidden(request.get("status"), "status"),
            Validator::forbidden(request.get("created_at"), "created_at"),
            Validator::forbidden(request.get("updated_at"), "updated_at"),
        ]
    }

    async fn perform(&self, request: Request) -> Result<Response, DomainError> {
        let task = self
            .create_task
            .create(CreateTaskInput {
                title: request.get_str("title").unwrap_or_default().to_owned(),
                description: request.get_str("description").unwrap_or_default().to_owned(),
                user_id: authenticated_user_id(&request)?,
            })
            .await?;

        Ok(created(task))
    }
}

pub struct LoadTaskByIdController {
    load_task: LoadTaskById,
}

impl LoadTaskByIdController {
    pub fn new(load_task: LoadTaskById) -> Self {
        Self { load_task }
    }
}

#[async_trait]
impl Controller for LoadTaskByIdController {
    fn build_validators(&self, request: &Request) -> Vec<Validator> {
        vec![Validator::required_number(request.get("id"), "id")]
    }

    async fn perform(&self, request: Request) -> Result<Response, DomainError> {
        let id = request.get_i64("id").unwrap_or_default();
        let user_id = authenticated_user_id(&request)?;

        match self.load_task.load(id, user_id).await {
            Ok(task) => Ok(ok(task)),
            Err(DomainError::TaskNotFound) => Ok(not_found(ErrorDescriptor::not_found())),
            Err(error) => Err(error),
        }
    }
}

pub struct ListTasksController {
    list_tasks: ListTasks,
}

impl ListTasksController {
    pub fn new(list_tasks: ListTasks) -> Self {
        Self { list_tasks }
    }
}

#[async_trait]
impl Controller for ListTasksController {
    fn build_validators(&self, request: &Request) -> Vec<Validator> {
        vec![Validator::allowed_values(
            request.get("status"),
            TaskStatus::ALLOWED,
            "status",
        )]
    }

    async fn perform(&self, request: Request) -> Result<Response, DomainError> {
        let tasks = self
            .list_tasks
            .list(ListTasksInput {
                user_id: authenticated_user_id(&request)?,
                status: request.get_str("status").and_then(TaskStatus::parse),
                search: request.get_str("search").map(str::to_owned),
            })
            .await?;

        Ok(ok(tasks))
    }
}

pub struct UpdateTaskController {
    update_task: UpdateTask,
}

impl UpdateTaskController {
    pub fn new(update_task: UpdateTask) -> Self {
        Self { update_task }
    }
}

#[async_trait]
impl Controller for UpdateTaskController {
    fn build_validators(&self, request: &Request) -> Vec<Validator> {
        vec![
            Validator::required_number(request.get("id"), "id"),
            Validator::allowed_values(request.get("status"), TaskStatus::ALLOWED, "status"),
        ]
    }

    async fn perform(&self, request: Request) -> Result<Response, DomainError> {
        let input = UpdateTaskInput {
            id: request.get_i64("id").unwrap_or_default(),
            user_id: authenticated_user_id(&request)?,
            title: request.get_str("title").map(str::to_owned),
            description: request.get_str("description").map(str::to_owned),
            status: request.get_str("status").and_then(TaskStatus::parse),
        };

        match self.update_task.update(input).await {
            Ok(()) => Ok(no_content()),
            Err(DomainError::TaskNotFound) => Ok(not_found(ErrorDescriptor::not_found())),
            Err(error) => Err(error),
        }
    }
}

pub struct DeleteTaskController {
    delete_task: DeleteTask,
}

impl DeleteTaskController {
    pub fn new(delete_task: DeleteTask) -> Self {
        Self { delete_task }
    }
}

#[async_trait]
impl Controller for DeleteTaskController {
    fn build_validators(&self, request: &Request) -> Vec<Validator> {
        vec![Validator::required_number(request.get("id"), "id")]
    }

    async fn perform(&self, request: Request) -> Result<Response, DomainError> {
        let id = request.get_i64("id").unwrap_or_default();
        let user_id = authenticated_user_id(&request)?;

        match self.delete_task.delete(id, user_id).await {
            Ok(()) => Ok(no_content()),
            Err(DomainError::TaskNotFound) => Ok(not_found(ErrorDescriptor::not_found())),
            Err(error) => Err(error),
        }
    }
}
