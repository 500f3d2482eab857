//! actix-web adapter layer.
//!
//! Handlers assemble the pipeline's untyped [`Request`] from body, path, and
//! query, drive the matching controller, and map the resulting envelope onto
//! the wire. Nothing below this module knows about framework types.

pub mod auth;
pub mod extractors;
pub mod guard;
pub mod health;
pub mod tasks;

use std::fmt;
use std::sync::Arc;

use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::json;
use sqlx::PgPool;

use crate::application::controllers::{
    CreateTaskController, DeleteTaskController, HealthzController, ListTasksController,
    LoadTaskByIdController, LoginController, RegisterController, UpdateTaskController,
};
use crate::application::http::{Response, ResponseData};
use crate::application::middleware::AuthenticationMiddleware;
use crate::config::Config;
use crate::domain::gateways::{HashComparer, HashGenerator, TokenGenerator, TokenValidator};
use crate::domain::repos::{TaskRepository, UserRepository};
use crate::domain::use_cases::{
    Authorize, CreateTask, DeleteTask, ListTasks, LoadTaskById, LoginUser, RegisterUser,
    UpdateTask,
};
use crate::infra::{BcryptAdapter, JwtAdapter, PgTaskRepository, PgUserRepository};

/// One controller per endpoint plus the authentication gate, wired once at
/// startup and shared across workers.
pub struct AppState {
    pub healthz: HealthzController,
    pub register: RegisterController,
    pub login: LoginController,
    pub create_task: CreateTaskController,
    pub load_task: LoadTaskByIdController,
    pub list_tasks: ListTasksController,
    pub update_task: UpdateTaskController,
    pub delete_task: DeleteTaskController,
    pub gate: Arc<AuthenticationMiddleware>,
}

impl AppState {
    /// Wires the pipeline against arbitrary collaborator implementations.
    /// Tests inject in-memory doubles here.
    pub fn new(
        users: Arc<dyn UserRepository>,
        tasks: Arc<dyn TaskRepository>,
        hasher: Arc<dyn HashGenerator>,
        comparer: Arc<dyn HashComparer>,
        token_generator: Arc<dyn TokenGenerator>,
        token_validator: Arc<dyn TokenValidator>,
    ) -> Self {
        Self {
            healthz: HealthzController,
            register: RegisterController::new(RegisterUser::new(Arc::clone(&users), hasher)),
            login: LoginController::new(LoginUser::new(users, comparer, token_generator)),
            create_task: CreateTaskController::new(CreateTask::new(Arc::clone(&tasks))),
            load_task: LoadTaskByIdController::new(LoadTaskById::new(Arc::clone(&tasks))),
            list_tasks: ListTasksController::new(ListTasks::new(Arc::clone(&tasks))),
            update_task: UpdateTaskController::new(UpdateTask::new(Arc::clone(&tasks))),
            delete_task: DeleteTaskController::new(DeleteTask::new(tasks)),
            gate: Arc::new(AuthenticationMiddleware::new(Authorize::new(
                token_validator,
            ))),
        }
    }

    /// Production wiring: Postgres repositories, bcrypt hashing, and JWT
    /// tokens signed with the configured secret.
    pub fn postgres(pool: PgPool, config: &Config) -> Self {
        let bcrypt = Arc::new(BcryptAdapter::default());
        let jwt = Arc::new(JwtAdapter::new(config.jwt_secret.clone()));
        let users = Arc::new(PgUserRepository::new(pool.clone()));
        let tasks = Arc::new(PgTaskRepository::new(pool));

        Self::new(
            users,
            tasks,
            Arc::clone(&bcrypt) as Arc<dyn HashGenerator>,
            bcrypt,
            Arc::clone(&jwt) as Arc<dyn TokenGenerator>,
            jwt,
        )
    }
}

/// Maps a pipeline envelope onto the wire: the status code becomes the HTTP
/// status, payloads are serialized as-is, and error descriptors become
/// `{"error": message}` bodies.
pub fn to_http(response: Response) -> HttpResponse {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    match response.data {
        ResponseData::Payload(value) => HttpResponse::build(status).json(value),
        ResponseData::Error(error) => {
            HttpResponse::build(status).json(json!({ "error": error.message }))
        }
        ResponseData::Empty => HttpResponse::build(status).finish(),
    }
}

/// Wraps a rejection envelope so the gate and extractors can surface it
/// through actix's error path.
#[derive(Debug)]
pub struct Rejection(pub Response);

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.0.data {
            ResponseData::Error(error) => write!(f, "{}", error.message),
            _ => write!(f, "request rejected with status {}", self.0.status_code),
        }
    }
}

impl ResponseError for Rejection {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        to_http(self.0.clone())
    }
}
