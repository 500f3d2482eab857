pub mod auth;
pub mod healthz;
pub mod tasks;

pub use auth::{LoginController, RegisterController};
pub use healthz::HealthzController;
pub use tasks::{
    CreateTaskController, DeleteTaskController, ListTasksController, LoadTaskByIdController,
    UpdateTaskController,
};

use crate::application::http::Request;
use crate::domain::error::DomainError;

/// Reads the identity the gate attached to the request context. The gate
/// guarantees presence on protected routes, so a miss is a wiring bug and
/// surfaces as the driver's generic 500.
pub(crate) fn authenticated_user_id(request: &Request) -> Result<i64, DomainError> {
    request.get_i64("user_id").ok_or_else(|| {
        DomainError::Unexpected("authenticated user id missing from request context".into())
    })
}
