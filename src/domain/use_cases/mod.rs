//! Transport-agnostic business operations.
//!
//! Each use case is a single-purpose operation over repository and gateway
//! capabilities, constructed with its collaborators and invoked with a typed
//! input. Failures come back as [`DomainError`](crate::domain::error::DomainError)
//! kinds, never as transport concepts.

mod authorize;
mod create_task;
mod delete_task;
mod list_tasks;
mod load_task_by_id;
mod login_user;
mod register_user;
mod update_task;

pub use authorize::Authorize;
pub use create_task::{CreateTask, CreateTaskInput};
pub use delete_task::DeleteTask;
pub use list_tasks::{ListTasks, ListTasksInput};
pub use load_task_by_id::LoadTaskById;
pub use login_user::{AuthenticatedUser, LoginInput, LoginOutput, LoginUser};
pub use register_user::{RegisterInput, RegisterUser};
pub use update_task::{UpdateTask, UpdateTaskInput};
