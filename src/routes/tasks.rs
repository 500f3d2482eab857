//! Task endpoints. All of them sit behind the authentication guard; the
//! resolved identity is inserted into the pipeline request after the client
//! payload, so clients cannot supply their own `user_id`.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use serde_json::Value;

use crate::application::controller::handle;
use crate::application::http::Request;
use crate::routes::extractors::AuthenticatedUserId;
use crate::routes::{to_http, AppState};

#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    status: Option<String>,
    search: Option<String>,
}

/// Lists the authenticated user's tasks, newest first. Supports optional
/// `status` and `search` filters; both are conjunctive.
#[get("")]
pub async fn list_tasks(
    state: web::Data<AppState>,
    query: web::Query<ListTasksQuery>,
    user: AuthenticatedUserId,
) -> HttpResponse {
    let query = query.into_inner();
    let mut request = Request::new();
    if let Some(status) = query.status {
        request.set("status", status);
    }
    if let Some(search) = query.search {
        request.set("search", search);
    }
    request.set("user_id", user.0);

    to_http(handle(&state.list_tasks, request).await)
}

/// Creates a task owned by the authenticated user.
#[post("")]
pub async fn create_task(
    state: web::Data<AppState>,
    body: web::Json<Value>,
    user: AuthenticatedUserId,
) -> HttpResponse {
    let mut request = Request::from_value(body.into_inner());
    request.set("user_id", user.0);

    to_http(handle(&state.create_task, request).await)
}

/// Loads one of the authenticated user's tasks by id.
#[get("/{id}")]
pub async fn get_task(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    user: AuthenticatedUserId,
) -> HttpResponse {
    let mut request = Request::new();
    request.set("id", path.into_inner());
    request.set("user_id", user.0);

    to_http(handle(&state.load_task, request).await)
}

/// Updates one of the authenticated user's tasks. Only the supplied fields
/// are touched.
#[put("/{id}")]
pub async fn update_task(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<Value>,
    user: AuthenticatedUserId,
) -> HttpResponse {
    let mut request = Request::from_value(body.into_inner());
    // Path and identity win over anything in the body.
    request.set("id", path.into_inner());
    request.set("user_id", user.0);

    to_http(handle(&state.update_task, request).await)
}

/// Deletes one of the authenticated user's tasks.
#[delete("/{id}")]
pub async fn delete_task(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    user: AuthenticatedUserId,
) -> HttpResponse {
    let mut request = Request::new();
    request.set("id", path.into_inner());
    request.set("user_id", user.0);

    to_http(handle(&state.delete_task, request).await)
}
