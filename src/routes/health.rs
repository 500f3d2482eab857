use actix_web::{get, web, HttpResponse};

use crate::application::controller::handle;
use crate::application::http::Request;
use crate::routes::{to_http, AppState};

/// Health check endpoint.
#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    to_http(handle(&state.healthz, Request::new()).await)
}
