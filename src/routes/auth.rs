use actix_web::{post, web, HttpResponse};
use serde_json::Value;

use crate::application::controller::handle;
use crate::application::http::Request;
use crate::routes::{to_http, AppState};

/// Register a new user account.
#[post("/register")]
pub async fn register(state: web::Data<AppState>, body: web::Json<Value>) -> HttpResponse {
    let request = Request::from_value(body.into_inner());
    to_http(handle(&state.register, request).await)
}

/// Authenticate a user and issue an access token.
#[post("/login")]
pub async fn login(state: web::Data<AppState>, body: web::Json<Value>) -> HttpResponse {
    let request = Request::from_value(body.into_inner());
    to_http(handle(&state.login, request).await)
}
