use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use crate::application::controller::Controller;
use crate::application::http::{ok, Request, Response};
use crate::domain::error::DomainError;

/// Health check endpoint. Goes through the same pipeline as every other
/// endpoint, with an empty validator list.
pub struct HealthzController;

#[async_trait]
impl Controller for HealthzController {
    async fn perform(&self, _request: Request) -> Result<Response, DomainError> {
        Ok(ok(json!({
            "status": "ok",
            "timestamp": Utc::now(),
        })))
    }
}
