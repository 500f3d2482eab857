//! The pre-controller authentication gate.
//!
//! Structurally this is the same two-stage shape as the controller lifecycle
//! (validate, then resolve), specialized to identity resolution. A missing
//! or empty credential is rejected before the token capability is ever
//! consulted, and every token failure is collapsed into the same forbidden
//! response so no failure-reason detail crosses the boundary.

use async_trait::async_trait;
use serde_json::json;

use crate::application::http::{forbidden, ok, Request, Response};
use crate::application::validation::Validator;
use crate::domain::use_cases::Authorize;

/// A pre-dispatch check producing either a 200 envelope whose payload is
/// context for the downstream controller, or a rejection envelope.
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn handle(&self, request: &Request) -> Response;
}

pub struct AuthenticationMiddleware {
    authorize: Authorize,
}

impl AuthenticationMiddleware {
    pub fn new(authorize: Authorize) -> Self {
        Self { authorize }
    }
}

#[async_trait]
impl Middleware for AuthenticationMiddleware {
    async fn handle(&self, request: &Request) -> Response {
        let header = request.get("authorization");

        if Validator::required_string(header, "authorization")
            .validate()
            .is_some()
        {
            return forbidden();
        }

        let raw = request.get_str("authorization").unwrap_or_default();
        let token = raw.strip_prefix("Bearer ").unwrap_or(raw);

        match self.authorize.authorize(token).await {
            Ok(user_id) => ok(json!({ "user_id": user_id })),
            Err(_) => forbidden(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::http::ResponseData;
    use crate::domain::error::DomainError;
    use crate::domain::gateways::TokenValidator;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct SpyTokenValidator {
        calls: AtomicUsize,
        result: Result<String, ()>,
    }

    impl SpyTokenValidator {
        fn resolving(subject: &str) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                result: Ok(subject.to_owned()),
            })
        }

        fn rejecting() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                result: Err(()),
            })
        }
    }

    #[async_trait]
    impl TokenValidator for SpyTokenValidator {
        async fn validate(&self, _token: &str) -> Result<String, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result
                .clone()
                .map_err(|_| DomainError::Authentication)
        }
    }

    fn gate(validator: Arc<SpyTokenValidator>) -> AuthenticationMiddleware {
        AuthenticationMiddleware::new(Authorize::new(validator))
    }

    #[actix_rt::test]
    async fn test_missing_header_rejects_without_touching_token_capability() {
        let validator = SpyTokenValidator::resolving("1");
        let sut = gate(Arc::clone(&validator));

        let response = sut.handle(&Request::new()).await;

        assert_eq!(response.status_code, 403);
        assert_eq!(validator.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_rt::test]
    async fn test_empty_header_rejects_without_touching_token_capability() {
        let validator = SpyTokenValidator::resolving("1");
        let sut = gate(Arc::clone(&validator));

        let mut request = Request::new();
        request.set("authorization", "");
        let response = sut.handle(&request).await;

        assert_eq!(response.status_code, 403);
        assert_eq!(validator.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_rt::test]
    async fn test_invalid_token_rejects_uniformly() {
        let sut = gate(SpyTokenValidator::rejecting());

        let mut request = Request::new();
        request.set("authorization", "Bearer bad-token");
        let response = sut.handle(&request).await;

        assert_eq!(response, forbidden());
    }

    #[actix_rt::test]
    async fn test_valid_token_admits_with_identity() {
        let validator = SpyTokenValidator::resolving("42");
        let sut = gate(Arc::clone(&validator));

        let mut request = Request::new();
        request.set("authorization", "Bearer good-token");
        let response = sut.handle(&request).await;

        assert_eq!(response.status_code, 200);
        match response.data {
            ResponseData::Payload(value) => assert_eq!(value["user_id"], 42),
            _ => panic!("expected a payload"),
        }
        assert_eq!(validator.calls.load(Ordering::SeqCst), 1);
    }

    #[actix_rt::test]
    async fn test_scheme_prefix_is_optional() {
        let validator = SpyTokenValidator::resolving("7");
        let sut = gate(validator);

        let mut request = Request::new();
        request.set("authorization", "raw-token");
        let response = sut.handle(&request).await;

        assert_eq!(response.status_code, 200);
    }
}
