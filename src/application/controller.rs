//! The generic controller lifecycle.
//!
//! A controller is a value implementing a two-method capability set:
//! `build_validators` declares the field-level constraints of the endpoint
//! and `perform` runs exactly one use case, translating the failure kinds it
//! recognizes into specific envelopes. The fixed
//! validate -> perform -> catch sequence is implemented once by [`handle`];
//! there is no dispatch chain to override.

use async_trait::async_trait;

use crate::application::http::{bad_request, server_error, Request, Response};
use crate::application::validation::{ValidationComposite, Validator};
use crate::domain::error::DomainError;

#[async_trait]
pub trait Controller: Send + Sync {
    /// Field-level constraints for this endpoint. The default is no
    /// validation at all.
    fn build_validators(&self, _request: &Request) -> Vec<Validator> {
        Vec::new()
    }

    /// Runs the endpoint's use case. Failure kinds the endpoint recognizes
    /// are mapped to specific envelopes here; anything else is returned as
    /// `Err` and becomes a generic 500 in [`handle`].
    async fn perform(&self, request: Request) -> Result<Response, DomainError>;
}

/// Drives a controller through the fixed lifecycle: run the composite over
/// the declared validators, reject with 400 before `perform` is ever
/// invoked, otherwise perform and catch unrecognized failures as a 500 that
/// exposes no internal detail.
pub async fn handle<C>(controller: &C, request: Request) -> Response
where
    C: Controller + ?Sized,
{
    let validators = controller.build_validators(&request);

    if let Some(error) = ValidationComposite::new(validators).validate() {
        return bad_request(error);
    }

    match controller.perform(request).await {
        Ok(response) => response,
        Err(error) => {
            log::error!("unhandled failure in controller: {error}");
            server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::http::{ok, ErrorKind, ResponseData};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct SpyController {
        performed: AtomicUsize,
        outcome: Result<(), DomainError>,
    }

    impl SpyController {
        fn succeeding() -> Self {
            Self {
                performed: AtomicUsize::new(0),
                outcome: Ok(()),
            }
        }

        fn failing(error: DomainError) -> Self {
            Self {
                performed: AtomicUsize::new(0),
                outcome: Err(error),
            }
        }

        fn calls(&self) -> usize {
            self.performed.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Controller for SpyController {
        fn build_validators(&self, request: &Request) -> Vec<Validator> {
            vec![
                Validator::required_string(request.get("title"), "title"),
                Validator::required_string(request.get("description"), "description"),
            ]
        }

        async fn perform(&self, _request: Request) -> Result<Response, DomainError> {
            self.performed.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Ok(()) => Ok(ok(json!({ "done": true }))),
                Err(error) => Err(DomainError::Unexpected(error.to_string())),
            }
        }
    }

    #[actix_rt::test]
    async fn test_validation_failure_never_invokes_perform() {
        let controller = SpyController::succeeding();
        let request = Request::from_value(json!({ "description": "something" }));

        let response = handle(&controller, request).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(controller.calls(), 0);
    }

    #[actix_rt::test]
    async fn test_first_failing_validator_wins() {
        let controller = SpyController::succeeding();
        let request = Request::from_value(json!({ "title": "", "description": "" }));

        let response = handle(&controller, request).await;

        match response.data {
            ResponseData::Error(error) => {
                assert_eq!(error.message, "The field title is required");
            }
            _ => panic!("expected an error descriptor"),
        }
    }

    #[actix_rt::test]
    async fn test_valid_request_reaches_perform() {
        let controller = SpyController::succeeding();
        let request = Request::from_value(json!({ "title": "a", "description": "b" }));

        let response = handle(&controller, request).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(controller.calls(), 1);
    }

    #[actix_rt::test]
    async fn test_unrecognized_failure_becomes_generic_500() {
        let controller =
            SpyController::failing(DomainError::Unexpected("connection refused".into()));
        let request = Request::from_value(json!({ "title": "a", "description": "b" }));

        let response = handle(&controller, request).await;

        assert_eq!(response.status_code, 500);
        match response.data {
            ResponseData::Error(error) => {
                assert_eq!(error.kind, ErrorKind::Server);
                // The internal detail must never leak to the caller.
                assert!(!error.message.contains("connection refused"));
            }
            _ => panic!("expected an error descriptor"),
        }
    }

    struct NoValidatorsController;

    #[async_trait]
    impl Controller for NoValidatorsController {
        async fn perform(&self, _request: Request) -> Result<Response, DomainError> {
            Ok(ok(json!({ "status": "ok" })))
        }
    }

    #[actix_rt::test]
    async fn test_default_validators_are_empty() {
        let response = handle(&NoValidatorsController, Request::new()).await;
        assert_eq!(response.status_code, 200);
    }
}
