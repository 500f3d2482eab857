//! actix middleware adapter for the authentication gate.
//!
//! The gate itself is transport-agnostic; this wrapper feeds it the
//! `Authorization` header, and on admission inserts the resolved identity
//! into request extensions for [`AuthenticatedUserId`] to pick up.

use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use serde_json::Value;

use crate::application::http::{Request, Response, ResponseData};
use crate::application::middleware::{AuthenticationMiddleware, Middleware};
use crate::routes::extractors::AuthenticatedUserId;
use crate::routes::to_http;

pub struct AuthGuard {
    gate: Arc<AuthenticationMiddleware>,
}

impl AuthGuard {
    pub fn new(gate: Arc<AuthenticationMiddleware>) -> Self {
        Self { gate }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGuardService {
            service: Rc::new(service),
            gate: Arc::clone(&self.gate),
        }))
    }
}

pub struct AuthGuardService<S> {
    service: Rc<S>,
    gate: Arc<AuthenticationMiddleware>,
}

impl<S, B> Service<ServiceRequest> for AuthGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let gate = Arc::clone(&self.gate);

        Box::pin(async move {
            let mut request = Request::new();
            if let Some(header) = req
                .headers()
                .get("Authorization")
                .and_then(|value| value.to_str().ok())
            {
                request.set("authorization", header);
            }

            let response = gate.handle(&request).await;

            match admitted_user_id(&response) {
                Some(user_id) => {
                    req.extensions_mut().insert(AuthenticatedUserId(user_id));
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                None => Ok(req.into_response(to_http(response)).map_into_right_body()),
            }
        })
    }
}

fn admitted_user_id(response: &Response) -> Option<i64> {
    if response.status_code != 200 {
        return None;
    }
    match &response.data {
        ResponseData::Payload(value) => value.get("user_id").and_then(Value::as_i64),
        _ => None,
    }
}
