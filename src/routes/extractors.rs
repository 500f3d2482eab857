use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::application::http::forbidden;
use crate::routes::Rejection;

/// The identity the gate attached to the request.
///
/// Only routes behind [`AuthGuard`](crate::routes::guard::AuthGuard) can
/// extract this; if the guard did not run, extraction rejects the request
/// the same way the gate would.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUserId(pub i64);

impl FromRequest for AuthenticatedUserId {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUserId>().copied() {
            Some(user) => ready(Ok(user)),
            None => ready(Err(Rejection(forbidden()).into())),
        }
    }
}
