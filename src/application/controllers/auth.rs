//! Registration and login endpoints.

use async_trait::async_trait;

use crate::application::controller::Controller;
use crate::application::http::{
    bad_request, created, ok, unauthorized, ErrorDescriptor, Request, Response,
};
use crate::application::validation::Validator;
use crate::domain::error::DomainError;
use crate::domain::use_cases::{LoginInput, LoginUser, RegisterInput, RegisterUser};

pub struct RegisterController {
    register_user: RegisterUser,
}

impl RegisterController {
    pub fn new(register_user: RegisterUser) -> Self {
        Self { register_user }
    }
}

#[async_trait]
impl Controller for RegisterController {
    fn build_validators(&self, request: &Request) -> Vec<Validator> {
        vec![
            Validator::required_string(request.get("email"), "email"),
            Validator::required_string(request.get("name"), "name"),
            Validator::required_string(request.get("password"), "password"),
            Validator::forbidden(request.get("id"), "id"),
        ]
    }

    async fn perform(&self, request: Request) -> Result<Response, DomainError> {
        let input = RegisterInput {
            email: request.get_str("email").unwrap_or_default().to_owned(),
            name: request.get_str("name").unwrap_or_default().to_owned(),
            password: request.get_str("password").unwrap_or_default().to_owned(),
        };

        match self.register_user.register(input).await {
            Ok(profile) => Ok(created(profile)),
            Err(DomainError::EmailInUse) => Ok(bad_request(ErrorDescriptor::email_in_use())),
            Err(error) => Err(error),
        }
    }
}

pub struct LoginController {
    login_user: LoginUser,
}

impl LoginController {
    pub fn new(login_user: LoginUser) -> Self {
        Self { login_user }
    }
}

#[async_trait]
impl Controller for LoginController {
    fn build_validators(&self, request: &Request) -> Vec<Validator> {
        vec![
            Validator::required_string(request.get("email"), "email"),
            Validator::required_string(request.get("password"), "password"),
        ]
    }

    async fn perform(&self, request: Request) -> Result<Response, DomainError> {
        let input = LoginInput {
            email: request.get_str("email").unwrap_or_default().to_owned(),
            password: request.get_str("password").unwrap_or_default().to_owned(),
        };

        match self.login_user.login(input).await {
            Ok(output) => Ok(ok(output)),
            Err(DomainError::Authentication) => Ok(unauthorized()),
            Err(error) => Err(error),
        }
    }
}
