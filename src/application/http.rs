//! The transport-neutral request and response shapes used by the pipeline.
//!
//! A [`Request`] is an untyped field-to-value mapping assembled by the
//! transport adapter from body, path, query, and headers. Controllers and the
//! authentication gate never see framework types; they consume a `Request`
//! and produce a [`Response`] envelope that the adapter serializes onto the
//! wire. The status code of the envelope fully determines whether `data`
//! carries a success payload or an [`ErrorDescriptor`].

use serde::Serialize;
use serde_json::{Map, Value};

/// Untyped key-value input for one request.
///
/// Values attached by the gate (the authenticated user id) live in the same
/// mapping as client-supplied fields; the adapter inserts them after the
/// client payload so they cannot be spoofed.
#[derive(Debug, Clone, Default)]
pub struct Request {
    fields: Map<String, Value>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a request from a JSON body. Non-object bodies yield an empty
    /// request; the validators will report the missing fields.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    pub fn set(&mut self, field: &str, value: impl Into<Value>) {
        self.fields.insert(field.to_owned(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_i64)
    }
}

/// Classifies a failure by kind rather than by message text, so callers can
/// pattern-match (a conflict is distinguishable from a plain field error).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RequiredField,
    Validation,
    Authentication,
    EmailInUse,
    NotFound,
    Forbidden,
    Server,
}

/// A typed failure created at the point it occurs and consumed once by the
/// response mapper. Never mutated in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDescriptor {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorDescriptor {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn required_field(field: Option<&str>) -> Self {
        let message = match field {
            Some(field) => format!("The field {field} is required"),
            None => "Field required".to_string(),
        };
        Self::new(ErrorKind::RequiredField, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn authentication() -> Self {
        Self::new(ErrorKind::Authentication, "Authentication failed")
    }

    pub fn email_in_use() -> Self {
        Self::new(ErrorKind::EmailInUse, "Email already in use")
    }

    pub fn not_found() -> Self {
        Self::new(ErrorKind::NotFound, "Task not found")
    }

    pub fn forbidden() -> Self {
        Self::new(ErrorKind::Forbidden, "Access forbidden")
    }

    pub fn server() -> Self {
        Self::new(ErrorKind::Server, "Server failed. Try again soon")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseData {
    Payload(Value),
    Error(ErrorDescriptor),
    Empty,
}

/// The uniform result shape returned by controllers and the gate.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status_code: u16,
    pub data: ResponseData,
}

fn payload(data: impl Serialize) -> ResponseData {
    ResponseData::Payload(serde_json::to_value(data).unwrap_or(Value::Null))
}

pub fn ok(data: impl Serialize) -> Response {
    Response {
        status_code: 200,
        data: payload(data),
    }
}

pub fn created(data: impl Serialize) -> Response {
    Response {
        status_code: 201,
        data: payload(data),
    }
}

pub fn no_content() -> Response {
    Response {
        status_code: 204,
        data: ResponseData::Empty,
    }
}

pub fn bad_request(error: ErrorDescriptor) -> Response {
    Response {
        status_code: 400,
        data: ResponseData::Error(error),
    }
}

pub fn unauthorized() -> Response {
    Response {
        status_code: 401,
        data: ResponseData::Error(ErrorDescriptor::authentication()),
    }
}

pub fn forbidden() -> Response {
    Response {
        status_code: 403,
        data: ResponseData::Error(ErrorDescriptor::forbidden()),
    }
}

pub fn not_found(error: ErrorDescriptor) -> Response {
    Response {
        status_code: 404,
        data: ResponseData::Error(error),
    }
}

pub fn server_error() -> Response {
    Response {
        status_code: 500,
        data: ResponseData::Error(ErrorDescriptor::server()),
    }
}
