pub mod controller;
pub mod controllers;
pub mod http;
pub mod middleware;
pub mod validation;

pub use controller::{handle, Controller};
pub use http::{ErrorDescriptor, ErrorKind, Request, Response, ResponseData};
pub use middleware::{AuthenticationMiddleware, Middleware};
pub use validation::{ValidationComposite, Validator};
