//! The `taskline` library crate.
//!
//! The crate is organized in three layers. `application` holds the
//! transport-agnostic request pipeline: the validation engine, the generic
//! controller driver, the concrete endpoint controllers, and the
//! authentication gate. `domain` holds the entities, the use cases, and the
//! capability contracts (repositories, hashing, tokens) the use cases
//! consume. `infra` provides the bcrypt, JWT, and Postgres implementations
//! of those contracts. The `routes` module adapts the pipeline to actix-web;
//! it is the only place that knows about HTTP framework types.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod routes;
