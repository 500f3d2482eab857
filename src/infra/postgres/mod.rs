//! Postgres repository implementations.
//!
//! Each repository owns a clone of an explicitly constructed
//! [`sqlx::PgPool`], injected through its constructor. The pool is opened at
//! process start; acquisition per query and release are handled by sqlx.

pub mod tasks;
pub mod users;

pub use tasks::PgTaskRepository;
pub use users::PgUserRepository;
