pub mod bcrypt;
pub mod jwt;
pub mod postgres;

pub use bcrypt::BcryptAdapter;
pub use jwt::JwtAdapter;
pub use postgres::{PgTaskRepository, PgUserRepository};
