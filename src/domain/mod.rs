pub mod entities;
pub mod error;
pub mod gateways;
pub mod repos;
pub mod use_cases;
