//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod property_repo;


pub use property_repo::PostgresPropertyRepository;
