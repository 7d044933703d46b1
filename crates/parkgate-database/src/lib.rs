//! # parkgate-database
//!
//! PostgreSQL connection management, embedded migrations, and repository
//! implementations for Parkgate. All queries are parameterized; no SQL is
//! ever built by string concatenation.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
