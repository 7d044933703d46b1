//! # parkgate-entity
//!
//! Domain entity models for Parkgate. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod block;
pub mod campus;
pub mod session;
pub mod spot;
pub mod user;
pub mod wall_code;
