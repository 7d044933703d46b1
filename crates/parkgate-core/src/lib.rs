//! # parkgate-core
//!
//! Core crate for Parkgate. Contains configuration schemas, shared types,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Parkgate crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
