//! Shared types used across Parkgate crates.

pub mod pagination;
pub mod scope;

pub use pagination::{PageRequest, PageResponse};
pub use scope::Scope;
