//! # parkgate-api
//!
//! HTTP API layer for Parkgate built on Axum.
//!
//! Provides the scan endpoint, the open-session and availability views,
//! health checks, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
