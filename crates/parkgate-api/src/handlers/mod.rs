//! Route handlers organized by domain.

pub mod campus;
pub mod health;
pub mod scan;
pub mod session;
