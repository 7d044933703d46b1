//! # parkgate-service
//!
//! The admission core of Parkgate: wall-code resolution and the
//! entry/exit decision procedure that opens and closes parking sessions.

pub mod admission;

pub use admission::outcome::{DenialReason, Outcome};
pub use admission::service::AdmissionService;
pub use admission::store::{AdmissionStore, PgAdmissionStore};
