//! Session admission: the decision procedure behind the QR scan endpoint.
//!
//! A scan carries a wall-code string and a claimed user email. Admission
//! resolves the code to a campus/block scope, determines whether the user
//! currently holds an open session, and either closes it (EXIT) or opens a
//! new one on a free spot (ENTRY), enforcing at-most-one-open-session-per-
//! user and the campus affinity policy. Every failure becomes a structured
//! denial; nothing escapes the controller boundary as an error.

pub mod outcome;
pub mod resolver;
pub mod service;
pub mod store;

#[cfg(test)]
pub(crate) mod memory;
