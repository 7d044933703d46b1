//! The admission decision procedure.

use std::sync::Arc;

use chrono::Utc;

use parkgate_core::config::parking::ParkingConfig;
use parkgate_core::result::AppResult;

use super::outcome::{DenialReason, EntryReceipt, ExitReceipt, Outcome};
use super::resolver::CodeResolver;
use super::store::AdmissionStore;

/// Decides ENTRY, EXIT, or DENIED for each QR scan.
///
/// The direction of a scan is derived from stored state alone: a user with
/// an open session exits, anyone else enters. The service never returns an
/// error to its caller; storage failures collapse into a
/// [`DenialReason::SystemError`] denial after being logged.
#[derive(Clone)]
pub struct AdmissionService {
    store: Arc<dyn AdmissionStore>,
    resolver: CodeResolver,
    policy: ParkingConfig,
}

impl AdmissionService {
    /// Create a new admission service.
    pub fn new(store: Arc<dyn AdmissionStore>, policy: ParkingConfig) -> Self {
        let resolver = CodeResolver::new(store.clone(), policy.campus_code_length);
        Self {
            store,
            resolver,
            policy,
        }
    }

    /// Process one scan. Infallible at this boundary.
    pub async fn admit(&self, code: &str, email: &str) -> Outcome {
        match self.decide(code, email).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(error = %err, code, "Admission aborted by storage failure");
                Outcome::Denied(DenialReason::SystemError)
            }
        }
    }

    async fn decide(&self, code: &str, email: &str) -> AppResult<Outcome> {
        let Some(scope) = self.resolver.resolve(code).await? else {
            tracing::info!(code, "Scan denied: unresolvable code");
            return Ok(Outcome::Denied(DenialReason::InvalidCode));
        };

        let Some(user) = self.store.find_parker_by_email(email).await? else {
            tracing::info!(code, "Scan denied: unknown or unauthorized user");
            return Ok(Outcome::Denied(DenialReason::UnknownUser));
        };

        // An open session means this scan is an exit, whichever wall the
        // driver happens to scan on the way out.
        if let Some(open) = self.store.find_open_session(user.id).await? {
            let closed = self.store.close_open_session(user.id).await?;
            let exited_at = closed
                .and_then(|s| s.exited_at)
                .unwrap_or_else(Utc::now);

            tracing::info!(
                user_id = user.id,
                session_id = open.id,
                spot_number = %open.spot_number,
                "Session closed"
            );
            return Ok(Outcome::Exit(ExitReceipt {
                user_name: open.user_name,
                spot_number: open.spot_number,
                campus: open.campus_name,
                block: open.block_name,
                entered_at: open.entered_at,
                exited_at,
            }));
        }

        if !user.may_park_at(scope.campus_id, self.policy.allow_cross_campus) {
            tracing::info!(
                user_id = user.id,
                campus_id = scope.campus_id,
                "Scan denied: campus affinity"
            );
            return Ok(Outcome::Denied(DenialReason::CampusRestricted));
        }

        let Some(opened) = self.store.open_session_at_free_spot(user.id, scope).await? else {
            tracing::info!(
                user_id = user.id,
                campus_id = scope.campus_id,
                block_id = ?scope.block_id,
                "Scan denied: no free spot in scope"
            );
            return Ok(Outcome::Denied(DenialReason::NoAvailableSpot));
        };

        tracing::info!(
            user_id = user.id,
            session_id = opened.id,
            spot_number = %opened.spot_number,
            "Session opened"
        );
        Ok(Outcome::Entry(EntryReceipt {
            user_name: opened.user_name,
            spot_number: opened.spot_number,
            campus: opened.campus_name,
            block: opened.block_name,
            entered_at: opened.entered_at,
            parking_number: user.parking_number,
        }))
    }
}
