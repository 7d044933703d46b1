//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parkgate_service::Outcome;
use parkgate_service::admission::outcome::{EntryReceipt, ExitReceipt};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Flat scan response consumed by the gate-side scanning app.
///
/// Always served with HTTP 200; `status` and `r#type` carry the decision.
/// Field presence varies by outcome and absent fields are omitted rather
/// than sent as null, except `block`, which is null for campus-wide spots
/// on successful scans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResponse {
    /// `success` or `error`.
    pub status: String,
    /// `ENTRY`, `EXIT`, or `DENIED`.
    #[serde(rename = "type")]
    pub outcome_type: String,
    /// Denial reason, or a short confirmation line.
    pub message: String,
    /// Driver display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Assigned or vacated spot number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_number: Option<String>,
    /// Campus display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campus: Option<String>,
    /// Block display name; null for campus-wide spots.
    #[serde(skip_serializing_if = "ScanResponse::skip_block")]
    pub block: Option<Option<String>>,
    /// Session entry timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_time: Option<DateTime<Utc>>,
    /// Parked duration, `H:MM:SS`; EXIT only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Printed permit number; ENTRY only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parking_number: Option<String>,
}

impl ScanResponse {
    fn skip_block(block: &Option<Option<String>>) -> bool {
        block.is_none()
    }

    fn denied(reason_message: &str) -> Self {
        Self {
            status: "error".to_string(),
            outcome_type: "DENIED".to_string(),
            message: reason_message.to_string(),
            user_name: None,
            spot_number: None,
            campus: None,
            block: None,
            entry_time: None,
            duration: None,
            parking_number: None,
        }
    }

    fn entry(receipt: EntryReceipt) -> Self {
        Self {
            status: "success".to_string(),
            outcome_type: "ENTRY".to_string(),
            message: format!("Welcome, spot {} assigned", receipt.spot_number),
            user_name: Some(receipt.user_name),
            spot_number: Some(receipt.spot_number),
            campus: Some(receipt.campus),
            block: Some(receipt.block),
            entry_time: Some(receipt.entered_at),
            duration: None,
            parking_number: receipt.parking_number,
        }
    }

    fn exit(receipt: ExitReceipt) -> Self {
        let duration = receipt.duration();
        Self {
            status: "success".to_string(),
            outcome_type: "EXIT".to_string(),
            message: format!("Goodbye, parked for {duration}"),
            user_name: Some(receipt.user_name),
            spot_number: Some(receipt.spot_number),
            campus: Some(receipt.campus),
            block: Some(receipt.block),
            entry_time: Some(receipt.entered_at),
            duration: Some(duration),
            parking_number: None,
        }
    }
}

impl From<Outcome> for ScanResponse {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Entry(receipt) => Self::entry(receipt),
            Outcome::Exit(receipt) => Self::exit(receipt),
            Outcome::Denied(reason) => Self::denied(reason.message()),
        }
    }
}

/// Free/total spot counts for one campus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// Campus identifier.
    pub campus_id: i64,
    /// Campus display name.
    pub campus: String,
    /// Assignable (non-reserved) spots.
    pub total: i64,
    /// Spots without an open session.
    pub free: i64,
    /// Spots currently backing an open session.
    pub occupied: i64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
}
