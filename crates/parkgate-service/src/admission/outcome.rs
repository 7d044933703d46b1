//! Terminal admission outcomes and denial reasons.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Why an admission request was denied.
///
/// The associated message is surfaced verbatim to the scanning front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// The scanned string matched no known campus scope.
    InvalidCode,
    /// Email not found, or the account's role may not park.
    UnknownUser,
    /// The user's home campus conflicts with the scanned scope and
    /// cross-campus parking is disabled.
    CampusRestricted,
    /// The eligible-spot query came back empty.
    NoAvailableSpot,
    /// A storage failure aborted the decision; nothing was written.
    SystemError,
}

impl DenialReason {
    /// Human-readable denial message shown to the driver.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidCode => "invalid code",
            Self::UnknownUser => "user not found/not authorized",
            Self::CampusRestricted => "campus restricted",
            Self::NoAvailableSpot => "no available spots",
            Self::SystemError => "system error",
        }
    }
}

/// Details reported back after a successful ENTRY.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryReceipt {
    /// The driver's display name.
    pub user_name: String,
    /// The assigned spot number.
    pub spot_number: String,
    /// Campus display name.
    pub campus: String,
    /// Block display name, if the spot sits in a block.
    pub block: Option<String>,
    /// When the session was opened.
    pub entered_at: DateTime<Utc>,
    /// The driver's printed permit number (display only).
    pub parking_number: Option<String>,
}

/// Details reported back after a successful EXIT.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitReceipt {
    /// The driver's display name.
    pub user_name: String,
    /// The spot that was occupied.
    pub spot_number: String,
    /// Campus display name.
    pub campus: String,
    /// Block display name, if the spot sits in a block.
    pub block: Option<String>,
    /// When the session was opened.
    pub entered_at: DateTime<Utc>,
    /// When the session was closed.
    pub exited_at: DateTime<Utc>,
}

impl ExitReceipt {
    /// Elapsed parked time, formatted for display.
    pub fn duration(&self) -> String {
        format_duration(self.exited_at - self.entered_at)
    }
}

/// The terminal result of one admission request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// A new session was opened.
    Entry(EntryReceipt),
    /// The caller's open session was closed.
    Exit(ExitReceipt),
    /// The request was refused; no session was touched.
    Denied(DenialReason),
}

/// Format a duration as `H:MM:SS`.
fn format_duration(elapsed: Duration) -> String {
    let total_seconds = elapsed.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}
