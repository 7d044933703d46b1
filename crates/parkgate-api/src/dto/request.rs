//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Scan request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScanRequest {
    /// The string read from the wall QR code.
    #[validate(length(min = 1, message = "Scanned code is required"))]
    pub scanned_code: String,
    /// Email the driver typed or has stored in the scanning app.
    #[validate(email(message = "A valid email is required"))]
    pub user_email: String,
}
