//! User entity model and roles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Roles recognized by the parking system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Administrative staff member.
    Staff,
    /// Teaching instructor.
    Instructor,
    /// System administrator (no parking privileges by itself).
    Admin,
}

impl UserRole {
    /// Check whether this role is allowed to open parking sessions.
    pub fn may_park(&self) -> bool {
        matches!(self, Self::Staff | Self::Instructor)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Instructor => "instructor",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A staff or instructor identity.
///
/// Looked up case-insensitively by email. Read-only to the admission core;
/// the admin front-end owns create/update/delete.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Full display name.
    pub full_name: String,
    /// Email address, the scan lookup key.
    pub email: String,
    /// User role.
    pub role: UserRole,
    /// Home campus (if assigned). Used by the affinity policy.
    pub home_campus_id: Option<i64>,
    /// Printed parking-permit number (display only).
    pub parking_number: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check whether this user may park at the given campus under the
    /// cross-campus policy.
    pub fn may_park_at(&self, campus_id: i64, allow_cross_campus: bool) -> bool {
        match self.home_campus_id {
            Some(home) if home != campus_id => allow_cross_campus,
            _ => true,
        }
    }
}
