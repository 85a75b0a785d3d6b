//! Session-related types for admin authorization.
//!
//! Types stored in the session by the login flow and read by the admin
//! extractors.

use serde::{Deserialize, Serialize};

use shopfront_core::{UserId, UserRole};

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Account's database ID.
    pub id: UserId,
    /// Account's display name.
    pub name: String,
    /// Account's role.
    pub role: UserRole,
}

impl CurrentUser {
    /// Whether this account may use the admin API.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in account.
    pub const CURRENT_USER: &str = "current_user";
}
