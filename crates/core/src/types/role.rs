//! Account roles.
//!
//! Storefront accounts are either shoppers or store administrators. Only
//! administrators may read the analytics dashboard.

use serde::{Deserialize, Serialize};

/// Role attached to a storefront account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Regular shopper account.
    #[default]
    Customer,
    /// Store administrator with access to the admin dashboard.
    Admin,
}

impl UserRole {
    /// Whether this role may access admin-only resources.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Admin => write!(f, "admin"),
        }
    }
}
