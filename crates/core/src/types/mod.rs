//! Account types shared by the admin API and its session store.

pub mod id;
pub mod role;

pub use id::UserId;
pub use role::UserRole;
