//! Authentication extractors for admin.
//!
//! The login flow stores a [`CurrentUser`] in the session; [`RequireAdmin`]
//! reads it back and enforces the administrator role.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::{AppError, set_sentry_user};
use crate::models::{CurrentUser, session_keys};

/// Extractor that requires an authenticated administrator.
///
/// Rejects with 401 when no account is logged in and 403 when the account
/// is not an administrator. Both rejections happen before any handler work.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdmin(admin): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.name)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub CurrentUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = session_user(parts)
            .await?
            .ok_or_else(|| AppError::Unauthorized("login required".to_string()))?;

        if !user.is_admin() {
            tracing::warn!(
                user_id = %user.id,
                role = %user.role,
                "Non-admin account attempted admin access"
            );
            return Err(AppError::Forbidden("admin access required".to_string()));
        }

        set_sentry_user(&user.id);
        Ok(Self(user))
    }
}

/// Read the current account from the request's session.
///
/// A request without a session layer has no account.
async fn session_user(parts: &Parts) -> Result<Option<CurrentUser>, AppError> {
    let Some(session) = parts.extensions.get::<Session>() else {
        return Ok(None);
    };

    session
        .get::<CurrentUser>(session_keys::CURRENT_USER)
        .await
        .map_err(|e| AppError::Internal(format!("session read failed: {e}")))
}

/// Helper to set the current account in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}
