//! Authentication middleware and extractors.
//!
//! Provides extractors that gate route handlers on the session record and
//! drive the token lifecycle: on every authenticated request the record is
//! checked, silently re-issued when near expiry, and dropped back to
//! anonymous when expired or unreadable.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use tower_sessions::Session;

use crate::models::{SessionUser, session_keys};
use crate::state::AppState;

/// Extractor that requires an authenticated session.
///
/// If no valid session record exists, redirects to the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireUser(user): RequireUser,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.username)
/// }
/// ```
pub struct RequireUser(pub SessionUser);

/// Error returned when authentication is required but absent.
pub enum AuthRejection {
    /// Redirect to login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (when no session layer is mounted).
    Unauthorized,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AuthRejection::Unauthorized)?
            .clone();

        let user = load_session_user(&session)
            .await
            .ok_or(AuthRejection::RedirectToLogin)?;

        let now = Utc::now();
        if user.is_expired(now) {
            // Expired record drops back to anonymous
            let _ = session.remove::<SessionUser>(session_keys::SESSION_USER).await;
            return Err(AuthRejection::RedirectToLogin);
        }

        // Silent refresh when remaining validity dips under the threshold
        if let Some(refreshed) = state.auth().refresh_if_due(&user, now) {
            if let Err(e) = set_session_user(&session, &refreshed).await {
                tracing::warn!(error = %e, "Failed to persist refreshed session");
            }
            return Ok(Self(refreshed));
        }

        Ok(Self(user))
    }
}

/// Extractor that optionally gets the current session user.
///
/// Unlike `RequireUser`, this never rejects and never refreshes.
pub struct OptionalUser(pub Option<SessionUser>);

impl FromRequestParts<AppState> for OptionalUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = match parts.extensions.get::<Session>() {
            Some(session) => {
                let user = load_session_user(session).await;
                user.filter(|u| !u.is_expired(Utc::now()))
            }
            None => None,
        };
        Ok(Self(user))
    }
}

/// Read the session record, silently discarding corrupt stored data.
async fn load_session_user(session: &Session) -> Option<SessionUser> {
    match session
        .get::<SessionUser>(session_keys::SESSION_USER)
        .await
    {
        Ok(user) => user,
        Err(e) => {
            // A record that fails to deserialize is treated as absent
            tracing::debug!(error = %e, "Discarding unreadable session record");
            let _ = session.remove::<SessionUser>(session_keys::SESSION_USER).await;
            None
        }
    }
}

/// Helper to set the session record.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_session_user(
    session: &Session,
    user: &SessionUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::SESSION_USER, user).await
}

/// Helper to clear the session record (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_session_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<SessionUser>(session_keys::SESSION_USER)
        .await?;
    Ok(())
}
