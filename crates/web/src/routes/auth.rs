//! Authentication route handlers.
//!
//! Login form against the fixed demo credential pair; the session record is
//! persisted in tower-sessions on success and untouched on failure.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::middleware::{OptionalUser, clear_session_user, set_session_user};
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Display the login page.
///
/// An already-authenticated visitor is sent straight to the browse page.
pub async fn login_page(
    OptionalUser(user): OptionalUser,
    Query(query): Query<MessageQuery>,
) -> Response {
    if user.is_some() {
        return Redirect::to("/characters").into_response();
    }
    LoginTemplate { error: query.error }.into_response()
}

/// Handle login form submission.
///
/// On mismatch the login page is re-rendered with an error and no session
/// state is created or modified.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.auth().login(&form.username, &form.password) {
        Ok(user) => {
            if let Err(e) = set_session_user(&session, &user).await {
                tracing::error!(error = %e, "Failed to persist session");
                return Redirect::to("/login?error=Session+error").into_response();
            }
            tracing::info!(username = %user.username, "Login succeeded");
            Redirect::to("/characters").into_response()
        }
        Err(e) => {
            tracing::info!(username = %form.username, "Login rejected");
            LoginTemplate {
                error: Some(e.to_string()),
            }
            .into_response()
        }
    }
}

/// Handle logout.
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_session_user(&session).await {
        tracing::warn!(error = %e, "Failed to clear session");
    }
    Redirect::to("/login").into_response()
}
