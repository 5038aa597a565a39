//! HTTP route handlers for the web crate.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to /characters
//! GET  /health                 - Health check
//!
//! # Auth
//! GET  /login                  - Login page
//! POST /login                  - Login action (rate limited)
//! POST /logout                 - Logout action
//!
//! # Characters (require auth)
//! GET  /characters             - Browse page: search, filters, grid
//! GET  /characters/grid        - Grid fragment (HTMX target for debounced
//!                                search, filter changes, and pagination)
//! GET  /characters/{id}        - Detail fragment with homeworld join
//! ```

pub mod auth;
pub mod characters;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::middleware::auth_rate_limiter;
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/login",
            get(auth::login_page)
                .post(auth::login)
                .layer(auth_rate_limiter()),
        )
        .route("/logout", post(auth::logout))
}

/// Create the character routes router.
pub fn character_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(characters::index))
        .route("/grid", get(characters::grid))
        .route("/{id}", get(characters::show))
}

/// Create all routes for the web crate.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/characters") }))
        .nest("/characters", character_routes())
        .merge(auth_routes())
}
