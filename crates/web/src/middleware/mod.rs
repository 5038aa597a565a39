//! HTTP middleware stack for the web crate.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with in-memory store)
//! 4. Security headers (CSP, isolation)
//! 5. Rate limiting on the login action (governor)

pub mod auth;
pub mod rate_limit;
pub mod security_headers;
pub mod session;

pub use auth::{OptionalUser, RequireUser, clear_session_user, set_session_user};
pub use rate_limit::auth_rate_limiter;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
