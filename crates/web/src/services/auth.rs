//! Authentication service.
//!
//! Validates the fixed demo credential pair and manages the mock bearer
//! token lifecycle: issue on login, silent re-issue once remaining validity
//! drops under the refresh threshold, unlimited refreshes, no revocation.
//!
//! The token is deliberately a mock: JWT-shaped (`header.payload.signature`,
//! each segment base64) with a fixed signature string. Nothing verifies it
//! cryptographically; its only live property is the embedded expiry.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Duration, Utc};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::CredentialConfig;
use crate::models::SessionUser;

/// Token lifetime from issue to expiry.
const TOKEN_TTL: Duration = Duration::hours(1);

/// Remaining validity below which the token is silently re-issued.
const REFRESH_THRESHOLD: Duration = Duration::minutes(5);

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username/password pair did not match the configured credentials.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The stored password hash could not be parsed.
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Mock token payload, mirroring a JWT claims set.
#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    sub: String,
    /// Issue time, epoch milliseconds.
    iat: i64,
    /// Expiry time, epoch milliseconds.
    exp: i64,
}

/// Authentication service over the fixed demo credential pair.
#[derive(Clone)]
pub struct AuthService {
    credentials: CredentialConfig,
}

impl AuthService {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(credentials: CredentialConfig) -> Self {
        Self { credentials }
    }

    /// Login with username and password.
    ///
    /// On success returns a fresh session record; the caller persists it.
    /// On mismatch no session state is touched anywhere.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the pair is wrong.
    pub fn login(&self, username: &str, password: &str) -> Result<SessionUser, AuthError> {
        if username != self.credentials.username {
            return Err(AuthError::InvalidCredentials);
        }

        let stored = self.credentials.password_hash.expose_secret();
        let parsed =
            PasswordHash::new(stored).map_err(|e| AuthError::MalformedHash(e.to_string()))?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| AuthError::InvalidCredentials)?;

        Ok(issue_session(username, Utc::now()))
    }

    /// Re-issue the token in place when remaining validity has dropped under
    /// the refresh threshold.
    ///
    /// Returns the refreshed record, or `None` when no refresh is due. An
    /// already-expired token is never refreshed; the session falls back to
    /// anonymous instead.
    #[must_use]
    pub fn refresh_if_due(&self, user: &SessionUser, now: DateTime<Utc>) -> Option<SessionUser> {
        let remaining = user.remaining(now);
        if remaining < REFRESH_THRESHOLD && remaining > Duration::zero() {
            tracing::info!(username = %user.username, "Token silently refreshed");
            Some(issue_session(&user.username, now))
        } else {
            None
        }
    }
}

/// Issue a fresh session record with a new mock token.
fn issue_session(username: &str, now: DateTime<Utc>) -> SessionUser {
    let expires_at = now + TOKEN_TTL;
    SessionUser {
        username: username.to_owned(),
        token: generate_token(username, now, expires_at),
        issued_at: now,
        expires_at,
    }
}

/// Generate a JWT-shaped mock token.
fn generate_token(username: &str, issued: DateTime<Utc>, expires: DateTime<Utc>) -> String {
    let header = BASE64.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = TokenClaims {
        sub: username.to_owned(),
        iat: issued.timestamp_millis(),
        exp: expires.timestamp_millis(),
    };
    // Serializing a struct of primitives cannot fail
    let payload =
        BASE64.encode(serde_json::to_string(&claims).unwrap_or_else(|_| String::from("{}")));
    let signature = BASE64.encode("mock-signature");
    format!("{header}.{payload}.{signature}")
}

/// Parse the expiry out of a token payload.
///
/// Corrupt or truncated tokens read as the epoch, i.e. already expired.
#[must_use]
pub fn token_expiry(token: &str) -> DateTime<Utc> {
    parse_expiry(token).unwrap_or_default()
}

fn parse_expiry(token: &str) -> Option<DateTime<Utc>> {
    let payload = token.split('.').nth(1)?;
    let decoded = BASE64.decode(payload).ok()?;
    let claims: TokenClaims = serde_json::from_slice(&decoded).ok()?;
    DateTime::from_timestamp_millis(claims.exp)
}
