//! Session-related types.
//!
//! The session record is the single durable artifact of the whole system:
//! one named key holding the authenticated user and their bearer token.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Session-stored user identity and token.
///
/// Single active session per browser; survives reloads until the token
/// expires and the refresh window has passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    /// The logged-in username.
    pub username: String,
    /// Mock bearer token (`header.payload.signature`).
    pub token: String,
    /// When the current token was issued.
    pub issued_at: DateTime<Utc>,
    /// When the current token expires.
    pub expires_at: DateTime<Utc>,
}

impl SessionUser {
    /// Remaining token validity at `now`. Negative once expired.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        self.expires_at - now
    }

    /// Whether the token has expired at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Session keys for authentication data.
pub mod keys {
    /// The single named key holding the serialized session record.
    pub const SESSION_USER: &str = "session_user";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(expires_at: DateTime<Utc>) -> SessionUser {
        SessionUser {
            username: "luke".to_string(),
            token: "a.b.c".to_string(),
            issued_at: expires_at - Duration::hours(1),
            expires_at,
        }
    }

    #[test]
    fn test_remaining_and_expiry() {
        let now = Utc::now();
        let active = user(now + Duration::minutes(30));
        assert!(!active.is_expired(now));
        assert_eq!(active.remaining(now), Duration::minutes(30));

        let expired = user(now - Duration::seconds(1));
        assert!(expired.is_expired(now));
        assert!(expired.remaining(now) < Duration::zero());
    }

    #[test]
    fn test_round_trips_through_serde() {
        let now = Utc::now();
        let original = user(now + Duration::hours(1));
        let json = serde_json::to_string(&original).expect("serialize");
        let restored: SessionUser = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored.username, original.username);
        assert_eq!(restored.expires_at, original.expires_at);
    }
}
