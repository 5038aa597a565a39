//! Upstream catalog REST client.
//!
//! # Architecture
//!
//! - Thin `reqwest` wrapper over the fixed franchise catalog (SWAPI schema)
//! - The catalog is the source of truth - no local sync, direct API calls
//! - In-memory caching via `moka` for species lookups and filter domains;
//!   the catalog is static, so cached entries are never invalidated
//!
//! # Endpoints
//!
//! - Paginated people list (`page` query parameter) and name search
//! - Single-resource lookup by canonical URL (planet, species, film)
//! - Full filter-domain listings (planets, species, films)
//!
//! # Example
//!
//! ```rust,ignore
//! use holocron_web::catalog::CatalogClient;
//!
//! let client = CatalogClient::new(&config.catalog);
//!
//! let page = client.people_page(1).await?;
//! let matches = client.search_people("vader").await?;
//! let homeworld = client.planet(&page.results[0].homeworld).await?;
//! ```

mod client;

pub use client::CatalogClient;

use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur when talking to the upstream catalog.
///
/// Mirrors the two failure shapes the UI distinguishes: transport failures
/// carry no status code, HTTP failures carry one. Neither is retried
/// automatically; the caller re-invokes.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure (DNS, connect, body read).
    #[error("Network error: unable to fetch data: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream responded with a non-success status.
    #[error("API request failed with status {status}")]
    Status {
        /// The HTTP status code the upstream returned.
        status: reqwest::StatusCode,
    },

    /// Response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A canonical URL pointed outside the configured catalog base.
    #[error("URL outside catalog base: {0}")]
    ForeignUrl(String),

    /// A failure surfaced from a coalesced cached lookup.
    #[error(transparent)]
    Shared(Arc<CatalogError>),
}

impl CatalogError {
    /// The HTTP status code, when the upstream produced one.
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status } => Some(*status),
            Self::Http(e) => e.status(),
            Self::Shared(inner) => inner.status(),
            Self::Parse(_) | Self::ForeignUrl(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = CatalogError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "API request failed with status 404 Not Found");
        assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_foreign_url_has_no_status() {
        let err = CatalogError::ForeignUrl("https://elsewhere.invalid/x/".to_string());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_shared_error_forwards_status() {
        let inner = CatalogError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
        };
        let err = CatalogError::Shared(Arc::new(inner));
        assert_eq!(err.status(), Some(reqwest::StatusCode::BAD_GATEWAY));
    }
}
