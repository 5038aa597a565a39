//! Canonical resource URLs.
//!
//! The upstream catalog identifies every entity by its canonical URL; there
//! is no separate numeric key that is guaranteed unique across pages, so the
//! URL doubles as the primary key throughout Holocron.

use serde::{Deserialize, Serialize};

/// Canonical upstream URL identifying a single catalog resource.
///
/// Equality and hashing are by the raw URL string, which is how the catalog
/// itself keys entities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceUrl(String);

impl ResourceUrl {
    /// Wrap a raw URL string.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The raw URL string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract the trailing numeric path segment, e.g. `/people/4/` -> 4.
    ///
    /// Returns `None` when the URL does not end in `/{digits}/`. Callers that
    /// need a display seed fall back to `0` themselves.
    #[must_use]
    pub fn trailing_id(&self) -> Option<u64> {
        let trimmed = self.0.strip_suffix('/')?;
        let (_, last) = trimmed.rsplit_once('/')?;
        if last.is_empty() || !last.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        last.parse().ok()
    }
}

impl std::fmt::Display for ResourceUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ResourceUrl {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl From<&str> for ResourceUrl {
    fn from(url: &str) -> Self {
        Self(url.to_owned())
    }
}

impl AsRef<str> for ResourceUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_id_person() {
        let url = ResourceUrl::new("https://swapi.dev/api/people/4/");
        assert_eq!(url.trailing_id(), Some(4));
    }

    #[test]
    fn test_trailing_id_multi_digit() {
        let url = ResourceUrl::new("https://swapi.dev/api/planets/28/");
        assert_eq!(url.trailing_id(), Some(28));
    }

    #[test]
    fn test_trailing_id_missing_slash() {
        let url = ResourceUrl::new("https://swapi.dev/api/people/4");
        assert_eq!(url.trailing_id(), None);
    }

    #[test]
    fn test_trailing_id_not_numeric() {
        let url = ResourceUrl::new("https://swapi.dev/api/people/vader/");
        assert_eq!(url.trailing_id(), None);
    }

    #[test]
    fn test_equality_is_by_raw_string() {
        let a = ResourceUrl::new("https://swapi.dev/api/people/1/");
        let b = ResourceUrl::from("https://swapi.dev/api/people/1/".to_string());
        assert_eq!(a, b);
    }
}
