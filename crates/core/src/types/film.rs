//! The film entity.

use serde::{Deserialize, Serialize};

use super::ResourceUrl;

/// A film record, used as a filter domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    /// Episode number; filter dropdowns sort by this.
    pub episode_id: i64,
    pub director: String,
    pub release_date: String,
    /// Canonical URL, the entity's identity.
    pub url: ResourceUrl,
}
