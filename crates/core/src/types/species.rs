//! The species entity.

use serde::{Deserialize, Serialize};

use super::ResourceUrl;

/// A species record, the enrichment target for person display names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    pub classification: String,
    pub designation: String,
    pub language: String,
    /// Canonical URL, the entity's identity.
    pub url: ResourceUrl,
}
