//! The planet entity.

use serde::{Deserialize, Serialize};

use super::ResourceUrl;

/// A planet record, used as a filter domain and as the homeworld join target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub diameter: String,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    /// Population count as a string, `"unknown"` when the catalog has none.
    pub population: String,
    /// Canonical URL, the entity's identity.
    pub url: ResourceUrl,
}
