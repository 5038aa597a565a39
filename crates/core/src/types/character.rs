//! Enriched person records ready for display.

use serde::{Deserialize, Serialize};

use super::Person;
use crate::display::{portrait_url, species_color};

/// A person enriched with derived display attributes.
///
/// Produced by the enrichment pipeline after resolving the person's species
/// URL to a display name. The two derived attributes are deterministic
/// functions of the resolution result and the person's canonical URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    #[serde(flatten)]
    pub person: Person,
    /// Resolved species display name; `"Human"` when the person has no
    /// species relation or resolution failed.
    pub species_name: String,
    /// Deterministic placeholder portrait, seeded by the entity id.
    pub image_url: String,
    /// Color tag keyed by species name.
    pub species_color: String,
}

impl Character {
    /// Attach derived display attributes to a person.
    #[must_use]
    pub fn from_resolved(person: Person, species_name: String) -> Self {
        let seed = person.url.trailing_id().unwrap_or(0);
        let image_url = portrait_url(seed);
        let species_color = species_color(&species_name).to_owned();
        Self {
            person,
            species_name,
            image_url,
            species_color,
        }
    }
}
