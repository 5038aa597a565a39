//! The person entity.

use serde::{Deserialize, Serialize};

use super::ResourceUrl;

/// A person record as served by the upstream catalog.
///
/// All attribute values are strings, including numeric ones; the catalog
/// reports missing data as `"unknown"` or `"n/a"` rather than null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    /// Height in centimeters, as a string.
    pub height: String,
    /// Mass in kilograms, as a string.
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    /// In-universe birth year, e.g. `"19BBY"`.
    pub birth_year: String,
    pub gender: String,
    /// Canonical URL of the person's homeworld planet.
    pub homeworld: ResourceUrl,
    /// Film URLs this person appears in.
    pub films: Vec<ResourceUrl>,
    /// Species URLs; empty for baseline humans.
    pub species: Vec<ResourceUrl>,
    /// ISO 8601 timestamp the record was added upstream.
    pub created: String,
    /// Canonical URL, the entity's identity.
    pub url: ResourceUrl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_upstream_shape() {
        let json = r#"{
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77",
            "hair_color": "blond",
            "skin_color": "fair",
            "eye_color": "blue",
            "birth_year": "19BBY",
            "gender": "male",
            "homeworld": "https://swapi.dev/api/planets/1/",
            "films": ["https://swapi.dev/api/films/1/"],
            "species": [],
            "vehicles": [],
            "starships": [],
            "created": "2014-12-09T13:50:51.644000Z",
            "edited": "2014-12-20T21:17:56.891000Z",
            "url": "https://swapi.dev/api/people/1/"
        }"#;

        let person: Person = serde_json::from_str(json).expect("valid person");
        assert_eq!(person.name, "Luke Skywalker");
        assert!(person.species.is_empty());
        assert_eq!(person.url.trailing_id(), Some(1));
        assert_eq!(
            person.homeworld,
            ResourceUrl::new("https://swapi.dev/api/planets/1/")
        );
    }
}
