//! Client-side categorical filtering over the loaded page.
//!
//! Three filters (homeworld, film, species) combine as a logical AND and
//! apply only to the entities of the currently loaded page, never across the
//! whole dataset - a known scope limitation. Free-text search is delegated
//! upstream and never filtered here.

use holocron_core::{Character, ResourceUrl};

/// Sentinel species filter value matching characters with no species
/// relation, which display as baseline humans.
pub const HUMAN_SENTINEL: &str = "human";

/// The up-to-three selected filter values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    /// Homeworld planet URL.
    pub homeworld: Option<ResourceUrl>,
    /// Film URL.
    pub film: Option<ResourceUrl>,
    /// Species URL, or [`HUMAN_SENTINEL`] for the default-human bucket.
    pub species: Option<String>,
}

impl FilterSelection {
    /// Whether any filter is selected. Pagination is hidden while active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.homeworld.is_some() || self.film.is_some() || self.species.is_some()
    }
}

/// Keep the characters matching every selected filter.
///
/// Pure and idempotent: applying the same selection to its own output yields
/// the same subset.
#[must_use]
pub fn apply(characters: &[Character], selection: &FilterSelection) -> Vec<Character> {
    characters
        .iter()
        .filter(|character| matches(character, selection))
        .cloned()
        .collect()
}

fn matches(character: &Character, selection: &FilterSelection) -> bool {
    if let Some(homeworld) = &selection.homeworld
        && character.person.homeworld != *homeworld
    {
        return false;
    }

    if let Some(film) = &selection.film
        && !character.person.films.contains(film)
    {
        return false;
    }

    if let Some(species) = &selection.species {
        if character.person.species.is_empty() {
            // Characters with no species relation sit in the default-human
            // bucket and match only its sentinel value
            return species == HUMAN_SENTINEL;
        }
        return character
            .person
            .species
            .iter()
            .any(|url| url.as_str() == species);
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocron_core::Person;

    fn character(homeworld: &str, films: &[&str], species: &[&str]) -> Character {
        let person = Person {
            name: "test".to_string(),
            height: "180".to_string(),
            mass: "80".to_string(),
            hair_color: "brown".to_string(),
            skin_color: "fair".to_string(),
            eye_color: "brown".to_string(),
            birth_year: "unknown".to_string(),
            gender: "male".to_string(),
            homeworld: ResourceUrl::new(homeworld),
            films: films.iter().map(|f| ResourceUrl::new(*f)).collect(),
            species: species.iter().map(|s| ResourceUrl::new(*s)).collect(),
            created: "2014-12-09T13:50:51.644000Z".to_string(),
            url: ResourceUrl::new("https://swapi.dev/api/people/1/"),
        };
        Character::from_resolved(person, "Human".to_string())
    }

    fn sample() -> Vec<Character> {
        vec![
            character(
                "https://swapi.dev/api/planets/1/",
                &["https://swapi.dev/api/films/1/"],
                &[],
            ),
            character(
                "https://swapi.dev/api/planets/2/",
                &[
                    "https://swapi.dev/api/films/1/",
                    "https://swapi.dev/api/films/2/",
                ],
                &["https://swapi.dev/api/species/2/"],
            ),
            character(
                "https://swapi.dev/api/planets/1/",
                &["https://swapi.dev/api/films/2/"],
                &["https://swapi.dev/api/species/3/"],
            ),
        ]
    }

    #[test]
    fn test_empty_selection_keeps_everything() {
        let characters = sample();
        let selection = FilterSelection::default();
        assert!(!selection.is_active());
        assert_eq!(apply(&characters, &selection).len(), 3);
    }

    #[test]
    fn test_homeworld_filter() {
        let characters = sample();
        let selection = FilterSelection {
            homeworld: Some(ResourceUrl::new("https://swapi.dev/api/planets/1/")),
            ..Default::default()
        };
        assert_eq!(apply(&characters, &selection).len(), 2);
    }

    #[test]
    fn test_film_filter() {
        let characters = sample();
        let selection = FilterSelection {
            film: Some(ResourceUrl::new("https://swapi.dev/api/films/2/")),
            ..Default::default()
        };
        assert_eq!(apply(&characters, &selection).len(), 2);
    }

    #[test]
    fn test_filters_combine_as_and() {
        let characters = sample();
        let selection = FilterSelection {
            homeworld: Some(ResourceUrl::new("https://swapi.dev/api/planets/2/")),
            film: Some(ResourceUrl::new("https://swapi.dev/api/films/2/")),
            ..Default::default()
        };
        let filtered = apply(&characters, &selection);
        assert_eq!(filtered.len(), 1);
        assert_eq!(
            filtered[0].person.homeworld.as_str(),
            "https://swapi.dev/api/planets/2/"
        );
    }

    #[test]
    fn test_species_sentinel_matches_only_empty_species() {
        let characters = sample();
        let selection = FilterSelection {
            species: Some(HUMAN_SENTINEL.to_string()),
            ..Default::default()
        };
        let filtered = apply(&characters, &selection);
        assert_eq!(filtered.len(), 1);
        assert!(filtered[0].person.species.is_empty());
    }

    #[test]
    fn test_species_url_does_not_match_empty_species() {
        let characters = sample();
        let selection = FilterSelection {
            species: Some("https://swapi.dev/api/species/2/".to_string()),
            ..Default::default()
        };
        let filtered = apply(&characters, &selection);
        assert_eq!(filtered.len(), 1);
        assert!(!filtered[0].person.species.is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let characters = sample();
        let selection = FilterSelection {
            homeworld: Some(ResourceUrl::new("https://swapi.dev/api/planets/1/")),
            film: Some(ResourceUrl::new("https://swapi.dev/api/films/1/")),
            ..Default::default()
        };
        let once = apply(&characters, &selection);
        let twice = apply(&once, &selection);
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.person.url, b.person.url);
        }
    }
}
