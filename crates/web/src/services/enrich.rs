//! Per-page enrichment pipeline.
//!
//! For each person on a fetched page, resolves the first species URL to a
//! display name through the catalog client's memoized species lookup, then
//! attaches the derived display attributes. Lookups for one page run
//! concurrently with no bound on parallelism; the page is not ready until
//! every entry has resolved or defaulted.
//!
//! Resolution failures are swallowed and default to "Human" - a deliberate
//! simplification carried over from the source system, not a robust fallback
//! policy. Note that lookups are not cancelled when the user navigates away
//! mid-flight; a stale page can finish assembling after navigation. That
//! race is a known, unresolved property of this design.

use tokio::task::JoinSet;
use tracing::instrument;

use holocron_core::{Character, Page, Person};

use crate::catalog::CatalogClient;

/// Species name used when a person has no species relation or resolution
/// fails.
const DEFAULT_SPECIES: &str = "Human";

/// Enrich every person on a page, preserving page order and the pagination
/// envelope.
#[instrument(skip_all, fields(count = page.results.len()))]
pub async fn enrich_page(client: &CatalogClient, page: Page<Person>) -> Page<Character> {
    let Page {
        count,
        next,
        previous,
        results,
    } = page;

    let mut set = JoinSet::new();
    for (index, person) in results.into_iter().enumerate() {
        let client = client.clone();
        set.spawn(async move {
            let species_name = resolve_species(&client, &person).await;
            (index, Character::from_resolved(person, species_name))
        });
    }

    let mut indexed: Vec<(usize, Character)> = Vec::with_capacity(set.len());
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok(entry) => indexed.push(entry),
            Err(e) => {
                // A panicked lookup task drops its entry; log and move on
                tracing::error!(error = %e, "Enrichment task failed");
            }
        }
    }
    indexed.sort_unstable_by_key(|(index, _)| *index);

    Page {
        count,
        next,
        previous,
        results: indexed.into_iter().map(|(_, character)| character).collect(),
    }
}

/// Enrich a single person with the same species resolution and defaulting
/// policy as the page pipeline.
pub async fn enrich_person(client: &CatalogClient, person: Person) -> Character {
    let species_name = resolve_species(client, &person).await;
    Character::from_resolved(person, species_name)
}

/// Resolve a single person's species display name, defaulting silently.
async fn resolve_species(client: &CatalogClient, person: &Person) -> String {
    let Some(url) = person.species.first() else {
        return DEFAULT_SPECIES.to_owned();
    };

    match client.species(url).await {
        Ok(species) => species.name,
        Err(e) => {
            tracing::debug!(url = %url, error = %e, "Species lookup failed, defaulting");
            DEFAULT_SPECIES.to_owned()
        }
    }
}
