//! Single-character lookup command.

use serde_json::json;

use holocron_web::catalog::CatalogClient;
use holocron_web::services::enrich;

/// Fetch one character by id and print it with its homeworld joined.
///
/// The homeworld join is best-effort; a failed join prints `null` for the
/// homeworld rather than failing the whole command.
///
/// # Errors
///
/// Returns an error if the person lookup fails or the output cannot be
/// serialized.
pub async fn show(client: &CatalogClient, id: u64) -> Result<(), Box<dyn std::error::Error>> {
    let person = client.person(id).await?;

    let homeworld = match client.planet(&person.homeworld).await {
        Ok(planet) => Some(planet),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load homeworld");
            None
        }
    };

    let character = enrich::enrich_person(client, person).await;

    let output = json!({
        "character": character,
        "homeworld": homeworld,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
