//! Character listing and search commands.
//!
//! Both commands print an enriched page as pretty JSON: each result carries
//! the resolved species name, portrait URL, and species accent color on top
//! of the raw catalog record.

use holocron_web::catalog::CatalogClient;
use holocron_web::services::enrich;

/// Fetch one page of the character listing and print it as JSON.
///
/// # Errors
///
/// Returns an error if the catalog request fails or the output cannot be
/// serialized.
pub async fn page(client: &CatalogClient, number: u32) -> Result<(), Box<dyn std::error::Error>> {
    let people = client.people_page(number).await?;
    let characters = enrich::enrich_page(client, people).await;
    println!("{}", serde_json::to_string_pretty(&characters)?);
    Ok(())
}

/// Search characters by name and print the enriched results as JSON.
///
/// # Errors
///
/// Returns an error if the catalog request fails or the output cannot be
/// serialized.
pub async fn search(client: &CatalogClient, query: &str) -> Result<(), Box<dyn std::error::Error>> {
    let people = client.search_people(query).await?;
    let characters = enrich::enrich_page(client, people).await;
    println!("{}", serde_json::to_string_pretty(&characters)?);
    Ok(())
}
