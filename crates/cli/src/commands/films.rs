//! Film listing command.

use holocron_web::catalog::CatalogClient;

/// List all films in episode order as JSON.
///
/// # Errors
///
/// Returns an error if the catalog request fails or the output cannot be
/// serialized.
pub async fn list(client: &CatalogClient) -> Result<(), Box<dyn std::error::Error>> {
    let mut films = client.all_films().await?;
    films.sort_by_key(|film| film.episode_id);
    println!("{}", serde_json::to_string_pretty(&films)?);
    Ok(())
}
