//! CLI command implementations.

use holocron_web::catalog::CatalogClient;
use holocron_web::config::CatalogConfig;

pub mod browse;
pub mod films;
pub mod person;

/// Build a catalog client from an explicit URL, the environment, or the
/// public default.
pub fn client(catalog_url: Option<String>) -> CatalogClient {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    let mut base_url = catalog_url
        .or_else(|| std::env::var("CATALOG_BASE_URL").ok())
        .unwrap_or_else(|| "https://swapi.dev/api".to_owned());
    while base_url.ends_with('/') {
        base_url.pop();
    }

    CatalogClient::new(&CatalogConfig { base_url })
}
