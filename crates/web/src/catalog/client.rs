//! Catalog REST client implementation.
//!
//! Species lookups are memoized per distinct canonical URL for the process
//! lifetime with single-flight coalescing, so one URL never produces two
//! upstream requests. Filter-domain listings are fetched once and retained.
//! Page and search responses are never cached.

use std::sync::Arc;

use moka::future::Cache;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use holocron_core::{Film, Page, Person, Planet, ResourceUrl, Species};

use super::CatalogError;
use crate::config::CatalogConfig;

/// Cached filter-domain listings.
#[derive(Clone)]
enum DomainValue {
    Planets(Vec<Planet>),
    Species(Vec<Species>),
    Films(Vec<Film>),
}

/// Client for the upstream catalog REST API.
///
/// Cheaply cloneable; all clones share the HTTP connection pool and caches.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    http: reqwest::Client,
    base_url: String,
    /// Species by canonical URL. Never evicted: the catalog is static.
    species: Cache<ResourceUrl, Species>,
    /// Filter-domain listings, fetched once per process.
    domains: Cache<&'static str, DomainValue>,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                http: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                species: Cache::builder().max_capacity(10_000).build(),
                domains: Cache::builder().max_capacity(8).build(),
            }),
        }
    }

    /// The configured catalog base path, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    // =========================================================================
    // People
    // =========================================================================

    /// Fetch one page of the people listing (1-based page number).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or an
    /// unexpected response shape.
    #[instrument(skip(self))]
    pub async fn people_page(&self, page: u32) -> Result<Page<Person>, CatalogError> {
        let url = format!("{}/people/?page={page}", self.inner.base_url);
        self.get_json(&url).await
    }

    /// Fetch a single person by numeric id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; an unknown id surfaces as the
    /// upstream's 404 status.
    #[instrument(skip(self))]
    pub async fn person(&self, id: u64) -> Result<Person, CatalogError> {
        let url = format!("{}/people/{id}/", self.inner.base_url);
        self.get_json(&url).await
    }

    /// Search people by name. Delegates matching entirely to the upstream.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn search_people(&self, query: &str) -> Result<Page<Person>, CatalogError> {
        let url = format!(
            "{}/people/?search={}",
            self.inner.base_url,
            urlencoding::encode(query)
        );
        self.get_json(&url).await
    }

    // =========================================================================
    // Single-resource lookups by canonical URL
    // =========================================================================

    /// Fetch a planet by its canonical URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is outside the catalog base or the
    /// request fails.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn planet(&self, url: &ResourceUrl) -> Result<Planet, CatalogError> {
        self.check_base(url)?;
        self.get_json(url.as_str()).await
    }

    /// Fetch a species by its canonical URL, memoized for the process
    /// lifetime.
    ///
    /// Concurrent lookups for the same URL are coalesced into a single
    /// upstream request.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is outside the catalog base or the
    /// request fails. Failures are not cached; the next lookup retries.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn species(&self, url: &ResourceUrl) -> Result<Species, CatalogError> {
        self.check_base(url)?;

        if let Some(species) = self.inner.species.get(url).await {
            debug!("Cache hit for species");
            return Ok(species);
        }

        let inner = Arc::clone(&self.inner);
        let fetch_url = url.clone();
        self.inner
            .species
            .try_get_with(url.clone(), async move {
                get_json_raw::<Species>(&inner.http, fetch_url.as_str()).await
            })
            .await
            .map_err(CatalogError::Shared)
    }

    /// Fetch a film by its canonical URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is outside the catalog base or the
    /// request fails.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn film(&self, url: &ResourceUrl) -> Result<Film, CatalogError> {
        self.check_base(url)?;
        self.get_json(url.as_str()).await
    }

    // =========================================================================
    // Filter domains
    // =========================================================================

    /// All planets, for the homeworld filter dropdown. Follows `next` until
    /// exhausted; the full listing is cached after the first call.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    #[instrument(skip(self))]
    pub async fn all_planets(&self) -> Result<Vec<Planet>, CatalogError> {
        let inner = Arc::clone(&self.inner);
        let value = self
            .inner
            .domains
            .try_get_with("planets", async move {
                collect_all::<Planet>(&inner.http, &inner.base_url, "planets")
                    .await
                    .map(DomainValue::Planets)
            })
            .await
            .map_err(CatalogError::Shared)?;
        match value {
            DomainValue::Planets(planets) => Ok(planets),
            DomainValue::Species(_) | DomainValue::Films(_) => unreachable!("key is planets"),
        }
    }

    /// All species, for the species filter dropdown. Cached after the first
    /// call.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    #[instrument(skip(self))]
    pub async fn all_species(&self) -> Result<Vec<Species>, CatalogError> {
        let inner = Arc::clone(&self.inner);
        let value = self
            .inner
            .domains
            .try_get_with("species", async move {
                collect_all::<Species>(&inner.http, &inner.base_url, "species")
                    .await
                    .map(DomainValue::Species)
            })
            .await
            .map_err(CatalogError::Shared)?;
        match value {
            DomainValue::Species(species) => Ok(species),
            DomainValue::Planets(_) | DomainValue::Films(_) => unreachable!("key is species"),
        }
    }

    /// All films, for the film filter dropdown. The catalog serves the full
    /// film list on one page. Cached after the first call.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn all_films(&self) -> Result<Vec<Film>, CatalogError> {
        let inner = Arc::clone(&self.inner);
        let value = self
            .inner
            .domains
            .try_get_with("films", async move {
                let url = format!("{}/films/", inner.base_url);
                get_json_raw::<Page<Film>>(&inner.http, &url)
                    .await
                    .map(|page| DomainValue::Films(page.results))
            })
            .await
            .map_err(CatalogError::Shared)?;
        match value {
            DomainValue::Films(films) => Ok(films),
            DomainValue::Planets(_) | DomainValue::Species(_) => unreachable!("key is films"),
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Reject canonical URLs pointing outside the configured catalog.
    fn check_base(&self, url: &ResourceUrl) -> Result<(), CatalogError> {
        if url.as_str().starts_with(&self.inner.base_url) {
            Ok(())
        } else {
            Err(CatalogError::ForeignUrl(url.as_str().to_owned()))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        get_json_raw(&self.inner.http, url).await
    }
}

/// Issue one GET and decode the JSON body.
async fn get_json_raw<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: &str,
) -> Result<T, CatalogError> {
    let response = http.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status { status });
    }

    // Read the body as text first for better parse-error diagnostics
    let body = response.text().await?;
    match serde_json::from_str(&body) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse catalog response"
            );
            Err(CatalogError::Parse(e))
        }
    }
}

/// Walk a paginated listing until `next` runs out.
async fn collect_all<T: DeserializeOwned>(
    http: &reqwest::Client,
    base_url: &str,
    resource: &str,
) -> Result<Vec<T>, CatalogError> {
    let mut items = Vec::new();
    let mut page = 1u32;

    loop {
        let url = format!("{base_url}/{resource}/?page={page}");
        let response: Page<T> = get_json_raw(http, &url).await?;
        items.extend(response.results);
        if response.next.is_none() {
            return Ok(items);
        }
        page += 1;
    }
}
