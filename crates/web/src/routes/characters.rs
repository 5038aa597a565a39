//! Character browsing route handlers.
//!
//! The full page carries the search box, the three filter dropdowns, and the
//! first grid render; subsequent interaction (debounced search keystrokes,
//! filter changes, pagination) swaps only the grid fragment via HTMX.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer};
use tracing::instrument;

use holocron_core::{Character, Film, Planet, Species};

use crate::catalog::CatalogError;
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireUser;
use crate::services::enrich::{enrich_page, enrich_person};
use crate::services::filter::{self, FilterSelection};
use crate::state::AppState;

/// Deserialize empty strings as None for optional query fields.
fn empty_string_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

/// Browse query parameters: page number, search string, and the three
/// categorical filter values.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseQuery {
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub homeworld: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub film: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub species: Option<String>,
}

impl BrowseQuery {
    fn selection(&self) -> FilterSelection {
        FilterSelection {
            homeworld: self.homeworld.as_deref().map(Into::into),
            film: self.film.as_deref().map(Into::into),
            species: self.species.clone(),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Full browse page template.
#[derive(Template, WebTemplate)]
#[template(path = "characters/index.html")]
pub struct BrowseTemplate {
    pub username: String,
    pub search: String,
    pub selected_homeworld: String,
    pub selected_film: String,
    pub selected_species: String,
    pub planets: Vec<Planet>,
    pub species_list: Vec<Species>,
    pub films: Vec<Film>,
    /// Pre-rendered grid fragment.
    pub grid_html: String,
}

/// Character grid fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/grid.html")]
pub struct GridTemplate {
    pub characters: Vec<Character>,
    pub total_count: u64,
    pub current_page: u32,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
    /// Hidden while search or any categorical filter is active.
    pub show_pagination: bool,
    pub filters_active: bool,
}

/// Character detail fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/detail.html")]
pub struct DetailTemplate {
    pub character: Character,
    pub homeworld: Option<Planet>,
    pub homeworld_failed: bool,
}

/// Standalone character detail page, served when the detail URL is opened
/// directly instead of through a fragment swap.
#[derive(Template, WebTemplate)]
#[template(path = "characters/show.html")]
pub struct DetailPageTemplate {
    pub character: Character,
    pub homeworld: Option<Planet>,
    pub homeworld_failed: bool,
}

/// Fetch error fragment with a retry link re-issuing the same request.
#[derive(Template, WebTemplate)]
#[template(path = "partials/error.html")]
pub struct FetchErrorTemplate {
    pub message: String,
    pub retry_url: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the browse page.
#[instrument(skip(state, user))]
pub async fn index(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<BrowseQuery>,
) -> Result<Response> {
    // Filter domains degrade to empty dropdowns when the catalog misbehaves;
    // the grid still renders and carries its own error surface
    let (planets, species_list, films) = load_filter_domains(&state).await;

    let grid_html = match build_grid(&state, &query).await {
        Ok(grid) => grid.render().map_err(template_error)?,
        Err(e) => render_fetch_error(&e, uri.to_string())?,
    };

    Ok(BrowseTemplate {
        username: user.username,
        search: query.search.clone().unwrap_or_default(),
        selected_homeworld: query.homeworld.clone().unwrap_or_default(),
        selected_film: query.film.clone().unwrap_or_default(),
        selected_species: query.species.clone().unwrap_or_default(),
        planets,
        species_list,
        films,
        grid_html,
    }
    .into_response())
}

/// Serve the grid fragment (HTMX target).
#[instrument(skip(state, _user))]
pub async fn grid(
    State(state): State<AppState>,
    _user: RequireUser,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<BrowseQuery>,
) -> Result<Response> {
    match build_grid(&state, &query).await {
        Ok(grid) => Ok(grid.into_response()),
        Err(e) => {
            let html = render_fetch_error(&e, uri.to_string())?;
            Ok(axum::response::Html(html).into_response())
        }
    }
}

/// Display the character detail with the homeworld join.
///
/// HTMX requests (card clicks) get the dialog fragment swapped into the
/// modal slot; direct navigation gets a full standalone page.
#[instrument(skip(state, _user, headers))]
pub async fn show(
    State(state): State<AppState>,
    _user: RequireUser,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Response> {
    let person = state.catalog().person(id).await.map_err(|e| {
        if e.status() == Some(reqwest::StatusCode::NOT_FOUND) {
            AppError::NotFound(format!("person {id}"))
        } else {
            AppError::Catalog(e)
        }
    })?;

    // The homeworld join gets its own inline error; the rest of the detail
    // view still renders
    let (homeworld, homeworld_failed) = match state.catalog().planet(&person.homeworld).await {
        Ok(planet) => (Some(planet), false),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load homeworld");
            (None, true)
        }
    };

    let character = enrich_person(state.catalog(), person).await;

    if headers.contains_key("hx-request") {
        Ok(DetailTemplate {
            character,
            homeworld,
            homeworld_failed,
        }
        .into_response())
    } else {
        Ok(DetailPageTemplate {
            character,
            homeworld,
            homeworld_failed,
        }
        .into_response())
    }
}

// =============================================================================
// Internals
// =============================================================================

/// Fetch a page (or search results), enrich it, and filter it down.
async fn build_grid(
    state: &AppState,
    query: &BrowseQuery,
) -> std::result::Result<GridTemplate, CatalogError> {
    let current_page = query.page.unwrap_or(1).max(1);

    let page = match &query.search {
        Some(term) => state.catalog().search_people(term).await?,
        None => state.catalog().people_page(current_page).await?,
    };

    let enriched = enrich_page(state.catalog(), page).await;
    let selection = query.selection();
    let characters = filter::apply(&enriched.results, &selection);

    let searching = query.search.is_some();
    let filters_active = selection.is_active();

    Ok(GridTemplate {
        total_count: enriched.count,
        current_page,
        total_pages: enriched.total_pages(),
        has_next: enriched.has_next(),
        has_previous: enriched.has_previous(),
        show_pagination: !searching && !filters_active && enriched.total_pages() > 1,
        filters_active: filters_active || searching,
        characters,
    })
}

/// Load the three filter-domain listings, degrading to empty on failure.
async fn load_filter_domains(state: &AppState) -> (Vec<Planet>, Vec<Species>, Vec<Film>) {
    let catalog = state.catalog();
    let (planets, species_list, films) = tokio::join!(
        catalog.all_planets(),
        catalog.all_species(),
        catalog.all_films(),
    );

    let mut films = films.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load film filter domain");
        Vec::new()
    });
    films.sort_by_key(|film| film.episode_id);

    (
        planets.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load planet filter domain");
            Vec::new()
        }),
        species_list.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load species filter domain");
            Vec::new()
        }),
        films,
    )
}

fn render_fetch_error(error: &CatalogError, retry_url: String) -> Result<String> {
    tracing::error!(error = %error, "Character fetch failed");
    FetchErrorTemplate {
        message: error.to_string(),
        retry_url,
    }
    .render()
    .map_err(template_error)
}

fn template_error(e: askama::Error) -> AppError {
    AppError::Internal(format!("template render failed: {e}"))
}
