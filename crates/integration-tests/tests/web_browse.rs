//! Integration tests for the character grid: enrichment, pagination,
//! search, and the client-side filters.

use axum::http::StatusCode;
use holocron_integration_tests::{TestApp, header};

// =============================================================================
// Page Assets
// =============================================================================

#[tokio::test]
async fn test_static_assets_are_served() {
    let app = TestApp::spawn().await;

    let response = app.get("/static/main.js").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(header(&response, "content-type").contains("javascript"));

    let response = app.get("/static/main.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(header(&response, "content-type").contains("css"));
}

#[tokio::test]
async fn test_browse_page_references_served_script() {
    let app = TestApp::spawn().await;
    app.login().await;

    let body = app.get_text("/characters").await;
    assert!(body.contains("/static/main.js"));
    assert!(body.contains("/static/main.css"));
}

// =============================================================================
// Grid Rendering and Enrichment
// =============================================================================

#[tokio::test]
async fn test_browse_page_shows_enriched_characters() {
    let app = TestApp::spawn().await;
    app.login().await;

    let body = app.get_text("/characters").await;

    assert!(body.contains("Showing 4 of 12 characters"));
    assert!(body.contains("Luke Skywalker"));
    assert!(body.contains("C-3PO"));

    // Species names resolved through the catalog, empty relations default
    assert!(body.contains("Droid"));
    assert!(body.contains("Human"));

    // Deterministic portrait URL seeded by the trailing record id
    assert!(body.contains("https://picsum.photos/seed/1/400/300"));

    // Cards carry a plain link next to the fragment swap, so the detail
    // view stays reachable without scripting
    assert!(body.contains(r#"href="/characters/1""#));
    assert!(body.contains(r#"hx-get="/characters/1""#));
}

#[tokio::test]
async fn test_browse_page_populates_filter_dropdowns() {
    let app = TestApp::spawn().await;
    app.login().await;

    let body = app.get_text("/characters").await;

    assert!(body.contains("All Homeworlds"));
    assert!(body.contains("Tatooine"));
    assert!(body.contains("Naboo"));

    // Films listed in episode order with their number
    assert!(body.contains("Episode 4: A New Hope"));
    assert!(body.contains("Episode 5: The Empire Strikes Back"));

    // The species dropdown leads with the default-human bucket
    assert!(body.contains("value=\"human\""));
    assert!(body.contains("Wookiee"));
}

#[tokio::test]
async fn test_species_lookups_are_memoized() {
    let app = TestApp::spawn().await;
    app.login().await;

    // Two droids on page 1 share one species record; load the page twice
    app.get_text("/characters").await;
    app.get_text("/characters/grid?page=1").await;

    assert_eq!(app.catalog.hits("species/2"), 1);
}

// =============================================================================
// Pagination
// =============================================================================

#[tokio::test]
async fn test_pagination_envelope() {
    let app = TestApp::spawn().await;
    app.login().await;

    let body = app.get_text("/characters").await;
    assert!(body.contains("Page 1 of 2"));
    assert!(body.contains(">Next</a>"));
    assert!(!body.contains(">Previous</a>"));

    let body = app.get_text("/characters/grid?page=2").await;
    assert!(body.contains("Darth Vader"));
    assert!(body.contains("Chewbacca"));
    assert!(body.contains("Page 2 of 2"));
    assert!(body.contains(">Previous</a>"));
    assert!(!body.contains(">Next</a>"));
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_delegates_to_upstream() {
    let app = TestApp::spawn().await;
    app.login().await;

    let body = app.get_text("/characters/grid?search=r2").await;
    assert!(body.contains("R2-D2"));
    assert!(!body.contains("Luke Skywalker"));
    assert!(body.contains("Showing 1 of 1 characters"));
}

#[tokio::test]
async fn test_search_hides_pagination() {
    let app = TestApp::spawn().await;
    app.login().await;

    let body = app.get_text("/characters/grid?search=a").await;
    assert!(!body.contains("Page 1 of"));
}

#[tokio::test]
async fn test_search_with_no_matches_shows_empty_state() {
    let app = TestApp::spawn().await;
    app.login().await;

    let body = app.get_text("/characters/grid?search=jarjar").await;
    assert!(body.contains("No characters found"));
    assert!(body.contains("Reset Filters"));
}

// =============================================================================
// Filters
// =============================================================================

#[tokio::test]
async fn test_species_sentinel_keeps_default_humans_only() {
    let app = TestApp::spawn().await;
    app.login().await;

    let body = app.get_text("/characters/grid?species=human").await;
    assert!(body.contains("Luke Skywalker"));
    assert!(body.contains("Leia Organa"));
    assert!(!body.contains("C-3PO"));
    assert!(!body.contains("R2-D2"));
}

#[tokio::test]
async fn test_species_filter_by_url() {
    let app = TestApp::spawn().await;
    app.login().await;

    let url = format!("{}/characters/grid", app.base_url);
    let species_url = format!("{}/species/2/", app.catalog.base_url);
    let response = app
        .client
        .get(url)
        .query(&[("species", species_url.as_str())])
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.expect("body");
    assert!(body.contains("C-3PO"));
    assert!(body.contains("R2-D2"));
    assert!(!body.contains("Luke Skywalker"));
}

#[tokio::test]
async fn test_filters_combine_as_and() {
    let app = TestApp::spawn().await;
    app.login().await;

    // Homeworld Tatooine AND default-human: Luke but not C-3PO (a Tatooine
    // droid) and not Leia (an Alderaan human)
    let url = format!("{}/characters/grid", app.base_url);
    let homeworld = format!("{}/planets/1/", app.catalog.base_url);
    let response = app
        .client
        .get(url)
        .query(&[("homeworld", homeworld.as_str()), ("species", "human")])
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.expect("body");
    assert!(body.contains("Luke Skywalker"));
    assert!(!body.contains("C-3PO"));
    assert!(!body.contains("Leia Organa"));
}

#[tokio::test]
async fn test_film_filter() {
    let app = TestApp::spawn().await;
    app.login().await;

    let url = format!("{}/characters/grid", app.base_url);
    let film = format!("{}/films/2/", app.catalog.base_url);
    let response = app
        .client
        .get(url)
        .query(&[("film", film.as_str())])
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);

    // Only R2-D2 on page 1 appears in film 2
    let body = response.text().await.expect("body");
    assert!(body.contains("R2-D2"));
    assert!(!body.contains("Luke Skywalker"));
}

#[tokio::test]
async fn test_active_filters_hide_pagination() {
    let app = TestApp::spawn().await;
    app.login().await;

    let body = app.get_text("/characters/grid?species=human").await;
    assert!(!body.contains("Page 1 of"));
}

// =============================================================================
// Upstream Failure
// =============================================================================

#[tokio::test]
async fn test_out_of_range_page_renders_retryable_error() {
    let app = TestApp::spawn().await;
    app.login().await;

    let response = app.get("/characters/grid?page=99").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.expect("body");
    assert!(body.contains("Retry"));
}
