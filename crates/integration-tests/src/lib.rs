//! Integration test harness for Holocron.
//!
//! Spins up two local servers per test: a stub upstream catalog serving
//! canned records, and the full application router pointed at it. Tests
//! drive the application over HTTP with a cookie-holding client, the same
//! way a browser would.
//!
//! # Example
//!
//! ```rust,ignore
//! let app = TestApp::spawn().await;
//! app.login().await;
//! let body = app.get_text("/characters").await;
//! assert!(body.contains("Luke Skywalker"));
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use secrecy::SecretString;
use serde_json::json;

use holocron_web::config::{CatalogConfig, CredentialConfig, WebConfig};

pub mod fixtures;

/// Demo credentials accepted by the test application.
pub const TEST_USERNAME: &str = "luke";
pub const TEST_PASSWORD: &str = "skywalker";

// =============================================================================
// Stub upstream catalog
// =============================================================================

#[derive(Clone)]
struct StubState {
    base: String,
    hits: Arc<Mutex<HashMap<String, usize>>>,
}

impl StubState {
    fn record(&self, key: &str) {
        let mut hits = self.hits.lock().expect("hits lock");
        *hits.entry(key.to_owned()).or_insert(0) += 1;
    }
}

/// In-process stand-in for the upstream catalog REST API.
///
/// Serves the fixture records on an ephemeral port and counts requests per
/// resource so tests can assert on caching behavior.
pub struct StubCatalog {
    /// Base path of the stub API, e.g. `http://127.0.0.1:49152/api`.
    pub base_url: String,
    hits: Arc<Mutex<HashMap<String, usize>>>,
}

impl StubCatalog {
    /// Bind an ephemeral port and serve the stub catalog on it.
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub local addr");
        let base_url = format!("http://{addr}/api");

        let hits = Arc::new(Mutex::new(HashMap::new()));
        let state = StubState {
            base: base_url.clone(),
            hits: Arc::clone(&hits),
        };

        let router = Router::new()
            .route("/api/people/", get(people_listing))
            .route("/api/people/{id}/", get(person_detail))
            .route("/api/planets/", get(planets_listing))
            .route("/api/planets/{id}/", get(planet_detail))
            .route("/api/species/", get(species_listing))
            .route("/api/species/{id}/", get(species_detail))
            .route("/api/films/", get(films_listing))
            .with_state(state);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("stub serve");
        });

        Self { base_url, hits }
    }

    /// Number of requests the stub has served for a resource key, e.g.
    /// `"species/2"` or `"people"`.
    pub fn hits(&self, key: &str) -> usize {
        self.hits
            .lock()
            .expect("hits lock")
            .get(key)
            .copied()
            .unwrap_or(0)
    }
}

async fn people_listing(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.record("people");
    let base = &state.base;

    if let Some(term) = params.get("search") {
        let needle = term.to_lowercase();
        let results: Vec<_> = fixtures::people_page_one(base)
            .into_iter()
            .chain(fixtures::people_page_two(base))
            .filter(|person| {
                person["name"]
                    .as_str()
                    .is_some_and(|name| name.to_lowercase().contains(&needle))
            })
            .collect();
        return Json(json!({
            "count": results.len(),
            "next": null,
            "previous": null,
            "results": results
        }))
        .into_response();
    }

    let page: u32 = params
        .get("page")
        .map_or(1, |raw| raw.parse().unwrap_or(1));
    match page {
        1 => Json(json!({
            "count": fixtures::PEOPLE_COUNT,
            "next": format!("{base}/people/?page=2"),
            "previous": null,
            "results": fixtures::people_page_one(base)
        }))
        .into_response(),
        2 => Json(json!({
            "count": fixtures::PEOPLE_COUNT,
            "next": null,
            "previous": format!("{base}/people/?page=1"),
            "results": fixtures::people_page_two(base)
        }))
        .into_response(),
        _ => not_found(),
    }
}

async fn person_detail(State(state): State<StubState>, Path(id): Path<u64>) -> Response {
    state.record(&format!("people/{id}"));
    fixtures::person_by_id(&state.base, id).map_or_else(not_found, |person| {
        Json(person).into_response()
    })
}

async fn planet_detail(State(state): State<StubState>, Path(id): Path<u64>) -> Response {
    state.record(&format!("planets/{id}"));
    fixtures::planet_by_id(&state.base, id).map_or_else(not_found, |planet| {
        Json(planet).into_response()
    })
}

async fn species_detail(State(state): State<StubState>, Path(id): Path<u64>) -> Response {
    state.record(&format!("species/{id}"));
    fixtures::species_by_id(&state.base, id).map_or_else(not_found, |species| {
        Json(species).into_response()
    })
}

async fn planets_listing(State(state): State<StubState>) -> Response {
    state.record("planets");
    let results = fixtures::all_planets(&state.base);
    Json(json!({
        "count": results.len(),
        "next": null,
        "previous": null,
        "results": results
    }))
    .into_response()
}

async fn species_listing(State(state): State<StubState>) -> Response {
    state.record("species");
    let results = fixtures::all_species(&state.base);
    Json(json!({
        "count": results.len(),
        "next": null,
        "previous": null,
        "results": results
    }))
    .into_response()
}

async fn films_listing(State(state): State<StubState>) -> Response {
    state.record("films");
    let results = fixtures::all_films(&state.base);
    Json(json!({
        "count": results.len(),
        "next": null,
        "previous": null,
        "results": results
    }))
    .into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found"}))).into_response()
}

// =============================================================================
// Application under test
// =============================================================================

/// A running application instance wired to its own stub catalog.
///
/// The HTTP client holds cookies and does not follow redirects, so tests
/// assert on the redirect responses themselves.
pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    pub catalog: StubCatalog,
}

impl TestApp {
    /// Spawn a stub catalog and the application server on ephemeral ports.
    pub async fn spawn() -> Self {
        let catalog = StubCatalog::spawn().await;

        let config = WebConfig {
            host: "127.0.0.1".parse().expect("loopback addr"),
            port: 0,
            base_url: "http://localhost".to_owned(),
            session_secret: SecretString::from("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6d"),
            catalog: CatalogConfig {
                base_url: catalog.base_url.clone(),
            },
            credentials: CredentialConfig {
                username: TEST_USERNAME.to_owned(),
                password_hash: SecretString::from(hash_password(TEST_PASSWORD)),
            },
            sentry_dsn: None,
            sentry_environment: None,
        };

        let router = holocron_web::app::build(config);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind app listener");
        let addr = listener.local_addr().expect("app local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("app serve");
        });

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("build http client");

        Self {
            base_url: format!("http://{addr}"),
            client,
            catalog,
        }
    }

    /// GET a path, returning the raw response.
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .expect("request failed")
    }

    /// GET a path and return the body, asserting a 200.
    pub async fn get_text(&self, path: &str) -> String {
        let response = self.get(path).await;
        assert_eq!(
            response.status(),
            StatusCode::OK,
            "unexpected status for {path}"
        );
        response.text().await.expect("read body")
    }

    /// POST the login form with arbitrary credentials.
    pub async fn post_login(&self, username: &str, password: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/login", self.base_url))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("login request failed")
    }

    /// Log in with the accepted demo credentials, asserting the redirect.
    pub async fn login(&self) {
        let response = self.post_login(TEST_USERNAME, TEST_PASSWORD).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(header(&response, "location"), "/characters");
    }

    /// POST to the logout endpoint.
    pub async fn logout(&self) -> reqwest::Response {
        self.client
            .post(format!("{}/logout", self.base_url))
            .send()
            .await
            .expect("logout request failed")
    }
}

/// Read a response header as a string, empty when absent.
pub fn header(response: &reqwest::Response, name: &str) -> String {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

/// Hash a password with argon2 defaults, as the server does at startup.
fn hash_password(password: &str) -> String {
    use argon2::Argon2;
    use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};

    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .expect("hash password")
        .to_string()
}
