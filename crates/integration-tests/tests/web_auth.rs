//! Integration tests for the login flow and session lifecycle.

use axum::http::StatusCode;
use holocron_integration_tests::{TestApp, header};

// =============================================================================
// Unauthenticated Access
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::spawn().await;
    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.expect("body"), "ok");
}

#[tokio::test]
async fn test_root_redirects_to_characters() {
    let app = TestApp::spawn().await;
    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(header(&response, "location"), "/characters");
}

#[tokio::test]
async fn test_browse_requires_login() {
    let app = TestApp::spawn().await;
    for path in ["/characters", "/characters/grid", "/characters/1"] {
        let response = app.get(path).await;
        assert_eq!(
            response.status(),
            StatusCode::SEE_OTHER,
            "expected redirect for {path}"
        );
        assert_eq!(header(&response, "location"), "/login");
    }
}

#[tokio::test]
async fn test_login_page_renders() {
    let app = TestApp::spawn().await;
    let body = app.get_text("/login").await;
    assert!(body.contains("Log in"));
    assert!(body.contains("name=\"username\""));
    assert!(body.contains("name=\"password\""));
}

// =============================================================================
// Login and Logout
// =============================================================================

#[tokio::test]
async fn test_login_succeeds_and_grants_access() {
    let app = TestApp::spawn().await;
    app.login().await;

    let body = app.get_text("/characters").await;
    assert!(body.contains("Welcome, luke"));
}

#[tokio::test]
async fn test_login_sets_hardened_session_cookie() {
    let app = TestApp::spawn().await;
    let response = app.post_login("luke", "skywalker").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let cookie = header(&response, "set-cookie");
    assert!(cookie.contains("holocron_session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let app = TestApp::spawn().await;
    let response = app.post_login("luke", "vaderwasright").await;

    // The login page re-renders with an error instead of redirecting
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.expect("body");
    assert!(body.contains("Invalid credentials"));

    // And nothing was granted
    let response = app.get("/characters").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_login_rejects_wrong_username() {
    let app = TestApp::spawn().await;
    let response = app.post_login("han", "skywalker").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.expect("body");
    assert!(body.contains("Invalid credentials"));
}

#[tokio::test]
async fn test_login_page_skipped_when_already_authenticated() {
    let app = TestApp::spawn().await;
    app.login().await;

    let response = app.get("/login").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(header(&response, "location"), "/characters");
}

#[tokio::test]
async fn test_logout_drops_the_session() {
    let app = TestApp::spawn().await;
    app.login().await;
    assert_eq!(app.get("/characters").await.status(), StatusCode::OK);

    let response = app.logout().await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(header(&response, "location"), "/login");

    let response = app.get("/characters").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(header(&response, "location"), "/login");
}

// =============================================================================
// Hardening
// =============================================================================

#[tokio::test]
async fn test_login_is_rate_limited() {
    let app = TestApp::spawn().await;

    // The limiter admits a burst of five attempts per client
    for attempt in 1..=5 {
        let response = app.post_login("luke", "wrong").await;
        assert_eq!(
            response.status(),
            StatusCode::OK,
            "attempt {attempt} should pass the limiter"
        );
    }

    let response = app.post_login("luke", "wrong").await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_tampered_session_cookie_is_rejected() {
    let app = TestApp::spawn().await;
    let response = app.post_login("luke", "skywalker").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let value = header(&response, "set-cookie")
        .split(';')
        .next()
        .and_then(|pair| pair.strip_prefix("holocron_session="))
        .expect("session cookie value")
        .to_owned();

    // The genuine cookie grants access
    assert_eq!(app.get("/characters").await.status(), StatusCode::OK);

    // A reworked value fails the signature check and drops to anonymous
    let tampered: String = value.chars().rev().collect();
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("build client");
    let response = client
        .get(format!("{}/characters", app.base_url))
        .header("cookie", format!("holocron_session={tampered}"))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(header(&response, "location"), "/login");
}

#[tokio::test]
async fn test_security_headers_applied() {
    let app = TestApp::spawn().await;
    let response = app.get("/login").await;

    assert_eq!(header(&response, "x-frame-options"), "DENY");
    assert_eq!(header(&response, "x-content-type-options"), "nosniff");
    assert_eq!(header(&response, "referrer-policy"), "no-referrer");
    assert!(header(&response, "content-security-policy").contains("img-src 'self' https://picsum.photos"));
    assert_eq!(header(&response, "cache-control"), "no-store, max-age=0");
}
