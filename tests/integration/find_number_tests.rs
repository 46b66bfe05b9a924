//! Integration tests for the number search
//!
//! These tests use wiremock to serve home and contact pages and run the full
//! search end-to-end.

use phone_scout::config::{parse_config, Config};
use phone_scout::crawler::{find_number, Coordinator};
use phone_scout::{RegionHint, ScoutError, NOT_FOUND_MESSAGE};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts an HTML page at the given path
async fn mount_page(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!("<html><body>{}</body></html>", body))
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Mounts a page that must never be requested
async fn mount_unreachable(server: &MockServer, page_path: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>+48 600 999 999</p>"))
        .expect(0)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_number_on_home_page() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<p>Welcome</p><p>Tel: +48 22 123 45 67</p><a href="/kontakt">Kontakt</a>"#,
    )
    .await;
    mount_unreachable(&server, "/kontakt").await;

    let output = find_number(&server.uri(), &Config::default()).await.unwrap();
    assert_eq!(output, "+48 22 123 45 67");
}

#[tokio::test]
async fn test_number_on_contact_page() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<p>Welcome to our site</p><a href="/">Home</a><a href="/contact">Contact</a>"#,
    )
    .await;
    mount_page(&server, "/contact", "<p>Call us at +1 555 123 4567</p>").await;

    let output = find_number(&server.uri(), &Config::default()).await.unwrap();
    assert_eq!(output, "+1 555 123 4567");
}

#[tokio::test]
async fn test_trailing_slash_home_url() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="/contact">Contact</a>"#).await;
    mount_page(&server, "/contact", "<span>600 100 200</span>").await;

    let home_url = format!("{}/", server.uri());
    let output = find_number(&home_url, &Config::default()).await.unwrap();
    assert_eq!(output, "600 100 200");
}

#[tokio::test]
async fn test_absolute_contact_link() {
    let server = MockServer::start().await;
    let body = format!(r#"<a href="{}/kontakt">Kontakt</a>"#, server.uri());
    mount_page(&server, "/", &body).await;
    mount_page(&server, "/kontakt", "<p>+49 711 400 40990</p>").await;

    let output = find_number(&server.uri(), &Config::default()).await.unwrap();
    assert_eq!(output, "+49 711 400 40990");
}

#[tokio::test]
async fn test_nothing_found_anywhere() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<p>Welcome</p><a href="/about">About us</a><a href="/shop">Shop</a>"#,
    )
    .await;
    mount_unreachable(&server, "/about").await;
    mount_unreachable(&server, "/shop").await;

    let output = find_number(&server.uri(), &Config::default()).await.unwrap();
    assert_eq!(output, NOT_FOUND_MESSAGE);
    assert_eq!(output, "Number cannot be found");
}

#[tokio::test]
async fn test_contact_page_without_number() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="/contact">Contact</a>"#).await;
    mount_page(&server, "/contact", "<p>Write to us using the form below</p>").await;

    let output = find_number(&server.uri(), &Config::default()).await.unwrap();
    assert_eq!(output, NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn test_only_one_hop_is_made() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="/company">Company</a>"#).await;
    mount_page(&server, "/company", r#"<a href="/contact">Contact</a>"#).await;
    mount_unreachable(&server, "/contact").await;

    let output = find_number(&server.uri(), &Config::default()).await.unwrap();
    assert_eq!(output, NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn test_indicator_priority_picks_kontakt() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<a href="/">Home</a><a href="/contact-us">Contact Us</a><a href="/kontakt">Kontakt</a>"#,
    )
    .await;
    mount_unreachable(&server, "/contact-us").await;
    mount_page(&server, "/kontakt", "<p>+48 600 100 200</p>").await;

    let output = find_number(&server.uri(), &Config::default()).await.unwrap();
    assert_eq!(output, "+48 600 100 200");
}

#[tokio::test]
async fn test_empty_contact_href_skips_same_keyword_links() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<a href="">Contact</a><a href="/form">Contact form</a>"#,
    )
    .await;
    mount_unreachable(&server, "/form").await;

    let output = find_number(&server.uri(), &Config::default()).await.unwrap();
    assert_eq!(output, NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn test_german_pass_follows_url_marker() {
    let server = MockServer::start().await;
    mount_page(&server, "/firma.de", "<p>Telefon 030 1234567</p>").await;
    mount_page(&server, "/firma", "<p>Telefon 030 1234567</p>").await;

    let german = format!("{}/firma.de", server.uri());
    let output = find_number(&german, &Config::default()).await.unwrap();
    assert_eq!(output, "030 1234567");

    let other = format!("{}/firma", server.uri());
    let output = find_number(&other, &Config::default()).await.unwrap();
    assert_eq!(output, NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn test_resolved_contact_url_drives_german_pass() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="/impressum.de">Kontakt</a>"#).await;
    mount_page(&server, "/impressum.de", "<p>Telefon 030 1234567</p>").await;

    let output = find_number(&server.uri(), &Config::default()).await.unwrap();
    assert_eq!(output, "030 1234567");
}

#[tokio::test]
async fn test_coordinator_reports_region() {
    let server = MockServer::start().await;
    mount_page(&server, "/", "<div>Biuro: 22 123 45 67</div>").await;

    let coordinator = Coordinator::new(&Config::default()).unwrap();
    let number = coordinator.find_number(&server.uri()).await.unwrap().unwrap();
    assert_eq!(number.as_str(), "22 123 45 67");
    assert_eq!(number.region(), RegionHint::Poland);
}

#[tokio::test]
async fn test_home_page_error_status_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = find_number(&server.uri(), &Config::default()).await;
    assert!(matches!(result, Err(ScoutError::Status { status: 500, .. })));
}

#[tokio::test]
async fn test_contact_page_error_status_fails() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="/contact">Contact</a>"#).await;
    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = find_number(&server.uri(), &Config::default()).await;
    match result {
        Err(ScoutError::Status { url, status }) => {
            assert_eq!(status, 404);
            assert_eq!(url, format!("{}/contact", server.uri()));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_home_page_timeout_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<p>+48 600 100 200</p>")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = parse_config("[fetcher]\ntimeout-secs = 1\n").unwrap();
    let result = find_number(&server.uri(), &config).await;
    assert!(matches!(result, Err(ScoutError::Timeout { .. })));
}

#[tokio::test]
async fn test_unresolvable_contact_url_fails() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<a href="https://other.invalid/contact">Contact</a>"#,
    )
    .await;

    // The resolver glues both URLs together into an address that cannot be fetched
    let result = find_number(&server.uri(), &Config::default()).await;
    assert!(result.is_err());
}
