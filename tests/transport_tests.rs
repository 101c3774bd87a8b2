//! Integration tests for the request executor.
//!
//! These run against a local mock server and verify the retry budget,
//! terminal-error handling, 429 recovery, and rate-limit header
//! tracking.

use bigcommerce_api::clients::MAX_TRIES;
use bigcommerce_api::{
    AccessToken, Client, Error, HttpClient, HttpError, RateLimitConfig, StoreHash,
};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client {
    Client::with_api_host(
        &server.uri(),
        StoreHash::new("abc123").unwrap(),
        AccessToken::new("test-token").unwrap(),
        None,
    )
    .unwrap()
}

fn brand_body() -> serde_json::Value {
    json!({
        "data": { "id": 1, "name": "Acme" },
        "meta": {}
    })
}

#[tokio::test]
async fn test_server_errors_retry_until_the_budget_runs_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/brands/1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(u64::from(MAX_TRIES))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.v3.get_brand(1).await;

    let Err(Error::Http(HttpError::MaxRetries(error))) = result else {
        panic!("expected MaxRetries, got {result:?}");
    };
    assert_eq!(error.code, 500);
    assert_eq!(error.tries, MAX_TRIES);
    assert_eq!(error.method, "GET");
}

#[tokio::test]
async fn test_client_error_is_terminal_and_preserves_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/brands/7"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_raw(r#"{"title":"Brand was not found"}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.v3.get_brand(7).await;

    let Err(Error::Http(HttpError::Response(error))) = result else {
        panic!("expected Response, got {result:?}");
    };
    assert_eq!(error.code, 404);
    assert!(error.body_text().contains("Brand was not found"));
}

#[tokio::test]
async fn test_rate_limited_request_recovers_on_retry() {
    let server = MockServer::start().await;
    // First attempt gets a 429 with a near-immediate window reset, the
    // retry succeeds.
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/brands/1"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("X-Rate-Limit-Time-Reset-Ms", "50")
                .insert_header("X-Rate-Limit-Time-Window-Ms", "30000")
                .insert_header("X-Rate-Limit-Requests-Left", "0")
                .insert_header("X-Rate-Limit-Requests-Quota", "150"),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/brands/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Rate-Limit-Time-Reset-Ms", "29000")
                .insert_header("X-Rate-Limit-Time-Window-Ms", "30000")
                .insert_header("X-Rate-Limit-Requests-Left", "149")
                .insert_header("X-Rate-Limit-Requests-Quota", "150")
                .set_body_json(brand_body()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let brand = client.v3.get_brand(1).await.unwrap();
    assert_eq!(brand.name, "Acme");

    let status = client.v3.rate_limit().snapshot().unwrap();
    assert_eq!(status.requests_remaining, 149);
}

#[tokio::test]
async fn test_response_headers_update_the_tracker() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/brands/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Rate-Limit-Time-Reset-Ms", "25000")
                .insert_header("X-Rate-Limit-Time-Window-Ms", "30000")
                .insert_header("X-Rate-Limit-Requests-Left", "140")
                .insert_header("X-Rate-Limit-Requests-Quota", "150")
                .set_body_json(brand_body()),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert!(client.v3.rate_limit().snapshot().is_none());

    client.v3.get_brand(1).await.unwrap();

    let status = client.v3.rate_limit().snapshot().unwrap();
    assert_eq!(status.ms_to_reset, 25_000);
    assert_eq!(status.window_size_ms, 30_000);
    assert_eq!(status.requests_remaining, 140);
    assert_eq!(status.requests_quota, 150);

    // The V2 client never sent anything, so its tracker is untouched.
    assert!(client.v2.rate_limit().snapshot().is_none());
}

#[tokio::test]
async fn test_response_without_headers_keeps_the_previous_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/brands/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Rate-Limit-Time-Reset-Ms", "25000")
                .insert_header("X-Rate-Limit-Time-Window-Ms", "30000")
                .insert_header("X-Rate-Limit-Requests-Left", "140")
                .insert_header("X-Rate-Limit-Requests-Quota", "150")
                .set_body_json(brand_body()),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/brands/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(brand_body()))
        .mount(&server)
        .await;

    let client = test_client(&server);
    client.v3.get_brand(1).await.unwrap();
    client.v3.get_brand(1).await.unwrap();

    let status = client.v3.rate_limit().snapshot().unwrap();
    assert_eq!(status.requests_remaining, 140);
    assert_eq!(status.ms_to_reset, 25_000);
}

#[tokio::test]
async fn test_requests_carry_auth_and_content_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/brands/1"))
        .and(header("X-Auth-Token", "test-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(brand_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client.v3.get_brand(1).await.unwrap();
}

#[tokio::test]
async fn test_redirects_are_returned_not_followed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/brands/1"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("Location", format!("{}/elsewhere", server.uri()).as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;
    // The redirect target must never be requested.
    Mock::given(method("GET"))
        .and(path("/elsewhere"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let http = HttpClient::new(
        AccessToken::new("test-token").unwrap(),
        RateLimitConfig::default(),
    );
    let url = format!("{}/stores/abc123/v3/catalog/brands/1", server.uri())
        .parse()
        .unwrap();
    let response = http
        .execute(reqwest::Method::GET, url, None)
        .await
        .unwrap();

    assert_eq!(response.status(), 301);
    assert_eq!(
        response
            .headers()
            .get("Location")
            .and_then(|value| value.to_str().ok()),
        Some(format!("{}/elsewhere", server.uri()).as_str())
    );
}

#[tokio::test]
async fn test_unreachable_server_fails_with_network_error() {
    // Bind a listener to reserve a port, then drop it so connections are
    // refused.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = Client::with_api_host(
        &format!("http://{addr}"),
        StoreHash::new("abc123").unwrap(),
        AccessToken::new("test-token").unwrap(),
        Some(RateLimitConfig {
            enable_wait: false,
            ..RateLimitConfig::default()
        }),
    )
    .unwrap();

    let result = client.v3.get_brand(1).await;
    let Err(Error::Http(HttpError::Network { tries, .. })) = result else {
        panic!("expected Network, got {result:?}");
    };
    assert_eq!(tries, MAX_TRIES);
}
