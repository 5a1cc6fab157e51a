//! Tests for the HTTP module

use super::*;
use crate::error::Error;
use crate::types::{BackoffType, Localization};
use reqwest::header::HeaderMap;
use std::time::Duration;
use test_case::test_case;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_client() -> HttpClient {
    let config = HttpClientConfig::default()
        .max_retries(2)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(10),
            Duration::from_secs(1),
        )
        .no_rate_limit();
    HttpClient::with_config(config).unwrap()
}

async fn get_json(client: &HttpClient, url: String) -> crate::Result<serde_json::Value> {
    client.get_json(&url, &HeaderMap::new()).await
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.retry, RetryPolicy::default());
    assert_eq!(config.retry.max_retries, 3);
    assert!(config.rate_limit.is_some());
    assert!(config.user_agent.starts_with("Mozilla/5.0"));
}

#[test]
fn test_http_client_config_chaining() {
    let config = HttpClientConfig::default()
        .timeout(Duration::from_secs(60))
        .max_retries(5)
        .backoff(
            BackoffType::Linear,
            Duration::from_millis(200),
            Duration::from_secs(30),
        )
        .user_agent("test-agent/1.0")
        .rate_limit(RateLimiterConfig::new(10, 20));

    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.retry,
        RetryPolicy {
            max_retries: 5,
            initial_backoff: Duration::from_millis(200),
            max_backoff: Duration::from_secs(30),
            backoff_type: BackoffType::Linear,
        }
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
    assert_eq!(config.rate_limit, Some(RateLimiterConfig::new(10, 20)));
}

#[test_case(BackoffType::Constant, 0, 100 ; "constant first")]
#[test_case(BackoffType::Constant, 5, 100 ; "constant later")]
#[test_case(BackoffType::Linear, 1, 200 ; "linear second")]
#[test_case(BackoffType::Linear, 2, 300 ; "linear third")]
#[test_case(BackoffType::Exponential, 1, 200 ; "exponential second")]
#[test_case(BackoffType::Exponential, 2, 400 ; "exponential third")]
#[test_case(BackoffType::Exponential, 10, 500 ; "exponential capped")]
#[test_case(BackoffType::Exponential, 40, 500 ; "exponential saturates")]
fn test_retry_policy_delay(backoff_type: BackoffType, attempt: u32, expected_ms: u64) {
    let policy = RetryPolicy {
        max_retries: 3,
        initial_backoff: Duration::from_millis(100),
        max_backoff: Duration::from_millis(500),
        backoff_type,
    };
    assert_eq!(policy.delay(attempt), Duration::from_millis(expected_ms));
}

// ============================================================================
// Client Tests
// ============================================================================

#[tokio::test]
async fn test_get_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/results"))
        .and(query_param("search_query", "rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": 42
        })))
        .mount(&mock_server)
        .await;

    let data = get_json(
        &fast_client(),
        format!("{}/results?search_query=rust", mock_server.uri()),
    )
    .await
    .unwrap();

    assert_eq!(data["value"], 42);
}

#[tokio::test]
async fn test_get_json_sends_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/secure"))
        .and(header("x-custom", "secret123"))
        .and(header("user-agent", "tubelist-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::with_config(
        HttpClientConfig::default()
            .user_agent("tubelist-test")
            .no_rate_limit(),
    )
    .unwrap();
    let mut headers = HeaderMap::new();
    headers.insert("x-custom", "secret123".parse().unwrap());

    let data = client
        .get_json(&format!("{}/secure", mock_server.uri()), &headers)
        .await
        .unwrap();
    assert!(data.is_array());
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/results"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>captcha</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = get_json(&fast_client(), format!("{}/results", mock_server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.is_structural());
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_404_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = get_json(&fast_client(), format!("{}/missing", mock_server.uri()))
        .await
        .unwrap_err();

    match &err {
        Error::HttpStatus { status, body } => {
            assert_eq!(*status, 404);
            assert_eq!(body, "Not found");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_retry_on_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let data = get_json(&fast_client(), format!("{}/flaky", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(data["ok"], true);
}

#[tokio::test]
async fn test_429_waits_for_retry_after() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/limited"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "1")
                .set_body_string("Rate limited"),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/limited"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let started = std::time::Instant::now();
    let data = get_json(&fast_client(), format!("{}/limited", mock_server.uri()))
        .await
        .unwrap();

    assert!(data.is_object());
    assert!(started.elapsed() >= Duration::from_secs(1));
}

#[tokio::test]
async fn test_429_without_retries_is_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "7"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client =
        HttpClient::with_config(HttpClientConfig::default().max_retries(0).no_rate_limit())
            .unwrap();
    let err = get_json(&client, mock_server.uri()).await.unwrap_err();

    assert!(matches!(
        err,
        Error::RateLimited {
            retry_after_seconds: 7
        }
    ));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_retries_exhausted_returns_last_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/always-fail"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Server error"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let err = get_json(&fast_client(), format!("{}/always-fail", mock_server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}

#[test]
fn test_http_client_default_has_rate_limiter() {
    let client = HttpClient::new().unwrap();
    assert!(client.has_rate_limiter());
    assert!(!fast_client().has_rate_limiter());
    assert!(format!("{client:?}").contains("HttpClient"));
}

// ============================================================================
// Fetcher Tests
// ============================================================================

#[tokio::test]
async fn test_http_fetcher_sends_localization_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/results"))
        .and(header("Accept-Language", "de-AT"))
        .and(header("X-YouTube-Client-Name", "1"))
        .and(header("X-YouTube-Client-Version", "2.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{}, {"response": {}}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::new(fast_client()).with_client_version("2.1");
    let payload = fetcher
        .fetch(
            &format!("{}/results?search_query=x&pbj=1", mock_server.uri()),
            &Localization::new("de", "AT"),
        )
        .await
        .unwrap();

    assert!(payload[1]["response"].is_object());
}

#[tokio::test]
async fn test_http_fetcher_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::new(fast_client());
    let err = fetcher
        .fetch(&format!("{}/results", mock_server.uri()), &Localization::default())
        .await
        .unwrap_err();

    assert!(err.is_transport());
}

#[test]
fn test_http_fetcher_headers() {
    let fetcher = HttpFetcher::new(fast_client());
    let headers = fetcher.headers(&Localization::new("pt", "br")).unwrap();

    assert_eq!(headers["accept-language"], "pt-BR");
    assert_eq!(headers["x-youtube-client-name"], "1");
    assert_eq!(headers["x-youtube-client-version"], DEFAULT_CLIENT_VERSION);
}

#[tokio::test]
async fn test_http_fetcher_rejects_invalid_client_version() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::new(fast_client()).with_client_version("2.0\n");
    let err = fetcher
        .fetch(&mock_server.uri(), &Localization::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidConfigValue { .. }));
}
