//! Request dispatch: one HTTP call, status mapping and JSON decoding

use reqwest::{Client, Method, Url};
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use super::urls::redact_api_key;
use crate::constants::RESPONSE_PREVIEW_CHARS;
use crate::error::AppError;

/// Sends one request and decodes the body into a generic JSON tree.
///
/// There is no retry and no caching here: every call is exactly one request,
/// and any failure goes straight back to the caller.
///
/// # Errors
/// * Transport errors (`NetworkTimeout`, `NetworkConnection`, `ApiFetch` and
///   the status-specific variants) when the call fails or the status is not 2xx
/// * Decode errors (`ApiNoData`, `ApiMalformedJson`, `ApiParse`) when the body
///   is not JSON
/// * `ApiReported` when a 2xx body is a mapping carrying an `"error"` key
#[instrument(skip_all, fields(method = %method))]
pub(super) async fn send(client: &Client, method: Method, url: Url) -> Result<Value, AppError> {
    let display_url = redact_api_key(&url);
    info!("Fetching data from URL: {display_url}");

    let allow_empty = method != Method::GET;
    let response = match client.request(method, url).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Request failed for URL {}: {}", display_url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(display_url)
            } else if e.is_connect() {
                AppError::network_connection(display_url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, display_url);

        return Err(match status_code {
            404 => AppError::api_not_found(display_url),
            429 => AppError::api_rate_limit(reason, display_url),
            400..=499 => AppError::api_client_error(status_code, reason, display_url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, display_url),
            _ => AppError::api_server_error(status_code, reason, display_url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", display_url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(RESPONSE_PREVIEW_CHARS).collect();
    debug!("Response text (first {RESPONSE_PREVIEW_CHARS} chars): {preview}");

    let decoded = decode_body(&response_text, &display_url, allow_empty)?;
    check_reported_error(&decoded, &display_url)?;
    Ok(decoded)
}

/// Parses a response body, classifying failures the way the service tends
/// to produce them (empty body, HTML error page, truncated JSON).
pub(super) fn decode_body(text: &str, url: &str, allow_empty: bool) -> Result<Value, AppError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        if allow_empty {
            return Ok(Value::Null);
        }
        warn!("Empty response body from {url}");
        return Err(AppError::api_no_data("Response body is empty", url));
    }

    serde_json::from_str::<Value>(trimmed).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            AppError::api_malformed_json("Response is not valid JSON", url)
        } else {
            AppError::ApiParse(e)
        }
    })
}

/// OpenDota reports some failures as `{"error": "..."}` with a 2xx status
pub(super) fn check_reported_error(value: &Value, url: &str) -> Result<(), AppError> {
    let Some(reported) = value.as_object().and_then(|map| map.get("error")) else {
        return Ok(());
    };

    let message = match reported {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    };
    warn!("API reported an error for {url}: {message}");
    Err(AppError::api_reported(message, url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::{
        create_http_client_with_timeout, create_test_http_client,
    };
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    const URL: &str = "https://api.opendota.com/api/heroes";

    #[test]
    fn test_decode_body_valid_json() {
        let value = decode_body(r#"{"account_id": 1}"#, URL, false).unwrap();
        assert_eq!(value, json!({"account_id": 1}));

        let value = decode_body("[1, 2]", URL, false).unwrap();
        assert_eq!(value, json!([1, 2]));
    }

    #[test]
    fn test_decode_body_empty() {
        let result = decode_body("   ", URL, false);
        assert!(matches!(result, Err(AppError::ApiNoData { .. })));

        assert_eq!(decode_body("", URL, true).unwrap(), Value::Null);
    }

    #[test]
    fn test_decode_body_html_is_malformed() {
        let result = decode_body("<html>Bad gateway</html>", URL, false);
        assert!(matches!(result, Err(AppError::ApiMalformedJson { .. })));
    }

    #[test]
    fn test_decode_body_truncated_json_is_parse_error() {
        let result = decode_body(r#"{"account_id": "#, URL, false);
        assert!(matches!(result, Err(AppError::ApiParse(_))));
    }

    #[test]
    fn test_check_reported_error() {
        assert!(check_reported_error(&json!({"account_id": 1}), URL).is_ok());
        assert!(check_reported_error(&json!([{"error": "x"}]), URL).is_ok());

        let err = check_reported_error(&json!({"error": "Internal Server Error"}), URL).unwrap_err();
        match err {
            AppError::ApiReported { message, url } => {
                assert_eq!(message, "Internal Server Error");
                assert_eq!(url, URL);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    async fn status_error(status: u16) -> AppError {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/heroes"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&mock_server)
            .await;

        let url = Url::parse(&format!("{}/api/heroes", mock_server.uri())).unwrap();
        send(&create_test_http_client(), Method::GET, url)
            .await
            .unwrap_err()
    }

    #[tokio::test]
    async fn test_send_maps_status_codes() {
        assert!(matches!(status_error(404).await, AppError::ApiNotFound { .. }));
        assert!(matches!(status_error(429).await, AppError::ApiRateLimit { .. }));
        assert!(matches!(
            status_error(400).await,
            AppError::ApiClientError { status: 400, .. }
        ));
        assert!(matches!(
            status_error(500).await,
            AppError::ApiServerError { status: 500, .. }
        ));
        assert!(matches!(
            status_error(503).await,
            AppError::ApiServiceUnavailable { status: 503, .. }
        ));
    }

    #[tokio::test]
    async fn test_send_decodes_success_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"postgresUsage": {}})))
            .mount(&mock_server)
            .await;

        let url = Url::parse(&format!("{}/api/health", mock_server.uri())).unwrap();
        let value = send(&create_test_http_client(), Method::GET, url)
            .await
            .unwrap();
        assert_eq!(value, json!({"postgresUsage": {}}));
    }

    #[tokio::test]
    async fn test_send_slow_response_is_timeout() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/live"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([]))
                    .set_delay(std::time::Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let client = create_http_client_with_timeout(1).unwrap();
        let url = Url::parse(&format!("{}/api/live", mock_server.uri())).unwrap();
        let err = send(&client, Method::GET, url).await.unwrap_err();

        match &err {
            AppError::NetworkTimeout { url } => assert!(url.ends_with("/api/live")),
            other => panic!("expected a timeout, got {other:?}"),
        }
        assert!(err.is_transport());
        assert_eq!(err.retry_delay_seconds(), Some(2));
    }

    #[tokio::test]
    async fn test_send_connection_refused() {
        // Nothing listens on port 9 (discard) in the test environment
        let url = Url::parse("http://127.0.0.1:9/api/health").unwrap();
        let err = send(&create_test_http_client(), Method::GET, url)
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }
}
