//! HTTP fetcher implementation
//!
//! This module handles the HTTP requests made for the home page and the
//! contact page:
//! - Building the HTTP client with the configured user agent and timeout
//! - GET requests returning the response body as text
//! - Error classification (timeout, non-success status, other transport errors)
//!
//! Failures are returned to the caller as they are. Nothing is retried.

use crate::config::FetcherConfig;
use crate::ScoutError;
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetcher configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use phone_scout::config::FetcherConfig;
/// use phone_scout::crawler::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its body as text
///
/// # Errors
///
/// | Condition | Error |
/// |-----------|-------|
/// | Request exceeded the timeout | `ScoutError::Timeout` |
/// | Status outside 2xx | `ScoutError::Status` |
/// | Any other transport or decoding failure | `ScoutError::Http` |
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, ScoutError> {
    tracing::info!("Fetching {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScoutError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|e| classify_error(url, e))?;
    tracing::debug!("Fetched {} bytes from {}", body.len(), url);

    Ok(body)
}

fn classify_error(url: &str, error: reqwest::Error) -> ScoutError {
    if error.is_timeout() {
        ScoutError::Timeout {
            url: url.to_string(),
        }
    } else {
        ScoutError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
