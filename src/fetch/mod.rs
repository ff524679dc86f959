//! HTTP fetcher for pages under audit
//!
//! This module handles page retrieval for the analysis pipeline:
//! - Building an HTTP client with a proper user agent
//! - GET requests with redirect following and a fixed timeout
//! - Mapping every network-layer failure to a recoverable error value
//!
//! There is no retry logic: a single failed attempt is terminal for that
//! URL's analysis.

use crate::config::FetchConfig;
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client used for page fetches
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use pagelens::config::FetchConfig;
/// use pagelens::fetch::build_fetch_client;
///
/// let client = build_fetch_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_fetch_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches the raw markup of a page
///
/// Follows redirects (reqwest default policy, up to 10 hops). Any
/// network-layer failure (DNS, connection, timeout, non-success status)
/// is classified into a [`FetchError`]; nothing is raised past this
/// boundary.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(FetchError)` - Classified failure, terminal for this URL
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return Err(classify_request_error(url, &e)),
    };

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| FetchError::Body {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// Classifies a reqwest error into a [`FetchError`]
fn classify_request_error(url: &str, e: &reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if e.is_connect() {
        FetchError::Connect {
            url: url.to_string(),
            message: e.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_build_fetch_client() {
        let client = build_fetch_client(&FetchConfig::default());
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_page_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let client = build_fetch_client(&FetchConfig::default()).unwrap();
        let body = fetch_page(&client, &format!("{}/page", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<html></html>");
    }

    #[tokio::test]
    async fn test_fetch_page_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_fetch_client(&FetchConfig::default()).unwrap();
        let result = fetch_page(&client, &format!("{}/missing", server.uri())).await;
        assert!(matches!(
            result,
            Err(FetchError::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_page_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = build_fetch_client(&FetchConfig::default()).unwrap();
        let result = fetch_page(&client, &format!("{}/broken", server.uri())).await;
        assert!(matches!(
            result,
            Err(FetchError::Status { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_page_connection_refused() {
        // Nothing listens on this port
        let client = build_fetch_client(&FetchConfig::default()).unwrap();
        let result = fetch_page(&client, "http://127.0.0.1:1/page").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_page_follows_redirect() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/old"))
            .respond_with(
                ResponseTemplate::new(301).insert_header("location", "/new"),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moved here"))
            .mount(&server)
            .await;

        let client = build_fetch_client(&FetchConfig::default()).unwrap();
        let body = fetch_page(&client, &format!("{}/old", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "moved here");
    }
}
