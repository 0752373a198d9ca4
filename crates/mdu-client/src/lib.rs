//! mdu-client: HTTP adapter for the dataset search API.
//!
//! [`HttpSearchClient`] implements [`mdu_core::SearchApi`] on top of the
//! `hyper-util` legacy client. One request per search:
//!
//! ```text
//! GET {base_url}/api/data/search?filterType=<field>&keyword=<text>
//! Accept: application/json
//! ```
//!
//! The response body must be a JSON array of records. The status code is
//! not inspected: whatever body comes back is parsed, and anything that is
//! not a record array is a [`SearchError::MalformedResponse`].

use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::header::{ACCEPT, USER_AGENT};
use hyper::{Request, Uri};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use mdu_core::api::SEARCH_PATH;
use mdu_core::record::parse_records;
use mdu_core::{FilterField, Record, SearchApi, SearchError};
use std::future::Future;
use std::time::Duration;

pub mod encode;

pub use encode::encode_uri_component;

/// Errors raised while constructing a client. Request-time failures are
/// reported as [`SearchError`] instead.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Build the full request URI for a search.
pub fn search_uri(base_url: &str, filter: FilterField, keyword: &str) -> String {
    format!(
        "{}{}?filterType={}&keyword={}",
        base_url.trim_end_matches('/'),
        SEARCH_PATH,
        encode_uri_component(filter.as_str()),
        encode_uri_component(keyword),
    )
}

/// Search API client over plain HTTP/1.
#[derive(Clone)]
pub struct HttpSearchClient {
    base_url: String,
    timeout: Duration,
    inner: Client<HttpConnector, Empty<Bytes>>,
}

impl HttpSearchClient {
    /// `base_url` is scheme + authority (+ optional path prefix), e.g.
    /// `http://127.0.0.1:8080`. Only `http` is supported.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let invalid = |reason: &str| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: reason.to_string(),
        };
        let uri: Uri = base_url.parse().map_err(|_| invalid("not a URI"))?;
        match uri.scheme_str() {
            Some("http") => {}
            Some(_) => return Err(invalid("only http:// is supported")),
            None => return Err(invalid("missing scheme")),
        }
        if uri.authority().is_none() {
            return Err(invalid("missing host"));
        }
        if uri.query().is_some() {
            return Err(invalid("must not carry a query string"));
        }

        let inner = Client::builder(TokioExecutor::new()).build_http();
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            inner,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, uri: String) -> Result<Vec<Record>, SearchError> {
        let request = Request::get(uri.as_str())
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, concat!("mdu/", env!("CARGO_PKG_VERSION")))
            .body(Empty::<Bytes>::new())
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let response = self
            .inner
            .request(request)
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?
            .to_bytes();
        tracing::debug!(%status, bytes = body.len(), "search response received");

        parse_records(&body)
    }
}

impl SearchApi for HttpSearchClient {
    fn search(
        &self,
        filter: FilterField,
        keyword: &str,
    ) -> impl Future<Output = Result<Vec<Record>, SearchError>> + Send {
        let uri = search_uri(&self.base_url, filter, keyword);
        async move {
            tracing::debug!(%uri, "search request");
            match tokio::time::timeout(self.timeout, self.fetch(uri)).await {
                Ok(outcome) => outcome,
                Err(_) => Err(SearchError::Network(format!(
                    "timed out after {}ms",
                    self.timeout.as_millis()
                ))),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, routing::get, Json, Router};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashMap;
    use tokio::net::TcpListener;

    async fn serve(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn uri_encodes_parameters() {
        assert_eq!(
            search_uri("http://h:1/", FilterField::OperatingSystem, "a&b c"),
            "http://h:1/api/data/search?filterType=Operating%20System&keyword=a%26b%20c"
        );
    }

    #[rstest]
    #[case("https://example.com")]
    #[case("example.com")]
    #[case("http://host/?x=1")]
    #[case("not a url")]
    fn rejects_unsupported_base_urls(#[case] url: &str) {
        assert!(HttpSearchClient::new(url, Duration::from_secs(1)).is_err());
    }

    #[tokio::test]
    async fn sends_filter_and_keyword() {
        let app = Router::new().route(
            "/api/data/search",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(serde_json::json!([{
                    "Device Model": params.get("keyword").cloned().unwrap_or_default(),
                    "filterType": params.get("filterType").cloned().unwrap_or_default(),
                }]))
            }),
        );
        let base = serve(app).await;
        let client = HttpSearchClient::new(&base, Duration::from_secs(5)).unwrap();

        let records = client
            .search(FilterField::DeviceModel, "Pixel 5 & co")
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text("Device Model"), "Pixel 5 & co");
        assert_eq!(records[0].text("filterType"), "Device Model");
    }

    #[tokio::test]
    async fn non_array_body_is_malformed() {
        let app = Router::new().route(
            "/api/data/search",
            get(|| async { Json(serde_json::json!({"error": "boom"})) }),
        );
        let base = serve(app).await;
        let client = HttpSearchClient::new(&base, Duration::from_secs(5)).unwrap();
        let err = client.search(FilterField::Gender, "x").await.unwrap_err();
        assert!(matches!(err, SearchError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn refused_connection_is_network_error() {
        // Bind then drop to get a port nobody listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            HttpSearchClient::new(&format!("http://{addr}"), Duration::from_secs(5)).unwrap();
        let err = client.search(FilterField::Gender, "x").await.unwrap_err();
        assert!(matches!(err, SearchError::Network(_)));
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let app = Router::new().route(
            "/api/data/search",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(serde_json::json!([]))
            }),
        );
        let base = serve(app).await;
        let client = HttpSearchClient::new(&base, Duration::from_millis(50)).unwrap();
        let err = client.search(FilterField::Gender, "x").await.unwrap_err();
        assert_eq!(err, SearchError::Network("timed out after 50ms".into()));
    }
}
