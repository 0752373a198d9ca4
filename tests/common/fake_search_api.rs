//! Fake search API server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves `GET /api/data/search` with a configurable response
//! and records the query parameters of every request.
//!
//! The fake does not filter: it returns the whole candidate set, so tests
//! can check that the client side re-applies the predicate.
//!
//! # Example
//!
//! ```rust,no_run
//! let api = FakeSearchApi::start().await.unwrap();
//! api.respond_with_records(&dataset_sample()).await;
//! let client = HttpSearchClient::new(&api.base_url(), Duration::from_secs(1))?;
//! ```

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use mdu_core::Record;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// What the next requests get back.
#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: String,
    delay: Duration,
}

struct ApiState {
    canned: Canned,
    /// `(filterType, keyword)` of every request, in arrival order.
    requests: Vec<(String, String)>,
}

/// Handle to the running fake search API server.
pub struct FakeSearchApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeSearchApi {
    /// Start the server on a random port, answering `[]` until told otherwise.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState {
            canned: Canned {
                status: StatusCode::OK,
                body: "[]".to_string(),
                delay: Duration::ZERO,
            },
            requests: Vec::new(),
        }));

        let app = Router::new()
            .route("/api/data/search", get(search))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Base URL for the API (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn respond_with_records(&self, records: &[Record]) {
        self.respond_with(StatusCode::OK, super::builders::to_body(records))
            .await;
    }

    pub async fn respond_with(&self, status: StatusCode, body: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.canned.status = status;
        state.canned.body = body.into();
    }

    /// Hold every response for `delay` before answering.
    pub async fn delay(&self, delay: Duration) {
        self.state.lock().await.canned.delay = delay;
    }

    /// `(filterType, keyword)` pairs received so far.
    pub async fn requests(&self) -> Vec<(String, String)> {
        self.state.lock().await.requests.clone()
    }
}

async fn search(
    State(state): State<Arc<Mutex<ApiState>>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let canned = {
        let mut state = state.lock().await;
        state.requests.push((
            params.get("filterType").cloned().unwrap_or_default(),
            params.get("keyword").cloned().unwrap_or_default(),
        ));
        state.canned.clone()
    };
    if !canned.delay.is_zero() {
        tokio::time::sleep(canned.delay).await;
    }
    (
        canned.status,
        [("content-type", "application/json")],
        canned.body,
    )
}
