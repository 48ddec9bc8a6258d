// ============================================================================
// Test Utilities
// ============================================================================
//
// - StubUpstream: a real HTTP server on an ephemeral port that records every
//   request it receives and answers with a configurable (status, body) pair.
// - spawn_gateway: boots the gateway on an ephemeral port against a given
//   upstream URL.
//
// ============================================================================

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use erp_gateway::{create_router, AppContext, Config, UpstreamClient};

/// One request as observed by the stub upstream.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub client_id: Option<String>,
    pub authorization: Option<String>,
    pub base_de_datos: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct StubState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    response: Arc<Mutex<(u16, String)>>,
}

/// Stub upstream API recording everything the gateway sends it.
pub struct StubUpstream {
    pub address: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    response: Arc<Mutex<(u16, String)>>,
}

impl StubUpstream {
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        let requests = Arc::new(Mutex::new(Vec::new()));
        let response = Arc::new(Mutex::new((200, "{}".to_string())));

        let state = StubState {
            requests: requests.clone(),
            response: response.clone(),
        };
        let app = Router::new().fallback(record_and_respond).with_state(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            address,
            requests,
            response,
        }
    }

    /// Set the (status, raw body) pair returned to subsequent calls.
    pub fn respond_with(&self, status: u16, body: &str) {
        *self.response.lock().unwrap() = (status, body.to_string());
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .expect("stub upstream received no requests")
            .clone()
    }
}

async fn record_and_respond(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        client_id: header("IdCliente"),
        authorization: header("Authorization"),
        base_de_datos: header("BaseDeDatos"),
        body,
    });

    let (status, body) = state.response.lock().unwrap().clone();
    (
        StatusCode::from_u16(status).unwrap(),
        [("Content-Type", "application/json")],
        body,
    )
}

pub const TEST_CLIENT_ID: &str = "client-77";
pub const TEST_AUTHORIZATION: &str = "Bearer test-token";
pub const EMPLOYEES_DB: &str = "EMPDB";
pub const SELLERS_DB: &str = "DEPOSEVN";

/// Boot the gateway against the given upstream URL; returns its base address.
pub async fn spawn_gateway(upstream_url: &str) -> String {
    let config = Config {
        client_id: TEST_CLIENT_ID.to_string(),
        authorization: TEST_AUTHORIZATION.to_string(),
        base_url: upstream_url.trim_end_matches('/').to_string(),
        employees_database: EMPLOYEES_DB.to_string(),
        sellers_database: SELLERS_DB.to_string(),
        port: 0,
        upstream_timeout_secs: 2,
    };

    let upstream = UpstreamClient::new(config.upstream_timeout_secs).unwrap();
    let app_context = Arc::new(AppContext::new(Arc::new(config), upstream));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, create_router(app_context))
            .await
            .unwrap();
    });

    address
}
