// ============================================================================
// Upstream Client
// ============================================================================
//
// HTTP client for the upstream ERP API. One pooled reqwest client with a
// fixed request timeout; no retries. Every outcome, including a non-JSON
// body or an unreachable upstream, is reported as a value so the pipeline
// can normalize it.
//
// ============================================================================

use anyhow::Result;
use reqwest::header;
use reqwest::Method;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::headers::OutboundHeaders;

/// Raw result of one upstream call.
#[derive(Debug)]
pub enum UpstreamOutcome {
    /// Upstream answered with a JSON body (any status, including 4xx/5xx)
    Success { status: u16, body: Value },
    /// Upstream answered, but the body is not valid JSON
    MalformedBody { status: u16, raw: String },
    /// The call never produced a response (connect error, DNS, timeout)
    TransportFailure { reason: String },
}

/// Client for outbound calls to the upstream ERP API.
#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
}

impl UpstreamClient {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        // Connection pooling and keep-alive; the timeout bounds every call so
        // an upstream stall cannot hang the caller indefinitely.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .tcp_keepalive(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;

        Ok(Self { client })
    }

    /// Perform one outbound call and classify the result.
    pub async fn dispatch(
        &self,
        method: Method,
        url: &str,
        headers: &OutboundHeaders,
        body: Option<&Value>,
    ) -> UpstreamOutcome {
        let mut request = self
            .client
            .request(method.clone(), url)
            .header(header::ACCEPT, "application/json")
            .header("IdCliente", headers.client_id.as_str())
            .header(header::AUTHORIZATION, headers.authorization.as_str())
            .header(header::CONTENT_TYPE, "application/json")
            .header("BaseDeDatos", headers.base_de_datos.as_str());

        if let Some(body) = body {
            request = request.json(body);
        }

        // Method and URL only. The header set carries the authorization
        // token and must stay out of the logs at every level.
        debug!(method = %method, url = %url, "dispatching upstream request");

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                return UpstreamOutcome::TransportFailure {
                    reason: e.to_string(),
                }
            }
        };

        let status = response.status().as_u16();
        let raw = match response.text().await {
            Ok(raw) => raw,
            Err(e) => {
                return UpstreamOutcome::TransportFailure {
                    reason: e.to_string(),
                }
            }
        };

        debug!(status = status, url = %url, "upstream responded");

        match serde_json::from_str::<Value>(&raw) {
            Ok(body) => UpstreamOutcome::Success { status, body },
            Err(_) => UpstreamOutcome::MalformedBody { status, raw },
        }
    }
}
