// ============================================================================
// Request Pipeline
// ============================================================================
//
// The one generalized pipeline behind every route:
//
//   Route -> Validate -> Compose Headers -> Dispatch -> Normalize
//
// Validation short-circuits before any outbound call. Each execution is
// independent and stateless; the only shared inputs are the immutable config
// and the pooled upstream client held by AppContext.
//
// ============================================================================

use axum::http::StatusCode;
use serde_json::{json, Value};
use tracing::{error, warn};

use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::headers;
use crate::resource::{upstream_url, Operation, Resource};
use crate::upstream::UpstreamOutcome;

/// A parsed inbound request, independent of the HTTP framework.
#[derive(Debug)]
pub struct InboundRequest {
    pub resource: Resource,
    pub operation: Operation,
    pub id: Option<String>,
    pub tenant_override: Option<String>,
    pub body: Option<Value>,
}

/// Run one request through the full pipeline.
pub async fn handle(ctx: &AppContext, request: InboundRequest) -> AppResult<(StatusCode, Value)> {
    validate(&request)?;

    let url = upstream_url(
        &ctx.config.base_url,
        request.resource,
        request.operation,
        request.id.as_deref(),
    );
    let headers = headers::compose(&ctx.config, request.resource, request.tenant_override.as_deref());

    let outcome = ctx
        .upstream
        .dispatch(
            request.operation.http_method(),
            &url,
            &headers,
            request.body.as_ref(),
        )
        .await;

    normalize(request.resource, request.operation, outcome)
}

/// Reject invalid requests before any network round-trip is spent on them.
fn validate(request: &InboundRequest) -> AppResult<()> {
    if request.operation.requires_id()
        && request.id.as_deref().map_or(true, str::is_empty)
    {
        warn!(
            resource = ?request.resource,
            operation = ?request.operation,
            "request rejected: missing 'id'"
        );
        return Err(AppError::MissingIdentifier);
    }

    // Schema validation is the upstream's job; only the body's presence is
    // checked here.
    if request.operation == Operation::Create && request.body.is_none() {
        return Err(AppError::MissingBody);
    }

    if request.operation == Operation::List && request.resource == Resource::Employee {
        return Err(AppError::UnsupportedOperation);
    }

    Ok(())
}

/// Shape the upstream outcome into the gateway's outward contract.
///
/// Well-formed upstream bodies are relayed verbatim with their original
/// status, including upstream 4xx/5xx. DELETE is the exception: a 200/204
/// becomes the fixed acknowledgment body, and an undecodable error body
/// degrades to `{"error": raw}` instead of a gateway-level failure.
fn normalize(
    resource: Resource,
    operation: Operation,
    outcome: UpstreamOutcome,
) -> AppResult<(StatusCode, Value)> {
    match outcome {
        UpstreamOutcome::Success { status, body } => {
            let status = relay_status(status);
            if operation == Operation::Delete && delete_succeeded(status) {
                Ok((status, json!({ "message": resource.delete_ack() })))
            } else {
                Ok((status, body))
            }
        }
        UpstreamOutcome::MalformedBody { status, raw } => {
            let status = relay_status(status);
            if operation == Operation::Delete {
                if delete_succeeded(status) {
                    // 204 bodies are empty by definition, so DELETE success
                    // routinely lands here rather than in Success.
                    Ok((status, json!({ "message": resource.delete_ack() })))
                } else {
                    Ok((status, json!({ "error": raw })))
                }
            } else {
                error!(status = status.as_u16(), "upstream returned a non-JSON body");
                Err(AppError::MalformedUpstreamBody)
            }
        }
        UpstreamOutcome::TransportFailure { reason } => {
            error!(reason = %reason, "upstream unreachable");
            Err(AppError::Upstream { reason })
        }
    }
}

fn delete_succeeded(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::NO_CONTENT
}

fn relay_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
}
