use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Gateway error type.
///
/// Caller errors are reported before any outbound call is made; the two
/// upstream variants are the only cases where the gateway substitutes its own
/// error body, because no sensible upstream payload exists to relay.
///
/// The display strings double as the outward `{"error": ...}` bodies and are
/// kept byte-for-byte compatible with the messages existing API consumers
/// already parse.
#[derive(Error, Debug)]
pub enum AppError {
    /// Single-entity operation invoked without an `id` query parameter
    #[error("Falta el parámetro 'id'")]
    MissingIdentifier,

    /// Create invoked without a request body
    #[error("Falta el cuerpo de la solicitud")]
    MissingBody,

    /// Operation not defined for this resource
    #[error("Operación no soportada")]
    UnsupportedOperation,

    /// Upstream answered with a payload that is not valid JSON
    #[error("Respuesta inválida del servidor externo")]
    MalformedUpstreamBody,

    /// Upstream could not be reached (connect error, DNS failure, timeout)
    #[error("Error inesperado")]
    Upstream { reason: String },
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingIdentifier
            | AppError::MissingBody
            | AppError::UnsupportedOperation => StatusCode::BAD_REQUEST,
            AppError::MalformedUpstreamBody => StatusCode::INTERNAL_SERVER_ERROR,
            // 502 distinguishes gateway-level connectivity failures from
            // upstream-reported 5xx, which are relayed verbatim instead.
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_errors_map_to_400() {
        assert_eq!(AppError::MissingIdentifier.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::MissingBody.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::UnsupportedOperation.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn upstream_errors_map_to_gateway_statuses() {
        assert_eq!(
            AppError::MalformedUpstreamBody.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        let err = AppError::Upstream {
            reason: "connection refused".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        // The outward message never carries the transport reason.
        assert_eq!(err.to_string(), "Error inesperado");
    }
}
