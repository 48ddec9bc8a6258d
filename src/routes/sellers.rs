// ============================================================================
// Sellers Routes
// ============================================================================
//
// Endpoints:
// - GET    /api/sellers?id=...&BaseDeDatos=... - Fetch one seller
// - POST   /api/sellers?BaseDeDatos=...        - Create a seller
// - DELETE /api/sellers?id=...&BaseDeDatos=... - Delete a seller
//
// Sellers may select the BaseDeDatos partition per request; when the query
// parameter is absent the configured default applies.
//
// ============================================================================

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::context::AppContext;
use crate::error::AppError;
use crate::pipeline::{self, InboundRequest};
use crate::resource::{Operation, Resource};

#[derive(Debug, Deserialize)]
pub struct SellerParams {
    pub id: Option<String>,
    #[serde(rename = "BaseDeDatos")]
    pub base_de_datos: Option<String>,
}

/// GET /api/sellers?id=...&BaseDeDatos=...
pub async fn get_seller(
    State(ctx): State<Arc<AppContext>>,
    Query(params): Query<SellerParams>,
) -> Result<impl IntoResponse, AppError> {
    let (status, body) = pipeline::handle(
        &ctx,
        InboundRequest {
            resource: Resource::Seller,
            operation: Operation::GetOne,
            id: params.id,
            tenant_override: params.base_de_datos,
            body: None,
        },
    )
    .await?;
    Ok((status, Json(body)))
}

/// POST /api/sellers?BaseDeDatos=...
pub async fn create_seller(
    State(ctx): State<Arc<AppContext>>,
    Query(params): Query<SellerParams>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let (status, body) = pipeline::handle(
        &ctx,
        InboundRequest {
            resource: Resource::Seller,
            operation: Operation::Create,
            id: None,
            tenant_override: params.base_de_datos,
            body: Some(body),
        },
    )
    .await?;
    Ok((status, Json(body)))
}

/// DELETE /api/sellers?id=...&BaseDeDatos=...
pub async fn delete_seller(
    State(ctx): State<Arc<AppContext>>,
    Query(params): Query<SellerParams>,
) -> Result<impl IntoResponse, AppError> {
    let (status, body) = pipeline::handle(
        &ctx,
        InboundRequest {
            resource: Resource::Seller,
            operation: Operation::Delete,
            id: params.id,
            tenant_override: params.base_de_datos,
            body: None,
        },
    )
    .await?;
    Ok((status, Json(body)))
}
