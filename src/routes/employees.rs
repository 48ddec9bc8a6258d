// ============================================================================
// Employees Routes
// ============================================================================
//
// Endpoints:
// - GET    /api/employees?id=... - Fetch one employee
// - POST   /api/employees        - Create an employee
// - PUT    /api/employees?id=... - Update an employee
// - DELETE /api/employees?id=... - Delete an employee
//
// Employees always operate against the deployment-configured BaseDeDatos;
// callers cannot select a partition on this resource.
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
pub struct EmployeeParams {
    pub id: Option<String>,
}

/// GET /api/employees?id=...
pub async fn get_employee(
    State(ctx): State<Arc<AppContext>>,
    Query(params): Query<EmployeeParams>,
) -> Result<impl IntoResponse, AppError> {
    let (status, body) = pipeline::handle(
        &ctx,
        InboundRequest {
            resource: Resource::Employee,
            operation: Operation::GetOne,
            id: params.id,
            tenant_override: None,
            body: None,
        },
    )
    .await?;
    Ok((status, Json(body)))
}

/// POST /api/employees
pub async fn create_employee(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let (status, body) = pipeline::handle(
        &ctx,
        InboundRequest {
            resource: Resource::Employee,
            operation: Operation::Create,
            id: None,
            tenant_override: None,
            body: Some(body),
        },
    )
    .await?;
    Ok((status, Json(body)))
}

/// PUT /api/employees?id=...
pub async fn update_employee(
    State(ctx): State<Arc<AppContext>>,
    Query(params): Query<EmployeeParams>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let (status, body) = pipeline::handle(
        &ctx,
        InboundRequest {
            resource: Resource::Employee,
            operation: Operation::Update,
            id: params.id,
            tenant_override: None,
            body: Some(body),
        },
    )
    .await?;
    Ok((status, Json(body)))
}

/// DELETE /api/employees?id=...
pub async fn delete_employee(
    State(ctx): State<Arc<AppContext>>,
    Query(params): Query<EmployeeParams>,
) -> Result<impl IntoResponse, AppError> {
    let (status, body) = pipeline::handle(
        &ctx,
        InboundRequest {
            resource: Resource::Employee,
            operation: Operation::Delete,
            id: params.id,
            tenant_override: None,
            body: None,
        },
    )
    .await?;
    Ok((status, Json(body)))
}
