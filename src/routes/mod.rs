// ============================================================================
// Axum Routes Module
// ============================================================================
//
// Structure:
// - mod.rs: router assembly and middleware layering
// - employees.rs: /api/employees handlers
// - sellers.rs: /api/sellers handlers
// - middleware.rs: request logging
//
// ============================================================================

mod employees;
mod middleware;
mod sellers;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::context::AppContext;

/// Create the application router with all routes
pub fn create_router(app_context: Arc<AppContext>) -> Router {
    // The gateway fronts browser clients on other origins; the original
    // deployment allowed any origin and this keeps that contract.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/employees",
            get(employees::get_employee)
                .post(employees::create_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .route(
            "/api/sellers",
            get(sellers::get_seller)
                .post(sellers::create_seller)
                .delete(sellers::delete_seller),
        )
        // Apply middleware (order matters - last added runs first)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(cors)
                .into_inner(),
        )
        .with_state(app_context)
}

async fn health_check() -> &'static str {
    "OK"
}
