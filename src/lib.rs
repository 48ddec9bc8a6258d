//! Credential-injecting HTTP gateway for the ERP upstream API.
//!
//! Exposes the employee and seller collections and forwards each request to
//! the upstream, attaching static credentials and a per-request `BaseDeDatos`
//! tenant selector the caller never supplies directly. Stateless: every
//! request is an independent Route -> Validate -> Compose -> Dispatch ->
//! Normalize pipeline.

pub mod config;
pub mod context;
pub mod error;
pub mod headers;
pub mod pipeline;
pub mod resource;
pub mod routes;
pub mod upstream;

pub use config::Config;
pub use context::AppContext;
pub use error::{AppError, AppResult};
pub use routes::create_router;
pub use upstream::{UpstreamClient, UpstreamOutcome};
