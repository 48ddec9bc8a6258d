use anyhow::Result;

// ============================================================================
// Configuration Constants
// ============================================================================

const DEFAULT_PORT: u16 = 8080;

// Upstream calls must be bounded: an unbounded call would pin a request task
// for as long as the upstream stalls.
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Configuration Structure
// ============================================================================

/// Process-wide configuration, loaded once at startup and never mutated.
///
/// The credential fields (`client_id`, `authorization`) travel in every
/// outbound header set and must never be logged.
#[derive(Clone, Debug)]
pub struct Config {
    /// Value for the upstream `IdCliente` header
    pub client_id: String,
    /// Value for the upstream `Authorization` header
    pub authorization: String,
    /// Base URL of the upstream ERP API, without trailing slash
    pub base_url: String,
    /// Default `BaseDeDatos` partition for employee operations
    pub employees_database: String,
    /// Default `BaseDeDatos` partition for seller operations
    pub sellers_database: String,
    /// Port the gateway listens on
    pub port: u16,
    /// Request timeout for upstream calls (seconds)
    pub upstream_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client_id: std::env::var("ID_CLIENTE")?,
            authorization: std::env::var("AUTHORIZATION")?,
            base_url: std::env::var("BASE_URL")?
                .trim_end_matches('/')
                .to_string(),
            employees_database: std::env::var("BASE_DE_DATOS_EMPLEADOS")?,
            sellers_database: std::env::var("BASE_DE_DATOS_VENDEDORES")?,
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            upstream_timeout_secs: std::env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        })
    }
}
