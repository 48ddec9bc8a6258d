use std::fmt;

use crate::config::Config;
use crate::resource::Resource;

/// Header set for one outbound call.
///
/// Built fresh per request from the immutable [`Config`]. The original
/// deployment this gateway replaced mutated a shared header map per request,
/// which lets one request's `BaseDeDatos` bleed into another's under
/// concurrency; a fresh value per call closes that off.
pub struct OutboundHeaders {
    pub client_id: String,
    pub authorization: String,
    pub base_de_datos: String,
}

/// Compose the outbound header set for a request.
///
/// Tenant resolution: sellers take the caller's override when it is present
/// and non-empty, falling back to the configured seller default. Employees
/// always get the configured employee default; any override is ignored.
pub fn compose(config: &Config, resource: Resource, tenant_override: Option<&str>) -> OutboundHeaders {
    let base_de_datos = if resource.allows_tenant_override() {
        tenant_override
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| config.sellers_database.clone())
    } else {
        config.employees_database.clone()
    };

    OutboundHeaders {
        client_id: config.client_id.clone(),
        authorization: config.authorization.clone(),
        base_de_datos,
    }
}

// The authorization token must never reach the logs, even through a stray
// `{:?}` in a tracing field.
impl fmt::Debug for OutboundHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutboundHeaders")
            .field("client_id", &self.client_id)
            .field("authorization", &"<redacted>")
            .field("base_de_datos", &self.base_de_datos)
            .finish()
    }
}
