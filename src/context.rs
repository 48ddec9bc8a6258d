use std::sync::Arc;

use crate::config::Config;
use crate::upstream::UpstreamClient;

/// Shared application state for all request handlers.
///
/// Both fields are read-only for the process lifetime; requests never share
/// mutable state with each other.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub upstream: UpstreamClient,
}

impl AppContext {
    pub fn new(config: Arc<Config>, upstream: UpstreamClient) -> Self {
        Self { config, upstream }
    }
}
