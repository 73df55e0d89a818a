use std::sync::Arc;

use backlot_media::MediaStore;
use backlot_upstream::UpstreamApi;

use crate::config::ServerConfig;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Client for the marketplace backend. `None` in seed-only mode.
    pub upstream: Option<Arc<UpstreamApi>>,
    pub media: Arc<dyn MediaStore>,
}
