use std::sync::Arc;

use crate::profile::ProfileSource;
use crate::render::PageSettings;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable profile lookup. Default: StaticProfileSource. Swap via PROFILE_SOURCE env.
    pub profiles: Arc<dyn ProfileSource>,
    /// App name and image base used by every rendered page.
    pub page_settings: PageSettings,
}
