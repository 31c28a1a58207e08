use std::sync::Arc;

use crate::content::ContentStore;
use crate::navigation::SessionRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Static content and assets, loaded once at startup.
    pub content: Arc<ContentStore>,
    /// Per-browser navigation state.
    pub sessions: SessionRegistry,
}
