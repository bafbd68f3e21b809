use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::document::EditorSession;
use crate::llm_client::TextEnhancer;
use crate::persistence::SnapshotStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one editing session. Every mutation holds the lock for its full duration.
    pub session: Arc<Mutex<EditorSession>>,
    /// Pluggable enhancer. Default: GeminiClient.
    pub enhancer: Arc<dyn TextEnhancer>,
    pub snapshots: SnapshotStore,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, enhancer: Arc<dyn TextEnhancer>) -> Self {
        Self {
            session: Arc::new(Mutex::new(EditorSession::new(config.default_language))),
            enhancer,
            snapshots: SnapshotStore::new(config.snapshot_path.clone()),
            config,
        }
    }
}
