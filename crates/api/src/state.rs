use std::sync::Arc;

use prefab_cloud::ObjectStorage;
use prefab_events::RecoveryNotifier;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc` or is already a handle.
#[derive(Clone)]
pub struct AppState {
    pub pool: prefab_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Where uploaded images go.
    pub storage: Arc<dyn ObjectStorage>,
    /// Delivers password-recovery links.
    pub notifier: Arc<dyn RecoveryNotifier>,
}
