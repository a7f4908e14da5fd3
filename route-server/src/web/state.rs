//! Application state for the web layer.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::planner::RoutePlanner;

/// Shared application state.
///
/// The planner is built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Route planner over the loaded network
    pub planner: Arc<RoutePlanner>,

    /// Server settings, including the search limits
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(planner: RoutePlanner, config: ServerConfig) -> Self {
        Self {
            planner: Arc::new(planner),
            config: Arc::new(config),
        }
    }
}
