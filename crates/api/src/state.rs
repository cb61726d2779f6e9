use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is an `Arc` internally). Handlers hold
/// no state of their own; everything flows through the pool reference.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: civicdesk_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
