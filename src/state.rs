//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Initialized once during startup and cloned cheaply for each incoming
/// request via axum's state extraction. `DatabaseConnection` is a connection
/// pool, so clones share the pool rather than opening new connections; the
/// pool is acquired per query and never held across a request beyond the
/// query itself.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
