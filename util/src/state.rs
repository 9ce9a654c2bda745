//! Application state container shared across Axum route handlers.
//!
//! Holds the database connection pool opened once at start-up. It is cloned into
//! every handler through Axum's `State<T>` extractor; there is no global handle.

use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` around an already-open SeaORM connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
