use std::fmt;

use async_trait::async_trait;

use super::{CollectionSummary, LogEntry, RecordSummary, SettingsSnapshot};

/// Errors that can occur while talking to the backend store.
#[derive(Debug, Clone)]
pub enum BackendError {
    /// The store has no schema tables yet (migrations never ran).
    /// Surfaced to the user with setup instructions instead of raw SQL noise.
    Uninitialized,
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The API returned an error response.
    Api { status: u16, message: String },
    /// Failed to parse the API's response body.
    Parse(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Uninitialized => write!(f, "storage uninitialized (no such table)"),
            BackendError::Network(msg) => write!(f, "network error: {msg}"),
            BackendError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            BackendError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for BackendError {}

/// The admin surface of the data store, as this console consumes it.
///
/// Implementations are shared across concurrently launched operations
/// (`Arc<dyn Backend>`), so they must be safe for concurrent access and
/// hold no per-call state.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Returns a short name for logging.
    fn name(&self) -> &str;

    /// Lists every schema collection.
    async fn list_collections(&self) -> Result<Vec<CollectionSummary>, BackendError>;

    /// Lists the records of one collection by name.
    async fn list_records(&self, collection: &str) -> Result<Vec<RecordSummary>, BackendError>;

    /// Lists the store's application logs.
    async fn list_logs(&self) -> Result<Vec<LogEntry>, BackendError>;

    /// Reads the current settings block.
    async fn current_settings(&self) -> Result<SettingsSnapshot, BackendError>;

    /// Writes a full backup to `destination` on the backend host.
    async fn create_backup(&self, destination: &str) -> Result<(), BackendError>;
}
