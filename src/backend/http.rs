//! HTTP adapter for a PocketBase-compatible admin API.
//!
//! Routes used:
//! - `GET  /api/collections`                 → collection list
//! - `GET  /api/collections/{name}/records`  → record list
//! - `GET  /api/logs`                        → log list
//! - `GET  /api/settings`                    → settings block
//! - `POST /api/backups`                     → trigger a backup
//! - `GET  /api/health`                      → bootstrap readiness probe

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use super::{
    Backend, BackendError, CollectionSummary, LogEntry, RecordSummary, SettingsSnapshot,
};

/// Paged list envelope the API wraps every listing in.
#[derive(Deserialize, Debug)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

/// Settings envelope; only the `meta` block matters to the console.
#[derive(Deserialize, Debug)]
struct SettingsResponse {
    meta: SettingsSnapshot,
}

pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Creates an adapter for the API rooted at `base_url`.
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, BackendError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from_body(status.as_u16(), response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))
    }
}

/// Maps a non-2xx response to a `BackendError`, detecting the bare-store
/// case from the error text so the UI can suggest running migrations.
async fn error_from_body(status: u16, response: reqwest::Response) -> BackendError {
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    warn!("backend API error: {status} - {body}");
    if body.contains("no such table") {
        BackendError::Uninitialized
    } else {
        BackendError::Api {
            status,
            message: body,
        }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn list_collections(&self) -> Result<Vec<CollectionSummary>, BackendError> {
        let page: ListResponse<CollectionSummary> = self.get_json("/api/collections").await?;
        info!("fetched {} collections", page.items.len());
        Ok(page.items)
    }

    async fn list_records(&self, collection: &str) -> Result<Vec<RecordSummary>, BackendError> {
        let page: ListResponse<RecordSummary> = self
            .get_json(&format!("/api/collections/{collection}/records"))
            .await?;
        info!("fetched {} records from '{collection}'", page.items.len());
        Ok(page.items)
    }

    async fn list_logs(&self) -> Result<Vec<LogEntry>, BackendError> {
        let page: ListResponse<LogEntry> = self.get_json("/api/logs").await?;
        info!("fetched {} log entries", page.items.len());
        Ok(page.items)
    }

    async fn current_settings(&self) -> Result<SettingsSnapshot, BackendError> {
        let envelope: SettingsResponse = self.get_json("/api/settings").await?;
        Ok(envelope.meta)
    }

    async fn create_backup(&self, destination: &str) -> Result<(), BackendError> {
        let url = format!("{}/api/backups", self.base_url);
        info!("POST {url} (destination: {destination})");

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "name": destination }))
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from_body(status.as_u16(), response).await);
        }
        Ok(())
    }
}

/// Handle for the background readiness probe launched at startup.
///
/// The UI loop never waits on this; it only exists so the probe has an
/// explicit start/stop lifecycle instead of being a fire-and-forget task.
pub struct Bootstrap {
    handle: tokio::task::JoinHandle<()>,
}

impl Bootstrap {
    /// Starts polling `GET /api/health` until the backend answers or the
    /// attempt budget runs out. Progress goes to the log file only.
    pub fn start(base_url: String) -> Self {
        let handle = tokio::spawn(async move {
            let client = reqwest::Client::new();
            let url = format!("{}/api/health", base_url.trim_end_matches('/'));
            for attempt in 1..=30u32 {
                match client.get(&url).send().await {
                    Ok(resp) if resp.status().is_success() => {
                        info!("backend ready after {attempt} probe(s)");
                        return;
                    }
                    Ok(resp) => {
                        debug!("health probe {attempt}: HTTP {}", resp.status());
                    }
                    Err(e) => {
                        debug!("health probe {attempt}: {e}");
                    }
                }
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
            warn!("backend never reported healthy; operations may fail until it is up");
        });
        Self { handle }
    }

    /// Stops the probe if it is still running.
    pub fn stop(&self) {
        self.handle.abort();
    }
}
