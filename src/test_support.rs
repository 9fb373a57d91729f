//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::backend::{
    Backend, BackendError, CollectionSummary, LogEntry, RecordSummary, SettingsSnapshot,
};
use crate::core::state::App;

/// Creates a fresh engine state with the default backup destination.
pub fn test_app() -> App {
    App::new("backup.zip".to_string())
}

pub fn collection(name: &str, kind: &str) -> CollectionSummary {
    CollectionSummary {
        name: name.to_string(),
        kind: kind.to_string(),
    }
}

pub fn record(id: &str) -> RecordSummary {
    RecordSummary { id: id.to_string() }
}

pub fn log_entry(level: i64, message: &str) -> LogEntry {
    LogEntry {
        level,
        message: message.to_string(),
    }
}

/// A scripted backend for executor tests: serves canned snapshots, or the
/// configured error from every fallible call.
#[derive(Default)]
pub struct StubBackend {
    pub collections: Vec<CollectionSummary>,
    pub records: Vec<RecordSummary>,
    pub logs: Vec<LogEntry>,
    pub settings: SettingsSnapshot,
    pub fail_with: Option<BackendError>,
}

impl StubBackend {
    pub fn failing(error: BackendError) -> Arc<Self> {
        Arc::new(Self {
            fail_with: Some(error),
            ..Default::default()
        })
    }

    fn check(&self) -> Result<(), BackendError> {
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Backend for StubBackend {
    fn name(&self) -> &str {
        "stub"
    }

    async fn list_collections(&self) -> Result<Vec<CollectionSummary>, BackendError> {
        self.check()?;
        Ok(self.collections.clone())
    }

    async fn list_records(&self, _collection: &str) -> Result<Vec<RecordSummary>, BackendError> {
        self.check()?;
        Ok(self.records.clone())
    }

    async fn list_logs(&self) -> Result<Vec<LogEntry>, BackendError> {
        self.check()?;
        Ok(self.logs.clone())
    }

    async fn current_settings(&self) -> Result<SettingsSnapshot, BackendError> {
        self.check()?;
        Ok(self.settings.clone())
    }

    async fn create_backup(&self, _destination: &str) -> Result<(), BackendError> {
        self.check()
    }
}
