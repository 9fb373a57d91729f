//! # Backend Boundary
//!
//! Everything the console knows about the data store lives behind the
//! [`Backend`] trait. The engine in `core` never talks to the network;
//! it only consumes the entity snapshots defined here, delivered through
//! completion messages.
//!
//! - [`provider`]: the `Backend` trait and the `BackendError` taxonomy
//! - [`http`]: the reqwest adapter for a PocketBase-compatible REST API

pub mod http;
pub mod provider;

pub use http::{Bootstrap, HttpBackend};
pub use provider::{Backend, BackendError};

use serde::{Deserialize, Serialize};

/// One row per schema collection. Replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CollectionSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One row per record of the selected collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecordSummary {
    pub id: String,
}

/// One application log line as the store reports it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogEntry {
    pub level: i64,
    pub message: String,
}

/// The store's settings block, absent until the first successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSnapshot {
    #[serde(default)]
    pub app_name: String,
    #[serde(default)]
    pub app_url: String,
    #[serde(default)]
    pub hide_controls: bool,
}
