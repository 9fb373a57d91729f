//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.baseview/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BaseviewConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub tick_millis: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    pub base_url: Option<String>,
    pub backup_destination: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BACKEND_BASE_URL: &str = "http://127.0.0.1:8090";
pub const DEFAULT_BACKUP_DESTINATION: &str = "backup.zip";
pub const DEFAULT_TICK_MILLIS: u64 = 100;
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub backend_url: String,
    pub backup_destination: String,
    pub tick_millis: u64,
    pub log_level: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.baseview/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".baseview").join("config.toml"))
}

/// Load config from `~/.baseview/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BaseviewConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<BaseviewConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BaseviewConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(BaseviewConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: BaseviewConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# baseview Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"        # "error", "warn", "info", "debug", "trace"
# tick_millis = 100         # timer tick interval for the busy indicator

# [backend]
# base_url = "http://127.0.0.1:8090"   # Or set BASEVIEW_BACKEND_URL
# backup_destination = "backup.zip"    # Or set BASEVIEW_BACKUP_DEST
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_backend_url` and `cli_log_level` are from CLI flags (None = not specified).
pub fn resolve(
    config: &BaseviewConfig,
    cli_backend_url: Option<&str>,
    cli_log_level: Option<&str>,
) -> ResolvedConfig {
    // Backend URL: CLI → env → config → default
    let backend_url = cli_backend_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("BASEVIEW_BACKEND_URL").ok())
        .or_else(|| config.backend.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BACKEND_BASE_URL.to_string());

    // Backup destination: env → config → default
    let backup_destination = std::env::var("BASEVIEW_BACKUP_DEST")
        .ok()
        .or_else(|| config.backend.backup_destination.clone())
        .unwrap_or_else(|| DEFAULT_BACKUP_DESTINATION.to_string());

    // Log level: CLI → config → default
    let log_level = cli_log_level
        .map(|s| s.to_string())
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    ResolvedConfig {
        backend_url,
        backup_destination,
        tick_millis: config.general.tick_millis.unwrap_or(DEFAULT_TICK_MILLIS),
        log_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = BaseviewConfig::default();
        assert!(config.backend.base_url.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = BaseviewConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.backend_url, DEFAULT_BACKEND_BASE_URL);
        assert_eq!(resolved.backup_destination, DEFAULT_BACKUP_DESTINATION);
        assert_eq!(resolved.tick_millis, DEFAULT_TICK_MILLIS);
        assert_eq!(resolved.log_level, "info");
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = BaseviewConfig {
            general: GeneralConfig {
                log_level: Some("debug".to_string()),
                tick_millis: Some(250),
            },
            backend: BackendConfig {
                base_url: Some("http://10.0.0.2:8090".to_string()),
                backup_destination: Some("nightly.zip".to_string()),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.backend_url, "http://10.0.0.2:8090");
        assert_eq!(resolved.backup_destination, "nightly.zip");
        assert_eq!(resolved.tick_millis, 250);
        assert_eq!(resolved.log_level, "debug");
    }

    #[test]
    fn test_resolve_cli_flags_win() {
        let config = BaseviewConfig {
            backend: BackendConfig {
                base_url: Some("http://from-config:8090".to_string()),
                ..Default::default()
            },
            general: GeneralConfig {
                log_level: Some("warn".to_string()),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, Some("http://from-cli:8090"), Some("trace"));
        assert_eq!(resolved.backend_url, "http://from-cli:8090");
        assert_eq!(resolved.log_level, "trace");
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[backend]
base_url = "http://example:8090"
"#;
        let config: BaseviewConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.backend.base_url.as_deref(),
            Some("http://example:8090")
        );
        assert!(config.backend.backup_destination.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
log_level = "debug"
tick_millis = 80

[backend]
base_url = "http://127.0.0.1:8091"
backup_destination = "snapshot.zip"
"#;
        let config: BaseviewConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("debug"));
        assert_eq!(config.general.tick_millis, Some(80));
        assert_eq!(
            config.backend.backup_destination.as_deref(),
            Some("snapshot.zip")
        );
    }
}
