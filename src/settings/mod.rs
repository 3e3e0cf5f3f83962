//! Global runtime settings, loaded once from an optional TOML file.

use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock, RwLock};

use log::{info, warn};
use serde::Deserialize;

/// Settings structure to hold global configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub listen_address: String,
    pub listen_port: u32,
    /// Timeout for outbound short-link resolution, in seconds.
    pub http_timeout_secs: u64,
    /// Cap on followed redirects during short-link resolution.
    pub http_max_redirects: usize,
    /// Proxy for outbound requests (e.g., "http://127.0.0.1:8080").
    pub proxy: Option<String>,
    /// Upper bound on links converted concurrently within one batch.
    pub max_concurrent_conversions: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            listen_address: "127.0.0.1".to_string(),
            listen_port: 25600,
            http_timeout_secs: 15,
            http_max_redirects: 10,
            proxy: None,
            max_concurrent_conversions: 8,
        }
    }
}

static SETTINGS: LazyLock<RwLock<Arc<Settings>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Settings::default())));

impl Settings {
    /// Current global settings
    pub fn current() -> Arc<Settings> {
        SETTINGS.read().unwrap().clone()
    }

    /// Load settings from a TOML file
    pub fn load_from_file(path: &str) -> Result<Settings, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings file {}: {}", path, e))?;
        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse settings file {}: {}", path, e))
    }
}

/// Replace the global settings
pub fn update_settings(settings: Settings) {
    *SETTINGS.write().unwrap() = Arc::new(settings);
}

/// Initialize global settings, falling back to defaults when no usable
/// config file is given.
pub fn init_settings(path: &str) -> Result<(), String> {
    let settings = if !path.is_empty() && Path::new(path).exists() {
        let settings = Settings::load_from_file(path)?;
        info!("Loaded settings from {}", path);
        settings
    } else {
        if !path.is_empty() {
            warn!("Settings file {} not found, using defaults", path);
        }
        Settings::default()
    };
    update_settings(settings);
    Ok(())
}
