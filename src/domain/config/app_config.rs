//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default listen host (loopback only)
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port
pub const DEFAULT_PORT: u16 = 50053;

/// Default worker pool size for concurrent calls
pub const DEFAULT_WORKERS: usize = 10;

/// Default application name shown on rendered notifications
pub const DEFAULT_APP_NAME: &str = "toastd";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub workers: Option<usize>,
    pub app_name: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            host: Some(DEFAULT_HOST.to_string()),
            port: Some(DEFAULT_PORT),
            workers: Some(DEFAULT_WORKERS),
            app_name: Some(DEFAULT_APP_NAME.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            host: other.host.or(self.host),
            port: other.port.or(self.port),
            workers: other.workers.or(self.workers),
            app_name: other.app_name.or(self.app_name),
        }
    }

    /// Get the host, or the loopback default if not set
    pub fn host_or_default(&self) -> String {
        self.host
            .clone()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
    }

    /// Get the port, or the default if not set
    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Get the worker pool size, or the default if not set.
    /// A zero-sized pool could never serve a call, so zero falls back too.
    pub fn workers_or_default(&self) -> usize {
        self.workers.filter(|&w| w > 0).unwrap_or(DEFAULT_WORKERS)
    }

    /// Get the application name, or the default if not set
    pub fn app_name_or_default(&self) -> String {
        self.app_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
    }

    /// The `host:port` address the server listens on (or a client targets)
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host_or_default(), self.port_or_default())
    }
}
