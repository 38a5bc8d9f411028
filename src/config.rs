//! Runtime settings for the server and the terminal client.
//!
//! Values come from, in increasing precedence: built-in defaults, an
//! optional TOML file, `TICTACTOE_*` environment variables (a `.env`
//! file is honoured), and command-line flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings shared by the `serve` and `play` commands.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Address the server binds to.
    #[serde(default = "default_host")]
    host: String,

    /// Port the server listens on.
    #[serde(default = "default_port")]
    port: u16,

    /// Base URL the terminal client connects to.
    #[serde(default = "default_server_url")]
    server_url: String,

    /// Delay between polls while waiting for the opponent.
    #[serde(default = "default_poll_interval_ms")]
    poll_interval_ms: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_server_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_poll_interval_ms() -> u64 {
    1000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            server_url: default_server_url(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Settings {
    /// Loads settings from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses settings from TOML text; missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads settings from an optional file, then applies environment overrides.
    ///
    /// A missing file is not an error; defaults are used instead.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            Some(path) => {
                info!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };
        settings.apply_env(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    /// Applies `TICTACTOE_*` overrides from the given variable lookup.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(host) = var("TICTACTOE_HOST") {
            self.host = host;
        }
        if let Some(port) = var("TICTACTOE_PORT") {
            self.port = port.parse().map_err(|e| {
                ConfigError::new(format!("Invalid TICTACTOE_PORT {:?}: {}", port, e))
            })?;
        }
        if let Some(url) = var("TICTACTOE_SERVER_URL") {
            self.server_url = url;
        }
        if let Some(ms) = var("TICTACTOE_POLL_INTERVAL_MS") {
            self.poll_interval_ms = ms.parse().map_err(|e| {
                ConfigError::new(format!("Invalid TICTACTOE_POLL_INTERVAL_MS {:?}: {}", ms, e))
            })?;
        }
        Ok(())
    }

    /// Overrides the bind host.
    pub fn with_host(mut self, host: Option<String>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        self
    }

    /// Overrides the listening port.
    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// Overrides the server URL used by the client.
    pub fn with_server_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.server_url = url;
        }
        self
    }

    /// Overrides the poll interval.
    pub fn with_poll_interval_ms(mut self, ms: Option<u64>) -> Self {
        if let Some(ms) = ms {
            self.poll_interval_ms = ms;
        }
        self
    }

    /// Poll interval as a duration.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
