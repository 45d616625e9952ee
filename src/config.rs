// Connection settings for the automation software's local control API.
// Persistence is the host's job; this module only defines the shape, its
// documented defaults, and JSON (de)serialization.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// URL scheme for the control API. Plain HTTP is the factory setting of the
/// automation software; HTTPS appears only behind reverse proxies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Http,
    Https,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

/// Where and how to reach the control API.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub protocol: Protocol,
    pub host: String,
    pub port: u16,
    /// API password. Kept out of `Debug` output; an empty string means the
    /// API is unauthenticated.
    pub password: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            protocol: Protocol::Http,
            host: "127.0.0.1".to_string(),
            port: 9000,
            password: String::new(),
        }
    }
}

// Redacts the password so trace output and panics never leak it.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("protocol", &self.protocol)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl ApiConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
