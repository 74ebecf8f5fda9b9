//! Gateway configuration.
//!
//! Loaded once at startup from a JSON file and shared read-only afterwards.

use std::fmt;
use std::path::{Path, PathBuf};

use error::ConfigError;
use serde::Deserialize;

/// Default configuration filename
pub const CONFIG_FILENAME: &str = "Configuration.json";

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "GATEWAY_CONFIG";

/// Environment variable overriding the listen address
pub const HTTP_ADDR_ENV: &str = "HTTP_ADDR";

const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";

/// Gateway configuration
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayConfig {
    /// Shared secret used to sign and verify tokens
    #[serde(default)]
    pub jwt_key: String,

    /// HTTP server address
    #[serde(default = "default_http_addr")]
    pub http_addr: String,

    /// Service version
    #[serde(skip, default = "default_version")]
    pub version: String,
}

fn default_http_addr() -> String {
    DEFAULT_HTTP_ADDR.to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl GatewayConfig {
    /// Create a configuration with the given signing secret and defaults elsewhere.
    pub fn new(jwt_key: impl Into<String>) -> Self {
        Self {
            jwt_key: jwt_key.into(),
            http_addr: default_http_addr(),
            version: default_version(),
        }
    }

    /// Read the configuration from a JSON file.
    ///
    /// A missing or empty `jwtKey` is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!("Reading configuration from {}", path.display());

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.jwt_key.is_empty() {
            return Err(ConfigError::MissingKey("jwtKey"));
        }

        Ok(config)
    }

    /// Configuration file path from `GATEWAY_CONFIG`, or the default filename.
    pub fn path_from_env() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
    }

    /// Apply overrides from environment variables
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(addr) = std::env::var(HTTP_ADDR_ENV) {
            self.http_addr = addr;
        }
        self
    }

    /// The signing secret as raw bytes.
    pub fn secret(&self) -> &[u8] {
        self.jwt_key.as_bytes()
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("jwt_key", &"<redacted>")
            .field("http_addr", &self.http_addr)
            .field("version", &self.version)
            .finish()
    }
}
