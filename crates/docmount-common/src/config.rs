//! Configuration for docmount

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an explicit configuration file
pub const CONFIG_PATH_ENV: &str = "DOCMOUNT_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Swagger UI mounts
    #[serde(default = "default_mounts")]
    pub mounts: Vec<MountConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            mounts: default_mounts(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Gzip responses when the client accepts it
    #[serde(default = "default_true")]
    pub compression: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            compression: true,
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_true() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "json" or "text"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// A single Swagger UI mount point
///
/// Every UI field defaults to its zero value; the UI substitutes its own
/// defaults at render time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountConfig {
    /// Route prefix, e.g. `/swagger/v1`
    pub path: String,

    /// Registered documentation instance served by this mount
    pub instance_name: String,

    /// Environment variable that disables the mount when set to `true`
    pub disable_env: Option<String>,

    /// URL the UI fetches the document from
    pub url: String,

    /// Page title
    pub title: String,

    pub deep_linking: bool,

    /// `list`, `full` or `none`
    pub doc_expansion: String,

    /// Negative values hide the models section
    pub default_models_expand_depth: i32,

    pub persist_authorization: bool,

    pub oauth2_default_client_id: String,

    pub oauth2_use_pkce: bool,

    pub query_config_enabled: bool,

    pub layout: String,
}

fn default_mounts() -> Vec<MountConfig> {
    ["v1", "v2"]
        .into_iter()
        .map(|version| MountConfig {
            path: format!("/swagger/{}", version),
            instance_name: version.to_string(),
            disable_env: Some("SWAGGER_DISABLE".to_string()),
            ..MountConfig::default()
        })
        .collect()
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment and file
    ///
    /// Falls back to the built-in defaults when no file is found.
    pub fn load() -> crate::Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Self::from_file(Path::new(&path));
        }

        let paths = [
            PathBuf::from("./docmount.toml"),
            PathBuf::from("/etc/docmount/docmount.toml"),
        ];

        for path in paths {
            if path.exists() {
                tracing::debug!("Loading configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        tracing::warn!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Check mount paths
    ///
    /// Several mounts may serve the same instance.
    pub fn validate(&self) -> crate::Result<()> {
        let mut paths = HashSet::new();

        for mount in &self.mounts {
            if !mount.path.starts_with('/') || mount.path.len() < 2 {
                return Err(crate::Error::Config(format!(
                    "Mount path must start with '/' and not be the root: {:?}",
                    mount.path
                )));
            }
            if mount.path.ends_with('/') || mount.path.contains(['*', ':']) {
                return Err(crate::Error::Config(format!(
                    "Mount path must be a plain prefix without a trailing '/': {:?}",
                    mount.path
                )));
            }
            if !paths.insert(mount.path.as_str()) {
                return Err(crate::Error::Config(format!(
                    "Duplicate mount path: {}",
                    mount.path
                )));
            }
        }

        Ok(())
    }
}
