/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use songbook_lookup::LookupConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_lookup")]
    pub lookup: LookupSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupSettings {
    /// Base URL of the song details service; required
    #[serde(default)]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `./config.toml` is read when
    /// present. Environment variables override file values, e.g.
    /// `SONGBOOK_LOOKUP__BASE_URL` or `SONGBOOK_SERVER__PORT`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (prefixed with SONGBOOK_)
        settings = settings.add_source(
            config::Environment::with_prefix("SONGBOOK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let base_url = self.lookup.base_url.trim();
        if base_url.is_empty() {
            return Err(ServerError::Config(
                "Lookup base URL is required (set SONGBOOK_LOOKUP__BASE_URL)".to_string(),
            ));
        }

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ServerError::Config(format!(
                "Lookup base URL must start with http:// or https://, got {:?}",
                base_url
            )));
        }

        if self.server.port == 0 {
            return Err(ServerError::Config("Server port must be non-zero".to_string()));
        }

        if self.storage.max_connections == 0 {
            return Err(ServerError::Config(
                "storage.max_connections must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn to_lookup_config(&self) -> LookupConfig {
        LookupConfig::new(self.lookup.base_url.trim()).with_timeouts(
            Duration::from_secs(self.lookup.timeout_secs),
            Duration::from_secs(self.lookup.connect_timeout_secs),
        )
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
        max_connections: default_max_connections(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/songbook.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_lookup() -> LookupSettings {
    LookupSettings {
        base_url: String::new(),
        timeout_secs: default_timeout_secs(),
        connect_timeout_secs: default_connect_timeout_secs(),
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            lookup: default_lookup(),
        }
    }
}
