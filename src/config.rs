use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    /// JSON dataset to serve. `None` means the bundled catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    /// LISTEN_ADDR defaults to "0.0.0.0:8000"
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("LISTEN_ADDR").ok(),
            std::env::var("CATALOG_PATH").ok(),
        )
    }

    fn from_vars(
        listen_addr: Option<String>,
        catalog_path: Option<String>,
    ) -> Result<Self, ConfigError> {
        let listen_addr = listen_addr
            .unwrap_or_else(|| "0.0.0.0:8000".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("LISTEN_ADDR", "must be a valid socket address"))?;

        let catalog_path = catalog_path.filter(|p| !p.is_empty()).map(PathBuf::from);

        Ok(Config {
            listen_addr,
            catalog_path,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str, &'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid(var, msg) => write!(f, "Invalid value for {}: {}", var, msg),
        }
    }
}

impl std::error::Error for ConfigError {}
