/*
[INPUT]:  YAML configuration file and CAR_API_* environment variables
[OUTPUT]: Parsed client configuration and a ready CarApiClient
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use car_api_adapter::{CarApiClient, ClientConfig, Credentials};
use serde::{Deserialize, Serialize};

pub const ENV_BASE_URL: &str = "CAR_API_BASE_URL";
pub const ENV_TOKEN: &str = "CAR_API_TOKEN";

/// Top-level configuration for the command-line client
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Backend root, including any gateway prefix (e.g. `/dev-api`)
    pub base_url: String,
    /// Login token sent as a bearer credential
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_connect_timeout_ms() -> u64 {
    5_000
}

impl CliConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }

    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_yaml_str(&content).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Resolve configuration: explicit file, then the default file, then
    /// environment only. Environment variables override file values.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Some(Self::from_file(path)?),
            None => match default_config_path() {
                Some(path) if path.is_file() => Some(Self::from_file(&path)?),
                _ => None,
            },
        };

        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            match config.as_mut() {
                Some(config) => config.base_url = base_url,
                None => config = Some(Self::new(base_url)),
            }
        }

        let mut config = config.ok_or_else(|| {
            anyhow!("no configuration found; pass --config or set {ENV_BASE_URL}")
        })?;
        if let Ok(token) = std::env::var(ENV_TOKEN) {
            config.token = Some(token);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            bail!("base_url cannot be empty");
        }
        if self.timeout_ms == 0 {
            bail!("timeout_ms must be positive");
        }
        if self.connect_timeout_ms == 0 {
            bail!("connect_timeout_ms must be positive");
        }
        if matches!(self.token.as_deref(), Some(token) if token.trim().is_empty()) {
            bail!("token cannot be blank");
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_millis(self.timeout_ms),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
        }
    }

    pub fn build_client(&self) -> Result<CarApiClient> {
        self.validate()?;
        let mut client = CarApiClient::with_config(self.client_config(), &self.base_url)
            .context("create API client")?;
        if let Some(token) = &self.token {
            client.set_credentials(Credentials {
                token: token.clone(),
            });
        }
        Ok(client)
    }
}

/// `<config dir>/car-api/client.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("car-api").join("client.yaml"))
}
