// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::client::DEFAULT_RELAY_URL;
use crate::context::AppContext;
use crate::query::Endpoints;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_PROGRAM_ENDPOINT: &str = "https://www.bizinfo.go.kr/uss/rss/bizinfoApi.do";
pub const DEFAULT_EVENT_ENDPOINT: &str = "https://www.bizinfo.go.kr/uss/rss/bizinfoEventApi.do";
pub const DEFAULT_UPSTREAM_ORIGIN: &str = "https://www.bizinfo.go.kr";

fn default_relay_url() -> String {
    DEFAULT_RELAY_URL.to_string()
}
fn default_program_endpoint() -> String {
    DEFAULT_PROGRAM_ENDPOINT.to_string()
}
fn default_event_endpoint() -> String {
    DEFAULT_EVENT_ENDPOINT.to_string()
}
fn default_upstream_origin() -> String {
    DEFAULT_UPSTREAM_ORIGIN.to_string()
}
fn default_user_agent() -> String {
    format!("bizfinder/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// BizInfo API key. Empty means sample mode.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_relay_url")]
    pub relay_url: String,
    #[serde(default = "default_program_endpoint")]
    pub program_endpoint: String,
    #[serde(default = "default_event_endpoint")]
    pub event_endpoint: String,
    #[serde(default = "default_upstream_origin")]
    pub upstream_origin: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            relay_url: default_relay_url(),
            program_endpoint: default_program_endpoint(),
            event_endpoint: default_event_endpoint(),
            upstream_origin: default_upstream_origin(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            program: self.program_endpoint.clone(),
            event: self.event_endpoint.clone(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Load the configuration from disk using an explicit context.
    /// A missing file is reported as "Config file not found"; see
    /// [`Config::is_missing_config_error`].
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(c) => Ok(c),
            Err(e) if Self::is_missing_config_error(&e) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }

        false
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        atomic_write(&path, toml_str)?;
        Ok(())
    }

    pub fn get_path_string(ctx: &dyn AppContext) -> Result<String> {
        let path = ctx.get_config_file_path()?;
        Ok(path.to_string_lossy().to_string())
    }
}

// Write to a sibling temp file then rename over the target.
fn atomic_write(path: &Path, contents: String) -> Result<()> {
    let tmp = path.with_extension("toml.tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
