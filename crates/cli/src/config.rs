// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Device configuration management.
//!
//! Configuration is stored in `<home>/config.toml` and includes:
//! - `device_id`: default device identifier stamped on submitted commits
//! - `[remote]`: the REST endpoint commits are delivered to (optional; without
//!   it commits are queued locally and nothing drains)
//! - `[sync]`: sync worker timing

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use wms_core::jsonl;

use crate::env;
use crate::error::{Error, Result};
use crate::remote::{RemoteError, RemoteResult};

const HOME_DIR_NAME: &str = "wms";
const CONFIG_FILE_NAME: &str = "config.toml";
const QUEUE_FILE_NAME: &str = "pending_commits.jsonl";
const CATALOG_FILE_NAME: &str = "catalog.json";
const LOG_FILE_NAME: &str = "wms.log";

/// Device configuration stored in `<home>/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default device identifier for `wms submit` and `wms run`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    /// Remote store configuration (optional - if absent, runs in local-only mode).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,
    /// Sync worker timing.
    #[serde(default)]
    pub sync: SyncConfig,
}

/// Remote store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the REST endpoint, e.g. `https://project.supabase.co`.
    pub url: String,
    /// API key sent as both `apikey` and bearer token.
    pub api_key: String,
    /// Timeout for a single HTTP request in seconds (default: 10).
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Sync worker timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Seconds between worker ticks (default: 5).
    #[serde(default = "default_check_interval_secs")]
    pub check_interval_secs: u64,
    /// Reachability probe timeout in milliseconds (default: 2000).
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
    /// Port to probe. Defaults to the port implied by the remote URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probe_port: Option<u16>,
    /// Upper bound on one commit submission in seconds (default: 15).
    #[serde(default = "default_submit_timeout_secs")]
    pub submit_timeout_secs: u64,
    /// How long `stop` waits for the worker in seconds (default: 15).
    #[serde(default = "default_stop_timeout_secs")]
    pub stop_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    RemoteConfig::DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_check_interval_secs() -> u64 {
    5
}

fn default_probe_timeout_ms() -> u64 {
    2_000
}

fn default_submit_timeout_secs() -> u64 {
    15
}

fn default_stop_timeout_secs() -> u64 {
    15
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            check_interval_secs: default_check_interval_secs(),
            probe_timeout_ms: default_probe_timeout_ms(),
            probe_port: None,
            submit_timeout_secs: default_submit_timeout_secs(),
            stop_timeout_secs: default_stop_timeout_secs(),
        }
    }
}

impl SyncConfig {
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.submit_timeout_secs)
    }

    pub fn stop_timeout(&self) -> Duration {
        Duration::from_secs(self.stop_timeout_secs)
    }

    /// Rejects zero intervals and timeouts.
    ///
    /// A zero tick interval spins the worker against the remote, and a zero
    /// submit timeout expires before any request can complete.
    pub fn validate(&self) -> Result<()> {
        require_positive("sync.check_interval_secs", self.check_interval_secs)?;
        require_positive("sync.probe_timeout_ms", self.probe_timeout_ms)?;
        require_positive("sync.submit_timeout_secs", self.submit_timeout_secs)?;
        require_positive("sync.stop_timeout_secs", self.stop_timeout_secs)
    }
}

fn require_positive(key: &str, value: u64) -> Result<()> {
    if value == 0 {
        return Err(Error::Config(format!("{} must be greater than 0", key)));
    }
    Ok(())
}

impl RemoteConfig {
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Host and port the reachability probe connects to.
    ///
    /// The port comes from `port_override` when given, else from the URL
    /// (explicit port or the scheme's default).
    pub fn probe_target(&self, port_override: Option<u16>) -> RemoteResult<(String, u16)> {
        let url = reqwest::Url::parse(&self.url)
            .map_err(|e| RemoteError::InvalidUrl(format!("{}: {}", self.url, e)))?;
        let host = url
            .host_str()
            .ok_or_else(|| RemoteError::InvalidUrl(format!("{}: no host", self.url)))?;
        let port = port_override
            .or_else(|| url.port_or_known_default())
            .ok_or_else(|| RemoteError::InvalidUrl(format!("{}: no port", self.url)))?;
        Ok((host.to_string(), port))
    }
}

impl Config {
    /// Loads `<home>/config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load(home: &Path) -> Result<Self> {
        let config_path = config_path(home);
        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(Error::Config(format!("failed to read config: {}", e))),
        };
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that parse but cannot work.
    pub fn validate(&self) -> Result<()> {
        if let Some(remote) = &self.remote {
            require_positive("remote.request_timeout_secs", remote.request_timeout_secs)?;
        }
        self.sync.validate()
    }

    /// Returns true if a remote store is configured.
    pub fn is_remote_mode(&self) -> bool {
        self.remote.is_some()
    }

    /// Returns the remote URL if configured.
    pub fn remote_url(&self) -> Option<&str> {
        self.remote.as_ref().map(|r| r.url.as_str())
    }

    /// Returns the remote configuration or a hint on how to add one.
    pub fn require_remote(&self, home: &Path) -> Result<&RemoteConfig> {
        self.remote
            .as_ref()
            .ok_or_else(|| Error::NoRemote(config_path(home).display().to_string()))
    }

    /// Saves the configuration to `<home>/config.toml`.
    ///
    /// The file is replaced atomically, so a crash leaves either the old or
    /// the new configuration.
    pub fn save(&self, home: &Path) -> Result<()> {
        self.validate()?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::create_dir_all(home)?;
        jsonl::write_atomic(&config_path(home), content.as_bytes())?;
        Ok(())
    }
}

/// Resolves the state directory: `-C` flag, then `WMS_HOME`, then the
/// platform data directory.
pub fn resolve_home(flag: Option<&Path>) -> Result<PathBuf> {
    resolve_home_with(flag, env::home_dir(), dirs::data_local_dir())
}

fn resolve_home_with(
    flag: Option<&Path>,
    env_home: Option<PathBuf>,
    data_dir: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = env_home {
        return Ok(dir);
    }
    data_dir
        .map(|dir| dir.join(HOME_DIR_NAME))
        .ok_or_else(|| {
            Error::Config("cannot determine a data directory; set WMS_HOME or pass -C".to_string())
        })
}

pub fn config_path(home: &Path) -> PathBuf {
    home.join(CONFIG_FILE_NAME)
}

pub fn queue_path(home: &Path) -> PathBuf {
    home.join(QUEUE_FILE_NAME)
}

pub fn catalog_path(home: &Path) -> PathBuf {
    home.join(CATALOG_FILE_NAME)
}

pub fn log_path(home: &Path) -> PathBuf {
    home.join(LOG_FILE_NAME)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
