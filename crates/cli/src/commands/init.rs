// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use tracing::info;

use crate::config::{self, Config, RemoteConfig, SyncConfig};
use crate::error::{Error, Result};

/// Write `<home>/config.toml`.
pub fn run(
    home: &Path,
    device: Option<String>,
    url: Option<String>,
    api_key: Option<String>,
    force: bool,
) -> Result<()> {
    let path = config::config_path(home);
    if path.exists() && !force {
        return Err(Error::AlreadyInitialized(path.display().to_string()));
    }

    let config = build_config(device, url, api_key)?;
    config.save(home)?;
    info!(path = %path.display(), remote = config.is_remote_mode(), "config written");

    println!("Initialized wms at {}", home.display());
    if let Some(device) = &config.device_id {
        println!("Device: {}", device);
    }
    match config.remote_url() {
        Some(url) => println!("Remote: {}", url),
        None => println!("Remote: not configured (commits stay queued)"),
    }
    Ok(())
}

pub(crate) fn build_config(
    device: Option<String>,
    url: Option<String>,
    api_key: Option<String>,
) -> Result<Config> {
    let remote = match (url, api_key) {
        (Some(url), Some(api_key)) => {
            let remote = RemoteConfig {
                url,
                api_key,
                request_timeout_secs: RemoteConfig::DEFAULT_REQUEST_TIMEOUT_SECS,
            };
            remote.probe_target(None)?;
            Some(remote)
        }
        (None, None) => None,
        _ => {
            return Err(Error::FieldRequired {
                field: "url and api key",
                hint: "pass both --url and --api-key, or neither for local-only mode",
            })
        }
    };

    Ok(Config {
        device_id: device,
        remote,
        sync: SyncConfig::default(),
    })
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
