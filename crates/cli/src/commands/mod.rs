// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod catalog;
pub mod init;
pub mod overview;
pub mod run;
pub mod show;
pub mod status;
pub mod submit;
pub mod sync;

use std::path::Path;

use wms_core::QueueStore;

use crate::config::{self, Config};
use crate::error::{Error, Result};

/// Open the queue under `home`.
pub fn open_store(home: &Path) -> Result<QueueStore> {
    Ok(QueueStore::open(config::queue_path(home))?)
}

/// Device id from the flag, else from config.
pub fn device_id(flag: Option<String>, config: &Config) -> Result<String> {
    flag.or_else(|| config.device_id.clone())
        .filter(|id| !id.trim().is_empty())
        .ok_or(Error::FieldRequired {
            field: "device id",
            hint: "pass -d <device> or set device_id in config.toml",
        })
}

/// Single-threaded runtime for commands that talk to the remote.
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
