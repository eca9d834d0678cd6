// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log subscriber setup.
//!
//! Logs go to `<home>/wms.log` so they never interleave with command output.
//! The filter comes from `WMS_LOG`, else `debug` when verbose, else `info`.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::env;

pub(crate) fn setup_logging(log_path: &Path, verbose: bool) {
    let filter = env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(if verbose { "debug" } else { "info" }));

    // Try to open log file, fall back to stderr
    let file = log_path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|()| {
            fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
        });

    // A subscriber may already be installed when embedded in tests.
    let _ = match file {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init(),
        Err(_) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };
}
