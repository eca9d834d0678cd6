// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::remote::RemoteError;
use crate::sync::SyncError;

/// All possible errors that can occur in the wmsrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{field} is required\n  hint: {hint}")]
    FieldRequired {
        field: &'static str,
        hint: &'static str,
    },

    #[error("line {line}: {reason}")]
    ParseLineError { line: usize, reason: String },

    #[error("no remote configured\n  hint: add a [remote] section with url and api_key to {0}")]
    NoRemote(String),

    #[error("no catalog available at {0}\n  hint: run 'wms catalog' while online to cache one")]
    NoCatalog(String),

    #[error("unknown item '{0}'\n  hint: pass the numeric item id or run 'wms catalog' to refresh names")]
    UnknownItem(String),

    #[error("unknown location '{0}'")]
    UnknownLocation(String),

    #[error("commit {0} not found on the remote")]
    CommitNotFound(i64),

    #[error("already initialized: {0}\n  hint: pass --force to overwrite")]
    AlreadyInitialized(String),

    #[error("queue error: {0}")]
    Queue(#[from] wms_core::Error),

    #[error("remote error: {0}")]
    Remote(#[from] RemoteError),

    #[error("sync error: {0}")]
    Sync(#[from] SyncError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for wmsrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
