// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for wms-core operations.

use thiserror::Error;

/// All possible errors that can occur in wms-core operations.
///
/// Only I/O failures mean a commit was not durably queued. Unparseable
/// queue content is recovered inside [`QueueStore::load`](crate::QueueStore::load)
/// and never reaches the caller as [`Error::Json`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// The queue file exists but does not parse. Only returned by
    /// [`QueueStore::peek`](crate::QueueStore::peek).
    #[error("queue file {path} is unreadable: {reason}")]
    Corrupt { path: String, reason: String },
}

/// A specialized Result type for wms-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
