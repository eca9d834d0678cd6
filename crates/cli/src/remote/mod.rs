// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client for the remote inventory store.
//!
//! The store is a PostgREST-style endpoint exposing `commits`, `items` and
//! `locations` tables and the `overview` view under `<url>/rest/v1/`.

mod client;

#[cfg(test)]
pub(crate) mod test_server;

use std::time::Duration;

pub use client::RestClient;

/// Error type for remote store operations.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// Request could not be sent or the response could not be read.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote answered with a non-success status.
    #[error("remote rejected request ({status}): {body}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The configured URL cannot be used.
    #[error("invalid remote url: {0}")]
    InvalidUrl(String),

    /// No answer within the allowed time.
    #[error("timed out after {0:?}")]
    TimedOut(Duration),
}

/// Result type for remote store operations.
pub type RemoteResult<T> = Result<T, RemoteError>;
