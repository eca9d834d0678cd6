// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The commit value object.
//!
//! A commit is one inventory adjustment produced on a field device: a signed
//! quantity change for one catalog item at one location. Commits are
//! immutable once created and carry no retry bookkeeping.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single inventory adjustment awaiting delivery to the remote store.
///
/// Every field is required on deserialization, so a persisted record with a
/// missing or mistyped field never becomes a `Commit`. Quantity sanity is the
/// producer's concern; nothing else is validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commit {
    /// Originating device.
    pub device_id: String,
    /// Location code the adjustment applies to.
    pub location: String,
    /// Quantity change: positive adds stock, negative removes it.
    pub delta: i64,
    /// Foreign key into the external item catalog.
    pub item_id: i64,
}

impl Commit {
    pub fn new(
        device_id: impl Into<String>,
        location: impl Into<String>,
        delta: i64,
        item_id: i64,
    ) -> Self {
        Commit {
            device_id: device_id.into(),
            location: location.into(),
            delta,
            item_id,
        }
    }
}

impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:+} × item {} ({})",
            self.location, self.delta, self.item_id, self.device_id
        )
    }
}

/// Acknowledgment returned by the remote store for an inserted commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Identifier assigned by the remote store.
    pub commit_id: i64,
}

/// A commit as stored by the remote, with the id it was assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedCommit {
    pub commit_id: i64,
    #[serde(flatten)]
    pub commit: Commit,
}

impl fmt::Display for RecordedCommit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.commit_id, self.commit)
    }
}

#[cfg(test)]
#[path = "commit_tests.rs"]
mod tests;
