// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cached catalog snapshots.
//!
//! Front ends resolve item names and location contents from the last catalog
//! fetched from the remote store, so lookups keep working while offline.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::jsonl;

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

/// A storage location and the items known to be stocked there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub location: String,
    #[serde(default)]
    pub items: Vec<i64>,
}

/// Current quantity of one item at one location, as summed by the remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub location: String,
    pub item_id: i64,
    pub current_qty: i64,
}

/// Items and locations as of `fetched_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub items: Vec<Item>,
    pub locations: Vec<Location>,
    pub fetched_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(items: Vec<Item>, locations: Vec<Location>) -> Self {
        Catalog {
            items,
            locations,
            fetched_at: Utc::now(),
        }
    }

    /// Name of the item with `id`.
    pub fn item_name(&self, id: i64) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.name.as_str())
    }

    /// Id of the item named `name`, ignoring case and surrounding whitespace.
    pub fn item_id(&self, name: &str) -> Option<i64> {
        let name = name.trim();
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
            .map(|item| item.id)
    }

    /// Items stocked at `location`, or `None` for an unknown location.
    pub fn items_at(&self, location: &str) -> Option<&[i64]> {
        let location = location.trim();
        self.locations
            .iter()
            .find(|loc| loc.location == location)
            .map(|loc| loc.items.as_slice())
    }

    /// Read a saved snapshot. Returns `None` when no snapshot exists.
    pub fn load(path: &Path) -> Result<Option<Catalog>> {
        match std::fs::read(path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the snapshot at `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut contents = serde_json::to_vec_pretty(self)?;
        contents.push(b'\n');
        jsonl::write_atomic(path, &contents)
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
