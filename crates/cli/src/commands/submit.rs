// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use tracing::info;
use wms_core::Commit;

use super::{device_id, open_store};
use crate::catalog;
use crate::cli::OutputFormat;
use crate::config::{self, Config};
use crate::error::{Error, Result};

/// Queue one adjustment. Never contacts the remote.
#[allow(clippy::too_many_arguments)]
pub fn run(
    home: &Path,
    config: &Config,
    location: String,
    quantity: i64,
    item: String,
    device: Option<String>,
    subtract: bool,
    output: OutputFormat,
) -> Result<()> {
    let device = device_id(device, config)?;
    let item_id = resolve_item(&item, &config::catalog_path(home))?;
    let delta = if subtract { -quantity } else { quantity };
    let commit = Commit::new(device, location, delta, item_id);

    let store = open_store(home)?;
    let pending = store.append(&commit)?;
    info!(item_id, delta, pending, "commit submitted");

    match output {
        OutputFormat::Text => {
            println!("Queued: {}", commit);
            println!("Pending: {}", pending);
        }
        OutputFormat::Json => {
            let json = serde_json::json!({ "commit": commit, "pending": pending });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

/// Item id from a numeric argument, else by name from the cached catalog.
pub(crate) fn resolve_item(item: &str, catalog_path: &Path) -> Result<i64> {
    if let Ok(id) = item.parse::<i64>() {
        return Ok(id);
    }
    catalog::cached(catalog_path)?
        .item_id(item)
        .ok_or_else(|| Error::UnknownItem(item.to_string()))
}

#[cfg(test)]
#[path = "submit_tests.rs"]
mod tests;
