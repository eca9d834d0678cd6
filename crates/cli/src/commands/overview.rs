// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use wms_core::{Catalog, StockLevel};

use super::runtime;
use crate::cli::OutputFormat;
use crate::config::{self, Config};
use crate::error::Result;
use crate::remote::RestClient;

/// Print current stock levels, with item names from the cached catalog when
/// one is available.
pub fn run(
    home: &Path,
    config: &Config,
    location: Option<String>,
    output: OutputFormat,
) -> Result<()> {
    let client = RestClient::from_config(config.require_remote(home)?)?;
    let levels = runtime()?.block_on(client.fetch_overview(location.as_deref()))?;

    match output {
        OutputFormat::Text => {
            let catalog = Catalog::load(&config::catalog_path(home)).ok().flatten();
            for line in format_levels(&levels, catalog.as_ref()) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&levels)?),
    }
    Ok(())
}

/// One line per row, grouped under each location in the order received.
pub(crate) fn format_levels(levels: &[StockLevel], catalog: Option<&Catalog>) -> Vec<String> {
    if levels.is_empty() {
        return vec!["No stock recorded".to_string()];
    }

    let mut lines = Vec::new();
    let mut current: Option<&str> = None;
    for level in levels {
        if current != Some(level.location.as_str()) {
            lines.push(format!("{}:", level.location));
            current = Some(level.location.as_str());
        }
        let name = catalog
            .and_then(|c| c.item_name(level.item_id))
            .map(|name| format!(" {}", name))
            .unwrap_or_default();
        lines.push(format!(
            "  {:>6}{}  qty {}",
            level.item_id, name, level.current_qty
        ));
    }
    lines
}

#[cfg(test)]
#[path = "overview_tests.rs"]
mod tests;
