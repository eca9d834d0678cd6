// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use wms_core::{Catalog, Item};

use super::runtime;
use crate::catalog::{self, CatalogSource};
use crate::cli::OutputFormat;
use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::remote::RestClient;

/// Refresh the catalog (unless offline) and print it, or only the items
/// stocked at `location`.
pub fn run(
    home: &Path,
    config: &Config,
    offline: bool,
    location: Option<String>,
    output: OutputFormat,
) -> Result<()> {
    let path = config::catalog_path(home);

    let (catalog, source) = if offline {
        (catalog::cached(&path)?, CatalogSource::Cached)
    } else {
        let client = RestClient::from_config(config.require_remote(home)?)?;
        runtime()?.block_on(catalog::refresh(&client, &path))?
    };

    let source_name = match source {
        CatalogSource::Fresh => "fresh",
        CatalogSource::Cached => "cached",
    };

    if let Some(location) = location {
        let items = stocked_at(&catalog, &location)?;
        match output {
            OutputFormat::Text => {
                println!("{} ({}):", location, source_name);
                for item in &items {
                    println!("  {:>6}  {}", item.id, item.name);
                }
            }
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "source": source_name,
                    "location": location,
                    "items": items,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
        }
        return Ok(());
    }

    match output {
        OutputFormat::Text => {
            println!(
                "Catalog ({}, fetched {})",
                source_name,
                catalog.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            println!();
            println!("Items:");
            for item in &catalog.items {
                println!("  {:>6}  {}", item.id, item.name);
            }
            println!();
            println!("Locations:");
            for location in &catalog.locations {
                let names: Vec<String> = location
                    .items
                    .iter()
                    .map(|id| match catalog.item_name(*id) {
                        Some(name) => format!("{} ({})", name, id),
                        None => id.to_string(),
                    })
                    .collect();
                println!("  {}: {}", location.location, names.join(", "));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({ "source": source_name, "catalog": catalog });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

/// Items stocked at `location`, named from the catalog where possible.
pub(crate) fn stocked_at(catalog: &Catalog, location: &str) -> Result<Vec<Item>> {
    let ids = catalog
        .items_at(location)
        .ok_or_else(|| Error::UnknownLocation(location.to_string()))?;
    Ok(ids
        .iter()
        .map(|&id| Item {
            id,
            name: catalog.item_name(id).unwrap_or("?").to_string(),
        })
        .collect())
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
