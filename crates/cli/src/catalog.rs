// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog refresh with offline fallback.

use std::path::Path;

use tracing::{info, warn};
use wms_core::Catalog;

use crate::error::{Error, Result};
use crate::remote::{RemoteResult, RestClient};

/// Where a catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// Fetched from the remote just now.
    Fresh,
    /// Read from the local snapshot after the fetch failed.
    Cached,
}

/// Fetch the catalog and cache it at `path`.
///
/// When the fetch fails the cached snapshot is returned instead.
pub async fn refresh(client: &RestClient, path: &Path) -> Result<(Catalog, CatalogSource)> {
    match fetch(client).await {
        Ok(catalog) => {
            if let Err(e) = catalog.save(path) {
                warn!(path = %path.display(), error = %e, "failed to cache catalog");
            }
            info!(
                items = catalog.items.len(),
                locations = catalog.locations.len(),
                "catalog refreshed"
            );
            Ok((catalog, CatalogSource::Fresh))
        }
        Err(e) => {
            warn!(error = %e, "catalog fetch failed, using cached snapshot");
            cached(path).map(|catalog| (catalog, CatalogSource::Cached))
        }
    }
}

/// Read the cached snapshot without touching the network.
pub fn cached(path: &Path) -> Result<Catalog> {
    Catalog::load(path)?.ok_or_else(|| Error::NoCatalog(path.display().to_string()))
}

async fn fetch(client: &RestClient) -> RemoteResult<Catalog> {
    let items = client.fetch_items().await?;
    let locations = client.fetch_locations().await?;
    Ok(Catalog::new(items, locations))
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
