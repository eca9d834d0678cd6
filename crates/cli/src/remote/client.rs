// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! REST client for the remote inventory store.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use wms_core::{Commit, Item, Location, Receipt, RecordedCommit, StockLevel};

use super::{RemoteError, RemoteResult};
use crate::config::RemoteConfig;

/// REST client for commit delivery and catalog fetches.
#[derive(Clone)]
pub struct RestClient {
    http_client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl RestClient {
    /// Create a client for the endpoint at `api_url`.
    ///
    /// Every request is bounded by `timeout`.
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> RemoteResult<Self> {
        let api_url = api_url.into();
        reqwest::Url::parse(&api_url)
            .map_err(|e| RemoteError::InvalidUrl(format!("{}: {}", api_url, e)))?;

        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &RemoteConfig) -> RemoteResult<Self> {
        Self::new(&config.url, &config.api_key, config.request_timeout())
    }

    /// Build the REST API URL for a table.
    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.api_url, table)
    }

    /// Insert one commit and return the id the store assigned to it.
    pub async fn insert_commit(&self, commit: &Commit) -> RemoteResult<Receipt> {
        let url = self.rest_url("commits");

        debug!(item_id = commit.item_id, location = %commit.location, "sending commit");

        let response = self
            .http_client
            .post(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Prefer", "return=representation")
            .json(commit)
            .send()
            .await?;

        let body = Self::check_response(response).await?;
        parse_receipt(&body)
    }

    /// Fetch the item catalog.
    pub async fn fetch_items(&self) -> RemoteResult<Vec<Item>> {
        self.get_table("items").await
    }

    /// Fetch locations and the items stocked at each.
    pub async fn fetch_locations(&self) -> RemoteResult<Vec<Location>> {
        self.get_table("locations").await
    }

    /// Fetch one stored commit by the id the store assigned to it.
    pub async fn fetch_commit(&self, commit_id: i64) -> RemoteResult<Option<RecordedCommit>> {
        let filter = [("commit_id", format!("eq.{}", commit_id))];
        let mut rows: Vec<RecordedCommit> = self.get_rows("commits", &filter).await?;
        if rows.is_empty() {
            return Ok(None);
        }
        Ok(Some(rows.swap_remove(0)))
    }

    /// Fetch current stock levels from the `overview` view.
    ///
    /// With `location`, only rows for that location are returned.
    pub async fn fetch_overview(&self, location: Option<&str>) -> RemoteResult<Vec<StockLevel>> {
        let filter: Vec<(&str, String)> = location
            .map(|loc| ("location", format!("eq.{}", loc)))
            .into_iter()
            .collect();
        self.get_rows("overview", &filter).await
    }

    async fn get_table<T: DeserializeOwned>(&self, table: &str) -> RemoteResult<Vec<T>> {
        self.get_rows(table, &[]).await
    }

    async fn get_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        filter: &[(&str, String)],
    ) -> RemoteResult<Vec<T>> {
        let response = self
            .http_client
            .get(self.rest_url(table))
            .query(filter)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        let body = Self::check_response(response).await?;
        let rows: Vec<T> = serde_json::from_str(&body)
            .map_err(|e| RemoteError::InvalidResponse(format!("{}: {}", table, e)))?;

        debug!(table, rows = rows.len(), "fetched table");
        Ok(rows)
    }

    /// Return the body of a 2xx response, or the status and body otherwise.
    async fn check_response(response: reqwest::Response) -> RemoteResult<String> {
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Extract the receipt from an insert response.
///
/// With `return=representation` the store answers with the inserted rows;
/// the first row must carry `commit_id`.
pub(crate) fn parse_receipt(body: &str) -> RemoteResult<Receipt> {
    let mut rows: Vec<serde_json::Value> = serde_json::from_str(body)
        .map_err(|e| RemoteError::InvalidResponse(format!("expected a JSON array: {}", e)))?;
    if rows.is_empty() {
        return Err(RemoteError::InvalidResponse(
            "no rows in insert response".to_string(),
        ));
    }
    serde_json::from_value(rows.swap_remove(0))
        .map_err(|e| RemoteError::InvalidResponse(format!("missing commit_id: {}", e)))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
