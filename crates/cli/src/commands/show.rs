// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use super::runtime;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::remote::RestClient;

/// Look up a delivered commit by its remote id.
pub fn run(home: &Path, config: &Config, commit_id: i64, output: OutputFormat) -> Result<()> {
    let client = RestClient::from_config(config.require_remote(home)?)?;
    let recorded = runtime()?
        .block_on(client.fetch_commit(commit_id))?
        .ok_or(Error::CommitNotFound(commit_id))?;

    match output {
        OutputFormat::Text => println!("{}", recorded),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&recorded)?),
    }
    Ok(())
}
