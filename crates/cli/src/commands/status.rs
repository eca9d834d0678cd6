// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use super::open_store;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;

/// Show the pending queue.
///
/// Read-only: an unreadable queue file is reported, not moved aside.
pub fn run(home: &Path, config: &Config, output: OutputFormat) -> Result<()> {
    let store = open_store(home)?;
    let (commits, unreadable) = match store.peek() {
        Ok(commits) => (commits, None),
        Err(wms_core::Error::Corrupt { reason, .. }) => (Vec::new(), Some(reason)),
        Err(e) => return Err(e.into()),
    };

    match output {
        OutputFormat::Text => {
            println!("Queue: {}", store.path().display());
            match &unreadable {
                None => println!("Pending: {}", commits.len()),
                Some(reason) => {
                    println!("Pending: unknown (queue file unreadable: {})", reason);
                    println!("  hint: the next submit or sync moves it aside to <file>.corrupt-<time>");
                }
            }
            match config.remote_url() {
                Some(url) => println!("Remote: {}", url),
                None => println!("Remote: not configured (commits stay queued)"),
            }
            if !commits.is_empty() {
                println!();
                for commit in &commits {
                    println!("  {}", commit);
                }
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "queue": store.path().display().to_string(),
                "pending": unreadable.is_none().then_some(commits.len()),
                "unreadable": unreadable,
                "remote": config.remote_url(),
                "commits": commits,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}
