// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Foreground sync worker.

use std::io::BufRead;
use std::path::Path;

use tracing::{info, warn};

use super::{device_id, runtime};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::sync::{CommitQueue, SyncContext};

/// Start the commit queue, feed it from stdin or wait for Ctrl-C, then stop.
pub fn run(home: &Path, config: &Config, stdin: bool, device: Option<String>) -> Result<()> {
    // Resolve the device before spawning anything.
    let device = if stdin {
        Some(device_id(device, config)?)
    } else {
        None
    };

    let ctx = SyncContext::from_config(home, config)?;
    let mut queue = CommitQueue::start(ctx)?;
    info!(stdin, "commit queue running");

    let fed = match device {
        Some(device) => feed_from_stdin(&queue, &device),
        None => wait_for_interrupt(),
    };

    // Stop even when feeding failed so the worker is never left behind.
    let stopped = queue.stop();
    fed?;
    stopped?;

    println!("Stopped: {}", queue.status_string());
    println!("Pending: {}", queue.pending()?);
    Ok(())
}

fn feed_from_stdin(queue: &CommitQueue, device: &str) -> Result<()> {
    let stdin = std::io::stdin();
    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        match parse_line(line_no, &line) {
            Ok(None) => {}
            Ok(Some((location, delta, item_id))) => {
                let commit = queue.submit_commit(device, &location, delta, item_id)?;
                println!("Queued: {}", commit);
            }
            Err(e) => {
                warn!(line = line_no, error = %e, "skipping input line");
                eprintln!("warning: {}", e);
            }
        }
    }
    Ok(())
}

fn wait_for_interrupt() -> Result<()> {
    println!("Syncing; press Ctrl-C to stop");
    runtime()?.block_on(tokio::signal::ctrl_c())?;
    Ok(())
}

/// Parse `<location> <delta> <item_id>`.
///
/// Returns `None` for blank lines and `#` comments.
pub(crate) fn parse_line(line_no: usize, line: &str) -> Result<Option<(String, i64, i64)>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    let [location, delta, item_id] = fields.as_slice() else {
        return Err(Error::ParseLineError {
            line: line_no,
            reason: format!(
                "expected '<location> <delta> <item_id>', got {} field(s)",
                fields.len()
            ),
        });
    };

    let delta: i64 = delta.parse().map_err(|_| Error::ParseLineError {
        line: line_no,
        reason: format!("invalid delta '{}'", delta),
    })?;
    let item_id: i64 = item_id.parse().map_err(|_| Error::ParseLineError {
        line: line_no,
        reason: format!("invalid item id '{}'", item_id),
    })?;

    Ok(Some((location.to_string(), delta, item_id)))
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
