// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;
use std::sync::Arc;

use super::runtime;
use crate::config::Config;
use crate::error::Result;
use crate::sync::{SharedWorkerState, SyncContext, SyncError, SyncWorker, TickOutcome};

/// Run a single probe and drain pass.
pub fn run(home: &Path, config: &Config) -> Result<()> {
    let ctx = SyncContext::from_config(home, config)?;
    let store = Arc::clone(&ctx.store);
    let worker = SyncWorker::new(ctx, Arc::new(SharedWorkerState::new()));

    match runtime()?.block_on(worker.tick()) {
        TickOutcome::Offline => {
            println!("Remote unreachable: {}", config.remote_url().unwrap_or("-"));
            println!("Pending: {}", store.len()?);
        }
        TickOutcome::Drained(report) => {
            println!(
                "Delivered: {} of {} ({} retained)",
                report.delivered, report.attempted, report.retained
            );
            println!("Pending: {}", report.remaining);
        }
        TickOutcome::Failed(reason) => return Err(SyncError::DrainFailed(reason).into()),
    }
    Ok(())
}
