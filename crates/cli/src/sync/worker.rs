// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The sync worker tick loop.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use wms_core::{Commit, Receipt};

use super::state::{SharedWorkerState, WorkerState};
use super::SyncContext;
use crate::remote::RemoteError;

/// Outcome of submitting one commit.
#[derive(Debug)]
pub enum Delivery {
    /// Acknowledged; the commit leaves the queue.
    Delivered(Receipt),
    /// Not acknowledged; the commit stays queued for the next pass.
    Retained(RemoteError),
}

/// Counts from one drain pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrainReport {
    /// Commits in the snapshot the pass worked from.
    pub attempted: usize,
    pub delivered: usize,
    pub retained: usize,
    /// Queue length after settling, including commits appended mid-pass.
    pub remaining: usize,
}

/// What one tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Probe failed; the queue was not read.
    Offline,
    /// A drain pass ran.
    Drained(DrainReport),
    /// The queue store failed during the pass.
    Failed(String),
}

/// Drains the queue whenever the remote is reachable.
pub struct SyncWorker {
    ctx: SyncContext,
    state: Arc<SharedWorkerState>,
}

impl SyncWorker {
    pub fn new(ctx: SyncContext, state: Arc<SharedWorkerState>) -> Self {
        Self { ctx, state }
    }

    pub fn state(&self) -> &Arc<SharedWorkerState> {
        &self.state
    }

    /// Run ticks until `cancel` fires.
    ///
    /// The first tick starts immediately. Cancellation is observed between
    /// ticks; a pass that has started always completes and settles.
    pub async fn run(&self, cancel: CancellationToken) {
        let interval = self.ctx.settings.check_interval();
        info!(interval = ?interval, "sync worker started");

        while !cancel.is_cancelled() {
            self.tick().await;

            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
            }
        }

        self.state.set(WorkerState::Stopping);
        debug!("sync worker stopping");
        self.state.set(WorkerState::Stopped);
        info!(
            ticks = self.state.ticks(),
            delivered = self.state.delivered(),
            "sync worker stopped"
        );
    }

    /// Probe, then drain if reachable.
    pub async fn tick(&self) -> TickOutcome {
        self.state.record_tick();
        self.state.set(WorkerState::Probing);

        if !self.ctx.probe.is_reachable().await {
            debug!("remote unreachable, skipping drain");
            self.state.set(WorkerState::Idle);
            return TickOutcome::Offline;
        }

        self.state.set(WorkerState::Draining);
        let outcome = match self.drain().await {
            Ok(report) => TickOutcome::Drained(report),
            Err(e) => {
                error!(error = %e, "drain pass failed");
                TickOutcome::Failed(e.to_string())
            }
        };
        self.state.set(WorkerState::Idle);
        outcome
    }

    /// Submit every commit in a snapshot of the queue, in order, then remove
    /// the acknowledged ones from the latest persisted queue.
    ///
    /// One commit failing never stops the others from being attempted.
    pub async fn drain(&self) -> wms_core::Result<DrainReport> {
        let snapshot = self.ctx.store.load()?;
        if snapshot.is_empty() {
            return Ok(DrainReport::default());
        }

        let mut acknowledged: Vec<Commit> = Vec::with_capacity(snapshot.len());
        let mut retained = 0;

        for commit in &snapshot {
            match self.deliver(commit).await {
                Delivery::Delivered(receipt) => {
                    info!(
                        commit_id = receipt.commit_id,
                        item_id = commit.item_id,
                        location = %commit.location,
                        delta = commit.delta,
                        "commit delivered"
                    );
                    acknowledged.push(commit.clone());
                }
                Delivery::Retained(e) => {
                    warn!(
                        item_id = commit.item_id,
                        location = %commit.location,
                        error = %e,
                        "commit retained for retry"
                    );
                    retained += 1;
                }
            }
        }

        // Acknowledged commits already reached the remote. If settling fails
        // they are submitted again next pass.
        let remaining = self.ctx.store.settle(&acknowledged)?;
        self.state.record_delivered(acknowledged.len() as u64);

        let report = DrainReport {
            attempted: snapshot.len(),
            delivered: acknowledged.len(),
            retained,
            remaining,
        };
        debug!(?report, "drain pass complete");
        Ok(report)
    }

    /// Submit one commit, bounded by the configured submit timeout.
    pub async fn deliver(&self, commit: &Commit) -> Delivery {
        let timeout = self.ctx.settings.submit_timeout();
        match tokio::time::timeout(timeout, self.ctx.submitter.submit(commit)).await {
            Ok(Ok(receipt)) => Delivery::Delivered(receipt),
            Ok(Err(e)) => Delivery::Retained(e),
            Err(_) => Delivery::Retained(RemoteError::TimedOut(timeout)),
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
