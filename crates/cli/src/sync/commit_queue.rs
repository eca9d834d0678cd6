// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Producer-facing queue facade.
//!
//! [`CommitQueue::start`] spawns the sync worker on a dedicated thread with
//! its own single-threaded runtime. Producers call
//! [`CommitQueue::submit_commit`], which only appends to the queue file and
//! never waits on the network.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use wms_core::{Commit, QueueStore};

use super::state::{SharedWorkerState, WorkerState};
use super::worker::SyncWorker;
use super::{SyncContext, SyncError};

const WORKER_THREAD_NAME: &str = "commit-sync";

/// Handle to the commit queue and its background sync worker.
pub struct CommitQueue {
    store: Arc<QueueStore>,
    state: Arc<SharedWorkerState>,
    cancel: CancellationToken,
    /// Receives once the worker loop has exited.
    done_rx: mpsc::Receiver<()>,
    /// Worker thread; `None` once stopped.
    handle: Option<JoinHandle<()>>,
    stop_timeout: Duration,
}

impl CommitQueue {
    /// Start the sync worker for `ctx`.
    pub fn start(ctx: SyncContext) -> Result<Self, SyncError> {
        let store = Arc::clone(&ctx.store);
        let stop_timeout = ctx.settings.stop_timeout();
        let state = Arc::new(SharedWorkerState::new());
        let cancel = CancellationToken::new();
        let (done_tx, done_rx) = mpsc::channel();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let worker = SyncWorker::new(ctx, Arc::clone(&state));
        let worker_cancel = cancel.clone();

        let handle = std::thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || {
                runtime.block_on(worker.run(worker_cancel));
                let _ = done_tx.send(());
            })?;

        Ok(Self {
            store,
            state,
            cancel,
            done_rx,
            handle: Some(handle),
            stop_timeout,
        })
    }

    /// Build a commit and append it durably to the queue.
    ///
    /// Returns once the commit is on disk. An error means it was not queued.
    pub fn submit_commit(
        &self,
        device_id: &str,
        location: &str,
        delta: i64,
        item_id: i64,
    ) -> wms_core::Result<Commit> {
        let commit = Commit::new(device_id, location, delta, item_id);
        let pending = self.store.append(&commit)?;
        info!(item_id, location, delta, pending, "commit submitted");
        Ok(commit)
    }

    /// Number of commits not yet acknowledged.
    pub fn pending(&self) -> wms_core::Result<usize> {
        self.store.len()
    }

    pub fn state(&self) -> WorkerState {
        self.state.get()
    }

    pub fn status_string(&self) -> String {
        self.state.status_string()
    }

    /// Signal the worker to stop and wait for it to exit.
    ///
    /// Waits at most the configured stop timeout. Calling again after a
    /// successful stop is a no-op; after a timeout it waits again.
    pub fn stop(&mut self) -> Result<(), SyncError> {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };

        self.cancel.cancel();
        match self.done_rx.recv_timeout(self.stop_timeout) {
            Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => {
                handle.join().map_err(|_| SyncError::WorkerPanicked)?;
                info!(status = %self.state.status_string(), "commit queue stopped");
                Ok(())
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                warn!(timeout = ?self.stop_timeout, "sync worker did not stop in time");
                self.handle = Some(handle);
                Err(SyncError::StopTimeout(self.stop_timeout))
            }
        }
    }
}

impl Drop for CommitQueue {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
#[path = "commit_queue_tests.rs"]
mod tests;
