// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Background delivery of queued commits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐  append   ┌─────────────┐
//! │ CommitQueue │──────────►│ QueueStore  │  (pending_commits.jsonl)
//! │  (facade)   │           └─────────────┘
//! └─────────────┘                  ▲ load / settle
//!        │ spawns                  │
//!        ▼                         │
//! ┌─────────────┐  probe    ┌─────────────┐
//! │ SyncWorker  │──────────►│    Probe    │  (TCP reachability)
//! │ (tick loop) │           └─────────────┘
//! └─────────────┘  submit   ┌─────────────┐
//!        └─────────────────►│  Submitter  │  (RestClient)
//!                           └─────────────┘
//! ```
//!
//! Producers only touch the store, so submitting never waits on the network.
//! The worker probes reachability once per tick and, when reachable, drains
//! a snapshot of the queue. Failed commits stay queued and are retried on the
//! next reachable tick, without limit.

mod commit_queue;
mod probe;
mod state;
mod submitter;
mod worker;

pub use commit_queue::CommitQueue;
pub use probe::{Probe, TcpProbe};
pub use state::{SharedWorkerState, WorkerState};
pub use submitter::Submitter;
pub use worker::{Delivery, DrainReport, SyncWorker, TickOutcome};

#[cfg(test)]
pub(crate) mod test_helpers;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use wms_core::QueueStore;

use crate::config::{self, Config, SyncConfig};
use crate::remote::RestClient;

/// Error type for the sync worker lifecycle.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The worker thread or its runtime could not be started.
    #[error("failed to start sync worker: {0}")]
    Spawn(#[from] std::io::Error),

    /// A drain pass could not read or settle the queue.
    #[error("drain pass failed: {0}")]
    DrainFailed(String),

    /// The worker did not stop within the allowed time.
    #[error("sync worker did not stop within {0:?}")]
    StopTimeout(Duration),

    /// The worker thread panicked.
    #[error("sync worker panicked")]
    WorkerPanicked,
}

/// Everything the worker and the facade share.
///
/// Built once per process and handed to [`CommitQueue::start`] or
/// [`SyncWorker::new`].
#[derive(Clone)]
pub struct SyncContext {
    pub store: Arc<QueueStore>,
    pub submitter: Arc<dyn Submitter>,
    pub probe: Arc<dyn Probe>,
    pub settings: SyncConfig,
}

impl SyncContext {
    pub fn new(
        store: Arc<QueueStore>,
        submitter: Arc<dyn Submitter>,
        probe: Arc<dyn Probe>,
        settings: SyncConfig,
    ) -> Self {
        Self {
            store,
            submitter,
            probe,
            settings,
        }
    }

    /// Wire the REST client and TCP probe for the configured remote.
    pub fn from_config(home: &Path, config: &Config) -> crate::Result<Self> {
        let remote = config.require_remote(home)?;
        let client = RestClient::from_config(remote)?;
        let probe = TcpProbe::from_config(remote, &config.sync)?;
        let store = QueueStore::open(config::queue_path(home))?;

        Ok(Self::new(
            Arc::new(store),
            Arc::new(client),
            Arc::new(probe),
            config.sync.clone(),
        ))
    }
}
