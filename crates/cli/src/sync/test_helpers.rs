// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for sync module tests.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use wms_core::{Commit, QueueStore, Receipt};

use super::{Probe, SyncContext, Submitter};
use crate::config::SyncConfig;
use crate::remote::{RemoteError, RemoteResult};

/// Mock submitter that records every attempt.
pub struct MockSubmitter {
    /// Every commit passed to submit(), in order.
    attempts: Mutex<Vec<Commit>>,
    /// Item ids the "remote" rejects.
    rejected: Mutex<HashSet<i64>>,
    /// Delay before answering.
    delay: Option<Duration>,
    next_id: AtomicI64,
}

impl MockSubmitter {
    pub fn new() -> Self {
        MockSubmitter {
            attempts: Mutex::new(Vec::new()),
            rejected: Mutex::new(HashSet::new()),
            delay: None,
            next_id: AtomicI64::new(1),
        }
    }

    /// Answer only after `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Reject every commit for `item_id`.
    pub fn reject_item(&self, item_id: i64) {
        self.rejected.lock().unwrap().insert(item_id);
    }

    /// Stop rejecting `item_id`.
    pub fn accept_item(&self, item_id: i64) {
        self.rejected.lock().unwrap().remove(&item_id);
    }

    /// All commits submitted so far.
    pub fn attempts(&self) -> Vec<Commit> {
        self.attempts.lock().unwrap().clone()
    }

    /// Number of attempts for `item_id`.
    pub fn attempts_for(&self, item_id: i64) -> usize {
        self.attempts
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.item_id == item_id)
            .count()
    }
}

impl Submitter for MockSubmitter {
    fn submit<'a>(
        &'a self,
        commit: &'a Commit,
    ) -> Pin<Box<dyn Future<Output = RemoteResult<Receipt>> + Send + 'a>> {
        Box::pin(async move {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.attempts.lock().unwrap().push(commit.clone());

            if self.rejected.lock().unwrap().contains(&commit.item_id) {
                return Err(RemoteError::Status {
                    status: 409,
                    body: "item does not exist".to_string(),
                });
            }
            Ok(Receipt {
                commit_id: self.next_id.fetch_add(1, Ordering::SeqCst),
            })
        })
    }
}

/// Mock probe whose answer can be flipped from the test.
#[derive(Clone)]
pub struct MockProbe {
    reachable: Arc<AtomicBool>,
}

impl MockProbe {
    pub fn new(reachable: bool) -> Self {
        MockProbe {
            reachable: Arc::new(AtomicBool::new(reachable)),
        }
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }
}

impl Probe for MockProbe {
    fn is_reachable(&self) -> Pin<Box<dyn Future<Output = bool> + Send + '_>> {
        let reachable = self.reachable.load(Ordering::SeqCst);
        Box::pin(async move { reachable })
    }
}

/// Settings with a short tick so loop tests finish quickly.
pub fn fast_settings() -> SyncConfig {
    SyncConfig {
        check_interval_secs: 1,
        submit_timeout_secs: 2,
        stop_timeout_secs: 5,
        ..SyncConfig::default()
    }
}

/// Create a test commit for `item_id`.
pub fn make_commit(item_id: i64) -> Commit {
    Commit::new("TOUGHPAD01", "A1", 5, item_id)
}

/// Build a context around a queue in `dir`.
pub fn make_context(
    dir: &Path,
    submitter: Arc<dyn Submitter>,
    probe: Arc<dyn Probe>,
) -> SyncContext {
    let store = QueueStore::open(dir.join("pending_commits.jsonl")).unwrap();
    SyncContext::new(Arc::new(store), submitter, probe, fast_settings())
}
