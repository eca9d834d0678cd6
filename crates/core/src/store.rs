// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Durable offline queue of pending commits.
//!
//! The queue file is the only record of work the remote store has not yet
//! acknowledged. It is stored as JSONL and is always rewritten whole (see
//! [`jsonl::write_all`]), never edited in place.
//!
//! # Locking
//!
//! Every read-modify-write of the file runs under one serialization boundary:
//! an in-process mutex plus an exclusive advisory lock on `<file>.lock`, so a
//! producer in another process cannot interleave with a draining worker.
//!
//! The drain protocol is append-then-recheck. A producer's [`QueueStore::append`]
//! loads the latest content, appends and persists as one locked unit. A worker
//! takes a snapshot with [`QueueStore::load`], submits without holding the
//! lock, and finishes with [`QueueStore::settle`], which removes only the
//! acknowledged commits from whatever the file holds at that moment. Commits
//! appended while the pass was in flight are therefore kept.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use fs2::FileExt;
use tracing::{debug, warn};

use crate::commit::Commit;
use crate::error::{Error, Result};
use crate::jsonl;

/// File-backed FIFO of commits awaiting acknowledgment.
#[derive(Debug)]
pub struct QueueStore {
    /// Path to the queue file.
    path: PathBuf,
    /// Path to the advisory lock file.
    lock_path: PathBuf,
    /// Serializes access between threads of this process.
    guard: Mutex<()>,
}

/// Held for the duration of one locked read-modify-write.
struct StoreLock<'a> {
    _guard: MutexGuard<'a, ()>,
    file: File,
}

impl Drop for StoreLock<'_> {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

impl QueueStore {
    /// Open the queue stored at `path`.
    ///
    /// Creates the parent directory if needed. The queue file itself is not
    /// created until the first write, so an untouched queue stays absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let lock_path = sibling(&path, "lock")?;

        Ok(QueueStore {
            path,
            lock_path,
            guard: Mutex::new(()),
        })
    }

    /// Returns the path to the queue file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted queue.
    ///
    /// An absent file is an empty queue. An unparseable file is moved aside
    /// to `<file>.corrupt-<timestamp>`, logged, and also read as empty.
    pub fn load(&self) -> Result<Vec<Commit>> {
        let _lock = self.lock()?;
        self.load_unlocked()
    }

    /// Read the persisted queue without recovering from corruption.
    ///
    /// Unlike [`load`](Self::load) this never moves the file. An unparseable
    /// file is reported as [`Error::Corrupt`] and left in place.
    pub fn peek(&self) -> Result<Vec<Commit>> {
        let _lock = self.lock()?;
        jsonl::read_all(&self.path).map_err(|e| match corruption_reason(&e) {
            Some(reason) => Error::Corrupt {
                path: self.path.display().to_string(),
                reason,
            },
            None => e,
        })
    }

    /// Append a commit to the latest persisted queue.
    ///
    /// Returns only after the new queue is on disk. Returns the queue length
    /// including the new commit.
    pub fn append(&self, commit: &Commit) -> Result<usize> {
        let _lock = self.lock()?;

        let mut queue = self.load_unlocked()?;
        queue.push(commit.clone());
        jsonl::write_all(&self.path, &queue)?;

        debug!(
            item_id = commit.item_id,
            location = %commit.location,
            pending = queue.len(),
            "commit queued"
        );
        Ok(queue.len())
    }

    /// Overwrite the persisted queue with exactly `commits`.
    pub fn replace(&self, commits: &[Commit]) -> Result<()> {
        let _lock = self.lock()?;
        jsonl::write_all(&self.path, commits)
    }

    /// Remove acknowledged commits from the latest persisted queue.
    ///
    /// Each acknowledged commit removes one equal entry, searching from the
    /// front. Everything else, including commits appended since the caller's
    /// snapshot, is kept in order. Returns the remaining queue length.
    pub fn settle(&self, acknowledged: &[Commit]) -> Result<usize> {
        let _lock = self.lock()?;

        let mut queue = self.load_unlocked()?;
        if acknowledged.is_empty() {
            return Ok(queue.len());
        }

        for done in acknowledged {
            match queue.iter().position(|c| c == done) {
                Some(pos) => {
                    queue.remove(pos);
                }
                None => warn!(
                    item_id = done.item_id,
                    location = %done.location,
                    "acknowledged commit no longer in queue"
                ),
            }
        }

        jsonl::write_all(&self.path, &queue)?;
        Ok(queue.len())
    }

    /// Get the number of queued commits.
    pub fn len(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> Result<StoreLock<'_>> {
        let guard = self.guard.lock().unwrap_or_else(PoisonError::into_inner);

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&self.lock_path)?;
        file.lock_exclusive()?;

        Ok(StoreLock {
            _guard: guard,
            file,
        })
    }

    fn load_unlocked(&self) -> Result<Vec<Commit>> {
        match jsonl::read_all(&self.path) {
            Ok(queue) => Ok(queue),
            Err(e) => match corruption_reason(&e) {
                Some(reason) => {
                    self.quarantine(&reason);
                    Ok(Vec::new())
                }
                None => Err(e),
            },
        }
    }

    /// Move an unparseable queue file out of the way.
    ///
    /// The commits it held are lost to the sync path; the file is kept for
    /// operators to inspect.
    fn quarantine(&self, cause: &str) {
        let suffix = format!("corrupt-{}", Utc::now().format("%Y%m%dT%H%M%S%.3fZ"));
        let target = match sibling(&self.path, &suffix) {
            Ok(target) => target,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "queue file unparseable, treating as empty");
                return;
            }
        };

        match fs::rename(&self.path, &target) {
            Ok(()) => warn!(
                path = %self.path.display(),
                moved_to = %target.display(),
                error = %cause,
                "queue file unparseable, treating as empty"
            ),
            Err(e) => warn!(
                path = %self.path.display(),
                error = %cause,
                rename_error = %e,
                "queue file unparseable and could not be moved aside, treating as empty"
            ),
        }
    }
}

/// Describes `e` when it means the file content is unparseable.
fn corruption_reason(e: &Error) -> Option<String> {
    match e {
        Error::Json(e) => Some(e.to_string()),
        Error::Io(e) if e.kind() == std::io::ErrorKind::InvalidData => Some(e.to_string()),
        _ => None,
    }
}

/// `<file>.<suffix>` next to `path`.
fn sibling(path: &Path, suffix: &str) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::InvalidPath(path.display().to_string()))?;
    Ok(path.with_file_name(format!("{}.{}", file_name, suffix)))
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
