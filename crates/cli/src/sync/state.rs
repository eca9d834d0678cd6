// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Worker state shared between the worker thread and its owner.

use std::fmt;
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};

/// Where the sync worker is in its tick cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WorkerState {
    /// Sleeping until the next tick.
    Idle = 0,
    /// Checking whether the remote is reachable.
    Probing = 1,
    /// Submitting a snapshot of the queue.
    Draining = 2,
    /// Stop requested; finishing up.
    Stopping = 3,
    /// Loop exited; no further ticks.
    Stopped = 4,
}

impl WorkerState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => WorkerState::Idle,
            1 => WorkerState::Probing,
            2 => WorkerState::Draining,
            3 => WorkerState::Stopping,
            _ => WorkerState::Stopped,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WorkerState::Idle => "idle",
            WorkerState::Probing => "probing",
            WorkerState::Draining => "draining",
            WorkerState::Stopping => "stopping",
            WorkerState::Stopped => "stopped",
        }
    }
}

impl fmt::Display for WorkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Worker state visible to both the worker and the facade.
///
/// Uses atomic fields for lock-free reads.
pub struct SharedWorkerState {
    /// Current [`WorkerState`].
    state: AtomicU8,
    /// Ticks started since the worker was created.
    ticks: AtomicU64,
    /// Commits acknowledged by the remote since the worker was created.
    delivered: AtomicU64,
}

impl SharedWorkerState {
    /// Create a new shared state initialized to idle.
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(WorkerState::Idle as u8),
            ticks: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
        }
    }

    /// Get the current state.
    pub fn get(&self) -> WorkerState {
        WorkerState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Set the state.
    pub fn set(&self, state: WorkerState) {
        self.state.store(state as u8, Ordering::Release);
    }

    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Acquire)
    }

    pub fn record_tick(&self) {
        self.ticks.fetch_add(1, Ordering::AcqRel);
    }

    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Acquire)
    }

    pub fn record_delivered(&self, count: u64) {
        self.delivered.fetch_add(count, Ordering::AcqRel);
    }

    /// Get a human-readable status string.
    pub fn status_string(&self) -> String {
        format!(
            "{} ({} ticks, {} delivered)",
            self.get(),
            self.ticks(),
            self.delivered()
        )
    }
}

impl Default for SharedWorkerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
