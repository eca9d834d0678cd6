// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! wms-core: Shared library for the wms inventory tools
//!
//! This crate provides the commit value object, the durable offline queue
//! that buffers commits until the remote store acknowledges them, and the
//! catalog snapshot types read by front ends.

pub mod catalog;
pub mod commit;
pub mod error;
pub mod jsonl;
pub mod store;

pub use catalog::{Catalog, Item, Location, StockLevel};
pub use commit::{Commit, Receipt, RecordedCommit};
pub use error::{Error, Result};
pub use store::QueueStore;
