// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::future::Future;
use std::pin::Pin;

use wms_core::{Commit, Receipt};

use crate::remote::{RemoteResult, RestClient};

/// Delivers one commit to the remote store.
///
/// Any error means the commit was not acknowledged and stays queued.
pub trait Submitter: Send + Sync {
    fn submit<'a>(
        &'a self,
        commit: &'a Commit,
    ) -> Pin<Box<dyn Future<Output = RemoteResult<Receipt>> + Send + 'a>>;
}

impl Submitter for RestClient {
    fn submit<'a>(
        &'a self,
        commit: &'a Commit,
    ) -> Pin<Box<dyn Future<Output = RemoteResult<Receipt>> + Send + 'a>> {
        Box::pin(self.insert_commit(commit))
    }
}
