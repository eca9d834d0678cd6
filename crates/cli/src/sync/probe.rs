// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reachability probing.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::net::TcpStream;
use tracing::debug;

use crate::config::{RemoteConfig, SyncConfig};
use crate::remote::RemoteResult;

/// Cheap liveness check run before each drain pass.
///
/// A positive answer does not promise that a submission will succeed.
pub trait Probe: Send + Sync {
    /// Check whether the remote looks reachable right now.
    fn is_reachable(&self) -> Pin<Box<dyn Future<Output = bool> + Send + '_>>;
}

/// Probes by opening a TCP connection and closing it immediately.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }

    /// Probe the host of the remote URL.
    pub fn from_config(remote: &RemoteConfig, sync: &SyncConfig) -> RemoteResult<Self> {
        let (host, port) = remote.probe_target(sync.probe_port)?;
        Ok(Self::new(host, port, sync.probe_timeout()))
    }

    /// `host:port` being probed.
    pub fn target(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Probe for TcpProbe {
    fn is_reachable(&self) -> Pin<Box<dyn Future<Output = bool> + Send + '_>> {
        Box::pin(async move {
            let connect = TcpStream::connect((self.host.as_str(), self.port));
            match tokio::time::timeout(self.timeout, connect).await {
                Ok(Ok(_stream)) => true,
                Ok(Err(e)) => {
                    debug!(target = %self.target(), error = %e, "remote unreachable");
                    false
                }
                Err(_) => {
                    debug!(target = %self.target(), timeout = ?self.timeout, "probe timed out");
                    false
                }
            }
        })
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
