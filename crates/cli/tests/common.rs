// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `wms` with the user's environment scrubbed.
pub fn wms() -> Command {
    let mut cmd = cargo_bin_cmd!("wms");
    cmd.env_remove("WMS_HOME").env_remove("WMS_LOG");
    cmd
}

/// `wms -C <home>`.
pub fn wms_in(home: &TempDir) -> Command {
    let mut cmd = wms();
    cmd.arg("-C").arg(home.path());
    cmd
}

pub fn write_config(home: &TempDir, content: &str) {
    std::fs::write(home.path().join("config.toml"), content).unwrap();
}

/// A loopback URL nothing listens on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    url
}

/// Config pointing at a remote that refuses connections.
pub fn write_offline_config(home: &TempDir, device: Option<&str>) {
    let device_line = device
        .map(|d| format!("device_id = \"{}\"\n", d))
        .unwrap_or_default();
    write_config(
        home,
        &format!(
            "{device_line}\n[remote]\nurl = \"{}\"\napi_key = \"test-key\"\nrequest_timeout_secs = 2\n\n[sync]\ncheck_interval_secs = 1\nprobe_timeout_ms = 500\nstop_timeout_secs = 5\n",
            unreachable_url()
        ),
    );
}

pub fn queue_file(home: &TempDir) -> std::path::PathBuf {
    home.path().join("pending_commits.jsonl")
}

/// Parsed records of the queue file, empty when absent.
pub fn queue_records(home: &TempDir) -> Vec<serde_json::Value> {
    match std::fs::read_to_string(queue_file(home)) {
        Ok(content) => content
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Queue a commit through the CLI.
pub fn submit(home: &TempDir, location: &str, quantity: &str, item_id: &str) {
    wms_in(home)
        .args(["submit", "-l", location, "-q", quantity, "-i", item_id])
        .args(["-d", "TOUGHPAD01"])
        .assert()
        .success();
}

pub fn has_quarantined_file(dir: &Path) -> bool {
    std::fs::read_dir(dir)
        .unwrap()
        .any(|e| e.unwrap().file_name().to_string_lossy().contains(".corrupt-"))
}
