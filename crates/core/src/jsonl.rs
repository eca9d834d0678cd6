// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSONL (JSON Lines) file utilities.
//!
//! Records are stored one JSON object per line. Files are never patched in
//! place: every write replaces the whole file through a temp file and a
//! rename, so readers observe either the previous content or the new content.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

/// Reads all records from a JSONL file.
///
/// Skips empty lines and returns an empty vec if the file doesn't exist.
/// Any line that does not parse as `T` fails the whole read.
pub fn read_all<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: T = serde_json::from_str(&line)?;
        records.push(record);
    }

    Ok(records)
}

/// Writes all records to a JSONL file, replacing existing content atomically.
pub fn write_all<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let mut buf = Vec::new();
    for record in records {
        serde_json::to_writer(&mut buf, record)?;
        buf.push(b'\n');
    }
    write_atomic(path, &buf)
}

/// Replaces `path` with `contents` so that a crash leaves either the old or
/// the new file, never a torn mix.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let tmp_path = temp_path_for(path)?;

    let written = (|| -> std::io::Result<()> {
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(contents)?;
        tmp_file.sync_all()?;
        fs::rename(&tmp_path, path)
    })();

    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    // Best-effort: the rename already happened, this only makes the
    // directory entry durable.
    if let Some(parent) = path.parent() {
        if let Ok(dir) = File::open(parent) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}

/// Hidden sibling of `path`, unique per process.
fn temp_path_for(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::InvalidPath(path.display().to_string()))?;
    let tmp_name = format!(".{}.{}.tmp", file_name, std::process::id());
    Ok(path.with_file_name(tmp_name))
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
