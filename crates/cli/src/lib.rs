// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! wmsrs - offline-first inventory adjustments for field devices.
//!
//! This crate provides the functionality behind the `wms` CLI: adjustments
//! ("commits") are appended to a durable on-disk queue and delivered to a
//! remote REST store by a background worker whenever the store is reachable.
//!
//! # Main Components
//!
//! - [`sync::CommitQueue`] - producer-facing facade that owns the sync worker
//! - [`sync::SyncWorker`] - probe and drain tick loop
//! - [`remote::RestClient`] - REST client for commits and the catalog
//! - [`Config`] - device configuration (`config.toml`)
//! - [`Error`] - Error types for all operations
//!
//! # Embedding
//!
//! ```rust,ignore
//! use wmsrs::{config, sync::{CommitQueue, SyncContext}, Config};
//!
//! let home = config::resolve_home(None)?;
//! let config = Config::load(&home)?;
//! let mut queue = CommitQueue::start(SyncContext::from_config(&home, &config)?)?;
//!
//! queue.submit_commit("TOUGHPAD01", "A1", 5, 101)?;
//! // ...
//! queue.stop()?;
//! ```

mod cli;
mod commands;
mod env;
mod logging;

pub mod catalog;
pub mod config;
pub mod error;
pub mod remote;
pub mod sync;

use std::path::Path;

pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

/// Execute a CLI invocation. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let home = config::resolve_home(cli.directory.as_deref())?;
    logging::setup_logging(&config::log_path(&home), cli.verbose);

    match cli.command {
        // Runs before the config is loaded so --force can replace a broken one.
        Command::Init {
            device,
            url,
            api_key,
            force,
        } => commands::init::run(&home, device, url, api_key, force),
        command => dispatch(&home, command),
    }
}

fn dispatch(home: &Path, command: Command) -> Result<()> {
    let config = Config::load(home)?;

    match command {
        Command::Init { .. } => Ok(()), // handled in run
        Command::Submit {
            location,
            quantity,
            item,
            device,
            subtract,
            output,
        } => commands::submit::run(
            home, &config, location, quantity, item, device, subtract, output,
        ),
        Command::Status { output } => commands::status::run(home, &config, output),
        Command::Sync => commands::sync::run(home, &config),
        Command::Run { stdin, device } => commands::run::run(home, &config, stdin, device),
        Command::Catalog {
            offline,
            location,
            output,
        } => commands::catalog::run(home, &config, offline, location, output),
        Command::Show { commit_id, output } => {
            commands::show::run(home, &config, commit_id, output)
        }
        Command::Overview { location, output } => {
            commands::overview::run(home, &config, location, output)
        }
    }
}
