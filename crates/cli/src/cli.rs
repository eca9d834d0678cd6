// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.trim().to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "wms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Offline-first inventory adjustments for field devices")]
#[command(
    long_about = "Offline-first inventory adjustments for field devices.\n\n\
    Adjustments are queued on disk first and delivered to the remote store \
    whenever it is reachable."
)]
pub struct Cli {
    /// Use <path> as the state directory
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write config.toml for this device
    #[command(after_help = "\
Examples:
  wms init -d TOUGHPAD01                                   Local-only, commits stay queued
  wms init -d TOUGHPAD01 --url https://x.supabase.co --api-key KEY
                                                           Deliver to a remote store")]
    Init {
        /// Default device id for submitted adjustments
        #[arg(long, short, value_parser = non_empty_string)]
        device: Option<String>,

        /// Base URL of the remote store
        #[arg(long, requires = "api_key", value_parser = non_empty_string)]
        url: Option<String>,

        /// API key for the remote store
        #[arg(long, requires = "url", value_parser = non_empty_string)]
        api_key: Option<String>,

        /// Overwrite an existing config.toml
        #[arg(long)]
        force: bool,
    },

    /// Queue an inventory adjustment
    #[command(after_help = "\
Examples:
  wms submit -l A1 -q 5 -i 101               Add 5 of item 101 at A1
  wms submit -l A1 -q 2 -i 101 --subtract    Remove 2 of item 101 at A1
  wms submit -l A1 -q 1 -i widget            Look up the item by name in the cached catalog
  wms submit -l B7 -q 1 -i 7 -d TOUGHPAD02   Override the configured device")]
    Submit {
        /// Location code
        #[arg(long, short, value_parser = non_empty_string)]
        location: String,

        /// Quantity to add (or remove with --subtract)
        #[arg(long, short, value_parser = clap::value_parser!(i64).range(1..))]
        quantity: i64,

        /// Catalog item id, or an item name from the cached catalog
        #[arg(long, short, value_name = "ITEM", value_parser = non_empty_string)]
        item: String,

        /// Device id (default: device_id from config.toml)
        #[arg(long, short, value_parser = non_empty_string)]
        device: Option<String>,

        /// Remove stock instead of adding it
        #[arg(long)]
        subtract: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Show commits waiting for delivery
    #[command(after_help = "\
Status only reads the queue. An unreadable queue file is reported and left
in place; the next submit or sync moves it aside to <file>.corrupt-<time>.")]
    Status {
        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Probe the remote and drain the queue once
    Sync,

    /// Run the sync worker in the foreground
    #[command(after_help = "\
Without --stdin the worker runs until interrupted (Ctrl-C).

With --stdin each input line is one adjustment:
  <location> <delta> <item_id>
e.g. \"A1 +5 101\" or \"A1 -2 101\". Blank lines and lines starting with '#'
are skipped. The worker stops at end of input.")]
    Run {
        /// Read adjustments from standard input
        #[arg(long)]
        stdin: bool,

        /// Device id for adjustments read from stdin
        #[arg(long, short, value_parser = non_empty_string)]
        device: Option<String>,
    },

    /// Refresh and show the item and location catalog
    Catalog {
        /// Show the cached snapshot without contacting the remote
        #[arg(long)]
        offline: bool,

        /// Only list the items stocked at this location
        #[arg(long, short, value_parser = non_empty_string)]
        location: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Look up a delivered commit on the remote
    Show {
        /// Id the remote store assigned to the commit
        commit_id: i64,

        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Show current stock levels from the remote
    Overview {
        /// Only show stock at this location
        #[arg(long, short, value_parser = non_empty_string)]
        location: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
