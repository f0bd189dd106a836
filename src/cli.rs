// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Command-line surface.

use crate::constants::{ENV_API_ENDPOINT, ENV_API_KEY, ENV_API_TIMEOUT, ENV_USERNAME};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Command-line client for classic infrastructure DNS.
#[derive(Debug, Parser)]
#[command(name = "slcli", version, about, propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub api: ApiArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection settings shared by every command.
#[derive(Debug, Clone, Default, Args)]
pub struct ApiArgs {
    /// API username
    #[arg(long, global = true, env = ENV_USERNAME)]
    pub username: Option<String>,

    /// API key
    #[arg(long, global = true, env = ENV_API_KEY, hide_env_values = true)]
    pub api_key: Option<String>,

    /// REST endpoint of the API
    #[arg(long, global = true, env = ENV_API_ENDPOINT)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = ENV_API_TIMEOUT, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// YAML config file (defaults to ~/.slcli.yaml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage DNS zones and records
    #[command(subcommand)]
    Dns(DnsCommand),

    /// Print a shell completion script
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum DnsCommand {
    /// Import a zone file, creating the zone and its records
    ///
    /// The zone is named after the owner of the first record. SOA and apex NS
    /// records are skipped since the provider manages them.
    Import {
        /// Path to an RFC 1035 zone file
        file: PathBuf,

        /// Show what would be created without creating anything
        #[arg(long)]
        dry_run: bool,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
