// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use slcli::{
    cli::{Cli, Command, DnsCommand},
    config::ApiConfig,
    import::{import_zone_file, preview_zone_file, ImportOptions},
    softlayer::SoftLayerClient,
};
use tracing::{debug, error};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    // Every operation is sequential; a single-threaded runtime is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(cli))
}

/// Initialize logging on stderr so stdout only carries command output.
///
/// Respects RUST_LOG (default `warn`) and RUST_LOG_FORMAT=json.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .compact()
                .init();
        }
    }

    debug!("Logging initialized");
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Completion { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "slcli", &mut std::io::stdout());
            Ok(())
        }
        Command::Dns(DnsCommand::Import { file, dry_run }) => {
            // Dry runs need no credentials
            let result = if dry_run {
                preview_zone_file(&file).await
            } else {
                let config = ApiConfig::resolve(&cli.api).context("Invalid API configuration")?;
                debug!(config = ?config, "Resolved API configuration");
                let client = SoftLayerClient::new(&config)?;
                import_zone_file(&client, &file, &ImportOptions::default()).await
            };

            let report = result
                .map_err(|e| {
                    error!(stage = e.stage(), error = %e, "Zone import failed");
                    e
                })
                .with_context(|| format!("Zone import from '{}' failed", file.display()))?;

            print!("{report}");
            Ok(())
        }
    }
}
