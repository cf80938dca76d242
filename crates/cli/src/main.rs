// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ft - Fuel Tracker CLI

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod config;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::refuel::RefuelCommand;
use commands::vehicle::VehicleCommand;
use commands::{dashboard, maintenance, refuel, stats, vehicle, Context};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::config::Config;
use crate::error::FtError;
use crate::output::OutputFormat;
use ft_storage::Store;

#[derive(Parser)]
#[command(
    name = "ft",
    version,
    about = "Fuel Tracker - Refuels, costs and consumption for one vehicle"
)]
struct Cli {
    /// Directory holding the log and config.toml
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Vehicle profile
    Vehicle {
        #[command(subcommand)]
        command: VehicleCommand,
    },
    /// Refuel log
    Refuel {
        #[command(subcommand)]
        command: RefuelCommand,
    },
    /// Consumption and cost statistics
    Stats,
    /// Vehicle, statistics and history together
    Dashboard,
    /// Delete the vehicle and every refuel
    Reset {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Rewrite the log down to the live records
    Compact,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<FtError>() {
                Some(ft) => eprint!("{}", ft),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.data_dir)?;
    setup_logging(&config);
    debug!(data_dir = %config.data_dir.display(), "using data directory");

    let store = Store::new(config.store_config());
    store.init().await.map_err(FtError::from_store)?;

    let ctx = Context {
        store,
        format: cli.format,
        units: config.units.clone(),
    };

    let result = match cli.command {
        Commands::Vehicle { command } => vehicle::handle(command, &ctx).await,
        Commands::Refuel { command } => refuel::handle(command, &ctx).await,
        Commands::Stats => stats::handle(&ctx).await,
        Commands::Dashboard => dashboard::handle(&ctx).await,
        Commands::Reset { yes } => maintenance::reset(&ctx, yes).await,
        Commands::Compact => maintenance::compact(&ctx).await,
    };

    // A failed close must not mask the command's own error
    let closed = ctx.store.close().await.map_err(FtError::from_store);
    result?;
    closed?;
    Ok(())
}

/// Log to stderr so JSON on stdout stays parseable.
///
/// `FT_LOG` takes precedence over the `log` key in config.toml.
fn setup_logging(config: &Config) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("FT_LOG")
        .or_else(|_| EnvFilter::try_new(&config.log))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Only fails if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
