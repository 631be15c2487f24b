//! Conductor - lifecycle coordinator for schedulable entities.
//!
//! Main entry point for the Conductor CLI.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{Context, lifecycle, query};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Conductor - lifecycle coordinator for schedulable entities
#[derive(Parser)]
#[command(name = "conductor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file path (default: user config dir)
    #[arg(long, global = true, env = "CONDUCTOR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a new entity definition
    Submit(lifecycle::PayloadArgs),

    /// Schedule a submitted entity
    Schedule(lifecycle::EntityArgs),

    /// Submit a new entity definition and schedule it immediately
    SubmitAndSchedule(lifecycle::PayloadArgs),

    /// Suspend a running entity
    Suspend(lifecycle::EntityArgs),

    /// Resume a suspended entity
    Resume(lifecycle::EntityArgs),

    /// Show whether the engine currently runs an entity
    Status(lifecycle::EntityArgs),

    /// List submitted entities of a type
    List(query::ListArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => conductor_config::load_config_file(path)?,
        None => conductor_config::load_config()?,
    };

    // Initialize tracing — console (human-readable) + rotating JSON file
    let filter = if cli.verbose {
        "conductor=debug,conductor_lifecycle=debug,conductor_registry=debug,conductor_engine=debug,conductor_audit=debug,info".to_string()
    } else {
        config.logging().level
    };

    let file_appender = tracing_appender::rolling::daily(conductor_config::log_dir(), "conductor.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_filter(tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    "conductor=debug,conductor_lifecycle=debug,conductor_registry=debug,conductor_engine=debug,conductor_audit=debug,info",
                )),
        )
        .init();

    let ctx = Context::from_config(&config, cli.json)?;

    // Dispatch to command handlers
    match cli.command {
        Commands::Submit(args) => lifecycle::submit(args, &ctx).await,
        Commands::Schedule(args) => lifecycle::schedule(args, &ctx).await,
        Commands::SubmitAndSchedule(args) => lifecycle::submit_and_schedule(args, &ctx).await,
        Commands::Suspend(args) => lifecycle::suspend(args, &ctx).await,
        Commands::Resume(args) => lifecycle::resume(args, &ctx).await,
        Commands::Status(args) => query::status(args, &ctx).await,
        Commands::List(args) => query::list(args, &ctx).await,
    }
}
