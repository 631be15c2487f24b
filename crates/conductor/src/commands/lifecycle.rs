//! Lifecycle transition commands.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;

use super::{Context, finish};

/// Arguments for commands addressing an already-submitted entity.
#[derive(Args, Debug)]
pub struct EntityArgs {
    /// Entity type (process, feed, cluster)
    pub entity_type: String,

    /// Entity name
    pub entity: String,
}

/// Arguments for commands carrying a definition payload.
#[derive(Args, Debug)]
pub struct PayloadArgs {
    /// Entity type (process, feed, cluster)
    pub entity_type: String,

    /// Path to the JSON definition file
    pub file: PathBuf,
}

impl PayloadArgs {
    fn read_payload(&self) -> Result<String> {
        std::fs::read_to_string(&self.file)
            .with_context(|| format!("failed to read definition file '{}'", self.file.display()))
    }
}

/// Submit a new entity definition.
pub async fn submit(args: PayloadArgs, ctx: &Context) -> Result<()> {
    let payload = args.read_payload()?;
    let result = ctx
        .coordinator
        .submit(&args.entity_type, &payload, &ctx.actor)
        .await;
    finish(result, ctx)
}

/// Schedule a submitted entity.
pub async fn schedule(args: EntityArgs, ctx: &Context) -> Result<()> {
    let result = ctx
        .coordinator
        .schedule(&args.entity_type, &args.entity, &ctx.actor)
        .await;
    finish(result, ctx)
}

/// Submit a new entity definition and schedule it immediately.
pub async fn submit_and_schedule(args: PayloadArgs, ctx: &Context) -> Result<()> {
    let payload = args.read_payload()?;
    let result = ctx
        .coordinator
        .submit_and_schedule(&args.entity_type, &payload, &ctx.actor)
        .await;
    finish(result, ctx)
}

/// Suspend a running entity.
pub async fn suspend(args: EntityArgs, ctx: &Context) -> Result<()> {
    let result = ctx
        .coordinator
        .suspend(&args.entity_type, &args.entity, &ctx.actor)
        .await;
    finish(result, ctx)
}

/// Resume a suspended entity.
pub async fn resume(args: EntityArgs, ctx: &Context) -> Result<()> {
    let result = ctx
        .coordinator
        .resume(&args.entity_type, &args.entity, &ctx.actor)
        .await;
    finish(result, ctx)
}
