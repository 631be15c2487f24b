//! Read-only query commands.

use anyhow::Result;
use clap::Args;
use conductor_lifecycle::parse_type;
use conductor_registry::EntityRegistry;

use super::{Context, finish};
use crate::commands::lifecycle::EntityArgs;

/// Arguments for the list command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Entity type (process, feed, cluster)
    pub entity_type: String,
}

/// Show whether the engine currently runs an entity.
pub async fn status(args: EntityArgs, ctx: &Context) -> Result<()> {
    let result = ctx
        .coordinator
        .status(&args.entity_type, &args.entity)
        .await;
    finish(result, ctx)
}

/// List submitted entities of a type.
pub async fn list(args: ListArgs, ctx: &Context) -> Result<()> {
    let entity_type = match parse_type(&args.entity_type) {
        Ok(t) => t,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let names = ctx.registry.list(entity_type).await?;
    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else if names.is_empty() {
        println!("no {entity_type} entities submitted");
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}
