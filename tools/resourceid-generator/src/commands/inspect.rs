//! Read-only commands that print JSON.

use anyhow::{Context, Result};
use armid::ResourceId;
use clap::Args;

use crate::manifest::ResourceEntry;

use super::parse_rename;

#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// PascalCase type name without the Id suffix.
    #[arg(long)]
    name: String,

    /// Example resource ID of the type.
    #[arg(long)]
    id: String,

    /// Field name override for a segment key. Repeatable.
    #[arg(long = "rename", value_name = "KEY=Field", value_parser = parse_rename)]
    renames: Vec<(String, String)>,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Resource ID to parse.
    #[arg(long)]
    id: String,
}

pub fn schema(args: SchemaArgs) -> Result<()> {
    let entry = ResourceEntry {
        name: args.name,
        id: args.id,
        rewrite: false,
        validate: false,
        rename: args.renames.into_iter().collect(),
    };
    let schema = entry.schema()?;

    let json = serde_json::to_string_pretty(&schema).context("failed to serialize schema")?;
    println!("{json}");
    Ok(())
}

pub fn inspect(args: InspectArgs) -> Result<()> {
    let id = ResourceId::parse(&args.id)?;

    let json = serde_json::to_string_pretty(&id).context("failed to serialize resource ID")?;
    println!("{json}");
    Ok(())
}
