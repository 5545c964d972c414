//! Generate commands.

use std::path::PathBuf;

use anyhow::Result;
use armid_codegen::Renames;
use clap::Args;
use tracing::info;

use crate::config::Config;
use crate::generate::{generate_resource, manifest_root, write_manifest};
use crate::manifest::{Manifest, ResourceEntry};
use crate::writer::Rustfmt;

use super::parse_rename;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Package directory to write into.
    #[arg(long, value_name = "DIR")]
    path: PathBuf,

    /// PascalCase type name without the Id suffix, e.g. AppService.
    #[arg(long)]
    name: String,

    /// Example resource ID of the type.
    #[arg(long)]
    id: String,

    /// Also generate a case-insensitive parser.
    #[arg(long)]
    rewrite: bool,

    /// Also generate a validator.
    #[arg(long)]
    validate: bool,

    /// Field name override for a segment key. Repeatable.
    #[arg(long = "rename", value_name = "KEY=Field", value_parser = parse_rename)]
    renames: Vec<(String, String)>,

    /// Skip rustfmt. Overrides ARMID_SKIP_FMT.
    #[arg(long)]
    pub(super) no_fmt: bool,
}

impl GenerateArgs {
    pub(super) fn entry(&self) -> ResourceEntry {
        ResourceEntry {
            name: self.name.clone(),
            id: self.id.clone(),
            rewrite: self.rewrite,
            validate: self.validate,
            rename: self.renames.iter().cloned().collect::<Renames>(),
        }
    }
}

#[derive(Debug, Args)]
pub struct GenerateAllArgs {
    /// Manifest file path. Files are generated into its directory.
    #[arg(long, value_name = "PATH", default_value = "resourceids.toml")]
    manifest: PathBuf,

    /// Skip rustfmt. Overrides ARMID_SKIP_FMT.
    #[arg(long)]
    no_fmt: bool,
}

fn format(paths: &[PathBuf], no_fmt: bool, config: &Config) -> Result<()> {
    if no_fmt || config.skip_fmt {
        return Ok(());
    }
    Rustfmt::new(&config.rustfmt).format(paths)
}

pub fn run(args: GenerateArgs, config: &Config) -> Result<()> {
    let written = generate_resource(&args.path, &args.entry())?;
    format(&written, args.no_fmt, config)?;

    for path in &written {
        println!("{}", path.display());
    }
    Ok(())
}

pub fn run_all(args: GenerateAllArgs, config: &Config) -> Result<()> {
    let manifest = Manifest::load(&args.manifest)?;
    let written = write_manifest(&manifest, manifest_root(&args.manifest))?;

    if !manifest.rustfmt {
        info!(manifest = %args.manifest.display(), "rustfmt disabled by manifest");
    }
    format(&written, args.no_fmt || !manifest.rustfmt, config)?;

    for path in &written {
        println!("{}", path.display());
    }
    Ok(())
}
