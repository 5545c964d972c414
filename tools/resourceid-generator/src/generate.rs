//! Generating one resource ID type, or every type in a manifest, into a package.

use std::path::{Path, PathBuf};

use anyhow::Result;
use armid_codegen::{generate, generate_indexes, GenerateOptions, GeneratedFile, ResourceIdSchema};
use tracing::info;

use crate::error::GeneratorError;
use crate::manifest::{Manifest, ResourceEntry};
use crate::writer::write_files;

fn ensure_package(root: &Path) -> Result<(), GeneratorError> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(GeneratorError::MissingPackage(root.to_path_buf()))
    }
}

/// Generates the files of a single resource ID type under `root`.
///
/// The `mod.rs` index files are left alone; the declarations they need are
/// logged instead.
pub fn generate_resource(root: &Path, entry: &ResourceEntry) -> Result<Vec<PathBuf>> {
    ensure_package(root)?;
    let schema = entry.schema()?;
    let options = entry.options();

    let written = write_files(root, &generate(&schema, options))?;

    let module = schema.module_name();
    info!(
        name = %schema.struct_name(),
        files = written.len(),
        "generated resource ID"
    );
    info!("declare in src/parse/mod.rs: mod {module}; #[cfg(test)] mod {module}_test; pub use {module}::*;");
    if options.validate {
        let validator = schema.validator_fn();
        info!("declare in src/validate/mod.rs: mod {validator}; #[cfg(test)] mod {validator}_test; pub use {validator}::*;");
    }

    Ok(written)
}

/// The package a manifest belongs to: the directory containing it.
pub fn manifest_root(manifest_path: &Path) -> &Path {
    match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Every file the manifest describes, indexes included, without writing
/// anything.
///
/// Every entry is classified first, so one bad entry yields no files at all.
pub fn manifest_files(manifest: &Manifest) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let entries = manifest
        .resources
        .iter()
        .map(|entry| Ok((entry.schema()?, entry.options())))
        .collect::<Result<Vec<(ResourceIdSchema, GenerateOptions)>, GeneratorError>>()?;

    let mut files = Vec::new();
    for (schema, options) in &entries {
        files.extend(generate(schema, *options));
    }
    files.extend(generate_indexes(&entries));
    Ok(files)
}

/// Writes every file of `manifest` into the package at `root`.
pub fn write_manifest(manifest: &Manifest, root: &Path) -> Result<Vec<PathBuf>> {
    ensure_package(root)?;
    let files = manifest_files(manifest)?;

    let written = write_files(root, &files)?;
    info!(
        root = %root.display(),
        resources = manifest.resources.len(),
        files = written.len(),
        "generated manifest"
    );

    Ok(written)
}

/// Generates every type listed in the manifest at `manifest_path`, plus the
/// `src/parse/mod.rs` and `src/validate/mod.rs` indexes.
///
/// A bad entry leaves the package untouched.
pub fn generate_manifest(manifest_path: &Path) -> Result<Vec<PathBuf>> {
    let manifest = Manifest::load(manifest_path)?;
    write_manifest(&manifest, manifest_root(manifest_path))
}
