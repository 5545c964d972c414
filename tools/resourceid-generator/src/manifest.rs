//! The `resourceids.toml` manifest listing every resource ID type of a package.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use armid_codegen::{classify, GenerateOptions, Renames, ResourceIdSchema};
use serde::Deserialize;

use crate::error::GeneratorError;

/// A package's resource ID manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Run rustfmt over the generated files. Packages that commit the raw
    /// emitter output turn this off so regenerating leaves them unchanged.
    #[serde(default = "default_rustfmt")]
    pub rustfmt: bool,
    #[serde(default, rename = "resource")]
    pub resources: Vec<ResourceEntry>,
}

fn default_rustfmt() -> bool {
    true
}

/// One `[[resource]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceEntry {
    /// PascalCase type name without the `Id` suffix.
    pub name: String,
    /// Example ID the type is derived from.
    pub id: String,
    #[serde(default)]
    pub rewrite: bool,
    #[serde(default)]
    pub validate: bool,
    #[serde(default)]
    pub rename: Renames,
}

impl ResourceEntry {
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            rewrite: self.rewrite,
            validate: self.validate,
        }
    }

    pub fn schema(&self) -> Result<ResourceIdSchema, GeneratorError> {
        classify(&self.name, &self.id, &self.rename).map_err(|source| GeneratorError::Classify {
            name: self.name.clone(),
            source,
        })
    }
}

impl Manifest {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(contents).context("invalid manifest TOML")?;

        let mut names = HashSet::new();
        for entry in &manifest.resources {
            if !names.insert(entry.name.as_str()) {
                return Err(GeneratorError::DuplicateResource(entry.name.clone()).into());
            }
        }

        Ok(manifest)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest: {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("failed to load manifest: {}", path.display()))
    }
}
