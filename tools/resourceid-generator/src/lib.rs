//! armid-generator - generates typed resource ID parsers from example IDs.
//!
//! The binary is a thin clap front end; [`generate_resource`] and
//! [`generate_manifest`] are the entry points for driving generation from
//! build tooling or tests.

pub mod commands;
pub mod config;
pub mod error;
pub mod generate;
pub mod logging;
pub mod manifest;
pub mod writer;

pub use commands::Cli;
pub use config::Config;
pub use error::{print_error, GeneratorError};
pub use generate::{generate_manifest, generate_resource, manifest_files, write_manifest};
pub use manifest::{Manifest, ResourceEntry};
pub use writer::Rustfmt;
