//! Source emitters.
//!
//! Each emitter is a pure function of a [`ResourceIdSchema`]; the same schema
//! always produces byte-identical text. [`generate`] assembles them into the
//! files of a target package.

mod index;
mod parser;
mod record;
mod validator;

use std::path::PathBuf;

pub use index::emit_module_index;
pub use parser::{emit_insensitive_parser, emit_parser};
pub use record::{emit_constructor, emit_display, emit_formatter, emit_record, emit_type};
pub use validator::emit_validator;

use crate::synth::{emit_parser_tests, emit_validator_tests};
use crate::ResourceIdSchema;

/// First line of every generated file.
pub const HEADER: &str = "// Code generated by armid-generator. DO NOT EDIT.\n";

/// Which optional outputs to emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Also emit the case-insensitive parser and its tests.
    pub rewrite: bool,
    /// Also emit a validator and its tests.
    pub validate: bool,
}

/// A file to write, relative to the target package root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

impl GeneratedFile {
    fn new(path: PathBuf, body: &str) -> Self {
        Self {
            path,
            contents: format!("{HEADER}\n{body}"),
        }
    }
}

/// The parser source file: record, constructor, formatter, and parsers.
pub fn emit_parser_file(schema: &ResourceIdSchema, options: GenerateOptions) -> String {
    let mut out = String::new();
    out.push_str("use std::fmt;\n\n");
    out.push_str("use armid::{ResourceId, ResourceIdError};\n\n");
    out.push_str(&emit_record(schema));
    out.push('\n');
    out.push_str(&emit_parser(schema));
    if options.rewrite {
        out.push('\n');
        out.push_str(&emit_insensitive_parser(schema));
    }
    out
}

/// Every file for one resource ID type, at its name-derived path.
///
/// - `src/parse/<type>.rs` and `src/parse/<type>_test.rs`
/// - with `validate`: `src/validate/<type>_id.rs` and `src/validate/<type>_id_test.rs`
pub fn generate(schema: &ResourceIdSchema, options: GenerateOptions) -> Vec<GeneratedFile> {
    let module = schema.module_name();
    let parse_dir = PathBuf::from("src").join("parse");
    let validate_dir = PathBuf::from("src").join("validate");

    let mut files = vec![
        GeneratedFile::new(
            parse_dir.join(format!("{module}.rs")),
            &emit_parser_file(schema, options),
        ),
        GeneratedFile::new(
            parse_dir.join(format!("{module}_test.rs")),
            &emit_parser_tests(schema, options.rewrite),
        ),
    ];

    if options.validate {
        let validator = schema.validator_fn();
        files.push(GeneratedFile::new(
            validate_dir.join(format!("{validator}.rs")),
            &emit_validator(schema),
        ));
        files.push(GeneratedFile::new(
            validate_dir.join(format!("{validator}_test.rs")),
            &emit_validator_tests(schema),
        ));
    }

    files
}

/// `src/parse/mod.rs`, and `src/validate/mod.rs` when any type is validated.
pub fn generate_indexes(entries: &[(ResourceIdSchema, GenerateOptions)]) -> Vec<GeneratedFile> {
    let parse_modules: Vec<String> = entries.iter().map(|(s, _)| s.module_name()).collect();
    let validate_modules: Vec<String> = entries
        .iter()
        .filter(|(_, options)| options.validate)
        .map(|(s, _)| s.validator_fn())
        .collect();

    let mut files = vec![GeneratedFile::new(
        PathBuf::from("src").join("parse").join("mod.rs"),
        &emit_module_index(&parse_modules),
    )];

    if !validate_modules.is_empty() {
        files.push(GeneratedFile::new(
            PathBuf::from("src").join("validate").join("mod.rs"),
            &emit_module_index(&validate_modules),
        ));
    }

    files
}
