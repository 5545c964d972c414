//! Error handling and display for the generator.

use std::path::PathBuf;

use armid_codegen::CodegenError;
use colored::Colorize;
use thiserror::Error;

/// Generator-specific errors.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to classify {name}")]
    Classify {
        name: String,
        #[source]
        source: CodegenError,
    },

    #[error("invalid rename {0:?}, expected KEY=Field")]
    InvalidRename(String),

    #[error("resource {0} is declared more than once")]
    DuplicateResource(String),

    #[error("package directory does not exist: {}", .0.display())]
    MissingPackage(PathBuf),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
    }

    if let Some(hint) = err.downcast_ref::<GeneratorError>().and_then(hint) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

fn hint(err: &GeneratorError) -> Option<&'static str> {
    match err {
        GeneratorError::Classify {
            source: CodegenError::InvalidFieldName { .. } | CodegenError::DuplicateField { .. },
            ..
        } => Some("Override the field name with --rename KEY=Field or a `rename` table in the manifest."),
        GeneratorError::Classify {
            source: CodegenError::Identifier(_) | CodegenError::NoSegments(_),
            ..
        } => Some(
            "Example IDs look like /subscriptions/<id>/resourceGroups/<name>/providers/<Namespace>/<type>/<name>.",
        ),
        GeneratorError::Classify {
            source: CodegenError::InvalidTypeName(_),
            ..
        } => Some("Type names are PascalCase without the Id suffix, e.g. AppService."),
        GeneratorError::MissingPackage(_) => Some("--path must point at an existing crate directory."),
        _ => None,
    }
}
