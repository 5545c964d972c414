//! # armid-codegen
//!
//! Derives a type-safe parser, constructor, formatter, and test suite for a
//! resource ID type from a single example ID.
//!
//! ```
//! use armid_codegen::{classify, generate, GenerateOptions, Renames};
//!
//! let schema = classify(
//!     "AppService",
//!     "/subscriptions/sub1/resourceGroups/group1/providers/Microsoft.Web/sites/site1",
//!     &Renames::new(),
//! )?;
//! assert_eq!(
//!     schema.format_string(),
//!     "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Web/sites/{}",
//! );
//!
//! let files = generate(&schema, GenerateOptions::default());
//! assert_eq!(files.len(), 2);
//! # Ok::<(), armid_codegen::CodegenError>(())
//! ```
//!
//! Generated parsers depend only on the `armid` runtime.

mod error;
pub mod emit;
pub mod naming;
mod schema;
pub mod synth;

pub use emit::{generate, generate_indexes, GenerateOptions, GeneratedFile, HEADER};
pub use error::CodegenError;
pub use schema::{classify, Renames, ResourceIdSchema, Segment, SegmentRole};
