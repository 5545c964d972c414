//! Errors raised while classifying an example resource ID.

use armid::ResourceIdError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// The example ID itself does not follow the `/key/value` grammar.
    #[error("invalid example ID: {0}")]
    Identifier(#[from] ResourceIdError),

    /// The type name is not a PascalCase identifier.
    #[error("invalid type name {0:?}: expected a PascalCase identifier such as `AppService`")]
    InvalidTypeName(String),

    /// A rename override does not produce a usable field name.
    #[error("invalid field name {field:?} for segment `{key}`")]
    InvalidFieldName { key: String, field: String },

    /// The example has nothing but provider segments.
    #[error("example ID {0:?} has no segments to generate fields for")]
    NoSegments(String),

    /// Two segments would produce the same field, or share a key.
    #[error("segment `{key}` maps to field `{field}`, which is already taken")]
    DuplicateField { key: String, field: String },
}
