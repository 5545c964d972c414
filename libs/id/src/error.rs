//! Error types for resource ID parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing a resource ID or popping its segments.
///
/// Every variant carries the original input so the caller can report exactly
/// which identifier failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceIdError {
    /// The path could not be split into key/value pairs.
    #[error("malformed resource ID {input:?}: {reason}")]
    MalformedIdentifier { input: String, reason: String },

    /// A key or a value was the empty string.
    #[error("resource ID {input:?} contains an empty segment (key: {key:?}, value: {value:?})")]
    EmptySegment {
        input: String,
        key: String,
        value: String,
    },

    /// The caller required a subscription and none was present.
    #[error("no subscription ID found in {input:?}")]
    MissingSubscription { input: String },

    /// A segment the caller expected was not present.
    #[error("ID {input:?} was missing the `{key}` element")]
    SegmentNotFound { key: String, input: String },

    /// The same generic key appeared twice.
    #[error("ID {input:?} contains the `{key}` element more than once")]
    DuplicateSegment { key: String, input: String },

    /// Segments were left over after every expected segment was popped.
    #[error("ID {input:?} contained more segments than required: {}", segments.join(", "))]
    UnexpectedSegments {
        input: String,
        segments: Vec<String>,
    },
}

impl ResourceIdError {
    /// Returns the identifier that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            Self::MalformedIdentifier { input, .. }
            | Self::EmptySegment { input, .. }
            | Self::MissingSubscription { input }
            | Self::SegmentNotFound { input, .. }
            | Self::DuplicateSegment { input, .. }
            | Self::UnexpectedSegments { input, .. } => input,
        }
    }

    /// Returns true if the input did not follow the `/key/value` grammar.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MalformedIdentifier { .. } | Self::EmptySegment { .. }
        )
    }

    /// Returns true if this error names a single missing segment.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SegmentNotFound { .. })
    }
}

/// A resource ID failed validation for a configuration key.
///
/// Produced by generated validators, which wrap the parser error with the
/// name of the field being validated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("can not parse {key:?} as a resource id: {source}")]
pub struct ValidationError {
    pub key: String,
    #[source]
    pub source: ResourceIdError,
}

impl ValidationError {
    /// Wraps a parse error for `key`.
    pub fn new(key: impl Into<String>, source: ResourceIdError) -> Self {
        Self {
            key: key.into(),
            source,
        }
    }
}
