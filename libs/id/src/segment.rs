//! Splitting a raw `/key/value/...` path into ordered segments.

use serde::{Deserialize, Serialize};

use crate::ResourceIdError;

/// One `key/value` pair of a resource ID path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawSegment {
    pub key: String,
    pub value: String,
}

impl RawSegment {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Tokenizes `input` into its key/value segments, preserving order.
///
/// Exactly one leading and one trailing `/` are stripped before splitting.
/// The number of path elements must be even and none of them may be empty.
pub fn tokenize(input: &str) -> Result<Vec<RawSegment>, ResourceIdError> {
    let path = input.strip_prefix('/').unwrap_or(input);
    let path = path.strip_suffix('/').unwrap_or(path);

    let parts: Vec<&str> = path.split('/').collect();
    if parts.len() % 2 != 0 {
        return Err(ResourceIdError::MalformedIdentifier {
            input: input.to_string(),
            reason: format!(
                "the number of path segments ({}) is not divisible by 2",
                parts.len()
            ),
        });
    }

    let mut segments = Vec::with_capacity(parts.len() / 2);
    for pair in parts.chunks_exact(2) {
        let (key, value) = (pair[0], pair[1]);
        if key.is_empty() || value.is_empty() {
            return Err(ResourceIdError::EmptySegment {
                input: input.to_string(),
                key: key.to_string(),
                value: value.to_string(),
            });
        }
        segments.push(RawSegment::new(key, value));
    }

    Ok(segments)
}
