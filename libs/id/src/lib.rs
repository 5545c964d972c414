//! # armid
//!
//! Runtime parsing of hierarchical resource IDs.
//!
//! ## ID Format
//!
//! A resource ID is a path of alternating keys and values:
//!
//! ```text
//! /subscriptions/{subscription}/resourceGroups/{group}/providers/{namespace}/{key}/{value}...
//! ```
//!
//! - Keys and values are never empty and always come in pairs
//! - The first `subscriptions` segment and the first `resourceGroups`
//!   segment are reserved fields; later occurrences are ordinary segments
//! - `providers` segments are structural and name the provider namespace;
//!   parsers pop them like any other segment
//!
//! ## Usage
//!
//! Type-specific parsers (usually generated by `armid-generator`) follow the
//! same three steps:
//!
//! ```
//! use armid::ResourceId;
//!
//! let mut id = ResourceId::parse(
//!     "/subscriptions/sub1/resourceGroups/group1/providers/Microsoft.Web/sites/site1",
//! )?;
//! let subscription_id = id.pop_subscription_id()?;
//! let resource_group = id.pop_resource_group()?;
//! id.pop_provider("Microsoft.Web")?;
//! let name = id.pop_segment("sites")?;
//! id.validate_exhausted()?;
//!
//! assert_eq!(subscription_id, "sub1");
//! assert_eq!(resource_group, "group1");
//! assert_eq!(name, "site1");
//! # Ok::<(), armid::ResourceIdError>(())
//! ```

mod error;
mod resource_id;
mod segment;

pub use error::{ResourceIdError, ValidationError};
pub use resource_id::{ResourceId, PROVIDERS_KEY, RESOURCE_GROUPS_KEY, SUBSCRIPTIONS_KEY};
pub use segment::{tokenize, RawSegment};
