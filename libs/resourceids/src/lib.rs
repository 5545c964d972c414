//! # armid-resourceids
//!
//! Typed resource IDs generated from `resourceids.toml`.
//!
//! Everything under `parse` and `validate` is generated; edit the manifest and
//! rerun `armid-generator generate-all` instead of editing those files. They
//! are kept byte-for-byte as emitted, which is why formatting skips them.
//!
//! ```
//! use armid_resourceids::parse::{parse_app_service_id, AppServiceId};
//!
//! let id = parse_app_service_id(
//!     "/subscriptions/sub1/resourceGroups/group1/providers/Microsoft.Web/sites/site1",
//! )?;
//! assert_eq!(id, AppServiceId::new("sub1", "group1", "site1"));
//! assert_eq!(id.to_string(), r#"App Service: (Name "site1" / Resource Group "group1")"#);
//! # Ok::<(), armid::ResourceIdError>(())
//! ```

#[rustfmt::skip]
pub mod parse;
#[rustfmt::skip]
pub mod validate;
