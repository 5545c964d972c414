// Code generated by armid-generator. DO NOT EDIT.

use std::fmt;

use armid::{ResourceId, ResourceIdError};

/// Resource ID of the App Service resource type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppServiceId {
    pub subscription_id: String,
    pub resource_group: String,
    pub name: String,
}

impl AppServiceId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            name: name.into(),
        }
    }

    /// Formats the canonical resource ID.
    pub fn id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Web/sites/{}",
            self.subscription_id,
            self.resource_group,
            self.name,
        )
    }
}

impl fmt::Display for AppServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segments: Vec<String> = vec![
            format!("Name {:?}", self.name),
            format!("Resource Group {:?}", self.resource_group),
        ];
        write!(f, "App Service: ({})", segments.join(" / "))
    }
}

/// Parses a [`AppServiceId`], requiring the exact casing of every segment key.
pub fn parse_app_service_id(input: &str) -> Result<AppServiceId, ResourceIdError> {
    let mut id = ResourceId::parse(input)?;

    let subscription_id = id.pop_subscription_id()?;
    let resource_group = id.pop_resource_group()?;
    id.pop_provider("Microsoft.Web")?;
    let name = id.pop_segment("sites")?;

    id.validate_exhausted()?;

    Ok(AppServiceId {
        subscription_id,
        resource_group,
        name,
    })
}

/// Parses a [`AppServiceId`], accepting segment keys in any casing.
///
/// Only use this to normalize IDs returned by the API; user input must go
/// through [`parse_app_service_id`].
pub fn parse_app_service_id_insensitively(input: &str) -> Result<AppServiceId, ResourceIdError> {
    let mut id = ResourceId::parse(input)?;

    let subscription_id = id.pop_subscription_id()?;
    let resource_group = id.pop_resource_group()?;
    id.pop_provider_insensitively("Microsoft.Web")?;
    let name = id.pop_segment_insensitively("sites")?;

    id.validate_exhausted()?;

    Ok(AppServiceId {
        subscription_id,
        resource_group,
        name,
    })
}
