// Code generated by armid-generator. DO NOT EDIT.

use std::fmt;

use armid::{ResourceId, ResourceIdError};

/// Resource ID of the Management Group resource type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ManagementGroupId {
    pub name: String,
}

impl ManagementGroupId {
    pub fn new(
        name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
        }
    }

    /// Formats the canonical resource ID.
    pub fn id(&self) -> String {
        format!(
            "/providers/Microsoft.Management/managementGroups/{}",
            self.name,
        )
    }
}

impl fmt::Display for ManagementGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segments: Vec<String> = vec![
            format!("Name {:?}", self.name),
        ];
        write!(f, "Management Group: ({})", segments.join(" / "))
    }
}

/// Parses a [`ManagementGroupId`], requiring the exact casing of every segment key.
pub fn parse_management_group_id(input: &str) -> Result<ManagementGroupId, ResourceIdError> {
    let mut id = ResourceId::parse(input)?;

    id.pop_provider("Microsoft.Management")?;
    let name = id.pop_segment("managementGroups")?;

    id.validate_exhausted()?;

    Ok(ManagementGroupId {
        name,
    })
}
