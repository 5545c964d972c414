// Code generated by armid-generator. DO NOT EDIT.

use std::fmt;

use armid::{ResourceId, ResourceIdError};

/// Resource ID of the Topic Subscription resource type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicSubscriptionId {
    pub subscription_id: String,
    pub resource_group: String,
    pub namespace_name: String,
    pub topic_name: String,
    pub subscription_name: String,
}

impl TopicSubscriptionId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        namespace_name: impl Into<String>,
        topic_name: impl Into<String>,
        subscription_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            namespace_name: namespace_name.into(),
            topic_name: topic_name.into(),
            subscription_name: subscription_name.into(),
        }
    }

    /// Formats the canonical resource ID.
    pub fn id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.ServiceBus/namespaces/{}/topics/{}/subscriptions/{}",
            self.subscription_id,
            self.resource_group,
            self.namespace_name,
            self.topic_name,
            self.subscription_name,
        )
    }
}

impl fmt::Display for TopicSubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segments: Vec<String> = vec![
            format!("Subscription Name {:?}", self.subscription_name),
            format!("Topic Name {:?}", self.topic_name),
            format!("Namespace Name {:?}", self.namespace_name),
            format!("Resource Group {:?}", self.resource_group),
        ];
        write!(f, "Topic Subscription: ({})", segments.join(" / "))
    }
}

/// Parses a [`TopicSubscriptionId`], requiring the exact casing of every segment key.
pub fn parse_topic_subscription_id(input: &str) -> Result<TopicSubscriptionId, ResourceIdError> {
    let mut id = ResourceId::parse(input)?;

    let subscription_id = id.pop_subscription_id()?;
    let resource_group = id.pop_resource_group()?;
    id.pop_provider("Microsoft.ServiceBus")?;
    let namespace_name = id.pop_segment("namespaces")?;
    let topic_name = id.pop_segment("topics")?;
    let subscription_name = id.pop_segment("subscriptions")?;

    id.validate_exhausted()?;

    Ok(TopicSubscriptionId {
        subscription_id,
        resource_group,
        namespace_name,
        topic_name,
        subscription_name,
    })
}
