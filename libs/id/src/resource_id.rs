//! The runtime resource ID record.
//!
//! A [`ResourceId`] is built by [`ResourceId::parse`] and then consumed by a
//! type-specific parser, which pops every segment it expects and finally calls
//! [`ResourceId::validate_exhausted`]. Anything the parser did not pop turns
//! the whole identifier into an error.

use std::collections::{BTreeMap, VecDeque};
use std::str::FromStr;

use serde::Serialize;

use crate::{tokenize, RawSegment, ResourceIdError};

/// Key of the subscription segment.
pub const SUBSCRIPTIONS_KEY: &str = "subscriptions";

/// Canonical key of the resource group segment.
pub const RESOURCE_GROUPS_KEY: &str = "resourceGroups";

/// Key of the structural provider namespace segment.
pub const PROVIDERS_KEY: &str = "providers";

/// A parsed, not yet validated, resource ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceId {
    input: String,
    subscription_id: String,
    resource_group: String,
    provider: String,
    providers: VecDeque<String>,
    remaining: BTreeMap<String, String>,
}

impl ResourceId {
    /// Parses `input` into its reserved fields and generic segments.
    ///
    /// The first segment whose key is `subscriptions` in any casing claims
    /// the subscription slot, and the first `resourceGroups` in any casing
    /// claims the resource group slot. The value is only captured when the
    /// key has its canonical casing (`resourcegroups` is accepted too);
    /// otherwise the segment stays generic and the slot stays empty. Later
    /// segments with those keys are always generic, so a child resource whose
    /// own key is `subscriptions` still parses and can never be mistaken for
    /// the subscription.
    ///
    /// Every `providers` namespace is kept in order until popped with
    /// [`Self::pop_provider`]. A subscription is not required here; see
    /// [`Self::require_subscription`].
    pub fn parse(input: &str) -> Result<Self, ResourceIdError> {
        let segments = tokenize(input)?;

        let mut id = Self {
            input: input.to_string(),
            subscription_id: String::new(),
            resource_group: String::new(),
            provider: String::new(),
            providers: VecDeque::new(),
            remaining: BTreeMap::new(),
        };
        let mut subscription_claimed = false;
        let mut resource_group_claimed = false;

        for RawSegment { key, value } in segments {
            if key == PROVIDERS_KEY {
                if id.provider.is_empty() {
                    id.provider = value.clone();
                }
                id.providers.push_back(value);
                continue;
            }

            if !subscription_claimed && key.eq_ignore_ascii_case(SUBSCRIPTIONS_KEY) {
                subscription_claimed = true;
                if key == SUBSCRIPTIONS_KEY {
                    id.subscription_id = value;
                    continue;
                }
            } else if !resource_group_claimed && key.eq_ignore_ascii_case(RESOURCE_GROUPS_KEY) {
                resource_group_claimed = true;
                if key == RESOURCE_GROUPS_KEY || key == "resourcegroups" {
                    id.resource_group = value;
                    continue;
                }
            }

            if id.remaining.contains_key(&key) {
                return Err(ResourceIdError::DuplicateSegment {
                    key,
                    input: id.input,
                });
            }
            id.remaining.insert(key, value);
        }

        Ok(id)
    }

    /// Returns the identifier this record was parsed from.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the subscription ID, or `""` if absent or already popped.
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// Returns the resource group, or `""` if absent or already popped.
    pub fn resource_group(&self) -> &str {
        &self.resource_group
    }

    /// Returns the first provider namespace, or `""` if there is none.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Iterates over the provider namespaces that have not been popped yet.
    pub fn providers(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().map(String::as_str)
    }

    /// Iterates over the segments that have not been popped yet.
    pub fn remaining(&self) -> impl Iterator<Item = (&str, &str)> {
        self.remaining.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Fails with `MissingSubscription` unless a subscription was captured.
    pub fn require_subscription(&self) -> Result<&str, ResourceIdError> {
        if self.subscription_id.is_empty() {
            return Err(ResourceIdError::MissingSubscription {
                input: self.input.clone(),
            });
        }
        Ok(&self.subscription_id)
    }

    /// Removes the generic segment `key` and returns its value.
    ///
    /// The lookup is case-sensitive.
    pub fn pop_segment(&mut self, key: &str) -> Result<String, ResourceIdError> {
        self.remaining
            .remove(key)
            .ok_or_else(|| self.not_found(key))
    }

    /// Like [`Self::pop_segment`], but matches `key` in any casing.
    ///
    /// Only meant for normalizing identifiers echoed back by an API with
    /// inconsistent key casing. Never use it to validate user input.
    pub fn pop_segment_insensitively(&mut self, key: &str) -> Result<String, ResourceIdError> {
        if self.remaining.contains_key(key) {
            return self.pop_segment(key);
        }

        let actual = self
            .remaining
            .keys()
            .find(|k| k.eq_ignore_ascii_case(key))
            .cloned();

        match actual {
            Some(actual) => self.pop_segment(&actual),
            None => Err(self.not_found(key)),
        }
    }

    /// Takes the subscription ID. An empty subscription counts as absent.
    pub fn pop_subscription_id(&mut self) -> Result<String, ResourceIdError> {
        if self.subscription_id.is_empty() {
            return Err(self.not_found(SUBSCRIPTIONS_KEY));
        }
        Ok(std::mem::take(&mut self.subscription_id))
    }

    /// Takes the resource group. An empty resource group counts as absent.
    pub fn pop_resource_group(&mut self) -> Result<String, ResourceIdError> {
        if self.resource_group.is_empty() {
            return Err(self.not_found(RESOURCE_GROUPS_KEY));
        }
        Ok(std::mem::take(&mut self.resource_group))
    }

    /// Consumes the next provider namespace, which must equal `namespace`.
    ///
    /// Namespaces are popped in the order they appear in the identifier.
    pub fn pop_provider(&mut self, namespace: &str) -> Result<(), ResourceIdError> {
        self.pop_provider_matching(namespace, |actual| actual == namespace)
    }

    /// Like [`Self::pop_provider`], but compares the namespace in any casing.
    pub fn pop_provider_insensitively(&mut self, namespace: &str) -> Result<(), ResourceIdError> {
        self.pop_provider_matching(namespace, |actual| actual.eq_ignore_ascii_case(namespace))
    }

    fn pop_provider_matching(
        &mut self,
        namespace: &str,
        matches: impl Fn(&str) -> bool,
    ) -> Result<(), ResourceIdError> {
        match self.providers.front() {
            Some(actual) if matches(actual) => {
                self.providers.pop_front();
                Ok(())
            }
            _ => Err(self.not_found(&format!("{PROVIDERS_KEY}/{namespace}"))),
        }
    }

    /// Returns true if nothing is left to pop.
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
            && self.providers.is_empty()
            && self.subscription_id.is_empty()
            && self.resource_group.is_empty()
    }

    /// Consumes the record, failing with `UnexpectedSegments` if any segment
    /// was never popped.
    ///
    /// Reserved fields and provider namespaces count as leftovers too: a
    /// parser for a subscription-less resource must not accept an identifier
    /// that carries a subscription.
    pub fn validate_exhausted(self) -> Result<(), ResourceIdError> {
        if self.is_exhausted() {
            return Ok(());
        }

        let mut segments = Vec::with_capacity(self.remaining.len() + self.providers.len() + 2);
        if !self.subscription_id.is_empty() {
            segments.push(format!("{SUBSCRIPTIONS_KEY}/{}", self.subscription_id));
        }
        if !self.resource_group.is_empty() {
            segments.push(format!("{RESOURCE_GROUPS_KEY}/{}", self.resource_group));
        }
        segments.extend(self.providers.iter().map(|ns| format!("{PROVIDERS_KEY}/{ns}")));
        segments.extend(self.remaining.iter().map(|(k, v)| format!("{k}/{v}")));

        Err(ResourceIdError::UnexpectedSegments {
            input: self.input,
            segments,
        })
    }

    fn not_found(&self, key: &str) -> ResourceIdError {
        ResourceIdError::SegmentNotFound {
            key: key.to_string(),
            input: self.input.clone(),
        }
    }
}

impl FromStr for ResourceId {
    type Err = ResourceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const APP_SERVICE: &str = "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/foo/providers/Microsoft.Web/sites/site1";

    #[test]
    fn test_parse_reserved_fields() {
        let id = ResourceId::parse(APP_SERVICE).unwrap();
        assert_eq!(id.subscription_id(), "00000000-0000-0000-0000-000000000000");
        assert_eq!(id.resource_group(), "foo");
        assert_eq!(id.provider(), "Microsoft.Web");
        let remaining: Vec<_> = id.remaining().collect();
        assert_eq!(remaining, vec![("sites", "site1")]);
    }

    #[test]
    fn test_parse_empty_is_malformed() {
        let err = ResourceId::parse("").unwrap_err();
        assert!(matches!(err, ResourceIdError::MalformedIdentifier { .. }));
    }

    #[test]
    fn test_second_subscriptions_segment_is_generic() {
        let mut id = ResourceId::parse(
            "/subscriptions/S1/providers/Microsoft.ServiceBus/namespaces/N/topics/T/subscriptions/S2",
        )
        .unwrap();
        assert_eq!(id.subscription_id(), "S1");
        assert_eq!(id.pop_segment("subscriptions").unwrap(), "S2");
        assert_eq!(id.pop_segment("namespaces").unwrap(), "N");
        assert_eq!(id.pop_segment("topics").unwrap(), "T");
        assert_eq!(id.pop_subscription_id().unwrap(), "S1");
        id.pop_provider("Microsoft.ServiceBus").unwrap();
        id.validate_exhausted().unwrap();
    }

    #[test]
    fn test_lowercase_resource_groups_key() {
        let id = ResourceId::parse("/subscriptions/sub1/resourcegroups/Group1").unwrap();
        assert_eq!(id.resource_group(), "Group1");
        assert_eq!(id.remaining().count(), 0);
    }

    #[test]
    fn test_other_resource_groups_casing_is_generic() {
        let mut id = ResourceId::parse("/subscriptions/sub1/ResourceGroups/group1").unwrap();
        assert_eq!(id.resource_group(), "");
        assert!(id.pop_resource_group().unwrap_err().is_not_found());
        assert_eq!(id.pop_segment_insensitively("resourceGroups").unwrap(), "group1");
    }

    #[test]
    fn test_miscased_subscriptions_claims_the_reserved_slot() {
        let input = "/Subscriptions/S1/resourceGroups/g/providers/Microsoft.ServiceBus/namespaces/N/topics/T/subscriptions/S2";
        let mut id = ResourceId::parse(input).unwrap();

        // The nested child must never be read as the subscription.
        assert_eq!(id.subscription_id(), "");
        assert!(id.pop_subscription_id().unwrap_err().is_not_found());
        assert_eq!(id.pop_segment("subscriptions").unwrap(), "S2");
        assert_eq!(id.pop_segment("Subscriptions").unwrap(), "S1");
    }

    #[test]
    fn test_miscased_resource_groups_claims_the_reserved_slot() {
        let mut id =
            ResourceId::parse("/subscriptions/sub1/ResourceGroups/g1/resourceGroups/g2").unwrap();
        assert_eq!(id.resource_group(), "");
        assert_eq!(id.pop_segment("resourceGroups").unwrap(), "g2");
        assert_eq!(id.pop_segment("ResourceGroups").unwrap(), "g1");
    }

    #[test]
    fn test_subscription_is_optional() {
        let id = ResourceId::parse("/providers/Microsoft.Management/managementGroups/group1").unwrap();
        assert_eq!(id.subscription_id(), "");
        assert!(matches!(
            id.require_subscription().unwrap_err(),
            ResourceIdError::MissingSubscription { .. }
        ));
    }

    #[test]
    fn test_duplicate_generic_key() {
        let err = ResourceId::parse("/subscriptions/sub1/sites/a/sites/b").unwrap_err();
        assert_eq!(
            err,
            ResourceIdError::DuplicateSegment {
                key: "sites".to_string(),
                input: "/subscriptions/sub1/sites/a/sites/b".to_string(),
            }
        );
    }

    #[test]
    fn test_pop_segment_is_case_sensitive() {
        let mut id = ResourceId::parse("/subscriptions/sub1/Sites/site1").unwrap();
        let err = id.pop_segment("sites").unwrap_err();
        assert_eq!(
            err,
            ResourceIdError::SegmentNotFound {
                key: "sites".to_string(),
                input: "/subscriptions/sub1/Sites/site1".to_string(),
            }
        );
        assert_eq!(id.pop_segment_insensitively("sites").unwrap(), "site1");
        assert!(id.pop_segment_insensitively("sites").is_err());
    }

    #[test]
    fn test_pop_removes_segment() {
        let mut id = ResourceId::parse(APP_SERVICE).unwrap();
        assert_eq!(id.pop_segment("sites").unwrap(), "site1");
        assert!(id.pop_segment("sites").unwrap_err().is_not_found());
    }

    #[test]
    fn test_validate_exhausted_after_all_pops() {
        let mut id = ResourceId::parse(APP_SERVICE).unwrap();
        id.pop_subscription_id().unwrap();
        id.pop_resource_group().unwrap();
        id.pop_provider("Microsoft.Web").unwrap();
        id.pop_segment("sites").unwrap();
        assert!(id.is_exhausted());
        id.validate_exhausted().unwrap();
    }

    #[test]
    fn test_validate_exhausted_rejects_leftovers() {
        let input = format!("{APP_SERVICE}/slots/staging");
        let mut id = ResourceId::parse(&input).unwrap();
        id.pop_subscription_id().unwrap();
        id.pop_resource_group().unwrap();
        id.pop_provider("Microsoft.Web").unwrap();
        id.pop_segment("sites").unwrap();

        let err = id.validate_exhausted().unwrap_err();
        assert_eq!(
            err,
            ResourceIdError::UnexpectedSegments {
                input,
                segments: vec!["slots/staging".to_string()],
            }
        );
    }

    #[test]
    fn test_validate_exhausted_counts_unpopped_reserved_fields() {
        let mut id = ResourceId::parse(APP_SERVICE).unwrap();
        id.pop_segment("sites").unwrap();

        let err = id.validate_exhausted().unwrap_err();
        match err {
            ResourceIdError::UnexpectedSegments { segments, .. } => assert_eq!(
                segments,
                vec![
                    "subscriptions/00000000-0000-0000-0000-000000000000".to_string(),
                    "resourceGroups/foo".to_string(),
                    "providers/Microsoft.Web".to_string(),
                ]
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_every_provider_is_recorded() {
        let mut id = ResourceId::parse(
            "/subscriptions/sub1/resourceGroups/group1/providers/Microsoft.Compute/virtualMachines/vm1/providers/Microsoft.Insights/diagnosticSettings/setting1",
        )
        .unwrap();
        assert_eq!(id.provider(), "Microsoft.Compute");
        let providers: Vec<&str> = id.providers().collect();
        assert_eq!(providers, vec!["Microsoft.Compute", "Microsoft.Insights"]);
        let keys: Vec<&str> = id.remaining().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["diagnosticSettings", "virtualMachines"]);

        // Namespaces pop in order.
        assert!(id.pop_provider("Microsoft.Insights").unwrap_err().is_not_found());
        id.pop_provider("Microsoft.Compute").unwrap();
        id.pop_provider("Microsoft.Insights").unwrap();
        assert_eq!(id.providers().count(), 0);
        assert_eq!(id.provider(), "Microsoft.Compute");
    }

    #[test]
    fn test_pop_provider_is_case_sensitive() {
        let mut id = ResourceId::parse("/providers/microsoft.web/sites/site1").unwrap();
        let err = id.pop_provider("Microsoft.Web").unwrap_err();
        assert_eq!(
            err,
            ResourceIdError::SegmentNotFound {
                key: "providers/Microsoft.Web".to_string(),
                input: "/providers/microsoft.web/sites/site1".to_string(),
            }
        );
        id.pop_provider_insensitively("Microsoft.Web").unwrap();
    }

    #[test]
    fn test_validate_exhausted_counts_unpopped_providers() {
        let input = format!("{APP_SERVICE}/providers/Microsoft.Insights");
        let mut id = ResourceId::parse(&input).unwrap();
        id.pop_subscription_id().unwrap();
        id.pop_resource_group().unwrap();
        id.pop_provider("Microsoft.Web").unwrap();
        id.pop_segment("sites").unwrap();
        assert!(!id.is_exhausted());

        let err = id.validate_exhausted().unwrap_err();
        assert_eq!(
            err,
            ResourceIdError::UnexpectedSegments {
                input,
                segments: vec!["providers/Microsoft.Insights".to_string()],
            }
        );
    }

    #[test]
    fn test_from_str() {
        let id: ResourceId = APP_SERVICE.parse().unwrap();
        assert_eq!(id.input(), APP_SERVICE);
    }

    #[test]
    fn test_serializes_remaining() {
        let id = ResourceId::parse(APP_SERVICE).unwrap();
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json["resource_group"], "foo");
        assert_eq!(json["providers"][0], "Microsoft.Web");
        assert_eq!(json["remaining"]["sites"], "site1");
    }
}
