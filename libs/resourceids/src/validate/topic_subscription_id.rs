// Code generated by armid-generator. DO NOT EDIT.

use armid::ValidationError;

use crate::parse::parse_topic_subscription_id;

/// Validates that `value` is a valid Topic Subscription ID.
pub fn topic_subscription_id(value: &str, key: &str) -> Result<(), ValidationError> {
    parse_topic_subscription_id(value)
        .map(|_| ())
        .map_err(|err| ValidationError::new(key, err))
}
