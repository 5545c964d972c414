// Code generated by armid-generator. DO NOT EDIT.

use super::topic_subscription_id::topic_subscription_id;

#[test]
fn test_topic_subscription_id() {
    let cases: Vec<(&str, bool)> = vec![
        // empty
        ("", false),
        // missing SubscriptionId
        ("/", false),
        // missing value for SubscriptionId
        ("/subscriptions/", false),
        // missing ResourceGroup
        ("/subscriptions/S1/", false),
        // missing value for ResourceGroup
        ("/subscriptions/S1/resourceGroups/", false),
        // missing NamespaceName
        ("/subscriptions/S1/resourceGroups/group1/providers/Microsoft.ServiceBus/", false),
        // missing value for NamespaceName
        ("/subscriptions/S1/resourceGroups/group1/providers/Microsoft.ServiceBus/namespaces/", false),
        // missing TopicName
        ("/subscriptions/S1/resourceGroups/group1/providers/Microsoft.ServiceBus/namespaces/N/", false),
        // missing value for TopicName
        ("/subscriptions/S1/resourceGroups/group1/providers/Microsoft.ServiceBus/namespaces/N/topics/", false),
        // missing SubscriptionName
        ("/subscriptions/S1/resourceGroups/group1/providers/Microsoft.ServiceBus/namespaces/N/topics/T/", false),
        // missing value for SubscriptionName
        ("/subscriptions/S1/resourceGroups/group1/providers/Microsoft.ServiceBus/namespaces/N/topics/T/subscriptions/", false),
        // valid
        ("/subscriptions/S1/resourceGroups/group1/providers/Microsoft.ServiceBus/namespaces/N/topics/T/subscriptions/S2", true),
        // trailing segment
        ("/subscriptions/S1/resourceGroups/group1/providers/Microsoft.ServiceBus/namespaces/N/topics/T/subscriptions/S2/extras/extra1", false),
        // trailing provider
        ("/subscriptions/S1/resourceGroups/group1/providers/Microsoft.ServiceBus/namespaces/N/topics/T/subscriptions/S2/providers/Microsoft.Insights", false),
        // upper-cased
        ("/SUBSCRIPTIONS/S1/RESOURCEGROUPS/GROUP1/PROVIDERS/MICROSOFT.SERVICEBUS/NAMESPACES/N/TOPICS/T/SUBSCRIPTIONS/S2", false),
    ];

    for (input, valid) in cases {
        let actual = topic_subscription_id(input, "resource_id");
        assert_eq!(actual.is_ok(), valid, "validating {input:?}: {actual:?}");
    }
}
