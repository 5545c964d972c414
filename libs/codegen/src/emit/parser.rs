//! Parser emitters: the strict parser and its case-insensitive variant.

use armid::PROVIDERS_KEY;

use crate::{ResourceIdSchema, SegmentRole};

/// `parse_<type>_id`, which requires the exact casing of every key.
pub fn emit_parser(schema: &ResourceIdSchema) -> String {
    let doc = format!(
        "/// Parses a [`{}`], requiring the exact casing of every segment key.\n",
        schema.struct_name()
    );
    emit_parse_fn(schema, &doc, &schema.parser_fn(), "")
}

/// `parse_<type>_id_insensitively`, which accepts generic keys and provider
/// namespaces in any casing. Reserved fields are only ever taken from their
/// canonical keys.
pub fn emit_insensitive_parser(schema: &ResourceIdSchema) -> String {
    let doc = format!(
        "/// Parses a [`{}`], accepting segment keys in any casing.\n\
         ///\n\
         /// Only use this to normalize IDs returned by the API; user input must go\n\
         /// through [`{}`].\n",
        schema.struct_name(),
        schema.parser_fn()
    );
    emit_parse_fn(schema, &doc, &schema.insensitive_parser_fn(), "_insensitively")
}

fn emit_parse_fn(schema: &ResourceIdSchema, doc: &str, name: &str, suffix: &str) -> String {
    let mut out = String::from(doc);
    out.push_str(&format!(
        "pub fn {name}(input: &str) -> Result<{}, ResourceIdError> {{\n",
        schema.struct_name()
    ));
    out.push_str("    let mut id = ResourceId::parse(input)?;\n\n");

    // Pops follow the example's path order, providers included.
    let mut segments = schema.segments().iter().peekable();
    for (position, raw) in schema.path().iter().enumerate() {
        if raw.key == PROVIDERS_KEY {
            out.push_str(&format!("    id.pop_provider{suffix}({:?})?;\n", raw.value));
            continue;
        }
        let Some(segment) = segments.next_if(|s| s.position() == position) else {
            continue;
        };
        let pop = match segment.role {
            SegmentRole::Subscription => "id.pop_subscription_id()".to_string(),
            SegmentRole::ResourceGroup => "id.pop_resource_group()".to_string(),
            SegmentRole::Generic => {
                format!("id.pop_segment{suffix}({:?})", segment.segment_key)
            }
        };
        out.push_str(&format!("    let {} = {pop}?;\n", segment.argument_name));
    }

    out.push_str("\n    id.validate_exhausted()?;\n\n");
    out.push_str(&format!("    Ok({} {{\n", schema.struct_name()));
    for segment in schema.segments() {
        out.push_str(&format!("        {},\n", segment.argument_name));
    }
    out.push_str("    })\n");
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classify, Renames};

    fn topic_subscription() -> ResourceIdSchema {
        classify(
            "TopicSubscription",
            "/subscriptions/S1/resourceGroups/group1/providers/Microsoft.ServiceBus/namespaces/N/topics/T/subscriptions/S2",
            &Renames::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_emit_parser() {
        let expected = "\
/// Parses a [`TopicSubscriptionId`], requiring the exact casing of every segment key.
pub fn parse_topic_subscription_id(input: &str) -> Result<TopicSubscriptionId, ResourceIdError> {
    let mut id = ResourceId::parse(input)?;

    let subscription_id = id.pop_subscription_id()?;
    let resource_group = id.pop_resource_group()?;
    id.pop_provider(\"Microsoft.ServiceBus\")?;
    let namespace_name = id.pop_segment(\"namespaces\")?;
    let topic_name = id.pop_segment(\"topics\")?;
    let subscription_name = id.pop_segment(\"subscriptions\")?;

    id.validate_exhausted()?;

    Ok(TopicSubscriptionId {
        subscription_id,
        resource_group,
        namespace_name,
        topic_name,
        subscription_name,
    })
}
";
        assert_eq!(emit_parser(&topic_subscription()), expected);
    }

    #[test]
    fn test_emit_insensitive_parser() {
        let out = emit_insensitive_parser(&topic_subscription());
        assert!(out.contains("pub fn parse_topic_subscription_id_insensitively(input: &str)"));
        assert!(out.contains("let subscription_id = id.pop_subscription_id()?;"));
        assert!(out.contains("let resource_group = id.pop_resource_group()?;"));
        assert!(out.contains("id.pop_provider_insensitively(\"Microsoft.ServiceBus\")?;"));
        assert!(out.contains("let topic_name = id.pop_segment_insensitively(\"topics\")?;"));
        assert!(out.contains("through [`parse_topic_subscription_id`]."));
        assert!(!out.contains("id.pop_segment(\""));
    }

    #[test]
    fn test_subscriptionless_parser_pops_no_reserved_fields() {
        let schema = classify(
            "ManagementGroup",
            "/providers/Microsoft.Management/managementGroups/group1",
            &Renames::new(),
        )
        .unwrap();
        let out = emit_parser(&schema);
        assert!(!out.contains("pop_subscription_id"));
        assert!(!out.contains("pop_resource_group"));
        assert!(out.contains("let name = id.pop_segment(\"managementGroups\")?;"));
    }

    #[test]
    fn test_every_provider_is_popped_in_path_order() {
        let schema = classify(
            "DiagnosticSetting",
            "/subscriptions/sub1/resourceGroups/group1/providers/Microsoft.Compute/virtualMachines/vm1/providers/Microsoft.Insights/diagnosticSettings/setting1",
            &Renames::new(),
        )
        .unwrap();
        let out = emit_parser(&schema);
        let pops: Vec<&str> = out
            .lines()
            .map(str::trim)
            .filter(|line| line.contains(".pop_"))
            .collect();
        assert_eq!(
            pops,
            vec![
                "let subscription_id = id.pop_subscription_id()?;",
                "let resource_group = id.pop_resource_group()?;",
                "id.pop_provider(\"Microsoft.Compute\")?;",
                "let virtual_machine_name = id.pop_segment(\"virtualMachines\")?;",
                "id.pop_provider(\"Microsoft.Insights\")?;",
                "let name = id.pop_segment(\"diagnosticSettings\")?;",
            ]
        );
    }
}
