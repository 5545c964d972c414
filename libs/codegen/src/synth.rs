//! Test-case synthesis from the example ID.
//!
//! Every generated parser ships with a test file derived from the same
//! example it was generated from: the example itself must parse, every
//! truncation of it must not, and casing mutations must behave as the
//! parser variant promises.

use std::collections::HashSet;

use armid::{RawSegment, PROVIDERS_KEY, RESOURCE_GROUPS_KEY, SUBSCRIPTIONS_KEY};

use crate::naming::mixed_case;
use crate::ResourceIdSchema;

/// One synthesized input and its expected outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub description: String,
    pub input: String,
    /// Field values in declared order, or `None` if the input must be rejected.
    pub expected: Option<Vec<String>>,
}

impl TestCase {
    fn rejected(description: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            input: input.into(),
            expected: None,
        }
    }

    fn accepted(
        description: impl Into<String>,
        input: impl Into<String>,
        schema: &ResourceIdSchema,
    ) -> Self {
        Self {
            description: description.into(),
            input: input.into(),
            expected: Some(
                schema
                    .segments()
                    .iter()
                    .map(|s| s.segment_value.clone())
                    .collect(),
            ),
        }
    }
}

/// Namespace appended by the trailing provider case.
const TRAILING_PROVIDER: &str = "Microsoft.Insights";

/// Cases for the strict parser: truncations, the example, the example with
/// an extra trailing pair, and an all upper-case copy of the example that
/// must be rejected.
pub fn parser_cases(schema: &ResourceIdSchema) -> Vec<TestCase> {
    let mut cases = truncation_cases(schema);
    cases.push(TestCase::accepted("valid", schema.canonical_id(), schema));
    cases.extend(trailing_cases(schema));

    // The runtime folds ASCII case only.
    let canonical = schema.canonical_id();
    let upper = canonical.to_ascii_uppercase();
    let any_key_changes = schema
        .path()
        .iter()
        .any(|s| s.key.to_ascii_uppercase() != s.key);
    if upper != canonical && any_key_changes {
        cases.push(TestCase::rejected("upper-cased", upper));
    }

    dedup(cases)
}

/// Cases for the case-insensitive parser: the same truncations, the example
/// and its trailing pairs, plus lower-, upper- and mixed-case generic keys
/// that must parse to the same values.
pub fn insensitive_cases(schema: &ResourceIdSchema) -> Vec<TestCase> {
    let mut cases = truncation_cases(schema);
    cases.push(TestCase::accepted("valid", schema.canonical_id(), schema));
    cases.extend(trailing_cases(schema));

    let mutations: [(&str, fn(&str) -> String); 3] = [
        ("lower-cased segment names", |k: &str| k.to_ascii_lowercase()),
        ("upper-cased segment names", |k: &str| k.to_ascii_uppercase()),
        ("mixed-cased segment names", mixed_case),
    ];

    for (description, mutate) in mutations {
        if let Some(input) = mutate_generic_keys(schema, mutate) {
            cases.push(TestCase::accepted(description, input, schema));
        }
    }

    dedup(cases)
}

/// The example cut off immediately before each segment's key and
/// immediately before its value.
fn truncation_cases(schema: &ResourceIdSchema) -> Vec<TestCase> {
    let mut cases = vec![TestCase::rejected("empty", "")];

    for segment in schema.segments() {
        let prefix: String = std::iter::once("/".to_string())
            .chain(
                schema.path()[..segment.position()]
                    .iter()
                    .map(|s| format!("{}/{}/", s.key, s.value)),
            )
            .collect();

        cases.push(TestCase::rejected(
            format!("missing {}", segment.field_name),
            prefix.clone(),
        ));
        cases.push(TestCase::rejected(
            format!("missing value for {}", segment.field_name),
            format!("{prefix}{}/", segment.segment_key),
        ));
    }

    cases
}

/// The example followed by one extra pair, which no parser may accept.
fn trailing_cases(schema: &ResourceIdSchema) -> Vec<TestCase> {
    let canonical = schema.canonical_id();
    vec![
        TestCase::rejected("trailing segment", format!("{canonical}/extras/extra1")),
        TestCase::rejected(
            "trailing provider",
            format!("{canonical}/{PROVIDERS_KEY}/{TRAILING_PROVIDER}"),
        ),
    ]
}

/// Rebuilds the example with every generic key passed through `mutate`.
///
/// Returns `None` when the mutation would change what the runtime does with
/// a key, i.e. turn it into a reserved or structural key or make two keys
/// collide, or when there are no generic keys to mutate.
fn mutate_generic_keys(schema: &ResourceIdSchema, mutate: fn(&str) -> String) -> Option<String> {
    let generic: HashSet<usize> = schema
        .generic_segments()
        .map(|s| s.position())
        .collect();
    if generic.is_empty() {
        return None;
    }

    let mut keys = HashSet::new();
    let mut path = Vec::with_capacity(schema.path().len());
    for (i, segment) in schema.path().iter().enumerate() {
        let key = if generic.contains(&i) {
            let mutated = mutate(&segment.key);
            let reserved = matches!(
                mutated.as_str(),
                SUBSCRIPTIONS_KEY | RESOURCE_GROUPS_KEY | "resourcegroups" | PROVIDERS_KEY
            );
            if reserved && mutated != segment.key {
                return None;
            }
            mutated
        } else {
            segment.key.clone()
        };

        if key != PROVIDERS_KEY && !keys.insert(key.clone()) && generic.contains(&i) {
            return None;
        }
        path.push(RawSegment::new(key, segment.value.clone()));
    }

    Some(
        path.iter()
            .map(|s| format!("/{}/{}", s.key, s.value))
            .collect(),
    )
}

fn dedup(cases: Vec<TestCase>) -> Vec<TestCase> {
    let mut seen = HashSet::new();
    cases
        .into_iter()
        .filter(|case| seen.insert(case.input.clone()))
        .collect()
}

/// The `<type>_test.rs` file paired with the generated parser.
pub fn emit_parser_tests(schema: &ResourceIdSchema, rewrite: bool) -> String {
    let struct_name = schema.struct_name();
    let parser = schema.parser_fn();
    let insensitive = schema.insensitive_parser_fn();

    let mut imports = vec![parser.clone()];
    if rewrite {
        imports.push(insensitive.clone());
    }
    imports.push(struct_name.clone());

    let mut out = String::new();
    out.push_str(&format!(
        "use super::{}::{{{}}};\n\n",
        schema.module_name(),
        imports.join(", ")
    ));

    out.push_str("#[test]\n");
    out.push_str(&format!("fn test_{}_id_formatter() {{\n", schema.module_name()));
    out.push_str(&format!("    let actual = {struct_name}::new(\n"));
    for segment in schema.segments() {
        out.push_str(&format!("        {:?},\n", segment.segment_value));
    }
    out.push_str("    )\n");
    out.push_str("    .id();\n");
    out.push_str(&format!(
        "    assert_eq!(actual, {:?});\n",
        schema.canonical_id()
    ));
    out.push_str("}\n");

    out.push('\n');
    out.push_str(&emit_parse_test_fn(schema, &parser, &parser_cases(schema)));

    if rewrite {
        out.push('\n');
        out.push_str(&emit_parse_test_fn(
            schema,
            &insensitive,
            &insensitive_cases(schema),
        ));
    }

    out
}

fn emit_parse_test_fn(schema: &ResourceIdSchema, parser: &str, cases: &[TestCase]) -> String {
    let struct_name = schema.struct_name();

    let mut out = String::new();
    out.push_str("#[test]\n");
    out.push_str(&format!("fn test_{parser}() {{\n"));
    out.push_str(&format!(
        "    let test_data: Vec<(&str, Option<{struct_name}>)> = vec![\n"
    ));
    for case in cases {
        out.push_str(&format!("        // {}\n", case.description));
        match &case.expected {
            None => out.push_str(&format!("        ({:?}, None),\n", case.input)),
            Some(values) => {
                out.push_str("        (\n");
                out.push_str(&format!("            {:?},\n", case.input));
                out.push_str(&format!("            Some({struct_name}::new(\n"));
                for value in values {
                    out.push_str(&format!("                {value:?},\n"));
                }
                out.push_str("            )),\n");
                out.push_str("        ),\n");
            }
        }
    }
    out.push_str("    ];\n\n");

    out.push_str("    for (input, expected) in test_data {\n");
    out.push_str(&format!("        let actual = {parser}(input);\n"));
    out.push_str("        let Some(expected) = expected else {\n");
    out.push_str("            assert!(actual.is_err(), \"expected an error parsing {input:?}\");\n");
    out.push_str("            continue;\n");
    out.push_str("        };\n\n");
    out.push_str(
        "        let actual = actual.unwrap_or_else(|err| panic!(\"parsing {input:?}: {err}\"));\n",
    );
    for segment in schema.segments() {
        out.push_str(&format!(
            "        assert_eq!(actual.{0}, expected.{0}, \"{0} of {{input:?}}\");\n",
            segment.argument_name
        ));
    }
    out.push_str("    }\n");
    out.push_str("}\n");
    out
}

/// The `<type>_id_test.rs` file paired with the generated validator.
pub fn emit_validator_tests(schema: &ResourceIdSchema) -> String {
    let validator = schema.validator_fn();

    let mut out = String::new();
    out.push_str(&format!("use super::{validator}::{validator};\n\n"));
    out.push_str("#[test]\n");
    out.push_str(&format!("fn test_{validator}() {{\n"));
    out.push_str("    let cases: Vec<(&str, bool)> = vec![\n");
    for case in parser_cases(schema) {
        out.push_str(&format!("        // {}\n", case.description));
        out.push_str(&format!(
            "        ({:?}, {}),\n",
            case.input,
            case.expected.is_some()
        ));
    }
    out.push_str("    ];\n\n");
    out.push_str("    for (input, valid) in cases {\n");
    out.push_str(&format!(
        "        let actual = {validator}(input, \"resource_id\");\n"
    ));
    out.push_str(
        "        assert_eq!(actual.is_ok(), valid, \"validating {input:?}: {actual:?}\");\n",
    );
    out.push_str("    }\n");
    out.push_str("}\n");
    out
}
