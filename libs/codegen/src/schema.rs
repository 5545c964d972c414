//! Segment classification: from one example ID to a [`ResourceIdSchema`].

use std::collections::{BTreeMap, HashSet};

use armid::{tokenize, RawSegment, PROVIDERS_KEY, RESOURCE_GROUPS_KEY, SUBSCRIPTIONS_KEY};
use serde::Serialize;
use tracing::debug;

use crate::naming::{
    is_pascal_identifier, is_rust_keyword, label, pascal_case, singularize, snake_case,
};
use crate::CodegenError;

/// Segment key to PascalCase field name overrides, for keys the
/// singularization heuristic gets wrong.
pub type Renames = BTreeMap<String, String>;

/// What a classified segment turns into in the generated record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentRole {
    Subscription,
    ResourceGroup,
    Generic,
}

/// One classified segment of the example ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub role: SegmentRole,
    /// PascalCase label, e.g. `SiteName`.
    pub field_name: String,
    /// snake_case form of `field_name`; the struct field and constructor argument.
    pub argument_name: String,
    pub segment_key: String,
    pub segment_value: String,
    #[serde(skip)]
    position: usize,
}

impl Segment {
    /// Index of this segment within [`ResourceIdSchema::path`].
    pub fn position(&self) -> usize {
        self.position
    }
}

/// The classified shape of one resource ID type.
///
/// Built once by [`classify`] and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceIdSchema {
    type_name: String,
    example_id: String,
    segments: Vec<Segment>,
    has_subscription_id: bool,
    has_resource_group: bool,
    format_string: String,
    #[serde(skip)]
    path: Vec<RawSegment>,
}

/// Classifies every segment of `example_id` for the type `type_name`.
///
/// `providers` segments are structural: they stay literal in the format
/// string and produce no field. The first `subscriptions` segment is the
/// subscription only when it has that exact casing, which is how the runtime
/// captures it. The first `resourceGroups` segment (any casing) is the
/// resource group and is canonicalized. Every other segment becomes a
/// generic `<Singular>Name` field, or plain `Name` when its singular form is
/// the type name itself.
pub fn classify(
    type_name: &str,
    example_id: &str,
    renames: &Renames,
) -> Result<ResourceIdSchema, CodegenError> {
    if !is_pascal_identifier(type_name) {
        return Err(CodegenError::InvalidTypeName(type_name.to_string()));
    }

    let tokens = tokenize(example_id)?;

    let mut path = Vec::with_capacity(tokens.len());
    let mut segments = Vec::with_capacity(tokens.len());
    let mut subscription_claimed = false;
    let mut has_subscription_id = false;
    let mut has_resource_group = false;
    let mut fields = HashSet::new();
    let mut keys = HashSet::new();

    for (position, RawSegment { key, value }) in tokens.into_iter().enumerate() {
        if key == PROVIDERS_KEY {
            path.push(RawSegment::new(key, value));
            continue;
        }

        let claims_subscription =
            !subscription_claimed && key.eq_ignore_ascii_case(SUBSCRIPTIONS_KEY);
        subscription_claimed |= claims_subscription;

        let (role, key, field_name) = if claims_subscription && key == SUBSCRIPTIONS_KEY {
            has_subscription_id = true;
            (SegmentRole::Subscription, key, "SubscriptionId".to_string())
        } else if key.eq_ignore_ascii_case(RESOURCE_GROUPS_KEY) && !has_resource_group {
            has_resource_group = true;
            (
                SegmentRole::ResourceGroup,
                RESOURCE_GROUPS_KEY.to_string(),
                "ResourceGroup".to_string(),
            )
        } else {
            let field = generic_field_name(type_name, &key, renames)?;
            if !keys.insert(key.clone()) {
                return Err(CodegenError::DuplicateField { key, field });
            }
            (SegmentRole::Generic, key, field)
        };

        if !fields.insert(field_name.clone()) {
            return Err(CodegenError::DuplicateField {
                key,
                field: field_name,
            });
        }

        debug!(key = %key, field = %field_name, ?role, "classified segment");

        segments.push(Segment {
            role,
            argument_name: snake_case(&field_name),
            field_name,
            segment_key: key.clone(),
            segment_value: value.clone(),
            position,
        });
        path.push(RawSegment::new(key, value));
    }

    if segments.is_empty() {
        return Err(CodegenError::NoSegments(example_id.to_string()));
    }

    let format_string = build_format_string(&path, &segments);

    Ok(ResourceIdSchema {
        type_name: type_name.to_string(),
        example_id: example_id.to_string(),
        segments,
        has_subscription_id,
        has_resource_group,
        format_string,
        path,
    })
}

/// Locals of the generated parser that a field must not shadow.
const PARSER_LOCALS: [&str; 2] = ["input", "id"];

fn generic_field_name(
    type_name: &str,
    key: &str,
    renames: &Renames,
) -> Result<String, CodegenError> {
    let field = match renames.get(key) {
        Some(field) => field.clone(),
        None => {
            let stem = singularize(key);
            if stem.eq_ignore_ascii_case(type_name) {
                "Name".to_string()
            } else {
                format!("{}Name", pascal_case(&stem))
            }
        }
    };

    let argument = snake_case(&field);
    if !is_pascal_identifier(&field)
        || is_rust_keyword(&argument)
        || PARSER_LOCALS.contains(&argument.as_str())
    {
        return Err(CodegenError::InvalidFieldName {
            key: key.to_string(),
            field,
        });
    }

    Ok(field)
}

fn build_format_string(path: &[RawSegment], segments: &[Segment]) -> String {
    let placeholders: HashSet<usize> = segments.iter().map(|s| s.position).collect();

    path.iter()
        .enumerate()
        .map(|(i, segment)| {
            let value = if placeholders.contains(&i) {
                "{}".to_string()
            } else {
                escape_braces(&segment.value)
            };
            format!("/{}/{}", escape_braces(&segment.key), value)
        })
        .collect()
}

fn escape_braces(text: &str) -> String {
    text.replace('{', "{{").replace('}', "}}")
}

impl ResourceIdSchema {
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The example ID exactly as supplied.
    pub fn example_id(&self) -> &str {
        &self.example_id
    }

    /// Classified segments in the order they appear in the example.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn generic_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments
            .iter()
            .filter(|s| s.role == SegmentRole::Generic)
    }

    pub fn has_subscription_id(&self) -> bool {
        self.has_subscription_id
    }

    pub fn has_resource_group(&self) -> bool {
        self.has_resource_group
    }

    /// `format!` string with one `{}` per classified segment, in order.
    pub fn format_string(&self) -> &str {
        &self.format_string
    }

    /// Every segment of the example, providers included, with reserved keys
    /// in canonical casing.
    pub fn path(&self) -> &[RawSegment] {
        &self.path
    }

    /// The example rebuilt from its segments: `/key/value/...` without a
    /// trailing slash and with canonical reserved keys.
    pub fn canonical_id(&self) -> String {
        self.path
            .iter()
            .map(|s| format!("/{}/{}", s.key, s.value))
            .collect()
    }

    /// `AppService` -> `AppServiceId`
    pub fn struct_name(&self) -> String {
        format!("{}Id", self.type_name)
    }

    /// `AppService` -> `app_service`
    pub fn module_name(&self) -> String {
        snake_case(&self.type_name)
    }

    /// `AppService` -> `App Service`
    pub fn label(&self) -> String {
        label(&self.type_name)
    }

    pub fn parser_fn(&self) -> String {
        format!("parse_{}_id", self.module_name())
    }

    pub fn insensitive_parser_fn(&self) -> String {
        format!("parse_{}_id_insensitively", self.module_name())
    }

    pub fn validator_fn(&self) -> String {
        format!("{}_id", self.module_name())
    }
}
