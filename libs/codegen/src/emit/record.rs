//! Record type, constructor, and formatter emitters.

use crate::naming::label;
use crate::{ResourceIdSchema, SegmentRole};

/// `pub struct <Type>Id` with one `String` field per segment, in order.
pub fn emit_type(schema: &ResourceIdSchema) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "/// Resource ID of the {} resource type.\n",
        schema.label()
    ));
    out.push_str("#[derive(Debug, Clone, PartialEq, Eq, Hash)]\n");
    out.push_str(&format!("pub struct {} {{\n", schema.struct_name()));
    for segment in schema.segments() {
        out.push_str(&format!("    pub {}: String,\n", segment.argument_name));
    }
    out.push_str("}\n");
    out
}

/// `new(...)`, taking one argument per segment in declared order.
///
/// The constructor does no validation; that is the parser's job.
pub fn emit_constructor(schema: &ResourceIdSchema) -> String {
    let mut out = String::new();
    out.push_str("    pub fn new(\n");
    for segment in schema.segments() {
        out.push_str(&format!(
            "        {}: impl Into<String>,\n",
            segment.argument_name
        ));
    }
    out.push_str("    ) -> Self {\n");
    out.push_str("        Self {\n");
    for segment in schema.segments() {
        out.push_str(&format!(
            "            {0}: {0}.into(),\n",
            segment.argument_name
        ));
    }
    out.push_str("        }\n");
    out.push_str("    }\n");
    out
}

/// `id()`, the exact inverse of the generated parser.
pub fn emit_formatter(schema: &ResourceIdSchema) -> String {
    let mut out = String::new();
    out.push_str("    /// Formats the canonical resource ID.\n");
    out.push_str("    pub fn id(&self) -> String {\n");
    out.push_str("        format!(\n");
    out.push_str(&format!("            {:?},\n", schema.format_string()));
    for segment in schema.segments() {
        out.push_str(&format!("            self.{},\n", segment.argument_name));
    }
    out.push_str("        )\n");
    out.push_str("    }\n");
    out
}

/// `Display`, a human-readable summary such as
/// `App Service: (Name "site1" / Resource Group "foo")`.
///
/// Segments are listed innermost first and the subscription is left out.
pub fn emit_display(schema: &ResourceIdSchema) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "impl fmt::Display for {} {{\n",
        schema.struct_name()
    ));
    out.push_str("    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {\n");
    out.push_str("        let segments: Vec<String> = vec![\n");
    for segment in schema
        .segments()
        .iter()
        .rev()
        .filter(|s| s.role != SegmentRole::Subscription)
    {
        out.push_str(&format!(
            "            format!(\"{} {{:?}}\", self.{}),\n",
            label(&segment.field_name),
            segment.argument_name
        ));
    }
    out.push_str("        ];\n");
    out.push_str(&format!(
        "        write!(f, \"{}: ({{}})\", segments.join(\" / \"))\n",
        schema.label()
    ));
    out.push_str("    }\n");
    out.push_str("}\n");
    out
}

/// The type definition followed by its `impl` and `Display` blocks.
pub fn emit_record(schema: &ResourceIdSchema) -> String {
    let mut out = emit_type(schema);
    out.push('\n');
    out.push_str(&format!("impl {} {{\n", schema.struct_name()));
    out.push_str(&emit_constructor(schema));
    out.push('\n');
    out.push_str(&emit_formatter(schema));
    out.push_str("}\n\n");
    out.push_str(&emit_display(schema));
    out
}
