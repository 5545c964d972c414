//! Validator emitter.

use crate::ResourceIdSchema;

/// `validate::<type>_id(value, key)`, which wraps the strict parser's error
/// with the name of the configuration key being validated.
pub fn emit_validator(schema: &ResourceIdSchema) -> String {
    let mut out = String::new();
    out.push_str("use armid::ValidationError;\n\n");
    out.push_str(&format!("use crate::parse::{};\n\n", schema.parser_fn()));
    out.push_str(&format!(
        "/// Validates that `value` is a valid {} ID.\n",
        schema.label()
    ));
    out.push_str(&format!(
        "pub fn {}(value: &str, key: &str) -> Result<(), ValidationError> {{\n",
        schema.validator_fn()
    ));
    out.push_str(&format!("    {}(value)\n", schema.parser_fn()));
    out.push_str("        .map(|_| ())\n");
    out.push_str("        .map_err(|err| ValidationError::new(key, err))\n");
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classify, Renames};

    #[test]
    fn test_emit_validator() {
        let schema = classify(
            "ManagementGroup",
            "/providers/Microsoft.Management/managementGroups/group1",
            &Renames::new(),
        )
        .unwrap();

        let expected = "\
use armid::ValidationError;

use crate::parse::parse_management_group_id;

/// Validates that `value` is a valid Management Group ID.
pub fn management_group_id(value: &str, key: &str) -> Result<(), ValidationError> {
    parse_management_group_id(value)
        .map(|_| ())
        .map_err(|err| ValidationError::new(key, err))
}
";
        assert_eq!(emit_validator(&schema), expected);
    }
}
