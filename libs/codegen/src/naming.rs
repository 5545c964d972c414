//! Name derivation for generated items.
//!
//! Segment keys are camelCase plurals (`networkSecurityGroups`); generated
//! code needs singular PascalCase labels (`NetworkSecurityGroupName`) and
//! snake_case identifiers (`network_security_group_name`).

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use",
    "where", "while", "abstract", "become", "box", "do", "final", "gen", "macro", "override",
    "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Best-effort singular form of a segment key.
///
/// `...ies` becomes `...y`, `...sses` becomes `...ss`, and a trailing `s` is
/// dropped. Keys ending in `ss`, `us` or `is`, or not ending in `s` at all,
/// are treated as already singular and returned unchanged. Irregular plurals
/// need a rename override.
pub fn singularize(key: &str) -> String {
    if let Some(stem) = key.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }

    if let Some(stem) = key.strip_suffix("sses") {
        return format!("{stem}ss");
    }

    if key.ends_with("ss") || key.ends_with("us") || key.ends_with("is") {
        return key.to_string();
    }

    match key.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => key.to_string(),
    }
}

/// Splits an identifier into words at separators and case boundaries.
///
/// An uppercase run followed by a lowercase letter starts a new word at its
/// last capital, so `DNSZone` splits into `DNS` and `Zone`.
pub fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();

    for part in input.split(|c: char| !c.is_ascii_alphanumeric()) {
        let chars: Vec<char> = part.chars().collect();
        let mut current = String::new();

        for (i, &c) in chars.iter().enumerate() {
            if i > 0 && c.is_ascii_uppercase() {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
                let boundary = prev.is_ascii_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_ascii_uppercase() && next_is_lower);
                if boundary && !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            current.push(c);
        }

        if !current.is_empty() {
            words.push(current);
        }
    }

    words
}

/// `networkSecurityGroup` -> `NetworkSecurityGroup`
pub fn pascal_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// `DNSZoneName` -> `dns_zone_name`
pub fn snake_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// `ResourceGroup` -> `Resource Group`
pub fn label(input: &str) -> String {
    split_words(input).join(" ")
}

/// Returns true for a PascalCase identifier made of ASCII letters and digits.
pub fn is_pascal_identifier(input: &str) -> bool {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Returns true if `ident` cannot be used as a plain Rust identifier.
pub fn is_rust_keyword(ident: &str) -> bool {
    RUST_KEYWORDS.contains(&ident)
}

/// Alternates upper and lower case, starting upper: `sites` -> `SiTeS`.
pub fn mixed_case(input: &str) -> String {
    input
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("sites", "site")]
    #[case("firewallPolicies", "firewallPolicy")]
    #[case("accesses", "access")]
    #[case("access", "access")]
    #[case("status", "status")]
    #[case("analysis", "analysis")]
    #[case("default", "default")]
    #[case("s", "s")]
    #[case("networkSecurityGroups", "networkSecurityGroup")]
    fn test_singularize(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(singularize(key), expected);
    }

    #[rstest]
    #[case("networkSecurityGroup", "NetworkSecurityGroup")]
    #[case("site", "Site")]
    #[case("dns-zone", "DnsZone")]
    #[case("AppService", "AppService")]
    fn test_pascal_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(pascal_case(input), expected);
    }

    #[rstest]
    #[case("SubscriptionId", "subscription_id")]
    #[case("DNSZoneName", "dns_zone_name")]
    #[case("IPAddress", "ip_address")]
    #[case("Vm2Name", "vm2_name")]
    #[case("Name", "name")]
    fn test_snake_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(snake_case(input), expected);
    }

    #[test]
    fn test_label() {
        assert_eq!(label("ResourceGroup"), "Resource Group");
        assert_eq!(label("AppService"), "App Service");
    }

    #[test]
    fn test_is_pascal_identifier() {
        assert!(is_pascal_identifier("AppService"));
        assert!(is_pascal_identifier("Vm2"));
        assert!(!is_pascal_identifier("appService"));
        assert!(!is_pascal_identifier("App_Service"));
        assert!(!is_pascal_identifier(""));
    }

    #[test]
    fn test_is_rust_keyword() {
        assert!(is_rust_keyword("type"));
        assert!(!is_rust_keyword("type_name"));
    }

    #[test]
    fn test_mixed_case() {
        assert_eq!(mixed_case("sites"), "SiTeS");
        assert_eq!(mixed_case("managementGroups"), "MaNaGeMeNtGrOuPs");
    }
}
