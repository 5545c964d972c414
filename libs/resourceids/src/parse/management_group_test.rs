// Code generated by armid-generator. DO NOT EDIT.

use super::management_group::{parse_management_group_id, ManagementGroupId};

#[test]
fn test_management_group_id_formatter() {
    let actual = ManagementGroupId::new(
        "group1",
    )
    .id();
    assert_eq!(actual, "/providers/Microsoft.Management/managementGroups/group1");
}

#[test]
fn test_parse_management_group_id() {
    let test_data: Vec<(&str, Option<ManagementGroupId>)> = vec![
        // empty
        ("", None),
        // missing Name
        ("/providers/Microsoft.Management/", None),
        // missing value for Name
        ("/providers/Microsoft.Management/managementGroups/", None),
        // valid
        (
            "/providers/Microsoft.Management/managementGroups/group1",
            Some(ManagementGroupId::new(
                "group1",
            )),
        ),
        // trailing segment
        ("/providers/Microsoft.Management/managementGroups/group1/extras/extra1", None),
        // trailing provider
        ("/providers/Microsoft.Management/managementGroups/group1/providers/Microsoft.Insights", None),
        // upper-cased
        ("/PROVIDERS/MICROSOFT.MANAGEMENT/MANAGEMENTGROUPS/GROUP1", None),
    ];

    for (input, expected) in test_data {
        let actual = parse_management_group_id(input);
        let Some(expected) = expected else {
            assert!(actual.is_err(), "expected an error parsing {input:?}");
            continue;
        };

        let actual = actual.unwrap_or_else(|err| panic!("parsing {input:?}: {err}"));
        assert_eq!(actual.name, expected.name, "name of {input:?}");
    }
}
