use super::*;
use annot_common::ValueKind;
use std::collections::BTreeSet;

fn class(name: &str, parameters: ParameterSet) -> ClassAnnotationInfo {
    ClassAnnotationInfo::new(name, parameters)
}

fn as_set(value: Option<&ParamValue>) -> BTreeSet<String> {
    value
        .and_then(ParamValue::as_list)
        .map(|items| items.iter().cloned().collect())
        .unwrap_or_default()
}

#[test]
fn test_no_ancestors_is_identity() {
    let own = ParameterSet::new()
        .with("route", "path", "/users")
        .with("route", "methods", vec!["GET"]);

    let merged = merge_parameters(own.clone(), &[]).unwrap();
    assert_eq!(merged, own);
}

#[test]
fn test_scalar_ancestor_is_prefix() {
    let own = ParameterSet::new().with("g", "p", "B");
    let parent = class("Parent", ParameterSet::new().with("g", "p", "A"));

    let merged = merge_parameters(own, &[parent]).unwrap();
    assert_eq!(merged.get("g", "p"), Some(&ParamValue::from("AB")));
}

#[test]
fn test_list_union_removes_duplicates() {
    let own = ParameterSet::new().with("g", "tags", vec!["y", "z"]);
    let parent = class("Parent", ParameterSet::new().with("g", "tags", vec!["x", "y"]));

    let merged = merge_parameters(own, &[parent]).unwrap();
    let tags = as_set(merged.get("g", "tags"));
    let expected: BTreeSet<String> = ["x", "y", "z"].iter().map(|s| s.to_string()).collect();
    assert_eq!(tags, expected);
    assert_eq!(
        merged.get("g", "tags").and_then(ParamValue::as_list).map(|t| t.len()),
        Some(3)
    );
}

#[test]
fn test_list_union_keeps_inherited_order_first() {
    let own = ParameterSet::new().with("g", "tags", vec!["c", "a"]);
    let parent = class("Parent", ParameterSet::new().with("g", "tags", vec!["a", "b"]));

    let merged = merge_parameters(own, &[parent]).unwrap();
    assert_eq!(merged.get("g", "tags"), Some(&ParamValue::list(["a", "b", "c"])));
}

#[test]
fn test_missing_group_is_copied_verbatim() {
    let own = ParameterSet::new().with("route", "path", "/show");
    let parent = class(
        "Parent",
        ParameterSet::new()
            .with("auth", "role", "admin")
            .with("auth", "scopes", vec!["read"]),
    );

    let merged = merge_parameters(own, &[parent.clone()]).unwrap();
    assert_eq!(merged.group("auth"), parent.parameters().group("auth"));
    assert_eq!(merged.get("route", "path"), Some(&ParamValue::from("/show")));
}

#[test]
fn test_missing_parameter_is_copied() {
    let own = ParameterSet::new().with("route", "path", "/show");
    let parent = class("Parent", ParameterSet::new().with("route", "name", "show"));

    let merged = merge_parameters(own, &[parent]).unwrap();
    assert_eq!(merged.get("route", "path"), Some(&ParamValue::from("/show")));
    assert_eq!(merged.get("route", "name"), Some(&ParamValue::from("show")));
}

#[test]
fn test_grandparent_prefixes_after_parent() {
    let own = ParameterSet::new().with("route", "path", "/users");
    let chain = [
        class("Parent", ParameterSet::new().with("route", "path", "/v1")),
        class("Grandparent", ParameterSet::new().with("route", "path", "/api")),
    ];

    let merged = merge_parameters(own, &chain).unwrap();
    assert_eq!(
        merged.get("route", "path"),
        Some(&ParamValue::from("/api/v1/users"))
    );
}

#[test]
fn test_group_copied_from_parent_is_extended_by_grandparent() {
    let own = ParameterSet::new();
    let chain = [
        class("Parent", ParameterSet::new().with("route", "path", "/v1")),
        class("Grandparent", ParameterSet::new().with("route", "path", "/api")),
    ];

    let merged = merge_parameters(own, &chain).unwrap();
    assert_eq!(merged.get("route", "path"), Some(&ParamValue::from("/api/v1")));
}

#[test]
fn test_empty_ancestor_contributes_nothing() {
    let own = ParameterSet::new().with("route", "path", "/users");
    let chain = [
        class("Empty", ParameterSet::new()),
        class("AlsoEmpty", ParameterSet::new()),
    ];

    let merged = merge_parameters(own.clone(), &chain).unwrap();
    assert_eq!(merged, own);
}

#[test]
fn test_kind_mismatch_is_conflict() {
    let own = ParameterSet::new().with("route", "methods", vec!["GET"]);
    let parent = class("Parent", ParameterSet::new().with("route", "methods", "POST"));

    let err = merge_parameters(own, &[parent]).unwrap_err();
    assert_eq!(
        err,
        AnnotationConflictError {
            ancestor: "Parent".to_string(),
            group: "route".to_string(),
            parameter: "methods".to_string(),
            ancestor_kind: ValueKind::Scalar,
            own_kind: ValueKind::List,
        }
    );
    assert_eq!(
        err.to_string(),
        "parameter 'route.methods' is a string in 'Parent' but a list below it"
    );
}

#[test]
fn test_list_ancestor_against_scalar_is_conflict() {
    let own = ParameterSet::new().with("g", "p", "one");
    let parent = class("Parent", ParameterSet::new().with("g", "p", vec!["a"]));

    let err = merge_parameters(own, &[parent]).unwrap_err();
    assert_eq!(err.ancestor_kind, ValueKind::List);
    assert_eq!(err.own_kind, ValueKind::Scalar);
}
