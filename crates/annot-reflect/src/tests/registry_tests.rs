use super::*;
use crate::decl::MethodDecl;
use crate::provider::ClassTarget;
use crate::source::{AnnotationSource, DeclaredAnnotations};
use annot_common::ParamValue;

fn names<'a>(methods: &[MethodRef<'a>]) -> Vec<(&'a str, &'a str)> {
    methods
        .iter()
        .map(|m| (m.name(), m.declaring_class))
        .collect()
}

fn controller_registry() -> ClassRegistry {
    let mut registry = ClassRegistry::new();
    registry
        .register(
            ClassDecl::new("Base")
                .method(MethodDecl::public("indexAction"))
                .method(MethodDecl::public("baseOnly"))
                .method(MethodDecl::protected("guard")),
        )
        .unwrap();
    registry
        .register(
            ClassDecl::new("Child")
                .extends("Base")
                .method(MethodDecl::public("indexAction"))
                .method(MethodDecl::public("showAction"))
                .method(MethodDecl::private("secret")),
        )
        .unwrap();
    registry
}

#[test]
fn test_register_and_lookup() {
    let registry = controller_registry();

    assert_eq!(registry.len(), 2);
    assert!(registry.contains("Base"));
    assert_eq!(registry.reflect("Child").map(|c| c.name.as_str()), Some("Child"));
    assert!(registry.reflect("Missing").is_none());
}

#[test]
fn test_duplicate_class_is_rejected() {
    let mut registry = controller_registry();
    let err = registry.register(ClassDecl::new("Base")).unwrap_err();

    assert!(matches!(err, RegistryError::DuplicateClass { ref name } if name == "Base"));
    assert_eq!(err.to_string(), "class 'Base' is declared more than once");
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_public_methods_include_inherited_with_declaring_class() {
    let registry = controller_registry();
    let child = registry.get("Child").unwrap();

    assert_eq!(
        names(&registry.public_methods(child)),
        vec![
            ("indexAction", "Child"),
            ("showAction", "Child"),
            ("baseOnly", "Base"),
        ]
    );
}

#[test]
fn test_declared_by_distinguishes_inherited_methods() {
    let registry = controller_registry();
    let child = registry.get("Child").unwrap();
    let methods = registry.public_methods(child);

    let own: Vec<&str> = methods
        .iter()
        .filter(|m| registry.is_declared_by(m, child))
        .map(|m| m.name())
        .collect();
    assert_eq!(own, vec!["indexAction", "showAction"]);
}

#[test]
fn test_public_methods_stop_at_unknown_parent() {
    let registry = ClassRegistry::new()
        .with_class(
            ClassDecl::new("Orphan")
                .extends("Nowhere")
                .method(MethodDecl::public("run")),
        )
        .unwrap();
    let orphan = registry.get("Orphan").unwrap();

    assert_eq!(names(&registry.public_methods(orphan)), vec![("run", "Orphan")]);
}

#[test]
fn test_public_methods_survive_cycles() {
    let registry = ClassRegistry::new()
        .with_class(
            ClassDecl::new("A")
                .extends("B")
                .method(MethodDecl::public("a")),
        )
        .unwrap()
        .with_class(
            ClassDecl::new("B")
                .extends("A")
                .method(MethodDecl::public("b")),
        )
        .unwrap();
    let a = registry.get("A").unwrap();

    assert_eq!(names(&registry.public_methods(a)), vec![("a", "A"), ("b", "B")]);
}

#[test]
fn test_load_manifest() {
    let source = r#"{
        "classes": [
            {
                "name": "App\\Controller",
                "annotations": { "route": { "path": "/api" } }
            },
            {
                "name": "App\\UserController",
                "extends": "App\\Controller",
                "methods": [
                    {
                        "name": "listAction",
                        "annotations": { "route": { "path": "/users", "methods": ["GET"] } }
                    },
                    { "name": "helper", "visibility": "private" }
                ]
            }
        ]
    }"#;

    let registry = ClassRegistry::from_manifest_str(source).expect("manifest should load");
    assert_eq!(registry.len(), 2);

    let user = registry.get("App\\UserController").unwrap();
    assert_eq!(user.extends.as_deref(), Some("App\\Controller"));
    assert_eq!(user.methods.len(), 2);
    assert!(!user.methods[1].is_public());
    assert_eq!(
        user.methods[0].annotations.get("route", "methods"),
        Some(&ParamValue::list(["GET"]))
    );

    let base = registry.get("App\\Controller").unwrap();
    assert_eq!(
        DeclaredAnnotations.class_parameters(base).get("route", "path"),
        Some(&ParamValue::from("/api"))
    );
}

#[test]
fn test_manifest_rejects_unknown_fields() {
    let source = r#"{ "classes": [ { "name": "A", "parent": "B" } ] }"#;
    let err = ClassRegistry::from_manifest_str(source).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidManifest(_)));
}

#[test]
fn test_manifest_duplicate_across_loads() {
    let mut registry = ClassRegistry::new();
    registry
        .load_manifest(r#"{ "classes": [ { "name": "A" } ] }"#)
        .unwrap();
    let err = registry
        .load_manifest(r#"{ "classes": [ { "name": "A" } ] }"#)
        .unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateClass { .. }));
}

#[test]
fn test_class_target_reflects_names_and_passes_decls() {
    let registry = controller_registry();
    let child = registry.get("Child").unwrap();

    let by_name = ClassTarget::from("Child").reflect(&registry).unwrap();
    assert!(std::ptr::eq(by_name, child));

    let standalone = ClassDecl::new("Detached");
    let by_decl = ClassTarget::from(&standalone).reflect(&registry).unwrap();
    assert_eq!(by_decl.name, "Detached");

    assert!(ClassTarget::from("Missing").reflect(&registry).is_none());
}

#[test]
fn test_own_method_last_declaration_wins() {
    let class = ClassDecl::new("Dup")
        .method(MethodDecl::public("run").annotate("tag", "v", "first"))
        .method(MethodDecl::public("run").annotate("tag", "v", "second"));

    let method = class.own_method("run").unwrap();
    assert_eq!(method.annotations.get("tag", "v"), Some(&ParamValue::from("second")));
}
