//! End-to-end planning scenarios over declaration manifests.
//!
//! Each test loads a fixture from `tests/fixtures/`, runs the processor and checks the
//! resulting plans or rejections.

use std::path::Path;

use bundler::frontend::manifest::ManifestUniverse;
use bundler::plan::{
    DiagnosticMode, PlanError, PlannerConfig, ReadStrategy, ResolutionRule, Stage, WriteMode,
    WriteStrategy,
};
use bundler::processor::{ProcessOutcome, Processor};

fn load_fixture(name: &str) -> ManifestUniverse {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{name}.json"));
    ManifestUniverse::load(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", path.display(), e))
}

fn process(name: &str) -> ProcessOutcome {
    process_with(name, PlannerConfig::default())
}

fn process_with(name: &str, config: PlannerConfig) -> ProcessOutcome {
    let universe = load_fixture(name);
    Processor::new(config)
        .process_manifest(&universe)
        .expect("processing failed")
}

fn operation_of(outcome: &ProcessOutcome, model: &str, field: &str) -> String {
    outcome
        .plan(model)
        .and_then(|plan| plan.field(field))
        .map(|f| f.operation.to_string())
        .unwrap_or_else(|| panic!("no plan for {model}.{field}"))
}

// ============================================================================
// Accepted models
// ============================================================================

#[test]
fn test_point_uses_constructor_injection() {
    let outcome = process("point");
    assert!(outcome.is_success());

    let plan = outcome.plan("com.example.Point").unwrap();
    assert_eq!(plan.companion, "BundlerPoint");
    assert_eq!(plan.package, "com.example");
    assert_eq!(plan.write_mode, WriteMode::Constructor);

    let x = plan.field("x").unwrap();
    assert_eq!(x.container_key, "ARG_X");
    assert_eq!(x.operation.to_string(), "Int");
    assert_eq!(x.read, ReadStrategy::Field);
    assert_eq!(x.write, WriteStrategy::Constructor { position: 0 });

    let y = plan.field("y").unwrap();
    assert_eq!(y.container_key, "ARG_Y");
    assert_eq!(y.write, WriteStrategy::Constructor { position: 1 });
}

#[test]
fn test_sample_activity_params() {
    let outcome = process("sample_activity");
    assert_eq!(outcome.plans.len(), 1);

    let plan = outcome
        .plan("com.tmiyamon.bundler.SampleActivity.Params")
        .unwrap();
    assert_eq!(plan.companion, "BundlerSampleActivityParams");
    assert_eq!(
        plan.companion_qualified_name(),
        "com.tmiyamon.bundler.BundlerSampleActivityParams"
    );
    assert_eq!(plan.write_mode, WriteMode::Mutation);

    let user_name = plan.field("userName").unwrap();
    assert_eq!(user_name.container_key, "ARG_USER_NAME");
    assert_eq!(user_name.operation.to_string(), "String");
    assert_eq!(user_name.get_helper, "getUserName");
    assert_eq!(user_name.put_helper, "putUserName");
    assert_eq!(user_name.write, WriteStrategy::Field);

    let user_id = plan.field("userId").unwrap();
    assert_eq!(user_id.container_key, "ARG_USER_ID");
    assert_eq!(user_id.operation.to_string(), "Int");
}

#[test]
fn test_field_type_showcase() {
    let outcome = process("field_types");
    assert!(outcome.is_success(), "{:?}", outcome.rejections);

    let model = "com.example.Showcase";
    let expected = [
        ("title", "String"),
        ("count", "Int"),
        ("flags", "BooleanArray"),
        ("extras", "Bundle"),
        ("tags", "StringArrayList"),
        ("ids", "Serializable"),
        ("items", "ParcelableArrayList"),
        ("itemsById", "SparseParcelableArray"),
        ("hybrid", "Parcelable"),
        ("token", "Serializable"),
        ("matrix", "Serializable"),
    ];
    for (field, operation) in expected {
        assert_eq!(operation_of(&outcome, model, field), operation, "field {field}");
    }

    let plan = outcome.plan(model).unwrap();
    let names: Vec<&str> = plan.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        expected.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
        "plans keep declaration order"
    );
    assert_eq!(
        plan.field("itemsById").unwrap().container_key,
        "ARG_ITEMS_BY_ID"
    );
    assert_eq!(
        plan.field("hybrid").unwrap().matched_by,
        ResolutionRule::Transferable
    );
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
fn test_rejections_do_not_block_other_models() {
    let outcome = process("rejections");
    assert!(!outcome.is_success());

    let planned: Vec<&str> = outcome.plans.iter().map(|p| p.model.as_str()).collect();
    assert_eq!(planned, vec!["com.example.Point"]);

    let rejected: Vec<&str> = outcome.rejections.iter().map(|r| r.model.as_str()).collect();
    assert_eq!(
        rejected,
        vec![
            "com.example.Named",
            "com.example.Overloaded",
            "com.example.Shape"
        ]
    );
}

#[test]
fn test_private_field_without_getter_is_rejected() {
    let outcome = process("rejections");
    let rejection = outcome.rejection("com.example.Named").unwrap();
    assert_eq!(rejection.stage, Stage::ConstructorResolved);
    assert_eq!(
        rejection.errors(),
        vec![PlanError::UnresolvableReadStrategy {
            field: "name".to_string(),
            getter: "getName".to_string(),
        }]
    );
}

#[test]
fn test_constructor_count_and_target_kind() {
    let outcome = process("rejections");

    let overloaded = outcome.rejection("com.example.Overloaded").unwrap();
    assert!(matches!(
        overloaded.first(),
        PlanError::ConstructorCount { found: 2, .. }
    ));

    let shape = outcome.rejection("com.example.Shape").unwrap();
    assert_eq!(shape.stage, Stage::Discovered);
    assert!(matches!(
        shape.first(),
        PlanError::InvalidAnnotationTarget { .. }
    ));
}

// ============================================================================
// Inline manifests
// ============================================================================

fn process_inline(types: &str, config: PlannerConfig) -> ProcessOutcome {
    let universe =
        ManifestUniverse::from_json_str(&format!(r#"{{ "types": [{types}] }}"#)).unwrap();
    Processor::new(config).process_manifest(&universe).unwrap()
}

#[test]
fn test_constructor_order_mismatch_falls_back_to_mutation() {
    let outcome = process_inline(
        r#"{ "name": "com.example.Pair", "annotated": true,
             "fields": [
                { "name": "left", "type": "java.lang.String" },
                { "name": "right", "type": "java.lang.String" }
             ],
             "constructors": [
                { "visibility": "public" },
                { "visibility": "private", "params": [
                    { "name": "right", "type": "java.lang.String" },
                    { "name": "left", "type": "java.lang.String" } ] }
             ],
             "methods": [
                { "name": "getLeft", "returns": "java.lang.String" },
                { "name": "setLeft", "params": [{ "name": "v", "type": "java.lang.String" }] },
                { "name": "getRight", "returns": "java.lang.String" },
                { "name": "setRight", "params": [{ "name": "v", "type": "java.lang.String" }] }
             ] }"#,
        PlannerConfig::default(),
    );
    let plan = outcome.plan("com.example.Pair").unwrap();
    assert_eq!(plan.write_mode, WriteMode::Mutation);
    assert_eq!(
        plan.field("right").unwrap().write,
        WriteStrategy::Setter {
            method: "setRight".to_string()
        }
    );
    assert_eq!(
        plan.field("left").unwrap().read,
        ReadStrategy::Getter {
            method: "getLeft".to_string()
        }
    );
}

#[test]
fn test_off_convention_getter_is_not_used() {
    let outcome = process_inline(
        r#"{ "name": "com.example.Flag", "annotated": true,
             "fields": [{ "name": "enabled", "type": "boolean", "visibility": "private" }],
             "constructors": [{ "visibility": "public", "params": [{ "name": "enabled", "type": "boolean" }] }],
             "methods": [{ "name": "isEnabled", "returns": "boolean", "visibility": "public" }] }"#,
        PlannerConfig::default(),
    );
    let rejection = outcome.rejection("com.example.Flag").unwrap();
    assert_eq!(
        rejection.errors(),
        vec![PlanError::UnresolvableReadStrategy {
            field: "enabled".to_string(),
            getter: "getEnabled".to_string(),
        }]
    );
}

#[test]
fn test_constructor_mode_is_uniform_across_visibilities() {
    let outcome = process_inline(
        r#"{ "name": "com.example.Mixed", "annotated": true,
             "fields": [
                { "name": "id", "type": "long", "visibility": "public" },
                { "name": "label", "type": "java.lang.String", "visibility": "private" }
             ],
             "constructors": [{ "visibility": "protected", "params": [
                { "name": "id", "type": "long" },
                { "name": "label", "type": "java.lang.String" } ] }],
             "methods": [{ "name": "getLabel", "returns": "java.lang.String", "visibility": "public" }] }"#,
        PlannerConfig::default(),
    );
    let plan = outcome.plan("com.example.Mixed").unwrap();
    assert_eq!(plan.write_mode, WriteMode::Constructor);
    assert_eq!(
        plan.field("id").unwrap().write,
        WriteStrategy::Constructor { position: 0 }
    );
    assert_eq!(
        plan.field("label").unwrap().write,
        WriteStrategy::Constructor { position: 1 }
    );
}

#[test]
fn test_all_failures_mode_reports_each_field() {
    let types = r#"{ "name": "com.example.Opaque", "annotated": true,
             "fields": [
                { "name": "a", "type": "java.lang.Object", "visibility": "public" },
                { "name": "b", "type": "java.lang.Runnable", "visibility": "public" }
             ] }"#;

    let first_only = process_inline(types, PlannerConfig::default());
    assert_eq!(first_only.rejection("com.example.Opaque").unwrap().len(), 1);

    let all = process_inline(
        types,
        PlannerConfig::new().with_diagnostics(DiagnosticMode::AllFailures),
    );
    let rejection = all.rejection("com.example.Opaque").unwrap();
    let fields: Vec<&str> = rejection
        .iter()
        .map(|e| match e {
            PlanError::UnresolvableType { field, .. } => field.as_str(),
            other => panic!("unexpected error {other:?}"),
        })
        .collect();
    assert_eq!(fields, vec!["a", "b"]);
}

#[test]
fn test_list_subclasses_and_raw_containers() {
    let outcome = process_inline(
        r#"{ "name": "com.example.Item", "supertypes": ["android.os.Parcelable"] },
           { "name": "com.example.Names", "supertypes": ["java.util.ArrayList<java.lang.String>"] },
           { "name": "com.example.Items", "supertypes": ["java.util.ArrayList<com.example.Item>"] },
           { "name": "com.example.ItemsById", "supertypes": ["android.util.SparseArray<com.example.Item>"] },
           { "name": "com.example.Inventory", "annotated": true,
             "fields": [
                { "name": "names", "type": "com.example.Names", "visibility": "public" },
                { "name": "items", "type": "com.example.Items", "visibility": "public" },
                { "name": "itemsById", "type": "com.example.ItemsById", "visibility": "public" },
                { "name": "legacy", "type": "java.util.ArrayList", "visibility": "public" }
             ] }"#,
        PlannerConfig::default(),
    );
    assert!(outcome.is_success(), "rejected: {:?}", outcome.rejections);

    let model = "com.example.Inventory";
    assert_eq!(operation_of(&outcome, model, "names"), "StringArrayList");
    assert_eq!(operation_of(&outcome, model, "items"), "ParcelableArrayList");
    assert_eq!(operation_of(&outcome, model, "itemsById"), "SparseParcelableArray");
    assert_eq!(operation_of(&outcome, model, "legacy"), "StringArrayList");
}
