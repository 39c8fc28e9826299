//! Snapshot tests for plan emitters
//!
//! These tests plan the fixture manifests and compare the rendered output against inline
//! snapshots, so changes to the listing format are reviewed and intentional.
//!
//! Review changes: `cargo insta review`

use std::path::Path;

use bundler::backend::{JsonEmitter, SummaryEmitter, emit_all};
use bundler::frontend::manifest::ManifestUniverse;
use bundler::plan::GenerationPlan;
use bundler::processor::Processor;
use serde_json::Value;

fn plans_for(fixture: &str) -> Vec<GenerationPlan> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{fixture}.json"));
    let universe = ManifestUniverse::load(&path).expect("fixture should load");
    let outcome = Processor::default()
        .process_manifest(&universe)
        .expect("processing failed");
    assert!(outcome.is_success(), "{:?}", outcome.rejections);
    outcome.plans
}

#[test]
fn test_point_summary() {
    let summary = emit_all(SummaryEmitter::new(), &plans_for("point")).unwrap();
    insta::assert_snapshot!(summary, @r"
    com.example.Point => com.example.BundlerPoint (constructor)
        x: int -> Int as ARG_X (read: field, write: constructor arg 0)
        y: int -> Int as ARG_Y (read: field, write: constructor arg 1)
    ");
}

#[test]
fn test_multiple_models_summary() {
    let mut plans = plans_for("point");
    plans.extend(plans_for("sample_activity"));
    let summary = emit_all(SummaryEmitter::new(), &plans).unwrap();
    insta::assert_snapshot!(summary, @r"
    com.example.Point => com.example.BundlerPoint (constructor)
        x: int -> Int as ARG_X (read: field, write: constructor arg 0)
        y: int -> Int as ARG_Y (read: field, write: constructor arg 1)

    com.tmiyamon.bundler.SampleActivity.Params => com.tmiyamon.bundler.BundlerSampleActivityParams (mutation)
        userName: java.lang.String -> String as ARG_USER_NAME (read: field, write: field)
        userId: int -> Int as ARG_USER_ID (read: field, write: field)
    ");
}

#[test]
fn test_field_types_summary() {
    let summary = emit_all(SummaryEmitter::new(), &plans_for("field_types")).unwrap();
    insta::assert_snapshot!(summary, @r"
    com.example.Showcase => com.example.BundlerShowcase (mutation)
        title: java.lang.String -> String as ARG_TITLE (read: field, write: field)
        count: java.lang.Integer -> Int as ARG_COUNT (read: field, write: field)
        flags: boolean[] -> BooleanArray as ARG_FLAGS (read: field, write: field)
        extras: android.os.Bundle -> Bundle as ARG_EXTRAS (read: field, write: field)
        tags: java.util.ArrayList<java.lang.String> -> StringArrayList as ARG_TAGS (read: field, write: field)
        ids: java.util.ArrayList<java.lang.Long> -> Serializable as ARG_IDS (read: field, write: field)
        items: java.util.ArrayList<? extends com.example.Item> -> ParcelableArrayList as ARG_ITEMS (read: field, write: field)
        itemsById: android.util.SparseArray<com.example.Item> -> SparseParcelableArray as ARG_ITEMS_BY_ID (read: field, write: field)
        hybrid: com.example.Hybrid -> Parcelable as ARG_HYBRID (read: field, write: field)
        token: com.example.Token -> Serializable as ARG_TOKEN (read: field, write: field)
        matrix: com.example.Token[][] -> Serializable as ARG_MATRIX (read: field, write: field)
    ");
}

#[test]
fn test_json_plan_shape() {
    let json = emit_all(JsonEmitter::new(), &plans_for("point")).unwrap();
    assert!(json.ends_with('\n'));

    let value: Value = serde_json::from_str(&json).unwrap();
    let plans = value.as_array().unwrap();
    assert_eq!(plans.len(), 1);

    let plan = &plans[0];
    assert_eq!(plan["model"], "com.example.Point");
    assert_eq!(plan["package"], "com.example");
    assert_eq!(plan["companion"], "BundlerPoint");
    assert_eq!(plan["write_mode"], "constructor");

    let x = &plan["fields"][0];
    assert_eq!(x["name"], "x");
    assert_eq!(x["container_key"], "ARG_X");
    assert_eq!(x["declared_type"], "int");
    assert_eq!(x["operation"], "Int");
    assert_eq!(x["matched_by"], "catalog");
    assert_eq!(x["read"]["kind"], "field");
    assert_eq!(x["write"]["kind"], "constructor");
    assert_eq!(x["write"]["position"], 0);
    assert_eq!(x["get_helper"], "getX");
    assert_eq!(x["put_helper"], "putX");
}

#[test]
fn test_empty_plan_list() {
    assert_eq!(emit_all(SummaryEmitter::new(), &[]).unwrap(), "");
    assert_eq!(emit_all(JsonEmitter::new(), &[]).unwrap(), "[]\n");
}
