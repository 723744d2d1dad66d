//! Integration tests: the exported JSON Schema documents compile under
//! Draft 2020-12 and agree with the in-process validator on realistic
//! payloads.

use echo_schema::{json_schema, parse_as, FlatEcho, Shape};
use jsonschema::Validator;
use serde_json::{json, Value};

fn fixture(name: &str) -> Value {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("invalid fixture {name}: {e}"))
}

fn compile(shape: Shape) -> Validator {
    let schema = json_schema(shape);
    jsonschema::options()
        .with_draft(jsonschema::Draft::Draft202012)
        .build(&schema)
        .unwrap_or_else(|e| panic!("{shape} schema does not compile: {e}"))
}

/// Both validators must reach the same verdict.
fn assert_agree(shape: Shape, payload: &Value, expected_valid: bool) {
    let exported = compile(shape).is_valid(payload);
    let native = parse_as(shape, payload).is_ok();
    assert_eq!(exported, expected_valid, "exported {shape} schema verdict");
    assert_eq!(native, expected_valid, "validator verdict for {shape}");
}

#[test]
fn test_schemas_compile() {
    for shape in Shape::all() {
        compile(*shape);
    }
}

#[test]
fn test_fixtures_accepted() {
    assert_agree(Shape::Nested, &fixture("nested_basic.json"), true);
    assert_agree(Shape::Flat, &fixture("flat_basic.json"), true);
}

#[test]
fn test_out_of_range_latitude_rejected() {
    let mut nested = fixture("nested_basic.json");
    nested["project_description"]["lat"] = json!(91);
    assert_agree(Shape::Nested, &nested, false);

    let mut flat = fixture("flat_basic.json");
    flat["lat"] = json!(91);
    assert_agree(Shape::Flat, &flat, false);
}

#[test]
fn test_string_decimals_accepted() {
    let mut nested = fixture("nested_basic.json");
    nested["project_size"]["gross_floor_area"] = json!("1250.50");
    assert_agree(Shape::Nested, &nested, true);

    let mut flat = fixture("flat_basic.json");
    flat["gross_floor_area"] = json!("1250.50");
    assert_agree(Shape::Flat, &flat, true);
    flat["gross_floor_area"] = json!("1,250.50");
    assert_agree(Shape::Flat, &flat, false);
}

#[test]
fn test_tiny_latitude_accepted() {
    let mut flat = fixture("flat_basic.json");
    flat["lat"] = json!(1e-30);
    assert_agree(Shape::Flat, &flat, true);
}

#[test]
fn test_serialized_record_accepted() {
    let mut flat = fixture("flat_basic.json");
    flat["lat"] = json!("0.12345678901234567891");
    let record = FlatEcho::from_value(&flat).unwrap();
    let serialized = Value::Object(record.to_map());
    // No f64 holds this latitude exactly, so it is written as a string.
    assert_eq!(serialized["lat"], json!("0.12345678901234567891"));
    assert_agree(Shape::Flat, &serialized, true);
}

#[test]
fn test_building_without_gross_floor_area_rejected() {
    let mut nested = fixture("nested_basic.json");
    nested["project_size"]
        .as_object_mut()
        .unwrap()
        .remove("gross_floor_area");
    assert_agree(Shape::Nested, &nested, false);

    let mut flat = fixture("flat_basic.json");
    flat.as_object_mut().unwrap().remove("gross_floor_area");
    assert_agree(Shape::Flat, &flat, false);

    // An explicit null is no better than absence.
    flat["gross_floor_area"] = Value::Null;
    assert_agree(Shape::Flat, &flat, false);
}

#[test]
fn test_infrastructure_without_gross_floor_area_accepted() {
    let mut flat = fixture("flat_basic.json");
    let map = flat.as_object_mut().unwrap();
    map.remove("gross_floor_area");
    map.remove("building_use_type");
    map.insert("asset_type".into(), json!("Infrastructure"));
    assert_agree(Shape::Flat, &flat, true);
}

#[test]
fn test_building_use_type_conditional() {
    let mut flat = fixture("flat_basic.json");
    flat.as_object_mut().unwrap().remove("building_use_type");
    assert_agree(Shape::Flat, &flat, false);
}

#[test]
fn test_invalid_values_rejected() {
    let mut flat = fixture("flat_basic.json");
    flat["tool_lca"] = json!("Spreadsheet");
    assert_agree(Shape::Flat, &flat, false);

    let mut nested = fixture("nested_basic.json");
    // Stage record without its required total.
    nested["lca_results"]["substructure"]["A4"] = json!({"GWP_fossil": 12.0});
    assert_agree(Shape::Nested, &nested, false);
}

#[test]
fn test_missing_section_rejected() {
    let mut nested = fixture("nested_basic.json");
    nested.as_object_mut().unwrap().remove("inclusions");
    assert_agree(Shape::Nested, &nested, false);
}
