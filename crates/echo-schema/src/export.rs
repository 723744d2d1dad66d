//! # JSON Schema Export
//!
//! Renders the constraint tables as a Draft 2020-12 JSON Schema for either
//! shape, so external tooling validates payloads against exactly the
//! constraints this crate enforces.
//!
//! Records referenced from more than one place (GWP vectors, stage
//! records, sections) are emitted once under `$defs` and referenced by
//! name. Optional fields admit `null`. Conditional requirements become
//! `if`/`then` clauses.
//!
//! Decimal fields accept a JSON number within bounds or a numeric string,
//! matching the validator, which also writes a string when no `f64` holds
//! the value exactly.
//!
//! Some constraints are not expressible portably and are left to the
//! validator: the decimal-place limit on areas and measures (`multipleOf`
//! is unreliable for binary floats), bounds on string-form decimals, the
//! largest representable decimal magnitude, and calendar validity of
//! dates (`format` is an annotation in 2020-12).

use echo_core::constraint::{Bound, FieldKind, FieldSpec, Length, Range, RecordSpec, RequiredWhen};
use serde_json::{json, Map, Value};

use crate::dispatch::Shape;
use crate::record::{
    ASSET_TYPE_SECTION, GROSS_FLOOR_AREA_RULE, GROSS_FLOOR_AREA_SECTION, SECTIONS,
};

/// Lexical form of a numeric string accepted in decimal fields.
pub const DECIMAL_PATTERN: &str = "^-?[0-9]+(\\.[0-9]+)?([eE][+-]?[0-9]+)?$";

/// Dialect URI written to `$schema`.
pub const DRAFT_2020_12: &str = "https://json-schema.org/draft/2020-12/schema";

/// JSON Schema document for one shape.
pub fn json_schema(shape: Shape) -> Value {
    let mut builder = SchemaBuilder::default();
    let mut root = match shape {
        Shape::Nested => builder.nested(),
        Shape::Flat => builder.flat(),
    };
    root.insert("$schema".into(), json!(DRAFT_2020_12));
    root.insert("$defs".into(), Value::Object(builder.defs));
    Value::Object(root)
}

/// JSON Schema of a single record, with its own `$defs`.
pub fn record_schema(spec: &'static RecordSpec) -> Value {
    let mut builder = SchemaBuilder::default();
    let mut root = builder.object(spec);
    root.insert("$schema".into(), json!(DRAFT_2020_12));
    if !builder.defs.is_empty() {
        root.insert("$defs".into(), Value::Object(builder.defs));
    }
    Value::Object(root)
}

#[derive(Default)]
struct SchemaBuilder {
    defs: Map<String, Value>,
}

impl SchemaBuilder {
    fn nested(&mut self) -> Map<String, Value> {
        let mut properties = Map::new();
        for section in SECTIONS {
            properties.insert(section.key.into(), self.reference(section.spec));
        }
        let required: Vec<&str> = SECTIONS.iter().map(|s| s.key).collect();

        let rule = GROSS_FLOOR_AREA_RULE;
        let condition = json!({
            "if": {
                "properties": {
                    ASSET_TYPE_SECTION: trigger(&rule),
                },
                "required": [ASSET_TYPE_SECTION],
            },
            "then": {
                "properties": {
                    GROSS_FLOOR_AREA_SECTION: requirement(&rule),
                },
            },
        });

        let mut root = Map::new();
        root.insert("title".into(), json!("NestedEcho"));
        root.insert("type".into(), json!("object"));
        root.insert("properties".into(), Value::Object(properties));
        root.insert("required".into(), json!(required));
        root.insert("allOf".into(), json!([condition]));
        root
    }

    fn flat(&mut self) -> Map<String, Value> {
        let mut properties = Map::new();
        let mut required = Vec::new();
        let mut conditions = Vec::new();
        for section in SECTIONS {
            for field in section.spec.fields {
                properties.insert(field.name.into(), self.field(field));
            }
            required.extend(section.spec.required_names());
            conditions.extend(section.spec.rules.iter().map(conditional));
        }
        conditions.push(conditional(&GROSS_FLOOR_AREA_RULE));

        let mut root = Map::new();
        root.insert("title".into(), json!("FlatEcho"));
        root.insert("type".into(), json!("object"));
        root.insert("properties".into(), Value::Object(properties));
        root.insert("required".into(), json!(required));
        root.insert("allOf".into(), Value::Array(conditions));
        root
    }

    /// `$ref` to a record definition, emitting it on first use.
    fn reference(&mut self, spec: &'static RecordSpec) -> Value {
        if !self.defs.contains_key(spec.name) {
            // Reserve the slot first so self-referencing tables terminate.
            self.defs.insert(spec.name.into(), Value::Null);
            let schema = self.object(spec);
            self.defs.insert(spec.name.into(), Value::Object(schema));
        }
        json!({ "$ref": format!("#/$defs/{}", spec.name) })
    }

    fn object(&mut self, spec: &'static RecordSpec) -> Map<String, Value> {
        let mut properties = Map::new();
        for field in spec.fields {
            properties.insert(field.name.into(), self.field(field));
        }
        let required: Vec<&str> = spec.required_names().collect();

        let mut schema = Map::new();
        schema.insert("title".into(), json!(spec.name));
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));
        schema.insert("required".into(), json!(required));
        if !spec.rules.is_empty() {
            let conditions: Vec<Value> = spec.rules.iter().map(conditional).collect();
            schema.insert("allOf".into(), Value::Array(conditions));
        }
        schema
    }

    fn field(&mut self, field: &FieldSpec) -> Value {
        let inner = self.kind(&field.kind);
        let mut schema = if field.required {
            match inner {
                Value::Object(map) => map,
                other => {
                    let mut map = Map::new();
                    map.insert("allOf".into(), json!([other]));
                    map
                }
            }
        } else {
            let mut map = Map::new();
            map.insert("anyOf".into(), json!([inner, {"type": "null"}]));
            map
        };
        let description = field.description.trim();
        if !description.is_empty() {
            schema.insert("description".into(), json!(description));
        }
        Value::Object(schema)
    }

    fn kind(&mut self, kind: &FieldKind) -> Value {
        match kind {
            FieldKind::Text(length) => {
                let mut schema = Map::new();
                schema.insert("type".into(), json!("string"));
                length_keywords(length, &mut schema);
                Value::Object(schema)
            }
            FieldKind::Bool => json!({"type": "boolean"}),
            FieldKind::Integer(range) => numeric("integer", range),
            FieldKind::Float(range) => numeric("number", range),
            FieldKind::Decimal { range, .. } => json!({
                "anyOf": [
                    numeric("number", range),
                    {"type": "string", "pattern": DECIMAL_PATTERN},
                ],
            }),
            FieldKind::Date => json!({"type": "string", "format": "date"}),
            FieldKind::DateOrYear(range) => json!({
                "anyOf": [
                    {"type": "string", "format": "date"},
                    numeric("integer", range),
                ],
            }),
            FieldKind::Choice(domain) => json!({"type": "string", "enum": domain.values}),
            FieldKind::ChoiceList(domain) => json!({
                "type": "array",
                "items": {"type": "string", "enum": domain.values},
            }),
            FieldKind::Record(spec) => self.reference(spec),
            FieldKind::RecordList(spec) => json!({
                "type": "array",
                "items": self.reference(spec),
            }),
        }
    }
}

fn numeric(type_name: &str, range: &Range) -> Value {
    let mut schema = Map::new();
    schema.insert("type".into(), json!(type_name));
    if let Some(Bound { limit, inclusive }) = range.min {
        let keyword = if inclusive { "minimum" } else { "exclusiveMinimum" };
        schema.insert(keyword.into(), json!(limit));
    }
    if let Some(Bound { limit, inclusive }) = range.max {
        let keyword = if inclusive { "maximum" } else { "exclusiveMaximum" };
        schema.insert(keyword.into(), json!(limit));
    }
    Value::Object(schema)
}

fn length_keywords(length: &Length, schema: &mut Map<String, Value>) {
    if let Some(min) = length.min {
        schema.insert("minLength".into(), json!(min));
    }
    if let Some(max) = length.max {
        schema.insert("maxLength".into(), json!(max));
    }
}

/// `{when_field: equals}` must hold.
fn trigger(rule: &RequiredWhen) -> Value {
    json!({
        "properties": { rule.when_field: { "const": rule.equals } },
        "required": [rule.when_field],
    })
}

/// `field` must be present and non-null.
fn requirement(rule: &RequiredWhen) -> Value {
    json!({
        "properties": { rule.field: { "not": { "type": "null" } } },
        "required": [rule.field],
    })
}

fn conditional(rule: &RequiredWhen) -> Value {
    json!({ "if": trigger(rule), "then": requirement(rule) })
}
