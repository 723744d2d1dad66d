//! # Record Validation
//!
//! One routine, [`check_record`], interprets a [`RecordSpec`] against an
//! untyped JSON mapping. It never stops at the first problem: every field is
//! checked and every violation is collected, then the caller either
//! materializes the typed record from the normalized mapping or fails with
//! the complete list.
//!
//! ## Trust Boundary
//!
//! Payloads are untrusted. A value reaches a typed struct only after its
//! field descriptor has admitted it, so `serde` deserialization of the
//! normalized mapping cannot observe an out-of-domain literal, a bound
//! violation or an over-precise decimal.
//!
//! ## Absent vs. Null
//!
//! `null` is treated exactly like a missing key. A required field that is
//! null is reported as missing; an optional one is simply not reported.

use std::fmt;

use echo_core::constraint::{FieldKind, RecordSpec};
use echo_core::decimal::{Decimal, Reading};
use echo_core::temporal::parse_date;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A single field is missing, mistyped, out of bounds, or outside its
    /// domain.
    FieldConstraint,
    /// A rule spanning several fields or sections does not hold.
    Invariant,
    /// The payload or one of its sections is not shaped like the record.
    ShapeMismatch,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViolationKind::FieldConstraint => "field constraint",
            ViolationKind::Invariant => "invariant",
            ViolationKind::ShapeMismatch => "shape mismatch",
        })
    }
}

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Dotted path to the violating field, e.g. `project_size.gross_floor_area`
    /// or `lca_results.substructure.A1_A3.GWP_total`. Empty for the root.
    pub path: String,
    /// Failure category.
    pub kind: ViolationKind,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Violation {
    /// A field-level violation.
    pub fn field(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::FieldConstraint,
            message: message.into(),
        }
    }

    /// A cross-field or cross-section violation.
    pub fn invariant(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::Invariant,
            message: message.into(),
        }
    }

    /// A structural violation.
    pub fn shape(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::ShapeMismatch,
            message: message.into(),
        }
    }

    fn missing(path: String) -> Self {
        Self::field(path, "field required")
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.path, self.message)
        }
    }
}

/// Collection of validation violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }

    /// Iterate over the violations.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationViolations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// A record could not be constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{record} failed validation with {} violation(s):\n{violations}", .violations.len())]
pub struct ValidationError {
    /// Name of the record type that was being constructed.
    pub record: &'static str,
    /// Every violation found.
    pub violations: ValidationViolations,
}

impl ValidationError {
    /// Wrap a non-empty list of violations.
    pub fn new(record: &'static str, violations: Vec<Violation>) -> Self {
        Self {
            record,
            violations: ValidationViolations { violations },
        }
    }

    /// Paths of every violation, in report order.
    pub fn paths(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.path.as_str()).collect()
    }

    /// Returns true if some violation is reported at `path`.
    pub fn has_path(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }

    /// Returns true if every violation has the given kind.
    pub fn all_of_kind(&self, kind: ViolationKind) -> bool {
        self.violations.iter().all(|v| v.kind == kind)
    }
}

/// A typed record backed by a constraint table.
///
/// Implementations are generated by the `record!` macro; the provided
/// methods are the only way records are built from untyped input.
pub trait Record: Sized + Serialize + DeserializeOwned {
    /// Constraint table of this record.
    const SPEC: RecordSpec;

    /// Validate `map` and construct the record.
    ///
    /// Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every violated field.
    fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        for key in map.keys().filter(|k| Self::SPEC.field(k).is_none()) {
            tracing::debug!(record = Self::SPEC.name, key = %key, "ignoring unknown field");
        }
        let mut violations = Vec::new();
        let normalized = check_record(&Self::SPEC, map, "", &mut violations);
        materialize(Self::SPEC.name, normalized, violations)
    }

    /// Validate an arbitrary JSON value, which must be an object.
    ///
    /// # Errors
    ///
    /// Returns a shape-mismatch [`ValidationError`] for non-objects and
    /// otherwise behaves like [`Record::from_map`].
    fn from_value(value: &Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(ValidationError::new(
                Self::SPEC.name,
                vec![Violation::shape(
                    "",
                    format!("expected an object, found {}", json_type(other)),
                )],
            )),
        }
    }

    /// Field name to value mapping of this record. Absent optional fields
    /// appear as `null`.
    fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Value of one field by payload name; `None` if unknown or absent.
    fn field(&self, name: &str) -> Option<Value> {
        self.to_map().remove(name).filter(|v| !v.is_null())
    }

    /// Re-run validation over this record's own serialized values.
    ///
    /// # Errors
    ///
    /// Never fails for a record that was built through [`Record::from_map`];
    /// a failure indicates the record was mutated into an invalid state.
    fn revalidate(&self) -> Result<Self, ValidationError> {
        Self::from_map(&self.to_map())
    }
}

/// Build a typed record from a normalized mapping, unless violations were
/// collected on the way.
pub(crate) fn materialize<T: DeserializeOwned>(
    record: &'static str,
    normalized: Map<String, Value>,
    violations: Vec<Violation>,
) -> Result<T, ValidationError> {
    if !violations.is_empty() {
        tracing::debug!(record, count = violations.len(), "record rejected");
        return Err(ValidationError::new(record, violations));
    }
    serde_json::from_value(Value::Object(normalized)).map_err(|e| {
        ValidationError::new(record, vec![Violation::field("", e.to_string())])
    })
}

/// Join a parent path and a key.
pub(crate) fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Returns true if `map[key]` is missing or null.
pub(crate) fn is_absent(map: &Map<String, Value>, key: &str) -> bool {
    matches!(map.get(key), None | Some(Value::Null))
}

/// Check every field of `spec` in `map`, appending violations to `out`.
///
/// Returns the admitted fields with null and unknown keys dropped and
/// integral floats turned into integers, ready for typed deserialization.
pub(crate) fn check_record(
    spec: &RecordSpec,
    map: &Map<String, Value>,
    prefix: &str,
    out: &mut Vec<Violation>,
) -> Map<String, Value> {
    let mut normalized = Map::new();

    for field in spec.fields {
        let path = join(prefix, field.name);
        match map.get(field.name) {
            None | Some(Value::Null) => {
                if field.required {
                    out.push(Violation::missing(path));
                }
            }
            Some(value) => {
                if let Some(admitted) = check_value(&field.kind, value, &path, out) {
                    normalized.insert(field.name.to_string(), admitted);
                }
            }
        }
    }

    for rule in spec.rules {
        let triggered = map.get(rule.when_field).and_then(Value::as_str) == Some(rule.equals);
        if triggered && is_absent(map, rule.field) {
            out.push(Violation::invariant(
                join(prefix, rule.field),
                format!(
                    "{} is required when {} is {:?}",
                    rule.field, rule.when_field, rule.equals
                ),
            ));
        }
    }

    normalized
}

/// Check one present, non-null value. Returns the normalized value when it
/// is admitted.
fn check_value(
    kind: &FieldKind,
    value: &Value,
    path: &str,
    out: &mut Vec<Violation>,
) -> Option<Value> {
    let mismatch = |out: &mut Vec<Violation>| {
        out.push(Violation::field(
            path,
            format!("expected {}, found {}", kind.expected(), json_type(value)),
        ));
        None
    };

    match kind {
        FieldKind::Text(length) => {
            let Value::String(s) = value else {
                return mismatch(out);
            };
            let count = s.chars().count();
            if length.admits(count) {
                Some(value.clone())
            } else {
                out.push(Violation::field(
                    path,
                    format!("length {count} is outside {}", describe_length(length)),
                ));
                None
            }
        }

        FieldKind::Bool => match value {
            Value::Bool(_) => Some(value.clone()),
            _ => mismatch(out),
        },

        FieldKind::Integer(range) => {
            let Some(i) = as_integer(value) else {
                return mismatch(out);
            };
            if range.admits_i64(i) {
                Some(Value::from(i))
            } else {
                out.push(out_of_range(path, value, &range.describe()));
                None
            }
        }

        FieldKind::Float(range) => {
            let Some(f) = value.as_f64() else {
                return mismatch(out);
            };
            if range.admits_f64(f) {
                Some(value.clone())
            } else {
                out.push(out_of_range(path, value, &range.describe()));
                None
            }
        }

        FieldKind::Decimal { range, places } => {
            let (d, rounded) = match Decimal::read_json(value) {
                Reading::Exact(d) => (d, false),
                Reading::Rounded(d) => (d, true),
                Reading::TooLarge { negative } => {
                    let bounded = if negative { range.min } else { range.max };
                    out.push(match bounded {
                        Some(_) => out_of_range(path, value, &range.describe()),
                        None => Violation::field(
                            path,
                            format!("{value} exceeds the largest representable decimal"),
                        ),
                    });
                    return None;
                }
                Reading::NotNumeric => return mismatch(out),
            };
            let mut ok = true;
            if !d.within(range) {
                out.push(out_of_range(path, value, &range.describe()));
                ok = false;
            }
            if let Some(limit) = places {
                if d.scale() > *limit {
                    out.push(Violation::field(
                        path,
                        format!("{d} has more than {limit} decimal places"),
                    ));
                    ok = false;
                }
            }
            if !ok {
                return None;
            }
            if rounded {
                serde_json::to_value(d).ok()
            } else {
                Some(value.clone())
            }
        }

        FieldKind::Date => match value {
            Value::String(s) if parse_date(s).is_some() => Some(value.clone()),
            Value::String(s) => {
                out.push(Violation::field(
                    path,
                    format!("{s:?} is not a valid date (YYYY-MM-DD)"),
                ));
                None
            }
            _ => mismatch(out),
        },

        FieldKind::DateOrYear(range) => match value {
            Value::String(s) if parse_date(s).is_some() => Some(value.clone()),
            Value::String(s) => {
                out.push(Violation::field(
                    path,
                    format!("{s:?} is not a valid date (YYYY-MM-DD)"),
                ));
                None
            }
            _ => match as_integer(value) {
                Some(year) if range.admits_i64(year) => Some(Value::from(year)),
                Some(_) => {
                    out.push(out_of_range(path, value, &range.describe()));
                    None
                }
                None => mismatch(out),
            },
        },

        FieldKind::Choice(domain) => match value {
            Value::String(s) if domain.contains(s) => Some(value.clone()),
            Value::String(s) => {
                out.push(Violation::field(
                    path,
                    format!("{s:?} is not a permitted {} value", domain.name),
                ));
                None
            }
            _ => mismatch(out),
        },

        FieldKind::ChoiceList(domain) => {
            let Value::Array(items) = value else {
                return mismatch(out);
            };
            let before = out.len();
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{path}[{i}]");
                match item {
                    Value::String(s) if domain.contains(s) => {}
                    Value::String(s) => out.push(Violation::field(
                        item_path,
                        format!("{s:?} is not a permitted {} value", domain.name),
                    )),
                    other => out.push(Violation::field(
                        item_path,
                        format!("expected string, found {}", json_type(other)),
                    )),
                }
            }
            (out.len() == before).then(|| value.clone())
        }

        FieldKind::Record(spec) => {
            let Value::Object(map) = value else {
                return mismatch(out);
            };
            let before = out.len();
            let normalized = check_record(spec, map, path, out);
            (out.len() == before).then_some(Value::Object(normalized))
        }

        FieldKind::RecordList(spec) => {
            let Value::Array(items) = value else {
                return mismatch(out);
            };
            let before = out.len();
            let mut normalized = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{path}[{i}]");
                match item {
                    Value::Object(map) => {
                        normalized.push(Value::Object(check_record(spec, map, &item_path, out)));
                    }
                    other => out.push(Violation::field(
                        item_path,
                        format!("expected object, found {}", json_type(other)),
                    )),
                }
            }
            (out.len() == before).then_some(Value::Array(normalized))
        }
    }
}

/// Integral JSON number as `i64`. Floats with no fractional part qualify.
fn as_integer(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    let f = n.as_f64()?;
    // 2^53: beyond this, f64 no longer represents every integer.
    (f.fract() == 0.0 && f.abs() <= 9_007_199_254_740_992.0).then_some(f as i64)
}

fn out_of_range(path: &str, value: &Value, bounds: &str) -> Violation {
    Violation::field(path, format!("{value} is out of range (must be {bounds})"))
}

fn describe_length(length: &echo_core::Length) -> String {
    match (length.min, length.max) {
        (Some(lo), Some(hi)) if lo == hi => format!("exactly {lo} characters"),
        (Some(lo), Some(hi)) => format!("{lo}..={hi} characters"),
        (Some(lo), None) => format!("at least {lo} characters"),
        (None, Some(hi)) => format!("at most {hi} characters"),
        (None, None) => "any length".to_string(),
    }
}

/// JSON type name of a value, for messages.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use echo_core::constraint::{FieldSpec, Length, Range, RequiredWhen};
    use echo_core::registry::AssetType;
    use serde_json::json;

    const SAMPLE_FIELDS: &[FieldSpec] = &[
        FieldSpec::required("name", FieldKind::Text(Length::between(1, 5))),
        FieldSpec::optional("ratio", FieldKind::Decimal {
            range: Range::left_open(0, 1),
            places: None,
        }),
        FieldSpec::optional("area", FieldKind::AREA),
        FieldSpec::optional("lat", FieldKind::Decimal {
            range: Range::closed(-90, 90),
            places: None,
        }),
        FieldSpec::optional("floors", FieldKind::Integer(Range::POSITIVE)),
        FieldSpec::optional("asset_type", FieldKind::Choice(&AssetType::DOMAIN)),
        FieldSpec::optional("tags", FieldKind::ChoiceList(&AssetType::DOMAIN)),
        FieldSpec::optional("use", FieldKind::TEXT),
        FieldSpec::optional("opened", FieldKind::Date),
        FieldSpec::optional("built", FieldKind::DateOrYear(Range::left_open(1000, 2100))),
    ];

    const SAMPLE: RecordSpec = RecordSpec {
        name: "Sample",
        fields: SAMPLE_FIELDS,
        rules: &[RequiredWhen {
            field: "use",
            when_field: "asset_type",
            equals: "Building",
        }],
    };

    fn check(payload: Value) -> (Map<String, Value>, Vec<Violation>) {
        let mut out = Vec::new();
        let map = payload.as_object().cloned().unwrap_or_default();
        let normalized = check_record(&SAMPLE, &map, "", &mut out);
        (normalized, out)
    }

    #[test]
    fn test_valid_payload_has_no_violations() {
        let (normalized, out) = check(json!({"name": "abc", "ratio": 0.5, "floors": 3.0}));
        assert!(out.is_empty(), "{out:?}");
        assert_eq!(normalized["floors"], json!(3));
    }

    #[test]
    fn test_null_is_absent() {
        let (normalized, out) = check(json!({"name": null, "area": null}));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "name");
        assert_eq!(out[0].message, "field required");
        assert!(!normalized.contains_key("area"));
    }

    #[test]
    fn test_collects_every_violation() {
        let (_, out) = check(json!({
            "name": "",
            "ratio": 0,
            "area": 12.345,
            "floors": 0,
            "asset_type": "Spaceship",
        }));
        let paths: Vec<_> = out.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["name", "ratio", "area", "floors", "asset_type"]);
        assert!(out.iter().all(|v| v.kind == ViolationKind::FieldConstraint));
    }

    #[test]
    fn test_ratio_boundaries() {
        assert!(check(json!({"name": "a", "ratio": 1})).1.is_empty());
        assert_eq!(check(json!({"name": "a", "ratio": 0})).1.len(), 1);
        assert_eq!(check(json!({"name": "a", "ratio": 1.0001})).1.len(), 1);
    }

    #[test]
    fn test_tiny_decimal_rounded_then_checked() {
        let (normalized, out) = check(json!({"name": "a", "lat": 1e-30}));
        assert!(out.is_empty(), "{out:?}");
        assert_eq!(normalized["lat"], json!(0));

        let (_, out) = check(json!({"name": "a", "ratio": 1e-30}));
        assert_eq!(out.len(), 1);
        assert!(out[0].message.contains("out of range"));
    }

    #[test]
    fn test_huge_decimal_is_range_violation() {
        for lat in [json!(1e300), json!(-1e300)] {
            let (_, out) = check(json!({"name": "a", "lat": lat}));
            assert_eq!(out.len(), 1);
            assert_eq!(out[0].kind, ViolationKind::FieldConstraint);
            assert!(out[0].message.contains("out of range (must be"), "{}", out[0].message);
        }

        let (_, out) = check(json!({"name": "a", "area": 1e30}));
        assert_eq!(out.len(), 1);
        assert!(out[0].message.ends_with("exceeds the largest representable decimal"));
        assert!(!out[0].message.contains("expected"));
    }

    #[test]
    fn test_decimal_places_limit() {
        assert!(check(json!({"name": "a", "area": 12.34})).1.is_empty());
        assert!(check(json!({"name": "a", "area": "12.30"})).1.is_empty());
        let (_, out) = check(json!({"name": "a", "area": 12.345}));
        assert!(out[0].message.contains("decimal places"));
    }

    #[test]
    fn test_type_mismatch_message() {
        let (_, out) = check(json!({"name": 42}));
        assert_eq!(out[0].message, "expected string, found integer");
    }

    #[test]
    fn test_choice_violation_names_domain() {
        let (_, out) = check(json!({"name": "a", "asset_type": "Spaceship"}));
        assert_eq!(out[0].path, "asset_type");
        assert!(out[0].message.contains("AssetType"));
    }

    #[test]
    fn test_choice_list_reports_item_index() {
        let (_, out) = check(json!({"name": "a", "tags": ["Building", "Nope", 3]}));
        let paths: Vec<_> = out.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["tags[1]", "tags[2]"]);
    }

    #[test]
    fn test_conditional_rule_is_invariant_violation() {
        let (_, out) = check(json!({"name": "a", "asset_type": "Building"}));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "use");
        assert_eq!(out[0].kind, ViolationKind::Invariant);

        let (_, out) = check(json!({"name": "a", "asset_type": "Landscape"}));
        assert!(out.is_empty());
    }

    #[test]
    fn test_date_and_year() {
        assert!(check(json!({"name": "a", "opened": "2024-01-31"})).1.is_empty());
        assert_eq!(check(json!({"name": "a", "opened": "2024-13-01"})).1.len(), 1);
        assert!(check(json!({"name": "a", "built": 1965})).1.is_empty());
        assert!(check(json!({"name": "a", "built": "1965-04-01"})).1.is_empty());
        assert_eq!(check(json!({"name": "a", "built": 1000})).1.len(), 1);
        assert!(check(json!({"name": "a", "built": 2100})).1.is_empty());
    }

    #[test]
    fn test_unknown_keys_dropped_from_normalized() {
        let (normalized, out) = check(json!({"name": "a", "colour": "red"}));
        assert!(out.is_empty());
        assert!(!normalized.contains_key("colour"));
    }

    #[test]
    fn test_violation_display_format() {
        let v = Violation::field("project_size.gross_floor_area", "field required");
        assert_eq!(v.to_string(), "  project_size.gross_floor_area: field required");
        let root = Violation::shape("", "expected an object, found array");
        assert_eq!(root.to_string(), "  (root): expected an object, found array");
    }

    #[test]
    fn test_validation_error_display_lists_all() {
        let err = ValidationError::new(
            "Sample",
            vec![
                Violation::field("a", "field required"),
                Violation::field("b", "field required"),
            ],
        );
        let msg = err.to_string();
        assert!(msg.starts_with("Sample failed validation with 2 violation(s)"));
        assert!(msg.contains("  a: field required\n  b: field required"));
        assert_eq!(err.paths(), vec!["a", "b"]);
        assert!(err.all_of_kind(ViolationKind::FieldConstraint));
    }

    #[test]
    fn test_violations_serialize_for_reports() {
        let err = ValidationError::new("Sample", vec![Violation::invariant("x", "m")]);
        assert_eq!(
            serde_json::to_value(&err.violations).unwrap(),
            json!([{"path": "x", "kind": "invariant", "message": "m"}])
        );
    }
}
