//! # Payload Loading
//!
//! Reads a payload file into an untyped JSON value. Files ending in
//! `.yaml` or `.yml` are parsed as YAML and converted; everything else is
//! parsed as JSON.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;

/// Returns true if the path names a YAML document.
pub fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml")
    )
}

/// Load a JSON or YAML payload from disk.
pub fn load_payload(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    if is_yaml(path) {
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML in {}", path.display()))?;
        yaml_to_json_value(&yaml).with_context(|| format!("failed to convert {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))
    }
}

/// Convert a YAML value into the equivalent JSON value.
///
/// Scalar map keys are stringified. Tags are dropped.
pub fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value> {
    Ok(match yaml {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(*b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else if let Some(f) = n.as_f64() {
                match serde_json::Number::from_f64(f) {
                    Some(n) => Value::Number(n),
                    None => bail!("cannot represent {f} in JSON"),
                }
            } else {
                bail!("unsupported YAML number: {n:?}")
            }
        }
        serde_yaml::Value::String(s) => Value::String(s.clone()),
        serde_yaml::Value::Sequence(seq) => Value::Array(
            seq.iter()
                .map(yaml_to_json_value)
                .collect::<Result<Vec<_>>>()?,
        ),
        serde_yaml::Value::Mapping(map) => {
            let mut object = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => bail!("unsupported YAML map key: {other:?}"),
                };
                object.insert(key, yaml_to_json_value(v)?);
            }
            Value::Object(object)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn yaml_extension_detection() {
        assert!(is_yaml(Path::new("record.yaml")));
        assert!(is_yaml(Path::new("record.YML")));
        assert!(!is_yaml(Path::new("record.json")));
        assert!(!is_yaml(Path::new("record")));
    }

    #[test]
    fn yaml_converts_to_json() {
        let yaml: serde_yaml::Value = serde_yaml::from_str(
            "project_name: Depot\nlat: 49.5\nstories_above_grade: 3\nproject_climate_zone: [5C]\nlng: ~\n",
        )
        .unwrap();
        let value = yaml_to_json_value(&yaml).unwrap();
        assert_eq!(
            value,
            json!({
                "project_name": "Depot",
                "lat": 49.5,
                "stories_above_grade": 3,
                "project_climate_zone": ["5C"],
                "lng": null,
            })
        );
    }

    #[test]
    fn yaml_numeric_keys_are_stringified() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("1: one\ntrue: yes\n").unwrap();
        let value = yaml_to_json_value(&yaml).unwrap();
        assert_eq!(value["1"], json!("one"));
        assert_eq!(value["true"], json!("yes"));
    }

    #[test]
    fn load_json_and_yaml_files() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("record.json");
        std::fs::write(&json_path, br#"{"project_name": "Depot"}"#).unwrap();
        let yaml_path = dir.path().join("record.yml");
        std::fs::write(&yaml_path, b"project_name: Depot\n").unwrap();

        assert_eq!(load_payload(&json_path).unwrap(), json!({"project_name": "Depot"}));
        assert_eq!(load_payload(&yaml_path).unwrap(), json!({"project_name": "Depot"}));
    }

    #[test]
    fn load_reports_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = load_payload(&missing).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read"));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, b"{not json").unwrap();
        let err = load_payload(&broken).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse JSON"));
    }
}
