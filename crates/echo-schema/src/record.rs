//! # Composite Records
//!
//! A complete ECHO record holds exactly one instance of every section, in
//! one of two equivalent shapes:
//!
//! - [`NestedEcho`]: each section under its own key (`project_size`,
//!   `lca_info`, ...).
//! - [`FlatEcho`]: every section field merged into one namespace. The
//!   struct is composed of the same section types, flattened, so the two
//!   shapes cannot disagree on a field's constraints.
//!
//! ## Construction
//!
//! Every section is checked and every violation across all sections is
//! collected. Only when the whole record is clean does the cross-section
//! invariant run: a `Building` asset must report `gross_floor_area`.
//! Construction either returns a complete record or fails without
//! producing one.

use std::collections::BTreeMap;

use echo_core::constraint::{RecordSpec, RequiredWhen};
use echo_core::registry::AssetType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::impacts::LcaResults;
use crate::sections::*;
use crate::validate::{
    check_record, join, json_type, materialize, Record, ValidationError, Violation,
};

/// One section of the composite record.
#[derive(Debug, Clone, Copy)]
pub struct SectionEntry {
    /// Key of the section in the nested shape.
    pub key: &'static str,
    /// Constraint table of the section.
    pub spec: &'static RecordSpec,
}

/// Every section, in payload order.
pub const SECTIONS: &[SectionEntry] = &[
    SectionEntry { key: "project_description", spec: &ProjectInformation::SPEC },
    SectionEntry { key: "project_team", spec: &ProjectTeam::SPEC },
    SectionEntry { key: "project_schedule", spec: &ProjectSchedule::SPEC },
    SectionEntry { key: "building_occupancy", spec: &BuildingOccupancy::SPEC },
    SectionEntry { key: "project_use_construction_type", spec: &ProjectUseConstruction::SPEC },
    SectionEntry { key: "project_size", spec: &ProjectSize::SPEC },
    SectionEntry { key: "project_costs", spec: &ProjectCost::SPEC },
    SectionEntry { key: "structural_system", spec: &StructuralSystems::SPEC },
    SectionEntry { key: "lca_info", spec: &LcaInformation::SPEC },
    SectionEntry { key: "operational_energy", spec: &OperationalEnergy::SPEC },
    SectionEntry { key: "modeling_parameters", spec: &Uncertainty::SPEC },
    SectionEntry { key: "compliance_verification", spec: &Verification::SPEC },
    SectionEntry { key: "inclusions", spec: &Inclusions::SPEC },
    SectionEntry { key: "lca_results", spec: &LcaResults::SPEC },
    SectionEntry { key: "reduction_strategies", spec: &ReductionStrategies::SPEC },
];

/// Section that carries `gross_floor_area`.
pub const GROSS_FLOOR_AREA_SECTION: &str = "project_size";

/// Section that carries `asset_type`.
pub const ASSET_TYPE_SECTION: &str = "project_use_construction_type";

/// Cross-section requirement checked after all sections are valid.
pub const GROSS_FLOOR_AREA_RULE: RequiredWhen = RequiredWhen {
    field: "gross_floor_area",
    when_field: "asset_type",
    equals: "Building",
};

/// Look up a section by its nested key.
pub fn section(key: &str) -> Option<&'static SectionEntry> {
    SECTIONS.iter().find(|s| s.key == key)
}

/// Field names that appear in more than one section, with every section
/// that declares them. Empty when the flat namespace is well formed.
pub fn flat_name_collisions() -> BTreeMap<&'static str, Vec<&'static str>> {
    let mut owners: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
    for section in SECTIONS {
        for name in section.spec.field_names() {
            owners.entry(name).or_default().push(section.spec.name);
        }
    }
    owners.retain(|_, sections| sections.len() > 1);
    owners
}

/// Returns the section type that declares a flat field name.
pub fn owning_section(field: &str) -> Option<&'static SectionEntry> {
    SECTIONS.iter().find(|s| s.spec.field(field).is_some())
}

fn gross_floor_area_violation(path: String) -> Violation {
    Violation::invariant(
        path,
        format!(
            "{} is required when {} is {:?}",
            GROSS_FLOOR_AREA_RULE.field, GROSS_FLOOR_AREA_RULE.when_field, GROSS_FLOOR_AREA_RULE.equals
        ),
    )
}

fn not_an_object(record: &'static str, value: &Value) -> ValidationError {
    ValidationError::new(
        record,
        vec![Violation::shape(
            "",
            format!("expected an object, found {}", json_type(value)),
        )],
    )
}

fn to_object<T: Serialize>(record: &T) -> Map<String, Value> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// An ECHO record grouped by section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedEcho {
    /// Project identity and location.
    #[serde(rename = "project_description")]
    pub project_information: ProjectInformation,
    /// Owner and design team.
    pub project_team: ProjectTeam,
    /// Construction dates and status.
    pub project_schedule: ProjectSchedule,
    /// Occupancy figures.
    pub building_occupancy: BuildingOccupancy,
    /// Asset, use and construction type.
    #[serde(rename = "project_use_construction_type")]
    pub project_use_construction: ProjectUseConstruction,
    /// Areas and geometry.
    pub project_size: ProjectSize,
    /// Project costs.
    #[serde(rename = "project_costs")]
    pub project_cost: ProjectCost,
    /// Structural parameters.
    #[serde(rename = "structural_system")]
    pub structural_systems: StructuralSystems,
    /// Assessment metadata.
    #[serde(rename = "lca_info")]
    pub lca_information: LcaInformation,
    /// Energy modeling.
    pub operational_energy: OperationalEnergy,
    /// Purpose and uncertainty notes.
    #[serde(rename = "modeling_parameters")]
    pub uncertainty: Uncertainty,
    /// Verification and standards compliance.
    #[serde(rename = "compliance_verification")]
    pub verification: Verification,
    /// Assessment scope.
    pub inclusions: Inclusions,
    /// GWP results.
    pub lca_results: LcaResults,
    /// Reduction strategies.
    pub reduction_strategies: ReductionStrategies,
}

impl NestedEcho {
    /// Record name used in errors.
    pub const NAME: &'static str = "NestedEcho";

    /// Validate a nested payload and construct the record.
    ///
    /// # Errors
    ///
    /// Returns every violation across all sections. A section that is
    /// missing or not an object is a shape mismatch. The gross floor area
    /// invariant is reported only when no other violation exists.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();
        let mut normalized = Map::new();

        for section in SECTIONS {
            match map.get(section.key) {
                Some(Value::Object(fields)) => {
                    let admitted = check_record(section.spec, fields, section.key, &mut violations);
                    for key in fields.keys().filter(|k| section.spec.field(k).is_none()) {
                        tracing::debug!(section = section.key, key = %key, "ignoring unknown field");
                    }
                    normalized.insert(section.key.to_string(), Value::Object(admitted));
                }
                None | Some(Value::Null) => {
                    violations.push(Violation::shape(section.key, "section required"));
                }
                Some(other) => violations.push(Violation::shape(
                    section.key,
                    format!("expected an object, found {}", json_type(other)),
                )),
            }
        }
        for key in map.keys().filter(|k| self::section(k).is_none()) {
            tracing::debug!(key = %key, "ignoring unknown section");
        }

        let record: Self = materialize(Self::NAME, normalized, violations)?;
        record.check_invariants()?;
        tracing::trace!("nested record validated");
        Ok(record)
    }

    /// Validate an arbitrary JSON value, which must be an object.
    ///
    /// # Errors
    ///
    /// See [`NestedEcho::from_map`].
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(not_an_object(Self::NAME, other)),
        }
    }

    fn check_invariants(&self) -> Result<(), ValidationError> {
        if self.project_use_construction.asset_type == AssetType::Building
            && self.project_size.gross_floor_area.is_none()
        {
            return Err(ValidationError::new(
                Self::NAME,
                vec![gross_floor_area_violation(join(
                    GROSS_FLOOR_AREA_SECTION,
                    GROSS_FLOOR_AREA_RULE.field,
                ))],
            ));
        }
        Ok(())
    }

    /// Section key to field mapping. Absent optional fields appear as
    /// `null`.
    pub fn to_map(&self) -> Map<String, Value> {
        to_object(self)
    }

    /// All fields of one section, by nested key.
    pub fn section(&self, key: &str) -> Option<Map<String, Value>> {
        match self.to_map().remove(key) {
            Some(Value::Object(fields)) => Some(fields),
            _ => None,
        }
    }

    /// Value of one field by its (globally unique) name, searching every
    /// section. `None` if unknown or absent.
    pub fn field(&self, name: &str) -> Option<Value> {
        let section = owning_section(name)?;
        self.section(section.key)?.remove(name).filter(|v| !v.is_null())
    }

    /// Re-run validation over this record's own serialized values.
    ///
    /// # Errors
    ///
    /// Fails only if the record was mutated into an invalid state.
    pub fn revalidate(&self) -> Result<Self, ValidationError> {
        Self::from_map(&self.to_map())
    }
}

/// An ECHO record with every field at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatEcho {
    #[serde(flatten)]
    pub project_information: ProjectInformation,
    #[serde(flatten)]
    pub project_team: ProjectTeam,
    #[serde(flatten)]
    pub project_schedule: ProjectSchedule,
    #[serde(flatten)]
    pub building_occupancy: BuildingOccupancy,
    #[serde(flatten)]
    pub project_use_construction: ProjectUseConstruction,
    #[serde(flatten)]
    pub project_size: ProjectSize,
    #[serde(flatten)]
    pub project_cost: ProjectCost,
    #[serde(flatten)]
    pub structural_systems: StructuralSystems,
    #[serde(flatten)]
    pub lca_information: LcaInformation,
    #[serde(flatten)]
    pub operational_energy: OperationalEnergy,
    #[serde(flatten)]
    pub uncertainty: Uncertainty,
    #[serde(flatten)]
    pub verification: Verification,
    #[serde(flatten)]
    pub inclusions: Inclusions,
    #[serde(flatten)]
    pub lca_results: LcaResults,
    #[serde(flatten)]
    pub reduction_strategies: ReductionStrategies,
}

impl FlatEcho {
    /// Record name used in errors.
    pub const NAME: &'static str = "FlatEcho";

    /// Validate a flat payload and construct the record.
    ///
    /// # Errors
    ///
    /// Returns every violation across all sections, with bare field names
    /// as paths. The gross floor area invariant is reported only when no
    /// other violation exists.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();
        let mut normalized = Map::new();

        for section in SECTIONS {
            normalized.extend(check_record(section.spec, map, "", &mut violations));
        }
        for key in map.keys().filter(|k| owning_section(k).is_none()) {
            tracing::debug!(key = %key, "ignoring unknown field");
        }

        let record: Self = materialize(Self::NAME, normalized, violations)?;
        record.check_invariants()?;
        tracing::trace!("flat record validated");
        Ok(record)
    }

    /// Validate an arbitrary JSON value, which must be an object.
    ///
    /// # Errors
    ///
    /// See [`FlatEcho::from_map`].
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(not_an_object(Self::NAME, other)),
        }
    }

    fn check_invariants(&self) -> Result<(), ValidationError> {
        if self.project_use_construction.asset_type == AssetType::Building
            && self.project_size.gross_floor_area.is_none()
        {
            return Err(ValidationError::new(
                Self::NAME,
                vec![gross_floor_area_violation(GROSS_FLOOR_AREA_RULE.field.to_string())],
            ));
        }
        Ok(())
    }

    /// Field name to value mapping. Absent optional fields appear as `null`.
    pub fn to_map(&self) -> Map<String, Value> {
        to_object(self)
    }

    /// Value of one field by name; `None` if unknown or absent.
    pub fn field(&self, name: &str) -> Option<Value> {
        self.to_map().remove(name).filter(|v| !v.is_null())
    }

    /// Re-run validation over this record's own serialized values.
    ///
    /// # Errors
    ///
    /// Fails only if the record was mutated into an invalid state.
    pub fn revalidate(&self) -> Result<Self, ValidationError> {
        Self::from_map(&self.to_map())
    }
}

impl From<NestedEcho> for FlatEcho {
    fn from(n: NestedEcho) -> Self {
        Self {
            project_information: n.project_information,
            project_team: n.project_team,
            project_schedule: n.project_schedule,
            building_occupancy: n.building_occupancy,
            project_use_construction: n.project_use_construction,
            project_size: n.project_size,
            project_cost: n.project_cost,
            structural_systems: n.structural_systems,
            lca_information: n.lca_information,
            operational_energy: n.operational_energy,
            uncertainty: n.uncertainty,
            verification: n.verification,
            inclusions: n.inclusions,
            lca_results: n.lca_results,
            reduction_strategies: n.reduction_strategies,
        }
    }
}

impl From<FlatEcho> for NestedEcho {
    fn from(f: FlatEcho) -> Self {
        Self {
            project_information: f.project_information,
            project_team: f.project_team,
            project_schedule: f.project_schedule,
            building_occupancy: f.building_occupancy,
            project_use_construction: f.project_use_construction,
            project_size: f.project_size,
            project_cost: f.project_cost,
            structural_systems: f.structural_systems,
            lca_information: f.lca_information,
            operational_energy: f.operational_energy,
            uncertainty: f.uncertainty,
            verification: f.verification,
            inclusions: f.inclusions,
            lca_results: f.lca_results,
            reduction_strategies: f.reduction_strategies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ViolationKind;
    use serde_json::json;

    fn nested() -> Value {
        json!({
            "project_description": {
                "project_name": "Civic Annex",
                "date_of_creation": "2024-03-01",
                "date_of_update": "2024-03-02",
                "date_of_submission": "2024-03-03",
                "project_country": "USA",
                "project_postal_code": "981",
            },
            "project_team": {},
            "project_schedule": {},
            "building_occupancy": {},
            "project_use_construction_type": {
                "asset_type": "Building",
                "building_use_type": "Commercial Office",
            },
            "project_size": {
                "project_units": "Imperial Units System (IP, USA)",
                "gfa_measurement_method": "ASHRAE/LEED",
                "gross_floor_area": 48_000.5,
            },
            "project_costs": {},
            "structural_system": {},
            "lca_info": {
                "assessment_year": 2024,
                "project_phase_at_time_of_assessment": "Design Development",
                "tool_lca": "One Click LCA",
            },
            "operational_energy": {"tool_energy_model": "EnergyPlus"},
            "modeling_parameters": {},
            "compliance_verification": {},
            "inclusions": {
                "operational_energy_included": false,
                "biogenic_carbon_storage_included": false,
                "project_refrigerants": false,
                "substructure_included": true,
                "shell_superstructure_included": true,
                "shell_exterior_enclosure_included": true,
                "interior_construction_included": false,
                "interiors_finishes_included": false,
                "services_mep_included": false,
                "sitework_included": false,
                "equipment_included": false,
                "furnishings_included": false,
            },
            "lca_results": {"GWP_total": 2_100_000.0},
            "reduction_strategies": {},
        })
    }

    #[test]
    fn test_every_section_listed_once() {
        assert_eq!(SECTIONS.len(), 15);
        let mut keys: Vec<_> = SECTIONS.iter().map(|s| s.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 15);
    }

    #[test]
    fn test_flat_namespace_has_no_collisions() {
        let collisions = flat_name_collisions();
        assert!(collisions.is_empty(), "colliding flat names: {collisions:?}");
    }

    #[test]
    fn test_nested_building_with_gfa() {
        let record = NestedEcho::from_value(&nested()).unwrap();
        assert_eq!(record.project_use_construction.asset_type, AssetType::Building);
        assert_eq!(record.field("gross_floor_area"), Some(json!(48_000.5)));
        assert_eq!(record.field("lat"), None);
    }

    #[test]
    fn test_nested_building_without_gfa_fails_invariant() {
        let mut payload = nested();
        payload["project_size"]["gross_floor_area"] = Value::Null;
        let err = NestedEcho::from_value(&payload).unwrap_err();
        assert_eq!(err.paths(), vec!["project_size.gross_floor_area"]);
        assert!(err.all_of_kind(ViolationKind::Invariant));
    }

    #[test]
    fn test_nested_infrastructure_without_gfa_passes() {
        let mut payload = nested();
        payload["project_size"]
            .as_object_mut()
            .unwrap()
            .remove("gross_floor_area");
        payload["project_use_construction_type"] = json!({"asset_type": "Infrastructure"});
        assert!(NestedEcho::from_value(&payload).is_ok());
    }

    #[test]
    fn test_invariant_deferred_until_sections_clean() {
        let mut payload = nested();
        payload["project_size"]["gross_floor_area"] = Value::Null;
        payload["lca_info"]["assessment_year"] = json!(1700);
        let err = NestedEcho::from_value(&payload).unwrap_err();
        assert_eq!(err.paths(), vec!["lca_info.assessment_year"]);
    }

    #[test]
    fn test_violations_collected_across_sections() {
        let mut payload = nested();
        payload["project_description"]["lat"] = json!(91);
        payload["project_size"]["window_wall_ratio"] = json!(0);
        payload["lca_results"] = json!({});
        let err = NestedEcho::from_value(&payload).unwrap_err();
        assert_eq!(
            err.paths(),
            vec!["project_description.lat", "project_size.window_wall_ratio", "lca_results.GWP_total"]
        );
    }

    #[test]
    fn test_missing_or_malformed_section_is_shape_mismatch() {
        let mut payload = nested();
        payload.as_object_mut().unwrap().remove("inclusions");
        payload["project_team"] = json!("Studio North");
        let err = NestedEcho::from_value(&payload).unwrap_err();
        assert_eq!(err.paths(), vec!["project_team", "inclusions"]);
        assert!(err.all_of_kind(ViolationKind::ShapeMismatch));
    }

    #[test]
    fn test_flat_equivalent_of_nested() {
        let nested_record = NestedEcho::from_value(&nested()).unwrap();
        let mut flat_payload = Map::new();
        for (_, section) in nested().as_object().unwrap() {
            flat_payload.extend(section.as_object().unwrap().clone());
        }
        let flat_record = FlatEcho::from_map(&flat_payload).unwrap();
        assert_eq!(FlatEcho::from(nested_record.clone()), flat_record);
        assert_eq!(NestedEcho::from(flat_record), nested_record);
    }

    #[test]
    fn test_flat_building_without_gfa_uses_bare_path() {
        let mut flat_payload = Map::new();
        for (_, section) in nested().as_object().unwrap() {
            flat_payload.extend(section.as_object().unwrap().clone());
        }
        flat_payload.remove("gross_floor_area");
        let err = FlatEcho::from_map(&flat_payload).unwrap_err();
        assert_eq!(err.paths(), vec!["gross_floor_area"]);
    }

    #[test]
    fn test_nested_revalidate_roundtrip() {
        let record = NestedEcho::from_value(&nested()).unwrap();
        assert_eq!(record.revalidate().unwrap(), record);
    }

    #[test]
    fn test_section_lookup() {
        assert_eq!(section("lca_info").map(|s| s.spec.name), Some("LcaInformation"));
        assert_eq!(owning_section("tool_lca").map(|s| s.key), Some("lca_info"));
        assert!(section("project_information").is_none());
    }

    #[test]
    fn test_non_object_payload() {
        let err = FlatEcho::from_value(&json!(null)).unwrap_err();
        assert!(err.all_of_kind(ViolationKind::ShapeMismatch));
    }
}
