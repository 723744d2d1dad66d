//! # Section Records
//!
//! The independently validating field groups of an ECHO record. Each type
//! is declared once through `record!`, which yields both the typed struct
//! and its constraint table; see [`crate::validate::Record`] for
//! construction.
//!
//! The LCA results section lives in [`crate::impacts`] next to the GWP
//! vector and life-cycle-stage records it is built from.

use chrono::NaiveDate;
use echo_core::constraint::{FieldKind, Length, Range, RequiredWhen};
use echo_core::decimal::Decimal;
use echo_core::registry::*;
use echo_core::temporal::ConstructionDate;

const NAME: FieldKind = FieldKind::Text(Length::between(1, 200));
const ALPHA3: FieldKind = FieldKind::Text(Length::between(3, 3));
const LATITUDE: FieldKind = FieldKind::Decimal {
    range: Range::closed(-90, 90),
    places: None,
};
const LONGITUDE: FieldKind = FieldKind::Decimal {
    range: Range::closed(-180, 180),
    places: None,
};
/// Strictly positive decimal with no precision limit.
const POSITIVE: FieldKind = FieldKind::Decimal {
    range: Range::POSITIVE,
    places: None,
};
/// Strictly positive decimal, two fractional digits (lengths, loads, speeds).
const MEASURE: FieldKind = FieldKind::AREA;
const COUNT: FieldKind = FieldKind::Integer(Range::POSITIVE);
const NON_NEGATIVE: FieldKind = FieldKind::Float(Range::NON_NEGATIVE);
const RATIO: FieldKind = FieldKind::Decimal {
    range: Range::left_open(0, 1),
    places: None,
};
const EXISTING_BUILDING_YEAR: FieldKind = FieldKind::DateOrYear(Range::left_open(1000, 2100));

record! {
    /// Project identity, location and data-entry metadata.
    ///
    /// `project_description` doubles as the nested-shape marker at the top
    /// level of a payload, see [`crate::dispatch`].
    pub struct ProjectInformation {
        /// Name of the project.
        project_name: String => required(NAME),
        /// Date of data entry creation (yyyy-mm-dd).
        date_of_creation: NaiveDate => required(FieldKind::Date),
        /// Date of last data entry or edit (yyyy-mm-dd).
        date_of_update: NaiveDate => required(FieldKind::Date),
        /// Date of data entry submission (yyyy-mm-dd).
        date_of_submission: NaiveDate => required(FieldKind::Date),
        /// Absolute Open Location Code of this location.
        pluscode: Option<String> => optional(FieldKind::TEXT),
        /// Project address.
        project_address: Option<String> => optional(FieldKind::TEXT),
        /// Project city.
        project_location_city: Option<String> => optional(FieldKind::TEXT),
        /// Project address lookup (Google Maps).
        project_address_lookup: Option<String> => optional(FieldKind::TEXT),
        /// Project state, province, or country subdivision.
        project_state_or_province: Option<String> => optional(FieldKind::TEXT),
        /// Project country (ISO 3166 Alpha-3).
        project_country: String => required(ALPHA3),
        /// Project postal code (only the first 3 characters).
        project_postal_code: String => required(ALPHA3),
        /// Climate zone per IECC (e.g. 1A, 2B).
        project_climate_zone: Option<Vec<ClimateZone>> =>
            optional(FieldKind::ChoiceList(&ClimateZone::DOMAIN)),
        /// Latitude, as a signed decimal (-90 to 90).
        lat: Option<Decimal> => optional(LATITUDE),
        /// Longitude, as a signed decimal (-180 to 180).
        lng: Option<Decimal> => optional(LONGITUDE),
        /// A brief description of the project.
        project_description: Option<String> => optional(FieldKind::TEXT),
        /// Path or URL to the project image or rendering.
        project_image: Option<String> => optional(FieldKind::TEXT),
        /// First name of the person submitting the data.
        data_entry_contact_first_name: Option<String> => optional(FieldKind::TEXT),
        /// Last name of the person submitting the data.
        data_entry_contact_last_name: Option<String> => optional(FieldKind::TEXT),
        /// Email address of the person submitting the data.
        data_entry_contact_email: Option<String> => optional(FieldKind::TEXT),
        /// Local or state building code, or IBC/IRC version if no local code exists.
        governing_code: Option<String> => optional(FieldKind::TEXT),
        /// Whether the project data has been anonymized.
        project_data_anonymized: Option<bool> => optional(FieldKind::Bool),
        /// Third-party certifications or commitment programs the project is pursuing.
        project_certifications_commitments: Option<Vec<Certification>> =>
            optional(FieldKind::ChoiceList(&Certification::DOMAIN)),
    }
}

record! {
    /// Owner and design-team organizations.
    pub struct ProjectTeam {
        /// First name of the owner contact.
        project_owner_contact_first_name: Option<String> => optional(FieldKind::TEXT),
        /// Last name of the owner contact.
        project_owner_contact_last_name: Option<String> => optional(FieldKind::TEXT),
        /// Name of the owner's organization or company.
        owner_organization: Option<String> => optional(FieldKind::TEXT),
        /// Web domain of the owner.
        owner_web_domain: Option<String> => optional(FieldKind::TEXT),
        /// Country of the owner headquarters (ISO 3166 Alpha-3).
        owner_country: Option<String> => optional(FieldKind::TEXT),
        /// Email address of the owner or primary contact.
        owner_email: Option<String> => optional(FieldKind::TEXT),
        /// Type of owner.
        owner_type: Option<OwnerType> => optional(FieldKind::Choice(&OwnerType::DOMAIN)),
        /// Owner's representative organization.
        owners_representative: Option<String> => optional(FieldKind::TEXT),
        /// Architect of Record organization.
        architect_of_record: Option<String> => optional(FieldKind::TEXT),
        /// Studio or office within the firm organization.
        org_office: Option<String> => optional(FieldKind::TEXT),
        /// General contractor organization.
        general_contractor: Option<String> => optional(FieldKind::TEXT),
        /// MEP engineer of record organization.
        mep_engineer: Option<String> => optional(FieldKind::TEXT),
        /// Green building consultant organization.
        sustainability_consultant: Option<String> => optional(FieldKind::TEXT),
        /// Structural engineer organization.
        structural_engineer: Option<String> => optional(FieldKind::TEXT),
        /// Civil engineer organization.
        civil_engineer: Option<String> => optional(FieldKind::TEXT),
        /// Landscape consultant organization.
        landscape_consultant: Option<String> => optional(FieldKind::TEXT),
        /// Interior designer organization.
        interior_designer: Option<String> => optional(FieldKind::TEXT),
        /// Other project stakeholder organization.
        other_project_team: Option<String> => optional(FieldKind::TEXT),
    }
}

record! {
    /// Construction dates and delivery status.
    pub struct ProjectSchedule {
        /// Expected or actual construction end date (yyyy-mm-dd).
        project_construction_date_completion: Option<NaiveDate> => optional(FieldKind::Date),
        /// Project status at time of data submission.
        project_status: Option<ProjectStatus> => optional(FieldKind::Choice(&ProjectStatus::DOMAIN)),
        /// Anticipated construction start date (yyyy-mm-dd).
        project_construction_date_start: Option<NaiveDate> => optional(FieldKind::Date),
        /// Date or year the original asset was constructed, for existing buildings.
        project_construction_date_existing_building: Option<ConstructionDate> =>
            optional(EXISTING_BUILDING_YEAR),
    }
}

record! {
    pub struct BuildingOccupancy {
        /// Number of people permitted to occupy the asset.
        occupant_load: Option<i64> => optional(COUNT),
        /// Full-time equivalent regular occupants (total occupant hours / 8).
        full_time_equivalent: Option<Decimal> => optional(POSITIVE),
        /// Number of residential units, if a residential asset.
        residential_units: Option<i64> => optional(COUNT),
        /// Anticipated start of occupancy (yyyy-mm-dd).
        anticipated_start_building_occupancy: Option<NaiveDate> => optional(FieldKind::Date),
        /// Number of bedrooms; studios count 0.5, one bedroom plus den 1.5.
        bedroom_count: Option<f64> => optional(FieldKind::FLOAT),
    }
}

record! {
    /// Asset classification, use and construction type.
    ///
    /// A building must state its use type.
    pub struct ProjectUseConstruction {
        /// Asset type.
        asset_type: AssetType => required(FieldKind::Choice(&AssetType::DOMAIN)),
        /// Building construction type. Optional even for buildings; only the
        /// use type is conditionally required.
        building_construction_type: Option<BuildingConstructionType> =>
            optional(FieldKind::Choice(&BuildingConstructionType::DOMAIN)),
        /// Building use type. Required when the asset is a building.
        building_use_type: Option<UseType> => optional(FieldKind::Choice(&UseType::DOMAIN)),
        /// Infrastructure construction type. Optional for every asset type.
        infrastructure_construction_type: Option<InfrastructureConstructionType> =>
            optional(FieldKind::Choice(&InfrastructureConstructionType::DOMAIN)),
        /// Infrastructure sector type.
        infrastructure_sector_type: Option<SectorType> =>
            optional(FieldKind::Choice(&SectorType::DOMAIN)),
        /// Infrastructure use types; more than one may apply.
        infrastructure_use_type: Option<Vec<InfrastructureUseType>> =>
            optional(FieldKind::ChoiceList(&InfrastructureUseType::DOMAIN)),
        /// Energy code used.
        energy_code: Option<EnergyCode> => optional(FieldKind::Choice(&EnergyCode::DOMAIN)),
        /// OmniClass Table 11 construction entity by function.
        omniclass_table_11_construction_entity: Option<String> => optional(FieldKind::TEXT),
        /// Construction type per IBC.
        ibc_construction_type = "IBC_Construction_Type": Option<Vec<IbcConstructionType>> =>
            optional(FieldKind::ChoiceList(&IbcConstructionType::DOMAIN)),
        /// Type of area surrounding the asset.
        project_surroundings: Option<ProjectSurroundings> =>
            optional(FieldKind::Choice(&ProjectSurroundings::DOMAIN)),
        /// Whether the lot is a greenfield or brownfield site.
        development_site_type: Option<DevelopmentSite> =>
            optional(FieldKind::Choice(&DevelopmentSite::DOMAIN)),
        /// Whether the asset is of historical or cultural value.
        project_historic: Option<HistoricValue> =>
            optional(FieldKind::Choice(&HistoricValue::DOMAIN)),
    }
    requires [RequiredWhen {
        field: "building_use_type",
        when_field: "asset_type",
        equals: "Building",
    }]
}

record! {
    /// Areas, heights and envelope geometry.
    ///
    /// Areas are strictly positive with at most two decimal places.
    /// `gross_floor_area` is optional here; buildings must report it, which
    /// the composite records enforce once every section is valid.
    pub struct ProjectSize {
        /// Units the project was entered in. Has no effect on stored values.
        project_units: UnitSystem => required(FieldKind::Choice(&UnitSystem::DOMAIN)),
        /// Method used to calculate the gross floor area.
        gfa_measurement_method: AreaMeasurementMethod =>
            required(FieldKind::Choice(&AreaMeasurementMethod::DOMAIN)),
        /// Gross floor area. Required if the asset is a building.
        gross_floor_area: Option<Decimal> => optional(FieldKind::AREA),
        /// Total area within the legal property boundaries of the site.
        project_site_area: Option<Decimal> => optional(FieldKind::AREA),
        /// Building footprint, excluding hardscape, landscape and other site works.
        building_footprint_area: Option<Decimal> => optional(FieldKind::AREA),
        /// Conditioned floor area.
        conditioned_floor_area: Option<Decimal> => optional(FieldKind::AREA),
        /// Unconditioned floor area.
        unconditioned_floor_area: Option<Decimal> => optional(FieldKind::AREA),
        /// Parking area inside the building shell.
        enclosed_parking_area: Option<Decimal> => optional(FieldKind::AREA),
        /// Parking area not attached to the building shell.
        detached_parking_area: Option<Decimal> => optional(FieldKind::AREA),
        /// Number of stories above grade.
        stories_above_grade: Option<i64> => optional(FieldKind::INTEGER),
        /// Number of stories below grade.
        stories_below_grade: Option<i64> => optional(FieldKind::INTEGER),
        /// Height above finished ground level per ASCE 7-16.
        building_height: Option<Decimal> => optional(MEASURE),
        /// Open, ground-level surface parking area.
        surface_parking_area: Option<f64> => optional(FieldKind::FLOAT),
        /// Area of a standalone parking structure.
        detached_parking_structure_area: Option<f64> => optional(FieldKind::FLOAT),
        /// Number of interstitial floors.
        interstitial_floors: Option<f64> => optional(FieldKind::FLOAT),
        /// Mean roof height.
        mean_roof_height: Option<f64> => optional(FieldKind::FLOAT),
        /// Ratio of window area to gross exterior wall area, in (0, 1].
        window_wall_ratio: Option<Decimal> => optional(RATIO),
        /// Area of the thermal envelope enclosing conditioned space.
        thermal_envelope_area: Option<f64> => optional(FieldKind::FLOAT),
    }
}

record! {
    pub struct ProjectCost {
        /// ISO 4217 alphabetic currency code.
        currency_code: Option<CurrencyCode> => optional(FieldKind::Choice(&CurrencyCode::DOMAIN)),
        /// Total project cost.
        total_cost: Option<f64> => optional(NON_NEGATIVE),
        /// Building materials and total construction cost.
        hard_cost: Option<f64> => optional(FieldKind::FLOAT),
        /// Design fees, overhead and project administration.
        soft_cost: Option<f64> => optional(NON_NEGATIVE),
        /// Estimated cost of siteworks.
        siteworks_cost: Option<f64> => optional(NON_NEGATIVE),
        /// Whether the cost is estimated, bid, or actual.
        cost_source: Option<String> => optional(FieldKind::TEXT),
        /// Additional context on project costs.
        cost_notes: Option<String> => optional(FieldKind::TEXT),
    }
}

record! {
    /// Structural design parameters and systems.
    pub struct StructuralSystems {
        /// Typical column grid spacing in the long direction.
        system_column_grid_long: Option<Decimal> => optional(MEASURE),
        /// Risk category per IBC.
        system_risk_category: Option<RiskCategory> =>
            optional(FieldKind::Choice(&RiskCategory::DOMAIN)),
        /// Code-determined ground snow load.
        system_snow_load: Option<Decimal> => optional(MEASURE),
        /// Code-determined ultimate wind speed per ASCE 7-16.
        system_wind_speed_asce7: Option<Decimal> => optional(MEASURE),
        /// Earthquake importance factor per NBC 2020 table 4.1.8.5.
        earthquake_importance_factor: Option<EarthquakeImportanceFactor> =>
            optional(FieldKind::Choice(&EarthquakeImportanceFactor::DOMAIN)),
        /// Seismic design category per IBC.
        seismic_design_category_ibc: Option<SeismicDesignCategory> =>
            optional(FieldKind::Choice(&SeismicDesignCategory::DOMAIN)),
        /// Primary horizontal gravity system.
        primary_horizontal_gravity_system: Option<HorizontalGravitySystem> =>
            optional(FieldKind::Choice(&HorizontalGravitySystem::DOMAIN)),
        /// Primary vertical gravity system.
        primary_vertical_gravity_system: Option<VerticalGravitySystem> =>
            optional(FieldKind::Choice(&VerticalGravitySystem::DOMAIN)),
        /// Primary lateral system.
        system_lateral_system: Option<LateralSystem> =>
            optional(FieldKind::Choice(&LateralSystem::DOMAIN)),
        /// Allowable soil bearing pressure from the geotechnical engineer.
        system_allowable_soil_bearing_pressure: Option<f64> => optional(NON_NEGATIVE),
        /// Typical foundation type.
        system_foundation_type: Option<FoundationType> =>
            optional(FieldKind::Choice(&FoundationType::DOMAIN)),
        /// Typical floor live load.
        system_live_load: Option<f64> => optional(FieldKind::FLOAT),
        /// Secondary horizontal gravity system.
        secondary_horizontal_gravity_system: Option<HorizontalGravitySystem> =>
            optional(FieldKind::Choice(&HorizontalGravitySystem::DOMAIN)),
        /// Secondary vertical gravity system.
        secondary_vertical_gravity_system: Option<VerticalGravitySystem> =>
            optional(FieldKind::Choice(&VerticalGravitySystem::DOMAIN)),
        /// Whether the project is podium construction.
        system_podium: Option<SystemPodium> => optional(FieldKind::Choice(&SystemPodium::DOMAIN)),
    }
}

record! {
    /// How and when the life-cycle assessment was performed.
    pub struct LcaInformation {
        /// Report uploaded from the LCA tool.
        tool_report_upload: Option<String> => optional(FieldKind::TEXT),
        /// Year the assessment was completed.
        assessment_year: i32 => required(FieldKind::Integer(Range::closed(1800, 2200))),
        /// Date of assessment.
        assessment_date: Option<NaiveDate> => optional(FieldKind::Date),
        /// Project phase when the assessment was completed.
        project_phase_at_time_of_assessment: ProjectPhase =>
            required(FieldKind::Choice(&ProjectPhase::DOMAIN)),
        /// Tool used to conduct the assessment.
        tool_lca: LcaTool => required(FieldKind::Choice(&LcaTool::DOMAIN)),
        /// Version and type of the LCA tool.
        lca_tool_version_type: Option<String> => optional(FieldKind::TEXT),
        /// Life-cycle stages included in embodied carbon modeling.
        assessment_life_cycle_stages: Option<Vec<LcaStage>> =>
            optional(FieldKind::ChoiceList(&LcaStage::DOMAIN)),
        /// Service life required by the client or regulation, in years.
        required_service_life: Option<i64> => optional(COUNT),
        /// Reference study period, in years.
        reference_study_period: Option<i64> => optional(COUNT),
        /// Main sources of material quantities.
        material_quantity_source: Option<Vec<MaterialQuantitySource>> =>
            optional(FieldKind::ChoiceList(&MaterialQuantitySource::DOMAIN)),
        /// Filename of the LCA results.
        report_name: Option<String> => optional(FieldKind::TEXT),
        /// Filename of additional LCA results.
        additional_lca_report_name: Option<String> => optional(FieldKind::TEXT),
        /// Person who conducted the assessment.
        assessor_name: Option<String> => optional(FieldKind::TEXT),
        /// Email of the person who conducted the assessment.
        assessor_email: Option<String> => optional(FieldKind::TEXT),
        /// Organization of the person who conducted the assessment.
        assessor_organization: Option<String> => optional(FieldKind::TEXT),
        /// Project phase when the assessment was reported.
        project_phase_at_reporting: Option<ProjectPhaseReporting> =>
            optional(FieldKind::Choice(&ProjectPhaseReporting::DOMAIN)),
        /// Which materials and systems each quantity source applies to.
        material_quantity_source_detail: Option<String> => optional(FieldKind::TEXT),
    }
}

record! {
    /// Energy modeling inputs behind operational carbon.
    pub struct OperationalEnergy {
        /// Tool used to perform the energy modeling.
        tool_energy_model: EnergyModel => required(FieldKind::Choice(&EnergyModel::DOMAIN)),
        /// Energy modeling reference standard.
        energy_model_methodology_reference: Option<String> => optional(FieldKind::TEXT),
        /// Version of the energy modeling software.
        energy_model_tool_version: Option<String> => optional(FieldKind::TEXT),
        /// Time horizon of the GWP basis for energy sources.
        gwp_energy_sources_year: Option<GwpEnergySource> =>
            optional(FieldKind::Choice(&GwpEnergySource::DOMAIN)),
        /// Weather station data for the site location.
        site_location_weather_data: Option<String> => optional(FieldKind::TEXT),
        /// Electricity source provider.
        electricity_provider: Option<String> => optional(FieldKind::TEXT),
        /// Type of electricity source.
        electricity_source: Option<ElectricitySource> =>
            optional(FieldKind::Choice(&ElectricitySource::DOMAIN)),
        /// Electricity carbon factor in kg CO2e/MWh.
        electricity_carbon_factor: Option<Decimal> => optional(POSITIVE),
        /// Source of the electricity carbon factor.
        electricity_carbon_factor_source: Option<String> => optional(FieldKind::TEXT),
    }
}

record! {
    /// Assessment purpose, method and uncertainty notes.
    pub struct Uncertainty {
        /// Goal, scope and intended use of the assessment.
        assessment_purpose: Option<String> => optional(FieldKind::TEXT),
        /// Life cycle impact assessment method.
        lcia_method: Option<String> => optional(FieldKind::TEXT),
        /// Contingency or data uncertainty factors applied.
        assessment_uncertainty: Option<String> => optional(FieldKind::TEXT),
        /// Methodology used to conduct the assessment.
        assessment_methodology_description: Option<String> => optional(FieldKind::TEXT),
        /// Cutoff method used, if any.
        assessment_cutoff_method: Option<String> => optional(FieldKind::TEXT),
    }
}

record! {
    pub struct Verification {
        /// Whether the assessment was third-party verified.
        assessment_verified: Option<bool> => optional(FieldKind::Bool),
        /// Conducted per ISO 21931-1:2022.
        iso21931_compliance: Option<bool> => optional(FieldKind::Bool),
        /// Conducted per EN 15978-1.
        en15978_compliance: Option<bool> => optional(FieldKind::Bool),
        /// Conducted per RICS Whole Life Carbon Assessment, 1st edition (2017).
        rics_2017_compliance: Option<bool> => optional(FieldKind::Bool),
        /// Conducted per RICS Whole Life Carbon Assessment, 2nd edition (2023).
        rics_2023_compliance: Option<bool> => optional(FieldKind::Bool),
        /// Conducted per ASHRAE/ICC Standard 240P.
        ashraeicc_240p_compliance: Option<bool> => optional(FieldKind::Bool),
        /// Conducted per the SEI prestandard for structural embodied carbon.
        sei_prestandard_compliance: Option<bool> => optional(FieldKind::Bool),
        /// Name of the third-party verifier.
        assessment_verifier: Option<String> => optional(FieldKind::TEXT),
        /// Period for which the assessment is valid, in years.
        assessment_validity_period: Option<f64> => optional(FieldKind::FLOAT),
        /// How results and material quantities were validated.
        results_validation_description: Option<String> => optional(FieldKind::TEXT),
    }
}

record! {
    /// Physical and accounting scope of the assessment.
    ///
    /// Every `*_included` flag is required; the matching scope lists are
    /// optional detail.
    pub struct Inclusions {
        /// Is operational energy use reported?
        operational_energy_included: bool => required(FieldKind::Bool),
        /// Does the assessment include biogenic carbon storage?
        biogenic_carbon_storage_included: bool => required(FieldKind::Bool),
        /// Method used to calculate biogenic carbon.
        biogenic_carbon_accounting_method: Option<BiogenicCarbonAccounting> =>
            optional(FieldKind::Choice(&BiogenicCarbonAccounting::DOMAIN)),
        /// Sourcing certifications for bio-based and forestry products.
        bio_sustainability_certification: Option<Vec<BiogenicCertification>> =>
            optional(FieldKind::ChoiceList(&BiogenicCertification::DOMAIN)),
        /// Bio-based materials used in the project.
        biogenic_carbon_description: Option<String> => optional(FieldKind::TEXT),
        /// Does the assessment include refrigerant impacts?
        project_refrigerants: bool => required(FieldKind::Bool),
        /// Is the substructure scope included?
        substructure_included: bool => required(FieldKind::Bool),
        /// Substructure components included.
        substructure_scope: Option<Vec<SubstructureScope>> =>
            optional(FieldKind::ChoiceList(&SubstructureScope::DOMAIN)),
        /// Is the shell superstructure scope included?
        shell_superstructure_included: bool => required(FieldKind::Bool),
        /// Superstructure components included.
        shell_superstructure_scope: Option<Vec<ShellSuperstructureScope>> =>
            optional(FieldKind::ChoiceList(&ShellSuperstructureScope::DOMAIN)),
        /// Is the shell exterior enclosure scope included?
        shell_exterior_enclosure_included: bool => required(FieldKind::Bool),
        /// Exterior enclosure components included.
        shell_exterior_enclosure_scope: Option<Vec<ShellExteriorScope>> =>
            optional(FieldKind::ChoiceList(&ShellExteriorScope::DOMAIN)),
        /// Is the interior construction scope included?
        interior_construction_included: bool => required(FieldKind::Bool),
        /// Interior construction components included.
        interior_construction_scope: Option<Vec<InteriorConstructionScope>> =>
            optional(FieldKind::ChoiceList(&InteriorConstructionScope::DOMAIN)),
        /// Is the interior finishes scope included?
        interiors_finishes_included: bool => required(FieldKind::Bool),
        /// Interior finishes components included.
        interior_finishes_scope: Option<Vec<InteriorFinishesScope>> =>
            optional(FieldKind::ChoiceList(&InteriorFinishesScope::DOMAIN)),
        /// Is the services (MEP) scope included?
        services_mep_included: bool => required(FieldKind::Bool),
        /// Mechanical components included.
        services_mechanical_scope: Option<Vec<ServicesMechanicalScope>> =>
            optional(FieldKind::ChoiceList(&ServicesMechanicalScope::DOMAIN)),
        /// Electrical components included.
        services_electrical_scope: Option<Vec<ServicesElectricalScope>> =>
            optional(FieldKind::ChoiceList(&ServicesElectricalScope::DOMAIN)),
        /// Plumbing and fire protection components included.
        services_plumbing_scope: Option<Vec<ServicesPlumbingScope>> =>
            optional(FieldKind::ChoiceList(&ServicesPlumbingScope::DOMAIN)),
        /// Is the sitework scope included?
        sitework_included: bool => required(FieldKind::Bool),
        /// Sitework components included.
        sitework_scope: Option<Vec<SiteworkScope>> =>
            optional(FieldKind::ChoiceList(&SiteworkScope::DOMAIN)),
        /// Is equipment included?
        equipment_included: bool => required(FieldKind::Bool),
        /// Equipment components included.
        equipment_scope: Option<Vec<EquipmentScope>> =>
            optional(FieldKind::ChoiceList(&EquipmentScope::DOMAIN)),
        /// Are furnishings included?
        furnishings_included: bool => required(FieldKind::Bool),
        /// Furnishing components included.
        furnishings_scope: Option<Vec<FurnishingScope>> =>
            optional(FieldKind::ChoiceList(&FurnishingScope::DOMAIN)),
        /// Are infrastructure components included?
        infrastructure_components_included: Option<bool> => optional(FieldKind::Bool),
        /// Refrigerants used on the project and included in the assessment.
        refrigerant_type_included: Option<Vec<RefrigerantType>> =>
            optional(FieldKind::ChoiceList(&RefrigerantType::DOMAIN)),
        /// Does the assessment include fossil gas leakage?
        fossil_gas_leakage: Option<bool> => optional(FieldKind::Bool),
        /// GWP or other LCA requirements the project must meet.
        lca_requirements: Option<String> => optional(FieldKind::TEXT),
    }
}

record! {
    pub struct ReductionStrategies {
        /// Total GWP of the baseline model, if one was assessed.
        reduction_baseline: Option<String> => optional(FieldKind::TEXT),
        /// Percent reduction from the baseline.
        reduction_percentage_from_reference: Option<f64> => optional(FieldKind::FLOAT),
        /// Reduction strategies pursued.
        reduction_description: Option<String> => optional(FieldKind::TEXT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{Record, ViolationKind};
    use serde_json::json;

    fn project_information() -> serde_json::Value {
        json!({
            "project_name": "Harbour Library",
            "date_of_creation": "2024-01-15",
            "date_of_update": "2024-02-01",
            "date_of_submission": "2024-02-10",
            "project_country": "CAN",
            "project_postal_code": "V6B",
        })
    }

    #[test]
    fn test_project_information_minimal() {
        let info = ProjectInformation::from_value(&project_information()).unwrap();
        assert_eq!(info.project_name, "Harbour Library");
        assert_eq!(info.date_of_creation, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert!(info.lat.is_none());
    }

    #[test]
    fn test_latitude_boundaries() {
        for (lat, ok) in [(90.0, true), (-90.0, true), (90.0001, false), (-90.0001, false)] {
            let mut payload = project_information();
            payload["lat"] = json!(lat);
            let result = ProjectInformation::from_value(&payload);
            assert_eq!(result.is_ok(), ok, "lat = {lat}");
            if let Err(err) = result {
                assert_eq!(err.paths(), vec!["lat"]);
            }
        }
    }

    #[test]
    fn test_three_violations_reported_together() {
        let mut payload = project_information();
        payload["project_name"] = json!("");
        payload["project_country"] = json!("CA");
        payload["lng"] = json!(181);
        let err = ProjectInformation::from_value(&payload).unwrap_err();
        assert_eq!(err.violations.len(), 3);
        assert_eq!(err.paths(), vec!["project_name", "project_country", "lng"]);
    }

    #[test]
    fn test_missing_required_fields_each_reported() {
        let err = ProjectInformation::from_value(&json!({})).unwrap_err();
        let required: Vec<_> = ProjectInformation::SPEC.required_names().collect();
        assert_eq!(err.paths(), required);
    }

    #[test]
    fn test_building_requires_use_type() {
        let err = ProjectUseConstruction::from_value(&json!({"asset_type": "Building"}))
            .unwrap_err();
        assert_eq!(err.paths(), vec!["building_use_type"]);
        assert!(err.all_of_kind(ViolationKind::Invariant));

        let ok = ProjectUseConstruction::from_value(&json!({
            "asset_type": "Building",
            "building_use_type": "Commercial Office",
        }))
        .unwrap();
        assert_eq!(ok.building_use_type, Some(UseType::CommercialOffice));
        assert!(ok.building_construction_type.is_none());
        assert!(ok.infrastructure_construction_type.is_none());

        let infra = ProjectUseConstruction::from_value(&json!({"asset_type": "Infrastructure"}))
            .unwrap();
        assert!(infra.infrastructure_construction_type.is_none());
    }

    #[test]
    fn test_enum_failure_names_field() {
        let err = ProjectUseConstruction::from_value(&json!({"asset_type": "Spaceship"}))
            .unwrap_err();
        assert_eq!(err.paths(), vec!["asset_type"]);
        assert!(err.to_string().contains("asset_type"));
    }

    #[test]
    fn test_ibc_construction_type_keeps_payload_name() {
        let use_construction = ProjectUseConstruction::from_value(&json!({
            "asset_type": "Landscape",
            "IBC_Construction_Type": ["I-A"],
        }))
        .unwrap();
        assert!(use_construction.field("IBC_Construction_Type").is_some());
        assert!(ProjectUseConstruction::SPEC.field("IBC_Construction_Type").is_some());
    }

    #[test]
    fn test_window_wall_ratio_boundaries() {
        let base = json!({
            "project_units": "International Units System (SI)",
            "gfa_measurement_method": "ASHRAE/LEED",
        });
        for (ratio, ok) in [(json!(1), true), (json!(0.35), true), (json!(0), false), (json!(1.0001), false)] {
            let mut payload = base.clone();
            payload["window_wall_ratio"] = ratio.clone();
            assert_eq!(ProjectSize::from_value(&payload).is_ok(), ok, "ratio = {ratio}");
        }
    }

    #[test]
    fn test_area_precision() {
        let mut payload = json!({
            "project_units": "International Units System (SI)",
            "gfa_measurement_method": "Other",
            "gross_floor_area": 1250.75,
        });
        let size = ProjectSize::from_value(&payload).unwrap();
        assert_eq!(size.gross_floor_area.map(|d| d.to_string()), Some("1250.75".to_string()));

        payload["gross_floor_area"] = json!(1250.755);
        assert!(ProjectSize::from_value(&payload).is_err());
        payload["gross_floor_area"] = json!(-3);
        assert!(ProjectSize::from_value(&payload).is_err());
    }

    #[test]
    fn test_existing_building_date_or_year() {
        let by_year = ProjectSchedule::from_value(&json!({
            "project_construction_date_existing_building": 1962,
        }))
        .unwrap();
        assert_eq!(
            by_year.project_construction_date_existing_building,
            Some(ConstructionDate::Year(1962))
        );
        assert!(ProjectSchedule::from_value(&json!({
            "project_construction_date_existing_building": "1962-05-01",
        }))
        .is_ok());
        assert!(ProjectSchedule::from_value(&json!({
            "project_construction_date_existing_building": 2101,
        }))
        .is_err());
    }

    #[test]
    fn test_assessment_year_bounds() {
        let base = json!({
            "assessment_year": 1800,
            "project_phase_at_time_of_assessment": "Concept",
            "tool_lca": "Tally",
        });
        assert!(LcaInformation::from_value(&base).is_ok());
        let mut late = base.clone();
        late["assessment_year"] = json!(2201);
        assert_eq!(LcaInformation::from_value(&late).unwrap_err().paths(), vec!["assessment_year"]);
    }

    #[test]
    fn test_inclusions_require_every_flag() {
        let err = Inclusions::from_value(&json!({"operational_energy_included": true})).unwrap_err();
        assert_eq!(err.violations.len(), 11);
    }

    #[test]
    fn test_reduction_description_retained() {
        let strategies = ReductionStrategies::from_value(&json!({
            "reduction_percentage_from_reference": 12.0,
            "reduction_description": "Mass timber substitution",
        }))
        .unwrap();
        assert_eq!(
            strategies.reduction_description.as_deref(),
            Some("Mass timber substitution")
        );
        assert_eq!(
            strategies.field("reduction_description"),
            Some(json!("Mass timber substitution"))
        );
    }

    #[test]
    fn test_all_optional_sections_accept_empty_object() {
        assert!(ProjectTeam::from_value(&json!({})).is_ok());
        assert!(ProjectSchedule::from_value(&json!({})).is_ok());
        assert!(BuildingOccupancy::from_value(&json!({})).is_ok());
        assert!(ProjectCost::from_value(&json!({})).is_ok());
        assert!(StructuralSystems::from_value(&json!({})).is_ok());
        assert!(Uncertainty::from_value(&json!({})).is_ok());
        assert!(Verification::from_value(&json!({})).is_ok());
        assert!(ReductionStrategies::from_value(&json!({})).is_ok());
    }

    #[test]
    fn test_non_object_is_shape_mismatch() {
        let err = ProjectTeam::from_value(&json!([1, 2])).unwrap_err();
        assert!(err.all_of_kind(ViolationKind::ShapeMismatch));
    }

    #[test]
    fn test_revalidate_is_idempotent() {
        let occupancy = BuildingOccupancy::from_value(&json!({
            "occupant_load": 120,
            "full_time_equivalent": 42.5,
            "anticipated_start_building_occupancy": "2026-09-01",
        }))
        .unwrap();
        assert_eq!(occupancy.revalidate().unwrap(), occupancy);
    }
}
