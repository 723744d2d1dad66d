//! # Impact Results
//!
//! GWP vectors, the life-cycle-stage record that holds one vector per
//! EN 15978 module, and the LCA results section that reports them per
//! building category.
//!
//! An indicator that is absent was not reported. That is distinct from a
//! reported zero and the two never collapse into each other.

use echo_core::constraint::{FieldKind, Range};
use echo_core::registry::{EndUse, FuelType, WaterType};

use crate::validate::Record;

const NON_NEGATIVE: FieldKind = FieldKind::Float(Range::NON_NEGATIVE);

record! {
    /// Environmental indicator totals for one stage or scope.
    pub struct GwpVector {
        /// Total GWP in kg CO2e.
        gwp_total = "GWP_total": f64 => required(FieldKind::FLOAT),
        /// Fossil GWP in kg CO2e.
        gwp_fossil = "GWP_fossil": Option<f64> => optional(FieldKind::FLOAT),
        /// Land use and land use change GWP in kg CO2e.
        gwp_luluc = "GWP_luluc": Option<f64> => optional(FieldKind::FLOAT),
        /// Biogenic GWP in kg CO2e.
        gwp_bio_total = "GWP_bio_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Biogenic emissions in kg CO2e.
        gwp_bio_emissions = "GWP_bio_emissions": Option<f64> => optional(FieldKind::FLOAT),
        /// Biogenic storage in kg CO2e.
        gwp_bio_storage = "GWP_bio_storage": Option<f64> => optional(FieldKind::FLOAT),
        /// Acidification potential in kg SO2e.
        ap_total = "AP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Eutrophication potential in kg PO4e.
        ep_total = "EP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Ozone depletion potential in kg CFC-11e.
        odp_total = "ODP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Photochemical ozone creation potential in kg C2H4e.
        pocp_total = "POCP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Abiotic depletion potential in kg Sbe.
        adp_total = "ADP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Cumulative energy demand in MJ.
        ced_total = "CED_total": Option<f64> => optional(FieldKind::FLOAT),
    }
}

record! {
    /// Energy use of one fuel.
    pub struct FuelTypeQuantity {
        /// Fuel type.
        fuel_type: FuelType => required(FieldKind::Choice(&FuelType::DOMAIN)),
        /// Predicted annual energy use in kBTU.
        value: f64 => required(NON_NEGATIVE),
        /// Carbon factor applied to this fuel.
        carbon_factor: Option<f64> => optional(NON_NEGATIVE),
    }
}

record! {
    /// Energy use of one end use.
    pub struct EndUseQuantity {
        /// End use.
        end_use: EndUse => required(FieldKind::Choice(&EndUse::DOMAIN)),
        /// Predicted annual energy use in kBTU.
        value: f64 => required(NON_NEGATIVE),
        /// Carbon factor applied to this end use.
        carbon_factor: Option<f64> => optional(NON_NEGATIVE),
    }
}

record! {
    /// Consumption of one water or wastewater type.
    pub struct WaterTypeQuantity {
        /// Water or wastewater type.
        water_type: WaterType => required(FieldKind::Choice(&WaterType::DOMAIN)),
        /// Consumption in m3/year.
        consumption: Option<f64> => optional(NON_NEGATIVE),
    }
}

record! {
    /// Module B6, operational energy use. Every field is optional.
    pub struct OperationalEnergyImpacts {
        /// Predicted net energy use in kBTU.
        energy_use_predicted_net: Option<f64> => optional(FieldKind::FLOAT),
        /// Predicted gross energy use in kBTU.
        energy_use_predicted_gross: Option<f64> => optional(FieldKind::FLOAT),
        /// Associated end use.
        energy_end_use: Option<String> => optional(FieldKind::TEXT),
        /// Associated fuel type.
        fuel_type: Option<String> => optional(FieldKind::TEXT),
        /// Energy use broken down by fuel.
        fuel_types: Option<Vec<FuelTypeQuantity>> =>
            optional(FieldKind::RecordList(&FuelTypeQuantity::SPEC)),
        /// Energy use broken down by end use.
        energy_end_uses: Option<Vec<EndUseQuantity>> =>
            optional(FieldKind::RecordList(&EndUseQuantity::SPEC)),
        /// Total GWP in kg CO2e.
        gwp_total = "GWP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Fossil GWP in kg CO2e.
        gwp_fossil = "GWP_fossil": Option<f64> => optional(FieldKind::FLOAT),
        /// Land use and land use change GWP in kg CO2e.
        gwp_luluc = "GWP_luluc": Option<f64> => optional(FieldKind::FLOAT),
        /// Biogenic GWP in kg CO2e.
        gwp_bio_total = "GWP_bio_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Biogenic emissions in kg CO2e.
        gwp_bio_emissions = "GWP_bio_emissions": Option<f64> => optional(FieldKind::FLOAT),
        /// Biogenic storage in kg CO2e.
        gwp_bio_storage = "GWP_bio_storage": Option<f64> => optional(FieldKind::FLOAT),
        /// Acidification potential in kg SO2e.
        ap_total = "AP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Eutrophication potential in kg PO4e.
        ep_total = "EP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Ozone depletion potential in kg CFC-11e.
        odp_total = "ODP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Photochemical ozone creation potential in kg C2H4e.
        pocp_total = "POCP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Abiotic depletion potential in kg Sbe.
        adp_total = "ADP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Cumulative energy demand in MJ.
        ced_total = "CED_total": Option<f64> => optional(FieldKind::FLOAT),
    }
}

record! {
    /// Module B7, operational water use. Every field is optional.
    pub struct OperationalWaterImpacts {
        /// Name of the water source provider.
        water_source_provider: Option<String> => optional(FieldKind::TEXT),
        /// Type of water or wastewater.
        water_type: Option<String> => optional(FieldKind::TEXT),
        /// Water consumption in m3/year.
        water_consumption: Option<f64> => optional(FieldKind::FLOAT),
        /// Consumption broken down by water type.
        water_types: Option<Vec<WaterTypeQuantity>> =>
            optional(FieldKind::RecordList(&WaterTypeQuantity::SPEC)),
        /// Total GWP in kg CO2e.
        gwp_total = "GWP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Fossil GWP in kg CO2e.
        gwp_fossil = "GWP_fossil": Option<f64> => optional(FieldKind::FLOAT),
        /// Land use and land use change GWP in kg CO2e.
        gwp_luluc = "GWP_luluc": Option<f64> => optional(FieldKind::FLOAT),
        /// Biogenic GWP in kg CO2e.
        gwp_bio_total = "GWP_bio_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Biogenic emissions in kg CO2e.
        gwp_bio_emissions = "GWP_bio_emissions": Option<f64> => optional(FieldKind::FLOAT),
        /// Biogenic storage in kg CO2e.
        gwp_bio_storage = "GWP_bio_storage": Option<f64> => optional(FieldKind::FLOAT),
        /// Acidification potential in kg SO2e.
        ap_total = "AP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Eutrophication potential in kg PO4e.
        ep_total = "EP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Ozone depletion potential in kg CFC-11e.
        odp_total = "ODP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Photochemical ozone creation potential in kg C2H4e.
        pocp_total = "POCP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Abiotic depletion potential in kg Sbe.
        adp_total = "ADP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Cumulative energy demand in MJ.
        ced_total = "CED_total": Option<f64> => optional(FieldKind::FLOAT),
    }
}

const STAGE: FieldKind = FieldKind::Record(&GwpVector::SPEC);

record! {
    /// One GWP vector per EN 15978 life-cycle module. Only the product
    /// stage (A1-A3) is mandatory.
    pub struct LifeCycleStages {
        /// A1-A3 product stage.
        a1_a3 = "A1_A3": GwpVector => required(STAGE),
        /// A4 transportation.
        a4 = "A4": Option<GwpVector> => optional(STAGE),
        /// A5 construction installation process.
        a5_total = "A5_total": Option<GwpVector> => optional(STAGE),
        /// A5.1 pre-construction demolition.
        a5p1 = "A5p1": Option<GwpVector> => optional(STAGE),
        /// A5.2 construction activities.
        a5p2 = "A5p2": Option<GwpVector> => optional(STAGE),
        /// A5.3 waste and waste management.
        a5p3 = "A5p3": Option<GwpVector> => optional(STAGE),
        /// A5.4 worker transport.
        a5p4 = "A5p4": Option<GwpVector> => optional(STAGE),
        /// B1 use stage.
        b1_total = "B1_total": Option<GwpVector> => optional(STAGE),
        /// B1.1 material emissions and uptake.
        b1p1 = "B1p1": Option<GwpVector> => optional(STAGE),
        /// B1.2 fugitive emissions.
        b1p2 = "B1p2": Option<GwpVector> => optional(STAGE),
        /// B2 maintenance.
        b2 = "B2": Option<GwpVector> => optional(STAGE),
        /// B3 repair.
        b3 = "B3": Option<GwpVector> => optional(STAGE),
        /// B4 replacement.
        b4 = "B4": Option<GwpVector> => optional(STAGE),
        /// B5 refurbishment.
        b5 = "B5": Option<GwpVector> => optional(STAGE),
        /// B6 operational energy.
        b6 = "B6": Option<OperationalEnergyImpacts> =>
            optional(FieldKind::Record(&OperationalEnergyImpacts::SPEC)),
        /// B7 operational water use.
        b7 = "B7": Option<OperationalWaterImpacts> =>
            optional(FieldKind::Record(&OperationalWaterImpacts::SPEC)),
        /// B8 other operational processes.
        b8 = "B8": Option<GwpVector> => optional(STAGE),
        /// C1 deconstruction.
        c1 = "C1": Option<GwpVector> => optional(STAGE),
        /// C2 end-of-life transport.
        c2 = "C2": Option<GwpVector> => optional(STAGE),
        /// C3 waste processing for recovery.
        c3 = "C3": Option<GwpVector> => optional(STAGE),
        /// C4 end-of-life disposal.
        c4 = "C4": Option<GwpVector> => optional(STAGE),
        /// D benefits and loads beyond the system boundary.
        d_total = "D_total": Option<GwpVector> => optional(STAGE),
        /// D1 substitution from reused products, recycled materials and recovered energy.
        d1 = "D1": Option<GwpVector> => optional(STAGE),
        /// D2 recovered and exported energy.
        d2 = "D2": Option<GwpVector> => optional(STAGE),
    }
}

const CATEGORY: FieldKind = FieldKind::Record(&LifeCycleStages::SPEC);

record! {
    /// Whole-project results plus optional per-category stage breakdowns.
    pub struct LcaResults {
        /// Total project GWP in kg CO2e.
        gwp_total = "GWP_total": f64 => required(FieldKind::FLOAT),
        /// Fossil GWP in kg CO2e.
        gwp_fossil = "GWP_fossil": Option<f64> => optional(FieldKind::FLOAT),
        /// Land use and land use change GWP in kg CO2e.
        gwp_luluc = "GWP_luluc": Option<f64> => optional(FieldKind::FLOAT),
        /// Biogenic GWP in kg CO2e.
        gwp_bio_total = "GWP_bio_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Biogenic emissions in kg CO2e.
        gwp_bio_emissions = "GWP_bio_emissions": Option<f64> => optional(FieldKind::FLOAT),
        /// Biogenic storage in kg CO2e.
        gwp_bio_storage = "GWP_bio_storage": Option<f64> => optional(FieldKind::FLOAT),
        /// Acidification potential in kg SO2e.
        ap_total = "AP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Eutrophication potential in kg PO4e.
        ep_total = "EP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Ozone depletion potential in kg CFC-11e.
        odp_total = "ODP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Photochemical ozone creation potential in kg C2H4e.
        pocp_total = "POCP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Abiotic depletion potential in kg Sbe.
        adp_total = "ADP_total": Option<f64> => optional(FieldKind::FLOAT),
        /// Cumulative energy demand in MJ.
        ced_total = "CED_total": Option<f64> => optional(FieldKind::FLOAT),
        /// GWP intensity per gross floor area, in kg CO2e/m2.
        gwp_intensity_per_building_area = "GWP_intensity_per_building_area": Option<f64> =>
            optional(FieldKind::FLOAT),
        /// GWP of the whole site area, in kg CO2e.
        gwp_total_site_area = "GWP_total_site_area": Option<f64> => optional(FieldKind::FLOAT),
        /// GWP intensity per site area, in kg CO2e/m2.
        gwp_intensity_per_site_area = "GWP_intensity_per_site_area": Option<f64> =>
            optional(FieldKind::FLOAT),
        /// Substructure results.
        substructure: Option<LifeCycleStages> => optional(CATEGORY),
        /// Shell superstructure results.
        shell_superstructure: Option<LifeCycleStages> => optional(CATEGORY),
        /// Shell exterior enclosure results.
        shell_exterior_enclosure: Option<LifeCycleStages> => optional(CATEGORY),
        /// Interior construction results.
        interior_construction: Option<LifeCycleStages> => optional(CATEGORY),
        /// Interior finishes results.
        interior_finishes: Option<LifeCycleStages> => optional(CATEGORY),
        /// Services (MEP) results.
        services_mep: Option<LifeCycleStages> => optional(CATEGORY),
        /// Sitework results.
        sitework: Option<LifeCycleStages> => optional(CATEGORY),
        /// Equipment results.
        equipment: Option<LifeCycleStages> => optional(CATEGORY),
        /// Furnishings results.
        furnishings: Option<LifeCycleStages> => optional(CATEGORY),
    }
}

impl LcaResults {
    /// Reported category breakdowns, by payload name, in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = (&'static str, &LifeCycleStages)> {
        [
            ("substructure", &self.substructure),
            ("shell_superstructure", &self.shell_superstructure),
            ("shell_exterior_enclosure", &self.shell_exterior_enclosure),
            ("interior_construction", &self.interior_construction),
            ("interior_finishes", &self.interior_finishes),
            ("services_mep", &self.services_mep),
            ("sitework", &self.sitework),
            ("equipment", &self.equipment),
            ("furnishings", &self.furnishings),
        ]
        .into_iter()
        .filter_map(|(name, stages)| stages.as_ref().map(|s| (name, s)))
    }
}
