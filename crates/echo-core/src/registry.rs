//! # Enumeration Registry: Closed Value Domains
//!
//! Every categorical field in an ECHO record draws its value from one of the
//! domains defined here. Each domain is a Rust enum whose serde
//! representation is the exact literal that appears in payloads, so a
//! deserialized value can never fall outside its domain.
//!
//! ## Invariants
//!
//! - A domain is fixed at build time and shared read-only for the whole
//!   program lifetime. There is no registration at runtime.
//! - `as_str()`, `FromStr`, serde and [`Domain::values`] all agree on the
//!   literal for every variant; they are generated from one declaration.
//! - Literals are unique within a domain.
//!
//! Field constraints reference a domain through its [`Domain`] descriptor
//! (`AssetType::DOMAIN`), which is what the validator tests membership
//! against before the typed enum is materialized.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EchoError;

/// Descriptor of one closed set of permitted literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    /// Name of the domain, matching its Rust enum.
    pub name: &'static str,
    /// Every permitted literal, in declaration order.
    pub values: &'static [&'static str],
}

impl Domain {
    /// Returns true if `value` is one of the permitted literals.
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }

    /// Number of permitted literals.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the domain admits no value at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Declares a domain enum together with its literal table.
macro_rules! registry {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[doc = $value]
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every permitted literal, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            /// Domain descriptor used by field constraints.
            pub const DOMAIN: Domain = Domain {
                name: stringify!($name),
                values: Self::VALUES,
            };

            /// Returns every variant in declaration order.
            pub fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            /// Returns the payload literal for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = EchoError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    other => Err(EchoError::UnknownValue {
                        domain: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Project information
// ---------------------------------------------------------------------------

registry! {
    /// Climate zone per IECC.
    ClimateZone {
        Zone0A => "0A",
        Zone0B => "0B",
        Zone1A => "1A",
        Zone1B => "1B",
        Zone2A => "2A",
        Zone2B => "2B",
        Zone3A => "3A",
        Zone3B => "3B",
        Zone3C => "3C",
        Zone4A => "4A",
        Zone4B => "4B",
        Zone4C => "4C",
        Zone5A => "5A",
        Zone5B => "5B",
        Zone5C => "5C",
        Zone6A => "6A",
        Zone6B => "6B",
        Zone7 => "7",
        Zone8 => "8",
    }
}

registry! {
    /// Third-party certifications or commitment programs a project pursues.
    Certification {
        Leed => "LEED",
        Breeam => "BREEAM",
        LivingBuildingChallenge => "Living Building Challenge",
        Well => "WELL",
        GreenGlobes => "Green Globes",
        IlfiZeroCarbon => "ILFI Zero Carbon",
        PassiveHouse => "Passive House",
        Envision => "Envision",
        Sites => "SITES",
        Architecture2030 => "Architecture 2030 Challenge",
        Se2050 => "SE 2050",
        Mep2040 => "MEP 2040",
        Aia2030Commitment => "AIA 2030 Commitment",
        NoneSelected => "None",
        Other => "Other",
    }
}

// ---------------------------------------------------------------------------
// Team and schedule
// ---------------------------------------------------------------------------

registry! {
    /// Type of asset owner.
    OwnerType {
        Government => "Government",
        Corporate => "Corporate",
        NonProfit => "Non-Profit",
        Institutional => "Institutional",
        PrivateIndividual => "Private Individual",
        Developer => "Developer",
        Other => "Other",
    }
}

registry! {
    /// Project status at time of data submission.
    ProjectStatus {
        Planning => "Planning",
        Design => "Design",
        UnderConstruction => "Under Construction",
        Completed => "Completed",
        Occupied => "Occupied",
        OnHold => "On Hold",
        Cancelled => "Cancelled",
    }
}

// ---------------------------------------------------------------------------
// Use and construction type
// ---------------------------------------------------------------------------

registry! {
    /// Kind of asset the assessment covers.
    AssetType {
        Building => "Building",
        Infrastructure => "Infrastructure",
        Landscape => "Landscape",
        Other => "Other",
    }
}

registry! {
    /// Construction type of a building project.
    BuildingConstructionType {
        NewConstruction => "New Construction",
        MajorRenovation => "Major Renovation",
        MinorRenovation => "Minor Renovation",
        Addition => "Addition",
        CoreAndShell => "Core and Shell",
        TenantImprovement => "Tenant Improvement",
        AdaptiveReuse => "Adaptive Reuse",
        Other => "Other",
    }
}

registry! {
    /// Construction type of an infrastructure project.
    InfrastructureConstructionType {
        NewConstruction => "New Construction",
        Rehabilitation => "Rehabilitation",
        Expansion => "Expansion",
        Maintenance => "Maintenance",
        Demolition => "Demolition",
        Other => "Other",
    }
}

registry! {
    /// Infrastructure sector.
    SectorType {
        Transportation => "Transportation",
        Energy => "Energy",
        Water => "Water",
        Wastewater => "Wastewater",
        Telecommunications => "Telecommunications",
        SolidWaste => "Solid Waste",
        Other => "Other",
    }
}

registry! {
    /// Infrastructure usage type.
    InfrastructureUseType {
        Road => "Road",
        Bridge => "Bridge",
        Tunnel => "Tunnel",
        Rail => "Rail",
        Airport => "Airport",
        Port => "Port",
        Pipeline => "Pipeline",
        PowerGeneration => "Power Generation",
        Transmission => "Transmission",
        Dam => "Dam",
        WaterTreatment => "Water Treatment",
        WastewaterTreatment => "Wastewater Treatment",
        Other => "Other",
    }
}

registry! {
    /// Building usage type.
    UseType {
        CommercialOffice => "Commercial Office",
        Retail => "Retail",
        MultifamilyResidential => "Multifamily Residential",
        SingleFamilyResidential => "Single-Family Residential",
        EducationK12 => "Education K-12",
        HigherEducation => "Higher Education",
        Healthcare => "Healthcare",
        Laboratory => "Laboratory",
        Hospitality => "Hospitality",
        Industrial => "Industrial",
        Warehouse => "Warehouse",
        DataCenter => "Data Center",
        Parking => "Parking",
        PublicAssembly => "Public Assembly",
        Civic => "Civic",
        MixedUse => "Mixed Use",
        Other => "Other",
    }
}

registry! {
    /// Energy code the project was designed to.
    EnergyCode {
        Ashrae901_2013 => "ASHRAE 90.1-2013",
        Ashrae901_2016 => "ASHRAE 90.1-2016",
        Ashrae901_2019 => "ASHRAE 90.1-2019",
        Ashrae901_2022 => "ASHRAE 90.1-2022",
        Iecc2015 => "IECC 2015",
        Iecc2018 => "IECC 2018",
        Iecc2021 => "IECC 2021",
        Title24_2019 => "Title 24 2019",
        Title24_2022 => "Title 24 2022",
        Necb2017 => "NECB 2017",
        Necb2020 => "NECB 2020",
        Other => "Other",
    }
}

registry! {
    /// Construction type per IBC.
    IbcConstructionType {
        IA => "I-A",
        IB => "I-B",
        IIA => "II-A",
        IIB => "II-B",
        IIIA => "III-A",
        IIIB => "III-B",
        IVA => "IV-A",
        IVB => "IV-B",
        IVC => "IV-C",
        IVHT => "IV-HT",
        VA => "V-A",
        VB => "V-B",
    }
}

registry! {
    /// Type of area surrounding the asset.
    ProjectSurroundings {
        Urban => "Urban",
        Suburban => "Suburban",
        Rural => "Rural",
    }
}

registry! {
    /// Whether the developed lot is greenfield, brownfield, etc.
    DevelopmentSite {
        Greenfield => "Greenfield",
        Brownfield => "Brownfield",
        Greyfield => "Greyfield",
        Infill => "Infill",
    }
}

registry! {
    /// Historical or cultural value of the asset.
    HistoricValue {
        Historic => "Historic",
        NotHistoric => "Not Historic",
        Unknown => "Unknown",
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

registry! {
    /// Unit system the project was entered in.
    UnitSystem {
        Imperial => "Imperial Units System (IP, USA)",
        International => "International Units System (SI)",
    }
}

registry! {
    /// Method used to calculate the gross floor area.
    AreaMeasurementMethod {
        Boma2018 => "BOMA 2018 Gross Areas: Standard methods of Measurement (ANSI/BOMA Z65.3-2018)",
        AshraeLeed => "ASHRAE/LEED",
        Ipms1 => "IPMS 1 (External)",
        Ipms2 => "IPMS 2 (Internal)",
        Other => "Other",
    }
}

// ---------------------------------------------------------------------------
// Cost
// ---------------------------------------------------------------------------

registry! {
    /// ISO 4217 alphabetic currency code.
    CurrencyCode {
        Aed => "AED",
        Afn => "AFN",
        All => "ALL",
        Amd => "AMD",
        Ang => "ANG",
        Aoa => "AOA",
        Ars => "ARS",
        Aud => "AUD",
        Awg => "AWG",
        Azn => "AZN",
        Bam => "BAM",
        Bbd => "BBD",
        Bdt => "BDT",
        Bgn => "BGN",
        Bhd => "BHD",
        Bif => "BIF",
        Bmd => "BMD",
        Bnd => "BND",
        Bob => "BOB",
        Brl => "BRL",
        Bsd => "BSD",
        Btn => "BTN",
        Bwp => "BWP",
        Byn => "BYN",
        Bzd => "BZD",
        Cad => "CAD",
        Cdf => "CDF",
        Chf => "CHF",
        Clp => "CLP",
        Cny => "CNY",
        Cop => "COP",
        Crc => "CRC",
        Cup => "CUP",
        Cve => "CVE",
        Czk => "CZK",
        Djf => "DJF",
        Dkk => "DKK",
        Dop => "DOP",
        Dzd => "DZD",
        Egp => "EGP",
        Ern => "ERN",
        Etb => "ETB",
        Eur => "EUR",
        Fjd => "FJD",
        Fkp => "FKP",
        Gbp => "GBP",
        Gel => "GEL",
        Ghs => "GHS",
        Gip => "GIP",
        Gmd => "GMD",
        Gnf => "GNF",
        Gtq => "GTQ",
        Gyd => "GYD",
        Hkd => "HKD",
        Hnl => "HNL",
        Htg => "HTG",
        Huf => "HUF",
        Idr => "IDR",
        Ils => "ILS",
        Inr => "INR",
        Iqd => "IQD",
        Irr => "IRR",
        Isk => "ISK",
        Jmd => "JMD",
        Jod => "JOD",
        Jpy => "JPY",
        Kes => "KES",
        Kgs => "KGS",
        Khr => "KHR",
        Kmf => "KMF",
        Kpw => "KPW",
        Krw => "KRW",
        Kwd => "KWD",
        Kyd => "KYD",
        Kzt => "KZT",
        Lak => "LAK",
        Lbp => "LBP",
        Lkr => "LKR",
        Lrd => "LRD",
        Lsl => "LSL",
        Lyd => "LYD",
        Mad => "MAD",
        Mdl => "MDL",
        Mga => "MGA",
        Mkd => "MKD",
        Mmk => "MMK",
        Mnt => "MNT",
        Mop => "MOP",
        Mru => "MRU",
        Mur => "MUR",
        Mvr => "MVR",
        Mwk => "MWK",
        Mxn => "MXN",
        Myr => "MYR",
        Mzn => "MZN",
        Nad => "NAD",
        Ngn => "NGN",
        Nio => "NIO",
        Nok => "NOK",
        Npr => "NPR",
        Nzd => "NZD",
        Omr => "OMR",
        Pab => "PAB",
        Pen => "PEN",
        Pgk => "PGK",
        Php => "PHP",
        Pkr => "PKR",
        Pln => "PLN",
        Pyg => "PYG",
        Qar => "QAR",
        Ron => "RON",
        Rsd => "RSD",
        Rub => "RUB",
        Rwf => "RWF",
        Sar => "SAR",
        Sbd => "SBD",
        Scr => "SCR",
        Sdg => "SDG",
        Sek => "SEK",
        Sgd => "SGD",
        Shp => "SHP",
        Sle => "SLE",
        Sos => "SOS",
        Srd => "SRD",
        Ssp => "SSP",
        Stn => "STN",
        Svc => "SVC",
        Syp => "SYP",
        Szl => "SZL",
        Thb => "THB",
        Tjs => "TJS",
        Tmt => "TMT",
        Tnd => "TND",
        Top => "TOP",
        Try => "TRY",
        Ttd => "TTD",
        Twd => "TWD",
        Tzs => "TZS",
        Uah => "UAH",
        Ugx => "UGX",
        Usd => "USD",
        Uyu => "UYU",
        Uzs => "UZS",
        Ves => "VES",
        Vnd => "VND",
        Vuv => "VUV",
        Wst => "WST",
        Xaf => "XAF",
        Xcd => "XCD",
        Xof => "XOF",
        Xpf => "XPF",
        Yer => "YER",
        Zar => "ZAR",
        Zmw => "ZMW",
        Zwl => "ZWL",
    }
}

// ---------------------------------------------------------------------------
// Structural systems
// ---------------------------------------------------------------------------

registry! {
    /// Risk category per IBC.
    RiskCategory {
        I => "I",
        II => "II",
        III => "III",
        IV => "IV",
    }
}

registry! {
    /// Earthquake importance factor per NBC 2020 table 4.1.8.5.
    EarthquakeImportanceFactor {
        Low => "Low",
        Normal => "Normal",
        High => "High",
        PostDisaster => "Post-disaster",
    }
}

registry! {
    /// Seismic design category per IBC.
    SeismicDesignCategory {
        A => "A",
        B => "B",
        C => "C",
        D => "D",
        E => "E",
        F => "F",
    }
}

registry! {
    /// Horizontal gravity system.
    HorizontalGravitySystem {
        FlatPlate => "Flat Plate",
        FlatSlab => "Flat Slab",
        TwoWayBeamSupportedSlab => "Two-Way Beam Supported Slab",
        OneWayBeamAndSlab => "One-Way Beam and Slab",
        SteelBeamsCompositeDeck => "Steel Beams with Composite Deck",
        SteelJoistsDeck => "Steel Joists with Deck",
        WoodJoists => "Wood Joists",
        MassTimberPanels => "Mass Timber Panels",
        PrecastHollowCore => "Precast Hollow Core",
        PostTensionedSlab => "Post-Tensioned Slab",
        Other => "Other",
    }
}

registry! {
    /// Vertical gravity system.
    VerticalGravitySystem {
        SteelColumns => "Steel Columns",
        ConcreteColumns => "Concrete Columns",
        WoodColumns => "Wood Columns",
        MassTimberColumns => "Mass Timber Columns",
        LoadBearingMasonry => "Load-Bearing Masonry",
        LoadBearingConcreteWalls => "Load-Bearing Concrete Walls",
        LightFrameWoodWalls => "Light-Frame Wood Walls",
        ColdFormedSteelWalls => "Cold-Formed Steel Walls",
        Other => "Other",
    }
}

registry! {
    /// Primary lateral system.
    LateralSystem {
        SteelMomentFrame => "Steel Moment Frame",
        SteelBracedFrame => "Steel Braced Frame",
        BucklingRestrainedBracedFrame => "Buckling Restrained Braced Frame",
        ConcreteMomentFrame => "Concrete Moment Frame",
        ConcreteShearWall => "Concrete Shear Wall",
        MasonryShearWall => "Masonry Shear Wall",
        WoodShearWall => "Wood Shear Wall",
        MassTimberShearWall => "Mass Timber Shear Wall",
        ColdFormedSteelShearWall => "Cold-Formed Steel Shear Wall",
        Other => "Other",
    }
}

registry! {
    /// Typical foundation type.
    FoundationType {
        SpreadFootings => "Spread Footings",
        MatFoundation => "Mat Foundation",
        DrivenPiles => "Driven Piles",
        DrilledShafts => "Drilled Shafts",
        HelicalPiles => "Helical Piles",
        Other => "Other",
    }
}

registry! {
    /// Whether the project is podium construction.
    SystemPodium {
        Yes => "Yes",
        No => "No",
    }
}

// ---------------------------------------------------------------------------
// LCA information
// ---------------------------------------------------------------------------

registry! {
    /// Project phase when the assessment was completed.
    ProjectPhase {
        Concept => "Concept",
        SchematicDesign => "Schematic Design",
        DesignDevelopment => "Design Development",
        ConstructionDocuments => "Construction Documents",
        BidTender => "Bid/Tender",
        Construction => "Construction",
        PostConstruction => "Post-Construction",
        InUse => "In Use",
        Other => "Other",
    }
}

registry! {
    /// Project phase when the assessment was reported to a program or database.
    ProjectPhaseReporting {
        Design => "Design",
        Permit => "Permit",
        Construction => "Construction",
        Completion => "Completion",
        PostOccupancy => "Post-Occupancy",
        Other => "Other",
    }
}

registry! {
    /// Tool used to conduct the assessment.
    LcaTool {
        AthenaImpactEstimator => "Athena Impact Estimator for Buildings",
        OneClickLca => "One Click LCA",
        Tally => "Tally",
        TallyCat => "Tally CAT",
        Ec3 => "EC3",
        Beacon => "Beacon",
        ETool => "eTool",
        SimaPro => "SimaPro",
        GaBi => "GaBi",
        OpenLca => "openLCA",
        Other => "Other",
    }
}

registry! {
    /// Life-cycle stage codes per EN 15978.
    LcaStage {
        A0 => "A0",
        A1A3 => "A1-A3",
        A4 => "A4",
        A5 => "A5",
        B1 => "B1",
        B2 => "B2",
        B3 => "B3",
        B4 => "B4",
        B5 => "B5",
        B6 => "B6",
        B7 => "B7",
        B8 => "B8",
        C1 => "C1",
        C2 => "C2",
        C3 => "C3",
        C4 => "C4",
        D => "D",
    }
}

registry! {
    /// Source of material quantities.
    MaterialQuantitySource {
        BimModel => "BIM Model",
        DrawingTakeoff => "Drawing Takeoff",
        CostEstimate => "Cost Estimate",
        ContractorQuantities => "Contractor Quantities",
        Specifications => "Specifications",
        Other => "Other",
    }
}

// ---------------------------------------------------------------------------
// Operational energy
// ---------------------------------------------------------------------------

registry! {
    /// Tool used for energy modeling.
    EnergyModel {
        EnergyPlus => "EnergyPlus",
        Equest => "eQUEST",
        IesVe => "IES VE",
        Trace3dPlus => "TRACE 3D Plus",
        OpenStudio => "OpenStudio",
        DesignBuilder => "DesignBuilder",
        Hap => "HAP",
        Sefaira => "Sefaira",
        Other => "Other",
        NoneSelected => "None",
    }
}

registry! {
    /// Time horizon of the GWP basis for energy sources.
    GwpEnergySource {
        TwentyYear => "20-year",
        HundredYear => "100-year",
    }
}

registry! {
    /// Type of electricity source.
    ElectricitySource {
        Grid => "Grid",
        OnsiteRenewable => "Onsite Renewable",
        OffsiteRenewable => "Offsite Renewable",
        PowerPurchaseAgreement => "Power Purchase Agreement",
        RenewableEnergyCertificates => "Renewable Energy Certificates",
        Other => "Other",
    }
}

registry! {
    /// Fuel type reported in B6 operational energy detail.
    FuelType {
        Electricity => "Electricity",
        NaturalGas => "Natural Gas",
        Propane => "Propane",
        FuelOil => "Fuel Oil",
        DistrictSteam => "District Steam",
        DistrictHotWater => "District Hot Water",
        DistrictChilledWater => "District Chilled Water",
        Biomass => "Biomass",
        Other => "Other",
    }
}

registry! {
    /// Energy end use reported in B6 operational energy detail.
    EndUse {
        SpaceHeating => "Space Heating",
        SpaceCooling => "Space Cooling",
        Fans => "Fans",
        Pumps => "Pumps",
        HeatRejection => "Heat Rejection",
        InteriorLighting => "Interior Lighting",
        ExteriorLighting => "Exterior Lighting",
        DomesticHotWater => "Domestic Hot Water",
        PlugLoads => "Plug Loads",
        ProcessLoads => "Process Loads",
        Elevators => "Elevators",
        Other => "Other",
    }
}

registry! {
    /// Water or wastewater type reported in B7 operational water detail.
    WaterType {
        Potable => "Potable Water",
        NonPotable => "Non-Potable Water",
        Reclaimed => "Reclaimed Water",
        Wastewater => "Wastewater",
        Stormwater => "Stormwater",
    }
}

// ---------------------------------------------------------------------------
// Inclusions
// ---------------------------------------------------------------------------

registry! {
    /// Method used to account for biogenic carbon.
    BiogenicCarbonAccounting {
        MinusOnePlusOne => "-1/+1",
        ZeroZero => "0/0",
        Dynamic => "Dynamic",
        Other => "Other",
    }
}

registry! {
    /// Sourcing certification for bio-based and forestry products.
    BiogenicCertification {
        Fsc => "FSC",
        Pefc => "PEFC",
        Sfi => "SFI",
        Csa => "CSA",
        Atfs => "ATFS",
        Other => "Other",
        NoneSelected => "None",
    }
}

registry! {
    /// Refrigerants used on the project.
    RefrigerantType {
        R22 => "R-22",
        R32 => "R-32",
        R134a => "R-134a",
        R290 => "R-290",
        R404a => "R-404A",
        R407c => "R-407C",
        R410a => "R-410A",
        R454b => "R-454B",
        R513a => "R-513A",
        R717 => "R-717",
        R744 => "R-744",
        R1234ze => "R-1234ze",
        R1234yf => "R-1234yf",
        Other => "Other",
    }
}

registry! {
    /// Substructure components (OmniClass Table 21, level 2).
    SubstructureScope {
        Foundations => "Foundations",
        SubgradeEnclosures => "Subgrade Enclosures",
        SlabsOnGrade => "Slabs-on-Grade",
        WaterGasMitigation => "Water and Gas Mitigation",
        SubstructureRelatedActivities => "Substructure Related Activities",
    }
}

registry! {
    /// Superstructure components (OmniClass Table 21, level 3).
    ShellSuperstructureScope {
        FloorConstruction => "Floor Construction",
        RoofConstruction => "Roof Construction",
        Stairs => "Stairs",
    }
}

registry! {
    /// Shell exterior enclosure components (OmniClass Table 21, level 3).
    ShellExteriorScope {
        ExteriorVerticalEnclosures => "Exterior Vertical Enclosures",
        ExteriorHorizontalEnclosures => "Exterior Horizontal Enclosures",
        ExteriorWindows => "Exterior Windows",
        ExteriorDoors => "Exterior Doors",
        Roofing => "Roofing",
    }
}

registry! {
    /// Interior construction components (OmniClass Table 21, level 3).
    InteriorConstructionScope {
        InteriorPartitions => "Interior Partitions",
        InteriorWindows => "Interior Windows",
        InteriorDoors => "Interior Doors",
        InteriorRailings => "Interior Railings",
        RaisedFloorConstruction => "Raised Floor Construction",
        SuspendedCeilingConstruction => "Suspended Ceiling Construction",
    }
}

registry! {
    /// Interior finishes components (OmniClass Table 21, level 3).
    InteriorFinishesScope {
        WallFinishes => "Wall Finishes",
        InteriorFabrications => "Interior Fabrications",
        Flooring => "Flooring",
        StairFinishes => "Stair Finishes",
        CeilingFinishes => "Ceiling Finishes",
    }
}

registry! {
    /// Mechanical service components (per ASHRAE 240P).
    ServicesMechanicalScope {
        HeatingEquipment => "Heating Equipment",
        CoolingEquipment => "Cooling Equipment",
        AirDistribution => "Air Distribution",
        Ductwork => "Ductwork",
        Piping => "Piping",
        Controls => "Controls",
        Refrigerants => "Refrigerants",
    }
}

registry! {
    /// Electrical service components (per ASHRAE 240P).
    ServicesElectricalScope {
        ServiceAndDistribution => "Service and Distribution",
        Lighting => "Lighting",
        Communications => "Communications",
        Security => "Security",
        Photovoltaics => "Photovoltaics",
        ConduitAndWiring => "Conduit and Wiring",
    }
}

registry! {
    /// Plumbing and fire protection components.
    ServicesPlumbingScope {
        PlumbingFixtures => "Plumbing Fixtures",
        DomesticWaterDistribution => "Domestic Water Distribution",
        SanitaryDrainage => "Sanitary Drainage",
        RainwaterDrainage => "Rainwater Drainage",
        FireProtection => "Fire Protection",
    }
}

registry! {
    /// Sitework components (OmniClass Table 21, level 2).
    SiteworkScope {
        SitePreparation => "Site Preparation",
        SiteImprovements => "Site Improvements",
        SiteCivilMechanicalUtilities => "Site Civil/Mechanical Utilities",
        SiteElectricalUtilities => "Site Electrical Utilities",
        Landscaping => "Landscaping",
        OtherSiteConstruction => "Other Site Construction",
    }
}

registry! {
    /// Equipment components (OmniClass Table 21, level 3).
    EquipmentScope {
        VehiclePedestrian => "Vehicle and Pedestrian Equipment",
        Commercial => "Commercial Equipment",
        Institutional => "Institutional Equipment",
        Residential => "Residential Equipment",
        EntertainmentRecreational => "Entertainment and Recreational Equipment",
        Other => "Other Equipment",
    }
}

registry! {
    /// Furnishings components (OmniClass Table 21, level 3).
    FurnishingScope {
        FixedFurnishings => "Fixed Furnishings",
        MovableFurnishings => "Movable Furnishings",
    }
}

/// Returns the descriptor of every registered domain.
pub fn all_domains() -> &'static [Domain] {
    &[
        ClimateZone::DOMAIN,
        Certification::DOMAIN,
        OwnerType::DOMAIN,
        ProjectStatus::DOMAIN,
        AssetType::DOMAIN,
        BuildingConstructionType::DOMAIN,
        InfrastructureConstructionType::DOMAIN,
        SectorType::DOMAIN,
        InfrastructureUseType::DOMAIN,
        UseType::DOMAIN,
        EnergyCode::DOMAIN,
        IbcConstructionType::DOMAIN,
        ProjectSurroundings::DOMAIN,
        DevelopmentSite::DOMAIN,
        HistoricValue::DOMAIN,
        UnitSystem::DOMAIN,
        AreaMeasurementMethod::DOMAIN,
        CurrencyCode::DOMAIN,
        RiskCategory::DOMAIN,
        EarthquakeImportanceFactor::DOMAIN,
        SeismicDesignCategory::DOMAIN,
        HorizontalGravitySystem::DOMAIN,
        VerticalGravitySystem::DOMAIN,
        LateralSystem::DOMAIN,
        FoundationType::DOMAIN,
        SystemPodium::DOMAIN,
        ProjectPhase::DOMAIN,
        ProjectPhaseReporting::DOMAIN,
        LcaTool::DOMAIN,
        LcaStage::DOMAIN,
        MaterialQuantitySource::DOMAIN,
        EnergyModel::DOMAIN,
        GwpEnergySource::DOMAIN,
        ElectricitySource::DOMAIN,
        FuelType::DOMAIN,
        EndUse::DOMAIN,
        WaterType::DOMAIN,
        BiogenicCarbonAccounting::DOMAIN,
        BiogenicCertification::DOMAIN,
        RefrigerantType::DOMAIN,
        SubstructureScope::DOMAIN,
        ShellSuperstructureScope::DOMAIN,
        ShellExteriorScope::DOMAIN,
        InteriorConstructionScope::DOMAIN,
        InteriorFinishesScope::DOMAIN,
        ServicesMechanicalScope::DOMAIN,
        ServicesElectricalScope::DOMAIN,
        ServicesPlumbingScope::DOMAIN,
        SiteworkScope::DOMAIN,
        EquipmentScope::DOMAIN,
        FurnishingScope::DOMAIN,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_domains_are_nonempty_and_unique() {
        let mut names = HashSet::new();
        for domain in all_domains() {
            assert!(!domain.is_empty(), "{} has no values", domain.name);
            assert!(names.insert(domain.name), "duplicate domain {}", domain.name);
            let distinct: HashSet<_> = domain.values.iter().collect();
            assert_eq!(distinct.len(), domain.len(), "{} repeats a literal", domain.name);
        }
    }

    #[test]
    fn test_as_str_roundtrips_through_from_str() {
        for asset in AssetType::all() {
            let parsed: AssetType = asset.as_str().parse().unwrap();
            assert_eq!(parsed, *asset);
        }
        for stage in LcaStage::all() {
            assert_eq!(stage.as_str().parse::<LcaStage>().unwrap(), *stage);
        }
    }

    #[test]
    fn test_serde_uses_payload_literal() {
        let json = serde_json::to_string(&UnitSystem::International).unwrap();
        assert_eq!(json, "\"International Units System (SI)\"");
        let back: UnitSystem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, UnitSystem::International);

        let stage: LcaStage = serde_json::from_str("\"A1-A3\"").unwrap();
        assert_eq!(stage, LcaStage::A1A3);
    }

    #[test]
    fn test_unknown_literal_rejected() {
        let err = "Spaceship".parse::<AssetType>().unwrap_err();
        assert!(matches!(
            err,
            EchoError::UnknownValue { domain: "AssetType", .. }
        ));
        assert!(serde_json::from_str::<AssetType>("\"building\"").is_err());
    }

    #[test]
    fn test_domain_contains_matches_variants() {
        assert!(AssetType::DOMAIN.contains("Building"));
        assert!(AssetType::DOMAIN.contains("Infrastructure"));
        assert!(!AssetType::DOMAIN.contains("building"));
        assert_eq!(AssetType::DOMAIN.len(), AssetType::all().len());
        assert_eq!(CurrencyCode::Usd.as_str(), "USD");
    }

    #[test]
    fn test_display_matches_literal() {
        assert_eq!(CurrencyCode::Eur.to_string(), "EUR");
        assert_eq!(ClimateZone::Zone4A.to_string(), "4A");
        assert_eq!(EarthquakeImportanceFactor::PostDisaster.to_string(), "Post-disaster");
    }
}
