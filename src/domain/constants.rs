/// Top-level PUG View sections the extractor descends into, in processing order.
pub const CATEGORY_HEADINGS: [&str; 2] = [
    "Names and Identifiers",
    "Chemical and Physical Properties",
];

/// Second-level sections whose children are the named properties.
pub const GROUP_HEADINGS: [&str; 3] = [
    "Computed Descriptors",
    "Other Identifiers",
    "Experimental Properties",
];

/// Headings commonly found under the default groups. Documentation only: any
/// heading may be requested.
pub const KNOWN_DESCRIPTIVE_PROPERTIES: [&str; 21] = [
    "IUPAC Name",
    "InChI",
    "InChI Key",
    "Canonical SMILES",
    "Wikipedia",
    "Boiling Point",
    "Melting Point",
    "Flash Point",
    "Solubility",
    "Density",
    "Vapor Density",
    "Vapor Pressure",
    "LogP",
    "Stability",
    "Auto-Ignition",
    "Viscosity",
    "Heat of Combustion",
    "Heat of Vaporization",
    "Surface Tension",
    "Ionization Potential",
    "Dissociation Constants",
];

/// Property-table columns PUG REST serves directly by CID.
pub const KNOWN_DIRECT_PROPERTIES: [&str; 16] = [
    "MolecularFormula",
    "MolecularWeight",
    "CanonicalSMILES",
    "IsomericSMILES",
    "InChI",
    "InChIKey",
    "IUPACName",
    "XLogP",
    "ExactMass",
    "MonoisotopicMass",
    "TPSA",
    "Complexity",
    "Charge",
    "HBondDonorCount",
    "HBondAcceptorCount",
    "RotatableBondCount",
];
