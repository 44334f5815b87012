// Fallback dataset served when the data backend is unreachable.
// Mirrors the rows the hosted database seeds for demos.

use super::entity::{ProteinRecord, ProteinStats};

fn record(
    id: &str,
    name: &str,
    gene: Option<&str>,
    organism: &str,
    length: u32,
    weight: f64,
    function: &str,
) -> ProteinRecord {
    ProteinRecord {
        id: id.to_string(),
        name: name.to_string(),
        gene: gene.map(str::to_string),
        organism: organism.to_string(),
        length,
        weight,
        function: function.to_string(),
        sequence: None,
        family: None,
        isoelectric_point: None,
        hydrophobicity: None,
    }
}

/// The eight-record offline catalog.
pub fn mock_proteins() -> Vec<ProteinRecord> {
    vec![
        record(
            "A0A6G0UGL8_9BILA",
            "receptor protein-tyrosine kinase",
            None,
            "Halicephalobus",
            838,
            95462.0,
            "Kinase | Receptor | Transferase | Tyrosine-protein kinase",
        ),
        record(
            "A0A2K6SKD5_SAIBB",
            "Tyrosine-protein kinase receptor",
            Some("LTK"),
            "Saimiri",
            794,
            84804.0,
            "Kinase | Receptor | Transferase | Tyrosine-protein kinase",
        ),
        record(
            "A0A836ABD7_SHEEP",
            "Solute carrier family 2, facilitated glucose transporter member 8",
            None,
            "Ovis",
            1364,
            149825.0,
            "GTPase activation",
        ),
        record(
            "A0A6P3RGQ7_PTEVA",
            "Phosphatidylinositol 5-phosphate 4-kinase type-2 gamma",
            Some("KIF5A"),
            "Pteropus",
            422,
            47259.0,
            "Kinase | Transferase",
        ),
        record(
            "A0A3B3DRK3_ORYME",
            "Tyrosine-protein kinase receptor",
            None,
            "Oryzias",
            810,
            92125.0,
            "Developmental protein | Kinase | Receptor | Transferase | Tyrosine-protein kinase",
        ),
        record(
            "A6JYM6_RAT",
            "Proprotein convertase subtilisin/kexin type 9",
            Some("Pcsk9"),
            "Rattus",
            691,
            74709.0,
            "Hydrolase | Protease | Serine protease",
        ),
        record(
            "A0A2I3GUW2_NOMLE",
            "Sorting nexin 1",
            Some("SNX1"),
            "Nomascus",
            509,
            57684.0,
            "Protein transport | Transport",
        ),
        record(
            "A0A851DUI7_9CORV",
            "Exostosin-like 3",
            Some("Extl3"),
            "Dryoscopus",
            921,
            105355.0,
            "Glycosyltransferase | Transferase",
        ),
    ]
}

/// Aggregate statistics shown when `/proteins/stats` is unreachable.
pub fn mock_stats() -> ProteinStats {
    ProteinStats {
        total_proteins: 1248,
        avg_length: 567.45,
        avg_mw: 62500.78,
        avg_pi: 6.82,
        avg_n_interactors: 12.5,
        avg_hydrophobicity: -0.234,
        total_genes: 892,
        total_families: 156,
    }
}
