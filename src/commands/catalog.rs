use crate::commands::output::emit;
use pubchemprops::{KNOWN_DESCRIPTIVE_PROPERTIES, KNOWN_DIRECT_PROPERTIES};
use serde::Serialize;

#[derive(Serialize)]
pub struct CatalogReport {
    pub kind: String,
    pub headings: Vec<String>,
}

pub fn catalog_report(direct: bool) -> CatalogReport {
    let (kind, headings): (&str, &[&str]) = if direct {
        ("direct", &KNOWN_DIRECT_PROPERTIES)
    } else {
        ("descriptive", &KNOWN_DESCRIPTIVE_PROPERTIES)
    };
    CatalogReport {
        kind: kind.to_string(),
        headings: headings.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn handle_catalog(json: bool, direct: bool) -> anyhow::Result<()> {
    emit(json, &catalog_report(direct), |r| r.headings.clone())
}
