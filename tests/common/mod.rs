#![allow(dead_code)]

use pubchemprops::error::FAULT_NOT_FOUND;
use pubchemprops::{ClientConfig, Fetch, PubChemClient, PubChemError};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::HashMap;

pub const API_BASE: &str = "http://fixture.test/rest";

/// Serves canned documents keyed by full URL; anything else is a PUG REST 404.
#[derive(Default)]
pub struct FixtureFetcher {
    docs: HashMap<String, Value>,
    pub calls: RefCell<Vec<String>>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, doc: Value) -> Self {
        self.docs.insert(format!("{}{}", API_BASE, path), doc);
        self
    }

    pub fn client(&self) -> PubChemClient<&FixtureFetcher> {
        PubChemClient::with_fetcher(self, ClientConfig::default().with_api_base(API_BASE))
    }
}

impl Fetch for FixtureFetcher {
    fn fetch(&self, url: &str) -> Result<Value, PubChemError> {
        self.calls.borrow_mut().push(url.to_string());
        self.docs
            .get(url)
            .cloned()
            .ok_or_else(|| PubChemError::Transport {
                url: url.to_string(),
                status: Some(404),
                fault: Some(FAULT_NOT_FOUND.to_string()),
                detail: "No CID found".to_string(),
            })
    }
}

pub fn name_record(cid: u64) -> Value {
    json!({"PC_Compounds": [{"id": {"id": {"cid": cid}}, "charge": 0}]})
}

pub fn string_info(text: &str) -> Value {
    json!([{"ReferenceNumber": 1, "Value": {"StringWithMarkup": [{"String": text}]}}])
}

pub fn leaf(heading: &str, info: Value) -> Value {
    json!({"TOCHeading": heading, "Description": "", "Information": info})
}

pub fn branch(heading: &str, children: Vec<Value>) -> Value {
    json!({"TOCHeading": heading, "Section": children})
}

/// Trimmed-down PUG View record for acetone (CID 180).
pub fn acetone_view() -> Value {
    json!({"Record": {
        "RecordType": "CID",
        "RecordNumber": 180,
        "RecordTitle": "Acetone",
        "Section": [
            branch("Structures", vec![leaf("2D Structure", string_info("png"))]),
            branch("Names and Identifiers", vec![
                branch("Record Description", vec![]),
                branch("Computed Descriptors", vec![
                    leaf("IUPAC Name", string_info("propan-2-one")),
                    leaf("InChI", string_info("InChI=1S/C3H6O/c1-3(2)4/h1-2H3")),
                    leaf("InChI Key", string_info("CSCPPACGZOOCGX-UHFFFAOYSA-N")),
                    leaf("Canonical SMILES", string_info("CC(=O)C")),
                ]),
                branch("Molecular Formula", vec![]),
                branch("Other Identifiers", vec![
                    leaf("CAS", string_info("67-64-1")),
                    leaf("Wikipedia", string_info("acetone")),
                ]),
            ]),
            branch("Chemical and Physical Properties", vec![
                branch("Computed Properties", vec![leaf("XLogP3", string_info("-0.1"))]),
                branch("Experimental Properties", vec![
                    leaf("Boiling Point", json!([
                        {"Value": {"StringWithMarkup": [{"String": "133 °F at 760 mmHg"}]}},
                        {"Value": {"Number": [56.08], "Unit": "°C"}}
                    ])),
                    leaf("Vapor Pressure", json!([{"Value": {"Number": [231.0], "Unit": "mm Hg at 25 °C"}}])),
                    leaf("LogP", json!([{"Value": {"Number": [-0.24]}}])),
                ]),
            ]),
            branch("Safety and Hazards", vec![leaf("Flash Point", string_info("-4 °F"))]),
        ]
    }})
}
