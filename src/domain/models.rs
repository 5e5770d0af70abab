use serde::Deserialize;
use std::collections::BTreeMap;

/// Requested heading -> raw `Information` payload, exactly as upstream sent it.
pub type PropertyMap = BTreeMap<String, serde_json::Value>;

/// One row of a PUG REST property table (`CID` plus the requested columns).
pub type PropertyRecord = serde_json::Map<String, serde_json::Value>;

/// `compound/name/{name}/record/JSON`
#[derive(Debug, Deserialize)]
pub struct CompoundRecordResponse {
    /// Absent and `null` both mean "no match".
    #[serde(rename = "PC_Compounds", default)]
    pub compounds: Option<Vec<CompoundRecord>>,
}

#[derive(Debug, Deserialize)]
pub struct CompoundRecord {
    pub id: CompoundRecordId,
}

#[derive(Debug, Deserialize)]
pub struct CompoundRecordId {
    pub id: CidHolder,
}

#[derive(Debug, Deserialize)]
pub struct CidHolder {
    pub cid: u64,
}

/// `compound/cid/{cid}/property/{names}/JSON`
#[derive(Debug, Deserialize)]
pub struct PropertyTableResponse {
    #[serde(rename = "PropertyTable")]
    pub table: PropertyTable,
}

#[derive(Debug, Deserialize)]
pub struct PropertyTable {
    #[serde(rename = "Properties")]
    pub properties: Vec<PropertyRecord>,
}
