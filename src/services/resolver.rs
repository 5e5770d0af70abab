use crate::config::ClientConfig;
use crate::domain::models::CompoundRecordResponse;
use crate::error::{PubChemError, Result};
use crate::fetch::Fetch;

pub fn compound_record_url(config: &ClientConfig, name: &str) -> Result<String> {
    if name.trim().is_empty() {
        return Err(PubChemError::InvalidInput(
            "compound name must not be empty".to_string(),
        ));
    }
    Ok(format!(
        "{}/compound/name/{}/record/JSON",
        config.pug_rest_base(),
        urlencoding::encode(name)
    ))
}

/// Pulls `PC_Compounds[0].id.id.cid` out of a name-lookup record.
pub fn cid_from_record(name: &str, document: serde_json::Value) -> Result<u64> {
    let parsed: CompoundRecordResponse = serde_json::from_value(document)
        .map_err(|e| PubChemError::shape("compound record", e.to_string()))?;
    let first = parsed
        .compounds
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| PubChemError::CompoundNotFound {
            name: name.to_string(),
        })?;
    match first.id.id.cid {
        0 => Err(PubChemError::shape("compound record", "CID is zero")),
        cid => Ok(cid),
    }
}

pub fn resolve_cid<F: Fetch>(fetcher: &F, config: &ClientConfig, name: &str) -> Result<u64> {
    let url = compound_record_url(config, name)?;
    let document = fetcher.fetch(&url).map_err(|e| {
        if e.is_upstream_not_found() {
            PubChemError::CompoundNotFound {
                name: name.to_string(),
            }
        } else {
            e
        }
    })?;
    let cid = cid_from_record(name, document)?;
    tracing::info!(name, cid, "resolved compound");
    Ok(cid)
}
