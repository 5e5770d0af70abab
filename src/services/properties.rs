use crate::config::ClientConfig;
use crate::domain::models::{PropertyRecord, PropertyTableResponse};
use crate::error::{PubChemError, Result};
use crate::fetch::Fetch;
use crate::services::resolver::resolve_cid;
use std::collections::HashSet;

/// Trimmed, deduplicated (first occurrence wins), percent-encoded names.
/// An empty result is rejected.
pub fn requested_names<S: AsRef<str>>(requested: &[S]) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let names: Vec<String> = requested
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty() && seen.insert(*s))
        .map(|s| urlencoding::encode(s).into_owned())
        .collect();
    if names.is_empty() {
        return Err(PubChemError::InvalidInput(
            "at least one direct property must be requested".to_string(),
        ));
    }
    Ok(names)
}

/// `names` must already be encoded, as returned by [`requested_names`].
pub fn property_table_url(config: &ClientConfig, cid: u64, names: &[String]) -> String {
    format!(
        "{}/compound/cid/{}/property/{}/JSON",
        config.pug_rest_base(),
        cid,
        names.join(",")
    )
}

/// Returns `PropertyTable.Properties[0]` unmodified.
pub fn first_property_record(document: serde_json::Value) -> Result<PropertyRecord> {
    let parsed: PropertyTableResponse = serde_json::from_value(document)
        .map_err(|e| PubChemError::shape("property table", e.to_string()))?;
    parsed
        .table
        .properties
        .into_iter()
        .next()
        .ok_or_else(|| PubChemError::shape("property table", "`Properties` is empty"))
}

pub fn get_direct_properties<F: Fetch, S: AsRef<str>>(
    fetcher: &F,
    config: &ClientConfig,
    name: &str,
    requested: &[S],
) -> Result<PropertyRecord> {
    let names = requested_names(requested)?;
    let cid = resolve_cid(fetcher, config, name)?;
    let url = property_table_url(config, cid, &names);
    first_property_record(fetcher.fetch(&url)?)
}
