use crate::config::ClientConfig;
use crate::domain::models::{PropertyMap, PropertyRecord};
use crate::error::Result;
use crate::fetch::{Fetch, HttpFetcher};
use crate::services::extractor::{self, SectionFilter};
use crate::services::{properties, resolver};

/// Entry point for all lookups. Holds no per-call state; every method
/// resolves the CID afresh.
pub struct PubChemClient<F: Fetch = HttpFetcher> {
    fetcher: F,
    config: ClientConfig,
    filter: SectionFilter,
}

impl PubChemClient<HttpFetcher> {
    pub fn new() -> Result<Self> {
        Self::from_config(ClientConfig::default())
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.timeout)?;
        Ok(Self::with_fetcher(fetcher, config))
    }
}

impl<F: Fetch> PubChemClient<F> {
    pub fn with_fetcher(fetcher: F, config: ClientConfig) -> Self {
        Self {
            fetcher,
            config,
            filter: SectionFilter::default(),
        }
    }

    /// Replaces the category/group headings used by
    /// [`get_descriptive_properties`](Self::get_descriptive_properties).
    pub fn with_section_filter(mut self, filter: SectionFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn section_filter(&self) -> &SectionFilter {
        &self.filter
    }

    pub fn resolve_cid(&self, name: &str) -> Result<u64> {
        resolver::resolve_cid(&self.fetcher, &self.config, name)
    }

    /// First-layer properties straight from the PUG REST property table,
    /// e.g. `["MolecularWeight", "IUPACName"]`.
    pub fn get_direct_properties<S: AsRef<str>>(
        &self,
        name: &str,
        requested: &[S],
    ) -> Result<PropertyRecord> {
        properties::get_direct_properties(&self.fetcher, &self.config, name, requested)
    }

    /// Second-layer properties located by heading in the PUG View record,
    /// e.g. `["Boiling Point", "IUPAC Name"]`.
    pub fn get_descriptive_properties<S: AsRef<str>>(
        &self,
        name: &str,
        requested: &[S],
    ) -> Result<PropertyMap> {
        extractor::get_descriptive_properties(
            &self.fetcher,
            &self.config,
            &self.filter,
            name,
            requested,
        )
    }
}

pub fn resolve_cid(name: &str) -> Result<u64> {
    PubChemClient::new()?.resolve_cid(name)
}

pub fn get_direct_properties<S: AsRef<str>>(
    name: &str,
    requested: &[S],
) -> Result<PropertyRecord> {
    PubChemClient::new()?.get_direct_properties(name, requested)
}

pub fn get_descriptive_properties<S: AsRef<str>>(
    name: &str,
    requested: &[S],
) -> Result<PropertyMap> {
    PubChemClient::new()?.get_descriptive_properties(name, requested)
}
