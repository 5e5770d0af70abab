//! Second-layer ("descriptive") property extraction from a PUG View record.
//!
//! The record is a tree: `Record.Section[]` holds top-level categories, each
//! category holds identifier groups, each group holds named properties whose
//! `Information` array is the payload we return. Extraction runs four stages:
//!
//! 1. keep the configured categories (first section per heading wins),
//! 2. flatten their children that are configured groups,
//! 3. flatten the groups' children whose heading was requested,
//! 4. fold those into a heading -> payload map, later entries overwriting.
//!
//! Missing fields yield zero matches. A `Section` field that exists but is not
//! an array is reported as `UnexpectedShape`.

use crate::config::ClientConfig;
use crate::domain::constants::{CATEGORY_HEADINGS, GROUP_HEADINGS};
use crate::domain::models::PropertyMap;
use crate::domain::section::SectionView;
use crate::error::{PubChemError, Result};
use crate::fetch::Fetch;
use crate::services::resolver::resolve_cid;
use serde_json::Value;
use std::collections::HashSet;

pub fn compound_view_url(config: &ClientConfig, cid: u64) -> String {
    format!("{}/data/compound/{}/JSON", config.pug_view_base(), cid)
}

/// Which headings the traversal descends through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionFilter {
    pub categories: Vec<String>,
    pub groups: Vec<String>,
}

impl Default for SectionFilter {
    fn default() -> Self {
        Self {
            categories: CATEGORY_HEADINGS.iter().map(|s| s.to_string()).collect(),
            groups: GROUP_HEADINGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SectionFilter {
    pub fn new<C, G>(categories: C, groups: G) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        G: IntoIterator,
        G::Item: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            groups: groups.into_iter().map(Into::into).collect(),
        }
    }

    /// Stage 1. Ordered by `self.categories`, not by document order.
    pub fn select_categories<'a>(&self, top: &[SectionView<'a>]) -> Vec<SectionView<'a>> {
        self.categories
            .iter()
            .filter_map(|wanted| {
                top.iter()
                    .find(|s| s.heading() == Some(wanted.as_str()))
                    .copied()
            })
            .collect()
    }

    /// Stage 2. Document order within each category; no deduplication.
    pub fn extract_groups<'a>(
        &self,
        categories: &[SectionView<'a>],
    ) -> Result<Vec<SectionView<'a>>> {
        let groups: HashSet<&str> = self.groups.iter().map(String::as_str).collect();
        keep_children(categories, "category section", |h| groups.contains(h))
    }

    /// Stage 3.
    pub fn filter_properties<'a>(
        &self,
        groups: &[SectionView<'a>],
        requested: &HashSet<&str>,
    ) -> Result<Vec<SectionView<'a>>> {
        keep_children(groups, "group section", |h| requested.contains(h))
    }

    /// Runs all four stages over a full PUG View document.
    pub fn extract<S: AsRef<str>>(
        &self,
        document: &Value,
        requested: &[S],
    ) -> Result<PropertyMap> {
        let requested: HashSet<&str> = requested.iter().map(|s| s.as_ref()).collect();
        let top = top_level_sections(document)?;

        let categories = self.select_categories(&top);
        tracing::debug!(kept = categories.len(), "selected categories");
        let groups = self.extract_groups(&categories)?;
        tracing::debug!(kept = groups.len(), "extracted groups");
        let properties = self.filter_properties(&groups, &requested)?;
        tracing::debug!(kept = properties.len(), "filtered properties");

        Ok(flatten(&properties))
    }
}

fn top_level_sections(document: &Value) -> Result<Vec<SectionView<'_>>> {
    let record = document
        .get("Record")
        .filter(|r| r.is_object())
        .ok_or_else(|| PubChemError::shape("compound view", "missing `Record` object"))?;
    match record.get("Section") {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => SectionView::list(items, "compound view"),
        Some(_) => Err(PubChemError::shape(
            "compound view",
            "`Record.Section` is not an array",
        )),
    }
}

fn keep_children<'a>(
    parents: &[SectionView<'a>],
    context: &'static str,
    wanted: impl Fn(&str) -> bool,
) -> Result<Vec<SectionView<'a>>> {
    let mut out = Vec::new();
    for parent in parents {
        let Some(children) = parent.children(context)? else {
            continue;
        };
        out.extend(
            children
                .into_iter()
                .filter(|c| c.heading().map(&wanted).unwrap_or(false)),
        );
    }
    Ok(out)
}

/// Stage 4. Later sections overwrite earlier ones with the same heading.
pub fn flatten(properties: &[SectionView<'_>]) -> PropertyMap {
    let mut out = PropertyMap::new();
    for p in properties {
        let Some(heading) = p.heading() else {
            continue;
        };
        match p.information() {
            Some(info) => {
                out.insert(heading.to_string(), info.clone());
            }
            None => tracing::warn!(heading, "matched property has no Information"),
        }
    }
    out
}

pub fn get_descriptive_properties<F: Fetch, S: AsRef<str>>(
    fetcher: &F,
    config: &ClientConfig,
    filter: &SectionFilter,
    name: &str,
    requested: &[S],
) -> Result<PropertyMap> {
    let cid = resolve_cid(fetcher, config, name)?;
    let document = fetcher.fetch(&compound_view_url(config, cid))?;
    filter.extract(&document, requested)
}
