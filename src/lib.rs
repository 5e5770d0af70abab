//! Thin client for the PubChem PUG REST and PUG View APIs.
//!
//! Three lookups, each starting from a compound name:
//!
//! - [`resolve_cid`]: the compound's PubChem CID.
//! - [`get_direct_properties`]: "first layer" values served directly by the
//!   property table (`MolecularWeight`, `IUPACName`, ...).
//! - [`get_descriptive_properties`]: "second layer" values nested in the full
//!   compound record (`Boiling Point`, `Canonical SMILES`, ...), returned as
//!   raw `Information` payloads keyed by heading.
//!
//! The free functions use a default [`PubChemClient`]; build one yourself to
//! change the base URL, the timeout, the traversed sections, or to plug in
//! another [`Fetch`] implementation.
//!
//! ```no_run
//! let props = pubchemprops::get_descriptive_properties("acetone", &["Boiling Point"])?;
//! for (heading, info) in &props {
//!     println!("{heading}: {:?}", pubchemprops::summarize_information(info));
//! }
//! # Ok::<(), pubchemprops::PubChemError>(())
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod services;

pub use client::{get_descriptive_properties, get_direct_properties, resolve_cid, PubChemClient};
pub use config::ClientConfig;
pub use domain::constants::{
    CATEGORY_HEADINGS, GROUP_HEADINGS, KNOWN_DESCRIPTIVE_PROPERTIES, KNOWN_DIRECT_PROPERTIES,
};
pub use domain::models::{PropertyMap, PropertyRecord};
pub use error::{PubChemError, Result};
pub use fetch::{Fetch, HttpFetcher};
pub use services::extractor::SectionFilter;
pub use services::summary::summarize_information;
