//! Service layer containing lookup logic.
//!
//! ## Service map
//! - `resolver.rs`: compound name -> CID.
//! - `properties.rs`: first-layer property table by CID.
//! - `extractor.rs`: second-layer heading lookup over the PUG View tree.
//! - `summary.rs`: human-readable rendering of `Information` payloads.
//!
//! ## Conventions
//! - URL building and response reshaping are pure helpers; the only side
//!   effect is the `Fetch` call.
//! - Errors propagate unchanged; nothing is retried here.

pub mod extractor;
pub mod properties;
pub mod resolver;
pub mod summary;
