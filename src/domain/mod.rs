//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs`: typed PUG REST response records and result map aliases.
//! - `section.rs`: borrowed view over a PUG View section node.
//! - `constants.rs`: fixed category/group headings and the heading catalogs.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no network side effects.

pub mod constants;
pub mod models;
pub mod section;
