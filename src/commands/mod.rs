//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `lookup.rs`: command dispatch; cid/props/describe hit the network.
//! - `catalog.rs`: offline heading lists.
//! - `output.rs`: JSON envelope / text line printing.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate lookups to the library client.
//! - Keep behavior and output schema stable.

pub mod catalog;
pub mod lookup;
pub mod output;

pub use lookup::handle_lookup_commands;
