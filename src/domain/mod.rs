//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the named parameter store (`Params`)
//! - grid scheme selection (`GridScheme`)
//! - exportable grid/model snapshots (`GridFile`, `ModelFile`)

pub mod params;
pub mod types;

pub use params::*;
pub use types::*;
