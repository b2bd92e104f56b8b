//! Input/output helpers.
//!
//! - two-column table ingest for tabulated default models (`table`)
//! - grid/model JSON exports (`export`)

pub mod export;
pub mod table;

pub use export::*;
pub use table::*;
