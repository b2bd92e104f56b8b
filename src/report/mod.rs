//! Reporting utilities: formatted grid listings, model tables and sample summaries.

pub mod format;

pub use format::*;
