//! Frequency grids on [0,1].
//!
//! Responsibilities:
//!
//! - generate warped point sets for the five schemes (`frequency_grid`)
//! - hold a built grid and answer index queries (`mapper`)

pub mod frequency_grid;
pub mod mapper;

pub use frequency_grid::*;
pub use mapper::*;
