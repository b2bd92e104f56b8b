//! Default models: prior densities over the frequency axis.
//!
//! Models share one capability (`Density`) so the CDF engine can stay generic
//! over analytic forms and tabulated data.

pub mod analytic;
pub mod density;
pub mod engine;
pub mod factory;
pub mod tabulated;

pub use analytic::*;
pub use density::*;
pub use engine::*;
pub use factory::*;
pub use tabulated::*;
