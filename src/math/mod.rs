//! Mathematical utilities: table search, interpolation and quadrature.

pub mod interp;
pub mod quadrature;

pub use interp::*;
pub use quadrature::*;
