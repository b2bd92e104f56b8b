//! `maxent-prior` library crate.
//!
//! Numerical preprocessing for maximum-entropy spectral reconstruction:
//!
//! - default models: prior densities over frequency with an inverse-CDF table
//! - frequency grids: warped point sets on [0,1] for the quadrature stage
//!
//! The binary (`mxprior`) is a thin wrapper around this library so the
//! numerical code is testable without spawning processes.

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod grid;
pub mod io;
pub mod math;
pub mod models;
pub mod report;
