//! Shared domain types.
//!
//! These types are kept lightweight and serializable so they can be used in
//! memory and exported to JSON for plotting or comparisons.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::grid::{DEFAULT_CUT, DEFAULT_LOG_MIN, DEFAULT_SPREAD};

/// Warping scheme used to place frequency points on [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridScheme {
    Linear,
    Log,
    Quadratic,
    Lorentzian,
    HalfLorentzian,
}

impl GridScheme {
    pub const ALL: [GridScheme; 5] = [
        GridScheme::Lorentzian,
        GridScheme::HalfLorentzian,
        GridScheme::Quadratic,
        GridScheme::Log,
        GridScheme::Linear,
    ];

    /// Resolve a `FREQUENCY_GRID` value (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, AppError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(GridScheme::Linear),
            "log" => Ok(GridScheme::Log),
            "quadratic" => Ok(GridScheme::Quadratic),
            "lorentzian" => Ok(GridScheme::Lorentzian),
            "half lorentzian" => Ok(GridScheme::HalfLorentzian),
            _ => Err(AppError::config(format!(
                "No valid frequency grid specified: `{name}` \
                 (expected lorentzian, half lorentzian, quadratic, log or linear)."
            ))),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            GridScheme::Linear => "linear",
            GridScheme::Log => "log",
            GridScheme::Quadratic => "quadratic",
            GridScheme::Lorentzian => "lorentzian",
            GridScheme::HalfLorentzian => "half lorentzian",
        }
    }

    /// Parameter key that tunes this scheme, with its default.
    pub fn parameter(self) -> Option<(&'static str, f64)> {
        match self {
            GridScheme::Linear => None,
            GridScheme::Log => Some(("LOG_MIN", DEFAULT_LOG_MIN)),
            GridScheme::Quadratic => Some(("SPREAD", DEFAULT_SPREAD)),
            GridScheme::Lorentzian | GridScheme::HalfLorentzian => Some(("CUT", DEFAULT_CUT)),
        }
    }
}

/// Portable representation of a generated frequency grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridFile {
    pub tool: String,
    pub scheme: GridScheme,
    pub nfreq: usize,
    pub t: Vec<f64>,
}

/// One row of a tabulated default model: `omega(x)` and the density there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPoint {
    pub x: f64,
    pub omega: f64,
    pub density: f64,
}

/// Portable representation of a default model, sampled on its quantiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFile {
    pub tool: String,
    pub model: String,
    pub omega_min: f64,
    pub omega_max: f64,
    pub points: Vec<ModelPoint>,
}
