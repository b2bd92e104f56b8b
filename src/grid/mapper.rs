//! Immutable frequency grid built once from parameters.

use crate::domain::{GridScheme, Params};
use crate::error::AppError;
use crate::grid::frequency_grid::{DEFAULT_NFREQ, FrequencyGrid};

#[derive(Debug, Clone, PartialEq)]
pub struct GridMapper {
    grid: FrequencyGrid,
    nfreq: usize,
    t_array: Vec<f64>,
}

impl GridMapper {
    pub fn new(nfreq: usize, grid: FrequencyGrid) -> Result<Self, AppError> {
        let t_array = grid.points(nfreq)?;
        Ok(Self { grid, nfreq, t_array })
    }

    /// Build from `NFREQ`, `FREQUENCY_GRID` and the scheme parameter.
    pub fn from_params(params: &Params) -> Result<Self, AppError> {
        let nfreq = params.usize_or("NFREQ", DEFAULT_NFREQ)?;
        let grid = FrequencyGrid::from_params(params)?;
        tracing::info!(scheme = grid.scheme().display_name(), nfreq, "building frequency grid");
        Self::new(nfreq, grid)
    }

    pub fn scheme(&self) -> GridScheme {
        self.grid.scheme()
    }

    pub fn nfreq(&self) -> usize {
        self.nfreq
    }

    pub fn t_array(&self) -> &[f64] {
        &self.t_array
    }

    /// Grid point `i`, for `0 <= i <= nfreq`.
    pub fn map(&self, i: usize) -> Result<f64, AppError> {
        self.t_array.get(i).copied().ok_or_else(|| {
            AppError::domain(format!(
                "grid index {i} is out of bounds (0..={})",
                self.nfreq
            ))
        })
    }
}
