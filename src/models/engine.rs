//! Default model engine: density plus a normalized cumulative table.
//!
//! At construction the density is integrated with the trapezoidal rule on `ntab`
//! equally spaced frequencies of `[omega_min, omega_max]` and the running sums
//! are divided by the total, giving a discrete CDF with `cdf[0] == 0` and
//! `cdf[ntab - 1] == 1`. The table is never touched again.
//!
//! Queries:
//!
//! - `density(omega)`: the model itself, no table involved
//! - `omega(x)`: inverse CDF at table resolution (upper-bound search + linear
//!   interpolation between neighbouring frequencies)
//! - `x(t)`: table value at the fractional table position `t * (ntab - 1)`.
//!   This is parameterized by table position, not by frequency, and is therefore
//!   not the inverse of `omega(x)`. Callers depend on it exactly as written.

use std::fmt;

use crate::error::AppError;
use crate::math::{cumulative_trapezoid, interpolate_from_right, upper_bound};
use crate::models::density::Density;

/// Resolution of the cumulative table unless stated otherwise.
pub const DEFAULT_NTAB: usize = 5001;

pub struct DefaultModelEngine {
    model: Box<dyn Density>,
    name: String,
    omega_min: f64,
    omega_max: f64,
    ntab: usize,
    total: f64,
    cdf_table: Vec<f64>,
}

impl DefaultModelEngine {
    /// Wrap `model` with the default table resolution.
    pub fn new<M>(model: M, omega_min: f64, omega_max: f64) -> Result<Self, AppError>
    where
        M: Density + 'static,
    {
        Self::with_resolution(model, omega_min, omega_max, DEFAULT_NTAB)
    }

    pub fn with_resolution<M>(
        model: M,
        omega_min: f64,
        omega_max: f64,
        ntab: usize,
    ) -> Result<Self, AppError>
    where
        M: Density + 'static,
    {
        if !(omega_min.is_finite() && omega_max.is_finite() && omega_max > omega_min) {
            return Err(AppError::config(format!(
                "Invalid frequency range: OMEGA_MIN={omega_min}, OMEGA_MAX={omega_max} \
                 (must be finite with OMEGA_MAX > OMEGA_MIN)."
            )));
        }
        if ntab < 2 {
            return Err(AppError::config(format!(
                "Default model table needs at least two points, got {ntab}."
            )));
        }

        let mut cdf_table =
            cumulative_trapezoid(|omega| model.density(omega), omega_min, omega_max, ntab);
        let total = cdf_table[ntab - 1];
        if !(total.is_finite() && total > 0.0) {
            return Err(AppError::config(format!(
                "Default model cannot be normalized on [{omega_min}, {omega_max}]: integral is {total}."
            )));
        }
        for value in &mut cdf_table {
            *value /= total;
        }
        tracing::debug!(omega_min, omega_max, ntab, total, "built default model CDF table");

        Ok(Self {
            model: Box::new(model),
            name: "custom".to_string(),
            omega_min,
            omega_max,
            ntab,
            total,
            cdf_table,
        })
    }

    /// Attach a human-readable model name (used in reports and exports).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn omega_min(&self) -> f64 {
        self.omega_min
    }

    pub fn omega_max(&self) -> f64 {
        self.omega_max
    }

    pub fn ntab(&self) -> usize {
        self.ntab
    }

    /// Unnormalized integral of the density over `[omega_min, omega_max]`.
    pub fn norm(&self) -> f64 {
        self.total
    }

    pub fn cdf_table(&self) -> &[f64] {
        &self.cdf_table
    }

    /// Frequency of table entry `index`.
    pub fn table_omega(&self, index: usize) -> f64 {
        self.omega_min + index as f64 * (self.omega_max - self.omega_min) / (self.ntab - 1) as f64
    }

    /// Model density at `omega` (`D(omega)`).
    pub fn density(&self, omega: f64) -> f64 {
        self.model.density(omega)
    }

    /// Frequency at cumulative probability `x` (`0 <= x <= 1`).
    pub fn omega(&self, x: f64) -> Result<f64, AppError> {
        if !(0.0..=1.0).contains(&x) {
            return Err(AppError::domain(format!("parameter x is out of bounds: {x}")));
        }
        let idx = upper_bound(&self.cdf_table, x).min(self.ntab - 1);
        let om1 = self.table_omega(idx - 1);
        let om2 = self.table_omega(idx);
        let x1 = self.cdf_table[idx - 1];
        let x2 = self.cdf_table[idx];
        // Only reachable at x == 1 when the density vanishes on the last cell.
        if x2 == x1 {
            return Ok(om2);
        }
        Ok(interpolate_from_right(x1, om1, x2, om2, x))
    }

    /// Table value at fractional table position `t` (`0 <= t <= 1`).
    pub fn x(&self, t: f64) -> Result<f64, AppError> {
        if !(0.0..=1.0).contains(&t) {
            return Err(AppError::domain(format!("parameter t is out of bounds: {t}")));
        }
        let od = (t * (self.ntab - 1) as f64).floor() as usize;
        if od >= self.ntab - 1 {
            return Ok(1.0);
        }
        let x1 = self.cdf_table[od];
        let x2 = self.cdf_table[od + 1];
        Ok(-(x2 - x1) * ((od + 1) as f64 - t * self.ntab as f64) + x2)
    }
}

impl fmt::Debug for DefaultModelEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultModelEngine")
            .field("name", &self.name)
            .field("omega_min", &self.omega_min)
            .field("omega_max", &self.omega_max)
            .field("ntab", &self.ntab)
            .field("total", &self.total)
            .finish_non_exhaustive()
    }
}
