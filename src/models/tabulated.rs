//! Default model given as a table of `(omega, value)` samples.
//!
//! Inside the tabulated range the density is linearly interpolated; outside it
//! is exactly zero (no extrapolation).

use std::path::Path;

use crate::error::AppError;
use crate::io::table::{TableColumns, read_table};
use crate::math::{interpolate_from_right, upper_bound};
use crate::models::density::Density;

#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedFunction {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl TabulatedFunction {
    /// Build from index-aligned columns.
    ///
    /// `xs` must be strictly increasing and hold at least two samples.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, AppError> {
        if xs.len() != ys.len() {
            return Err(AppError::data(format!(
                "Tabulated model has {} x values but {} y values.",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(AppError::data(format!(
                "Tabulated model needs at least two rows, got {}.",
                xs.len()
            )));
        }
        if let Some(pos) = xs.iter().chain(ys.iter()).position(|v| !v.is_finite()) {
            return Err(AppError::data(format!(
                "Tabulated model contains a non-finite value (entry {pos})."
            )));
        }
        if let Some(i) = xs.windows(2).position(|w| w[1] <= w[0]) {
            return Err(AppError::data(format!(
                "Tabulated model must be sorted by strictly increasing x: row {} ({}) follows {}.",
                i + 2,
                xs[i + 1],
                xs[i]
            )));
        }
        Ok(Self { xs, ys })
    }

    /// Load a table file.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let TableColumns { xs, ys } = read_table(path)?;
        Self::new(xs, ys).map_err(|e| {
            AppError::data(format!("Default model file '{}': {e}", path.display()))
        })
    }

    /// Load a table file and compare its range against the expected bounds.
    ///
    /// A mismatch is only reported as a warning; the table is still used.
    pub fn from_file_with_bounds(
        path: &Path,
        omega_min: f64,
        omega_max: f64,
    ) -> Result<Self, AppError> {
        let table = Self::from_file(path)?;
        if !table.matches_bounds(omega_min, omega_max) {
            tracing::warn!(
                file = %path.display(),
                table_min = table.min_x(),
                table_max = table.max_x(),
                omega_min,
                omega_max,
                "tabulated default model range differs from OMEGA_MIN/OMEGA_MAX"
            );
        }
        Ok(table)
    }

    pub fn matches_bounds(&self, omega_min: f64, omega_max: f64) -> bool {
        self.min_x() == omega_min && self.max_x() == omega_max
    }

    pub fn min_x(&self) -> f64 {
        self.xs[0]
    }

    pub fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Interpolated value at `x`; zero outside `[xs[0], xs[last]]`.
    pub fn evaluate(&self, x: f64) -> f64 {
        if x < self.min_x() || x > self.max_x() {
            return 0.0;
        }
        // At x == xs[last] nothing is strictly greater; use the final segment.
        let i = upper_bound(&self.xs, x).min(self.xs.len() - 1);
        interpolate_from_right(self.xs[i - 1], self.ys[i - 1], self.xs[i], self.ys[i], x)
    }
}

impl Density for TabulatedFunction {
    fn density(&self, omega: f64) -> f64 {
        self.evaluate(omega)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;

    fn table() -> TabulatedFunction {
        TabulatedFunction::new(vec![-2.0, -0.5, 1.0, 4.0], vec![0.1, 0.7, 0.3, 0.05]).unwrap()
    }

    #[test]
    fn zero_strictly_outside_range() {
        let f = table();
        assert_eq!(f.evaluate(-2.000001), 0.0);
        assert_eq!(f.evaluate(4.000001), 0.0);
        assert_eq!(f.evaluate(-1e6), 0.0);
        assert_eq!(f.evaluate(1e6), 0.0);
    }

    #[test]
    fn breakpoints_reproduce_samples_exactly() {
        let f = table();
        for (x, y) in f.xs().iter().zip(f.ys()) {
            assert_eq!(f.evaluate(*x), *y, "breakpoint {x}");
        }
    }

    #[test]
    fn interior_is_linear() {
        let f = TabulatedFunction::new(vec![0.0, 1.0], vec![0.0, 2.0]).unwrap();
        assert_eq!(f.evaluate(0.5), 1.0);
        assert!((f.evaluate(0.25) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn rejects_unsorted_or_short_tables() {
        let err = TabulatedFunction::new(vec![0.0, 0.0], vec![1.0, 1.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Data);
        let err = TabulatedFunction::new(vec![0.0], vec![1.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Data);
        let err = TabulatedFunction::new(vec![0.0, 1.0], vec![1.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Data);
    }

    #[test]
    fn loads_two_point_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# omega value").unwrap();
        writeln!(file, "0 0").unwrap();
        writeln!(file, "1 2").unwrap();
        let f = TabulatedFunction::from_file(file.path()).unwrap();
        assert_eq!(f.evaluate(0.5), 1.0);
    }

    #[test]
    fn bounds_mismatch_only_warns() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "-1 0.5\n1 0.5").unwrap();
        let f = TabulatedFunction::from_file_with_bounds(file.path(), -2.0, 2.0).unwrap();
        assert!(!f.matches_bounds(-2.0, 2.0));
        assert!(f.matches_bounds(-1.0, 1.0));
        assert_eq!(f.evaluate(0.0), 0.5);
    }
}
