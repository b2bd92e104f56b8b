//! Frequency grid generation on [0,1].
//!
//! Each scheme produces `nfreq + 1` strictly increasing points with `t[0] == 0`
//! and `t[nfreq] == 1`. The points are later mapped to physical frequencies by
//! the reconstruction's quadrature stage; here they only encode *where* the
//! resolution goes.
//!
//! - `linear`: uniform spacing
//! - `log`: exponential spacing away from 0.5 (dense in the middle)
//! - `quadratic`: parabolic step sizes, `spread` = largest/smallest step ratio
//! - `lorentzian`: tangent warp, dense in the middle, `cut` trims the poles
//! - `half lorentzian`: upper half of the tangent warp, dense near 0

use std::f64::consts::PI;

use crate::domain::{GridScheme, Params};
use crate::error::AppError;

pub const DEFAULT_NFREQ: usize = 1000;
pub const DEFAULT_FREQUENCY_GRID: &str = "Lorentzian";
pub const DEFAULT_CUT: f64 = 0.01;
pub const DEFAULT_SPREAD: f64 = 4.0;
pub const DEFAULT_LOG_MIN: f64 = 1.0e-4;

/// A warping scheme together with its parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrequencyGrid {
    Linear,
    Log { t_min: f64 },
    Quadratic { spread: f64 },
    Lorentzian { cut: f64 },
    HalfLorentzian { cut: f64 },
}

impl FrequencyGrid {
    /// Resolve `FREQUENCY_GRID` and the matching parameter (`LOG_MIN`, `SPREAD`, `CUT`).
    pub fn from_params(params: &Params) -> Result<Self, AppError> {
        let scheme = GridScheme::from_name(params.str_or("FREQUENCY_GRID", DEFAULT_FREQUENCY_GRID))?;
        let grid = match scheme {
            GridScheme::Linear => FrequencyGrid::Linear,
            GridScheme::Log => FrequencyGrid::Log {
                t_min: params.f64_or("LOG_MIN", DEFAULT_LOG_MIN)?,
            },
            GridScheme::Quadratic => FrequencyGrid::Quadratic {
                spread: params.f64_or("SPREAD", DEFAULT_SPREAD)?,
            },
            GridScheme::Lorentzian => FrequencyGrid::Lorentzian {
                cut: params.f64_or("CUT", DEFAULT_CUT)?,
            },
            GridScheme::HalfLorentzian => FrequencyGrid::HalfLorentzian {
                cut: params.f64_or("CUT", DEFAULT_CUT)?,
            },
        };
        Ok(grid)
    }

    pub fn scheme(&self) -> GridScheme {
        match self {
            FrequencyGrid::Linear => GridScheme::Linear,
            FrequencyGrid::Log { .. } => GridScheme::Log,
            FrequencyGrid::Quadratic { .. } => GridScheme::Quadratic,
            FrequencyGrid::Lorentzian { .. } => GridScheme::Lorentzian,
            FrequencyGrid::HalfLorentzian { .. } => GridScheme::HalfLorentzian,
        }
    }

    /// Generate the `nfreq + 1` grid points.
    pub fn points(&self, nfreq: usize) -> Result<Vec<f64>, AppError> {
        if nfreq == 0 {
            return Err(AppError::config("NFREQ must be > 0."));
        }
        let t = match *self {
            FrequencyGrid::Linear => linear_map(nfreq),
            FrequencyGrid::Log { t_min } => {
                // The odd-count extra point lies beyond 1 (t[nfreq - 1] is already 1).
                if nfreq % 2 != 0 {
                    return Err(AppError::config(format!(
                        "The log grid needs an even NFREQ, got {nfreq}."
                    )));
                }
                log_map(nfreq, t_min)?
            }
            FrequencyGrid::Quadratic { spread } => quadratic_map(nfreq, spread)?,
            FrequencyGrid::Lorentzian { cut } => lorentzian_map(nfreq, cut)?,
            FrequencyGrid::HalfLorentzian { cut } => half_lorentzian_map(nfreq, cut)?,
        };
        ensure_strictly_increasing(&t, self.scheme())?;
        Ok(t)
    }
}

/// `t[i] = i / nfreq`.
pub fn linear_map(nfreq: usize) -> Vec<f64> {
    (0..=nfreq).map(|i| i as f64 / nfreq as f64).collect()
}

/// Symmetric exponential spacing around 0.5.
///
/// `t[nfreq/2] = 0.5`, the innermost half-steps are `t_min` and the points at
/// distance `nfreq/2` from the middle land on 0 and 1. For odd `nfreq` the last
/// point is extrapolated with exponent `nfreq/2` (not rounded) and ends above 1;
/// `FrequencyGrid::points` only accepts even counts.
pub fn log_map(nfreq: usize, t_min: f64) -> Result<Vec<f64>, AppError> {
    if nfreq < 4 {
        return Err(AppError::config(format!(
            "The log grid needs NFREQ >= 4, got {nfreq}."
        )));
    }
    if !(t_min.is_finite() && t_min > 0.0 && t_min < 0.5) {
        return Err(AppError::config(format!(
            "LOG_MIN must satisfy 0 < LOG_MIN < 0.5, got {t_min}."
        )));
    }

    let half = nfreq / 2;
    let scale = (0.5 / t_min).ln() / (half - 1) as f64;
    let mut t = vec![0.0; nfreq + 1];
    t[half] = 0.5;
    for i in 0..half {
        let offset = t_min * (i as f64 * scale).exp();
        t[half + i + 1] = 0.5 + offset;
        t[half - i - 1] = 0.5 - offset;
    }

    if nfreq % 2 != 0 {
        t[nfreq] = 0.5 + t_min * (nfreq as f64 / 2.0 * scale).exp();
    } else {
        // Both ends are 0.5 ± t_min * (0.5 / t_min) up to rounding.
        t[0] = 0.0;
        t[nfreq] = 1.0;
    }
    Ok(t)
}

/// Cumulative parabolic step sizes, normalized to end at 1.
///
/// The step at relative position `a` is proportional to
/// `4 (spread - 1) (a² - a) + spread`: `spread` at both ends, 1 in the middle.
pub fn quadratic_map(nfreq: usize, spread: f64) -> Result<Vec<f64>, AppError> {
    if !spread.is_finite() || spread < 1.0 {
        return Err(AppError::config(format!(
            "the parameter SPREAD must be greater than 1, got {spread}."
        )));
    }
    if nfreq < 3 {
        return Err(AppError::config(format!(
            "The quadratic grid needs NFREQ >= 3, got {nfreq}."
        )));
    }

    let cumulative = quadratic_cumulative(nfreq, spread);
    let total = cumulative[nfreq - 1];
    let mut t = Vec::with_capacity(nfreq + 1);
    t.push(0.0);
    t.extend(cumulative.iter().map(|c| c / total));
    Ok(t)
}

fn quadratic_cumulative(nfreq: usize, spread: f64) -> Vec<f64> {
    let n1 = (nfreq - 1) as f64;
    let norm = n1 / (3.0 * (nfreq - 2) as f64) * (n1 * (2.0 + spread) - 4.0 + spread);

    let mut cumulative = Vec::with_capacity(nfreq);
    let mut sum = 0.0;
    for i in 0..nfreq {
        let a = i as f64 / n1;
        sum += (4.0 * (spread - 1.0) * (a * a - a) + spread) / norm;
        cumulative.push(sum);
    }
    cumulative
}

/// Tangent warp over the full interval, dense around 0.5.
pub fn lorentzian_map(nfreq: usize, cut: f64) -> Result<Vec<f64>, AppError> {
    validate_cut(cut)?;
    let mut t: Vec<f64> = (0..=nfreq)
        .map(|i| tangent_warp(i as f64 / nfreq as f64, cut))
        .collect();
    rescale_to_unit(&mut t);
    Ok(t)
}

/// Upper half of the tangent warp, dense near 0.
pub fn half_lorentzian_map(nfreq: usize, cut: f64) -> Result<Vec<f64>, AppError> {
    validate_cut(cut)?;
    let denom = (2 * nfreq - 1) as f64;
    let mut t: Vec<f64> = (0..=nfreq)
        .map(|i| tangent_warp((i + nfreq) as f64 / denom, cut))
        .collect();
    rescale_to_unit(&mut t);
    Ok(t)
}

fn tangent_warp(u: f64, cut: f64) -> f64 {
    (PI * (u * (1.0 - 2.0 * cut) + cut - 0.5)).tan()
}

fn validate_cut(cut: f64) -> Result<(), AppError> {
    if !(cut.is_finite() && cut > 0.0 && cut < 0.5) {
        return Err(AppError::config(format!(
            "CUT must satisfy 0 < CUT < 0.5, got {cut}."
        )));
    }
    Ok(())
}

/// Affine map sending the first element to 0 and the last to 1.
fn rescale_to_unit(t: &mut [f64]) {
    let first = t[0];
    let span = t[t.len() - 1] - first;
    for v in t.iter_mut() {
        *v = (*v - first) / span;
    }
}

fn ensure_strictly_increasing(t: &[f64], scheme: GridScheme) -> Result<(), AppError> {
    match t.windows(2).position(|w| !(w[1] > w[0])) {
        None => Ok(()),
        Some(i) => Err(AppError::config(format!(
            "The {} grid is not strictly increasing at point {} for these parameters \
             (try a larger NFREQ or CUT).",
            scheme.display_name(),
            i + 1
        ))),
    }
}
