//! Formatted terminal output for grids, default models and samples.
//!
//! Formatting lives here so the numerical modules stay free of presentation
//! details and the binary only prints strings.

use crate::domain::{GridScheme, ModelPoint};
use crate::grid::GridMapper;
use crate::models::DefaultModelEngine;

/// Summary statistics of frequencies drawn from a default model.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSummary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl SampleSummary {
    /// `None` for an empty sample.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            count: values.len(),
            mean,
            std_dev: var.sqrt(),
            min,
            max,
        })
    }
}

/// Grid header plus one `index  t` line per point.
pub fn format_grid(mapper: &GridMapper) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "=== frequency grid: {} (nfreq={}) ===\n",
        mapper.scheme().display_name(),
        mapper.nfreq()
    ));
    for (i, t) in mapper.t_array().iter().enumerate() {
        out.push_str(&format!("{i:>6}  {t:.12}\n"));
    }
    out
}

/// Model header plus a `x  omega(x)  D(omega)` table.
pub fn format_model_table(engine: &DefaultModelEngine, points: &[ModelPoint]) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== default model: {} ===\n", engine.name()));
    out.push_str(&format!(
        "omega: [{}, {}] | table points: {} | integral: {:.6e}\n\n",
        engine.omega_min(),
        engine.omega_max(),
        engine.ntab(),
        engine.norm()
    ));
    out.push_str(&format!("{:>10}  {:>16}  {:>16}\n", "x", "omega(x)", "D(omega)"));
    for p in points {
        out.push_str(&format!("{:>10.6}  {:>16.8}  {:>16.8e}\n", p.x, p.omega, p.density));
    }
    out
}

pub fn format_sample_summary(engine: &DefaultModelEngine, summary: &SampleSummary, seed: u64) -> String {
    format!(
        "=== samples from {} (seed={seed}) ===\n\
         n={} | mean={:.6} | std={:.6} | min={:.6} | max={:.6}\n",
        engine.name(),
        summary.count,
        summary.mean,
        summary.std_dev,
        summary.min,
        summary.max
    )
}

/// Available grid schemes and the parameter each one reads.
pub fn format_grid_help() -> String {
    let mut out = String::new();
    out.push_str("Grid help - real frequency omega grid choices for A(omega)\n\n");
    out.push_str(&format!("{:<15}\t{}\n", "Grid Name", "option=default"));
    out.push_str(&format!("{:<15}\t{}\n", "=========", "=============="));
    for scheme in GridScheme::ALL {
        let option = match scheme.parameter() {
            Some((key, default)) => format!("{key}={default}"),
            None => "---".to_string(),
        };
        out.push_str(&format!("{:<15}\t{option}\n", scheme.display_name()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::FrequencyGrid;

    #[test]
    fn grid_listing_has_one_line_per_point() {
        let mapper = GridMapper::new(4, FrequencyGrid::Linear).unwrap();
        let text = format_grid(&mapper);
        assert!(text.starts_with("=== frequency grid: linear (nfreq=4) ==="));
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("0.750000000000"));
    }

    #[test]
    fn grid_help_lists_every_scheme() {
        let text = format_grid_help();
        for scheme in GridScheme::ALL {
            assert!(text.contains(scheme.display_name()));
        }
        assert!(text.contains("SPREAD=4"));
        assert!(text.contains("LOG_MIN=0.0001"));
    }

    #[test]
    fn sample_summary_statistics() {
        let summary = SampleSummary::from_values(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(summary.count, 4);
        assert_eq!(summary.mean, 2.5);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 4.0);
        assert!((summary.std_dev - 1.25f64.sqrt()).abs() < 1e-15);
        assert!(SampleSummary::from_values(&[]).is_none());
    }
}
