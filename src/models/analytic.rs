//! Closed-form default models.
//!
//! Each variant is a pure function of a small parameter record. Parameters are
//! read from the store by the selector name used in `DEFAULT_MODEL`-style keys.

use std::f64::consts::PI;

use crate::domain::Params;
use crate::error::AppError;
use crate::models::density::Density;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalyticModel {
    /// Constant density over `[omega_min, omega_max]`.
    Flat { omega_min: f64, omega_max: f64 },
    Gaussian { sigma: f64 },
    ShiftedGaussian { sigma: f64, shift: f64 },
    /// Symmetric pair of Gaussians at `±shift`, each carrying half the weight.
    DoubleGaussian { sigma: f64, shift: f64 },
    /// Gaussian at `+shift` for positive frequencies, its mirror image scaled by
    /// `bose_factor` for the rest.
    GeneralDoubleGaussian { sigma: f64, shift: f64, bose_factor: f64 },
    TwoGaussians {
        sigma1: f64,
        sigma2: f64,
        shift1: f64,
        shift2: f64,
        norm1: f64,
    },
    LinearRiseExpDecay { lambda: f64 },
    QuadraticRiseExpDecay { lambda: f64 },
}

impl AnalyticModel {
    /// Selector strings recognized by [`AnalyticModel::from_params`].
    pub const SELECTORS: [&'static str; 8] = [
        "flat",
        "gaussian",
        "twogaussians",
        "shifted gaussian",
        "double gaussian",
        "general double gaussian",
        "linear rise exp decay",
        "quadratic rise exp decay",
    ];

    /// Build the model named `selector`, or `None` if it is not an analytic form.
    pub fn from_params(
        selector: &str,
        params: &Params,
        omega_min: f64,
        omega_max: f64,
    ) -> Result<Option<Self>, AppError> {
        let model = match selector {
            "flat" => AnalyticModel::Flat { omega_min, omega_max },
            "gaussian" => AnalyticModel::Gaussian {
                sigma: positive(params, "SIGMA")?,
            },
            "shifted gaussian" => AnalyticModel::ShiftedGaussian {
                sigma: positive(params, "SIGMA")?,
                shift: params.require_f64("SHIFT")?,
            },
            "double gaussian" => AnalyticModel::DoubleGaussian {
                sigma: positive(params, "SIGMA")?,
                shift: params.require_f64("SHIFT")?,
            },
            "general double gaussian" => AnalyticModel::GeneralDoubleGaussian {
                sigma: positive(params, "SIGMA")?,
                shift: params.require_f64("SHIFT")?,
                bose_factor: params.require_f64("BOSE_FACTOR")?,
            },
            "twogaussians" => AnalyticModel::TwoGaussians {
                sigma1: positive(params, "SIGMA1")?,
                sigma2: positive(params, "SIGMA2")?,
                shift1: params.f64_or("SHIFT1", 0.0)?,
                shift2: params.require_f64("SHIFT2")?,
                norm1: params.f64_or("NORM1", 0.5)?,
            },
            "linear rise exp decay" => AnalyticModel::LinearRiseExpDecay {
                lambda: positive(params, "LAMBDA")?,
            },
            "quadratic rise exp decay" => AnalyticModel::QuadraticRiseExpDecay {
                lambda: positive(params, "LAMBDA")?,
            },
            _ => return Ok(None),
        };
        Ok(Some(model))
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AnalyticModel::Flat { .. } => "flat",
            AnalyticModel::Gaussian { .. } => "Gaussian",
            AnalyticModel::ShiftedGaussian { .. } => "shifted Gaussian",
            AnalyticModel::DoubleGaussian { .. } => "double Gaussian",
            AnalyticModel::GeneralDoubleGaussian { .. } => "general double Gaussian",
            AnalyticModel::TwoGaussians { .. } => "sum of two Gaussians",
            AnalyticModel::LinearRiseExpDecay { .. } => "linear rise exponential decay",
            AnalyticModel::QuadraticRiseExpDecay { .. } => "quadratic rise exponential decay",
        }
    }
}

impl Density for AnalyticModel {
    fn density(&self, omega: f64) -> f64 {
        match *self {
            AnalyticModel::Flat { omega_min, omega_max } => 1.0 / (omega_max - omega_min),
            AnalyticModel::Gaussian { sigma } => gaussian(omega, sigma),
            AnalyticModel::ShiftedGaussian { sigma, shift } => gaussian(omega - shift, sigma),
            AnalyticModel::DoubleGaussian { sigma, shift } => {
                0.5 * (gaussian(omega - shift, sigma) + gaussian(omega + shift, sigma))
            }
            AnalyticModel::GeneralDoubleGaussian {
                sigma,
                shift,
                bose_factor,
            } => {
                if omega > 0.0 {
                    gaussian(omega - shift, sigma)
                } else {
                    bose_factor * gaussian(-omega - shift, sigma)
                }
            }
            AnalyticModel::TwoGaussians {
                sigma1,
                sigma2,
                shift1,
                shift2,
                norm1,
            } => norm1 * gaussian(omega - shift1, sigma1) + (1.0 - norm1) * gaussian(omega - shift2, sigma2),
            AnalyticModel::LinearRiseExpDecay { lambda } => lambda * lambda * omega * (-lambda * omega).exp(),
            AnalyticModel::QuadraticRiseExpDecay { lambda } => {
                lambda.powi(3) / 2.0 * omega * omega * (-lambda * omega).exp()
            }
        }
    }
}

/// Normalized Gaussian with zero mean.
fn gaussian(omega: f64, sigma: f64) -> f64 {
    (-omega * omega / (2.0 * sigma * sigma)).exp() / ((2.0 * PI).sqrt() * sigma)
}

fn positive(params: &Params, key: &str) -> Result<f64, AppError> {
    let value = params.require_f64(key)?;
    if !(value.is_finite() && value > 0.0) {
        return Err(AppError::config(format!(
            "Parameter `{key}` must be finite and > 0, got {value}."
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::math::cumulative_trapezoid;

    fn integral(model: &AnalyticModel, lo: f64, hi: f64) -> f64 {
        let table = cumulative_trapezoid(|w| model.density(w), lo, hi, 20001);
        table[table.len() - 1]
    }

    #[test]
    fn gaussian_forms_integrate_to_one() {
        let models = [
            AnalyticModel::Gaussian { sigma: 1.5 },
            AnalyticModel::ShiftedGaussian { sigma: 0.7, shift: 2.0 },
            AnalyticModel::DoubleGaussian { sigma: 0.5, shift: 3.0 },
            AnalyticModel::TwoGaussians {
                sigma1: 0.5,
                sigma2: 1.0,
                shift1: -2.0,
                shift2: 2.0,
                norm1: 0.3,
            },
        ];
        for model in models {
            let total = integral(&model, -20.0, 20.0);
            assert!((total - 1.0).abs() < 1e-6, "{}: {total}", model.display_name());
        }
    }

    #[test]
    fn rise_decay_forms_integrate_to_one_on_positive_axis() {
        for model in [
            AnalyticModel::LinearRiseExpDecay { lambda: 2.0 },
            AnalyticModel::QuadraticRiseExpDecay { lambda: 2.0 },
        ] {
            let total = integral(&model, 0.0, 40.0);
            assert!((total - 1.0).abs() < 1e-5, "{}: {total}", model.display_name());
        }
    }

    #[test]
    fn general_double_gaussian_scales_negative_side() {
        let model = AnalyticModel::GeneralDoubleGaussian {
            sigma: 1.0,
            shift: 2.0,
            bose_factor: 0.25,
        };
        let pos = model.density(2.0);
        let neg = model.density(-2.0);
        assert!((neg - 0.25 * pos).abs() < 1e-15);
    }

    #[test]
    fn flat_is_uniform_over_bounds() {
        let model = AnalyticModel::Flat {
            omega_min: -5.0,
            omega_max: 5.0,
        };
        assert_eq!(model.density(-3.0), 0.1);
        assert_eq!(model.density(4.9), 0.1);
    }

    #[test]
    fn selector_reads_parameters() {
        let mut params = Params::new();
        params.set("SIGMA", "2");
        params.set("SHIFT", "1.5");
        let model = AnalyticModel::from_params("shifted gaussian", &params, -10.0, 10.0)
            .unwrap()
            .unwrap();
        assert_eq!(model, AnalyticModel::ShiftedGaussian { sigma: 2.0, shift: 1.5 });
    }

    #[test]
    fn unknown_selector_is_not_analytic() {
        let model = AnalyticModel::from_params("model.dat", &Params::new(), -1.0, 1.0).unwrap();
        assert!(model.is_none());
    }

    #[test]
    fn non_positive_width_is_config_error() {
        let mut params = Params::new();
        params.set("SIGMA", "0");
        let err = AnalyticModel::from_params("gaussian", &params, -1.0, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err.to_string().contains("SIGMA"));
    }
}
