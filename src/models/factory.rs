//! Default model construction from parameters.

use std::path::Path;

use crate::domain::Params;
use crate::error::AppError;
use crate::models::analytic::AnalyticModel;
use crate::models::engine::DefaultModelEngine;
use crate::models::tabulated::TabulatedFunction;

/// Selector used when the model key is absent.
pub const DEFAULT_MODEL_SELECTOR: &str = "flat";

/// Frequency bounds from `OMEGA_MAX` (required) and `OMEGA_MIN` (default `-OMEGA_MAX`).
pub fn omega_bounds(params: &Params) -> Result<(f64, f64), AppError> {
    let omega_max = params.require_f64("OMEGA_MAX")?;
    let omega_min = params.f64_or("OMEGA_MIN", -omega_max)?;
    Ok((omega_min, omega_max))
}

/// Build the default model selected by `params[key_name]`.
///
/// Recognized selectors are the analytic forms in [`AnalyticModel::SELECTORS`];
/// any other value is taken as the path of a tabulated model file.
pub fn build_default_model(params: &Params, key_name: &str) -> Result<DefaultModelEngine, AppError> {
    let (omega_min, omega_max) = omega_bounds(params)?;
    let selector = params.str_or(key_name, DEFAULT_MODEL_SELECTOR);

    match AnalyticModel::from_params(selector, params, omega_min, omega_max)? {
        Some(model) => {
            tracing::info!(model = model.display_name(), omega_min, omega_max, "using analytic default model");
            let name = model.display_name();
            Ok(DefaultModelEngine::new(model, omega_min, omega_max)?.with_name(name))
        }
        None => {
            tracing::info!(file = selector, omega_min, omega_max, "using tabulated default model");
            let table = TabulatedFunction::from_file_with_bounds(Path::new(selector), omega_min, omega_max)?;
            Ok(DefaultModelEngine::new(table, omega_min, omega_max)?.with_name(format!("tabulated ({selector})")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;

    #[test]
    fn flat_is_the_default_selector() {
        let mut params = Params::new();
        params.set("OMEGA_MAX", "5");
        let engine = build_default_model(&params, "DEFAULT_MODEL").unwrap();
        assert_eq!(engine.name(), "flat");
        assert_eq!(engine.omega_min(), -5.0);
        assert!((engine.omega(0.5).unwrap()).abs() < 1e-9);
    }

    #[test]
    fn omega_min_overrides_symmetric_default() {
        let mut params = Params::new();
        params.set("OMEGA_MAX", "10");
        params.set("OMEGA_MIN", "0");
        assert_eq!(omega_bounds(&params).unwrap(), (0.0, 10.0));
    }

    #[test]
    fn missing_omega_max_is_config_error() {
        let err = build_default_model(&Params::new(), "DEFAULT_MODEL").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err.to_string().contains("OMEGA_MAX"));
    }

    #[test]
    fn dispatches_analytic_selectors() {
        let mut params = Params::new();
        params.set("OMEGA_MAX", "10");
        params.set("OMEGA_MIN", "0");
        params.set("DEFAULT_MODEL", "linear rise exp decay");
        params.set("LAMBDA", "1.5");
        let engine = build_default_model(&params, "DEFAULT_MODEL").unwrap();
        assert_eq!(engine.name(), "linear rise exponential decay");
        assert_eq!(engine.density(0.0), 0.0);
    }

    #[test]
    fn other_selectors_load_a_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "-2 0\n0 1\n2 0").unwrap();

        let mut params = Params::new();
        params.set("OMEGA_MAX", "2");
        params.set("MODEL", file.path().display().to_string());
        let engine = build_default_model(&params, "MODEL").unwrap();
        assert!(engine.name().starts_with("tabulated"));
        assert_eq!(engine.density(0.0), 1.0);
        assert!(engine.omega(0.5).unwrap().abs() < 1e-9);
    }

    #[test]
    fn unreadable_table_path_is_config_error() {
        let mut params = Params::new();
        params.set("OMEGA_MAX", "2");
        params.set("MODEL", "no-such-model-file.dat");
        let err = build_default_model(&params, "MODEL").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
