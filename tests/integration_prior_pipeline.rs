//! Integration tests for the default-model and frequency-grid pipeline.
//!
//! Coverage
//! --------
//! - parameter file -> `build_default_model` -> inverse-CDF queries, for an
//!   analytic model and for a tabulated model file
//! - parameter file -> `GridMapper` for every grid scheme
//! - JSON export of a model table
//!
//! Exclusions
//! ----------
//! - Formula-level checks of individual schemes and of the CDF table; those are
//!   covered by unit tests next to the code.
use std::io::Write;
use std::path::Path;

use maxent_prior::domain::{GridScheme, Params};
use maxent_prior::error::ErrorKind;
use maxent_prior::grid::GridMapper;
use maxent_prior::io::export::{model_file, write_model_json};
use maxent_prior::models::build_default_model;

fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn gaussian_model_from_parameter_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "in.param",
        "# default model\nOMEGA_MAX = 8\nDEFAULT_MODEL = \"shifted gaussian\"\nSIGMA = 0.5\nSHIFT = 1\n",
    );
    let params = Params::from_file(&path).unwrap();
    let engine = build_default_model(&params, "DEFAULT_MODEL").unwrap();

    assert_eq!(engine.omega_min(), -8.0);
    assert!((engine.omega(0.5).unwrap() - 1.0).abs() < 1e-4);
    assert!((engine.norm() - 1.0).abs() < 1e-6);

    let mut prev = f64::NEG_INFINITY;
    for k in 0..=200 {
        let omega = engine.omega(k as f64 / 200.0).unwrap();
        assert!(omega >= prev);
        prev = omega;
    }
    assert_eq!(engine.omega(1.01).unwrap_err().kind(), ErrorKind::Domain);
    assert_eq!(engine.omega(-0.01).unwrap_err().kind(), ErrorKind::Domain);
}

#[test]
fn tabulated_model_from_parameter_file() {
    let dir = tempfile::tempdir().unwrap();
    let table = write_file(dir.path(), "model.dat", "# omega D\n0 0\n1 2\n");
    let mut params = Params::new();
    params.set("OMEGA_MIN", "0");
    params.set("OMEGA_MAX", "1");
    params.set("DEFAULT_MODEL", table.display().to_string());

    let engine = build_default_model(&params, "DEFAULT_MODEL").unwrap();
    assert_eq!(engine.density(0.5), 1.0);
    assert_eq!(engine.density(1.5), 0.0);
    // CDF of a linear ramp is omega^2, so the median sits at 1/sqrt(2).
    assert!((engine.omega(0.5).unwrap() - 0.5f64.sqrt()).abs() < 1e-4);
}

#[test]
fn tabulated_model_with_other_bounds_still_builds() {
    let dir = tempfile::tempdir().unwrap();
    let table = write_file(dir.path(), "narrow.dat", "-1 1\n1 1\n");
    let mut params = Params::new();
    params.set("OMEGA_MAX", "2");
    params.set("DEFAULT_MODEL", table.display().to_string());

    let engine = build_default_model(&params, "DEFAULT_MODEL").unwrap();
    assert!((engine.omega(0.5).unwrap()).abs() < 1e-9);
}

#[test]
fn every_grid_scheme_from_parameters() {
    for scheme in GridScheme::ALL {
        let mut params = Params::new();
        params.set("NFREQ", "300");
        params.set("FREQUENCY_GRID", scheme.display_name().to_uppercase());
        let mapper = GridMapper::from_params(&params).unwrap();
        let t = mapper.t_array();
        assert_eq!(mapper.scheme(), scheme);
        assert_eq!(t.len(), 301);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[300], 1.0);
        assert!(t.windows(2).all(|w| w[1] > w[0]), "{scheme:?}");
        assert_eq!(mapper.map(301).unwrap_err().kind(), ErrorKind::Domain);
    }
}

#[test]
fn invalid_grid_parameters_fail_construction() {
    let mut params = Params::new();
    params.set("FREQUENCY_GRID", "quadratic");
    params.set("SPREAD", "0.5");
    assert_eq!(GridMapper::from_params(&params).unwrap_err().kind(), ErrorKind::Config);

    params.set("FREQUENCY_GRID", "chebyshev");
    assert_eq!(GridMapper::from_params(&params).unwrap_err().kind(), ErrorKind::Config);
}

#[test]
fn model_table_export() {
    let dir = tempfile::tempdir().unwrap();
    let mut params = Params::new();
    params.set("OMEGA_MAX", "5");
    let engine = build_default_model(&params, "DEFAULT_MODEL").unwrap();

    let path = dir.path().join("model.json");
    write_model_json(&path, &engine, 11).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"model\": \"flat\""));

    let table = model_file(&engine, 11).unwrap();
    assert!((table.points[5].omega).abs() < 1e-9);
    assert!((table.points[10].omega - 5.0).abs() < 1e-9);
}
