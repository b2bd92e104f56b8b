//! Read/write grid and model JSON files.
//!
//! These are portable snapshots for plotting or for comparing settings:
//! - grid JSON: scheme, `nfreq` and the points on [0,1]
//! - model JSON: model name, frequency range and `(x, omega(x), D(omega(x)))` rows
//!
//! The schemas are defined by `domain::GridFile` and `domain::ModelFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{GridFile, ModelFile, ModelPoint};
use crate::error::AppError;
use crate::grid::GridMapper;
use crate::models::DefaultModelEngine;

const TOOL: &str = "mxprior";

pub fn grid_file(mapper: &GridMapper) -> GridFile {
    GridFile {
        tool: TOOL.to_string(),
        scheme: mapper.scheme(),
        nfreq: mapper.nfreq(),
        t: mapper.t_array().to_vec(),
    }
}

/// Sample the model on `n` equally spaced cumulative probabilities.
pub fn model_file(engine: &DefaultModelEngine, n: usize) -> Result<ModelFile, AppError> {
    Ok(ModelFile {
        tool: TOOL.to_string(),
        model: engine.name().to_string(),
        omega_min: engine.omega_min(),
        omega_max: engine.omega_max(),
        points: quantile_points(engine, n)?,
    })
}

/// `(x, omega(x), D(omega(x)))` for `n` equally spaced `x` in [0,1].
pub fn quantile_points(engine: &DefaultModelEngine, n: usize) -> Result<Vec<ModelPoint>, AppError> {
    let n = n.max(2);
    (0..n)
        .map(|i| {
            let x = i as f64 / (n as f64 - 1.0);
            let omega = engine.omega(x)?;
            Ok::<_, AppError>(ModelPoint {
                x,
                omega,
                density: engine.density(omega),
            })
        })
        .collect()
}

pub fn write_grid_json(path: &Path, mapper: &GridMapper) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::config(format!("Failed to create grid JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, &grid_file(mapper))
        .map_err(|e| AppError::data(format!("Failed to write grid JSON: {e}")))?;
    Ok(())
}

pub fn write_model_json(path: &Path, engine: &DefaultModelEngine, n: usize) -> Result<(), AppError> {
    let model = model_file(engine, n)?;
    let file = File::create(path)
        .map_err(|e| AppError::config(format!("Failed to create model JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, &model)
        .map_err(|e| AppError::data(format!("Failed to write model JSON: {e}")))?;
    Ok(())
}
