//! Shared construction logic used by every subcommand.
//!
//! parameters -> (grid | default model) -> optional inverse-CDF samples

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::cli::ParamArgs;
use crate::domain::Params;
use crate::error::AppError;
use crate::models::DefaultModelEngine;

/// Prefix of environment variables that override parameters.
pub const ENV_PREFIX: &str = "MAXENT_";

/// Resolve the parameter store for a run.
pub fn load_params(args: &ParamArgs) -> Result<Params, AppError> {
    let params = match &args.params {
        Some(path) => Params::from_file(path)?,
        None => Params::new(),
    };
    let mut params = params.with_env_overrides(ENV_PREFIX);
    for assignment in &args.overrides {
        params.set_assignment(assignment)?;
    }
    Ok(params)
}

/// Draw `count` frequencies by pushing uniform variates through `omega(x)`.
pub fn draw_samples(engine: &DefaultModelEngine, count: usize, seed: u64) -> Result<Vec<f64>, AppError> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| engine.omega(rng.r#gen::<f64>())).collect()
}
