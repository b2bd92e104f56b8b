//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves parameters (file, environment, overrides)
//! - builds the frequency grid or default model
//! - prints reports and writes optional exports

use clap::Parser;

use crate::cli::{Command, GridArgs, ModelArgs, SampleArgs};
use crate::error::AppError;
use crate::grid::GridMapper;
use crate::models::build_default_model;
use crate::report::SampleSummary;

pub mod pipeline;

/// Entry point for the `mxprior` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Grid(args) => handle_grid(args),
        Command::Model(args) => handle_model(args),
        Command::Sample(args) => handle_sample(args),
        Command::Grids => {
            print!("{}", crate::report::format_grid_help());
            Ok(())
        }
    }
}

fn handle_grid(args: GridArgs) -> Result<(), AppError> {
    let params = pipeline::load_params(&args.params)?;
    let mapper = GridMapper::from_params(&params)?;

    print!("{}", crate::report::format_grid(&mapper));

    if let Some(path) = &args.export {
        crate::io::export::write_grid_json(path, &mapper)?;
    }
    Ok(())
}

fn handle_model(args: ModelArgs) -> Result<(), AppError> {
    let params = pipeline::load_params(&args.params)?;
    let engine = build_default_model(&params, &args.key)?;
    let points = crate::io::export::quantile_points(&engine, args.points)?;

    print!("{}", crate::report::format_model_table(&engine, &points));

    if let Some(path) = &args.export {
        crate::io::export::write_model_json(path, &engine, args.points)?;
    }
    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let params = pipeline::load_params(&args.params)?;
    let engine = build_default_model(&params, &args.key)?;
    let samples = pipeline::draw_samples(&engine, args.count, args.seed)?;

    let summary = SampleSummary::from_values(&samples)
        .ok_or_else(|| AppError::config("Sample count must be > 0."))?;
    print!("{}", crate::report::format_sample_summary(&engine, &summary, args.seed));
    Ok(())
}
