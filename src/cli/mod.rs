//! Command-line parsing for the default-model and frequency-grid tool.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! numerical code: every subcommand resolves to a parameter store first.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "mxprior", version, about = "Maximum-entropy default models and frequency grids")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the frequency grid and print its points.
    Grid(GridArgs),
    /// Build the default model and print omega(x) and D(omega) on a quantile table.
    Model(ModelArgs),
    /// Draw frequencies from the default model by inverse-CDF sampling.
    Sample(SampleArgs),
    /// List the available frequency grids and their parameters.
    Grids,
}

/// Where parameters come from.
///
/// Precedence: `--set` > `MAXENT_*` environment variables (and `.env`) > parameter file.
#[derive(Debug, Args, Clone)]
pub struct ParamArgs {
    /// Parameter file with `KEY = value` lines.
    #[arg(short = 'p', long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Override a parameter, e.g. `--set NFREQ=200` (repeatable).
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

#[derive(Debug, Args, Clone)]
pub struct GridArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Export the grid to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct ModelArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Parameter holding the model selector (or tabulated model path).
    #[arg(long, default_value = "DEFAULT_MODEL")]
    pub key: String,

    /// Number of equally spaced cumulative probabilities to tabulate.
    #[arg(short = 'n', long, default_value_t = 21)]
    pub points: usize,

    /// Export the table to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct SampleArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Parameter holding the model selector (or tabulated model path).
    #[arg(long, default_value = "DEFAULT_MODEL")]
    pub key: String,

    /// Number of frequencies to draw.
    #[arg(short = 'n', long, default_value_t = 10_000)]
    pub count: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}
