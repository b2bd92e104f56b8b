//! Named parameter store.
//!
//! Parameters are kept as raw strings and converted on access, so the same store
//! can serve numeric keys (`OMEGA_MAX`, `NFREQ`, ...) and string keys
//! (`FREQUENCY_GRID`, the default-model selector).
//!
//! Sources, in increasing precedence:
//!
//! - a parameter file (`KEY = value` per line, `#` comments)
//! - environment variables with a prefix (e.g. `MAXENT_OMEGA_MAX`), `.env` honored
//! - explicit `set` calls (the CLI's `--set KEY=VALUE`)

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: BTreeMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a parameter file.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!(
                "Failed to read parameter file '{}': {e}",
                path.display()
            ))
        })?;
        Self::parse(&text)
    }

    /// Parse parameter text (`KEY = value` lines).
    pub fn parse(text: &str) -> Result<Self, AppError> {
        let mut params = Self::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            params.set_assignment(line).map_err(|e| {
                AppError::config(format!("Parameter line {}: {e}", idx + 1))
            })?;
        }
        Ok(params)
    }

    /// Apply a single `KEY=VALUE` assignment.
    pub fn set_assignment(&mut self, assignment: &str) -> Result<(), AppError> {
        let Some((key, value)) = assignment.split_once('=') else {
            return Err(AppError::config(format!(
                "Expected `KEY = value`, got `{assignment}`."
            )));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::config(format!(
                "Missing parameter name in `{assignment}`."
            )));
        }
        self.set(key, unquote(value.trim()));
        Ok(())
    }

    /// Overlay `PREFIX_KEY` environment variables (after loading `.env`).
    pub fn with_env_overrides(mut self, prefix: &str) -> Self {
        dotenvy::dotenv().ok();
        for (name, value) in std::env::vars() {
            if let Some(key) = name.strip_prefix(prefix) {
                if !key.is_empty() {
                    self.set(key, value);
                }
            }
        }
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn require_f64(&self, key: &str) -> Result<f64, AppError> {
        match self.get(key) {
            Some(raw) => parse_value(key, raw),
            None => Err(AppError::config(format!(
                "Missing required parameter `{key}`."
            ))),
        }
    }

    pub fn f64_or(&self, key: &str, default: f64) -> Result<f64, AppError> {
        self.get(key)
            .map_or(Ok(default), |raw| parse_value(key, raw))
    }

    pub fn usize_or(&self, key: &str, default: usize) -> Result<usize, AppError> {
        self.get(key)
            .map_or(Ok(default), |raw| parse_value(key, raw))
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| {
        AppError::config(format!("Invalid value for `{key}`: `{raw}` ({e})."))
    })
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
