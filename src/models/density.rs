//! The capability every default model provides: a density at a frequency.

/// A prior probability density over the real frequency axis.
///
/// Implementations are pure: evaluating the same `omega` twice yields the same
/// value, and evaluation never mutates the model.
pub trait Density: Send + Sync {
    fn density(&self, omega: f64) -> f64;
}
