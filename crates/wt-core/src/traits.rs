//! Core traits for waitstat
//!
//! The likelihood core is consumed by external drivers (MCMC samplers,
//! optimizers) through the [`LogDensityModel`] trait, so those drivers never
//! depend on a concrete likelihood implementation.

use crate::Result;

/// Log-density model trait - the seam an external sampler drives.
///
/// Implementations must be safe to call concurrently from multiple chains:
/// `logp` takes `&self` and must not mutate shared state.
pub trait LogDensityModel: Send + Sync {
    /// Number of free parameters.
    fn dim(&self) -> usize;

    /// Stable parameter names, in vector order.
    fn parameter_names(&self) -> Vec<String>;

    /// Parameter bounds (min, max), in vector order.
    fn parameter_bounds(&self) -> Vec<(f64, f64)>;

    /// Suggested initial parameter values, in vector order.
    fn parameter_init(&self) -> Vec<f64>;

    /// Log-density at `params`.
    ///
    /// Errors only on a malformed parameter vector (wrong length).
    /// Numerically degenerate parameter points must degrade to a finite
    /// value inside the model instead of surfacing an error.
    fn logp(&self, params: &[f64]) -> Result<f64>;
}
