//! # wt-likelihood
//!
//! Log-likelihood for a renewal point process of rare, bursty events (e.g.
//! astrophysical transients) observed through disjoint windows.
//!
//! Inter-event waiting times follow a Weibull distribution with shape `k`
//! and mean rate `r = 10^logr`; each window's boundaries left- and
//! right-censor the process, which the likelihood accounts for with
//! survival-function terms. The crate provides:
//! - A [`Dataset`] loader that validates observation windows at load time.
//! - A [`WaitingTimeModel`] whose evaluation is pure, read-only over the
//!   dataset, and safe to call concurrently from sampler chains. It
//!   implements [`wt_core::traits::LogDensityModel`] so an external MCMC
//!   sampler can drive it.
//!
//! Numerically degenerate parameter points never raise: they collapse to
//! the finite sentinel [`SENTINEL_LOG_LIKE`] so a long-running sampler can
//! treat them as "effectively impossible" and keep exploring.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dataset;
pub mod model;

pub use dataset::{Dataset, EpochRecord, ObservationEpoch};
pub use model::{ModelParameters, WaitingTimeModel, SENTINEL_LOG_LIKE};
