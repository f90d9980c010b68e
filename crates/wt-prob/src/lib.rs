//! Probability building blocks for waitstat.
//!
//! This crate hosts the special-function primitives used by the waiting-time
//! likelihood:
//! - the unnormalized upper incomplete gamma tail
//! - Weibull density/survival in the mean-rate parameterization
//!
//! Every overflow/underflow site of the likelihood lives here, behind a
//! saturation policy: a magnitude that blows up is reported as probability
//! zero rather than as infinity, so callers only have to test results for
//! non-positive or non-finite values.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod gamma;
pub mod weibull;

pub use gamma::upper_inc_gamma;
