//! Censored Weibull waiting-time likelihood over observation epochs.

use wt_core::traits::LogDensityModel;
use wt_core::{Error, Result};
use wt_prob::{upper_inc_gamma, weibull};

use crate::dataset::{Dataset, ObservationEpoch};

/// Finite stand-in for `-inf` used whenever an epoch's likelihood is zero or
/// numerically undefined. Kept finite so downstream sampler arithmetic stays
/// well-defined, and kept at this literal value so degenerate points remain
/// comparably ranked.
pub const SENTINEL_LOG_LIKE: f64 = -1.0e32;

/// Transient parameter pair for one likelihood evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    /// Weibull shape; the likelihood degrades to the sentinel unless `k > 0`.
    pub k: f64,
    /// Base-10 logarithm of the Weibull mean rate.
    pub logr: f64,
}

impl ModelParameters {
    /// Mean burst rate `r = 10^logr`.
    pub fn rate(&self) -> f64 {
        10f64.powf(self.logr)
    }
}

/// Burst multiplicity for one epoch, in elapsed hours since window start.
///
/// The three cases are structurally distinct likelihood contributions;
/// classification happens once per epoch per evaluation.
#[derive(Debug, Clone, PartialEq)]
enum EpochEvents {
    /// No detections: only the no-event-in-window probability contributes.
    None,
    /// A single detection, censored on both sides of the window.
    One {
        /// Elapsed hours since window start.
        t: f64,
    },
    /// Two or more detections: censoring terms plus one density term per
    /// inter-burst gap.
    Many {
        /// Elapsed hours since window start, ascending.
        sorted: Vec<f64>,
    },
}

impl EpochEvents {
    fn classify(epoch: &ObservationEpoch) -> Self {
        let ts = epoch.elapsed_hours_sorted();
        match ts.len() {
            0 => EpochEvents::None,
            1 => EpochEvents::One { t: ts[0] },
            _ => EpochEvents::Many { sorted: ts },
        }
    }
}

/// Weibull waiting-time model over an immutable [`Dataset`].
///
/// Evaluation is pure and stateless per call; the model is `Send + Sync`
/// and safe to share across concurrent sampler chains.
#[derive(Debug, Clone)]
pub struct WaitingTimeModel {
    dataset: Dataset,
}

impl WaitingTimeModel {
    /// Build a model over a validated dataset.
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// The underlying dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Total log-likelihood at shape `k` and log10 mean rate `logr`.
    ///
    /// Total over all inputs: never errors and never returns a non-finite
    /// value. Degenerate parameter points (non-positive or non-finite `k`,
    /// non-finite `logr`, or any epoch whose probability collapses to zero)
    /// contribute [`SENTINEL_LOG_LIKE`] instead.
    pub fn log_like(&self, k: f64, logr: f64) -> f64 {
        if !k.is_finite() || k <= 0.0 || !logr.is_finite() {
            return SENTINEL_LOG_LIKE;
        }
        let r = 10f64.powf(logr);
        self.dataset.epochs().iter().map(|epoch| epoch_log_like(epoch, k, r)).sum()
    }

    /// [`log_like`](Self::log_like) with a named parameter pair.
    pub fn log_like_params(&self, params: ModelParameters) -> f64 {
        self.log_like(params.k, params.logr)
    }
}

impl LogDensityModel for WaitingTimeModel {
    fn dim(&self) -> usize {
        2
    }

    fn parameter_names(&self) -> Vec<String> {
        vec!["k".to_string(), "logr".to_string()]
    }

    fn parameter_bounds(&self) -> Vec<(f64, f64)> {
        // Wide finite boxes for the sampler seam; priors are external.
        vec![(1e-3, 100.0), (-6.0, 6.0)]
    }

    fn parameter_init(&self) -> Vec<f64> {
        vec![1.0, 0.0]
    }

    fn logp(&self, params: &[f64]) -> Result<f64> {
        if params.len() != self.dim() {
            return Err(Error::Validation(format!(
                "expected {} parameters (k, logr), got {}",
                self.dim(),
                params.len()
            )));
        }
        Ok(self.log_like(params[0], params[1]))
    }
}

/// Contribution of one epoch, dispatched on its burst multiplicity.
fn epoch_log_like(epoch: &ObservationEpoch, k: f64, r: f64) -> f64 {
    let length = epoch.length_hours();
    match EpochEvents::classify(epoch) {
        EpochEvents::None => empty_window_log_like(length, k, r),
        EpochEvents::One { t } => {
            // Rate times the probability that no event fell in [0, t)
            // extended backward and none in (t, L] extended forward.
            let s_before = weibull::survival(t, k, r);
            let s_after = weibull::survival(length - t, k, r);
            if s_before <= 0.0 || s_after <= 0.0 {
                return SENTINEL_LOG_LIKE;
            }
            r.ln() + s_before.ln() + s_after.ln()
        }
        EpochEvents::Many { sorted } => {
            let t_first = sorted[0];
            let t_last = sorted[sorted.len() - 1];
            let s_before = weibull::survival(t_first, k, r);
            let s_after = weibull::survival(length - t_last, k, r);
            if s_before <= 0.0 || s_after <= 0.0 {
                return SENTINEL_LOG_LIKE;
            }
            let mut acc = r.ln() + s_before.ln() + s_after.ln();
            for pair in sorted.windows(2) {
                let density = weibull::pdf(pair[1] - pair[0], k, r);
                // Zero-gap duplicates yield NaN here; collapse immediately.
                if density <= 0.0 || !density.is_finite() {
                    return SENTINEL_LOG_LIKE;
                }
                acc += density.ln();
            }
            acc
        }
    }
}

/// No-detection contribution: probability the first event falls beyond the
/// window, via the incomplete-gamma tail.
fn empty_window_log_like(length: f64, k: f64, r: f64) -> f64 {
    let g = weibull::shape_gamma(k);
    let numerator = match upper_inc_gamma(k.recip(), (length * r * g).powf(k)) {
        Ok(v) => v,
        Err(_) => return SENTINEL_LOG_LIKE,
    };
    if numerator == 0.0 {
        return SENTINEL_LOG_LIKE;
    }
    let ratio = numerator / (k * g);
    if ratio <= 0.0 || !ratio.is_finite() {
        return SENTINEL_LOG_LIKE;
    }
    ratio.ln()
}
