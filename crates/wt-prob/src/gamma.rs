//! Upper incomplete gamma tail.

use statrs::function::gamma::{gamma, gamma_ur};
use wt_core::{Error, Result};

/// Unnormalized upper incomplete gamma tail `Γ(a) · Q(a, x)`, where `Q` is
/// the normalized upper incomplete gamma function.
///
/// Precondition: `a > 0` (the caller guarantees `a = 1/k` with `k > 0`).
///
/// Saturation policy: when `Γ(a)` overflows to a non-finite value the tail
/// is reported as `0.0`, so downstream log-likelihood code treats "blew up"
/// the same as "probability zero".
pub fn upper_inc_gamma(a: f64, x: f64) -> Result<f64> {
    if a.is_nan() || a <= 0.0 {
        return Err(Error::Validation(format!("a must be positive, got {}", a)));
    }

    let whole = gamma(a);
    if !whole.is_finite() {
        return Ok(0.0);
    }

    // Limits keep `gamma_ur` inside its (0, inf) domain: Q(a, 0) = 1 and
    // Q(a, inf) = 0.
    if x <= 0.0 {
        return Ok(whole);
    }
    if !x.is_finite() {
        return Ok(0.0);
    }

    Ok(whole * gamma_ur(a, x))
}
