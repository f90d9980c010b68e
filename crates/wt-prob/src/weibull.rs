//! Weibull density and survival in the mean-rate parameterization.
//!
//! Shape `k` and rate `r` with scale `1 / (r · Γ(1 + 1/k))`, so the mean
//! waiting time is `1/r` regardless of `k`.

use statrs::function::gamma::gamma;

/// `Γ(1 + 1/k)`: the factor converting the mean rate `r` into the Weibull
/// scale via `scale = 1 / (r · Γ(1 + 1/k))`.
pub fn shape_gamma(k: f64) -> f64 {
    gamma(1.0 + k.recip())
}

/// Weibull density at `x` with shape `k` and rate `r`.
///
/// Computed as `(k/x) · u · exp(-u)` with `u = (x·r·Γ(1+1/k))^k`. When `u`
/// overflows to a non-finite value the density is reported as `0.0` (same
/// saturation policy as [`crate::gamma::upper_inc_gamma`]). At `x = 0` the
/// result is NaN; callers treat that as a degenerate gap.
pub fn pdf(x: f64, k: f64, r: f64) -> f64 {
    let u = (x * r * shape_gamma(k)).powf(k);
    if !u.is_finite() {
        return 0.0;
    }
    (k / x) * u * (-u).exp()
}

/// Weibull survival function (complementary CDF) at `x` with shape `k` and
/// rate `r`: `exp(-(x·r·Γ(1+1/k))^k)`.
///
/// No saturation branch: the exponential underflows to `0.0` on its own for
/// extreme arguments.
pub fn survival(x: f64, k: f64, r: f64) -> f64 {
    (-(x * r * shape_gamma(k)).powf(k)).exp()
}
