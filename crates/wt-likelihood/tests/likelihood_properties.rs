//! Property-level tests for the waiting-time likelihood, mirroring the
//! statistical contract of the model rather than its implementation.

use approx::assert_relative_eq;
use wt_likelihood::{Dataset, WaitingTimeModel, SENTINEL_LOG_LIKE};
use wt_prob::weibull;

fn model_from_json(json: &str) -> WaitingTimeModel {
    WaitingTimeModel::new(Dataset::from_json(json).unwrap())
}

fn single_epoch_model(start: f64, end: f64, bursts: &[f64]) -> WaitingTimeModel {
    let json = serde_json::json!([{ "start": start, "end": end, "bursts": bursts }]);
    model_from_json(&json.to_string())
}

#[test]
fn log_like_is_finite_over_parameter_grid() {
    let model = model_from_json(
        r#"[
            {"start": 100.0, "end": 101.5, "bursts": []},
            {"start": 200.0, "end": 200.5, "bursts": [200.2]},
            {"start": 300.0, "end": 302.0, "bursts": [300.3, 301.1, 301.9]},
            {"start": 400.0, "end": 401.0, "bursts": [400.5, 400.5]}
        ]"#,
    );
    for k in [1e-3, 0.1, 0.5, 1.0, 2.0, 10.0, 100.0] {
        for logr in [-6.0, -2.0, 0.0, 2.0, 6.0] {
            let ll = model.log_like(k, logr);
            assert!(ll.is_finite(), "non-finite log-like at k={k}, logr={logr}: {ll}");
        }
    }
    // Invalid shapes degrade to the sentinel, still finite.
    for k in [0.0, -1.0, f64::NAN, f64::NEG_INFINITY] {
        assert_eq!(model.log_like(k, 0.0), SENTINEL_LOG_LIKE);
    }
}

#[test]
fn empty_window_contribution_decreases_with_length() {
    let (k, logr) = (0.8, 0.0);
    let mut previous = f64::INFINITY;
    for length_days in [0.5, 1.0, 2.0, 4.0, 8.0, 16.0] {
        let model = single_epoch_model(50.0, 50.0 + length_days, &[]);
        let ll = model.log_like(k, logr);
        assert!(ll.is_finite() && ll > SENTINEL_LOG_LIKE);
        assert!(
            ll < previous,
            "no-detection probability must shrink with window length: \
             L={length_days}d gave {ll} >= {previous}"
        );
        previous = ll;
    }
}

#[test]
fn single_burst_at_midpoint_matches_closed_form() {
    let (k, logr) = (1.3, 0.4);
    let r = 10f64.powf(logr);
    let model = single_epoch_model(700.0, 701.0, &[700.5]);
    // L = 24h, burst at L/2: both censoring terms are S(L/2).
    let expected = r.ln() + 2.0 * weibull::survival(12.0, k, r).ln();
    assert_relative_eq!(model.log_like(k, logr), expected, epsilon = 1e-12);
}

#[test]
fn two_bursts_match_closed_form() {
    let (k, logr) = (0.7, -0.3);
    let r = 10f64.powf(logr);
    let model = single_epoch_model(0.0, 1.0, &[0.2, 0.7]);
    // L = 24h, elapsed times 4.8h and 16.8h.
    let expected = r.ln()
        + weibull::survival(4.8, k, r).ln()
        + weibull::survival(24.0 - 16.8, k, r).ln()
        + weibull::pdf(16.8 - 4.8, k, r).ln();
    assert_relative_eq!(model.log_like(k, logr), expected, epsilon = 1e-12);
}

#[test]
fn burst_order_in_source_does_not_matter() {
    let (k, logr) = (1.1, 0.2);
    let sorted = single_epoch_model(0.0, 1.0, &[0.1, 0.4, 0.9]);
    let shuffled = single_epoch_model(0.0, 1.0, &[0.9, 0.1, 0.4]);
    assert_eq!(sorted.log_like(k, logr), shuffled.log_like(k, logr));
}

#[test]
fn total_is_sum_of_epoch_contributions() {
    let epochs = [
        (100.0, 101.5, vec![]),
        (200.0, 200.5, vec![200.2]),
        (300.0, 302.0, vec![300.3, 301.1, 301.9]),
    ];
    let combined = model_from_json(
        r#"[
            {"start": 100.0, "end": 101.5, "bursts": []},
            {"start": 200.0, "end": 200.5, "bursts": [200.2]},
            {"start": 300.0, "end": 302.0, "bursts": [300.3, 301.1, 301.9]}
        ]"#,
    );
    for (k, logr) in [(0.6, -1.0), (1.0, 0.0), (2.5, 0.7)] {
        let sum: f64 = epochs
            .iter()
            .map(|(start, end, bursts)| {
                single_epoch_model(*start, *end, bursts).log_like(k, logr)
            })
            .sum();
        assert_relative_eq!(combined.log_like(k, logr), sum, epsilon = 1e-10);
    }
}

#[test]
fn underflowed_survival_collapses_to_sentinel() {
    // r = 10^6 drives both censoring survival terms to exactly zero.
    let model = single_epoch_model(0.0, 1.0, &[0.5]);
    assert_eq!(model.log_like(2.0, 6.0), SENTINEL_LOG_LIKE);
}

#[test]
fn underflowed_gap_density_collapses_to_sentinel() {
    // Bursts hug the window edges: the short censoring terms survive at
    // r = 10, but the 23.5h gap density underflows to exactly zero.
    let model = single_epoch_model(0.0, 1.0, &[0.01, 0.99]);
    let (k, logr) = (2.0, 1.0);
    let r = 10f64.powf(logr);
    assert!(weibull::survival(0.24, k, r) > 0.0);
    assert_eq!(weibull::pdf(23.52, k, r), 0.0);
    assert_eq!(model.log_like(k, logr), SENTINEL_LOG_LIKE);
}

#[test]
fn overflowed_shape_gamma_collapses_empty_window_to_sentinel() {
    // Tiny k: Γ(1/k) overflows, the incomplete-gamma tail saturates to zero.
    let model = single_epoch_model(0.0, 1.0, &[]);
    assert_eq!(model.log_like(1e-3, 0.0), SENTINEL_LOG_LIKE);
}

#[test]
fn sentinel_epoch_does_not_poison_other_epochs() {
    // One degenerate epoch (duplicate bursts) plus one healthy epoch: the
    // total is the healthy contribution shifted by exactly one sentinel.
    let (k, logr) = (1.2, 0.1);
    let healthy = single_epoch_model(0.0, 1.0, &[0.5]);
    let mixed = model_from_json(
        r#"[
            {"start": 0.0, "end": 1.0, "bursts": [0.5]},
            {"start": 5.0, "end": 6.0, "bursts": [5.5, 5.5]}
        ]"#,
    );
    let expected = healthy.log_like(k, logr) + SENTINEL_LOG_LIKE;
    assert_relative_eq!(mixed.log_like(k, logr), expected, epsilon = 1e-6);
    assert!(mixed.log_like(k, logr).is_finite());
}
