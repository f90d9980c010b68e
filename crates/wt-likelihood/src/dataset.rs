//! Observation windows and load-time validation for burst timing data.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use wt_core::{Error, Result};

/// Timestamps are MJD days; the likelihood works in hours.
const HOURS_PER_DAY: f64 = 24.0;

/// Raw JSON record for one observation window.
///
/// The input file is a JSON array of these records.
#[derive(Debug, Clone, Deserialize)]
pub struct EpochRecord {
    /// Window start (MJD).
    pub start: f64,
    /// Window end (MJD); must be greater than `start`.
    pub end: f64,
    /// Detected burst timestamps (MJD), each within `[start, end]`.
    #[serde(default)]
    pub bursts: Vec<f64>,
}

/// One validated observation window.
///
/// Invariant (established at load time, trusted thereafter): `end > start`,
/// all values finite, and every burst lies within `[start, end]` inclusive.
#[derive(Debug, Clone)]
pub struct ObservationEpoch {
    start: f64,
    end: f64,
    bursts: Vec<f64>,
}

impl ObservationEpoch {
    /// Window start (MJD).
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Window end (MJD).
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Burst timestamps (MJD), in source order.
    pub fn bursts(&self) -> &[f64] {
        &self.bursts
    }

    /// Window length in hours.
    pub fn length_hours(&self) -> f64 {
        (self.end - self.start) * HOURS_PER_DAY
    }

    /// Burst times as hours elapsed since `start`, sorted ascending.
    pub fn elapsed_hours_sorted(&self) -> Vec<f64> {
        let mut ts: Vec<f64> =
            self.bursts.iter().map(|t| (t - self.start) * HOURS_PER_DAY).collect();
        ts.sort_by(|a, b| a.total_cmp(b));
        ts
    }
}

/// Immutable, validated collection of observation epochs.
///
/// Loaded once before sampling begins and shared read-only across however
/// many concurrent likelihood evaluations the sampler issues.
#[derive(Debug, Clone)]
pub struct Dataset {
    epochs: Vec<ObservationEpoch>,
}

impl Dataset {
    /// Load and validate a dataset from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Load and validate a dataset from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let records: Vec<EpochRecord> = serde_json::from_str(text)?;
        Self::from_records(records)
    }

    /// Validate already parsed records into a dataset.
    ///
    /// Epoch order is preserved from the source. Any burst strictly outside
    /// its window fails validation with a message naming the 1-based epoch
    /// index, the window bounds, and every out-of-bounds value.
    pub fn from_records(records: Vec<EpochRecord>) -> Result<Self> {
        let mut epochs = Vec::with_capacity(records.len());
        for (i, rec) in records.into_iter().enumerate() {
            let idx = i + 1;
            if !rec.start.is_finite() || !rec.end.is_finite() {
                return Err(Error::Validation(format!(
                    "non-finite window bounds in observation {idx}: [{}, {}]",
                    rec.start, rec.end
                )));
            }
            if rec.end <= rec.start {
                return Err(Error::Validation(format!(
                    "empty observation window in observation {idx}: \
                     end {:.5} must be greater than start {:.5}",
                    rec.end, rec.start
                )));
            }
            if rec.bursts.iter().any(|t| !t.is_finite()) {
                return Err(Error::Validation(format!(
                    "non-finite burst timestamp in observation {idx}"
                )));
            }
            let bad: Vec<f64> =
                rec.bursts.iter().copied().filter(|&t| t < rec.start || t > rec.end).collect();
            if !bad.is_empty() {
                return Err(Error::Validation(format!(
                    "bursts found outside observation interval in observation {idx}. \
                     observation range: [{:.5}, {:.5}]. out of bounds bursts: {:?}",
                    rec.start, rec.end, bad
                )));
            }
            epochs.push(ObservationEpoch { start: rec.start, end: rec.end, bursts: rec.bursts });
        }

        let dataset = Dataset { epochs };
        log::debug!(
            "loaded {} observation epochs ({} bursts)",
            dataset.n_epochs(),
            dataset.n_bursts()
        );
        Ok(dataset)
    }

    /// Validated epochs, in source order.
    pub fn epochs(&self) -> &[ObservationEpoch] {
        &self.epochs
    }

    /// Number of epochs.
    pub fn n_epochs(&self) -> usize {
        self.epochs.len()
    }

    /// Total number of bursts across all epochs.
    pub fn n_bursts(&self) -> usize {
        self.epochs.iter().map(|e| e.bursts.len()).sum()
    }
}
