//! Summary statistics over repeated timing samples.

use std::time::Duration;

/// Summary of the repeated timing samples taken for one input size.
///
/// All values are in seconds. `std` is the population standard deviation.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleStats {
    samples: Vec<f64>,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl SampleStats {
    /// Compute statistics over `durations`. An empty slice yields all zeros.
    pub fn from_durations(durations: &[Duration]) -> Self {
        let samples: Vec<f64> = durations.iter().map(Duration::as_secs_f64).collect();
        Self::from_secs(samples)
    }

    pub fn from_secs(samples: Vec<f64>) -> Self {
        if samples.is_empty() {
            return Self {
                samples,
                mean: 0.0,
                std: 0.0,
                min: 0.0,
                max: 0.0,
            };
        }

        let count = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / count;
        let variance = samples
            .iter()
            .map(|value| {
                let diff = mean - value;
                diff * diff
            })
            .sum::<f64>()
            / count;
        let min = samples.iter().cloned().fold(f64::MAX, f64::min);
        let max = samples.iter().cloned().fold(f64::MIN, f64::max);

        Self {
            samples,
            mean,
            std: variance.sqrt(),
            min,
            max,
        }
    }

    /// Individual samples in the order they were recorded.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Nearest-rank percentile (`pct` in `0..=100`).
    pub fn percentile(&self, pct: f64) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mut sorted = self.samples.clone();
        sorted.sort_by(f64::total_cmp);
        let idx = ((pct.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64).round() as usize;
        sorted[idx.min(sorted.len() - 1)]
    }
}
