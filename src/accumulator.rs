//! Confidence-weighted score accumulation shared by every dimension
//! calculator.
//!
//! Naive averaging treats a 200 ms impulsive tap and a 5 s deliberate choice
//! as equally informative. Instead, each sample's structural weight is
//! multiplied by a fixed response-time weight before aggregation: very fast
//! responses are discounted as careless, the 2–4 s deliberation band gets
//! full weight, and very slow responses are discounted again — long latency
//! suggests distraction or conflict, not more signal.

/// Uniform raw-scale default when a dimension accumulated zero samples.
///
/// Every dimension uses this single neutral value; it rescales to 37.5 on
/// the 0–100 scale.
pub const DEFAULT_RAW_MEAN: f64 = 2.5;

/// Fixed, non-monotonic response-time weight curve.
///
/// | latency            | weight |
/// |--------------------|--------|
/// | < 0.5 s            | 0.30   |
/// | 0.5 – 1 s          | 0.60   |
/// | 1 – 2 s            | 0.85   |
/// | 2 – 4 s            | 1.00   |
/// | 4 – 6 s            | 0.95   |
/// | 6 – 10 s           | 0.80   |
/// | 10 – 15 s          | 0.60   |
/// | ≥ 15 s             | 0.40   |
pub fn time_weight(response_time_ms: u64) -> f64 {
    match response_time_ms {
        0..=499 => 0.30,
        500..=999 => 0.60,
        1000..=1999 => 0.85,
        2000..=3999 => 1.00,
        4000..=5999 => 0.95,
        6000..=9999 => 0.80,
        10000..=14999 => 0.60,
        _ => 0.40,
    }
}

/// Linear rescale from the 1–5 raw scale to 0–100, clamped.
///
/// Monotonic and bounded: 1 ⇒ 0, 5 ⇒ 100, and no accumulated weight
/// combination can push the output outside [0, 100].
pub fn rescale(mean: f64) -> f64 {
    ((mean - 1.0) / 4.0 * 100.0).clamp(0.0, 100.0)
}

/// Ephemeral per-dimension collector of (value, weight, latency) triples.
///
/// Lives only within one scoring invocation; never persisted.
#[derive(Debug, Clone, Default)]
pub struct WeightedAccumulator {
    values: Vec<f64>,
    weights: Vec<f64>,
    times_ms: Vec<u64>,
}

impl WeightedAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sample. `weight` is the item's structural weight; the
    /// response-time weight is applied at reduction.
    pub fn push(&mut self, value: f64, weight: f64, response_time_ms: u64) {
        self.values.push(value);
        self.weights.push(weight);
        self.times_ms.push(response_time_ms);
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn samples(&self) -> usize {
        self.values.len()
    }

    /// Total effective weight (structural × time) accumulated so far.
    pub fn mass(&self) -> f64 {
        self.weights
            .iter()
            .zip(&self.times_ms)
            .map(|(w, t)| w * time_weight(*t))
            .sum()
    }

    /// Effective-weight-weighted sum of raw values.
    pub fn weighted_total(&self) -> f64 {
        self.values
            .iter()
            .zip(&self.weights)
            .zip(&self.times_ms)
            .map(|((v, w), t)| v * w * time_weight(*t))
            .sum()
    }

    /// Confidence-weighted mean on the 1–5 scale, or `default` when empty
    /// (or when every sample carried zero weight).
    pub fn mean_or(&self, default: f64) -> f64 {
        let mass = self.mass();
        if mass <= 0.0 {
            return default;
        }
        self.weighted_total() / mass
    }

    /// Confidence-weighted mean with the uniform neutral default.
    pub fn mean(&self) -> f64 {
        self.mean_or(DEFAULT_RAW_MEAN)
    }

    /// Reduce straight to the 0–100 scale.
    pub fn score(&self) -> f64 {
        rescale(self.mean())
    }
}
