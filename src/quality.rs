//! Response-quality analysis: latency statistics and a reliability verdict
//! computed from the raw answer stream, independent of the semantic
//! dimensions.
//!
//! Low-quality input is never an error here. Straight-lining, extreme-value
//! streaks, and rushed answers become computed outputs — penalties, warning
//! flags, and a validity boolean — and the caller decides how to present
//! them.

use serde::Serialize;

use crate::catalog::Answer;

// =============================================================================
// Grading
// =============================================================================

/// Letter grade on fixed cutoffs: ≥90 S, ≥75 A, ≥60 B, ≥45 C, ≥30 D, else F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::S
        } else if score >= 75.0 {
            Self::A
        } else if score >= 60.0 {
            Self::B
        } else if score >= 45.0 {
            Self::C
        } else if score >= 30.0 {
            Self::D
        } else {
            Self::F
        }
    }
}

// =============================================================================
// Response-time profile
// =============================================================================

/// Latency band boundaries (milliseconds).
const FAST_MS: u64 = 1_000;
const SLOW_MS: u64 = 10_000;
const OPTIMAL_LOW_MS: u64 = 2_000;
const OPTIMAL_HIGH_MS: u64 = 6_000;

/// Latency statistics over the whole batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseTimeProfile {
    pub mean_ms: f64,
    pub median_ms: f64,
    /// Fraction of answers under 1 s.
    pub fast_share: f64,
    /// Fraction of answers over 10 s.
    pub slow_share: f64,
    /// Fraction in the 2–6 s deliberation band.
    pub optimal_share: f64,
    /// Coefficient of variation of latency.
    pub cv: f64,
    /// 100 × (1 − cv), clamped — steadier pacing scores higher.
    pub consistency: f64,
    /// Second-half mean latency over first-half mean, in chronological
    /// order. Above 1 = slowing down, below 1 = speeding up.
    pub fatigue_ratio: f64,
    /// 100 at ≤2 s mean, falling linearly to 0 at 20 s.
    pub decision_speed: f64,
    /// Weight on the deliberation band and against sub-second taps.
    pub deliberation: f64,
    /// Penalizes first-half/second-half drift.
    pub pacing: f64,
    /// Composite: 0.25 speed + 0.35 deliberation + 0.25 consistency + 0.15 pacing.
    pub overall: f64,
    pub grade: Grade,
}

pub fn time_profile(answers: &[Answer]) -> ResponseTimeProfile {
    if answers.is_empty() {
        // Documented zero-answer branch: an all-zero profile, graded F.
        return ResponseTimeProfile {
            mean_ms: 0.0,
            median_ms: 0.0,
            fast_share: 0.0,
            slow_share: 0.0,
            optimal_share: 0.0,
            cv: 0.0,
            consistency: 0.0,
            fatigue_ratio: 1.0,
            decision_speed: 0.0,
            deliberation: 0.0,
            pacing: 0.0,
            overall: 0.0,
            grade: Grade::F,
        };
    }

    let n = answers.len() as f64;
    let latencies: Vec<f64> = answers.iter().map(|a| a.response_time_ms as f64).collect();
    let mean = latencies.iter().sum::<f64>() / n;
    let median = median_of(&latencies);

    let fast_share = share(answers, |a| a.response_time_ms < FAST_MS);
    let slow_share = share(answers, |a| a.response_time_ms > SLOW_MS);
    let optimal_share = share(answers, |a| {
        (OPTIMAL_LOW_MS..=OPTIMAL_HIGH_MS).contains(&a.response_time_ms)
    });

    let variance = latencies.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / n;
    let cv = if mean > 0.0 { variance.sqrt() / mean } else { 0.0 };
    let consistency = (100.0 * (1.0 - cv)).clamp(0.0, 100.0);

    let fatigue_ratio = fatigue_ratio(answers);

    let decision_speed = if mean <= 2_000.0 {
        100.0
    } else {
        ((20_000.0 - mean) / 18_000.0 * 100.0).clamp(0.0, 100.0)
    };
    let deliberation = optimal_share * 70.0 + (1.0 - fast_share) * 30.0;
    let pacing = (100.0 * (1.0 - (fatigue_ratio - 1.0).abs().min(1.0))).clamp(0.0, 100.0);

    let overall =
        0.25 * decision_speed + 0.35 * deliberation + 0.25 * consistency + 0.15 * pacing;

    ResponseTimeProfile {
        mean_ms: round1(mean),
        median_ms: round1(median),
        fast_share,
        slow_share,
        optimal_share,
        cv: round2(cv),
        consistency: round1(consistency),
        fatigue_ratio: round2(fatigue_ratio),
        decision_speed: round1(decision_speed),
        deliberation: round1(deliberation),
        pacing: round1(pacing),
        overall: round1(overall),
        grade: Grade::from_score(overall),
    }
}

/// First-half vs second-half latency ratio.
///
/// The split assumes chronological submission order, so the series is
/// re-sorted by timestamp first; reordered input is tolerated, not trusted.
fn fatigue_ratio(answers: &[Answer]) -> f64 {
    if answers.len() < 4 {
        return 1.0;
    }

    let mut ordered: Vec<&Answer> = answers.iter().collect();
    let chronological = ordered.windows(2).all(|w| w[0].answered_at <= w[1].answered_at);
    if !chronological {
        tracing::debug!("answer batch not in chronological order; re-sorting for fatigue analysis");
        ordered.sort_by_key(|a| a.answered_at);
    }

    let half = ordered.len() / 2;
    let first: f64 = ordered[..half]
        .iter()
        .map(|a| a.response_time_ms as f64)
        .sum::<f64>()
        / half as f64;
    let second: f64 = ordered[half..]
        .iter()
        .map(|a| a.response_time_ms as f64)
        .sum::<f64>()
        / (ordered.len() - half) as f64;

    if first > 0.0 {
        second / first
    } else {
        1.0
    }
}

// =============================================================================
// Reliability
// =============================================================================

/// Streak thresholds for identical consecutive values.
const IDENTICAL_RUN_TIERS: [(usize, f64); 3] = [(10, 20.0), (7, 10.0), (5, 5.0)];
/// Extreme-value (1 or 5) streaks penalize from length 3, harder per item.
const EXTREME_RUN_MIN: usize = 3;
const EXTREME_RUN_BASE: f64 = 8.0;
const EXTREME_RUN_STEP: f64 = 3.0;
/// Hard cap on the extreme-streak penalty.
const EXTREME_PENALTY_CAP: f64 = 50.0;
/// Validity gate.
const MIN_VALID_SCORE: f64 = 45.0;
const MAX_VALID_WARNINGS: usize = 3;

/// Per-detector penalty breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReliabilityPenalties {
    pub identical_runs: f64,
    pub extreme_runs: f64,
    pub narrow_range: f64,
    pub midpoint: f64,
    pub speed: f64,
}

impl ReliabilityPenalties {
    pub fn total(&self) -> f64 {
        self.identical_runs + self.extreme_runs + self.narrow_range + self.midpoint + self.speed
    }
}

/// Composite trustworthiness of the answer set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReliabilityScore {
    /// 0–100 after penalties.
    pub score: f64,
    pub grade: Grade,
    pub penalties: ReliabilityPenalties,
    pub warnings: Vec<String>,
    /// Reliable enough to present results: minimum score AND a bounded
    /// warning count.
    pub valid: bool,
}

pub fn reliability_score(answers: &[Answer], profile: &ResponseTimeProfile) -> ReliabilityScore {
    if answers.is_empty() {
        return ReliabilityScore {
            score: 0.0,
            grade: Grade::F,
            penalties: ReliabilityPenalties::default(),
            warnings: Vec::new(),
            valid: false,
        };
    }

    // Streak detection runs over chronological submission order.
    let mut ordered: Vec<&Answer> = answers.iter().collect();
    ordered.sort_by_key(|a| a.answered_at);
    let values: Vec<f64> = ordered.iter().map(|a| a.value).collect();

    let mut penalties = ReliabilityPenalties::default();
    let mut warnings = Vec::new();

    // (a) identical consecutive values.
    let mut longest_identical = 0;
    for run in runs(&values, |a, b| a == b) {
        longest_identical = longest_identical.max(run);
        if let Some((_, p)) = IDENTICAL_RUN_TIERS.iter().find(|(min, _)| run >= *min) {
            penalties.identical_runs += p;
        }
    }
    if penalties.identical_runs > 0.0 {
        warnings.push(format!(
            "identical answers repeated up to {longest_identical} times in a row"
        ));
    }

    // (b) extreme-value streaks, steeper and capped.
    let mut longest_extreme = 0;
    for run in runs(&values, |a, b| a == b && (*a == 1.0 || *a == 5.0)) {
        if run >= EXTREME_RUN_MIN {
            longest_extreme = longest_extreme.max(run);
            penalties.extreme_runs += EXTREME_RUN_BASE + EXTREME_RUN_STEP * (run - EXTREME_RUN_MIN) as f64;
        }
    }
    penalties.extreme_runs = penalties.extreme_runs.min(EXTREME_PENALTY_CAP);
    if penalties.extreme_runs > 0.0 {
        warnings.push(format!(
            "streaks of extreme answers (longest run {longest_extreme})"
        ));
    }

    // (c) distinct raw values used.
    let mut distinct: Vec<u64> = values.iter().map(|v| v.to_bits()).collect();
    distinct.sort_unstable();
    distinct.dedup();
    penalties.narrow_range = match distinct.len() {
        1 => 50.0,
        2 => 30.0,
        _ => 0.0,
    };
    if penalties.narrow_range > 0.0 {
        warnings.push(format!(
            "only {} distinct answer value(s) used across the whole questionnaire",
            distinct.len()
        ));
    }

    // (d) midpoint over-reliance.
    let midpoint_share = values.iter().filter(|v| **v == 3.0).count() as f64 / values.len() as f64;
    penalties.midpoint = if midpoint_share > 0.6 {
        25.0
    } else if midpoint_share > 0.4 {
        10.0
    } else {
        0.0
    };
    if penalties.midpoint > 0.0 {
        warnings.push(format!(
            "{:.0}% of answers sit on the scale midpoint",
            midpoint_share * 100.0
        ));
    }

    // (e) rushed responding, from the time profile.
    if profile.fast_share > 0.3 {
        penalties.speed = (40.0 * (profile.fast_share - 0.3) / 0.7).round();
        warnings.push(format!(
            "{:.0}% of answers were given in under one second",
            profile.fast_share * 100.0
        ));
    }

    let score = (100.0 - penalties.total()).clamp(0.0, 100.0);
    ReliabilityScore {
        score,
        grade: Grade::from_score(score),
        valid: score >= MIN_VALID_SCORE && warnings.len() <= MAX_VALID_WARNINGS,
        penalties,
        warnings,
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Lengths of maximal runs where `same` holds between neighbors.
fn runs<T>(values: &[T], same: impl Fn(&T, &T) -> bool) -> Vec<usize> {
    let mut out = Vec::new();
    let mut run = 1;
    for w in values.windows(2) {
        if same(&w[0], &w[1]) {
            run += 1;
        } else {
            out.push(run);
            run = 1;
        }
    }
    if !values.is_empty() {
        out.push(run);
    }
    out
}

/// Fraction of answers for which `pred` holds.
fn share(answers: &[Answer], pred: impl Fn(&Answer) -> bool) -> f64 {
    if answers.is_empty() {
        return 0.0;
    }
    answers.iter().filter(|a| pred(a)).count() as f64 / answers.len() as f64
}

fn median_of(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        0.5 * (sorted[n / 2 - 1] + sorted[n / 2])
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
