//! Motive-conflict pairs: how the respondent resolves forced trade-offs
//! between two competing motives.
//!
//! Beyond the pole-mass split, two behavioral signals feed the
//! classification: decision latency (hesitation as a difficulty proxy) and
//! the oscillation rate (how often consecutive choices flip sides).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::accumulator::time_weight;
use crate::catalog::{Answer, MotiveSource, Question, QuestionCatalog, QuestionCategory, ScoreOption, ScoreTag};

use super::{batch_mean_latency, resolved, round1};

/// Flip-flopping above this rate dominates every other signal.
const OSCILLATION_THRESHOLD: f64 = 0.4;
/// Hesitation: pair latency this far above the batch mean suggests the
/// trade-off is being avoided rather than resolved.
const SUPPRESSION_LATENCY_RATIO: f64 = 1.3;
/// Suppression only applies when one side still carries real intensity.
const SUPPRESSION_MIN_SHARE: f64 = 65.0;
/// One-sided enough to call the pair settled.
const POLARIZED_MIN_SHARE: f64 = 70.0;

/// How a conflict pair is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictResolution {
    /// Both sides get comparable mass at normal latency.
    Balanced,
    /// One side clearly won.
    Polarized,
    /// High latency plus high intensity: the trade-off is being sat on.
    Suppressed,
    /// Frequent side-switching across consecutive choices.
    Oscillating,
}

/// Resolved state of one motive pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConflictScore {
    pub pair: (MotiveSource, MotiveSource),
    /// Share of pair mass on the first motive, 0–100.
    pub first_share: f64,
    /// The heavier side; ties keep the first motive of the pair.
    pub dominant: MotiveSource,
    pub mean_latency_ms: f64,
    /// Side flips per consecutive-choice transition, 0–1.
    pub oscillation_rate: f64,
    pub samples: usize,
    pub resolution: ConflictResolution,
}

pub fn conflict_scores(catalog: &QuestionCatalog, answers: &[Answer]) -> Vec<ConflictScore> {
    // BTreeMap keeps pair output order deterministic across runs.
    let mut pairs: BTreeMap<String, Vec<(&Answer, &Question, &ScoreOption)>> = BTreeMap::new();
    for entry in resolved(catalog, answers, QuestionCategory::Conflict) {
        let Some(sub) = entry.1.subcategory.as_deref() else {
            continue;
        };
        pairs.entry(sub.to_string()).or_default().push(entry);
    }

    let overall_latency = batch_mean_latency(answers);

    let mut out = Vec::with_capacity(pairs.len());
    for (subcategory, mut entries) in pairs {
        let Some((first, second)) = parse_pair(&subcategory) else {
            continue;
        };
        // Oscillation is a chronological signal.
        entries.sort_by_key(|(a, _, _)| a.answered_at);

        let mut first_mass = 0.0;
        let mut second_mass = 0.0;
        let mut latency_sum = 0.0;
        let mut flips = 0usize;
        let mut transitions = 0usize;
        let mut last_side: Option<MotiveSource> = None;

        for (answer, question, option) in &entries {
            latency_sum += answer.response_time_ms as f64;
            let contribution = option.value * question.weight * time_weight(answer.response_time_ms);

            let side = match &option.tag {
                Some(ScoreTag::ConflictLean { pole: Some(m) }) if *m == first => {
                    first_mass += contribution;
                    Some(first)
                }
                Some(ScoreTag::ConflictLean { pole: Some(m) }) if *m == second => {
                    second_mass += contribution;
                    Some(second)
                }
                Some(ScoreTag::ConflictLean { pole: None }) => {
                    // The explicit middle option feeds both sides and breaks
                    // no runs.
                    first_mass += contribution / 2.0;
                    second_mass += contribution / 2.0;
                    None
                }
                _ => None,
            };

            if let Some(side) = side {
                if let Some(prev) = last_side {
                    transitions += 1;
                    if prev != side {
                        flips += 1;
                    }
                }
                last_side = Some(side);
            }
        }

        let samples = entries.len();
        let mean_latency_ms = if samples > 0 { latency_sum / samples as f64 } else { 0.0 };
        let total = first_mass + second_mass;
        let first_share = if total > 0.0 {
            round1(first_mass / total * 100.0)
        } else {
            50.0
        };
        let dominant_share = first_share.max(100.0 - first_share);
        let dominant = if first_share >= 50.0 { first } else { second };
        let oscillation_rate = if transitions > 0 {
            flips as f64 / transitions as f64
        } else {
            0.0
        };

        let hesitant =
            overall_latency > 0.0 && mean_latency_ms >= SUPPRESSION_LATENCY_RATIO * overall_latency;
        let resolution = if oscillation_rate > OSCILLATION_THRESHOLD {
            ConflictResolution::Oscillating
        } else if hesitant && dominant_share >= SUPPRESSION_MIN_SHARE {
            ConflictResolution::Suppressed
        } else if dominant_share >= POLARIZED_MIN_SHARE {
            ConflictResolution::Polarized
        } else {
            ConflictResolution::Balanced
        };

        out.push(ConflictScore {
            pair: (first, second),
            first_share,
            dominant,
            mean_latency_ms: round1(mean_latency_ms),
            oscillation_rate,
            samples,
            resolution,
        });
    }
    out
}

/// Parse a `"achievement_connection"`-style subcategory into a motive pair.
fn parse_pair(subcategory: &str) -> Option<(MotiveSource, MotiveSource)> {
    let (a, b) = subcategory.split_once('_')?;
    Some((MotiveSource::from_key(a)?, MotiveSource::from_key(b)?))
}
