//! Hidden-motive signals: shadow, projection, and compensation tags, plus a
//! latency-based denial indicator.
//!
//! Shadow items probe motives the respondent does not consciously endorse.
//! When the answers around one shadow motive take materially longer than the
//! respondent's own baseline, the hesitation itself is a signal — the topic
//! is being avoided, not considered.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::accumulator::WeightedAccumulator;
use crate::catalog::{Answer, MotiveSource, QuestionCatalog, QuestionCategory, ScoreTag};

use super::{batch_mean_latency, resolved, round1};

/// Latency this far above baseline flags denial/avoidance.
const DENIAL_LATENCY_RATIO: f64 = 1.25;

/// One shadow motive with its intensity and hesitation signal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShadowSignal {
    pub motive: MotiveSource,
    /// 0–100 intensity.
    pub score: f64,
    /// Mean latency on this motive's items relative to the whole batch.
    pub latency_ratio: f64,
    /// True when `latency_ratio` crosses the denial threshold.
    pub denial: bool,
}

/// Projected-motive intensity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotiveSignal {
    pub motive: MotiveSource,
    pub score: f64,
}

/// Compensation-pattern intensity, keyed by the bank's free-form label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompensationSignal {
    pub label: String,
    pub score: f64,
}

/// Hidden dimension output. Only labels that received answers appear.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiddenProfile {
    /// Sorted by intensity, descending.
    pub shadow: Vec<ShadowSignal>,
    pub projection: Vec<MotiveSignal>,
    pub compensation: Vec<CompensationSignal>,
    /// Human-readable denial/avoidance indicators for the report layer.
    pub indicators: Vec<String>,
}

pub fn hidden_profile(catalog: &QuestionCatalog, answers: &[Answer]) -> HiddenProfile {
    // BTreeMaps keep label iteration deterministic.
    let mut shadow: BTreeMap<usize, (WeightedAccumulator, Vec<u64>)> = BTreeMap::new();
    let mut projection: BTreeMap<usize, WeightedAccumulator> = BTreeMap::new();
    let mut compensation: BTreeMap<String, WeightedAccumulator> = BTreeMap::new();

    for (answer, question, option) in resolved(catalog, answers, QuestionCategory::Hidden) {
        match &option.tag {
            Some(ScoreTag::Shadow { motive }) => {
                let entry = shadow.entry(motive.index()).or_default();
                entry.0.push(option.value, question.weight, answer.response_time_ms);
                entry.1.push(answer.response_time_ms);
            }
            Some(ScoreTag::Projection { motive }) => {
                projection
                    .entry(motive.index())
                    .or_default()
                    .push(option.value, question.weight, answer.response_time_ms);
            }
            Some(ScoreTag::Compensation { label }) => {
                compensation
                    .entry(label.clone())
                    .or_default()
                    .push(option.value, question.weight, answer.response_time_ms);
            }
            _ => {}
        }
    }

    let overall_latency = batch_mean_latency(answers);

    let mut indicators = Vec::new();
    let mut shadow_signals: Vec<ShadowSignal> = shadow
        .into_iter()
        .map(|(idx, (acc, latencies))| {
            let motive = MotiveSource::ALL[idx];
            let mean_latency =
                latencies.iter().map(|&t| t as f64).sum::<f64>() / latencies.len() as f64;
            let latency_ratio = if overall_latency > 0.0 {
                mean_latency / overall_latency
            } else {
                1.0
            };
            ShadowSignal {
                motive,
                score: round1(acc.score()),
                latency_ratio: round1(latency_ratio * 100.0) / 100.0,
                denial: latency_ratio >= DENIAL_LATENCY_RATIO,
            }
        })
        .collect();
    shadow_signals.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for s in shadow_signals.iter().filter(|s| s.denial) {
        indicators.push(format!(
            "responses around {} took {:.2}x the baseline latency, suggesting avoidance of the topic",
            s.motive, s.latency_ratio
        ));
    }

    let projection = projection
        .into_iter()
        .map(|(idx, acc)| MotiveSignal {
            motive: MotiveSource::ALL[idx],
            score: round1(acc.score()),
        })
        .collect();

    let compensation = compensation
        .into_iter()
        .map(|(label, acc)| CompensationSignal {
            label,
            score: round1(acc.score()),
        })
        .collect();

    HiddenProfile {
        shadow: shadow_signals,
        projection,
        compensation,
        indicators,
    }
}
