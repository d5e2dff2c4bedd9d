//! Social-desirability bias detection and correction.
//!
//! Detection combines profile-shape heuristics with the validation-category
//! honesty probes (this is one of the two insights that re-reads the raw
//! answer stream). Corrections are deliberately small and only applied at
//! moderate/severe risk: connection is typically over-reported and
//! recognition under-reported when respondents edit for likability.

use serde::Serialize;

use crate::accumulator::WeightedAccumulator;
use crate::catalog::{Answer, MotiveSource, QuestionCatalog, QuestionCategory, ScoreTag};
use crate::dimensions::MotiveScore;
use crate::quality::ReliabilityScore;

/// Idealized-warmth shape: very high connection with very low recognition.
const CONNECTION_HIGH: f64 = 85.0;
const RECOGNITION_LOW: f64 = 25.0;
/// Reliability under this is itself a bias indicator.
const RELIABILITY_LOW: f64 = 60.0;
/// Honesty probe score under this flags editing.
const HONESTY_LOW: f64 = 40.0;
/// Share of flattering answers (≥4) on social-desirability items.
const FLATTERING_SHARE: f64 = 0.6;

/// Escalating bias risk from the number of independent indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasRisk {
    Negligible,
    Mild,
    Moderate,
    Severe,
}

/// Bias verdict plus (at moderate/severe risk) re-ranked corrected scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiasAssessment {
    pub risk: BiasRisk,
    pub indicators: Vec<String>,
    /// Only present when a correction was applied; raw scores stay intact
    /// in the main report.
    pub corrected: Option<Vec<MotiveScore>>,
}

pub fn social_desirability(
    catalog: &QuestionCatalog,
    answers: &[Answer],
    motives: &[MotiveScore],
    reliability: &ReliabilityScore,
) -> BiasAssessment {
    let mut indicators = Vec::new();

    let score_of = |m: MotiveSource| {
        motives
            .iter()
            .find(|s| s.motive == m)
            .map(|s| s.score)
            .unwrap_or(0.0)
    };

    let connection = score_of(MotiveSource::Connection);
    let recognition = score_of(MotiveSource::Recognition);
    if connection >= CONNECTION_HIGH && recognition <= RECOGNITION_LOW {
        indicators.push(format!(
            "idealized warmth shape: connection {connection:.0} with recognition {recognition:.0}"
        ));
    }

    if !answers.is_empty() && reliability.score < RELIABILITY_LOW {
        indicators.push(format!(
            "low response reliability ({:.0}) undermines profile trust",
            reliability.score
        ));
    }

    // Validation-category probes.
    let mut honesty = WeightedAccumulator::new();
    let mut flagged_total = 0usize;
    let mut flagged_flattering = 0usize;
    for answer in answers {
        let Some((question, option)) = catalog.resolve(answer) else {
            continue;
        };
        if question.category == QuestionCategory::Validation
            && matches!(option.tag, Some(ScoreTag::Honesty))
        {
            honesty.push(option.value, question.weight, answer.response_time_ms);
        }
        if question.social_desirability {
            flagged_total += 1;
            if option.value >= 4.0 {
                flagged_flattering += 1;
            }
        }
    }

    if !honesty.is_empty() && honesty.score() < HONESTY_LOW {
        indicators.push(format!(
            "honesty probes score {:.0}, below the {HONESTY_LOW:.0} threshold",
            honesty.score()
        ));
    }

    if flagged_total > 0 {
        let share = flagged_flattering as f64 / flagged_total as f64;
        if share > FLATTERING_SHARE {
            indicators.push(format!(
                "{:.0}% of socially flattering items drew agreement",
                share * 100.0
            ));
        }
    }

    let risk = match indicators.len() {
        0 => BiasRisk::Negligible,
        1 => BiasRisk::Mild,
        2 => BiasRisk::Moderate,
        _ => BiasRisk::Severe,
    };

    let corrected = match risk {
        BiasRisk::Moderate => Some(correct(motives, 0.92, 1.08)),
        BiasRisk::Severe => Some(correct(motives, 0.85, 1.15)),
        _ => None,
    };

    BiasAssessment {
        risk,
        indicators,
        corrected,
    }
}

/// Apply fixed-percentage adjustments to the socially edited motives and
/// recompute ranks.
fn correct(motives: &[MotiveScore], connection_factor: f64, recognition_factor: f64) -> Vec<MotiveScore> {
    let mut adjusted: Vec<MotiveScore> = motives
        .iter()
        .map(|m| {
            let factor = match m.motive {
                MotiveSource::Connection => connection_factor,
                MotiveSource::Recognition => recognition_factor,
                _ => 1.0,
            };
            MotiveScore {
                motive: m.motive,
                score: ((m.score * factor).clamp(0.0, 100.0) * 10.0).round() / 10.0,
                rank: 0,
            }
        })
        .collect();
    crate::dimensions::sort_and_rank(&mut adjusted, |s| s.score, |s, r| s.rank = r);
    adjusted
}
