//! Situational context shifts: how the motive profile moves away from its
//! baseline under pressure, growth, and crisis conditions.

use serde::Serialize;

use crate::accumulator::WeightedAccumulator;
use crate::catalog::{Answer, MotiveSource, QuestionCatalog, QuestionCategory, ScoreTag, Situation};

use super::{resolved, round1, MotiveVector};

/// Shifts smaller than this are treated as noise and not surfaced.
const MATERIALITY_THRESHOLD: f64 = 5.0;

/// Baseline-relative motive movement in one situation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextShift {
    pub motive: MotiveSource,
    /// Signed delta against the baseline motive score.
    pub shift: f64,
}

/// Per-situation motive picture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextScore {
    pub situation: Situation,
    /// Heaviest motive in this situation, by accumulated signal mass.
    pub dominant: Option<MotiveSource>,
    /// Only material shifts (|delta| > 5) appear.
    pub shifts: Vec<ContextShift>,
}

/// Qualitative stress-response style, read off the dominant motive under
/// pressure/crisis conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StressResponse {
    Fight,
    Flight,
    Freeze,
    Flow,
}

/// Context dimension output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextOutlook {
    /// Situations that actually received answers, in fixed situation order.
    pub contexts: Vec<ContextScore>,
    /// `None` when no pressure or crisis items were answered.
    pub stress_response: Option<StressResponse>,
}

pub fn context_scores(
    catalog: &QuestionCatalog,
    answers: &[Answer],
    baseline: &MotiveVector,
) -> ContextOutlook {
    let mut accs: [[WeightedAccumulator; 8]; 4] = Default::default();

    for (answer, question, option) in resolved(catalog, answers, QuestionCategory::Context) {
        let (situation, motive) = match &option.tag {
            Some(ScoreTag::Context { situation, motive }) => (*situation, *motive),
            _ => (None, None),
        };
        let situation = situation
            .or_else(|| {
                question
                    .subcategory
                    .as_deref()
                    .and_then(Situation::from_key)
            })
            .unwrap_or(Situation::Normal);
        let Some(motive) = motive else {
            continue;
        };

        let sit_idx = Situation::ALL.iter().position(|s| *s == situation).expect("situation in ALL");
        accs[sit_idx][motive.index()].push(option.value, question.weight, answer.response_time_ms);
    }

    let mut contexts = Vec::new();
    for (sit_idx, situation) in Situation::ALL.into_iter().enumerate() {
        let sampled: Vec<MotiveSource> = MotiveSource::ALL
            .into_iter()
            .filter(|m| !accs[sit_idx][m.index()].is_empty())
            .collect();
        if sampled.is_empty() {
            continue;
        }

        // Dominance weights frequency as well as intensity: total signal
        // mass, not the per-item mean.
        let dominant = sampled
            .iter()
            .copied()
            .max_by(|a, b| {
                accs[sit_idx][a.index()]
                    .weighted_total()
                    .partial_cmp(&accs[sit_idx][b.index()].weighted_total())
                    .unwrap_or(std::cmp::Ordering::Equal)
                    // max_by keeps the later of equal elements; invert the
                    // index order so ties resolve to canonical order.
                    .then(b.index().cmp(&a.index()))
            });

        let shifts: Vec<ContextShift> = sampled
            .iter()
            .filter_map(|&m| {
                let shift = accs[sit_idx][m.index()].score() - baseline.get(m);
                (shift.abs() > MATERIALITY_THRESHOLD).then(|| ContextShift {
                    motive: m,
                    shift: round1(shift),
                })
            })
            .collect();

        contexts.push(ContextScore {
            situation,
            dominant,
            shifts,
        });
    }

    let stress_response = stress_dominant(&accs).map(|m| match m {
        MotiveSource::Achievement | MotiveSource::Recognition => StressResponse::Fight,
        MotiveSource::Freedom | MotiveSource::Adventure => StressResponse::Flight,
        MotiveSource::Security | MotiveSource::Connection => StressResponse::Freeze,
        MotiveSource::Mastery | MotiveSource::Creation => StressResponse::Flow,
    });

    ContextOutlook {
        contexts,
        stress_response,
    }
}

/// Dominant motive across the pressure and crisis buckets combined.
fn stress_dominant(accs: &[[WeightedAccumulator; 8]; 4]) -> Option<MotiveSource> {
    let pressure = Situation::ALL.iter().position(|s| *s == Situation::Pressure).expect("pressure");
    let crisis = Situation::ALL.iter().position(|s| *s == Situation::Crisis).expect("crisis");

    let mut best: Option<(MotiveSource, f64)> = None;
    for m in MotiveSource::ALL {
        let mass = accs[pressure][m.index()].weighted_total()
            + accs[crisis][m.index()].weighted_total();
        if mass <= 0.0 {
            continue;
        }
        match best {
            Some((_, best_mass)) if mass <= best_mass => {}
            _ => best = Some((m, mass)),
        }
    }
    best.map(|(m, _)| m)
}
