//! Operating-style axes: four bipolar work-style dimensions reported as
//! pole-mass ratios rather than means.

use serde::Serialize;

use crate::accumulator::time_weight;
use crate::catalog::{
    Answer, OperatingAxis, OperatingPole, QuestionCatalog, QuestionCategory, ScoreTag,
};

use super::{resolved, round1};

/// Show a leaning only when the split is meaningfully off-center.
const LEANING_MARGIN: f64 = 15.0;

/// Pole-mass split for one operating axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatingScore {
    pub axis: OperatingAxis,
    pub first_pole: OperatingPole,
    pub second_pole: OperatingPole,
    /// Share of axis mass on the first pole, 0–100. `second_share` is the
    /// complement.
    pub first_share: f64,
    pub second_share: f64,
    /// The heavier pole; an even split reports the first pole.
    pub dominant: OperatingPole,
    /// `None` while the split stays within 15 points of center.
    pub leaning: Option<OperatingPole>,
}

pub fn operating_scores(catalog: &QuestionCatalog, answers: &[Answer]) -> Vec<OperatingScore> {
    // (first-pole mass, second-pole mass) per axis.
    let mut mass = [(0.0f64, 0.0f64); 4];

    for (answer, question, option) in resolved(catalog, answers, QuestionCategory::Operating) {
        let Some(ScoreTag::Operating { axis, pole }) = &option.tag else {
            continue;
        };
        let pole = *pole;
        // Explicit axis tag wins, then the bank's subcategory spelling, then
        // the axis implied by the pole itself.
        let axis = (*axis)
            .or_else(|| {
                question
                    .subcategory
                    .as_deref()
                    .and_then(OperatingAxis::from_subcategory)
            })
            .unwrap_or_else(|| pole.axis());
        let (first, second) = axis.poles();

        let idx = OperatingAxis::ALL.iter().position(|a| *a == axis).expect("axis in ALL");
        let contribution = option.value * question.weight * time_weight(answer.response_time_ms);
        if pole == first {
            mass[idx].0 += contribution;
        } else if pole == second {
            mass[idx].1 += contribution;
        }
        // A pole from a different axis than the tag claims is dropped.
    }

    OperatingAxis::ALL
        .into_iter()
        .enumerate()
        .map(|(i, axis)| {
            let (first, second) = axis.poles();
            let (a, b) = mass[i];
            let total = a + b;
            let first_share = if total > 0.0 {
                round1(a / total * 100.0)
            } else {
                50.0
            };
            let second_share = round1(100.0 - first_share);
            let dominant = if first_share >= second_share { first } else { second };
            let leaning = ((first_share - 50.0).abs() >= LEANING_MARGIN).then_some(dominant);
            OperatingScore {
                axis,
                first_pole: first,
                second_pole: second,
                first_share,
                second_share,
                dominant,
                leaning,
            }
        })
        .collect()
}
