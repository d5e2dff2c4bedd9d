//! Approach/avoidance direction per motive.
//!
//! Each motive keeps two accumulators; the report carries both sides as
//! complementary percentages, the dominant pole, and a balance magnitude.

use serde::Serialize;

use crate::accumulator::WeightedAccumulator;
use crate::catalog::{Answer, Direction, MotiveSource, QuestionCatalog, QuestionCategory, ScoreTag};

use super::resolved;

/// Direction profile for one motive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionScore {
    pub motive: MotiveSource,
    /// Percent of directional mass on the approach side. Whole number;
    /// `approach + avoidance == 100` always.
    pub approach: f64,
    pub avoidance: f64,
    /// Ties favor approach.
    pub dominant: Direction,
    /// 100 = perfectly balanced, 0 = fully one-sided.
    pub balance: f64,
}

pub fn direction_scores(catalog: &QuestionCatalog, answers: &[Answer]) -> Vec<DirectionScore> {
    let mut approach: [WeightedAccumulator; 8] = Default::default();
    let mut avoidance: [WeightedAccumulator; 8] = Default::default();

    for (answer, question, option) in resolved(catalog, answers, QuestionCategory::Direction) {
        // Direction items need both fields of the tag; a bare subcategory
        // cannot say which pole was chosen, so untagged options carry no signal.
        if let Some(ScoreTag::Direction { motive, direction }) = &option.tag {
            let side = match direction {
                Direction::Approach => &mut approach,
                Direction::Avoidance => &mut avoidance,
            };
            side[motive.index()].push(option.value, question.weight, answer.response_time_ms);
        }
    }

    MotiveSource::ALL
        .into_iter()
        .map(|m| {
            let a = approach[m.index()].mean();
            let b = avoidance[m.index()].mean();
            // Means are on the 1–5 scale, so the total is always positive.
            let approach_pct = (a / (a + b) * 100.0).round();
            let avoidance_pct = 100.0 - approach_pct;
            DirectionScore {
                motive: m,
                approach: approach_pct,
                avoidance: avoidance_pct,
                dominant: if approach_pct >= avoidance_pct {
                    Direction::Approach
                } else {
                    Direction::Avoidance
                },
                balance: 100.0 - (approach_pct - avoidance_pct).abs(),
            }
        })
        .collect()
}
