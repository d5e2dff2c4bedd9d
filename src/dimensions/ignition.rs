//! Ignition-condition scoring: which situational triggers switch the
//! respondent's motivation on.

use serde::Serialize;

use crate::accumulator::WeightedAccumulator;
use crate::catalog::{Answer, IgnitionTrigger, QuestionCatalog, QuestionCategory, ScoreTag};

use super::{resolved, round1, sort_and_rank};

/// Score and rank for one ignition trigger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IgnitionScore {
    pub trigger: IgnitionTrigger,
    /// 0–100.
    pub score: f64,
    /// 1..6, dense, descending by score.
    pub rank: usize,
}

pub fn ignition_scores(catalog: &QuestionCatalog, answers: &[Answer]) -> Vec<IgnitionScore> {
    let mut accs: [WeightedAccumulator; 6] = Default::default();

    for (answer, question, option) in resolved(catalog, answers, QuestionCategory::Ignition) {
        let trigger = match &option.tag {
            Some(ScoreTag::Ignition { trigger: Some(t) }) => Some(*t),
            _ => question
                .subcategory
                .as_deref()
                .and_then(IgnitionTrigger::from_key),
        };
        if let Some(t) = trigger {
            let idx = IgnitionTrigger::ALL.iter().position(|x| *x == t).expect("trigger in ALL");
            accs[idx].push(option.value, question.weight, answer.response_time_ms);
        }
    }

    let mut scores: Vec<IgnitionScore> = IgnitionTrigger::ALL
        .into_iter()
        .enumerate()
        .map(|(i, t)| IgnitionScore {
            trigger: t,
            score: round1(accs[i].score()),
            rank: 0,
        })
        .collect();
    sort_and_rank(&mut scores, |s| s.score, |s, r| s.rank = r);
    scores
}
