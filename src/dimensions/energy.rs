//! Energy scoring: what charges the respondent, what drains them, and the
//! derived sustainability figures.

use serde::Serialize;

use crate::accumulator::WeightedAccumulator;
use crate::catalog::{
    Answer, DrainSource, FlowPattern, MotiveSource, QuestionCatalog, QuestionCategory, ScoreTag,
};

use super::{resolved, round1, sort_and_rank};

/// Charge drawn from one motive, 0–100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChargeScore {
    pub motive: MotiveSource,
    pub score: f64,
    pub rank: usize,
}

/// Drain caused by one stressor, 0–100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrainScore {
    pub source: DrainSource,
    pub score: f64,
    pub rank: usize,
}

/// Flow-state preference scores, 0–100 each.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowScores {
    pub deep_focus: f64,
    pub challenge: f64,
    pub clarity: f64,
    pub feedback: f64,
    pub environment: f64,
}

/// Full energy profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyProfile {
    pub charge: Vec<ChargeScore>,
    pub drain: Vec<DrainScore>,
    pub flow: FlowScores,
    /// `100 − 0.8 × avg drain`.
    pub sustainability: f64,
    /// `min(100, 1.2 × avg drain)`.
    pub burnout_risk: f64,
    /// How quickly depleted energy returns: low drain and strong charge
    /// sources both speed it up.
    pub recovery_speed: f64,
    /// Signed: avg charge − avg drain. Negative means net depletion.
    pub balance: f64,
}

pub fn energy_profile(catalog: &QuestionCatalog, answers: &[Answer]) -> EnergyProfile {
    let mut charge_accs: [WeightedAccumulator; 8] = Default::default();
    let mut drain_accs: [WeightedAccumulator; 8] = Default::default();
    let mut flow_accs: [WeightedAccumulator; 5] = Default::default();

    for (answer, question, option) in resolved(catalog, answers, QuestionCategory::Energy) {
        match &option.tag {
            Some(ScoreTag::Charge { source }) => {
                charge_accs[source.index()].push(option.value, question.weight, answer.response_time_ms);
            }
            Some(ScoreTag::Drain { source }) => {
                let idx = DrainSource::ALL.iter().position(|s| s == source).expect("drain in ALL");
                drain_accs[idx].push(option.value, question.weight, answer.response_time_ms);
            }
            Some(ScoreTag::Flow { pattern }) => {
                let idx = FlowPattern::ALL.iter().position(|p| p == pattern).expect("flow in ALL");
                flow_accs[idx].push(option.value, question.weight, answer.response_time_ms);
            }
            _ => {}
        }
    }

    let mut charge: Vec<ChargeScore> = MotiveSource::ALL
        .into_iter()
        .map(|m| ChargeScore {
            motive: m,
            score: round1(charge_accs[m.index()].score()),
            rank: 0,
        })
        .collect();
    sort_and_rank(&mut charge, |s| s.score, |s, r| s.rank = r);

    let mut drain: Vec<DrainScore> = DrainSource::ALL
        .into_iter()
        .enumerate()
        .map(|(i, source)| DrainScore {
            source,
            score: round1(drain_accs[i].score()),
            rank: 0,
        })
        .collect();
    sort_and_rank(&mut drain, |s| s.score, |s, r| s.rank = r);

    let flow = FlowScores {
        deep_focus: round1(flow_accs[0].score()),
        challenge: round1(flow_accs[1].score()),
        clarity: round1(flow_accs[2].score()),
        feedback: round1(flow_accs[3].score()),
        environment: round1(flow_accs[4].score()),
    };

    let avg_charge = charge.iter().map(|c| c.score).sum::<f64>() / charge.len() as f64;
    let avg_drain = drain.iter().map(|d| d.score).sum::<f64>() / drain.len() as f64;

    EnergyProfile {
        charge,
        drain,
        flow,
        sustainability: round1((100.0 - 0.8 * avg_drain).clamp(0.0, 100.0)),
        burnout_risk: round1((1.2 * avg_drain).min(100.0)),
        recovery_speed: round1((0.7 * (100.0 - avg_drain) + 0.3 * avg_charge).clamp(0.0, 100.0)),
        balance: round1(avg_charge - avg_drain),
    }
}
