//! The nine per-dimension calculators.
//!
//! Every calculator follows the same reduction shape: filter the answer
//! batch to its category via the catalog, read the typed score tag (falling
//! back to the question subcategory where the bank leaves the tag off), feed
//! one [`WeightedAccumulator`](crate::accumulator::WeightedAccumulator) per
//! enumerated dimension value, rescale to 0–100, and stable-sort descending
//! with ranks 1..N. Stable sort means score ties keep canonical declaration
//! order instead of being broken arbitrarily.

mod conflict;
mod context;
mod direction;
mod energy;
mod hidden;
mod ignition;
mod maturity;
mod motive;
mod operating;

pub use conflict::{conflict_scores, ConflictResolution, ConflictScore};
pub use context::{context_scores, ContextOutlook, ContextScore, ContextShift, StressResponse};
pub use direction::{direction_scores, DirectionScore};
pub use energy::{energy_profile, ChargeScore, DrainScore, EnergyProfile, FlowScores};
pub use hidden::{hidden_profile, CompensationSignal, HiddenProfile, MotiveSignal, ShadowSignal};
pub use ignition::{ignition_scores, IgnitionScore};
pub use maturity::{maturity_score, MaturityLevel, MaturityScore};
pub use motive::{motive_scores, MotiveScore, MotiveVector};
pub use operating::{operating_scores, OperatingScore};

use std::cmp::Ordering;

use crate::catalog::{Answer, Question, QuestionCatalog, QuestionCategory, ScoreOption};

/// Resolve and filter the batch down to one category's answers.
///
/// Unknown question/option references disappear here — the data-integrity
/// tolerance shared by all calculators.
pub(crate) fn resolved<'a>(
    catalog: &'a QuestionCatalog,
    answers: &'a [Answer],
    category: QuestionCategory,
) -> impl Iterator<Item = (&'a Answer, &'a Question, &'a ScoreOption)> {
    answers.iter().filter_map(move |answer| {
        let (question, option) = catalog.resolve(answer)?;
        (question.category == category).then_some((answer, question, option))
    })
}

/// Stable descending sort by score, then 1-based rank assignment.
pub(crate) fn sort_and_rank<T>(
    items: &mut [T],
    score: impl Fn(&T) -> f64,
    mut set_rank: impl FnMut(&mut T, usize),
) {
    items.sort_by(|a, b| score(b).partial_cmp(&score(a)).unwrap_or(Ordering::Equal));
    for (i, item) in items.iter_mut().enumerate() {
        set_rank(item, i + 1);
    }
}

/// Round to one decimal — the presentation precision for all 0–100 scores.
pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Mean latency of a whole answer batch, in milliseconds. Zero when empty.
pub(crate) fn batch_mean_latency(answers: &[Answer]) -> f64 {
    if answers.is_empty() {
        return 0.0;
    }
    answers.iter().map(|a| a.response_time_ms as f64).sum::<f64>() / answers.len() as f64
}
