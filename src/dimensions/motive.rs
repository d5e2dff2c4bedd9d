//! Motive-source scoring: the primary 8-way profile every downstream
//! consumer (context shifts, insights, both matchers) keys off.

use serde::Serialize;

use crate::accumulator::WeightedAccumulator;
use crate::catalog::{Answer, MotiveSource, QuestionCatalog, QuestionCategory, ScoreTag};

use super::{resolved, round1, sort_and_rank};

/// Score and rank for one motive source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotiveScore {
    pub motive: MotiveSource,
    /// 0–100.
    pub score: f64,
    /// 1..8, dense, descending by score.
    pub rank: usize,
}

/// The user's motive profile as a canonical-order 8-vector.
///
/// Convenience view over `Vec<MotiveScore>` for the matchers and derived
/// insights, indexed by [`MotiveSource::index`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotiveVector(pub [f64; 8]);

impl MotiveVector {
    pub fn from_scores(scores: &[MotiveScore]) -> Self {
        let mut v = [0.0; 8];
        for s in scores {
            v[s.motive.index()] = s.score;
        }
        Self(v)
    }

    pub fn get(&self, motive: MotiveSource) -> f64 {
        self.0[motive.index()]
    }

    /// Motives sorted ascending by score (stable, canonical order on ties).
    pub fn weakest(&self) -> MotiveSource {
        let mut best = MotiveSource::Achievement;
        let mut best_score = f64::INFINITY;
        for m in MotiveSource::ALL {
            if self.get(m) < best_score {
                best = m;
                best_score = self.get(m);
            }
        }
        best
    }
}

/// Reduce the batch's motive-source answers into a ranked 8-way profile.
pub fn motive_scores(catalog: &QuestionCatalog, answers: &[Answer]) -> Vec<MotiveScore> {
    let mut accs: [WeightedAccumulator; 8] = Default::default();

    for (answer, question, option) in resolved(catalog, answers, QuestionCategory::MotiveSource) {
        let motive = match &option.tag {
            Some(ScoreTag::Motive { motive: Some(m) }) => Some(*m),
            // Choice-type items name the motive on the question itself.
            _ => question.subcategory.as_deref().and_then(MotiveSource::from_key),
        };
        if let Some(m) = motive {
            accs[m.index()].push(option.value, question.weight, answer.response_time_ms);
        }
    }

    let mut scores: Vec<MotiveScore> = MotiveSource::ALL
        .into_iter()
        .map(|m| MotiveScore {
            motive: m,
            score: round1(accs[m.index()].score()),
            rank: 0,
        })
        .collect();
    sort_and_rank(&mut scores, |s| s.score, |s, r| s.rank = r);
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InteractionKind, Question, ScoreOption};
    use chrono::{TimeZone, Utc};

    fn motive_question(id: &str, motive: MotiveSource) -> Question {
        Question {
            id: id.to_string(),
            category: QuestionCategory::MotiveSource,
            subcategory: Some(motive.key().to_string()),
            kind: InteractionKind::Likert,
            options: (1..=5)
                .map(|v| ScoreOption {
                    id: format!("{id}_o{v}"),
                    value: v as f64,
                    tag: Some(ScoreTag::Motive { motive: Some(motive) }),
                })
                .collect(),
            weight: 1.0,
            social_desirability: false,
        }
    }

    fn answer(question_id: &str, option_id: &str, value: f64, rt: u64) -> Answer {
        Answer {
            question_id: question_id.to_string(),
            option_id: option_id.to_string(),
            value,
            response_time_ms: rt,
            answered_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn one_optimal_top_answer_per_motive_scores_100() {
        let questions: Vec<Question> = MotiveSource::ALL
            .into_iter()
            .map(|m| motive_question(&format!("m_{}", m.key()), m))
            .collect();
        let catalog = QuestionCatalog::new(questions);

        let answers: Vec<Answer> = MotiveSource::ALL
            .into_iter()
            .map(|m| {
                let id = format!("m_{}", m.key());
                answer(&id, &format!("{id}_o5"), 5.0, 3000)
            })
            .collect();

        let scores = motive_scores(&catalog, &answers);
        assert_eq!(scores.len(), 8);
        for s in &scores {
            assert_eq!(s.score, 100.0, "{} should hit the ceiling", s.motive);
        }
        // All tied: stable sort keeps canonical order, ranks still 1..8.
        let ranks: Vec<usize> = scores.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, (1..=8).collect::<Vec<_>>());
        assert_eq!(scores[0].motive, MotiveSource::Achievement);
    }

    #[test]
    fn unanswered_motives_fall_back_to_neutral_default() {
        let catalog = QuestionCatalog::new(vec![motive_question("m1", MotiveSource::Freedom)]);
        let scores = motive_scores(&catalog, &[answer("m1", "m1_o5", 5.0, 2500)]);

        let freedom = scores.iter().find(|s| s.motive == MotiveSource::Freedom).unwrap();
        assert_eq!(freedom.score, 100.0);
        assert_eq!(freedom.rank, 1);

        for s in scores.iter().filter(|s| s.motive != MotiveSource::Freedom) {
            assert_eq!(s.score, 37.5, "neutral default for {}", s.motive);
        }
    }

    #[test]
    fn subcategory_fallback_covers_untagged_options() {
        let mut q = motive_question("m1", MotiveSource::Mastery);
        for o in &mut q.options {
            o.tag = None;
        }
        let catalog = QuestionCatalog::new(vec![q]);
        let scores = motive_scores(&catalog, &[answer("m1", "m1_o5", 5.0, 2500)]);
        let mastery = scores.iter().find(|s| s.motive == MotiveSource::Mastery).unwrap();
        assert_eq!(mastery.score, 100.0);
    }

    #[test]
    fn ranks_are_a_permutation_in_descending_score_order() {
        let questions: Vec<Question> = MotiveSource::ALL
            .into_iter()
            .map(|m| motive_question(&format!("m_{}", m.key()), m))
            .collect();
        let catalog = QuestionCatalog::new(questions);

        // Spread: achievement 5, mastery 4, creation 3, ...
        let answers: Vec<Answer> = MotiveSource::ALL
            .into_iter()
            .enumerate()
            .map(|(i, m)| {
                let id = format!("m_{}", m.key());
                let v = 5 - (i % 5);
                answer(&id, &format!("{id}_o{v}"), v as f64, 3000)
            })
            .collect();

        let scores = motive_scores(&catalog, &answers);
        let mut ranks: Vec<usize> = scores.iter().map(|s| s.rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (1..=8).collect::<Vec<_>>());
        for w in scores.windows(2) {
            assert!(w[0].score >= w[1].score, "not descending: {w:?}");
        }
    }
}
