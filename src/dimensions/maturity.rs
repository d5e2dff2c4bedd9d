//! Motivational maturity: awareness, integration, and growth facets rolled
//! up into an overall score and one of four discrete levels.

use serde::Serialize;

use crate::accumulator::WeightedAccumulator;
use crate::catalog::{Answer, MaturityFacet, QuestionCatalog, QuestionCategory, ScoreTag};

use super::{resolved, round1};

/// A discrete maturity level with its fixed threshold band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaturityLevel {
    pub level: u8,
    pub name: &'static str,
    pub description: &'static str,
}

const LEVELS: [MaturityLevel; 4] = [
    MaturityLevel {
        level: 1,
        name: "Emerging",
        description: "Motives operate mostly outside awareness; reactions drive behavior.",
    },
    MaturityLevel {
        level: 2,
        name: "Aware",
        description: "The main drivers are recognized but not yet reliably steered.",
    },
    MaturityLevel {
        level: 3,
        name: "Integrating",
        description: "Competing motives are actively balanced across life domains.",
    },
    MaturityLevel {
        level: 4,
        name: "Self-authoring",
        description: "Motives are consciously directed and renegotiated as circumstances change.",
    },
];

/// Maturity dimension output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaturityScore {
    pub awareness: f64,
    pub integration: f64,
    pub growth: f64,
    /// Mean of the three facets.
    pub overall: f64,
    pub level: MaturityLevel,
}

/// Fixed thresholds: ≥80 → 4, ≥60 → 3, ≥40 → 2, else 1.
fn level_for(overall: f64) -> MaturityLevel {
    if overall >= 80.0 {
        LEVELS[3]
    } else if overall >= 60.0 {
        LEVELS[2]
    } else if overall >= 40.0 {
        LEVELS[1]
    } else {
        LEVELS[0]
    }
}

pub fn maturity_score(catalog: &QuestionCatalog, answers: &[Answer]) -> MaturityScore {
    let mut awareness = WeightedAccumulator::new();
    let mut integration = WeightedAccumulator::new();
    let mut growth = WeightedAccumulator::new();

    for (answer, question, option) in resolved(catalog, answers, QuestionCategory::Maturity) {
        let facet = match &option.tag {
            Some(ScoreTag::Maturity { facet }) => Some(*facet),
            _ => question
                .subcategory
                .as_deref()
                .and_then(MaturityFacet::from_subcategory),
        };
        let acc = match facet {
            Some(MaturityFacet::Awareness) => &mut awareness,
            Some(MaturityFacet::Integration) => &mut integration,
            Some(MaturityFacet::Growth) => &mut growth,
            None => continue,
        };
        acc.push(option.value, question.weight, answer.response_time_ms);
    }

    let awareness = round1(awareness.score());
    let integration = round1(integration.score());
    let growth = round1(growth.score());
    let overall = round1((awareness + integration + growth) / 3.0);

    MaturityScore {
        awareness,
        integration,
        growth,
        overall,
        level: level_for(overall),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InteractionKind, Question, ScoreOption};
    use chrono::{TimeZone, Utc};

    fn maturity_question(id: &str, facet: MaturityFacet) -> Question {
        Question {
            id: id.to_string(),
            category: QuestionCategory::Maturity,
            subcategory: None,
            kind: InteractionKind::Likert,
            options: (1..=5)
                .map(|v| ScoreOption {
                    id: format!("{id}_o{v}"),
                    value: v as f64,
                    tag: Some(ScoreTag::Maturity { facet }),
                })
                .collect(),
            weight: 1.0,
            social_desirability: false,
        }
    }

    fn answer(question_id: &str, option_id: &str, value: f64) -> Answer {
        Answer {
            question_id: question_id.to_string(),
            option_id: option_id.to_string(),
            value,
            response_time_ms: 3000,
            answered_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn facets_average_into_overall_and_level() {
        let catalog = QuestionCatalog::new(vec![
            maturity_question("ma", MaturityFacet::Awareness),
            maturity_question("mi", MaturityFacet::Integration),
            maturity_question("mg", MaturityFacet::Growth),
        ]);
        let answers = vec![
            answer("ma", "ma_o5", 5.0), // 100
            answer("mi", "mi_o5", 5.0), // 100
            answer("mg", "mg_o3", 3.0), // 50
        ];

        let score = maturity_score(&catalog, &answers);
        assert_eq!(score.awareness, 100.0);
        assert_eq!(score.integration, 100.0);
        assert_eq!(score.growth, 50.0);
        assert_eq!(score.overall, 83.3);
        assert_eq!(score.level.level, 4);
    }

    #[test]
    fn level_thresholds_are_fixed() {
        assert_eq!(level_for(85.0).level, 4);
        assert_eq!(level_for(80.0).level, 4);
        assert_eq!(level_for(79.9).level, 3);
        assert_eq!(level_for(60.0).level, 3);
        assert_eq!(level_for(59.9).level, 2);
        assert_eq!(level_for(40.0).level, 2);
        assert_eq!(level_for(39.9).level, 1);
        assert_eq!(level_for(0.0).level, 1);
    }

    #[test]
    fn subcategory_keywords_route_untagged_items() {
        let mut q = maturity_question("mr", MaturityFacet::Awareness);
        q.subcategory = Some("reflection".into());
        for o in &mut q.options {
            o.tag = None;
        }
        let catalog = QuestionCatalog::new(vec![q]);

        let score = maturity_score(&catalog, &[answer("mr", "mr_o5", 5.0)]);
        assert_eq!(score.awareness, 100.0);
        // Other facets sit at the neutral default.
        assert_eq!(score.integration, 37.5);
    }

    #[test]
    fn empty_batch_sits_at_the_neutral_default() {
        let catalog = QuestionCatalog::new(vec![]);
        let score = maturity_score(&catalog, &[]);
        assert_eq!(score.overall, 37.5);
        assert_eq!(score.level.level, 1);
    }
}
