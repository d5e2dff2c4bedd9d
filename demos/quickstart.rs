//! Minimal end-to-end example for `mythos-engine`.
//!
//! Builds a toy item bank, answers it like a deliberate achievement-driven
//! respondent, and prints the headline results.
//!
//! To run: `cargo run --example quickstart`

use chrono::{Duration, TimeZone, Utc};

use mythos_engine::catalog::InteractionKind;
use mythos_engine::{
    Answer, MotiveSource, Question, QuestionCatalog, QuestionCategory, ScoreOption, ScoreTag,
    ScoringEngine,
};

fn main() {
    // -- Item bank -----------------------------------------------------------

    // One Likert item per motive. A real bank carries ~300 items across ten
    // categories; the engine does not care how many it gets.
    let questions: Vec<Question> = MotiveSource::ALL
        .into_iter()
        .map(|m| Question {
            id: format!("mot_{}", m.key()),
            category: QuestionCategory::MotiveSource,
            subcategory: Some(m.key().to_string()),
            kind: InteractionKind::Likert,
            options: (1..=5)
                .map(|v| ScoreOption {
                    id: format!("mot_{}_o{v}", m.key()),
                    value: v as f64,
                    tag: Some(ScoreTag::Motive { motive: Some(m) }),
                })
                .collect(),
            weight: 1.0,
            social_desirability: false,
        })
        .collect();

    let engine = ScoringEngine::new(QuestionCatalog::new(questions));

    // -- A response session --------------------------------------------------

    let start = Utc.with_ymd_and_hms(2026, 4, 2, 9, 0, 0).unwrap();
    let picks = [
        (MotiveSource::Achievement, 5),
        (MotiveSource::Mastery, 4),
        (MotiveSource::Creation, 3),
        (MotiveSource::Recognition, 4),
        (MotiveSource::Connection, 2),
        (MotiveSource::Security, 1),
        (MotiveSource::Freedom, 4),
        (MotiveSource::Adventure, 3),
    ];
    let answers: Vec<Answer> = picks
        .into_iter()
        .enumerate()
        .map(|(i, (m, v))| Answer {
            question_id: format!("mot_{}", m.key()),
            option_id: format!("mot_{}_o{v}", m.key()),
            value: v as f64,
            response_time_ms: 2500 + 300 * i as u64,
            answered_at: start + Duration::seconds(i as i64 * 8),
        })
        .collect();

    // -- Score and print -----------------------------------------------------

    let report = engine.score(&answers);

    println!("motive profile:");
    for m in &report.motives {
        println!("  {:>2}. {:<12} {:>5.1}", m.rank, m.motive.key(), m.score);
    }

    println!(
        "\nreliability: {:.0} ({:?}), valid: {}",
        report.reliability.score, report.reliability.grade, report.reliability.valid
    );

    println!(
        "\narchetype: {} ({:.1}), runner-up {} ({:.1})",
        report.primary_archetype.title,
        report.primary_archetype.score,
        report.secondary_archetype.title,
        report.secondary_archetype.score,
    );

    println!("\nclosest personas:");
    for p in &report.personas {
        println!("  {:>2}. {:<15} {:>5.1}%  ({})", p.rank, p.name, p.similarity, p.origin);
    }
}
