//! Cross-cutting scoring properties driven through the public pipeline.

use chrono::{Duration, TimeZone, Utc};

use mythos_engine::catalog::InteractionKind;
use mythos_engine::dimensions::ConflictResolution;
use mythos_engine::quality::Grade;
use mythos_engine::{
    Answer, MotiveSource, Question, QuestionCatalog, QuestionCategory, ScoreOption, ScoreTag,
    ScoringEngine,
};

fn motive_bank() -> QuestionCatalog {
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
    QuestionCatalog::new(questions)
}

fn at(seq: i64) -> chrono::DateTime<chrono::Utc> {
    Utc.with_ymd_and_hms(2026, 4, 2, 9, 0, 0).unwrap() + Duration::seconds(seq * 5)
}

#[test]
fn one_top_answer_per_motive_at_optimal_latency_scores_100() {
    // Single value-5 sample at 3000 ms: full time weight, mean exactly 5.
    let engine = ScoringEngine::new(motive_bank());
    let answers: Vec<Answer> = MotiveSource::ALL
        .into_iter()
        .enumerate()
        .map(|(i, m)| Answer {
            question_id: format!("mot_{}", m.key()),
            option_id: format!("mot_{}_o5", m.key()),
            value: 5.0,
            response_time_ms: 3000,
            answered_at: at(i as i64),
        })
        .collect();

    let report = engine.score(&answers);
    for m in &report.motives {
        assert_eq!(m.score, 100.0, "{}", m.motive);
    }
}

#[test]
fn empty_batch_returns_documented_defaults_without_panicking() {
    let engine = ScoringEngine::new(motive_bank());
    let report = engine.score(&[]);

    // Neutral default 2.5 rescales to 37.5 in every accumulator-backed
    // dimension.
    assert!(report.motives.iter().all(|m| m.score == 37.5));
    assert!(report.ignition.iter().all(|s| s.score == 37.5));
    assert_eq!(report.maturity.overall, 37.5);
    assert!(report.direction.iter().all(|d| d.approach == 50.0));
    assert!(report.operating.iter().all(|o| o.first_share == 50.0));

    assert_eq!(report.reliability.score, 0.0);
    assert_eq!(report.reliability.grade, Grade::F);
    assert!(!report.reliability.valid);

    // The matcher still returns 8 ranked archetypes.
    assert_eq!(report.archetypes.len(), 8);
    let mut ranks: Vec<usize> = report.archetypes.iter().map(|a| a.rank).collect();
    ranks.sort_unstable();
    assert_eq!(ranks, (1..=8).collect::<Vec<_>>());
}

#[test]
fn straight_lined_extremes_invalidate_the_session() {
    // 24 consecutive identical 5s across three laps of the bank.
    let engine = ScoringEngine::new(motive_bank());
    let answers: Vec<Answer> = (0..24)
        .map(|i| {
            let m = MotiveSource::ALL[i % 8];
            Answer {
                question_id: format!("mot_{}", m.key()),
                option_id: format!("mot_{}_o5", m.key()),
                value: 5.0,
                response_time_ms: 2500,
                answered_at: at(i as i64),
            }
        })
        .collect();

    let report = engine.score(&answers);
    let reliability = &report.reliability;

    assert!(reliability.warnings.iter().any(|w| w.contains("extreme")));
    // The extreme-streak penalty is driven to its 50-point cap.
    assert_eq!(reliability.penalties.extreme_runs, 50.0);
    assert!(!reliability.valid);
    assert_eq!(reliability.grade, Grade::F);
}

#[test]
fn alternating_conflict_choices_with_shrinking_latency_oscillate() {
    let questions: Vec<Question> = (0..20)
        .map(|i| Question {
            id: format!("cf{i}"),
            category: QuestionCategory::Conflict,
            subcategory: Some("freedom_security".to_string()),
            kind: InteractionKind::Scenario,
            options: vec![
                ScoreOption {
                    id: format!("cf{i}_free"),
                    value: 5.0,
                    tag: Some(ScoreTag::ConflictLean { pole: Some(MotiveSource::Freedom) }),
                },
                ScoreOption {
                    id: format!("cf{i}_safe"),
                    value: 1.0,
                    tag: Some(ScoreTag::ConflictLean { pole: Some(MotiveSource::Security) }),
                },
            ],
            weight: 1.0,
            social_desirability: false,
        })
        .collect();
    let engine = ScoringEngine::new(QuestionCatalog::new(questions));

    // Raw values alternate 5 and 1 while latency shrinks.
    let answers: Vec<Answer> = (0..20)
        .map(|i| {
            let (option, value) = if i % 2 == 0 { ("free", 5.0) } else { ("safe", 1.0) };
            Answer {
                question_id: format!("cf{i}"),
                option_id: format!("cf{i}_{option}"),
                value,
                response_time_ms: 6000u64.saturating_sub(250 * i as u64).max(400),
                answered_at: at(i as i64),
            }
        })
        .collect();

    let report = engine.score(&answers);
    assert_eq!(report.conflicts.len(), 1);
    let pair = &report.conflicts[0];
    assert!(pair.oscillation_rate > 0.4, "rate {}", pair.oscillation_rate);
    assert_eq!(pair.resolution, ConflictResolution::Oscillating);
}

#[test]
fn rescale_bounds_hold_through_the_pipeline() {
    // All-1 answers floor at 0; all-5 answers hit 100; nothing escapes
    // [0, 100] at any latency.
    let engine = ScoringEngine::new(motive_bank());

    for (value, expected) in [(1u8, 0.0), (5u8, 100.0)] {
        let answers: Vec<Answer> = MotiveSource::ALL
            .into_iter()
            .enumerate()
            .map(|(i, m)| Answer {
                question_id: format!("mot_{}", m.key()),
                option_id: format!("mot_{}_o{value}", m.key()),
                value: value as f64,
                response_time_ms: 100 + 2000 * i as u64,
                answered_at: at(i as i64),
            })
            .collect();
        let report = engine.score(&answers);
        for m in &report.motives {
            assert_eq!(m.score, expected);
        }
    }
}
