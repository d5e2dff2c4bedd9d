//! End-to-end pipeline tests over a realistic miniature item bank.

use chrono::{Duration, TimeZone, Utc};

use mythos_engine::catalog::{
    Direction, DrainSource, FlowPattern, IgnitionTrigger, InteractionKind, MaturityFacet,
    OperatingAxis, Situation,
};
use mythos_engine::{
    Answer, MotiveSource, Question, QuestionCatalog, ScoreOption, ScoreTag, ScoringEngine,
};

fn likert(id: &str, category: mythos_engine::QuestionCategory, subcategory: Option<&str>, tag: Option<ScoreTag>) -> Question {
    Question {
        id: id.to_string(),
        category,
        subcategory: subcategory.map(str::to_string),
        kind: InteractionKind::Likert,
        options: (1..=5)
            .map(|v| ScoreOption {
                id: format!("{id}_o{v}"),
                value: v as f64,
                tag: tag.clone(),
            })
            .collect(),
        weight: 1.0,
        social_desirability: false,
    }
}

fn two_option(id: &str, category: mythos_engine::QuestionCategory, subcategory: Option<&str>, a: (f64, ScoreTag), b: (f64, ScoreTag)) -> Question {
    Question {
        id: id.to_string(),
        category,
        subcategory: subcategory.map(str::to_string),
        kind: InteractionKind::Scenario,
        options: vec![
            ScoreOption { id: format!("{id}_a"), value: a.0, tag: Some(a.1) },
            ScoreOption { id: format!("{id}_b"), value: b.0, tag: Some(b.1) },
        ],
        weight: 1.0,
        social_desirability: false,
    }
}

/// A bank touching every category the engine scores.
fn sample_catalog() -> QuestionCatalog {
    use mythos_engine::QuestionCategory as C;

    let mut questions = Vec::new();

    for m in MotiveSource::ALL {
        questions.push(likert(
            &format!("mot_{}", m.key()),
            C::MotiveSource,
            Some(m.key()),
            Some(ScoreTag::Motive { motive: Some(m) }),
        ));
    }
    for t in IgnitionTrigger::ALL {
        questions.push(likert(
            &format!("ign_{}", t.key()),
            C::Ignition,
            Some(t.key()),
            Some(ScoreTag::Ignition { trigger: Some(t) }),
        ));
    }
    for (i, m) in [MotiveSource::Achievement, MotiveSource::Freedom].into_iter().enumerate() {
        questions.push(two_option(
            &format!("dir_{i}"),
            C::Direction,
            Some(m.key()),
            (4.0, ScoreTag::Direction { motive: m, direction: Direction::Approach }),
            (4.0, ScoreTag::Direction { motive: m, direction: Direction::Avoidance }),
        ));
    }
    for axis in OperatingAxis::ALL {
        let (first, second) = axis.poles();
        questions.push(two_option(
            &format!("op_{axis:?}").to_lowercase(),
            C::Operating,
            None,
            (4.0, ScoreTag::Operating { axis: None, pole: first }),
            (4.0, ScoreTag::Operating { axis: None, pole: second }),
        ));
    }
    questions.push(likert("en_charge", C::Energy, None, Some(ScoreTag::Charge { source: MotiveSource::Adventure })));
    questions.push(likert("en_drain", C::Energy, None, Some(ScoreTag::Drain { source: DrainSource::Routine })));
    questions.push(likert("en_flow", C::Energy, None, Some(ScoreTag::Flow { pattern: FlowPattern::DeepFocus })));
    for i in 0..2 {
        questions.push(two_option(
            &format!("cf_{i}"),
            C::Conflict,
            Some("achievement_connection"),
            (4.0, ScoreTag::ConflictLean { pole: Some(MotiveSource::Achievement) }),
            (4.0, ScoreTag::ConflictLean { pole: Some(MotiveSource::Connection) }),
        ));
    }
    questions.push(likert(
        "cx_pressure",
        C::Context,
        Some("pressure"),
        Some(ScoreTag::Context { situation: Some(Situation::Pressure), motive: Some(MotiveSource::Achievement) }),
    ));
    questions.push(likert(
        "hd_shadow",
        C::Hidden,
        None,
        Some(ScoreTag::Shadow { motive: MotiveSource::Recognition }),
    ));
    questions.push(likert("mt_aware", C::Maturity, Some("awareness"), Some(ScoreTag::Maturity { facet: MaturityFacet::Awareness })));
    questions.push(likert("mt_growth", C::Maturity, Some("growth"), Some(ScoreTag::Maturity { facet: MaturityFacet::Growth })));
    questions.push(likert("vl_honesty", C::Validation, None, Some(ScoreTag::Honesty)));

    QuestionCatalog::new(questions)
}

/// A deliberate, achievement-leaning response session.
fn sample_answers() -> Vec<Answer> {
    let start = Utc.with_ymd_and_hms(2026, 4, 2, 9, 0, 0).unwrap();
    let mut seq = 0i64;
    let mut answer = |question_id: &str, option_id: &str, value: f64, rt: u64| {
        seq += 1;
        Answer {
            question_id: question_id.to_string(),
            option_id: option_id.to_string(),
            value,
            response_time_ms: rt,
            answered_at: start + Duration::seconds(seq * 6),
        }
    };

    let mut answers = Vec::new();
    // Strong achievement/freedom/adventure, weak security/connection.
    for (m, v) in [
        (MotiveSource::Achievement, 5),
        (MotiveSource::Mastery, 4),
        (MotiveSource::Creation, 3),
        (MotiveSource::Recognition, 3),
        (MotiveSource::Connection, 2),
        (MotiveSource::Security, 1),
        (MotiveSource::Freedom, 5),
        (MotiveSource::Adventure, 4),
    ] {
        let id = format!("mot_{}", m.key());
        answers.push(answer(&id, &format!("{id}_o{v}"), v as f64, 2400 + (v as u64) * 150));
    }
    for (t, v) in IgnitionTrigger::ALL.into_iter().zip([5, 3, 4, 2, 4, 3]) {
        let id = format!("ign_{}", t.key());
        answers.push(answer(&id, &format!("{id}_o{v}"), v as f64, 3100));
    }
    answers.push(answer("dir_0", "dir_0_a", 4.0, 2800));
    answers.push(answer("dir_1", "dir_1_a", 4.0, 2900));
    answers.push(answer("op_rhythm", "op_rhythm_a", 4.0, 2600));
    answers.push(answer("op_recharge", "op_recharge_b", 4.0, 2700));
    answers.push(answer("op_release", "op_release_a", 4.0, 3300));
    answers.push(answer("op_recovery", "op_recovery_a", 4.0, 2500));
    answers.push(answer("en_charge", "en_charge_o5", 5.0, 2900));
    answers.push(answer("en_drain", "en_drain_o4", 4.0, 3500));
    answers.push(answer("en_flow", "en_flow_o4", 4.0, 2800));
    answers.push(answer("cf_0", "cf_0_a", 4.0, 4200));
    answers.push(answer("cf_1", "cf_1_a", 4.0, 3900));
    answers.push(answer("cx_pressure", "cx_pressure_o5", 5.0, 3000));
    answers.push(answer("hd_shadow", "hd_shadow_o4", 4.0, 5600));
    answers.push(answer("mt_aware", "mt_aware_o4", 4.0, 2700));
    answers.push(answer("mt_growth", "mt_growth_o3", 3.0, 2600));
    answers.push(answer("vl_honesty", "vl_honesty_o4", 4.0, 2500));

    answers
}

#[test]
fn full_report_is_coherent() {
    let engine = ScoringEngine::new(sample_catalog());
    let answers = sample_answers();
    let report = engine.score(&answers);

    assert_eq!(report.question_count, answers.len());

    // Achievement leads the motive ranking.
    assert_eq!(report.motives[0].motive, MotiveSource::Achievement);
    assert_eq!(report.motives[0].rank, 1);
    assert_eq!(report.motives[0].score, 100.0);

    // Ranks are permutations in every ranked family.
    for (len, ranks) in [
        (8, report.motives.iter().map(|s| s.rank).collect::<Vec<_>>()),
        (6, report.ignition.iter().map(|s| s.rank).collect::<Vec<_>>()),
        (8, report.energy.charge.iter().map(|s| s.rank).collect::<Vec<_>>()),
        (8, report.energy.drain.iter().map(|s| s.rank).collect::<Vec<_>>()),
        (8, report.archetypes.iter().map(|s| s.rank).collect::<Vec<_>>()),
    ] {
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=len).collect::<Vec<_>>());
    }

    // Direction sides always sum to 100.
    for d in &report.direction {
        assert_eq!(d.approach + d.avoidance, 100.0);
    }

    // The conflict pair was answered one-sidedly.
    assert_eq!(report.conflicts.len(), 1);
    assert_eq!(report.conflicts[0].dominant, MotiveSource::Achievement);

    // Pressure context shows up with a stress label.
    assert_eq!(report.contexts.contexts.len(), 1);
    assert!(report.contexts.stress_response.is_some());

    // Deliberate latencies and varied values: reliable session.
    assert!(report.reliability.valid, "warnings: {:?}", report.reliability.warnings);

    // Insights cover every motive.
    assert_eq!(report.insights.stages.len(), 8);
    assert_eq!(report.insights.uncertainty.len(), 8);
    assert_eq!(report.insights.evolution.motives.len(), 8);
    assert!(!report.insights.suggestions.is_empty());

    // Matching: full ranking plus top-3 personas of the winning archetype.
    assert_eq!(report.archetypes.len(), 8);
    assert_eq!(report.primary_archetype.rank, 1);
    assert_eq!(report.secondary_archetype.rank, 2);
    assert_eq!(report.personas.len(), 3);
    for p in &report.personas {
        assert_eq!(p.archetype, report.primary_archetype.archetype);
        assert!((30.0..=100.0).contains(&p.similarity));
    }
}

#[test]
fn identical_input_yields_byte_identical_output() {
    let engine = ScoringEngine::new(sample_catalog());
    let answers = sample_answers();

    let first = serde_json::to_string(&engine.score(&answers)).unwrap();
    let second = serde_json::to_string(&engine.score(&answers)).unwrap();
    assert_eq!(first, second);

    // A second engine over an identically-built catalog agrees too.
    let other_engine = ScoringEngine::new(sample_catalog());
    let third = serde_json::to_string(&other_engine.score(&answers)).unwrap();
    assert_eq!(first, third);
}

#[test]
fn stale_answers_do_not_disturb_dimension_scores() {
    let engine = ScoringEngine::new(sample_catalog());
    let mut answers = sample_answers();
    let clean = engine.score(&answers);

    // A stale client batch: unknown question, and a known question with a
    // removed option.
    let start = Utc.with_ymd_and_hms(2026, 4, 2, 10, 0, 0).unwrap();
    answers.push(Answer {
        question_id: "mot_removed".into(),
        option_id: "mot_removed_o5".into(),
        value: 5.0,
        response_time_ms: 2500,
        answered_at: start,
    });
    answers.push(Answer {
        question_id: "mot_achievement".into(),
        option_id: "mot_achievement_o9".into(),
        value: 5.0,
        response_time_ms: 2500,
        answered_at: start + Duration::seconds(6),
    });

    let stale = engine.score(&answers);
    // Semantic dimensions are untouched; only raw-stream bookkeeping moves.
    assert_eq!(clean.motives, stale.motives);
    assert_eq!(clean.ignition, stale.ignition);
    assert_eq!(clean.direction, stale.direction);
    assert_eq!(clean.energy, stale.energy);
    assert_eq!(clean.maturity, stale.maturity);
    assert_eq!(clean.archetypes, stale.archetypes);
    assert_eq!(stale.question_count, clean.question_count + 2);
}

#[test]
fn report_serializes_for_the_presentation_layer() {
    let engine = ScoringEngine::new(sample_catalog());
    let value = serde_json::to_value(engine.score(&sample_answers())).unwrap();
    assert!(value.get("motives").is_some());
    assert!(value.get("reliability").is_some());
    assert!(value.get("primary_archetype").is_some());
    assert!(value["insights"].get("tensions").is_some());
}
