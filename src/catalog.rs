//! Static item bank: questions, options, typed score tags, and the lookup
//! table every scoring pass resolves answers against.
//!
//! The catalog is explicitly constructed and immutable for the life of the
//! engine — there is no module-level registry. Multiple catalogs (production
//! bank, test fixtures) coexist freely; rebuilding means constructing a new
//! `QuestionCatalog`, which is idempotent by definition.
//!
//! Answers referencing unknown question or option ids are a data-integrity
//! tolerance, not an error: `resolve` returns `None` and callers skip the
//! answer. A stale client-side answer set must never abort scoring.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Core vocabularies
// =============================================================================

/// One of the eight fundamental motive sources.
///
/// `ALL` fixes the canonical ordering used for stable tie-breaking in every
/// ranked output — two motives with identical scores keep this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotiveSource {
    Achievement,
    Mastery,
    Creation,
    Recognition,
    Connection,
    Security,
    Freedom,
    Adventure,
}

impl MotiveSource {
    pub const ALL: [MotiveSource; 8] = [
        MotiveSource::Achievement,
        MotiveSource::Mastery,
        MotiveSource::Creation,
        MotiveSource::Recognition,
        MotiveSource::Connection,
        MotiveSource::Security,
        MotiveSource::Freedom,
        MotiveSource::Adventure,
    ];

    /// Canonical index into 8-wide vectors (archetype weights, persona
    /// motivation profiles).
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|m| *m == self).expect("motive in ALL")
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Achievement => "achievement",
            Self::Mastery => "mastery",
            Self::Creation => "creation",
            Self::Recognition => "recognition",
            Self::Connection => "connection",
            Self::Security => "security",
            Self::Freedom => "freedom",
            Self::Adventure => "adventure",
        }
    }

    /// Parse a subcategory fragment ("achievement" in "achievement_connection").
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }
}

impl fmt::Display for MotiveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Situational trigger that activates motivated behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnitionTrigger {
    Competition,
    Complexity,
    Deadline,
    Audience,
    Autonomy,
    Crisis,
}

impl IgnitionTrigger {
    pub const ALL: [IgnitionTrigger; 6] = [
        IgnitionTrigger::Competition,
        IgnitionTrigger::Complexity,
        IgnitionTrigger::Deadline,
        IgnitionTrigger::Audience,
        IgnitionTrigger::Autonomy,
        IgnitionTrigger::Crisis,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Competition => "competition",
            Self::Complexity => "complexity",
            Self::Deadline => "deadline",
            Self::Audience => "audience",
            Self::Autonomy => "autonomy",
            Self::Crisis => "crisis",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

/// Approach/avoidance polarity of a motive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Approach,
    Avoidance,
}

/// The four bipolar operating-style axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatingAxis {
    /// planned ↔ spontaneous
    Rhythm,
    /// solitary ↔ social
    Recharge,
    /// endurance ↔ burst
    Release,
    /// quick ↔ slow
    Recovery,
}

impl OperatingAxis {
    pub const ALL: [OperatingAxis; 4] = [
        OperatingAxis::Rhythm,
        OperatingAxis::Recharge,
        OperatingAxis::Release,
        OperatingAxis::Recovery,
    ];

    /// The two named poles of this axis, in (first, second) order.
    pub fn poles(self) -> (OperatingPole, OperatingPole) {
        match self {
            Self::Rhythm => (OperatingPole::Planned, OperatingPole::Spontaneous),
            Self::Recharge => (OperatingPole::Solitary, OperatingPole::Social),
            Self::Release => (OperatingPole::Endurance, OperatingPole::Burst),
            Self::Recovery => (OperatingPole::Quick, OperatingPole::Slow),
        }
    }

    /// Legacy subcategory spellings used by older item banks.
    pub fn from_subcategory(key: &str) -> Option<Self> {
        match key {
            "rhythm" | "scope" => Some(Self::Rhythm),
            "recharge" => Some(Self::Recharge),
            "release" | "relay" => Some(Self::Release),
            "recovery" | "resistance" => Some(Self::Recovery),
            _ => None,
        }
    }
}

/// A named pole of one operating axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatingPole {
    Planned,
    Spontaneous,
    Solitary,
    Social,
    Endurance,
    Burst,
    Quick,
    Slow,
}

impl OperatingPole {
    /// The axis this pole belongs to.
    pub fn axis(self) -> OperatingAxis {
        match self {
            Self::Planned | Self::Spontaneous => OperatingAxis::Rhythm,
            Self::Solitary | Self::Social => OperatingAxis::Recharge,
            Self::Endurance | Self::Burst => OperatingAxis::Release,
            Self::Quick | Self::Slow => OperatingAxis::Recovery,
        }
    }
}

/// Fixed set of named energy stressors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrainSource {
    NoProgress,
    Control,
    Isolation,
    Routine,
    Meaningless,
    Conflict,
    Unrecognized,
    Uncertainty,
}

impl DrainSource {
    pub const ALL: [DrainSource; 8] = [
        DrainSource::NoProgress,
        DrainSource::Control,
        DrainSource::Isolation,
        DrainSource::Routine,
        DrainSource::Meaningless,
        DrainSource::Conflict,
        DrainSource::Unrecognized,
        DrainSource::Uncertainty,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::NoProgress => "no_progress",
            Self::Control => "control",
            Self::Isolation => "isolation",
            Self::Routine => "routine",
            Self::Meaningless => "meaningless",
            Self::Conflict => "conflict",
            Self::Unrecognized => "unrecognized",
            Self::Uncertainty => "uncertainty",
        }
    }
}

/// Flow-state preference patterns measured alongside energy items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowPattern {
    DeepFocus,
    Challenge,
    Clarity,
    Feedback,
    Environment,
}

impl FlowPattern {
    pub const ALL: [FlowPattern; 5] = [
        FlowPattern::DeepFocus,
        FlowPattern::Challenge,
        FlowPattern::Clarity,
        FlowPattern::Feedback,
        FlowPattern::Environment,
    ];
}

/// Situational context buckets for the context-shift analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Situation {
    Normal,
    Pressure,
    Growth,
    Crisis,
}

impl Situation {
    pub const ALL: [Situation; 4] = [
        Situation::Normal,
        Situation::Pressure,
        Situation::Growth,
        Situation::Crisis,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "normal" => Some(Self::Normal),
            "pressure" => Some(Self::Pressure),
            "growth" => Some(Self::Growth),
            "crisis" => Some(Self::Crisis),
            _ => None,
        }
    }
}

/// Maturity facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityFacet {
    Awareness,
    Integration,
    Growth,
}

impl MaturityFacet {
    pub fn from_subcategory(key: &str) -> Option<Self> {
        match key {
            "awareness" | "emotional" | "reflection" => Some(Self::Awareness),
            "integration" | "balance" | "harmony" | "synthesis" => Some(Self::Integration),
            "growth" | "learning" | "resilience" => Some(Self::Growth),
            _ => None,
        }
    }
}

/// Question category — determines which calculator consumes the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    MotiveSource,
    Ignition,
    Direction,
    Operating,
    Energy,
    Conflict,
    Context,
    Hidden,
    Maturity,
    Validation,
}

impl QuestionCategory {
    pub const ALL: [QuestionCategory; 10] = [
        QuestionCategory::MotiveSource,
        QuestionCategory::Ignition,
        QuestionCategory::Direction,
        QuestionCategory::Operating,
        QuestionCategory::Energy,
        QuestionCategory::Conflict,
        QuestionCategory::Context,
        QuestionCategory::Hidden,
        QuestionCategory::Maturity,
        QuestionCategory::Validation,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::MotiveSource => "motive_source",
            Self::Ignition => "ignition",
            Self::Direction => "direction",
            Self::Operating => "operating",
            Self::Energy => "energy",
            Self::Conflict => "conflict",
            Self::Context => "context",
            Self::Hidden => "hidden",
            Self::Maturity => "maturity",
            Self::Validation => "validation",
        }
    }
}

/// How the item is presented by the (out-of-scope) interaction layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Choice,
    Likert,
    Bipolar,
    Scenario,
}

// =============================================================================
// Score tags
// =============================================================================

/// Semantic annotation attached to one answer option.
///
/// One variant per question category: each calculator accepts only the
/// variants it understands and ignores the rest, so a mis-tagged option
/// degrades to "no signal" instead of polluting an unrelated dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreTag {
    /// Motive-source item. `motive` may be omitted when the question's
    /// subcategory already names the motive (choice-type items).
    Motive {
        #[serde(default)]
        motive: Option<MotiveSource>,
    },
    /// Ignition item; `trigger` falls back to the subcategory.
    Ignition {
        #[serde(default)]
        trigger: Option<IgnitionTrigger>,
    },
    /// Approach/avoidance polarity of a specific motive.
    Direction {
        motive: MotiveSource,
        direction: Direction,
    },
    /// Operating-style pole. The axis is implied by the pole; `axis` exists
    /// for banks that spell it explicitly.
    Operating {
        #[serde(default)]
        axis: Option<OperatingAxis>,
        pole: OperatingPole,
    },
    /// Energy charge drawn from a motive.
    Charge { source: MotiveSource },
    /// Energy drain caused by a stressor.
    Drain { source: DrainSource },
    /// Flow-state preference signal.
    Flow { pattern: FlowPattern },
    /// Conflict-pair item: which pole of the pair the option leans toward.
    /// `None` marks the explicit "balanced" option, splitting its mass evenly.
    ConflictLean {
        #[serde(default)]
        pole: Option<MotiveSource>,
    },
    /// Context item: which situation it probes and which motive it loads on.
    Context {
        #[serde(default)]
        situation: Option<Situation>,
        #[serde(default)]
        motive: Option<MotiveSource>,
    },
    /// Suppressed motive surfacing through indirect signals.
    Shadow { motive: MotiveSource },
    /// Motive the respondent projects onto others.
    Projection { motive: MotiveSource },
    /// Compensatory behavior label (free-form, bank-defined).
    Compensation { label: String },
    /// Maturity facet loading.
    Maturity { facet: MaturityFacet },
    /// Cross-item consistency check anchor.
    ConsistencyCheck,
    /// Honesty / social-desirability probe.
    Honesty,
}

// =============================================================================
// Questions, options, answers
// =============================================================================

/// A single answer option on the 1–5 raw scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreOption {
    pub id: String,
    /// Raw value on the 1–5 scale.
    pub value: f64,
    /// Semantic tag; absent tags fall back to the question's subcategory.
    #[serde(default)]
    pub tag: Option<ScoreTag>,
}

/// One questionnaire item. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub category: QuestionCategory,
    #[serde(default)]
    pub subcategory: Option<String>,
    pub kind: InteractionKind,
    pub options: Vec<ScoreOption>,
    /// Structural weight of this item within its dimension.
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Item is phrased so that agreeing is socially flattering; feeds the
    /// social-desirability bias detector.
    #[serde(default)]
    pub social_desirability: bool,
}

fn default_weight() -> f64 {
    1.0
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&ScoreOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

/// One recorded response. Produced by the external interaction layer;
/// treated as an immutable batch by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub option_id: String,
    /// Raw value of the chosen option, 1–5.
    pub value: f64,
    /// Latency between item display and selection.
    pub response_time_ms: u64,
    /// Wall-clock submission time; the fatigue analysis sorts by this.
    pub answered_at: DateTime<Utc>,
}

// =============================================================================
// Catalog
// =============================================================================

/// Errors raised while loading a catalog. Initialization-time only — the
/// scoring path itself never fails; bad data degrades to skipped answers.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog contains no questions")]
    Empty,

    #[error("question {question}: option {option} value {value} outside the 1-5 scale")]
    ValueOutOfRange {
        question: String,
        option: String,
        value: f64,
    },

    #[error("question {question} has no options")]
    NoOptions { question: String },
}

/// Immutable question lookup, built once and passed into the scoring
/// pipeline by reference.
#[derive(Debug, Clone, Default)]
pub struct QuestionCatalog {
    by_id: HashMap<String, Question>,
}

impl QuestionCatalog {
    /// Build a catalog from an item bank. Duplicate ids keep the last
    /// definition (logged, not fatal — rebuilds are idempotent).
    pub fn new(questions: Vec<Question>) -> Self {
        let mut by_id = HashMap::with_capacity(questions.len());
        for q in questions {
            if by_id.contains_key(&q.id) {
                tracing::warn!(question = %q.id, "duplicate question id, keeping last definition");
            }
            by_id.insert(q.id.clone(), q);
        }
        Self { by_id }
    }

    /// Parse and validate a JSON array of questions.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }
        for q in &questions {
            if q.options.is_empty() {
                return Err(CatalogError::NoOptions {
                    question: q.id.clone(),
                });
            }
            for o in &q.options {
                if !(1.0..=5.0).contains(&o.value) {
                    return Err(CatalogError::ValueOutOfRange {
                        question: q.id.clone(),
                        option: o.id.clone(),
                        value: o.value,
                    });
                }
            }
        }
        Ok(Self::new(questions))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.by_id.get(id)
    }

    /// Resolve an answer to its question and chosen option.
    ///
    /// Unknown question or option ids return `None`; callers skip the answer.
    pub fn resolve<'a>(&'a self, answer: &Answer) -> Option<(&'a Question, &'a ScoreOption)> {
        let question = match self.by_id.get(&answer.question_id) {
            Some(q) => q,
            None => {
                tracing::debug!(question = %answer.question_id, "answer references unknown question, skipping");
                return None;
            }
        };
        let option = match question.option(&answer.option_id) {
            Some(o) => o,
            None => {
                tracing::debug!(
                    question = %answer.question_id,
                    option = %answer.option_id,
                    "answer references unknown option, skipping"
                );
                return None;
            }
        };
        Some((question, option))
    }
}
