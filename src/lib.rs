#![forbid(unsafe_code)]

//! # mythos-engine
//!
//! Deterministic psychometric scoring for single-choice motivation
//! questionnaires.
//!
//! A batch of (question, chosen option, response latency) answers goes in;
//! out comes a ranked multi-dimensional motive profile, a response-quality
//! verdict, a bundle of derived insights, and ranked archetype + persona
//! matches. Aggregation is confidence-weighted: each answer's structural
//! weight is multiplied by a fixed response-time curve that discounts both
//! impulsive taps and distracted dwelling.
//!
//! The engine is a pure computation — no I/O, no shared mutable state, no
//! randomness. The same answer batch always yields byte-identical output,
//! and low-quality input is characterized (warnings, a validity verdict)
//! rather than rejected.

pub mod accumulator;
pub mod archetypes;
pub mod catalog;
pub mod dimensions;
pub mod insights;
pub mod personas;
pub mod pipeline;
pub mod quality;

pub use archetypes::{archetype_profiles, match_archetypes, Archetype, ArchetypeMatch};
pub use catalog::{
    Answer, CatalogError, MotiveSource, Question, QuestionCatalog, QuestionCategory, ScoreOption,
    ScoreTag,
};
pub use dimensions::{MotiveScore, MotiveVector};
pub use personas::{match_personas, persona_roster, Persona, PersonaMatch};
pub use pipeline::{InsightBundle, ScoringEngine, ScoringReport};
pub use quality::{Grade, ReliabilityScore, ResponseTimeProfile};
