//! Full scoring pipeline: answers in, one aggregate report out.
//!
//! Control flow: catalog lookup (per answer) → nine dimension calculators →
//! response-quality analyzer (same raw answers, independent) →
//! derived-insight calculators (primary scores + quality signals) →
//! archetype matcher (motive vector) → persona matcher (motive vector +
//! winning archetype). Every stage is a pure function over immutable input;
//! the engine holds only the read-only catalog and roster tables, so one
//! engine serves any number of concurrent scoring calls.

use serde::Serialize;

use crate::archetypes::{archetype_profiles, match_archetypes, ArchetypeMatch, ArchetypeProfile};
use crate::catalog::{Answer, QuestionCatalog};
use crate::dimensions::{
    conflict_scores, context_scores, direction_scores, energy_profile, hidden_profile,
    ignition_scores, maturity_score, motive_scores, operating_scores, ConflictScore,
    ContextOutlook, DirectionScore, EnergyProfile, HiddenProfile, IgnitionScore, MaturityScore,
    MotiveScore, MotiveVector, OperatingScore,
};
use crate::insights::{
    consistency_breakdown, development_stages, development_suggestions, evolution_outlook,
    social_desirability, tension_map, uncertainty_bands, BiasAssessment, ConsistencyBreakdown,
    DevelopmentStage, EvolutionOutlook, Suggestion, TensionMap, UncertaintyBand,
};
use crate::personas::{match_personas, persona_roster, Persona, PersonaMatch};
use crate::quality::{reliability_score, time_profile, ReliabilityScore, ResponseTimeProfile};

/// How many personas the report surfaces.
const TOP_PERSONAS: usize = 3;

/// The derived-insight bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightBundle {
    pub stages: Vec<DevelopmentStage>,
    pub tensions: TensionMap,
    pub uncertainty: Vec<UncertaintyBand>,
    pub evolution: EvolutionOutlook,
    pub suggestions: Vec<Suggestion>,
    pub bias: BiasAssessment,
    pub consistency: ConsistencyBreakdown,
}

/// One complete scoring result. Recomputed fresh on every call; the
/// presentation layers consume it as an opaque snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringReport {
    pub question_count: usize,
    pub total_time_ms: u64,

    // Primary dimensions.
    pub motives: Vec<MotiveScore>,
    pub ignition: Vec<IgnitionScore>,
    pub direction: Vec<DirectionScore>,
    pub operating: Vec<OperatingScore>,
    pub energy: EnergyProfile,
    pub conflicts: Vec<ConflictScore>,
    pub contexts: ContextOutlook,
    pub hidden: HiddenProfile,
    pub maturity: MaturityScore,

    // Quality.
    pub time_profile: ResponseTimeProfile,
    pub reliability: ReliabilityScore,

    // Derived insights.
    pub insights: InsightBundle,

    // Matching.
    pub archetypes: Vec<ArchetypeMatch>,
    pub primary_archetype: ArchetypeMatch,
    pub secondary_archetype: ArchetypeMatch,
    /// Top personas within the primary archetype.
    pub personas: Vec<PersonaMatch>,
}

/// The scoring engine: an immutable catalog plus the archetype/persona
/// tables, constructed once and shared by reference.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: QuestionCatalog,
    archetypes: Vec<ArchetypeProfile>,
    personas: Vec<Persona>,
}

impl ScoringEngine {
    /// Engine over the default archetype table and persona roster.
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self::with_tables(catalog, archetype_profiles(), persona_roster())
    }

    /// Engine with custom matching tables (test fixtures, alternative
    /// rosters).
    pub fn with_tables(
        catalog: QuestionCatalog,
        archetypes: Vec<ArchetypeProfile>,
        personas: Vec<Persona>,
    ) -> Self {
        Self {
            catalog,
            archetypes,
            personas,
        }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Run the whole pipeline over one answer batch.
    ///
    /// Never fails: unknown references are skipped, an empty batch produces
    /// the documented defaults, and quality problems come back as computed
    /// outputs rather than errors.
    pub fn score(&self, answers: &[Answer]) -> ScoringReport {
        // Primary dimensions. Motives go first: they are the baseline for
        // the context calculator and the input to both matchers.
        let motives = motive_scores(&self.catalog, answers);
        let motive_vector = MotiveVector::from_scores(&motives);

        let ignition = ignition_scores(&self.catalog, answers);
        let direction = direction_scores(&self.catalog, answers);
        let operating = operating_scores(&self.catalog, answers);
        let energy = energy_profile(&self.catalog, answers);
        let conflicts = conflict_scores(&self.catalog, answers);
        let contexts = context_scores(&self.catalog, answers, &motive_vector);
        let hidden = hidden_profile(&self.catalog, answers);
        let maturity = maturity_score(&self.catalog, answers);

        // Quality, over the raw stream.
        let time_profile = time_profile(answers);
        let reliability = reliability_score(answers, &time_profile);

        // Derived insights.
        let tensions = tension_map(&motive_vector);
        let insights = InsightBundle {
            stages: development_stages(&motives),
            uncertainty: uncertainty_bands(&motives, &reliability),
            evolution: evolution_outlook(&motives, &maturity, &hidden),
            suggestions: development_suggestions(&motive_vector, &maturity, &hidden, &tensions),
            bias: social_desirability(&self.catalog, answers, &motives, &reliability),
            consistency: consistency_breakdown(&self.catalog, answers),
            tensions,
        };

        // Matching.
        let archetypes = match_archetypes(&motive_vector, &self.archetypes);
        let primary_archetype = archetypes[0].clone();
        let secondary_archetype = archetypes[1].clone();
        let mut personas =
            match_personas(&motive_vector, primary_archetype.archetype, &self.personas);
        personas.truncate(TOP_PERSONAS);

        ScoringReport {
            question_count: answers.len(),
            total_time_ms: answers.iter().map(|a| a.response_time_ms).sum(),
            motives,
            ignition,
            direction,
            operating,
            energy,
            conflicts,
            contexts,
            hidden,
            maturity,
            time_profile,
            reliability,
            insights,
            archetypes,
            primary_archetype,
            secondary_archetype,
            personas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_produces_a_complete_default_report() {
        let engine = ScoringEngine::new(QuestionCatalog::new(vec![]));
        let report = engine.score(&[]);

        assert_eq!(report.question_count, 0);
        assert_eq!(report.total_time_ms, 0);
        assert_eq!(report.motives.len(), 8);
        assert!(report.motives.iter().all(|m| m.score == 37.5));
        assert_eq!(report.ignition.len(), 6);
        assert_eq!(report.direction.len(), 8);
        assert_eq!(report.operating.len(), 4);
        assert!(report.conflicts.is_empty());
        assert!(report.contexts.contexts.is_empty());
        assert_eq!(report.reliability.score, 0.0);
        assert!(!report.reliability.valid);

        // Matchers still rank everything.
        assert_eq!(report.archetypes.len(), 8);
        assert_eq!(report.primary_archetype.rank, 1);
        assert_eq!(report.personas.len(), 3);
    }

    #[test]
    fn engine_is_reusable_across_calls() {
        let engine = ScoringEngine::new(QuestionCatalog::new(vec![]));
        let first = engine.score(&[]);
        let second = engine.score(&[]);
        assert_eq!(first, second);
    }
}
