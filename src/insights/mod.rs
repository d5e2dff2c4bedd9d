//! Secondary analyses built on top of the primary dimension scores.
//!
//! These are pure functions of already-computed scores; only the
//! social-desirability detector and the consistency breakdown go back to the
//! raw answer stream, and both say so in their signatures.

mod bias;
mod consistency;
mod evolution;
mod stages;
mod suggestions;
mod tension;
mod uncertainty;

pub use bias::{social_desirability, BiasAssessment, BiasRisk};
pub use consistency::{consistency_breakdown, CategoryConsistency, ConsistencyBreakdown};
pub use evolution::{evolution_outlook, EvolutionOutlook, MotiveEvolution, Trend};
pub use stages::{development_stages, DevelopmentStage};
pub use suggestions::{development_suggestions, Suggestion};
pub use tension::{tension_map, TensionBand, TensionMap, TensionPair};
pub use uncertainty::{uncertainty_bands, UncertaintyBand};
