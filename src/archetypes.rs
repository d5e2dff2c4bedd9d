//! The eight narrative archetypes and the hybrid weighted-sum-plus-rules
//! matcher.
//!
//! A pure weighted sum cannot express "this archetype *requires* a minimum
//! on its defining motive" or "is excluded by a conflicting motive being too
//! high" — a respondent with uniformly moderate scores would weakly match
//! everything. The condition set layers those hard requirements on top of
//! the weights as bonuses and penalties.

use serde::Serialize;

use crate::catalog::MotiveSource;
use crate::dimensions::{sort_and_rank, MotiveVector};

// =============================================================================
// Archetype definitions
// =============================================================================

/// One of the eight fixed archetypes. Declaration order is the stable
/// tie-break order for equal match scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Conqueror,
    Sage,
    Creator,
    Sovereign,
    Healer,
    Guardian,
    Rebel,
    Explorer,
}

impl Archetype {
    pub const ALL: [Archetype; 8] = [
        Archetype::Conqueror,
        Archetype::Sage,
        Archetype::Creator,
        Archetype::Sovereign,
        Archetype::Healer,
        Archetype::Guardian,
        Archetype::Rebel,
        Archetype::Explorer,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Conqueror => "The Conqueror",
            Self::Sage => "The Sage",
            Self::Creator => "The Creator",
            Self::Sovereign => "The Sovereign",
            Self::Healer => "The Healer",
            Self::Guardian => "The Guardian",
            Self::Rebel => "The Rebel",
            Self::Explorer => "The Explorer",
        }
    }
}

/// Minimum-score requirement on one motive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Threshold {
    pub motive: MotiveSource,
    pub min: f64,
}

/// Maximum-score ceiling on one motive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ceiling {
    pub motive: MotiveSource,
    pub max: f64,
}

/// Condition set layered on top of the weight vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArchetypeConditions {
    /// Defining motive: met +10, unmet −15.
    pub primary: Threshold,
    /// Supporting motive: met +5.
    pub secondary: Option<Threshold>,
    /// Conflicting motive: exceeded −15.
    pub exclude: Option<Ceiling>,
}

/// Weight vector plus conditions for one archetype.
///
/// Weights are relative contributions and need not sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypeProfile {
    pub archetype: Archetype,
    pub weights: Vec<(MotiveSource, f64)>,
    pub conditions: ArchetypeConditions,
}

/// The default archetype table.
pub fn archetype_profiles() -> Vec<ArchetypeProfile> {
    use MotiveSource::*;

    vec![
        ArchetypeProfile {
            archetype: Archetype::Conqueror,
            weights: vec![(Achievement, 0.45), (Freedom, 0.25), (Mastery, 0.15), (Recognition, 0.15)],
            conditions: ArchetypeConditions {
                primary: Threshold { motive: Achievement, min: 70.0 },
                secondary: None,
                exclude: Some(Ceiling { motive: Security, max: 60.0 }),
            },
        },
        ArchetypeProfile {
            archetype: Archetype::Sage,
            weights: vec![(Mastery, 0.45), (Achievement, 0.20), (Creation, 0.20), (Connection, 0.15)],
            conditions: ArchetypeConditions {
                primary: Threshold { motive: Mastery, min: 70.0 },
                secondary: Some(Threshold { motive: Creation, min: 50.0 }),
                exclude: None,
            },
        },
        ArchetypeProfile {
            archetype: Archetype::Creator,
            weights: vec![(Creation, 0.45), (Mastery, 0.25), (Freedom, 0.20), (Recognition, 0.10)],
            conditions: ArchetypeConditions {
                primary: Threshold { motive: Creation, min: 70.0 },
                secondary: Some(Threshold { motive: Freedom, min: 50.0 }),
                exclude: None,
            },
        },
        ArchetypeProfile {
            archetype: Archetype::Sovereign,
            weights: vec![(Recognition, 0.40), (Achievement, 0.25), (Security, 0.20), (Connection, 0.15)],
            conditions: ArchetypeConditions {
                primary: Threshold { motive: Recognition, min: 65.0 },
                secondary: Some(Threshold { motive: Achievement, min: 55.0 }),
                exclude: None,
            },
        },
        ArchetypeProfile {
            archetype: Archetype::Healer,
            weights: vec![(Connection, 0.45), (Security, 0.25), (Creation, 0.15), (Mastery, 0.15)],
            conditions: ArchetypeConditions {
                primary: Threshold { motive: Connection, min: 70.0 },
                secondary: Some(Threshold { motive: Security, min: 50.0 }),
                exclude: None,
            },
        },
        ArchetypeProfile {
            archetype: Archetype::Guardian,
            weights: vec![(Security, 0.45), (Connection, 0.25), (Achievement, 0.15), (Mastery, 0.15)],
            conditions: ArchetypeConditions {
                primary: Threshold { motive: Security, min: 70.0 },
                secondary: Some(Threshold { motive: Connection, min: 55.0 }),
                exclude: None,
            },
        },
        ArchetypeProfile {
            archetype: Archetype::Rebel,
            weights: vec![(Freedom, 0.45), (Creation, 0.25), (Adventure, 0.20), (Achievement, 0.10)],
            conditions: ArchetypeConditions {
                primary: Threshold { motive: Freedom, min: 70.0 },
                secondary: None,
                exclude: Some(Ceiling { motive: Security, max: 50.0 }),
            },
        },
        ArchetypeProfile {
            archetype: Archetype::Explorer,
            weights: vec![(Adventure, 0.45), (Freedom, 0.25), (Mastery, 0.20), (Creation, 0.10)],
            conditions: ArchetypeConditions {
                primary: Threshold { motive: Adventure, min: 70.0 },
                secondary: Some(Threshold { motive: Freedom, min: 55.0 }),
                exclude: None,
            },
        },
    ]
}

// =============================================================================
// Matching
// =============================================================================

/// Condition adjustments.
const PRIMARY_MET_BONUS: f64 = 10.0;
const PRIMARY_UNMET_PENALTY: f64 = -15.0;
const SECONDARY_MET_BONUS: f64 = 5.0;
const EXCLUDE_EXCEEDED_PENALTY: f64 = -15.0;

/// Ranked match against one archetype.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypeMatch {
    pub archetype: Archetype,
    pub title: &'static str,
    /// 0–100, clamped after condition adjustments.
    pub score: f64,
    /// 1..8, dense, descending.
    pub rank: usize,
}

/// Score the motive vector against every archetype profile.
pub fn match_archetypes(motives: &MotiveVector, profiles: &[ArchetypeProfile]) -> Vec<ArchetypeMatch> {
    let mut matches: Vec<ArchetypeMatch> = profiles
        .iter()
        .map(|profile| {
            // Weighted sum: Σ (user/100 × weight × 100).
            let mut score: f64 = profile
                .weights
                .iter()
                .map(|(motive, weight)| motives.get(*motive) * weight)
                .sum();

            let c = &profile.conditions;
            score += if motives.get(c.primary.motive) >= c.primary.min {
                PRIMARY_MET_BONUS
            } else {
                PRIMARY_UNMET_PENALTY
            };
            if let Some(secondary) = c.secondary {
                if motives.get(secondary.motive) >= secondary.min {
                    score += SECONDARY_MET_BONUS;
                }
            }
            if let Some(exclude) = c.exclude {
                if motives.get(exclude.motive) > exclude.max {
                    score += EXCLUDE_EXCEEDED_PENALTY;
                }
            }

            ArchetypeMatch {
                archetype: profile.archetype,
                title: profile.archetype.title(),
                score: round1(score.clamp(0.0, 100.0)),
                rank: 0,
            }
        })
        .collect();

    sort_and_rank(&mut matches, |m| m.score, |m, r| m.rank = r);
    matches
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
