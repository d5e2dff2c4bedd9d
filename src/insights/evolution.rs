//! Heuristic forward projection of each motive's likely direction.

use serde::Serialize;

use crate::catalog::MotiveSource;
use crate::dimensions::{HiddenProfile, MaturityScore, MotiveScore};

/// Ceiling scores are expected to regress toward the mean.
const CEILING: f64 = 90.0;
/// A shadow this intense tends to surface over time.
const SHADOW_SURFACING: f64 = 60.0;
/// Mid-band scores grow when maturity supports deliberate development.
const GROWTH_LOW: f64 = 40.0;
const GROWTH_HIGH: f64 = 70.0;
const GROWTH_MIN_LEVEL: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Grow,
    Stable,
    Decline,
}

/// Projected direction for one motive, with the rule that fired.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotiveEvolution {
    pub motive: MotiveSource,
    pub trend: Trend,
    pub reason: String,
}

/// Aggregate projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvolutionOutlook {
    pub motives: Vec<MotiveEvolution>,
    /// expanding / consolidating / steady, from the grow-decline balance.
    pub trajectory: &'static str,
}

pub fn evolution_outlook(
    motives: &[MotiveScore],
    maturity: &MaturityScore,
    hidden: &HiddenProfile,
) -> EvolutionOutlook {
    let projected: Vec<MotiveEvolution> = motives
        .iter()
        .map(|m| {
            let shadow = hidden
                .shadow
                .iter()
                .find(|s| s.motive == m.motive)
                .map(|s| s.score)
                .unwrap_or(0.0);

            let (trend, reason) = if m.score >= CEILING {
                (
                    Trend::Decline,
                    format!("score {:.0} is at the ceiling and tends to regress toward the mean", m.score),
                )
            } else if shadow >= SHADOW_SURFACING {
                (
                    Trend::Grow,
                    format!("suppressed counterpart is intense ({shadow:.0}) and tends to surface"),
                )
            } else if maturity.level.level >= GROWTH_MIN_LEVEL
                && (GROWTH_LOW..=GROWTH_HIGH).contains(&m.score)
            {
                (
                    Trend::Grow,
                    format!(
                        "mid-band score with maturity level {} supports deliberate development",
                        maturity.level.level
                    ),
                )
            } else {
                (Trend::Stable, "no strong pressure in either direction".to_string())
            };

            MotiveEvolution { motive: m.motive, trend, reason }
        })
        .collect();

    let grows = projected.iter().filter(|p| p.trend == Trend::Grow).count();
    let declines = projected.iter().filter(|p| p.trend == Trend::Decline).count();
    let trajectory = if grows > declines {
        "expanding"
    } else if declines > grows {
        "consolidating"
    } else {
        "steady"
    };

    EvolutionOutlook { motives: projected, trajectory }
}
