//! Per-motive uncertainty bands.
//!
//! The margin is heuristic, not a sampling-theoretic interval: it widens as
//! reliability drops and as scores move away from the midpoint (extreme
//! scores rest on fewer effective samples). The "95%" string is a
//! presentation label the report layer prints next to the band — it is not
//! a statistical guarantee, and the type name says so.

use serde::Serialize;

use crate::catalog::MotiveSource;
use crate::dimensions::MotiveScore;
use crate::quality::ReliabilityScore;

/// Presentation-only confidence label.
const CONFIDENCE_LABEL: &str = "95%";

/// Symmetric ± band around one motive score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UncertaintyBand {
    pub motive: MotiveSource,
    pub score: f64,
    pub margin: f64,
    pub low: f64,
    pub high: f64,
    pub confidence_label: &'static str,
}

pub fn uncertainty_bands(
    motives: &[MotiveScore],
    reliability: &ReliabilityScore,
) -> Vec<UncertaintyBand> {
    let base = (100.0 - reliability.score) / 10.0;
    motives
        .iter()
        .map(|m| {
            let margin = round1(base * (1.0 + (m.score - 50.0).abs() / 100.0));
            UncertaintyBand {
                motive: m.motive,
                score: m.score,
                margin,
                low: round1((m.score - margin).max(0.0)),
                high: round1((m.score + margin).min(100.0)),
                confidence_label: CONFIDENCE_LABEL,
            }
        })
        .collect()
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
