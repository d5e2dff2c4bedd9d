//! Theoretical tension map over fixed motive pairs.
//!
//! Independent of the answer-derived conflict dimension: this reads only the
//! final motive scores against a fixed table of structurally opposed pairs.
//! Tension needs both motives to actually be strong — a dormant motive
//! cannot sustain a conflict — hence the `min` term.

use serde::Serialize;

use crate::catalog::MotiveSource;
use crate::dimensions::MotiveVector;

/// Structural opposition weights. Order fixes output and tie-break order.
const BASE_TENSIONS: [(MotiveSource, MotiveSource, f64); 8] = [
    (MotiveSource::Freedom, MotiveSource::Security, 0.90),
    (MotiveSource::Adventure, MotiveSource::Security, 0.85),
    (MotiveSource::Achievement, MotiveSource::Connection, 0.70),
    (MotiveSource::Creation, MotiveSource::Security, 0.60),
    (MotiveSource::Freedom, MotiveSource::Connection, 0.55),
    (MotiveSource::Recognition, MotiveSource::Mastery, 0.50),
    (MotiveSource::Achievement, MotiveSource::Freedom, 0.40),
    (MotiveSource::Mastery, MotiveSource::Adventure, 0.35),
];

/// Qualitative tension bands: <25 complementary, <45 neutral, <65 tension,
/// else conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TensionBand {
    Complementary,
    Neutral,
    Tension,
    Conflict,
}

impl TensionBand {
    fn from_tension(tension: f64) -> Self {
        if tension < 25.0 {
            Self::Complementary
        } else if tension < 45.0 {
            Self::Neutral
        } else if tension < 65.0 {
            Self::Tension
        } else {
            Self::Conflict
        }
    }
}

/// Tension level for one fixed pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TensionPair {
    pub pair: (MotiveSource, MotiveSource),
    pub base_weight: f64,
    /// `base × min(score_a, score_b)`, 0–100.
    pub tension: f64,
    pub band: TensionBand,
}

/// The full theoretical tension picture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TensionMap {
    pub pairs: Vec<TensionPair>,
    /// Mean tension across all pairs.
    pub overall: f64,
    /// The single highest-tension pair (table order breaks ties).
    pub peak: Option<TensionPair>,
    pub interpretation: String,
}

pub fn tension_map(motives: &MotiveVector) -> TensionMap {
    let pairs: Vec<TensionPair> = BASE_TENSIONS
        .into_iter()
        .map(|(a, b, base)| {
            let tension = round1(base * motives.get(a).min(motives.get(b)));
            TensionPair {
                pair: (a, b),
                base_weight: base,
                tension,
                band: TensionBand::from_tension(tension),
            }
        })
        .collect();

    let overall = round1(pairs.iter().map(|p| p.tension).sum::<f64>() / pairs.len() as f64);
    let peak = pairs
        .iter()
        .fold(None::<&TensionPair>, |best, p| match best {
            Some(b) if b.tension >= p.tension => Some(b),
            _ => Some(p),
        })
        .cloned();

    let interpretation = match &peak {
        Some(p) => {
            let (a, b) = p.pair;
            match p.band {
                TensionBand::Conflict => format!(
                    "{a} and {b} pull hard against each other; decisions touching both will feel costly"
                ),
                TensionBand::Tension => format!(
                    "{a} and {b} compete for the same choices; trade-offs between them need deliberate handling"
                ),
                TensionBand::Neutral => format!(
                    "{a} and {b} coexist with ordinary friction; no pair dominates the inner landscape"
                ),
                TensionBand::Complementary => {
                    "no structurally opposed motives are simultaneously strong; the profile is internally settled"
                        .to_string()
                }
            }
        }
        None => String::new(),
    };

    TensionMap {
        pairs,
        overall,
        peak,
        interpretation,
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
