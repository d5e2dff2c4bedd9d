//! Rule-based development suggestions.
//!
//! Each rule names the metric that triggered it in its `reason`, so the
//! report layer can show why a suggestion appeared. Priorities follow rule
//! order: shadow integration first, then the top theoretical tension, then
//! foundational maturity work, then the weakest motive.

use serde::Serialize;

use crate::dimensions::{HiddenProfile, MaturityScore, MotiveVector};

use super::tension::TensionMap;

/// Shadow intensity worth active integration work.
const SHADOW_TRIGGER: f64 = 60.0;
/// Peak tension worth naming.
const TENSION_TRIGGER: f64 = 55.0;
/// Overall maturity below this asks for foundations before optimization.
const MATURITY_TRIGGER: f64 = 40.0;

/// One recommendation with its trigger and concrete next steps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    /// 1 = most urgent.
    pub priority: u8,
    pub focus: String,
    pub reason: String,
    pub actions: Vec<String>,
}

pub fn development_suggestions(
    motives: &MotiveVector,
    maturity: &MaturityScore,
    hidden: &HiddenProfile,
    tensions: &TensionMap,
) -> Vec<Suggestion> {
    let mut out = Vec::new();
    let mut priority = 0u8;
    let mut next = || {
        priority += 1;
        priority
    };

    // Strongest shadow motive: the profile is working against itself.
    if let Some(shadow) = hidden.shadow.first().filter(|s| s.score >= SHADOW_TRIGGER) {
        out.push(Suggestion {
            priority: next(),
            focus: format!("integrate the {} shadow", shadow.motive),
            reason: format!(
                "shadow intensity for {} is {:.0}, above the {SHADOW_TRIGGER:.0} integration threshold",
                shadow.motive, shadow.score
            ),
            actions: vec![
                format!(
                    "notice situations where {} quietly drives decisions you attribute to something else",
                    shadow.motive
                ),
                format!("give {} one sanctioned outlet per week instead of suppressing it", shadow.motive),
            ],
        });
    }

    // Highest theoretical tension pair.
    if let Some(peak) = tensions.peak.as_ref().filter(|p| p.tension >= TENSION_TRIGGER) {
        let (a, b) = peak.pair;
        out.push(Suggestion {
            priority: next(),
            focus: format!("balance {a} against {b}"),
            reason: format!(
                "the {a}–{b} pair carries the profile's highest tension ({:.0})",
                peak.tension
            ),
            actions: vec![
                format!("decide in advance which of {a} and {b} wins in which life domain"),
                "schedule both explicitly rather than letting the louder one preempt the other".to_string(),
            ],
        });
    }

    // Low overall maturity: foundations before optimization.
    if maturity.overall < MATURITY_TRIGGER {
        out.push(Suggestion {
            priority: next(),
            focus: "build motivational awareness".to_string(),
            reason: format!(
                "overall maturity is {:.0}, under the {MATURITY_TRIGGER:.0} foundation threshold",
                maturity.overall
            ),
            actions: vec![
                "keep a one-line log of what energized or drained each day".to_string(),
                "review the log weekly and name the motive behind each entry".to_string(),
            ],
        });
    }

    // The single weakest motive always gets a strengthening suggestion.
    let weakest = motives.weakest();
    out.push(Suggestion {
        priority: next(),
        focus: format!("strengthen {weakest}"),
        reason: format!(
            "{weakest} is the weakest motive in the profile ({:.0})",
            motives.get(weakest)
        ),
        actions: vec![
            format!("add one low-stakes activity per week that only {weakest} can satisfy"),
            format!("pair {weakest} with an already-strong motive so it borrows momentum"),
        ],
    });

    out
}
