//! The persona roster and distance-based similarity matcher.
//!
//! Each archetype carries six named mythic/historical exemplars. Similarity
//! is a normalized L1 distance with a 30-point floor: even a poor match
//! keeps baseline narrative plausibility, since the persona was already
//! selected by the archetype gate.

use serde::Serialize;

use crate::archetypes::Archetype;
use crate::dimensions::{sort_and_rank, MotiveVector};

/// A named exemplar of one archetype.
///
/// `motivation` is on the 0–1 scale in canonical motive order:
/// achievement, mastery, creation, recognition, connection, security,
/// freedom, adventure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Persona {
    pub key: &'static str,
    pub name: &'static str,
    pub origin: &'static str,
    pub archetype: Archetype,
    pub motivation: [f64; 8],
}

/// Ranked similarity of one persona to the user's motive vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonaMatch {
    pub key: &'static str,
    pub name: &'static str,
    pub origin: &'static str,
    pub archetype: Archetype,
    /// 30–100.
    pub similarity: f64,
    pub rank: usize,
}

/// Rank every persona of `archetype` by similarity to the user's vector.
pub fn match_personas(
    motives: &MotiveVector,
    archetype: Archetype,
    roster: &[Persona],
) -> Vec<PersonaMatch> {
    let mut matches: Vec<PersonaMatch> = roster
        .iter()
        .filter(|p| p.archetype == archetype)
        .map(|p| PersonaMatch {
            key: p.key,
            name: p.name,
            origin: p.origin,
            archetype: p.archetype,
            similarity: similarity(motives, &p.motivation),
            rank: 0,
        })
        .collect();
    sort_and_rank(&mut matches, |m| m.similarity, |m, r| m.rank = r);
    matches
}

/// Normalized L1 similarity: `30 + 70 × (1 − Σ|user − persona×100| / 800)`.
///
/// An exact vector match scores 100; a maximal mismatch floors at 30.
pub fn similarity(motives: &MotiveVector, persona_motivation: &[f64; 8]) -> f64 {
    let total_diff: f64 = motives
        .0
        .iter()
        .zip(persona_motivation)
        .map(|(user, persona)| (user - persona * 100.0).abs())
        .sum();
    let raw = 1.0 - total_diff / 800.0;
    ((30.0 + raw * 70.0) * 10.0).round() / 10.0
}

/// The default 48-persona roster, six per archetype.
pub fn persona_roster() -> Vec<Persona> {
    // [achievement, mastery, creation, recognition, connection, security, freedom, adventure]
    vec![
        // -- Conqueror --------------------------------------------------------
        Persona { key: "napoleon", name: "Napoleon", origin: "France", archetype: Archetype::Conqueror,
            motivation: [0.95, 0.80, 0.50, 0.85, 0.40, 0.30, 0.70, 0.75] },
        Persona { key: "alexander", name: "Alexander", origin: "Greece", archetype: Archetype::Conqueror,
            motivation: [0.95, 0.70, 0.40, 0.80, 0.50, 0.20, 0.75, 0.90] },
        Persona { key: "genghis", name: "Genghis Khan", origin: "Mongolia", archetype: Archetype::Conqueror,
            motivation: [0.95, 0.65, 0.30, 0.70, 0.45, 0.50, 0.85, 0.80] },
        Persona { key: "caesar", name: "Julius Caesar", origin: "Rome", archetype: Archetype::Conqueror,
            motivation: [0.90, 0.75, 0.35, 0.90, 0.55, 0.40, 0.65, 0.60] },
        Persona { key: "ares", name: "Ares", origin: "Greek myth", archetype: Archetype::Conqueror,
            motivation: [0.90, 0.60, 0.25, 0.70, 0.30, 0.20, 0.80, 0.85] },
        Persona { key: "guan_yu", name: "Guan Yu", origin: "China", archetype: Archetype::Conqueror,
            motivation: [0.85, 0.90, 0.30, 0.70, 0.75, 0.60, 0.55, 0.50] },
        // -- Sage -------------------------------------------------------------
        Persona { key: "zhuge_liang", name: "Zhuge Liang", origin: "China", archetype: Archetype::Sage,
            motivation: [0.80, 0.95, 0.75, 0.60, 0.70, 0.55, 0.45, 0.40] },
        Persona { key: "athena", name: "Athena", origin: "Greek myth", archetype: Archetype::Sage,
            motivation: [0.75, 0.90, 0.80, 0.65, 0.55, 0.60, 0.50, 0.45] },
        Persona { key: "gandalf", name: "Gandalf", origin: "Fantasy literature", archetype: Archetype::Sage,
            motivation: [0.55, 0.90, 0.60, 0.45, 0.75, 0.40, 0.70, 0.65] },
        Persona { key: "thoth", name: "Thoth", origin: "Egyptian myth", archetype: Archetype::Sage,
            motivation: [0.65, 0.95, 0.85, 0.60, 0.50, 0.55, 0.45, 0.35] },
        Persona { key: "odin_sage", name: "Odin", origin: "Norse myth", archetype: Archetype::Sage,
            motivation: [0.80, 0.90, 0.60, 0.65, 0.50, 0.40, 0.75, 0.70] },
        Persona { key: "saraswati", name: "Saraswati", origin: "Hindu myth", archetype: Archetype::Sage,
            motivation: [0.50, 0.95, 0.90, 0.55, 0.65, 0.50, 0.55, 0.40] },
        // -- Creator ----------------------------------------------------------
        Persona { key: "hephaestus", name: "Hephaestus", origin: "Greek myth", archetype: Archetype::Creator,
            motivation: [0.60, 0.90, 0.95, 0.50, 0.45, 0.55, 0.50, 0.30] },
        Persona { key: "daedalus", name: "Daedalus", origin: "Greek myth", archetype: Archetype::Creator,
            motivation: [0.65, 0.85, 0.95, 0.50, 0.45, 0.40, 0.70, 0.55] },
        Persona { key: "nuwa", name: "Nuwa", origin: "Chinese myth", archetype: Archetype::Creator,
            motivation: [0.55, 0.65, 0.95, 0.50, 0.80, 0.70, 0.45, 0.35] },
        Persona { key: "brahma", name: "Brahma", origin: "Hindu myth", archetype: Archetype::Creator,
            motivation: [0.60, 0.80, 0.95, 0.65, 0.55, 0.55, 0.50, 0.40] },
        Persona { key: "ptah", name: "Ptah", origin: "Egyptian myth", archetype: Archetype::Creator,
            motivation: [0.60, 0.85, 0.95, 0.55, 0.50, 0.60, 0.45, 0.30] },
        Persona { key: "izanagi", name: "Izanagi", origin: "Japanese myth", archetype: Archetype::Creator,
            motivation: [0.55, 0.60, 0.90, 0.50, 0.75, 0.65, 0.50, 0.45] },
        // -- Sovereign --------------------------------------------------------
        Persona { key: "zeus", name: "Zeus", origin: "Greek myth", archetype: Archetype::Sovereign,
            motivation: [0.85, 0.60, 0.40, 0.95, 0.55, 0.65, 0.70, 0.50] },
        Persona { key: "jade_emperor", name: "Jade Emperor", origin: "Chinese myth", archetype: Archetype::Sovereign,
            motivation: [0.75, 0.65, 0.45, 0.90, 0.60, 0.85, 0.40, 0.30] },
        Persona { key: "odin_king", name: "Odin", origin: "Norse myth", archetype: Archetype::Sovereign,
            motivation: [0.80, 0.90, 0.50, 0.85, 0.45, 0.55, 0.70, 0.65] },
        Persona { key: "ra", name: "Ra", origin: "Egyptian myth", archetype: Archetype::Sovereign,
            motivation: [0.80, 0.70, 0.60, 0.95, 0.50, 0.75, 0.45, 0.40] },
        Persona { key: "indra", name: "Indra", origin: "Hindu myth", archetype: Archetype::Sovereign,
            motivation: [0.85, 0.60, 0.40, 0.90, 0.45, 0.55, 0.65, 0.70] },
        Persona { key: "amaterasu", name: "Amaterasu", origin: "Japanese myth", archetype: Archetype::Sovereign,
            motivation: [0.60, 0.55, 0.65, 0.85, 0.75, 0.80, 0.45, 0.35] },
        // -- Healer -----------------------------------------------------------
        Persona { key: "guanyin", name: "Guanyin", origin: "East Asia", archetype: Archetype::Healer,
            motivation: [0.40, 0.55, 0.60, 0.45, 0.95, 0.80, 0.50, 0.30] },
        Persona { key: "asclepius", name: "Asclepius", origin: "Greek myth", archetype: Archetype::Healer,
            motivation: [0.65, 0.85, 0.50, 0.55, 0.90, 0.60, 0.40, 0.35] },
        Persona { key: "brigid", name: "Brigid", origin: "Celtic myth", archetype: Archetype::Healer,
            motivation: [0.50, 0.65, 0.80, 0.55, 0.85, 0.70, 0.50, 0.40] },
        Persona { key: "dian_cecht", name: "Dian Cecht", origin: "Celtic myth", archetype: Archetype::Healer,
            motivation: [0.70, 0.90, 0.60, 0.55, 0.85, 0.65, 0.40, 0.35] },
        Persona { key: "eir", name: "Eir", origin: "Norse myth", archetype: Archetype::Healer,
            motivation: [0.55, 0.70, 0.50, 0.45, 0.90, 0.75, 0.50, 0.40] },
        Persona { key: "yakushi", name: "Yakushi Nyorai", origin: "Buddhist tradition", archetype: Archetype::Healer,
            motivation: [0.45, 0.70, 0.55, 0.40, 0.95, 0.80, 0.45, 0.30] },
        // -- Guardian ---------------------------------------------------------
        Persona { key: "heimdall", name: "Heimdall", origin: "Norse myth", archetype: Archetype::Guardian,
            motivation: [0.70, 0.75, 0.35, 0.55, 0.65, 0.95, 0.40, 0.45] },
        Persona { key: "hestia", name: "Hestia", origin: "Greek myth", archetype: Archetype::Guardian,
            motivation: [0.40, 0.50, 0.55, 0.35, 0.85, 0.90, 0.40, 0.25] },
        Persona { key: "jizo", name: "Jizo", origin: "Buddhist tradition", archetype: Archetype::Guardian,
            motivation: [0.40, 0.60, 0.50, 0.35, 0.95, 0.85, 0.40, 0.30] },
        Persona { key: "anubis", name: "Anubis", origin: "Egyptian myth", archetype: Archetype::Guardian,
            motivation: [0.55, 0.80, 0.40, 0.50, 0.60, 0.95, 0.35, 0.45] },
        Persona { key: "zhong_kui", name: "Zhong Kui", origin: "China", archetype: Archetype::Guardian,
            motivation: [0.75, 0.55, 0.35, 0.65, 0.60, 0.90, 0.45, 0.40] },
        Persona { key: "durga", name: "Durga", origin: "Hindu myth", archetype: Archetype::Guardian,
            motivation: [0.85, 0.65, 0.50, 0.60, 0.70, 0.85, 0.55, 0.50] },
        // -- Rebel ------------------------------------------------------------
        Persona { key: "prometheus", name: "Prometheus", origin: "Greek myth", archetype: Archetype::Rebel,
            motivation: [0.60, 0.65, 0.85, 0.55, 0.75, 0.15, 0.95, 0.70] },
        Persona { key: "loki", name: "Loki", origin: "Norse myth", archetype: Archetype::Rebel,
            motivation: [0.55, 0.60, 0.80, 0.65, 0.45, 0.20, 0.95, 0.85] },
        Persona { key: "sun_wukong", name: "Sun Wukong", origin: "China", archetype: Archetype::Rebel,
            motivation: [0.80, 0.75, 0.55, 0.70, 0.60, 0.15, 0.95, 0.95] },
        Persona { key: "maui", name: "Maui", origin: "Polynesia", archetype: Archetype::Rebel,
            motivation: [0.80, 0.60, 0.75, 0.75, 0.65, 0.25, 0.90, 0.90] },
        Persona { key: "eris", name: "Eris", origin: "Greek myth", archetype: Archetype::Rebel,
            motivation: [0.60, 0.50, 0.65, 0.80, 0.35, 0.15, 0.95, 0.75] },
        Persona { key: "lucifer", name: "Lucifer", origin: "Christian tradition", archetype: Archetype::Rebel,
            motivation: [0.75, 0.65, 0.55, 0.85, 0.25, 0.10, 0.95, 0.50] },
        // -- Explorer ---------------------------------------------------------
        Persona { key: "odysseus", name: "Odysseus", origin: "Greek myth", archetype: Archetype::Explorer,
            motivation: [0.75, 0.85, 0.40, 0.60, 0.80, 0.55, 0.70, 0.90] },
        Persona { key: "gilgamesh", name: "Gilgamesh", origin: "Mesopotamia", archetype: Archetype::Explorer,
            motivation: [0.90, 0.70, 0.45, 0.80, 0.75, 0.35, 0.65, 0.90] },
        Persona { key: "xuanzang", name: "Xuanzang", origin: "China", archetype: Archetype::Explorer,
            motivation: [0.70, 0.90, 0.55, 0.50, 0.70, 0.45, 0.50, 0.80] },
        Persona { key: "hermes", name: "Hermes", origin: "Greek myth", archetype: Archetype::Explorer,
            motivation: [0.55, 0.65, 0.50, 0.50, 0.60, 0.30, 0.85, 0.90] },
        Persona { key: "marco_polo", name: "Marco Polo", origin: "Venice", archetype: Archetype::Explorer,
            motivation: [0.80, 0.65, 0.55, 0.70, 0.50, 0.25, 0.75, 0.95] },
        Persona { key: "ibn_battuta", name: "Ibn Battuta", origin: "Morocco", archetype: Archetype::Explorer,
            motivation: [0.65, 0.75, 0.45, 0.55, 0.70, 0.30, 0.80, 0.95] },
    ]
}
