//! Archetype and persona matching properties over the default tables.

use mythos_engine::{
    archetype_profiles, match_archetypes, match_personas, persona_roster, Archetype, MotiveSource,
    MotiveVector,
};

fn vector_with(pairs: &[(MotiveSource, f64)]) -> MotiveVector {
    let mut v = MotiveVector([35.0; 8]);
    for (m, s) in pairs {
        v.0[m.index()] = *s;
    }
    v
}

#[test]
fn archetype_scores_never_leave_the_scale() {
    let profiles = archetype_profiles();
    // Corner cases plus a spread of mixed vectors.
    let vectors = [
        MotiveVector([0.0; 8]),
        MotiveVector([100.0; 8]),
        MotiveVector([50.0; 8]),
        vector_with(&[(MotiveSource::Security, 100.0), (MotiveSource::Freedom, 100.0)]),
        vector_with(&[(MotiveSource::Achievement, 72.0), (MotiveSource::Mastery, 68.0)]),
    ];
    for vector in vectors {
        let matches = match_archetypes(&vector, &profiles);
        assert_eq!(matches.len(), 8);
        for m in &matches {
            assert!((0.0..=100.0).contains(&m.score), "{:?} out of range", m);
        }
        for w in matches.windows(2) {
            assert!(w[0].score >= w[1].score, "not descending");
        }
        let mut ranks: Vec<usize> = matches.iter().map(|m| m.rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (1..=8).collect::<Vec<_>>());
    }
}

#[test]
fn each_archetype_wins_on_its_own_signature_profile() {
    let profiles = archetype_profiles();
    for profile in &profiles {
        // Load the archetype's own weights as the user's profile, with the
        // primary condition comfortably met and exclusions comfortably low.
        let mut v = MotiveVector([30.0; 8]);
        for (m, w) in &profile.weights {
            v.0[m.index()] = (w * 100.0 + 40.0).min(100.0);
        }
        v.0[profile.conditions.primary.motive.index()] =
            profile.conditions.primary.min.max(80.0);
        if let Some(secondary) = profile.conditions.secondary {
            v.0[secondary.motive.index()] =
                v.0[secondary.motive.index()].max(secondary.min + 10.0).min(100.0);
        }
        if let Some(exclude) = profile.conditions.exclude {
            v.0[exclude.motive.index()] = (exclude.max - 20.0).max(0.0);
        }

        let matches = match_archetypes(&v, &profiles);
        assert_eq!(
            matches[0].archetype, profile.archetype,
            "signature profile for {:?} matched {:?}",
            profile.archetype, matches[0].archetype
        );
    }
}

#[test]
fn persona_similarity_floor_and_ceiling() {
    let roster = persona_roster();

    // Exact match hits exactly 100.
    let loki = roster.iter().find(|p| p.key == "loki").unwrap();
    let user = MotiveVector(loki.motivation.map(|v| v * 100.0));
    let matches = match_personas(&user, Archetype::Rebel, &roster);
    assert_eq!(matches[0].key, "loki");
    assert_eq!(matches[0].similarity, 100.0);

    // Hostile vectors never break the 30-point floor.
    for user in [MotiveVector([0.0; 8]), MotiveVector([100.0; 8])] {
        for archetype in Archetype::ALL {
            for m in match_personas(&user, archetype, &roster) {
                assert!(m.similarity >= 30.0, "{} at {}", m.key, m.similarity);
                assert!(m.similarity <= 100.0);
            }
        }
    }
}

#[test]
fn personas_only_come_from_the_requested_archetype() {
    let roster = persona_roster();
    let user = MotiveVector([55.0; 8]);
    for archetype in Archetype::ALL {
        let matches = match_personas(&user, archetype, &roster);
        assert_eq!(matches.len(), 6);
        assert!(matches.iter().all(|m| m.archetype == archetype));
        let ranks: Vec<usize> = matches.iter().map(|m| m.rank).collect();
        assert_eq!(ranks, (1..=6).collect::<Vec<_>>());
    }
}
