//! Motive development staging: 20-point score bands mapped to five named
//! stages, with a hint toward the next band.

use serde::Serialize;

use crate::catalog::MotiveSource;
use crate::dimensions::MotiveScore;

const STAGE_NAMES: [&str; 5] = ["Dormant", "Awakening", "Developing", "Established", "Integrated"];

/// Stage of one motive's development.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DevelopmentStage {
    pub motive: MotiveSource,
    /// 1..=5.
    pub stage: u8,
    pub name: &'static str,
    /// Points remaining to the next band; `None` at the top stage.
    pub hint: Option<String>,
}

pub fn development_stages(motives: &[MotiveScore]) -> Vec<DevelopmentStage> {
    motives
        .iter()
        .map(|m| {
            let stage = ((m.score / 20.0).floor() as u8 + 1).min(5);
            let hint = (stage < 5).then(|| {
                let threshold = stage as f64 * 20.0;
                format!(
                    "{:.1} points to {} (at {:.0})",
                    threshold - m.score,
                    STAGE_NAMES[stage as usize],
                    threshold
                )
            });
            DevelopmentStage {
                motive: m.motive,
                stage,
                name: STAGE_NAMES[(stage - 1) as usize],
                hint,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(motive: MotiveSource, score: f64) -> MotiveScore {
        MotiveScore { motive, score, rank: 0 }
    }

    #[test]
    fn bands_map_to_stages() {
        let stages = development_stages(&[
            score(MotiveSource::Achievement, 0.0),
            score(MotiveSource::Mastery, 19.9),
            score(MotiveSource::Creation, 20.0),
            score(MotiveSource::Recognition, 59.9),
            score(MotiveSource::Connection, 60.0),
            score(MotiveSource::Security, 80.0),
            score(MotiveSource::Freedom, 100.0),
        ]);
        let by_stage: Vec<u8> = stages.iter().map(|s| s.stage).collect();
        assert_eq!(by_stage, vec![1, 1, 2, 3, 4, 5, 5]);
        assert_eq!(stages[0].name, "Dormant");
        assert_eq!(stages[5].name, "Integrated");
    }

    #[test]
    fn hint_names_the_next_band() {
        let stages = development_stages(&[score(MotiveSource::Adventure, 47.0)]);
        assert_eq!(stages[0].stage, 3);
        assert_eq!(stages[0].hint.as_deref(), Some("13.0 points to Established (at 60)"));
    }

    #[test]
    fn top_stage_has_no_hint() {
        let stages = development_stages(&[score(MotiveSource::Adventure, 85.0)]);
        assert_eq!(stages[0].stage, 5);
        assert!(stages[0].hint.is_none());
    }
}
