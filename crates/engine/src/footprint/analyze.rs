//! Source analysis — reduces raw GitHub/StackOverflow activity records to
//! the four footprint dimensions.
//!
//! Raw metrics span wildly different scales (10 followers vs 25k
//! reputation), so each metric passes through a log scale whose saturation
//! constant lives in the calibration table. Which metric feeds which
//! dimension is itself a calibration choice, documented on each function.

use serde::{Deserialize, Serialize};

use crate::config::Calibration;
use crate::errors::EngineError;
use crate::footprint::signal::{SourceKind, SourceSignal};

/// Raw GitHub profile/activity record, as fetched by the GitHub client
/// collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubActivity {
    pub public_repos: u32,
    pub followers: u32,
    pub total_stars: u32,
    pub total_forks: u32,
    pub contributions_last_year: u32,
    pub languages: Vec<String>,
}

/// Raw StackOverflow profile record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackOverflowActivity {
    pub reputation: u32,
    pub answer_count: u32,
    pub question_count: u32,
    pub accepted_answers: u32,
    pub badge_gold: u32,
    pub badge_silver: u32,
    pub badge_bronze: u32,
}

/// Tagged raw record at the normalizer boundary. Unrecognized shapes are
/// rejected at deserialization rather than silently defaulting fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum RawSourceRecord {
    Github(GithubActivity),
    StackOverflow(StackOverflowActivity),
}

impl RawSourceRecord {
    /// Parses a collaborator-supplied JSON record. Unknown source tags and
    /// missing fields surface as `InvalidInput`.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json)
            .map_err(|e| EngineError::invalid_input(format!("unrecognized source record: {e}")))
    }
}

/// Analyzes one raw record into dimension scores.
pub fn analyze(record: &RawSourceRecord, calibration: &Calibration) -> SourceSignal {
    match record {
        RawSourceRecord::Github(activity) => analyze_github(activity, calibration),
        RawSourceRecord::StackOverflow(activity) => analyze_stack_overflow(activity, calibration),
    }
}

/// GitHub dimension composition:
/// visibility ← followers; activity ← contributions over the last year;
/// impact ← stars (70%) + forks (30%); expertise ← repo count (60%) +
/// language breadth (40%).
pub fn analyze_github(activity: &GithubActivity, calibration: &Calibration) -> SourceSignal {
    let scales = &calibration.github_scales;
    let visibility = scales.followers.apply(activity.followers.into());
    let dimension_activity = scales
        .contributions
        .apply(activity.contributions_last_year.into());
    let impact = 0.7 * scales.stars.apply(activity.total_stars.into())
        + 0.3 * scales.forks.apply(activity.total_forks.into());
    let expertise = 0.6 * scales.public_repos.apply(activity.public_repos.into())
        + 0.4 * scales.languages.apply(activity.languages.len() as f64);

    SourceSignal {
        source: SourceKind::Github,
        visibility,
        activity: dimension_activity,
        impact,
        expertise,
    }
}

/// StackOverflow dimension composition:
/// visibility ← reputation; activity ← answers + questions; impact ←
/// accepted answers; expertise ← badge points (gold 5, silver 2, bronze 1).
pub fn analyze_stack_overflow(
    activity: &StackOverflowActivity,
    calibration: &Calibration,
) -> SourceSignal {
    let scales = &calibration.stack_overflow_scales;
    let posts = activity.answer_count + activity.question_count;
    let badge_points =
        5 * activity.badge_gold + 2 * activity.badge_silver + activity.badge_bronze;

    SourceSignal {
        source: SourceKind::StackOverflow,
        visibility: scales.reputation.apply(activity.reputation.into()),
        activity: scales.posts.apply(posts.into()),
        impact: scales.accepted_answers.apply(activity.accepted_answers.into()),
        expertise: scales.badge_points.apply(badge_points.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_github() -> GithubActivity {
        GithubActivity {
            public_repos: 0,
            followers: 0,
            total_stars: 0,
            total_forks: 0,
            contributions_last_year: 0,
            languages: vec![],
        }
    }

    #[test]
    fn test_empty_github_account_scores_all_zero() {
        // Present-but-zero: a real signal, not an absence.
        let signal = analyze_github(&empty_github(), &Calibration::default());
        assert_eq!(signal.visibility, 0.0);
        assert_eq!(signal.activity, 0.0);
        assert_eq!(signal.impact, 0.0);
        assert_eq!(signal.expertise, 0.0);
        assert_eq!(signal.source, SourceKind::Github);
    }

    #[test]
    fn test_github_dimensions_bounded_and_monotone() {
        let calibration = Calibration::default();
        let modest = GithubActivity {
            public_repos: 10,
            followers: 30,
            total_stars: 50,
            total_forks: 5,
            contributions_last_year: 200,
            languages: vec!["rust".into(), "python".into()],
        };
        let prolific = GithubActivity {
            public_repos: 80,
            followers: 2000,
            total_stars: 5000,
            total_forks: 800,
            contributions_last_year: 3000,
            languages: (0..12).map(|i| format!("lang{i}")).collect(),
        };
        let low = analyze_github(&modest, &calibration);
        let high = analyze_github(&prolific, &calibration);
        for signal in [&low, &high] {
            for value in [
                signal.visibility,
                signal.activity,
                signal.impact,
                signal.expertise,
            ] {
                assert!((0.0..=100.0).contains(&value), "out of range: {value}");
                assert!(!value.is_nan());
            }
        }
        assert!(high.visibility > low.visibility);
        assert!(high.impact > low.impact);
        // Saturated everywhere → caps at 100.
        assert_eq!(high.visibility, 100.0);
    }

    #[test]
    fn test_stack_overflow_badge_points_weighting() {
        let calibration = Calibration::default();
        let gold_heavy = StackOverflowActivity {
            reputation: 1000,
            answer_count: 10,
            question_count: 0,
            accepted_answers: 5,
            badge_gold: 4,
            badge_silver: 0,
            badge_bronze: 0,
        };
        let bronze_heavy = StackOverflowActivity {
            badge_gold: 0,
            badge_bronze: 20,
            ..gold_heavy.clone()
        };
        let gold = analyze_stack_overflow(&gold_heavy, &calibration);
        let bronze = analyze_stack_overflow(&bronze_heavy, &calibration);
        // 4 gold = 20 points = 20 bronze → identical expertise.
        assert!((gold.expertise - bronze.expertise).abs() < 1e-9);
    }

    #[test]
    fn test_tagged_record_json_parses() {
        let json = r#"{
            "source": "github",
            "public_repos": 12,
            "followers": 40,
            "total_stars": 300,
            "total_forks": 25,
            "contributions_last_year": 600,
            "languages": ["rust", "go"]
        }"#;
        let record = RawSourceRecord::from_json(json).unwrap();
        assert!(matches!(record, RawSourceRecord::Github(_)));
    }

    #[test]
    fn test_unknown_source_tag_is_invalid_input() {
        let err = RawSourceRecord::from_json(r#"{"source": "gitlab", "followers": 3}"#)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn test_missing_field_is_invalid_input() {
        let err = RawSourceRecord::from_json(r#"{"source": "github", "followers": 3}"#)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }
}
