//! Recommendation Deriver — turns score breakdowns into ranked, actionable
//! suggestions, longest lever first.
//!
//! A dimension becomes a candidate issue only below the excellence
//! threshold; issues rank by `(100 − dimension_score) × dimension_weight`.
//! Every emitted recommendation cites concrete breakdown evidence — a
//! named missing skill, a named low dimension — never a bare platitude.

use serde::{Deserialize, Serialize};

use crate::config::Calibration;
use crate::footprint::signal::{Dimension, FootprintScore};
use crate::matching::normalize::ExperienceFit;
use crate::matching::scorer::MatchScore;

/// Dimensions at or above this value are not worth a suggestion.
const CANDIDACY_THRESHOLD: f64 = 80.0;

/// At most this many recommendations per derivation.
const MAX_RECOMMENDATIONS: usize = 5;

/// Each footprint dimension carries equal weight in the composite score.
const DIMENSION_WEIGHT: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    SkillGap,
    ExperienceGap,
    LocationMismatch,
    Visibility,
    Activity,
    Impact,
    Expertise,
    Maintenance,
}

impl RecommendationKind {
    fn for_dimension(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Visibility => RecommendationKind::Visibility,
            Dimension::Activity => RecommendationKind::Activity,
            Dimension::Impact => RecommendationKind::Impact,
            Dimension::Expertise => RecommendationKind::Expertise,
        }
    }

    /// Stable tie-break order for equal-leverage candidates.
    fn rank(&self) -> u8 {
        match self {
            RecommendationKind::SkillGap => 0,
            RecommendationKind::ExperienceGap => 1,
            RecommendationKind::LocationMismatch => 2,
            RecommendationKind::Visibility => 3,
            RecommendationKind::Activity => 4,
            RecommendationKind::Impact => 5,
            RecommendationKind::Expertise => 6,
            RecommendationKind::Maintenance => 7,
        }
    }
}

/// One actionable suggestion. Ownership passes to the calling layer; the
/// engine never stores these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub title: String,
    pub rationale: String,
    /// Concrete breakdown facts backing the suggestion. Never empty.
    pub evidence: Vec<String>,
}

struct Candidate {
    leverage: f64,
    recommendation: Recommendation,
}

/// Derives ranked recommendations from whichever scores are available.
/// When every candidate dimension clears the threshold, emits exactly one
/// maintenance recommendation instead of an empty list.
pub fn derive(
    match_score: Option<&MatchScore>,
    footprint: Option<&FootprintScore>,
    calibration: &Calibration,
) -> Vec<Recommendation> {
    let mut candidates = Vec::new();
    if let Some(score) = match_score {
        collect_match_candidates(score, calibration, &mut candidates);
    }
    if let Some(score) = footprint {
        collect_footprint_candidates(score, &mut candidates);
    }

    if candidates.is_empty() {
        return vec![maintenance_recommendation(match_score, footprint)];
    }

    candidates.sort_by(|a, b| {
        b.leverage
            .total_cmp(&a.leverage)
            .then(a.recommendation.kind.rank().cmp(&b.recommendation.kind.rank()))
    });
    candidates
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|c| c.recommendation)
        .collect()
}

fn collect_match_candidates(
    score: &MatchScore,
    calibration: &Calibration,
    candidates: &mut Vec<Candidate>,
) {
    let weights = &calibration.match_weights;
    let breakdown = &score.breakdown;

    // Named missing required skills are the strongest evidence; with the
    // required set fully covered, the shortfall comes from uncovered
    // preferred skills and the skill dimension value itself is the citation.
    if score.skill_score < CANDIDACY_THRESHOLD {
        let (title, rationale, evidence) = if breakdown.skills_missing.is_empty() {
            (
                "Cover the job's preferred skills".to_string(),
                format!(
                    "Skill match is {:.0}/100 with every required skill covered; the remaining gap is the job's preferred skills.",
                    score.skill_score
                ),
                vec![format!(
                    "skill match scored {:.0}/100; preferred skills not covered",
                    score.skill_score
                )],
            )
        } else {
            let named: Vec<&str> = breakdown
                .skills_missing
                .iter()
                .map(String::as_str)
                .collect();
            (
                format!("Close the skill gap: {}", named.join(", ")),
                format!(
                    "Skill match is {:.0}/100; the job lists required skills your resume does not cover.",
                    score.skill_score
                ),
                breakdown
                    .skills_missing
                    .iter()
                    .map(|s| format!("missing required skill: {s}"))
                    .collect(),
            )
        };
        candidates.push(Candidate {
            leverage: (100.0 - score.skill_score) * weights.skill,
            recommendation: Recommendation {
                kind: RecommendationKind::SkillGap,
                title,
                rationale,
                evidence,
            },
        });
    }

    if score.experience_score < CANDIDACY_THRESHOLD {
        // `Match` always scores 100 and never reaches this branch.
        let issue = match breakdown.experience_fit {
            ExperienceFit::Under => Some((
                "Build experience toward the posted band".to_string(),
                format!(
                    "experience fit: under the job's band (score {:.0}/100)",
                    score.experience_score
                ),
            )),
            ExperienceFit::Over => Some((
                "Target roles matching your seniority".to_string(),
                format!(
                    "experience fit: over the job's band (score {:.0}/100)",
                    score.experience_score
                ),
            )),
            ExperienceFit::Unknown => Some((
                "State your years of experience".to_string(),
                "experience fit: unknown — resume lists no years of experience".to_string(),
            )),
            ExperienceFit::Match => None,
        };
        if let Some((title, evidence)) = issue {
            candidates.push(Candidate {
                leverage: (100.0 - score.experience_score) * weights.experience,
                recommendation: Recommendation {
                    kind: RecommendationKind::ExperienceGap,
                    title,
                    rationale:
                        "Experience weighs into the overall match; closing this gap moves the score."
                            .to_string(),
                    evidence: vec![evidence],
                },
            });
        }
    }

    if score.location_score < CANDIDACY_THRESHOLD && !breakdown.location_match {
        candidates.push(Candidate {
            leverage: (100.0 - score.location_score) * weights.location,
            recommendation: Recommendation {
                kind: RecommendationKind::LocationMismatch,
                title: "Consider remote roles or relocation".to_string(),
                rationale: "The job's location does not match your stated location and the role is not remote.".to_string(),
                evidence: vec!["location match: false".to_string()],
            },
        });
    }
}

fn collect_footprint_candidates(score: &FootprintScore, candidates: &mut Vec<Candidate>) {
    for dimension in Dimension::ALL {
        let value = score.dimension(dimension);
        if value >= CANDIDACY_THRESHOLD {
            continue;
        }
        let label = dimension.label();
        candidates.push(Candidate {
            leverage: (100.0 - value) * DIMENSION_WEIGHT,
            recommendation: Recommendation {
                kind: RecommendationKind::for_dimension(dimension),
                title: format!("Raise your {label} footprint"),
                rationale: dimension_advice(dimension).to_string(),
                evidence: vec![format!("{label} scored {value:.0}/100 across connected sources")],
            },
        });
    }
}

fn dimension_advice(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Visibility => {
            "Grow followers and reputation so your work is discoverable by recruiters."
        }
        Dimension::Activity => {
            "Contribute regularly — recent commits and answers weigh more than dormant history."
        }
        Dimension::Impact => {
            "Focus on work others adopt: starred repositories and accepted answers."
        }
        Dimension::Expertise => {
            "Deepen and broaden demonstrated expertise — repositories, languages, badges."
        }
    }
}

fn maintenance_recommendation(
    match_score: Option<&MatchScore>,
    footprint: Option<&FootprintScore>,
) -> Recommendation {
    let mut evidence = Vec::new();
    if let Some(score) = match_score {
        evidence.push(format!("match score {}/100 with no open gaps", score.overall));
    }
    if let Some(score) = footprint {
        for dimension in Dimension::ALL {
            evidence.push(format!(
                "{} at {:.0}/100",
                dimension.label(),
                score.dimension(dimension)
            ));
        }
    }
    if evidence.is_empty() {
        evidence.push("no scored dimensions below threshold".to_string());
    }
    Recommendation {
        kind: RecommendationKind::Maintenance,
        title: "Strong profile — keep it current".to_string(),
        rationale: "Every scored dimension clears the excellence threshold; maintain your current cadence.".to_string(),
        evidence,
    }
}
