//! Compatibility Scorer — resume ↔ job match score from normalized skill,
//! location, and experience signals.
//!
//! Pure and deterministic: identical inputs produce bit-identical
//! `MatchScore` values, which the calling layer relies on for caching and
//! reproducible fixtures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;
use uuid::Uuid;

use crate::config::Calibration;
use crate::errors::EngineError;
use crate::matching::normalize::{
    experience_signal, location_signal, skill_overlap, ExperienceFit,
};
use crate::models::job::JobRequirement;
use crate::models::resume::ResumeProfile;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Structured explanation accompanying a score. `skills_matched` and
/// `skills_missing` partition the job's *required* skills; preferred skills
/// weigh into the score but are never reported as "missing" failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skills_matched: BTreeSet<String>,
    pub skills_missing: BTreeSet<String>,
    pub location_match: bool,
    pub experience_fit: ExperienceFit,
}

/// Compatibility score for one (resume, job) pair. Immutable value object;
/// built fresh per scoring call, never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    /// 0–100, blended from the three components below.
    pub overall: u32,
    pub skill_score: f64,
    pub location_score: f64,
    pub experience_score: f64,
    pub breakdown: MatchBreakdown,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores a resume against a job posting.
///
/// Fails with `InvalidInput` when the job carries no skills at all —
/// a posting with neither required nor preferred skills cannot be scored
/// meaningfully.
pub fn score(
    resume: &ResumeProfile,
    job: &JobRequirement,
    calibration: &Calibration,
) -> Result<MatchScore, EngineError> {
    if job.required_skills.is_empty() && job.preferred_skills.is_empty() {
        return Err(EngineError::invalid_input(
            "job has no required or preferred skills",
        ));
    }

    let skill_score = 100.0 * blended_skill_signal(resume, job, calibration);
    let location_score =
        100.0 * location_signal(resume.location.as_deref(), &job.location);
    let (experience_raw, experience_fit) =
        experience_signal(resume.years_experience, job.experience_band);
    let experience_score = 100.0 * experience_raw;

    let w = &calibration.match_weights;
    let overall = (w.skill * skill_score
        + w.location * location_score
        + w.experience * experience_score)
        .round()
        .clamp(0.0, 100.0) as u32;

    let skills_matched = job.required_skills.intersection(&resume.skills);
    let skills_missing = job.required_skills.difference(&resume.skills);

    debug!(
        job_id = %job.id,
        overall,
        skill = skill_score,
        location = location_score,
        experience = experience_score,
        "computed match score"
    );

    Ok(MatchScore {
        overall,
        skill_score,
        location_score,
        experience_score,
        breakdown: MatchBreakdown {
            skills_matched,
            skills_missing,
            location_match: location_score >= 100.0,
            experience_fit,
        },
    })
}

/// Required/preferred overlap blend. The 0.7/0.3 weights renormalize onto
/// whichever set is non-empty, so a job that lists only required skills is
/// scored on those alone instead of being capped at 70.
fn blended_skill_signal(
    resume: &ResumeProfile,
    job: &JobRequirement,
    calibration: &Calibration,
) -> f64 {
    let w = &calibration.match_weights;
    let required = skill_overlap(&resume.skills, &job.required_skills);
    let preferred = skill_overlap(&resume.skills, &job.preferred_skills);

    match (
        job.required_skills.is_empty(),
        job.preferred_skills.is_empty(),
    ) {
        (false, false) => w.required * required + w.preferred * preferred,
        (false, true) => required,
        (true, false) => preferred,
        // Rejected before this point.
        (true, true) => 0.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Ranking contract
// ────────────────────────────────────────────────────────────────────────────

/// One scored job in a ranked result list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    pub job_id: Uuid,
    pub posted_date: DateTime<Utc>,
    pub score: MatchScore,
}

/// Orders scored jobs for presentation: overall descending, then
/// skill_score descending, then posted_date descending (most recent first).
/// The presentation layer relies on this exact tie-break order.
pub fn rank_matches(matches: &mut [RankedMatch]) {
    matches.sort_by(|a, b| {
        b.score
            .overall
            .cmp(&a.score.overall)
            .then(b.score.skill_score.total_cmp(&a.score.skill_score))
            .then(b.posted_date.cmp(&a.posted_date))
    });
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
