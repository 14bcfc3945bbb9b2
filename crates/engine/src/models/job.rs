use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::skills::SkillSet;

/// Years-of-experience band a job posting asks for, e.g. [2, 5].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperienceBand {
    pub lo: f64,
    pub hi: f64,
}

impl ExperienceBand {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, years: f64) -> bool {
        years >= self.lo && years <= self.hi
    }
}

/// Structured job posting handed in by the job-store collaborator.
/// Read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequirement {
    pub id: Uuid,
    pub required_skills: SkillSet,
    pub preferred_skills: SkillSet,
    pub location: String,
    pub experience_band: ExperienceBand,
    /// (min, max) annual salary. Carried through for the presentation
    /// layer; not a scoring input.
    pub salary_range: Option<(u32, u32)>,
    /// Drives the ranking tie-break: newer postings sort first.
    pub posted_date: DateTime<Utc>,
}
