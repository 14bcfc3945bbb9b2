use serde::{Deserialize, Serialize};

use crate::models::skills::SkillSet;

/// Highest completed education level, as extracted by the resume parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    HighSchool,
    Associate,
    Bachelor,
    Master,
    Doctorate,
}

/// Structured resume record handed in by the parsing collaborator.
/// Optional fields stay optional all the way into scoring — absence is
/// scored as absence, never silently defaulted to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub skills: SkillSet,
    pub years_experience: Option<f64>,
    pub location: Option<String>,
    pub education: Option<EducationLevel>,
}
