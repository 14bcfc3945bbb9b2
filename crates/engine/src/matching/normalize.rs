//! Normalizer — pure functions reducing raw resume/job fields to
//! dimensionless signals in [0,1]. No side effects, no I/O.

use serde::{Deserialize, Serialize};

use crate::models::job::ExperienceBand;
use crate::models::skills::SkillSet;

/// Location value meaning "anywhere". A remote job or a remote preference
/// on the resume side both satisfy the location criterion.
const REMOTE: &str = "remote";

/// Where the candidate's stated years fall relative to the job's band.
/// `Unknown` is the no-stated-years case — distinct from under-qualified,
/// so the presentation layer never renders "0 years" for a blank field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceFit {
    Under,
    Match,
    Over,
    Unknown,
}

/// Fraction of `required` covered by `held`: `|∩| / max(1, |required|)`.
/// An empty requirement set yields 0.0 — the caller decides whether that
/// set participates in the blend at all.
pub fn skill_overlap(held: &SkillSet, required: &SkillSet) -> f64 {
    let denominator = required.len().max(1) as f64;
    required.intersection(held).len() as f64 / denominator
}

/// Binary location signal. Exact trimmed case-insensitive match, or either
/// side remote, scores 1.0; everything else 0.0. No fuzzy geo-distance by
/// design.
pub fn location_signal(resume_location: Option<&str>, job_location: &str) -> f64 {
    let job = job_location.trim();
    if job.eq_ignore_ascii_case(REMOTE) {
        return 1.0;
    }
    match resume_location {
        Some(loc) => {
            let loc = loc.trim();
            if loc.eq_ignore_ascii_case(REMOTE) || loc.eq_ignore_ascii_case(job) {
                1.0
            } else {
                0.0
            }
        }
        None => 0.0,
    }
}

/// Experience signal with graceful decay on both sides of the band:
/// inside [lo,hi] → 1.0; below → `max(0, 1-(lo-y)/lo)`; above →
/// `max(0, 1-(y-hi)/hi)`. Absent years score a neutral 0.5.
pub fn experience_signal(years: Option<f64>, band: ExperienceBand) -> (f64, ExperienceFit) {
    let years = match years {
        Some(y) => y.max(0.0),
        None => return (0.5, ExperienceFit::Unknown),
    };
    if band.contains(years) {
        (1.0, ExperienceFit::Match)
    } else if years < band.lo {
        // years ≥ 0 and years < lo together imply lo > 0.
        let signal = (1.0 - (band.lo - years) / band.lo).max(0.0);
        (signal, ExperienceFit::Under)
    } else {
        // Degenerate [_, 0] band: any positive years is an unbounded
        // overshoot of the decay formula, so it floors at 0.
        let signal = if band.hi > 0.0 {
            (1.0 - (years - band.hi) / band.hi).max(0.0)
        } else {
            0.0
        };
        (signal, ExperienceFit::Over)
    }
}
