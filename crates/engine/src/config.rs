//! Calibration table — every tunable constant the engine uses.
//!
//! Loaded once at process start (JSON document or the compiled-in defaults),
//! validated, then injected read-only into the scorer, aggregator, and
//! deriver. Never a process-wide singleton: callers own the value and pass
//! `&Calibration` down.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::EngineError;

const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// Blend weights for the compatibility score. Tunable policy, not derived —
/// confirm against product requirements before shipping changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skill: f64,
    pub location: f64,
    pub experience: f64,
    /// Weight of required-skill overlap inside the skill component.
    pub required: f64,
    /// Weight of preferred-skill overlap inside the skill component.
    pub preferred: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skill: 0.5,
            location: 0.2,
            experience: 0.3,
            required: 0.7,
            preferred: 0.3,
        }
    }
}

/// Per-source weights for footprint aggregation. Renormalized over present
/// sources at aggregation time, so a GitHub-only user is weighted 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceWeights {
    pub github: f64,
    pub stack_overflow: f64,
}

impl Default for SourceWeights {
    fn default() -> Self {
        Self {
            github: 0.6,
            stack_overflow: 0.4,
        }
    }
}

/// Threshold bands for the footprint performance level.
/// Must be strictly descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBands {
    pub excellent: u32,
    pub good: u32,
    pub average: u32,
}

impl Default for ScoreBands {
    fn default() -> Self {
        Self {
            excellent: 80,
            good: 60,
            average: 40,
        }
    }
}

/// Log scale for one raw source metric: `100·ln(1+v)/ln(1+saturation)`,
/// clamped to [0,100]. `saturation` is the raw value at which the metric
/// maxes out (e.g. 1000 GitHub stars).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LogScale {
    pub saturation: f64,
}

impl LogScale {
    pub const fn new(saturation: f64) -> Self {
        Self { saturation }
    }

    pub fn apply(&self, raw: f64) -> f64 {
        if raw <= 0.0 || self.saturation <= 0.0 {
            return 0.0;
        }
        (100.0 * (1.0 + raw).ln() / (1.0 + self.saturation).ln()).clamp(0.0, 100.0)
    }
}

/// Saturation constants for GitHub raw metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubScales {
    pub followers: LogScale,
    pub stars: LogScale,
    pub forks: LogScale,
    pub public_repos: LogScale,
    pub contributions: LogScale,
    pub languages: LogScale,
}

impl Default for GithubScales {
    fn default() -> Self {
        Self {
            followers: LogScale::new(500.0),
            stars: LogScale::new(1000.0),
            forks: LogScale::new(300.0),
            public_repos: LogScale::new(60.0),
            contributions: LogScale::new(1500.0),
            languages: LogScale::new(10.0),
        }
    }
}

/// Saturation constants for StackOverflow raw metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackOverflowScales {
    pub reputation: LogScale,
    pub posts: LogScale,
    pub accepted_answers: LogScale,
    pub badge_points: LogScale,
}

impl Default for StackOverflowScales {
    fn default() -> Self {
        Self {
            reputation: LogScale::new(25_000.0),
            posts: LogScale::new(500.0),
            accepted_answers: LogScale::new(150.0),
            badge_points: LogScale::new(200.0),
        }
    }
}

/// The full calibration table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calibration {
    /// Skill alias → canonical form ("js" → "javascript"). Unknown skills
    /// pass through verbatim after case folding and trimming.
    pub synonyms: HashMap<String, String>,
    pub match_weights: MatchWeights,
    pub source_weights: SourceWeights,
    pub bands: ScoreBands,
    pub github_scales: GithubScales,
    pub stack_overflow_scales: StackOverflowScales,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            synonyms: default_synonyms(),
            match_weights: MatchWeights::default(),
            source_weights: SourceWeights::default(),
            bands: ScoreBands::default(),
            github_scales: GithubScales::default(),
            stack_overflow_scales: StackOverflowScales::default(),
        }
    }
}

impl Calibration {
    /// Parses a calibration JSON document and validates it. Missing keys
    /// fail deserialization; both paths surface as `Configuration`.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let calibration: Calibration = serde_json::from_str(json)
            .map_err(|e| EngineError::configuration(format!("calibration parse failed: {e}")))?;
        calibration.validate()?;
        info!(
            synonyms = calibration.synonyms.len(),
            "calibration table loaded"
        );
        Ok(calibration)
    }

    /// Checks the cross-field invariants a JSON document could violate.
    pub fn validate(&self) -> Result<(), EngineError> {
        let w = &self.match_weights;
        let component_sum = w.skill + w.location + w.experience;
        if (component_sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(EngineError::configuration(format!(
                "match weights (skill+location+experience) must sum to 1.0, got {component_sum}"
            )));
        }
        let skill_sum = w.required + w.preferred;
        if (skill_sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(EngineError::configuration(format!(
                "skill weights (required+preferred) must sum to 1.0, got {skill_sum}"
            )));
        }
        let source_sum = self.source_weights.github + self.source_weights.stack_overflow;
        if (source_sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(EngineError::configuration(format!(
                "source weights must sum to 1.0, got {source_sum}"
            )));
        }
        if self.source_weights.github < 0.0 || self.source_weights.stack_overflow < 0.0 {
            return Err(EngineError::configuration(
                "source weights must be non-negative",
            ));
        }
        let b = &self.bands;
        if !(b.excellent > b.good && b.good > b.average) {
            return Err(EngineError::configuration(format!(
                "score bands must be strictly descending, got {}/{}/{}",
                b.excellent, b.good, b.average
            )));
        }
        if b.excellent > 100 {
            return Err(EngineError::configuration(
                "excellent band threshold exceeds the 0–100 score range",
            ));
        }
        for (name, scale) in self.all_scales() {
            if scale.saturation <= 0.0 {
                return Err(EngineError::configuration(format!(
                    "scale '{name}' must have a positive saturation"
                )));
            }
        }
        Ok(())
    }

    fn all_scales(&self) -> Vec<(&'static str, LogScale)> {
        let g = &self.github_scales;
        let s = &self.stack_overflow_scales;
        vec![
            ("github.followers", g.followers),
            ("github.stars", g.stars),
            ("github.forks", g.forks),
            ("github.public_repos", g.public_repos),
            ("github.contributions", g.contributions),
            ("github.languages", g.languages),
            ("stack_overflow.reputation", s.reputation),
            ("stack_overflow.posts", s.posts),
            ("stack_overflow.accepted_answers", s.accepted_answers),
            ("stack_overflow.badge_points", s.badge_points),
        ]
    }

    /// Canonicalizes a single raw skill string: trim, lowercase, then fold
    /// through the synonym table. Unknown skills pass through verbatim.
    pub fn fold_skill(&self, raw: &str) -> String {
        let folded = raw.trim().to_lowercase();
        match self.synonyms.get(&folded) {
            Some(canonical) => canonical.clone(),
            None => folded,
        }
    }
}

fn default_synonyms() -> HashMap<String, String> {
    [
        ("js", "javascript"),
        ("ts", "typescript"),
        ("py", "python"),
        ("golang", "go"),
        ("postgres", "postgresql"),
        ("k8s", "kubernetes"),
        ("node", "node.js"),
        ("nodejs", "node.js"),
        ("reactjs", "react"),
        ("ml", "machine learning"),
    ]
    .into_iter()
    .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
    .collect()
}
