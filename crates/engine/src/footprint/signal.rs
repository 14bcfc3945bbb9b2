use serde::{Deserialize, Serialize};

use crate::config::ScoreBands;

/// An external professional-activity platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Github,
    StackOverflow,
}

/// One analyzed source, reduced to the four footprint dimensions,
/// each 0–100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSignal {
    pub source: SourceKind,
    pub visibility: f64,
    pub activity: f64,
    pub impact: f64,
    pub expertise: f64,
}

impl SourceSignal {
    pub fn dimension(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Visibility => self.visibility,
            Dimension::Activity => self.activity,
            Dimension::Impact => self.impact,
            Dimension::Expertise => self.expertise,
        }
    }
}

/// Connection state of one source. `Present` with all-zero dimensions (a
/// brand-new empty account) is a real signal; `Absent` means the source
/// was never connected. The aggregator treats the two differently, and the
/// type makes it impossible to conflate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceStatus {
    Absent { source: SourceKind },
    Present(SourceSignal),
}

impl SourceStatus {
    pub fn signal(&self) -> Option<&SourceSignal> {
        match self {
            SourceStatus::Present(signal) => Some(signal),
            SourceStatus::Absent { .. } => None,
        }
    }
}

/// The four footprint dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Visibility,
    Activity,
    Impact,
    Expertise,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Visibility,
        Dimension::Activity,
        Dimension::Impact,
        Dimension::Expertise,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Visibility => "visibility",
            Dimension::Activity => "activity",
            Dimension::Impact => "impact",
            Dimension::Expertise => "expertise",
        }
    }
}

/// Threshold-banded summary of an overall footprint score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceLevel {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl PerformanceLevel {
    pub fn from_score(overall: u32, bands: &ScoreBands) -> Self {
        if overall >= bands.excellent {
            PerformanceLevel::Excellent
        } else if overall >= bands.good {
            PerformanceLevel::Good
        } else if overall >= bands.average {
            PerformanceLevel::Average
        } else {
            PerformanceLevel::NeedsImprovement
        }
    }
}

/// Composite footprint score across all present sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintScore {
    /// 0–100, equal-weighted mean of the four dimensions.
    pub overall: u32,
    pub visibility: f64,
    pub activity: f64,
    pub impact: f64,
    pub expertise: f64,
    pub performance_level: PerformanceLevel,
    /// Which sources actually contributed, for breakdown labeling.
    pub present_sources: Vec<SourceKind>,
}

impl FootprintScore {
    pub fn dimension(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Visibility => self.visibility,
            Dimension::Activity => self.activity,
            Dimension::Impact => self.impact,
            Dimension::Expertise => self.expertise,
        }
    }
}
