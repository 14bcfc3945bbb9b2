//! Multi-source scoring and matching engine.
//!
//! The computational core of the career platform: resume↔job compatibility
//! scoring, professional-footprint aggregation across connected sources,
//! and recommendation derivation. Pure, synchronous, and deterministic —
//! collaborators (resume parser, job store, GitHub/StackOverflow clients)
//! hand in structured records; the API layer serializes and stores what
//! comes out. The only shared state is the immutable [`config::Calibration`]
//! table, loaded once at startup and injected by reference.

pub mod config;
pub mod errors;
pub mod footprint;
pub mod matching;
pub mod models;
pub mod recommend;

pub use config::Calibration;
pub use errors::EngineError;
pub use footprint::aggregate::aggregate;
pub use footprint::analyze::{analyze, RawSourceRecord};
pub use footprint::signal::{
    Dimension, FootprintScore, PerformanceLevel, SourceKind, SourceSignal, SourceStatus,
};
pub use matching::normalize::ExperienceFit;
pub use matching::scorer::{rank_matches, score, MatchBreakdown, MatchScore, RankedMatch};
pub use models::job::{ExperienceBand, JobRequirement};
pub use models::resume::{EducationLevel, ResumeProfile};
pub use models::skills::SkillSet;
pub use recommend::deriver::{derive, Recommendation, RecommendationKind};
