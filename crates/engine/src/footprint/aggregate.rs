//! Footprint Aggregator — blends per-source dimension signals into one
//! composite score.
//!
//! Per-source weights come from the calibration table (GitHub 0.6,
//! StackOverflow 0.4 by default) and renormalize to sum 1 over the sources
//! that are actually present, so a GitHub-only user reproduces the GitHub
//! signal exactly.

use tracing::debug;

use crate::config::Calibration;
use crate::errors::EngineError;
use crate::footprint::signal::{
    Dimension, FootprintScore, PerformanceLevel, SourceKind, SourceStatus,
};

/// Aggregates all connected sources into a composite footprint score.
///
/// Fails with `InsufficientData` when every source is `Absent` — no data is
/// not the same thing as a zero score, and the caller must be able to tell
/// the two apart.
pub fn aggregate(
    sources: &[SourceStatus],
    calibration: &Calibration,
) -> Result<FootprintScore, EngineError> {
    let present: Vec<_> = sources.iter().filter_map(SourceStatus::signal).collect();
    if present.is_empty() {
        return Err(EngineError::insufficient_data(
            "no professional-activity sources connected",
        ));
    }

    let weight_sum: f64 = present
        .iter()
        .map(|s| source_weight(s.source, calibration))
        .sum();

    let mut dimensions = [0.0_f64; 4];
    for (slot, dimension) in dimensions.iter_mut().zip(Dimension::ALL) {
        *slot = present
            .iter()
            .map(|s| source_weight(s.source, calibration) / weight_sum * s.dimension(dimension))
            .sum::<f64>()
            .clamp(0.0, 100.0);
    }
    let [visibility, activity, impact, expertise] = dimensions;

    // Equal-weighted mean of the four dimensions.
    let overall = ((visibility + activity + impact + expertise) / 4.0)
        .round()
        .clamp(0.0, 100.0) as u32;
    let performance_level = PerformanceLevel::from_score(overall, &calibration.bands);

    debug!(
        overall,
        sources = present.len(),
        ?performance_level,
        "aggregated footprint"
    );

    Ok(FootprintScore {
        overall,
        visibility,
        activity,
        impact,
        expertise,
        performance_level,
        present_sources: present.iter().map(|s| s.source).collect(),
    })
}

fn source_weight(source: SourceKind, calibration: &Calibration) -> f64 {
    match source {
        SourceKind::Github => calibration.source_weights.github,
        SourceKind::StackOverflow => calibration.source_weights.stack_overflow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::signal::SourceSignal;

    fn github(visibility: f64, activity: f64, impact: f64, expertise: f64) -> SourceStatus {
        SourceStatus::Present(SourceSignal {
            source: SourceKind::Github,
            visibility,
            activity,
            impact,
            expertise,
        })
    }

    fn stack_overflow(
        visibility: f64,
        activity: f64,
        impact: f64,
        expertise: f64,
    ) -> SourceStatus {
        SourceStatus::Present(SourceSignal {
            source: SourceKind::StackOverflow,
            visibility,
            activity,
            impact,
            expertise,
        })
    }

    #[test]
    fn test_all_absent_is_insufficient_data() {
        let sources = [
            SourceStatus::Absent {
                source: SourceKind::Github,
            },
            SourceStatus::Absent {
                source: SourceKind::StackOverflow,
            },
        ];
        let err = aggregate(&sources, &Calibration::default()).unwrap_err();
        assert!(matches!(err, EngineError::InsufficientData(_)));
    }

    #[test]
    fn test_single_source_reproduces_its_signal_exactly() {
        // Weight renormalizes to 1.0 when only GitHub is present.
        let sources = [
            github(80.0, 60.0, 70.0, 50.0),
            SourceStatus::Absent {
                source: SourceKind::StackOverflow,
            },
        ];
        let score = aggregate(&sources, &Calibration::default()).unwrap();
        assert_eq!(score.visibility, 80.0);
        assert_eq!(score.activity, 60.0);
        assert_eq!(score.impact, 70.0);
        assert_eq!(score.expertise, 50.0);
        assert_eq!(score.overall, 65); // (80+60+70+50)/4
        assert_eq!(score.performance_level, PerformanceLevel::Good);
        assert_eq!(score.present_sources, vec![SourceKind::Github]);
    }

    #[test]
    fn test_two_sources_blend_60_40() {
        let sources = [
            github(90.0, 90.0, 90.0, 90.0),
            stack_overflow(50.0, 50.0, 50.0, 50.0),
        ];
        let score = aggregate(&sources, &Calibration::default()).unwrap();
        // 0.6·90 + 0.4·50 = 74 on every dimension.
        assert!((score.visibility - 74.0).abs() < 1e-9);
        assert!((score.activity - 74.0).abs() < 1e-9);
        assert_eq!(score.overall, 74);
        assert_eq!(score.performance_level, PerformanceLevel::Good);
    }

    #[test]
    fn test_present_but_zero_source_drags_the_mean() {
        // A brand-new empty GitHub account is data, not absence: it blends
        // in as a real zero instead of being skipped.
        let sources = [
            github(0.0, 0.0, 0.0, 0.0),
            stack_overflow(50.0, 50.0, 50.0, 50.0),
        ];
        let score = aggregate(&sources, &Calibration::default()).unwrap();
        // 0.6·0 + 0.4·50 = 20.
        assert!((score.visibility - 20.0).abs() < 1e-9);
        assert_eq!(score.overall, 20);
        assert_eq!(score.performance_level, PerformanceLevel::NeedsImprovement);
        assert_eq!(score.present_sources.len(), 2);
    }

    #[test]
    fn test_only_zero_sources_still_score_zero_not_error() {
        let sources = [github(0.0, 0.0, 0.0, 0.0)];
        let score = aggregate(&sources, &Calibration::default()).unwrap();
        assert_eq!(score.overall, 0);
    }

    #[test]
    fn test_overall_rounds_to_nearest() {
        // Dimensions averaging 62.5 → overall 63.
        let sources = [github(50.0, 60.0, 70.0, 70.0)];
        let score = aggregate(&sources, &Calibration::default()).unwrap();
        assert_eq!(score.overall, 63);
    }

    #[test]
    fn test_excellent_band() {
        let sources = [github(85.0, 90.0, 88.0, 92.0)];
        let score = aggregate(&sources, &Calibration::default()).unwrap();
        assert_eq!(score.performance_level, PerformanceLevel::Excellent);
    }
}
