// Professional-footprint pipeline: raw source records → per-source
// dimension signals → one composite score. Absence of a source is modeled
// in the type (SourceStatus), never as a zeroed-out signal.

pub mod aggregate;
pub mod analyze;
pub mod signal;
