// Compatibility matching: signal normalization + the resume↔job scorer.
// Everything in here is pure — collaborators supply structured records,
// the API layer serializes the results.

pub mod normalize;
pub mod scorer;
