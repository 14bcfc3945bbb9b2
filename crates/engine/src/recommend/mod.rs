// Recommendation derivation from score breakdowns. Output ownership passes
// to the calling layer; nothing here is persisted.

pub mod deriver;
