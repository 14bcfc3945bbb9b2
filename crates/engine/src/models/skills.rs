use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::Calibration;

/// A canonicalized set of skills: trimmed, lowercased, synonym-folded
/// against the calibration table. Built once, never mutated — the engine's
/// overlap math assumes both sides were folded through the same table.
///
/// BTreeSet keeps iteration order deterministic, which the scorer's
/// reproducibility contract depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    /// Folds raw skill strings into a canonical set. Empty strings are
    /// dropped; duplicates (after folding) collapse.
    pub fn build<I, S>(raw: I, calibration: &Calibration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let folded = raw
            .into_iter()
            .map(|s| calibration.fold_skill(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();
        SkillSet(folded)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.0.contains(canonical)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Skills present in both sets, in canonical order.
    pub fn intersection(&self, other: &SkillSet) -> BTreeSet<String> {
        self.0.intersection(&other.0).cloned().collect()
    }

    /// Skills in `self` that `other` lacks, in canonical order.
    pub fn difference(&self, other: &SkillSet) -> BTreeSet<String> {
        self.0.difference(&other.0).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(raw: &[&str]) -> SkillSet {
        SkillSet::build(raw.iter().copied(), &Calibration::default())
    }

    #[test]
    fn test_build_folds_case_and_synonyms() {
        let set = skills(&["  JS ", "Python", "js"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("javascript"));
        assert!(set.contains("python"));
    }

    #[test]
    fn test_unknown_skills_pass_through() {
        let set = skills(&["COBOL-85"]);
        assert!(set.contains("cobol-85"));
    }

    #[test]
    fn test_empty_strings_dropped() {
        let set = skills(&["", "   ", "rust"]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_intersection_and_difference() {
        let resume = skills(&["python", "react"]);
        let required = skills(&["python", "sql"]);
        let matched = required.intersection(&resume);
        let missing = required.difference(&resume);
        assert_eq!(matched.into_iter().collect::<Vec<_>>(), vec!["python"]);
        assert_eq!(missing.into_iter().collect::<Vec<_>>(), vec!["sql"]);
    }

    #[test]
    fn test_synonym_folds_align_resume_and_job() {
        // Resume says "js", job says "javascript" — same canonical skill.
        let resume = skills(&["js"]);
        let required = skills(&["JavaScript"]);
        assert_eq!(required.intersection(&resume).len(), 1);
    }
}
