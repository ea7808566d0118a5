//! Per-rule validation results.

use std::ops::Index;

use strum::IntoEnumIterator;

use crate::rule::{RULE_COUNT, Rule};

/// Outcome of every rule for one password.
///
/// Always holds exactly one entry per [`Rule`]; iteration follows the
/// canonical rule order. Validity is derived from the entries on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleResults {
    passed: [bool; RULE_COUNT],
}

impl RuleResults {
    pub(crate) fn new() -> Self {
        Self {
            passed: [false; RULE_COUNT],
        }
    }

    pub(crate) fn record(&mut self, rule: Rule, passed: bool) {
        self.passed[rule.index()] = passed;
    }

    /// Whether `rule` holds.
    pub fn get(&self, rule: Rule) -> bool {
        self.passed[rule.index()]
    }

    /// All rules with their outcome, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Rule, bool)> + '_ {
        Rule::iter().map(move |rule| (rule, self.get(rule)))
    }

    /// `true` iff every rule holds.
    pub fn is_valid(&self) -> bool {
        self.passed.iter().all(|&p| p)
    }

    /// Rules that do not hold, in canonical order.
    pub fn failed(&self) -> impl Iterator<Item = Rule> + '_ {
        self.iter().filter(|&(_, p)| !p).map(|(rule, _)| rule)
    }

    pub fn passed_count(&self) -> usize {
        self.passed.iter().filter(|&&p| p).count()
    }

    /// Labels of the rules that do not hold.
    pub fn reasons(&self) -> Vec<String> {
        self.failed().map(|rule| rule.label().to_string()).collect()
    }
}

impl Index<Rule> for RuleResults {
    type Output = bool;

    fn index(&self, rule: Rule) -> &bool {
        &self.passed[rule.index()]
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RuleResults {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(RULE_COUNT))?;
        for (rule, passed) in self.iter() {
            map.serialize_entry(rule.name(), &passed)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_passing() -> RuleResults {
        let mut results = RuleResults::new();
        for rule in Rule::iter() {
            results.record(rule, true);
        }
        results
    }

    #[test]
    fn test_new_results_fail_everything() {
        let results = RuleResults::new();
        assert!(!results.is_valid());
        assert_eq!(results.passed_count(), 0);
        assert_eq!(results.failed().count(), RULE_COUNT);
    }

    #[test]
    fn test_all_passing_is_valid() {
        let results = all_passing();
        assert!(results.is_valid());
        assert_eq!(results.passed_count(), RULE_COUNT);
        assert!(results.reasons().is_empty());
    }

    #[test]
    fn test_single_failure_invalidates() {
        for rule in Rule::iter() {
            let mut results = all_passing();
            results.record(rule, false);
            assert!(!results.is_valid());
            assert_eq!(results.failed().collect::<Vec<_>>(), vec![rule]);
            assert_eq!(results.reasons(), vec![rule.label().to_string()]);
        }
    }

    #[test]
    fn test_get_and_index_agree() {
        let mut results = RuleResults::new();
        results.record(Rule::NoZero, true);
        results.record(Rule::MinNumbers, true);

        for rule in Rule::iter() {
            assert_eq!(results.get(rule), results[rule]);
        }
        assert!(results[Rule::NoZero]);
        assert!(!results[Rule::Length]);
    }

    #[test]
    fn test_iter_is_canonical_and_exhaustive() {
        let rules: Vec<Rule> = all_passing().iter().map(|(rule, _)| rule).collect();
        assert_eq!(rules, Rule::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_failed_keeps_canonical_order() {
        let mut results = all_passing();
        results.record(Rule::NoSpaces, false);
        results.record(Rule::Length, false);
        results.record(Rule::MinSpecialChars, false);

        assert_eq!(
            results.failed().collect::<Vec<_>>(),
            vec![Rule::Length, Rule::MinSpecialChars, Rule::NoSpaces]
        );
    }
}
