//! The ordered rule registry.

use crate::entity::{Resource, Subject};
use crate::error::{Error, PredicateError, Result};
use crate::rule::{self, Rule};

/// An ordered, named collection of rules defining the access contract.
///
/// Rules evaluate in insertion order, which makes short-circuit diagnostics
/// deterministic: the first failing rule is the one a denial reports.
///
/// A `PolicySet` is a long-lived value, typically constructed once at
/// startup. Evaluation takes `&self` and may run concurrently from many
/// threads, but mutation requires single-writer discipline: wrap the set in
/// an `RwLock`, or publish a mutated clone atomically (clones are cheap
/// because rules are reference-counted).
#[derive(Debug, Clone, Default)]
pub struct PolicySet {
    rules: Vec<Rule>,
}

impl PolicySet {
    /// Create an empty policy set.
    ///
    /// An empty set grants every request, so register at least a baseline
    /// rule before serving real checks.
    pub fn new() -> Self {
        Self::default()
    }

    /// The reference policy: `department_match` followed by
    /// `clearance_sufficient`.
    pub fn baseline() -> Self {
        let mut set = Self::new();
        set.insert(Rule::new("department_match", rule::department_match));
        set.insert(Rule::new("clearance_sufficient", rule::clearance_sufficient));
        set
    }

    /// Register a rule under `name`.
    ///
    /// A new name appends at the end of the evaluation order. An existing
    /// name is replaced **in place** (same position, other rules untouched)
    /// as an intentional last-write-wins override, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRuleName`] if `name` is empty.
    pub fn add_rule(
        &mut self,
        name: impl Into<String>,
        predicate: impl Fn(&Subject, &Resource) -> bool + Send + Sync + 'static,
    ) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidRuleName);
        }
        self.insert(Rule::new(name, predicate));
        Ok(())
    }

    /// Register a rule whose predicate can itself fail.
    ///
    /// Same insertion and replacement semantics as [`PolicySet::add_rule`].
    /// A predicate error during evaluation aborts the check with
    /// [`Error::PredicateFailure`] instead of producing a decision.
    pub fn add_fallible_rule(
        &mut self,
        name: impl Into<String>,
        predicate: impl Fn(&Subject, &Resource) -> std::result::Result<bool, PredicateError>
        + Send
        + Sync
        + 'static,
    ) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidRuleName);
        }
        self.insert(Rule::fallible(name, predicate));
        Ok(())
    }

    /// Remove the named rule, preserving the relative order of the rest.
    ///
    /// Removing an absent name is a no-op, keeping policy edits idempotent.
    pub fn remove_rule(&mut self, name: &str) {
        self.rules.retain(|rule| rule.name() != name);
    }

    /// The rules in evaluation (insertion) order.
    ///
    /// Restartable: each call yields a fresh pass over the current order.
    pub fn rules_in_order(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Whether a rule with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.iter().any(|rule| rule.name() == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Insert-or-replace; replacement keeps the existing position.
    pub(crate) fn insert(&mut self, rule: Rule) {
        match self.rules.iter().position(|r| r.name() == rule.name()) {
            Some(index) => self.rules[index] = rule,
            None => self.rules.push(rule),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> Subject {
        Subject::new("test-subject", "HR", 1)
    }

    fn resource() -> Resource {
        Resource::new("test-resource", "HR", 1)
    }

    #[test]
    fn test_add_rule_appends_in_order() {
        let mut set = PolicySet::new();
        set.add_rule("first", |_, _| true).unwrap();
        set.add_rule("second", |_, _| true).unwrap();
        set.add_rule("third", |_, _| true).unwrap();

        let names: Vec<_> = set.rules_in_order().map(Rule::name).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn test_add_rule_empty_name_rejected() {
        let mut set = PolicySet::new();
        let result = set.add_rule("", |_, _| true);
        assert!(matches!(result, Err(Error::InvalidRuleName)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_replace_keeps_position_and_adopts_new_predicate() {
        let mut set = PolicySet::new();
        set.add_rule("a", |_, _| true).unwrap();
        set.add_rule("b", |_, _| true).unwrap();
        set.add_rule("c", |_, _| true).unwrap();

        set.add_rule("b", |_, _| false).unwrap();

        assert_eq!(set.len(), 3);
        let names: Vec<_> = set.rules_in_order().map(Rule::name).collect();
        assert_eq!(names, ["a", "b", "c"]);

        let decision = set.evaluate(&subject(), &resource()).unwrap();
        assert_eq!(decision.failed_rule(), Some("b"));
    }

    #[test]
    fn test_remove_rule_preserves_order() {
        let mut set = PolicySet::new();
        set.add_rule("a", |_, _| true).unwrap();
        set.add_rule("b", |_, _| true).unwrap();
        set.add_rule("c", |_, _| true).unwrap();

        set.remove_rule("b");

        let names: Vec<_> = set.rules_in_order().map(Rule::name).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn test_remove_missing_rule_is_noop() {
        let mut set = PolicySet::baseline();
        set.remove_rule("missing");

        assert_eq!(set.len(), 2);
        let names: Vec<_> = set.rules_in_order().map(Rule::name).collect();
        assert_eq!(names, ["department_match", "clearance_sufficient"]);
    }

    #[test]
    fn test_baseline_rule_order() {
        let set = PolicySet::baseline();
        let names: Vec<_> = set.rules_in_order().map(Rule::name).collect();
        assert_eq!(names, ["department_match", "clearance_sufficient"]);
    }

    #[test]
    fn test_contains() {
        let set = PolicySet::baseline();
        assert!(set.contains("department_match"));
        assert!(!set.contains("missing"));
    }

    #[test]
    fn test_rules_in_order_is_restartable() {
        let set = PolicySet::baseline();
        let first: Vec<_> = set.rules_in_order().map(Rule::name).collect();
        let second: Vec<_> = set.rules_in_order().map(Rule::name).collect();
        assert_eq!(first, second);
    }
}
