//! Decision evaluation over a policy set.

use serde::{Deserialize, Serialize};

use crate::entity::{Resource, Subject};
use crate::error::{Error, Result};
use crate::policy::PolicySet;

/// The outcome of an access check.
///
/// A denial always names the first rule, in registration order, whose
/// predicate returned false, so callers can render a specific cause
/// ("denied by clearance_sufficient") rather than an opaque boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Decision {
    Granted,
    Denied { failed_rule: String },
}

impl Decision {
    pub fn is_granted(&self) -> bool {
        matches!(self, Decision::Granted)
    }

    /// The rule that caused the denial, if any.
    pub fn failed_rule(&self) -> Option<&str> {
        match self {
            Decision::Granted => None,
            Decision::Denied { failed_rule } => Some(failed_rule),
        }
    }
}

impl PolicySet {
    /// Check whether `subject` may access `resource`.
    ///
    /// Rules run in registration order and evaluation stops at the first
    /// predicate returning false. Conjunction is commutative, so rule order
    /// never changes the outcome, only which rule a denial blames when more
    /// than one would fail. An empty policy set grants every request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PredicateFailure`] if a predicate itself errors.
    /// The failure surfaces to the caller and is never converted into a
    /// denial.
    pub fn evaluate(&self, subject: &Subject, resource: &Resource) -> Result<Decision> {
        for rule in self.rules_in_order() {
            match rule.check(subject, resource) {
                Ok(true) => {}
                Ok(false) => {
                    return Ok(Decision::Denied {
                        failed_rule: rule.name().to_string(),
                    });
                }
                Err(source) => {
                    return Err(Error::PredicateFailure {
                        rule: rule.name().to_string(),
                        source,
                    });
                }
            }
        }
        Ok(Decision::Granted)
    }
}
