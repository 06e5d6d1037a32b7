//! Named rules and the reference predicates.

use std::fmt;
use std::sync::Arc;

use crate::entity::{Resource, Subject};
use crate::error::PredicateError;

/// Stored predicate form. Fallible so that a defective rule can surface as
/// an error instead of masquerading as a denial.
type Predicate = dyn Fn(&Subject, &Resource) -> Result<bool, PredicateError> + Send + Sync;

/// A named boolean predicate over a ([`Subject`], [`Resource`]) pair.
///
/// Predicates must be deterministic and free of observable side effects, so
/// that repeated evaluation against the same inputs yields the same result.
/// Evaluation order never affects a rule's own result; it only affects which
/// rule a denial blames first.
#[derive(Clone)]
pub struct Rule {
    name: String,
    predicate: Arc<Predicate>,
}

impl Rule {
    pub(crate) fn new(
        name: impl Into<String>,
        predicate: impl Fn(&Subject, &Resource) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::fallible(name, move |subject, resource| Ok(predicate(subject, resource)))
    }

    pub(crate) fn fallible(
        name: impl Into<String>,
        predicate: impl Fn(&Subject, &Resource) -> Result<bool, PredicateError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// The rule's name, unique within its policy set.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn check(
        &self,
        subject: &Subject,
        resource: &Resource,
    ) -> Result<bool, PredicateError> {
        (self.predicate)(subject, resource)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// True iff the subject and resource belong to the same department.
pub fn department_match(subject: &Subject, resource: &Resource) -> bool {
    subject.department == resource.department
}

/// True iff the subject's clearance covers the resource's sensitivity.
pub fn clearance_sufficient(subject: &Subject, resource: &Resource) -> bool {
    subject.clearance_level >= resource.sensitivity_level
}

/// A predicate requiring at least `level` clearance, regardless of resource.
pub fn minimum_clearance(level: u32) -> impl Fn(&Subject, &Resource) -> bool {
    move |subject, _resource| subject.clearance_level >= level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_match() {
        let subject = Subject::new("john", "HR", 3);
        assert!(department_match(
            &subject,
            &Resource::new("Employee Data", "HR", 2)
        ));
        assert!(!department_match(
            &subject,
            &Resource::new("Financial Reports", "Finance", 3)
        ));
    }

    #[test]
    fn test_clearance_sufficient_at_boundary() {
        let resource = Resource::new("Financial Reports", "Finance", 3);
        assert!(clearance_sufficient(
            &Subject::new("a", "Finance", 3),
            &resource
        ));
        assert!(!clearance_sufficient(
            &Subject::new("b", "Finance", 2),
            &resource
        ));
    }

    #[test]
    fn test_minimum_clearance() {
        let at_least_two = minimum_clearance(2);
        let resource = Resource::new("Bulletin", "HR", 0);
        assert!(at_least_two(&Subject::new("a", "HR", 2), &resource));
        assert!(!at_least_two(&Subject::new("b", "HR", 1), &resource));
    }

    #[test]
    fn test_rule_debug_shows_name() {
        let rule = Rule::new("department_match", department_match);
        assert!(format!("{rule:?}").contains("department_match"));
    }
}
