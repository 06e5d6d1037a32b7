//! Policy configuration loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::policy::PolicySet;
use crate::rule::{self, Rule};

/// Declarative rule roster, loaded from TOML.
///
/// Rules materialize in declaration order. A kind listed twice replaces its
/// earlier occurrence in place, matching [`PolicySet::add_rule`] semantics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// A single configured rule.
///
/// Example:
///
/// ```toml
/// [[rules]]
/// kind = "department_match"
///
/// [[rules]]
/// kind = "minimum_clearance"
/// level = 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleConfig {
    DepartmentMatch,
    ClearanceSufficient,
    MinimumClearance { level: u32 },
}

impl RuleConfig {
    /// The rule name this entry registers under.
    pub fn name(&self) -> &'static str {
        match self {
            RuleConfig::DepartmentMatch => "department_match",
            RuleConfig::ClearanceSufficient => "clearance_sufficient",
            RuleConfig::MinimumClearance { .. } => "minimum_clearance",
        }
    }

    fn to_rule(&self) -> Rule {
        match self {
            RuleConfig::DepartmentMatch => Rule::new(self.name(), rule::department_match),
            RuleConfig::ClearanceSufficient => Rule::new(self.name(), rule::clearance_sufficient),
            RuleConfig::MinimumClearance { level } => {
                Rule::new(self.name(), rule::minimum_clearance(*level))
            }
        }
    }
}

impl PolicyConfig {
    /// Load a policy configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse a policy configuration from a TOML string.
    pub fn parse(toml: &str) -> Result<Self> {
        toml::from_str(toml).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Materialize the configured rules into a policy set.
    pub fn build(&self) -> PolicySet {
        let mut set = PolicySet::new();
        for entry in &self.rules {
            set.insert(entry.to_rule());
        }
        set
    }
}
