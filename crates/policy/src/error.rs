//! Policy error types.

use thiserror::Error;

/// Boxed error returned by a fallible rule predicate.
pub type PredicateError = Box<dyn std::error::Error + Send + Sync>;

/// Policy errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A rule was registered with an empty name.
    ///
    /// An empty name can never be targeted for removal, so it is rejected
    /// at registration.
    #[error("invalid rule name: must not be empty")]
    InvalidRuleName,

    /// A rule's predicate returned an error during evaluation.
    ///
    /// A misbehaving predicate is a configuration or programming defect,
    /// not an access decision, so it is never converted into a denial.
    #[error("predicate of rule '{rule}' failed")]
    PredicateFailure {
        rule: String,
        #[source]
        source: PredicateError,
    },

    /// Failed to parse a policy configuration file.
    #[error("failed to parse policy config: {0}")]
    Parse(String),

    /// An I/O error occurred while reading a policy configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
