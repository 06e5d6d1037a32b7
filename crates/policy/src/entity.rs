use serde::{Deserialize, Serialize};

/// The acting entity requesting access.
///
/// Subjects are caller-constructed values; the engine borrows them for the
/// duration of a check and stores nothing. Uniqueness of `id` within a
/// deployment is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Opaque identifier.
    pub id: String,
    /// Organizational unit label.
    pub department: String,
    /// Ordered privilege level; higher is more privileged.
    pub clearance_level: u32,
}

impl Subject {
    pub fn new(
        id: impl Into<String>,
        department: impl Into<String>,
        clearance_level: u32,
    ) -> Self {
        Self {
            id: id.into(),
            department: department.into(),
            clearance_level,
        }
    }
}

/// The target entity being protected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Opaque identifier.
    pub name: String,
    /// Owning organizational unit label.
    pub department: String,
    /// Ordered sensitivity level; higher is more sensitive. Drawn from the
    /// same scale as [`Subject::clearance_level`]; keeping the scales
    /// aligned is a caller invariant the engine does not check.
    pub sensitivity_level: u32,
}

impl Resource {
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        sensitivity_level: u32,
    ) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            sensitivity_level,
        }
    }
}
