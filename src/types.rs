use serde::{Deserialize, Serialize};

/// A single entry in the student roster.
///
/// Records are read-only for the lifetime of the server; the `id` field is
/// unique within a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier, compared by exact string equality.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// School year, e.g. `高三`.
    pub grade: String,
    /// Class section, e.g. `A班`. Section filters match this exactly.
    pub section: String,
}

impl Student {
    /// Convenience constructor used for seed data and tests.
    pub fn new(id: &str, name: &str, age: u32, grade: &str, section: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            age,
            grade: grade.to_string(),
            section: section.to_string(),
        }
    }
}
