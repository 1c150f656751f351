use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::errors::{Result, RosterError};
use crate::types::Student;

/// Read-only roster of students, kept in declaration order.
///
/// A `Roster` is built once at startup and handed to the server by reference.
/// Nothing mutates it afterwards, so repeated queries always see the same data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Builds a roster from the given records, preserving their order.
    ///
    /// Fails if any record has an empty `id` or if two records share one.
    pub fn new(students: Vec<Student>) -> Result<Self> {
        let mut seen = HashSet::new();
        for (index, student) in students.iter().enumerate() {
            if student.id.is_empty() {
                return Err(RosterError::Roster {
                    message: format!("record {} has an empty id", index),
                });
            }
            if !seen.insert(student.id.as_str()) {
                return Err(RosterError::Roster {
                    message: format!("duplicate student id '{}'", student.id),
                });
            }
        }
        Ok(Self { students })
    }

    /// The built-in sample roster served when no roster file is configured.
    pub fn seed() -> Self {
        Self {
            students: vec![
                Student::new("1", "张三", 18, "高三", "A班"),
                Student::new("2", "李四", 17, "高二", "B班"),
                Student::new("3", "王五", 16, "高一", "C班"),
                Student::new("4", "赵六", 17, "高二", "A班"),
                Student::new("5", "孙七", 16, "高一", "B班"),
            ],
        }
    }

    /// Loads a roster from a JSON file containing an array of student records.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| RosterError::Roster {
            message: format!("failed to read roster file '{}': {}", path.display(), e),
        })?;

        let students: Vec<Student> =
            serde_json::from_str(&contents).map_err(|e| RosterError::Roster {
                message: format!("failed to parse roster file '{}': {}", path.display(), e),
            })?;

        Self::new(students)
    }

    /// All records, in declaration order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Records whose section equals `section` exactly (case-sensitive).
    pub fn in_section(&self, section: &str) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.section == section)
            .collect()
    }

    /// The first record whose id equals `id` exactly.
    pub fn find(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }
}
