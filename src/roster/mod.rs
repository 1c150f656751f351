/// The immutable, ordered collection of student records.
pub mod store;

/// Human-readable rendering of student records.
pub mod formatter;

pub use formatter::{format_student_info, format_student_list};
pub use store::Roster;
