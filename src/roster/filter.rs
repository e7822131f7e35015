//! Case-insensitive text search over the roster.

use crate::domain::Student;

/// Returns the students whose first name, last name, or email contains `term`.
///
/// Matching is a case-insensitive substring test. An empty term matches every
/// record. Source order is preserved and the input is left untouched.
///
/// # Example
///
/// ```rust
/// use rosterview::{roster::search_students, Student};
///
/// let bo = Student { first_name: "Bo".into(), last_name: "Chan".into(), ..Student::default() };
/// let amy = Student { first_name: "Amy".into(), last_name: "Lee".into(), ..Student::default() };
///
/// let found = search_students(&[amy, bo.clone()], "bo");
/// assert_eq!(found, vec![bo]);
/// ```
#[must_use]
pub fn search_students(students: &[Student], term: &str) -> Vec<Student> {
    let _span = tracing::debug_span!(
        "search_students",
        total_students = students.len(),
        term_len = term.len()
    )
    .entered();

    let needle = term.to_lowercase();
    let matches: Vec<Student> = students
        .iter()
        .filter(|student| matches_term(student, &needle))
        .cloned()
        .collect();

    tracing::debug!(matched_count = matches.len(), "search filter applied");
    matches
}

/// Tests one student against an already lowercased needle.
fn matches_term(student: &Student, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [&student.first_name, &student.last_name, &student.email]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
