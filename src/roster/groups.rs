//! Gender partition used by the grouped view.

use crate::domain::Student;

/// Gender value collected into the first group.
pub const MALE: &str = "Male";

/// Gender value collected into the second group.
pub const FEMALE: &str = "Female";

/// The roster split into its two gender groups.
///
/// Membership is an exact, case-sensitive match on the gender field. Records
/// with any other value belong to neither group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenderGroups {
    /// Students whose gender is exactly [`MALE`], in source order.
    pub male: Vec<Student>,
    /// Students whose gender is exactly [`FEMALE`], in source order.
    pub female: Vec<Student>,
}

impl GenderGroups {
    /// Partitions `students` into the two groups without reordering.
    #[must_use]
    pub fn partition(students: &[Student]) -> Self {
        let pick = |gender: &str| -> Vec<Student> {
            students
                .iter()
                .filter(|student| student.gender == gender)
                .cloned()
                .collect()
        };

        let groups = Self {
            male: pick(MALE),
            female: pick(FEMALE),
        };

        tracing::debug!(
            male_count = groups.male.len(),
            female_count = groups.female.len(),
            dropped_count = students.len() - groups.len(),
            "partitioned roster by gender"
        );
        groups
    }

    /// Total number of students across both groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.male.len() + self.female.len()
    }

    /// Returns `true` when neither group has members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.male.is_empty() && self.female.is_empty()
    }
}
