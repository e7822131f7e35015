//! Named sort criteria and the sorter that applies them.
//!
//! A [`Criterion`] selects how the roster is reordered. Most criteria produce a
//! flat sequence; `gender` instead produces the two gender groups and `passing`
//! is a filter rather than a sort. Unknown names fall back to the source order.

use super::collate::locale_compare;
use super::groups::GenderGroups;
use crate::domain::Student;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Symbolic sort or grouping strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// `"name-asc"`: "first last", A to Z.
    NameAsc,
    /// `"name-desc"`: "first last", Z to A.
    NameDesc,
    /// `"marks"`: lowest score first.
    Marks,
    /// `"class"`: lowest grade label first.
    Class,
    /// `"passing"`: only passing students, source order.
    Passing,
    /// `"gender"`: grouped view instead of a flat sequence.
    Gender,
    /// Any other name. Leaves the source order unchanged.
    Unrecognized(String),
}

impl Criterion {
    /// Wire name of the criterion.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::Marks => "marks",
            Self::Class => "class",
            Self::Passing => "passing",
            Self::Gender => "gender",
            Self::Unrecognized(name) => name,
        }
    }
}

impl FromStr for Criterion {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "name-asc" => Self::NameAsc,
            "name-desc" => Self::NameDesc,
            "marks" => Self::Marks,
            "class" => Self::Class,
            "passing" => Self::Passing,
            "gender" => Self::Gender,
            other => Self::Unrecognized(other.to_string()),
        })
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of applying a criterion.
#[derive(Debug, Clone, PartialEq)]
pub enum SortOutcome {
    /// A single derived sequence for the flat table.
    Flat(Vec<Student>),
    /// The two gender groups for the grouped view.
    Grouped(GenderGroups),
}

/// Applies `criterion` to a copy of `students`.
///
/// Sorting is stable, so students with equal keys keep their source order.
/// The input slice is never modified.
///
/// # Example
///
/// ```rust
/// use rosterview::roster::{sort_students, Criterion, SortOutcome};
/// use rosterview::Student;
///
/// let high = Student { first_name: "Bo".into(), marks: Some(90.0), ..Student::default() };
/// let low = Student { first_name: "Amy".into(), marks: Some(70.0), ..Student::default() };
///
/// let outcome = sort_students(&[high.clone(), low.clone()], &Criterion::Marks);
/// assert_eq!(outcome, SortOutcome::Flat(vec![low, high]));
/// ```
#[must_use]
pub fn sort_students(students: &[Student], criterion: &Criterion) -> SortOutcome {
    let _span = tracing::debug_span!(
        "sort_students",
        total_students = students.len(),
        criterion = %criterion
    )
    .entered();

    let mut derived = students.to_vec();
    match criterion {
        Criterion::NameAsc => {
            derived.sort_by(|a, b| locale_compare(&a.full_name(), &b.full_name()));
        }
        Criterion::NameDesc => {
            derived.sort_by(|a, b| locale_compare(&b.full_name(), &a.full_name()));
        }
        Criterion::Marks => derived.sort_by(|a, b| compare_marks(a.marks, b.marks)),
        Criterion::Class => derived.sort_by(|a, b| a.class_label.cmp(&b.class_label)),
        Criterion::Passing => derived.retain(|student| student.passing),
        Criterion::Gender => return SortOutcome::Grouped(GenderGroups::partition(students)),
        Criterion::Unrecognized(name) => {
            tracing::debug!(criterion = %name, "unrecognized criterion, keeping source order");
        }
    }

    tracing::debug!(result_count = derived.len(), "roster sorted");
    SortOutcome::Flat(derived)
}

/// Orders known scores numerically and unknown scores last.
fn compare_marks(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
