//! View model types representing the renderable roster.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They carry
//! display-ready strings only; escaping happens in the components.
//!
//! # Example
//!
//! ```rust
//! use rosterview::ui::viewmodel::{RosterViewModel, TableViewModel};
//!
//! let vm = RosterViewModel::Flat(TableViewModel { rows: vec![], show_avatar: true });
//! assert_eq!(vm.row_count(), 0);
//! ```

use crate::domain::Student;

/// Column headings shared by every table, in display order.
pub const COLUMNS: [&str; 7] = ["ID", "Name", "Gender", "Class", "Marks", "Passing", "Email"];

/// Heading of the first grouped table.
pub const MALE_TITLE: &str = "Male Students";

/// Heading of the second grouped table.
pub const FEMALE_TITLE: &str = "Female Students";

/// Complete view model for the table container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterViewModel {
    /// One table with avatars.
    Flat(TableViewModel),
    /// Labeled tables without avatars, male first.
    Grouped(Vec<GroupViewModel>),
}

impl RosterViewModel {
    /// Number of body rows across all tables.
    #[must_use]
    pub fn row_count(&self) -> usize {
        match self {
            Self::Flat(table) => table.rows.len(),
            Self::Grouped(groups) => groups.iter().map(|g| g.table.rows.len()).sum(),
        }
    }
}

/// One table: a header row plus one body row per student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewModel {
    /// Body rows in display order.
    pub rows: Vec<RowViewModel>,
    /// Whether the name cell carries the avatar image.
    pub show_avatar: bool,
}

impl TableViewModel {
    /// Builds a table from students, preserving their order.
    #[must_use]
    pub fn from_students(students: &[Student], show_avatar: bool) -> Self {
        Self {
            rows: students.iter().map(RowViewModel::from).collect(),
            show_avatar,
        }
    }
}

/// A titled table in the grouped view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupViewModel {
    /// Heading rendered above the table.
    pub title: String,
    /// The group's table.
    pub table: TableViewModel,
}

/// Display values for one student row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowViewModel {
    pub id: String,
    /// "first last".
    pub name: String,
    pub avatar_src: String,
    pub gender: String,
    pub class_label: String,
    pub marks: String,
    /// Drives the passing/failed cell style.
    pub passing: bool,
    /// "Passing" or "Failed".
    pub passing_label: String,
    pub email: String,
}

impl From<&Student> for RowViewModel {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id.clone(),
            name: student.full_name(),
            avatar_src: student.img_src.clone(),
            gender: student.gender.clone(),
            class_label: student.class_label.to_string(),
            marks: student.marks_text(),
            passing: student.passing,
            passing_label: student.passing_label().to_string(),
            email: student.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::test_support::roster;

    #[test]
    fn test_row_maps_every_column() {
        let students = roster();
        let row = RowViewModel::from(&students[1]);

        assert_eq!(row.id, "2");
        assert_eq!(row.name, "Bo Chan");
        assert_eq!(row.gender, "Male");
        assert_eq!(row.class_label, "9");
        assert_eq!(row.marks, "90");
        assert_eq!(row.passing_label, "Failed");
        assert_eq!(row.email, "bo@example.com");
        assert_eq!(row.avatar_src, "https://img.example.com/2.png");
    }

    #[test]
    fn test_row_count_spans_groups() {
        let students = roster();
        let vm = RosterViewModel::Grouped(vec![
            GroupViewModel {
                title: MALE_TITLE.to_string(),
                table: TableViewModel::from_students(&students[1..2], false),
            },
            GroupViewModel {
                title: FEMALE_TITLE.to_string(),
                table: TableViewModel::from_students(&students[2..], false),
            },
        ]);

        assert_eq!(vm.row_count(), 3);
    }
}
