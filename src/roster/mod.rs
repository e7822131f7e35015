//! Roster operations: search, sort, and gender grouping.
//!
//! Every operation here takes the full source roster by reference and returns
//! a freshly built sequence. Nothing in this module mutates its input, which is
//! what lets the application always start from the original collection.
//!
//! # Modules
//!
//! - [`filter`]: Case-insensitive substring search on name and email
//! - [`sort`]: Named criteria and the sorter
//! - [`groups`]: Male/Female partition for the grouped view
//! - [`collate`]: Locale-aware name comparison
//!
//! # Example
//!
//! ```rust
//! use rosterview::roster::{search_students, sort_students, Criterion, SortOutcome};
//! use rosterview::Student;
//!
//! let students: Vec<Student> = serde_json::from_str(
//!     r#"[{"first_name": "Bo", "marks": 90}, {"first_name": "Amy", "marks": 70}]"#,
//! ).unwrap();
//!
//! assert_eq!(search_students(&students, "").len(), 2);
//! assert!(matches!(sort_students(&students, &Criterion::Gender), SortOutcome::Grouped(_)));
//! ```

pub mod collate;
pub mod filter;
pub mod groups;
pub mod sort;

pub use collate::locale_compare;
pub use filter::search_students;
pub use groups::GenderGroups;
pub use sort::{sort_students, Criterion, SortOutcome};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::{ClassLabel, Student};

    pub fn student(id: &str, first: &str, last: &str, gender: &str, marks: f64, passing: bool) -> Student {
        Student {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            gender: gender.to_string(),
            class_label: ClassLabel::Number(10.0),
            marks: Some(marks),
            passing,
            email: format!("{}@example.com", first.to_lowercase()),
            img_src: format!("https://img.example.com/{id}.png"),
        }
    }

    /// Four students: two Female, one Male, one with another gender value.
    pub fn roster() -> Vec<Student> {
        let amy = student("1", "Amy", "Lee", "Female", 70.0, true);

        let mut bo = student("2", "Bo", "Chan", "Male", 90.0, false);
        bo.class_label = ClassLabel::Number(9.0);

        let mut cy = student("3", "Cy", "Diaz", "Nonbinary", 55.0, true);
        cy.class_label = ClassLabel::Number(11.0);
        cy.email = "cy@school.org".to_string();

        let mut dee = student("4", "Dee", "Park", "Female", 70.0, false);
        dee.class_label = ClassLabel::Number(9.0);

        vec![amy, bo, cy, dee]
    }
}
