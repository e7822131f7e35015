//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single owner of the loaded roster and
//! of the view currently shown in the table container.
//!
//! # Architecture
//!
//! `AppState` separates core data (the roster in source order) from derived
//! state (the current view). Every search or sort rebuilds the view from the
//! full roster, so derived views never compound.
//!
//! # Example
//!
//! ```rust
//! use rosterview::app::AppState;
//! use rosterview::roster::Criterion;
//! use rosterview::{Student, Theme};
//!
//! let mut state = AppState::new(Theme::default());
//! state.load(vec![Student { first_name: "Bo".into(), ..Student::default() }]);
//! state.apply_search("zzz");
//! state.apply_sort(Criterion::NameAsc);
//! assert_eq!(state.compute_viewmodel().row_count(), 1);
//! ```

use crate::domain::Student;
use crate::roster::{search_students, sort_students, Criterion, GenderGroups, SortOutcome};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    GroupViewModel, RosterViewModel, TableViewModel, FEMALE_TITLE, MALE_TITLE,
};

/// The view currently painted into the table container.
#[derive(Debug, Clone, PartialEq)]
pub enum RosterView {
    /// A flat table over a derived sequence.
    Flat(Vec<Student>),
    /// The two gender tables.
    Grouped(GenderGroups),
}

impl Default for RosterView {
    fn default() -> Self {
        Self::Flat(Vec::new())
    }
}

impl From<SortOutcome> for RosterView {
    fn from(outcome: SortOutcome) -> Self {
        match outcome {
            SortOutcome::Flat(students) => Self::Flat(students),
            SortOutcome::Grouped(groups) => Self::Grouped(groups),
        }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The roster in source order. Never reordered or filtered in place.
    pub students: Vec<Student>,

    /// Derived view shown in the table container.
    pub view: RosterView,

    /// Last search term applied, empty when none.
    pub search_term: String,

    /// Last criterion applied, if the last operation was a sort.
    pub criterion: Option<Criterion>,

    /// Whether the roster has been loaded. Loading happens at most once.
    pub loaded: bool,

    /// Color scheme for the page stylesheet.
    pub theme: Theme,
}

impl AppState {
    /// Creates an empty, not-yet-loaded state.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            students: Vec::new(),
            view: RosterView::default(),
            search_term: String::new(),
            criterion: None,
            loaded: false,
            theme,
        }
    }

    /// Installs the loaded roster and resets the view to the full flat table.
    pub fn load(&mut self, students: Vec<Student>) {
        self.view = RosterView::Flat(students.clone());
        self.students = students;
        self.search_term.clear();
        self.criterion = None;
        self.loaded = true;
    }

    /// Replaces the view with the students matching `term`.
    ///
    /// Searches always produce a flat view and clear the current criterion.
    pub fn apply_search(&mut self, term: &str) {
        self.view = RosterView::Flat(search_students(&self.students, term));
        term.clone_into(&mut self.search_term);
        self.criterion = None;
    }

    /// Replaces the view with the full roster ordered by `criterion`.
    pub fn apply_sort(&mut self, criterion: Criterion) {
        self.view = sort_students(&self.students, &criterion).into();
        self.criterion = Some(criterion);
    }

    /// Computes the renderable view model for the current view.
    ///
    /// The flat view carries avatars; the grouped view does not.
    #[must_use]
    pub fn compute_viewmodel(&self) -> RosterViewModel {
        match &self.view {
            RosterView::Flat(students) => {
                RosterViewModel::Flat(TableViewModel::from_students(students, true))
            }
            RosterView::Grouped(groups) => RosterViewModel::Grouped(vec![
                GroupViewModel {
                    title: MALE_TITLE.to_string(),
                    table: TableViewModel::from_students(&groups.male, false),
                },
                GroupViewModel {
                    title: FEMALE_TITLE.to_string(),
                    table: TableViewModel::from_students(&groups.female, false),
                },
            ]),
        }
    }
}
