//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes the roster load
//! result and control events, translating them into state changes and action
//! sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the loader or from bound controls
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution, together with a flag
//!    telling the host whether the table container must be re-rendered
//!
//! # Example
//!
//! ```rust
//! use rosterview::app::{handle_event, Action, AppState, Event};
//! use rosterview::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::StudentsLoaded(vec![]))?;
//! assert!(render);
//! assert_eq!(actions, vec![Action::BindControls]);
//! # Ok::<(), rosterview::RosterError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Student;
use crate::roster::Criterion;

/// Events produced by the loader or by the page controls.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The roster document loaded and decoded.
    StudentsLoaded(Vec<Student>),

    /// The roster could not be loaded.
    LoadFailed {
        /// Display form of the failure.
        error: String,
    },

    /// A sort control was activated.
    Sort(Criterion),

    /// The search term changed or the search button was pressed.
    Search(String),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the table container must be re-rendered.
///
/// Control events that arrive before the roster is loaded are ignored, since
/// controls are only bound after a successful load. A second
/// `StudentsLoaded` is ignored as well: the roster is loaded exactly once.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the handler signature uniform with
/// the host's other fallible steps.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::StudentsLoaded(students) => {
            if state.loaded {
                tracing::warn!(
                    student_count = students.len(),
                    "roster already loaded, ignoring reload"
                );
                return Ok((false, vec![]));
            }

            tracing::debug!(student_count = students.len(), "installing roster");
            state.load(students.clone());
            Ok((true, vec![Action::BindControls]))
        }
        Event::LoadFailed { error } => {
            Ok((false, vec![Action::ReportLoadFailure { error: error.clone() }]))
        }
        Event::Sort(criterion) => {
            if !state.loaded {
                tracing::debug!(criterion = %criterion, "sort before load, ignoring");
                return Ok((false, vec![]));
            }

            state.apply_sort(criterion.clone());
            Ok((true, vec![]))
        }
        Event::Search(term) => {
            if !state.loaded {
                tracing::debug!("search before load, ignoring");
                return Ok((false, vec![]));
            }

            state.apply_search(term);
            Ok((true, vec![]))
        }
    }
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::StudentsLoaded(_) => "students_loaded",
        Event::LoadFailed { .. } => "load_failed",
        Event::Sort(_) => "sort",
        Event::Search(_) => "search",
    }
}
