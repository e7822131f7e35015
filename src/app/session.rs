//! Host loop tying state, handler, controls, and document together.
//!
//! A [`Session`] owns the application state and the page. It feeds events to
//! [`handle_event`], executes the returned actions, and re-renders the table
//! container whenever the handler asks for it.
//!
//! # Example
//!
//! ```rust
//! use rosterview::app::{AppState, Event, Session};
//! use rosterview::ui::{HtmlPage, Theme};
//! use rosterview::Student;
//!
//! let state = AppState::new(Theme::default());
//! let page = HtmlPage::new(&state.theme);
//! let mut session = Session::new(state, page);
//!
//! let amy = Student { first_name: "Amy".into(), ..Student::default() };
//! session.handle(&Event::StudentsLoaded(vec![amy]))?;
//! session.trigger(&"input:search-bar=zed".parse()?)?;
//! assert!(!session.document().to_html().contains("Amy"));
//! # Ok::<(), rosterview::RosterError>(())
//! ```

use super::actions::Action;
use super::controls::{Controller, UiEvent};
use super::handler::{handle_event, Event};
use super::state::AppState;
use crate::domain::error::Result;
use crate::domain::Student;
use crate::ui::document::Document;
use crate::ui::renderer::render;

/// Application state plus the document it renders into.
#[derive(Debug)]
pub struct Session<D> {
    state: AppState,
    document: D,
    controller: Option<Controller>,
}

impl<D: Document> Session<D> {
    /// Creates a session with nothing loaded and no controls bound.
    pub const fn new(state: AppState, document: D) -> Self {
        Self {
            state,
            document,
            controller: None,
        }
    }

    /// Applies the outcome of the initial roster load.
    ///
    /// A failure is reported through [`Action::ReportLoadFailure`]; it never
    /// becomes an error here.
    ///
    /// # Errors
    ///
    /// Propagates document errors from rendering the loaded roster.
    pub fn load(&mut self, outcome: Result<Vec<Student>>) -> Result<()> {
        let event = match outcome {
            Ok(students) => Event::StudentsLoaded(students),
            Err(e) => Event::LoadFailed { error: e.to_string() },
        };
        self.handle(&event)
    }

    /// Processes one event: update state, execute actions, render if needed.
    ///
    /// # Errors
    ///
    /// Propagates handler errors and document errors from rendering.
    pub fn handle(&mut self, event: &Event) -> Result<()> {
        let (should_render, actions) = handle_event(&mut self.state, event)?;

        if should_render {
            render(&self.state, &mut self.document)?;
        }

        for action in actions {
            self.execute(action);
        }
        Ok(())
    }

    /// Dispatches a control event to its bound handler.
    ///
    /// Returns `true` if a handler ran. Events are dropped while no controls
    /// are bound, which is the case until the roster loads.
    ///
    /// # Errors
    ///
    /// Propagates document errors from reading controls or rendering.
    pub fn trigger(&mut self, ui_event: &UiEvent) -> Result<bool> {
        let Some(controller) = &self.controller else {
            tracing::debug!(event = %ui_event, "controls not bound, dropping event");
            return Ok(false);
        };

        match controller.resolve(&mut self.document, ui_event)? {
            Some(event) => {
                self.handle(&event)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn execute(&mut self, action: Action) {
        match action {
            Action::BindControls => {
                if self.controller.is_some() {
                    tracing::warn!("controls already bound");
                    return;
                }
                self.controller = Some(Controller::bind(&self.document));
            }
            Action::ReportLoadFailure { error } => {
                tracing::error!(error = %error, "error fetching students");
            }
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn document(&self) -> &D {
        &self.document
    }

    /// The bound controller, once the roster has loaded.
    #[must_use]
    pub const fn controller(&self) -> Option<&Controller> {
        self.controller.as_ref()
    }

    /// Consumes the session and returns the document.
    #[must_use]
    pub fn into_document(self) -> D {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RosterError;
    use crate::roster::test_support::roster;
    use crate::ui::document::{SORT_GENDER, TABLE_CONTAINER};
    use crate::ui::{HtmlPage, Theme};

    fn session() -> Session<HtmlPage> {
        let state = AppState::new(Theme::default());
        let page = HtmlPage::new(&state.theme);
        Session::new(state, page)
    }

    fn loaded() -> Session<HtmlPage> {
        let mut session = session();
        session.load(Ok(roster())).unwrap();
        session
    }

    fn container(session: &Session<HtmlPage>) -> String {
        session.document().inner_html(TABLE_CONTAINER).unwrap().to_string()
    }

    fn click(session: &mut Session<HtmlPage>, control: &str) -> bool {
        session.trigger(&format!("click:{control}").parse().unwrap()).unwrap()
    }

    #[test]
    fn test_load_paints_flat_table_and_binds_controls() {
        let session = loaded();
        let html = container(&session);

        assert_eq!(html.matches("<tr>").count(), 5);
        assert_eq!(html.matches("<img").count(), 4);
        assert_eq!(session.controller().map(|c| c.bound().len()), Some(8));
    }

    #[test]
    fn test_load_failure_leaves_container_empty() {
        let mut session = session();
        session
            .load(Err(RosterError::NotAnArray("object".into())))
            .unwrap();

        assert_eq!(container(&session), "");
        assert!(session.controller().is_none());
        assert!(!click(&mut session, "sort-marks"));
        assert_eq!(container(&session), "");
    }

    #[test]
    fn test_marks_button_reorders_rows() {
        let mut session = loaded();
        assert!(click(&mut session, "sort-marks"));

        let html = container(&session);
        let cy = html.find("Cy Diaz").unwrap();
        let amy = html.find("Amy Lee").unwrap();
        let bo = html.find("Bo Chan").unwrap();
        assert!(cy < amy && amy < bo);
    }

    #[test]
    fn test_gender_button_renders_groups_without_avatars() {
        let mut session = loaded();
        assert!(click(&mut session, "sort-gender"));

        let html = container(&session);
        assert!(html.starts_with("<h2>Male Students</h2>"));
        assert!(html.contains("<h2>Female Students</h2>"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("Cy Diaz"));
    }

    #[test]
    fn test_live_search_and_search_button() {
        let mut session = loaded();
        assert!(session.trigger(&"input:search-bar=BO".parse().unwrap()).unwrap());
        let html = container(&session);
        assert!(html.contains("Bo Chan"));
        assert!(!html.contains("Amy Lee"));

        click(&mut session, "sort-az");
        assert!(container(&session).contains("Amy Lee"));

        assert!(click(&mut session, "search-button"));
        assert!(!container(&session).contains("Amy Lee"));
        assert_eq!(session.state().search_term, "BO");
    }

    #[test]
    fn test_missing_control_does_not_block_others() {
        let state = AppState::new(Theme::default());
        let mut page = HtmlPage::new(&state.theme);
        page.remove_element(SORT_GENDER);

        let mut session = Session::new(state, page);
        session.load(Ok(roster())).unwrap();

        assert!(!click(&mut session, "sort-gender"));
        assert!(click(&mut session, "sort-passing"));
        assert!(!container(&session).contains("Bo Chan"));
    }
}
