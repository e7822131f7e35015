//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `RosterViewModel`
//! 2. **Component Rendering**: Delegate to the flat or grouped layout
//!
//! The resulting markup replaces the whole content of the table container.
//!
//! # Example
//!
//! ```rust
//! use rosterview::app::AppState;
//! use rosterview::ui::{render, HtmlPage, Document, Theme};
//! use rosterview::ui::document::TABLE_CONTAINER;
//!
//! let state = AppState::new(Theme::default());
//! let mut page = HtmlPage::new(&state.theme);
//! render(&state, &mut page)?;
//! assert!(page.inner_html(TABLE_CONTAINER)?.contains("<thead>"));
//! # Ok::<(), rosterview::RosterError>(())
//! ```

use crate::app::AppState;
use crate::domain::error::Result;
use crate::ui::components;
use crate::ui::document::{Document, TABLE_CONTAINER};
use crate::ui::viewmodel::RosterViewModel;

/// Renders the current view into the table container of `document`.
///
/// # Errors
///
/// Returns [`RosterError::UnknownElement`](crate::RosterError::UnknownElement)
/// if the document has no table container.
pub fn render<D: Document + ?Sized>(state: &AppState, document: &mut D) -> Result<()> {
    let viewmodel = state.compute_viewmodel();
    let _span = tracing::debug_span!("render", rows = viewmodel.row_count()).entered();

    document.set_inner_html(TABLE_CONTAINER, render_viewmodel(&viewmodel))
}

/// Renders a view model to markup.
#[must_use]
pub fn render_viewmodel(vm: &RosterViewModel) -> String {
    match vm {
        RosterViewModel::Flat(table) => components::render_flat_mode(table),
        RosterViewModel::Grouped(groups) => components::render_grouped_mode(groups),
    }
}
