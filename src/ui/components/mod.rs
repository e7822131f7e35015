//! Composable markup component renderers.
//!
//! # Components
//!
//! - [`table`]: One roster table (header row plus body rows)
//! - [`groups`]: Titled tables for the grouped view
//!
//! # Layout Modes
//!
//! - [`render_flat_mode`]: a single table with avatars
//! - [`render_grouped_mode`]: one heading and table per group, no avatars
//!
//! # Example
//!
//! ```rust
//! use rosterview::ui::components::render_flat_mode;
//! use rosterview::ui::viewmodel::TableViewModel;
//!
//! let markup = render_flat_mode(&TableViewModel { rows: vec![], show_avatar: true });
//! assert!(markup.starts_with("<table>"));
//! ```

mod groups;
mod table;

pub use groups::render_groups;
pub use table::render_table;

use crate::ui::viewmodel::{GroupViewModel, TableViewModel};

/// Renders the flat layout to a fresh string.
#[must_use]
pub fn render_flat_mode(table: &TableViewModel) -> String {
    let mut out = String::new();
    render_table(&mut out, table);
    out
}

/// Renders the grouped layout to a fresh string.
#[must_use]
pub fn render_grouped_mode(groups: &[GroupViewModel]) -> String {
    let mut out = String::new();
    render_groups(&mut out, groups);
    out
}
