//! Page rendering layer with component-based architecture.
//!
//! This module turns application state into HTML. Renderers write into a
//! [`Document`], addressed by element id; [`HtmlPage`] is the in-memory
//! document that also serializes the full page.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → RosterViewModel → render → #table-container
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable roster state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Table and grouped-table renderers
//! - [`helpers`]: HTML escaping and element helpers
//! - [`theme`]: Color schemes and stylesheet generation
//! - [`document`]: Element-addressed document trait and the required ids
//! - [`page`]: In-memory host page

pub mod components;
pub mod document;
pub mod helpers;
pub mod page;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use document::Document;
pub use page::HtmlPage;
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{GroupViewModel, RosterViewModel, RowViewModel, TableViewModel};
