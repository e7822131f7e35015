//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the host (`main.rs`) and the roster/ui layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Load result / Control event → Event → handle_event → State Mutation → Actions
//!                                                            ↓
//!                                                    render → #table-container
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`state`]: Central application state container and view model computation
//! - [`controls`]: Control bindings from element ids to events
//! - [`session`]: Host loop that executes actions and renders
//!
//! # Example
//!
//! ```rust
//! use rosterview::app::{handle_event, AppState, Event};
//! use rosterview::roster::Criterion;
//! use rosterview::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! handle_event(&mut state, &Event::StudentsLoaded(vec![]))?;
//! let (render, _) = handle_event(&mut state, &Event::Sort(Criterion::Marks))?;
//! assert!(render);
//! # Ok::<(), rosterview::RosterError>(())
//! ```

pub mod actions;
pub mod controls;
pub mod handler;
pub mod session;
pub mod state;

pub use actions::Action;
pub use controls::{ActionId, Controller, Trigger, UiEvent};
pub use handler::{handle_event, Event};
pub use session::Session;
pub use state::{AppState, RosterView};
