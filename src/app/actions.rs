//! Actions representing side effects to be executed by the host.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! host ([`Session`](crate::app::Session)) executes them in order; rendering is
//! signalled separately by the handler's boolean.

/// Commands representing side effects to be executed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Binds the sort and search controls of the page.
    ///
    /// Emitted once, after the roster loads successfully.
    BindControls,

    /// Reports a roster load failure.
    ///
    /// The host logs it at error level and keeps the container empty.
    ReportLoadFailure {
        /// Display form of the failure.
        error: String,
    },
}
