//! Error types for rosterview.
//!
//! This module defines the centralized error type [`RosterError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for roster loading, rendering, and control binding.
///
/// The first four variants form the load failure taxonomy. The host logs them
/// and keeps going with an empty table, so none of them is ever shown to the
/// person looking at the page.
///
/// # Examples
///
/// ```
/// use rosterview::RosterError;
///
/// let err = RosterError::NotAnArray("object".to_string());
/// assert_eq!(err.to_string(), "Payload is not an array: got object");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// The resource could not be retrieved at all.
    ///
    /// Covers connection failures for URLs and unreadable files for local
    /// sources.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The resource answered with a non-success status.
    #[error("Unsuccessful response: status {status} from {source_name}")]
    Status {
        /// Status code of the response (404 for a missing local file).
        status: u16,
        /// Display form of the data source.
        source_name: String,
    },

    /// The payload parsed as JSON but its top level is not an array.
    #[error("Payload is not an array: got {0}")]
    NotAnArray(String),

    /// The payload is not valid JSON.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed outside of fetching.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A control required by a binding is absent from the document.
    #[error("Missing control: #{0}")]
    MissingControl(String),

    /// A document operation referenced an element id that does not exist.
    #[error("Unknown element: #{0}")]
    UnknownElement(String),
}

/// A specialized `Result` type for rosterview operations.
pub type Result<T> = std::result::Result<T, RosterError>;
