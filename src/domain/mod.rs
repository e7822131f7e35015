//! Domain layer for rosterview.
//!
//! This module contains the core domain types, independent of how the roster is
//! fetched or displayed.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`student`]: Student record model and its lenient field decoding
//!
//! # Examples
//!
//! ```
//! use rosterview::domain::{Result, Student};
//!
//! fn parse_one(raw: &str) -> Result<Student> {
//!     Ok(serde_json::from_str(raw)?)
//! }
//!
//! let student = parse_one(r#"{"first_name": "Amy", "last_name": "Lee"}"#).unwrap();
//! assert_eq!(student.full_name(), "Amy Lee");
//! ```

pub mod error;
pub mod student;

pub use error::{Result, RosterError};
pub use student::{ClassLabel, Student};
