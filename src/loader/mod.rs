//! Roster loading from a static JSON resource.
//!
//! The loader is the only asynchronous part of the crate. It is awaited once
//! at startup; everything after that works on the in-memory roster.
//!
//! # Modules
//!
//! - `source`: Where the document lives (file path or URL)
//! - `fetch`: Retrieval, status checking, and payload decoding
//!
//! # Example
//!
//! ```no_run
//! use rosterview::loader::{DataSource, Loader};
//!
//! # async fn run() -> rosterview::Result<()> {
//! let loader = Loader::new()?;
//! let students = loader.fetch_students(&DataSource::default()).await?;
//! println!("{} students", students.len());
//! # Ok(())
//! # }
//! ```

mod fetch;
mod source;

pub use fetch::{decode_students, Loader};
pub use source::{DataSource, DEFAULT_SOURCE};
