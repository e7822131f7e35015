//! Rosterview: render a student roster as an HTML table with search and sort.
//!
//! Rosterview loads a JSON array of student records once, paints it into the
//! table container of a host page, and binds the page controls:
//! - Six sort buttons (name A-Z and Z-A, marks, class, passing, gender)
//! - A live search input and a search button
//! - A grouped view that splits the roster into male and female tables

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI Host (main.rs)                                 │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and control bindings              │
//! │  - Action dispatching                               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Roster Layer  │   │ Loader        │
//! │ (ui/)         │   │ (roster/)     │   │ (loader/)     │
//! │ - Page/DOM    │   │ - Search      │   │ - File / URL  │
//! │ - Theming     │   │ - Sort        │   │ - Decoding    │
//! │ - Components  │   │ - Grouping    │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Path expansion (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Student model (domain/student)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - stderr logging                                   │
//! │  - Optional file-based OTLP export                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Student, errors)
//! - [`infrastructure`]: Platform utilities (paths)
//! - [`loader`]: One-shot roster retrieval from a file or URL
//! - [`roster`]: Search, sort, and gender grouping
//! - [`ui`]: HTML rendering with theme support
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! Options come from defaults, then an optional TOML file, then CLI flags:
//!
//! ```toml
//! source = "https://example.com/students.json"
//! output = "~/roster.html"
//! theme = "chalkboard"
//! trace_level = "debug"
//! trace_file = "/tmp/rosterview-otlp.json"
//! ```
//!
//! # Example
//!
//! ```rust
//! use rosterview::app::{Event, Session};
//! use rosterview::roster::Criterion;
//! use rosterview::ui::HtmlPage;
//! use rosterview::{initialize, Config};
//!
//! let state = initialize(&Config::default());
//! let page = HtmlPage::new(&state.theme);
//! let mut session = Session::new(state, page);
//!
//! let students = rosterview::loader::decode_students(
//!     r#"[{"first_name": "Bo", "gender": "Male"}, {"first_name": "Amy", "gender": "Female"}]"#,
//! )?;
//! session.load(Ok(students))?;
//! session.handle(&Event::Sort(Criterion::Gender))?;
//! assert!(session.document().to_html().contains("Female Students"));
//! # Ok::<(), rosterview::RosterError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod loader;
pub mod roster;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Session};
pub use domain::{ClassLabel, Result, RosterError, Student};
pub use ui::Theme;

use loader::{DataSource, DEFAULT_SOURCE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Runtime configuration.
///
/// # Example
///
/// ```rust
/// use rosterview::Config;
///
/// let config = Config::from_toml_str("theme = \"chalkboard\"")?;
/// assert_eq!(config.theme_name.as_deref(), Some("chalkboard"));
/// assert_eq!(config.source, "./students.json");
/// # Ok::<(), rosterview::RosterError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path or `http(s)` URL of the roster document.
    ///
    /// Default: `"./students.json"`
    pub source: String,

    /// File the rendered page is written to. Stdout when unset.
    pub output: Option<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `classroom`, `chalkboard`. Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Enables OTLP JSON span export to this file.
    pub trace_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            output: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            trace_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Config`] on invalid TOML or unknown keys.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| RosterError::Config(format!("failed to parse config: {e}")))
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            RosterError::Config(format!("failed to read config {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Resolves the configured roster location.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Config`] for a malformed URL.
    pub fn data_source(&self) -> Result<DataSource> {
        DataSource::parse(&self.source)
    }

    /// Output file with `~` expanded, if one is configured.
    #[must_use]
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output.as_deref().map(infrastructure::expand_path)
    }

    /// Trace file with `~` expanded, if one is configured.
    #[must_use]
    pub fn trace_path(&self) -> Option<PathBuf> {
        self.trace_file.as_deref().map(infrastructure::expand_path)
    }
}

/// Resolves the theme: `theme_file`, then `theme_name`, then the default.
///
/// Failures fall back to the default theme with a debug log.
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_path(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    )
}

/// Creates the initial, not-yet-loaded application state.
///
/// # Example
///
/// ```rust
/// use rosterview::{initialize, Config};
///
/// let config = Config {
///     theme_name: Some("chalkboard".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.theme.name, "chalkboard");
/// assert!(!state.loaded);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(source = %config.source, "initializing rosterview");
    AppState::new(load_theme(config))
}
