//! Data source locations.

use crate::domain::error::{Result, RosterError};
use crate::infrastructure::expand_tilde;
use std::fmt;
use std::path::PathBuf;

/// Location used when nothing else is configured.
pub const DEFAULT_SOURCE: &str = "./students.json";

/// Where the roster document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A local JSON file, relative paths resolved against the working directory.
    File(PathBuf),
    /// An `http` or `https` URL.
    Url(reqwest::Url),
}

impl DataSource {
    /// Parses a configured location.
    ///
    /// Anything starting with `http://` or `https://` is a URL, everything else
    /// is a file path (with `~/` expanded).
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Config`] if the location looks like a URL but
    /// does not parse as one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rosterview::loader::DataSource;
    /// use std::path::PathBuf;
    ///
    /// let source = DataSource::parse("./students.json").unwrap();
    /// assert_eq!(source, DataSource::File(PathBuf::from("./students.json")));
    ///
    /// assert!(matches!(
    ///     DataSource::parse("https://example.com/students.json").unwrap(),
    ///     DataSource::Url(_)
    /// ));
    /// ```
    pub fn parse(location: &str) -> Result<Self> {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            reqwest::Url::parse(location)
                .map(Self::Url)
                .map_err(|e| RosterError::Config(format!("invalid source URL {location}: {e}")))
        } else {
            Ok(Self::File(PathBuf::from(expand_tilde(location))))
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_SOURCE))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_relative_students_json() {
        assert_eq!(DataSource::default().to_string(), "./students.json");
    }

    #[test]
    fn test_rejects_malformed_url() {
        let err = DataSource::parse("http://").unwrap_err();
        assert!(matches!(err, RosterError::Config(_)));
    }

    #[test]
    fn test_plain_names_are_files() {
        assert_eq!(
            DataSource::parse(" data/roster.json ").unwrap(),
            DataSource::File(PathBuf::from("data/roster.json"))
        );
    }
}
