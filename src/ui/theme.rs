//! Theme management and stylesheet generation.
//!
//! This module defines the color scheme system for the rendered page, supporting
//! both built-in themes and custom themes loaded from TOML files. A theme turns
//! into the page's `<style>` block via [`Theme::to_css`].
//!
//! # Built-in Themes
//!
//! - `classroom`: Light theme with blue headers (default)
//! - `chalkboard`: Dark green theme with chalk-white text
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! page_bg = "#ffffff"
//! text = "#1f2933"
//! header_fg = "#ffffff"
//! header_bg = "#2f6fb2"
//! border = "#cbd2d9"
//! row_alt_bg = "#f5f7fa"   # optional
//! button_fg = "#ffffff"
//! button_bg = "#2f6fb2"
//! heading_fg = "#2f6fb2"
//! passing_fg = "#2e7d32"
//! failed_fg = "#c62828"
//! ```
//!
//! # Example
//!
//! ```rust
//! use rosterview::ui::theme::Theme;
//!
//! let theme = Theme::from_name("chalkboard").unwrap();
//! assert!(theme.to_css().contains("td.failed"));
//! ```

use crate::domain::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Name of the theme used when nothing else is configured.
pub const DEFAULT_THEME: &str = "classroom";

/// Color scheme configuration for page rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all page elements.
    pub colors: ThemeColors,
}

/// Color definitions for all page elements.
///
/// All colors are hex strings (e.g. `"#2f6fb2"`). Malformed values render as
/// white rather than producing invalid CSS.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Page background.
    pub page_bg: String,
    /// Body text.
    pub text: String,

    /// Table header text.
    pub header_fg: String,
    /// Table header background.
    pub header_bg: String,

    /// Cell borders.
    pub border: String,
    /// Optional zebra-stripe background for even rows.
    #[serde(default)]
    pub row_alt_bg: Option<String>,

    /// Sort and search button text.
    pub button_fg: String,
    /// Sort and search button background.
    pub button_bg: String,

    /// Group headings in the grouped view.
    pub heading_fg: String,

    /// "Passing" label color.
    pub passing_fg: String,
    /// "Failed" label color.
    pub failed_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "classroom" => include_str!("../../themes/classroom.toml"),
            "chalkboard" => include_str!("../../themes/chalkboard.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Theme`] if the file cannot be read or its TOML
    /// does not describe a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| RosterError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| RosterError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips a `#` prefix and returns white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Formats a hex color as a CSS `rgb()` value.
    ///
    /// ```rust
    /// use rosterview::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::css_color("#2f6fb2"), "rgb(47, 111, 178)");
    /// assert_eq!(Theme::css_color("blue"), "rgb(255, 255, 255)");
    /// ```
    #[must_use]
    pub fn css_color(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("rgb({r}, {g}, {b})")
    }

    /// Renders the page stylesheet.
    #[must_use]
    pub fn to_css(&self) -> String {
        let c = &self.colors;
        let mut css = String::new();

        let _ = writeln!(
            css,
            "body {{ font-family: sans-serif; background: {}; color: {}; }}",
            Self::css_color(&c.page_bg),
            Self::css_color(&c.text)
        );
        let _ = writeln!(
            css,
            "button {{ background: {}; color: {}; border: none; padding: 6px 12px; margin: 2px; }}",
            Self::css_color(&c.button_bg),
            Self::css_color(&c.button_fg)
        );
        let _ = writeln!(css, "table {{ border-collapse: collapse; width: 100%; margin-bottom: 16px; }}");
        let _ = writeln!(
            css,
            "th, td {{ border: 1px solid {}; padding: 6px; text-align: left; }}",
            Self::css_color(&c.border)
        );
        let _ = writeln!(
            css,
            "th {{ background: {}; color: {}; }}",
            Self::css_color(&c.header_bg),
            Self::css_color(&c.header_fg)
        );
        if let Some(alt) = &c.row_alt_bg {
            let _ = writeln!(css, "tbody tr:nth-child(even) {{ background: {}; }}", Self::css_color(alt));
        }
        let _ = writeln!(css, "h2 {{ color: {}; }}", Self::css_color(&c.heading_fg));
        let _ = writeln!(css, ".student-name {{ display: flex; align-items: center; }}");
        let _ = writeln!(
            css,
            ".avatar {{ width: 30px; height: 30px; border-radius: 50%; margin-right: 10px; }}"
        );
        let _ = writeln!(css, "td.passing {{ color: {}; }}", Self::css_color(&c.passing_fg));
        let _ = writeln!(css, "td.failed {{ color: {}; }}", Self::css_color(&c.failed_fg));

        css
    }

    /// Palette used if the embedded default ever fails to parse.
    fn fallback() -> Self {
        let color = |hex: &str| hex.to_string();
        Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors {
                page_bg: color("#ffffff"),
                text: color("#1f2933"),
                header_fg: color("#ffffff"),
                header_bg: color("#2f6fb2"),
                border: color("#cbd2d9"),
                row_alt_bg: None,
                button_fg: color("#ffffff"),
                button_bg: color("#2f6fb2"),
                heading_fg: color("#2f6fb2"),
                passing_fg: color("#2e7d32"),
                failed_fg: color("#c62828"),
            },
        }
    }
}

impl Default for Theme {
    /// Returns the `classroom` theme.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(|| {
            tracing::warn!("built-in default theme failed to parse, using fallback palette");
            Self::fallback()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_themes_parse() {
        for name in ["classroom", "chalkboard"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("neon").is_none());
    }

    #[test]
    fn test_default_is_classroom() {
        assert_eq!(Theme::default(), Theme::from_name(DEFAULT_THEME).unwrap());
    }

    #[test]
    fn test_from_file_round_trip() {
        let theme = Theme::from_name("chalkboard").unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&theme).unwrap().as_bytes()).unwrap();

        assert_eq!(Theme::from_file(file.path()).unwrap(), theme);
    }

    #[test]
    fn test_from_file_rejects_incomplete_theme() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"half\"\n[colors]\ntext = \"#000000\"\n").unwrap();

        assert!(matches!(Theme::from_file(file.path()), Err(RosterError::Theme(_))));
    }

    #[test]
    fn test_css_has_status_colors() {
        let css = Theme::fallback().to_css();
        assert!(css.contains("td.passing { color: rgb(46, 125, 50); }"));
        assert!(css.contains("td.failed { color: rgb(198, 40, 40); }"));
        assert!(!css.contains("nth-child"));
    }
}
