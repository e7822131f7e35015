//! Shared markup utilities used across components.
//!
//! # Example
//!
//! ```rust
//! use rosterview::ui::helpers::escape_html;
//!
//! assert_eq!(escape_html("<b>Bo & Amy</b>"), "&lt;b&gt;Bo &amp; Amy&lt;/b&gt;");
//! ```

use std::fmt::Write as _;

/// Escapes text for use in element content or a double-quoted attribute.
///
/// Handles `&`, `<`, `>`, `"` and `'`. Everything else passes through
/// unchanged, including non-ASCII characters.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Appends `<tag>escaped text</tag>` to `out`.
pub fn push_text_element(out: &mut String, tag: &str, text: &str) {
    let _ = write!(out, "<{tag}>{}</{tag}>", escape_html(text));
}

/// Appends `<tag class="...">escaped text</tag>` to `out`.
pub fn push_classed_element(out: &mut String, tag: &str, class: &str, text: &str) {
    let _ = write!(
        out,
        "<{tag} class=\"{}\">{}</{tag}>",
        escape_html(class),
        escape_html(text)
    );
}
