//! In-memory host page.
//!
//! [`HtmlPage`] holds the nine elements the controller and renderer address
//! and serializes them, together with the theme stylesheet, into a complete
//! HTML document.

use super::document::{
    Document, REQUIRED_IDS, SEARCH_BAR, SEARCH_BUTTON, SORT_AZ, SORT_CLASS, SORT_GENDER,
    SORT_MARKS, SORT_PASSING, SORT_ZA, TABLE_CONTAINER,
};
use super::helpers::escape_html;
use super::theme::Theme;
use crate::domain::error::{Result, RosterError};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Button captions, keyed by control id.
const BUTTON_LABELS: [(&str, &str); 6] = [
    (SORT_AZ, "Sort A → Z"),
    (SORT_ZA, "Sort Z → A"),
    (SORT_MARKS, "Sort by Marks"),
    (SORT_CLASS, "Sort by Class"),
    (SORT_PASSING, "Show Passing"),
    (SORT_GENDER, "Group by Gender"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Element {
    inner_html: String,
    value: String,
}

/// A host page with the roster controls and table container.
///
/// # Example
///
/// ```rust
/// use rosterview::ui::{Document, HtmlPage, Theme};
/// use rosterview::ui::document::SEARCH_BAR;
///
/// let mut page = HtmlPage::new(&Theme::default());
/// page.set_value(SEARCH_BAR, "amy")?;
/// assert!(page.to_html().contains(r#"id="search-bar" value="amy""#));
/// # Ok::<(), rosterview::RosterError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlPage {
    title: String,
    stylesheet: String,
    elements: BTreeMap<String, Element>,
}

impl HtmlPage {
    /// Creates a page with every required element present and empty.
    #[must_use]
    pub fn new(theme: &Theme) -> Self {
        Self {
            title: "Student Roster".to_string(),
            stylesheet: theme.to_css(),
            elements: REQUIRED_IDS
                .iter()
                .map(|id| ((*id).to_string(), Element::default()))
                .collect(),
        }
    }

    /// Removes element `id`, as if the host page never declared it.
    ///
    /// Returns `true` if the element existed.
    pub fn remove_element(&mut self, id: &str) -> bool {
        self.elements.remove(id).is_some()
    }

    /// Serializes the page as a complete HTML document.
    ///
    /// Controls that were removed are omitted from the output.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "<title>{}</title>", escape_html(&self.title));
        let _ = writeln!(html, "<style>\n{}</style>", self.stylesheet);
        html.push_str("</head>\n<body>\n");
        let _ = writeln!(html, "<h1>{}</h1>", escape_html(&self.title));

        html.push_str("<div class=\"controls\">\n");
        for (id, label) in BUTTON_LABELS {
            if self.has_element(id) {
                let _ = writeln!(html, "<button id=\"{id}\">{}</button>", escape_html(label));
            }
        }
        if let Some(search) = self.elements.get(SEARCH_BAR) {
            let _ = writeln!(
                html,
                "<input type=\"text\" id=\"{SEARCH_BAR}\" value=\"{}\" placeholder=\"Search by name or email\">",
                escape_html(&search.value)
            );
        }
        if self.has_element(SEARCH_BUTTON) {
            let _ = writeln!(html, "<button id=\"{SEARCH_BUTTON}\">Search</button>");
        }
        html.push_str("</div>\n");

        if let Some(container) = self.elements.get(TABLE_CONTAINER) {
            let _ = writeln!(
                html,
                "<div id=\"{TABLE_CONTAINER}\">{}</div>",
                container.inner_html
            );
        }

        html.push_str("</body>\n</html>\n");
        html
    }

    fn element(&self, id: &str) -> Result<&Element> {
        self.elements
            .get(id)
            .ok_or_else(|| RosterError::UnknownElement(id.to_string()))
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut Element> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| RosterError::UnknownElement(id.to_string()))
    }
}

impl Document for HtmlPage {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_inner_html(&mut self, id: &str, html: String) -> Result<()> {
        self.element_mut(id)?.inner_html = html;
        Ok(())
    }

    fn inner_html(&self, id: &str) -> Result<&str> {
        Ok(&self.element(id)?.inner_html)
    }

    fn value(&self, id: &str) -> Result<&str> {
        Ok(&self.element(id)?.value)
    }

    fn set_value(&mut self, id: &str, value: &str) -> Result<()> {
        value.clone_into(&mut self.element_mut(id)?.value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page_has_all_required_elements() {
        let page = HtmlPage::new(&Theme::default());
        for id in REQUIRED_IDS {
            assert!(page.has_element(id), "missing {id}");
        }
    }

    #[test]
    fn test_serializes_controls_and_container() {
        let mut page = HtmlPage::new(&Theme::default());
        page.set_inner_html(TABLE_CONTAINER, "<table></table>".to_string())
            .unwrap();

        let html = page.to_html();
        for id in REQUIRED_IDS {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing {id}");
        }
        assert!(html.contains("<div id=\"table-container\"><table></table></div>"));
        assert!(html.contains("td.passing"));
    }

    #[test]
    fn test_unknown_element_errors() {
        let mut page = HtmlPage::new(&Theme::default());
        assert!(page.remove_element(SORT_GENDER));
        assert!(!page.remove_element(SORT_GENDER));

        assert!(matches!(
            page.set_inner_html(SORT_GENDER, String::new()),
            Err(RosterError::UnknownElement(ref id)) if id == SORT_GENDER
        ));
        assert!(page.value("nope").is_err());
        assert!(!page.to_html().contains(SORT_GENDER));
    }

    #[test]
    fn test_search_value_is_escaped() {
        let mut page = HtmlPage::new(&Theme::default());
        page.set_value(SEARCH_BAR, "\"><b>").unwrap();

        assert_eq!(page.value(SEARCH_BAR).unwrap(), "\"><b>");
        assert!(page.to_html().contains("value=\"&quot;&gt;&lt;b&gt;\""));
    }
}
