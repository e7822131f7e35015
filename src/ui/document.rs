//! Element-addressed document model.
//!
//! The controller and renderer never touch markup directly. They look controls
//! up by id and replace the content of the table container through the
//! [`Document`] trait, which keeps them testable without a browser.

use crate::domain::error::Result;

/// Container whose content the renderers replace.
pub const TABLE_CONTAINER: &str = "table-container";
/// Sort button: name ascending.
pub const SORT_AZ: &str = "sort-az";
/// Sort button: name descending.
pub const SORT_ZA: &str = "sort-za";
/// Sort button: marks ascending.
pub const SORT_MARKS: &str = "sort-marks";
/// Sort button: class ascending.
pub const SORT_CLASS: &str = "sort-class";
/// Filter button: passing students only.
pub const SORT_PASSING: &str = "sort-passing";
/// Grouping button: male and female tables.
pub const SORT_GENDER: &str = "sort-gender";
/// Free-text search input.
pub const SEARCH_BAR: &str = "search-bar";
/// Button that re-runs the search with the current input value.
pub const SEARCH_BUTTON: &str = "search-button";

/// Every element id the host page must provide, in page order.
pub const REQUIRED_IDS: [&str; 9] = [
    SORT_AZ,
    SORT_ZA,
    SORT_MARKS,
    SORT_CLASS,
    SORT_PASSING,
    SORT_GENDER,
    SEARCH_BAR,
    SEARCH_BUTTON,
    TABLE_CONTAINER,
];

/// A page whose elements can be looked up and updated by id.
///
/// Every fallible method returns [`RosterError::UnknownElement`] when `id` is
/// not present.
///
/// [`RosterError::UnknownElement`]: crate::RosterError::UnknownElement
pub trait Document {
    /// Returns `true` if an element with `id` exists.
    fn has_element(&self, id: &str) -> bool;

    /// Replaces the entire content of element `id`.
    ///
    /// # Errors
    ///
    /// Fails if the element does not exist.
    fn set_inner_html(&mut self, id: &str, html: String) -> Result<()>;

    /// Current content of element `id`.
    ///
    /// # Errors
    ///
    /// Fails if the element does not exist.
    fn inner_html(&self, id: &str) -> Result<&str>;

    /// Current value of input element `id`.
    ///
    /// # Errors
    ///
    /// Fails if the element does not exist.
    fn value(&self, id: &str) -> Result<&str>;

    /// Sets the value of input element `id`.
    ///
    /// # Errors
    ///
    /// Fails if the element does not exist.
    fn set_value(&mut self, id: &str, value: &str) -> Result<()>;
}
