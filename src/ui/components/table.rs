//! Table component renderer.
//!
//! Renders one roster table: a header row with the seven column headings and a
//! body row per student. The name cell optionally carries the avatar image.

use crate::ui::helpers::{escape_html, push_classed_element, push_text_element};
use crate::ui::viewmodel::{RowViewModel, TableViewModel, COLUMNS};
use std::fmt::Write as _;

/// Appends a complete `<table>` for `table` to `out`.
///
/// An empty table still gets its header row.
///
/// # Example
///
/// ```rust
/// use rosterview::ui::components::render_table;
/// use rosterview::ui::viewmodel::TableViewModel;
///
/// let mut out = String::new();
/// render_table(&mut out, &TableViewModel { rows: vec![], show_avatar: true });
/// assert!(out.contains("<th>Email</th>"));
/// assert!(out.contains("<tbody></tbody>"));
/// ```
pub fn render_table(out: &mut String, table: &TableViewModel) {
    out.push_str("<table>");
    render_table_headers(out);
    render_table_rows(out, &table.rows, table.show_avatar);
    out.push_str("</table>");
}

/// Appends the `<thead>` with the column headings.
fn render_table_headers(out: &mut String) {
    out.push_str("<thead><tr>");
    for column in COLUMNS {
        push_text_element(out, "th", column);
    }
    out.push_str("</tr></thead>");
}

/// Appends the `<tbody>` with one row per item.
fn render_table_rows(out: &mut String, rows: &[RowViewModel], show_avatar: bool) {
    out.push_str("<tbody>");
    for row in rows {
        render_table_row(out, row, show_avatar);
    }
    out.push_str("</tbody>");
}

/// Appends a single `<tr>`.
///
/// Cell order follows [`COLUMNS`]. The passing cell is classed `passing` or
/// `failed` so the stylesheet can color it.
fn render_table_row(out: &mut String, row: &RowViewModel, show_avatar: bool) {
    out.push_str("<tr>");
    push_text_element(out, "td", &row.id);

    if show_avatar {
        let _ = write!(
            out,
            "<td><div class=\"student-name\"><img class=\"avatar\" src=\"{}\" alt=\"Student Image\">{}</div></td>",
            escape_html(&row.avatar_src),
            escape_html(&row.name)
        );
    } else {
        push_text_element(out, "td", &row.name);
    }

    push_text_element(out, "td", &row.gender);
    push_text_element(out, "td", &row.class_label);
    push_text_element(out, "td", &row.marks);
    let status_class = if row.passing { "passing" } else { "failed" };
    push_classed_element(out, "td", status_class, &row.passing_label);
    push_text_element(out, "td", &row.email);
    out.push_str("</tr>");
}
