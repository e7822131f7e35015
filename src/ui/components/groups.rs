//! Grouped view renderer: a heading and a table per gender group.

use super::table::render_table;
use crate::ui::helpers::push_text_element;
use crate::ui::viewmodel::GroupViewModel;

/// Appends each group as `<h2>title</h2><table>...</table>`, in order.
pub fn render_groups(out: &mut String, groups: &[GroupViewModel]) {
    for group in groups {
        push_text_element(out, "h2", &group.title);
        render_table(out, &group.table);
    }
}
