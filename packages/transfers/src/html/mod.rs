//! Markup utilities.

mod utils;

pub use utils::{
    child_elements, class_tokens, clean_text, find_descendant, first_child_element, icon_text,
    link_text, row_cells, select_all, table_rows, visible_text,
};
pub(crate) use utils::static_selector;
