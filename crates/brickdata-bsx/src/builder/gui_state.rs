// crates/brickdata-bsx/src/builder/gui_state.rs

use crate::model::{
    APPLICATION_ATTR, COLUMN_ORDER_TAG, COLUMN_WIDTHS_HIDDEN_TAG, COLUMN_WIDTHS_TAG,
    GUI_STATE_TAG, ITEM_VIEW_TAG, LIST_SEPARATOR, SORT_COLUMN_TAG, SORT_DIRECTION_TAG,
    VERSION_ATTR,
};
use crate::model::Field;
use crate::types::{ColumnWidths, GuiState, ItemView};
use crate::xml::XmlElement;

/// Builds a `<GuiState>` element.
///
/// Empty attribute values are not written.
pub(super) fn build_gui_state(state: &GuiState) -> XmlElement {
    let mut element = XmlElement::new(GUI_STATE_TAG);

    for (key, value) in [
        (APPLICATION_ATTR, &state.application),
        (VERSION_ATTR, &state.version),
    ] {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            element.set_attribute(key, value);
        }
    }

    if let Some(view) = &state.item_view {
        element.push_child(build_item_view(view));
    }
    element
}

/// Builds the `<ItemView>` element.
///
/// Column widths are always written for every column. A column missing from
/// the hidden widths falls back to its regular width.
pub(super) fn build_item_view(view: &ItemView) -> XmlElement {
    let mut element = XmlElement::new(ITEM_VIEW_TAG);

    if let Some(order) = &view.column_order {
        let indices = order.iter().map(|f| f.index());
        element.push_child(XmlElement::with_text(COLUMN_ORDER_TAG, join(indices)));
    }
    if let Some(widths) = &view.column_widths {
        element.push_child(XmlElement::with_text(
            COLUMN_WIDTHS_TAG,
            format_widths(widths, None),
        ));
    }
    if let Some(hidden) = &view.column_widths_hidden {
        element.push_child(XmlElement::with_text(
            COLUMN_WIDTHS_HIDDEN_TAG,
            format_widths(hidden, view.column_widths.as_ref()),
        ));
    }
    if let Some(column) = view.sort_column {
        element.push_child(XmlElement::with_text(
            SORT_COLUMN_TAG,
            column.index().to_string(),
        ));
    }
    if let Some(direction) = view.sort_direction {
        element.push_child(XmlElement::with_text(SORT_DIRECTION_TAG, direction.code()));
    }
    element
}

fn format_widths(widths: &ColumnWidths, fallback: Option<&ColumnWidths>) -> String {
    let expanded: [i32; Field::COUNT] = widths.expanded(fallback);
    join(expanded)
}

fn join<T: ToString>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(&LIST_SEPARATOR.to_string())
}
