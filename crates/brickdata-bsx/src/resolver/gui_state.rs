// crates/brickdata-bsx/src/resolver/gui_state.rs

use crate::error::BsxError;
use crate::model::{
    APPLICATION_ATTR, COLUMN_ORDER_TAG, COLUMN_WIDTHS_HIDDEN_TAG, COLUMN_WIDTHS_TAG,
    Field, ITEM_VIEW_TAG, LIST_SEPARATOR, SORT_COLUMN_TAG, SORT_DIRECTION_TAG, SortDirection,
    VERSION_ATTR,
};
use crate::types::{ColumnWidths, GuiState, ItemView};
use crate::xml::XmlElement;
use log::trace;

/// Resolves a `<GuiState>` element.
///
/// The caller drops states that come back empty.
pub(super) fn resolve_gui_state(element: &XmlElement) -> Result<GuiState, BsxError> {
    let non_empty = |key| {
        element
            .attribute(key)
            .filter(|v| !v.is_empty())
            .map(String::from)
    };

    let mut state = GuiState {
        application: non_empty(APPLICATION_ATTR),
        version: non_empty(VERSION_ATTR),
        item_view: None,
    };

    for child in element.children() {
        if child.name() == ITEM_VIEW_TAG {
            let view = resolve_item_view(child)?;
            if !view.is_empty() {
                state.item_view = Some(view);
            }
        } else {
            trace!("Skipping unknown GuiState element <{}>", child.name());
        }
    }

    Ok(state)
}

/// Resolves an `<ItemView>` element. A repeated child overrides earlier ones.
pub(super) fn resolve_item_view(element: &XmlElement) -> Result<ItemView, BsxError> {
    let mut view = ItemView::default();

    for child in element.children() {
        let text = child.text();
        match child.name() {
            COLUMN_ORDER_TAG => {
                let order = split_list(COLUMN_ORDER_TAG, text)
                    .map(|index| index.and_then(Field::from_wire_index))
                    .collect::<Result<Vec<_>, _>>()?;
                view.column_order = Some(order);
            }
            COLUMN_WIDTHS_TAG => {
                view.column_widths = Some(parse_widths(COLUMN_WIDTHS_TAG, text)?);
            }
            COLUMN_WIDTHS_HIDDEN_TAG => {
                view.column_widths_hidden = Some(parse_widths(COLUMN_WIDTHS_HIDDEN_TAG, text)?);
            }
            SORT_COLUMN_TAG => {
                let index = parse_number(SORT_COLUMN_TAG, text)?;
                view.sort_column = Some(Field::from_wire_index(index)?);
            }
            SORT_DIRECTION_TAG => {
                view.sort_direction = Some(SortDirection::from_code(text)?);
            }
            other => trace!("Skipping unknown ItemView element <{}>", other),
        }
    }

    Ok(view)
}

/// Starts from all-zero widths and assigns the listed values positionally.
fn parse_widths(tag: &'static str, text: &str) -> Result<ColumnWidths, BsxError> {
    let mut widths = ColumnWidths::zeroed();
    for (index, width) in split_list(tag, text).enumerate() {
        let field = Field::from_index(index)?;
        widths.set(field, width?);
    }
    Ok(widths)
}

/// Splits a comma-joined list of integers. Empty text is an empty list.
fn split_list<'a, T: core::str::FromStr + 'a>(
    tag: &'static str,
    text: &'a str,
) -> impl Iterator<Item = Result<T, BsxError>> + 'a {
    let text = text.trim();
    let parts = if text.is_empty() {
        None
    } else {
        Some(text.split(LIST_SEPARATOR))
    };
    parts
        .into_iter()
        .flatten()
        .map(move |part| parse_number(tag, part))
}

fn parse_number<T: core::str::FromStr>(tag: &'static str, text: &str) -> Result<T, BsxError> {
    text.trim().parse().map_err(|_| BsxError::InvalidNumber {
        tag,
        value: text.into(),
    })
}
