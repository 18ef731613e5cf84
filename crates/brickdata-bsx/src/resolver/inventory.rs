// crates/brickdata-bsx/src/resolver/inventory.rs

use crate::coercion::{Coercion, coercion};
use crate::error::BsxError;
use crate::model::{ITEM_TAG, ItemField};
use crate::types::{FieldValue, Item};
use crate::xml::XmlElement;
use log::trace;

/// Resolves every `<Item>` child of `<Inventory>`.
///
/// An `<Item>` without any recognized child still yields an (empty) item,
/// so the item count always matches the file.
pub(super) fn resolve_inventory(inventory: &XmlElement) -> Result<Vec<Item>, BsxError> {
    inventory
        .find_all(ITEM_TAG)
        .map(resolve_item)
        .collect()
}

/// Resolves one `<Item>`, scanning for fields in canonical schema order.
pub(super) fn resolve_item(element: &XmlElement) -> Result<Item, BsxError> {
    let mut item = Item::new();

    for field in ItemField::ALL {
        let Some(child) = element.find(field.tag()) else {
            continue;
        };
        let value = match coercion(*field) {
            Coercion::Presence => FieldValue::Flag(true),
            Coercion::Cast { decode, .. } => decode(*field, child.text())?,
        };
        item.insert(*field, value)?;
    }

    for child in element.children() {
        if ItemField::from_tag(child.name()).is_none() {
            trace!("Skipping unknown item element <{}>", child.name());
        }
    }

    Ok(item)
}
