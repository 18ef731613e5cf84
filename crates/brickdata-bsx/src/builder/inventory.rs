// crates/brickdata-bsx/src/builder/inventory.rs

use crate::coercion::{Coercion, coercion};
use crate::error::BsxError;
use crate::model::{INVENTORY_TAG, ITEM_TAG};
use crate::types::{FieldValue, Item};
use crate::xml::XmlElement;

/// Builds the `<Inventory>` element, one `<Item>` per item in order.
pub(super) fn build_inventory(items: &[Item]) -> Result<XmlElement, BsxError> {
    let mut inventory = XmlElement::new(INVENTORY_TAG);
    for item in items {
        inventory.push_child(build_item(item)?);
    }
    Ok(inventory)
}

/// Builds one `<Item>` element.
///
/// Children follow canonical schema order, which `Item` already iterates in.
/// Presence flags become an empty element when set and are left out otherwise.
pub(super) fn build_item(item: &Item) -> Result<XmlElement, BsxError> {
    let mut element = XmlElement::new(ITEM_TAG);

    for (field, value) in item {
        let mismatch = || BsxError::KindMismatch {
            field: field.tag(),
            expected: field.kind(),
        };

        match coercion(*field) {
            Coercion::Presence => match value {
                FieldValue::Flag(true) => element.push_child(XmlElement::new(field.tag())),
                FieldValue::Flag(false) => {}
                _ => return Err(mismatch()),
            },
            Coercion::Cast { encode, .. } => {
                let text = encode(value).ok_or_else(mismatch)?;
                element.push_child(XmlElement::with_text(field.tag(), text));
            }
        }
    }

    Ok(element)
}
