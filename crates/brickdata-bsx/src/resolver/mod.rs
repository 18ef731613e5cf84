// crates/brickdata-bsx/src/resolver/mod.rs

//! Maps a parsed `XmlElement` tree onto the public `types`.
//!
//! Unrecognized elements and attributes are skipped so that files written by
//! newer tools still load. Values that are recognized but invalid abort the
//! whole decode.

use crate::error::BsxError;
use crate::model::{GUI_STATE_TAG, INVENTORY_TAG, ROOT_TAG};
use crate::types::Document;
use crate::xml::XmlElement;
use log::{debug, warn};

// --- Sub-modules ---

mod gui_state;
mod inventory;

/// Resolves a `Document` from the root element of a BSX file.
pub fn resolve_document(root: &XmlElement) -> Result<Document, BsxError> {
    if root.name() != ROOT_TAG {
        warn!(
            "Unexpected root element <{}>, expected <{}>",
            root.name(),
            ROOT_TAG
        );
    }

    let mut document = Document::new();

    // Only the first <Inventory> is read.
    if let Some(inventory) = root.find(INVENTORY_TAG) {
        document.inventory = inventory::resolve_inventory(inventory)?;
    }

    for element in root.find_all(GUI_STATE_TAG) {
        let state = gui_state::resolve_gui_state(element)?;
        if !state.is_empty() {
            document.gui_states.push(state);
        }
    }

    debug!(
        "Decoded BSX document with {} items and {} GUI states",
        document.inventory.len(),
        document.gui_states.len()
    );
    Ok(document)
}
