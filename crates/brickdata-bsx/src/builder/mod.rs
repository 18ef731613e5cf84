//! Provides functionality to serialize a `Document` into BSX XML.
//!
//! The document is first converted into an `XmlElement` tree (see the
//! `inventory` and `gui_state` submodules), which is then written out
//! with the fixed prolog and doctype.

pub mod gui_state;
pub mod inventory;

use crate::error::BsxError;
use crate::model::{ROOT_TAG, XML_DOCTYPE, XML_ENCODING};
use crate::types::Document;
use crate::xml::XmlElement;
use log::debug;
use quick_xml::Writer;
use std::io::Write;

/// Output settings for the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Indent nested elements by two spaces, one element per line.
    /// This has no effect on the decoded content.
    pub pretty_print: bool,
}

impl EncodeOptions {
    /// Everything on a single line after the prolog.
    pub fn compact() -> Self {
        Self {
            pretty_print: false,
        }
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self { pretty_print: true }
    }
}

/// Serializes a `Document` into a BSX XML string.
///
/// The string starts with the XML declaration and the
/// `<!DOCTYPE BrickStockXML>` line.
///
/// # Errors
/// Returns `BsxError::KindMismatch` if an item holds a value of the wrong
/// kind, or a writer error from `quick-xml`.
pub fn encode_text(document: &Document, options: &EncodeOptions) -> Result<String, BsxError> {
    let bytes = encode_bytes(document, options)?;
    // The writer only ever receives `&str` input, so this cannot fail.
    String::from_utf8(bytes).map_err(|e| BsxError::InvalidUtf8(e.utf8_error()))
}

/// Serializes a `Document` into UTF-8 encoded BSX XML bytes.
pub fn encode_bytes(document: &Document, options: &EncodeOptions) -> Result<Vec<u8>, BsxError> {
    let mut buffer = Vec::new();
    encode_to_writer(document, &mut buffer, options)?;
    Ok(buffer)
}

/// Serializes a `Document` into `writer`.
///
/// The writer is only borrowed for the duration of the call and is not
/// flushed.
pub fn encode_to_writer<W: Write>(
    document: &Document,
    mut writer: W,
    options: &EncodeOptions,
) -> Result<(), BsxError> {
    // 1. Build the tree
    let root = build_root(document)?;

    // 2. Write the prolog manually; quick-xml writes elements only.
    write!(
        writer,
        "<?xml version=\"1.0\" encoding=\"{}\"?>\n{}\n",
        XML_ENCODING, XML_DOCTYPE
    )?;

    // 3. Write the element tree
    let mut xml_writer = if options.pretty_print {
        Writer::new_with_indent(&mut writer, b' ', 2)
    } else {
        Writer::new(&mut writer)
    };
    root.write_to(&mut xml_writer)?;
    writer.write_all(b"\n")?;

    debug!(
        "Encoded BSX document with {} items and {} GUI states",
        document.inventory.len(),
        document.gui_states.len()
    );
    Ok(())
}

/// Converts a `Document` into the `<BrickStockXML>` element tree.
pub fn build_root(document: &Document) -> Result<XmlElement, BsxError> {
    let mut root = XmlElement::new(ROOT_TAG);

    if !document.inventory.is_empty() {
        root.push_child(inventory::build_inventory(&document.inventory)?);
    }
    for state in &document.gui_states {
        root.push_child(gui_state::build_gui_state(state));
    }
    Ok(root)
}
