// crates/brickdata-bsx/src/parser.rs

use crate::error::BsxError;
use crate::resolver;
use crate::types::Document;
use crate::xml::XmlElement;
use std::io::Read;

const UTF8_BOM: &str = "\u{feff}";

/// Parses a BSX XML string slice into a `Document`.
///
/// A leading byte-order mark, the XML declaration and the doctype are all
/// optional.
///
/// # Arguments
/// * `xml_content` - A string slice containing the full BSX file.
///
/// # Errors
/// Returns a parse error if the XML is not well-formed, a schema error for
/// unknown codes or out-of-range column indices, and a format error for
/// non-numeric text in numeric fields.
pub fn decode_text(xml_content: &str) -> Result<Document, BsxError> {
    let xml_content = xml_content.strip_prefix(UTF8_BOM).unwrap_or(xml_content);

    // 1. Build the element tree.
    let root = XmlElement::parse_str(xml_content)?;

    // 2. Map it onto the public types.
    resolver::resolve_document(&root)
}

/// Parses UTF-8 encoded BSX bytes into a `Document`.
pub fn decode_bytes(xml_content: &[u8]) -> Result<Document, BsxError> {
    decode_text(core::str::from_utf8(xml_content)?)
}

/// Reads `reader` to the end and parses the content into a `Document`.
///
/// The reader is only borrowed for the duration of the call.
pub fn decode_stream<R: Read>(mut reader: R) -> Result<Document, BsxError> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    decode_bytes(&buffer)
}
