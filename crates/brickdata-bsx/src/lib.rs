// src/lib.rs

#![doc = "Encodes and decodes BrickStock XML (BSX) files."]
#![doc = ""]
#![doc = "A BSX file carries a parts inventory (`<Inventory>` of `<Item>` lots)"]
#![doc = "and the persisted layout of item list views (`<GuiState>`)."]
#![doc = ""]
#![doc = "It provides:"]
#![doc = "- `decode_text` / `decode_bytes` / `decode_stream`: Parsing a BSX file into a `Document`."]
#![doc = "- `encode_text` / `encode_bytes` / `encode_to_writer`: Serializing a `Document` back into BSX."]

// --- Crate Modules ---

mod builder;
mod coercion;
mod error;
pub mod model;
mod parser;
mod resolver;
mod types;
pub mod xml;

// --- Public API Re-exports ---

pub use builder::{EncodeOptions, build_root, encode_bytes, encode_text, encode_to_writer};
pub use error::{BsxError, ErrorKind};
pub use model::{Condition, Field, ItemField, SortDirection, Status, SubCondition};
pub use parser::{decode_bytes, decode_stream, decode_text};
pub use resolver::resolve_document;
pub use types::{ColumnWidths, Document, FieldValue, GuiState, Item, ItemView, ValueKind};
