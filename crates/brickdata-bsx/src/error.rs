// crates/brickdata-bsx/src/error.rs

use crate::types::ValueKind;
use core::fmt;
use core::str::Utf8Error;
use quick_xml::Error as XmlError;
use quick_xml::events::attributes::AttrError;
use std::io;

/// Broad classification of a [`BsxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is not well-formed XML.
    Parse,
    /// A value lies outside its closed set (unknown code, field index out of range).
    Schema,
    /// Text that should hold a number could not be parsed as one.
    Format,
    /// Reading from or writing to a stream failed.
    Io,
}

/// Errors that can occur while encoding or decoding a BSX document.
#[derive(Debug)]
pub enum BsxError {
    /// An error from the underlying `quick-xml` reader or writer.
    XmlParsing(XmlError),

    /// The input bytes are not valid UTF-8.
    InvalidUtf8(Utf8Error),

    /// The XML is structurally broken (unclosed element, no root, ...).
    MalformedDocument { reason: String },

    /// Text did not match any code of an enumerated type.
    UnknownCode {
        code_type: &'static str,
        value: String,
    },

    /// A column index lies outside the field catalogue.
    FieldIndexOutOfRange { index: i64 },

    /// A column name is not part of the field catalogue.
    UnknownFieldName { name: String },

    /// A value of the wrong kind was supplied for an item field.
    KindMismatch {
        field: &'static str,
        expected: ValueKind,
    },

    /// An integer or float element held non-numeric text.
    InvalidNumber { tag: &'static str, value: String },

    /// An I/O error from the caller's reader or writer.
    Io(io::Error),
}

impl BsxError {
    /// Returns the broad category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BsxError::XmlParsing(_)
            | BsxError::InvalidUtf8(_)
            | BsxError::MalformedDocument { .. } => ErrorKind::Parse,
            BsxError::UnknownCode { .. }
            | BsxError::FieldIndexOutOfRange { .. }
            | BsxError::UnknownFieldName { .. }
            | BsxError::KindMismatch { .. } => ErrorKind::Schema,
            BsxError::InvalidNumber { .. } => ErrorKind::Format,
            BsxError::Io(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        BsxError::MalformedDocument {
            reason: reason.into(),
        }
    }
}

impl From<XmlError> for BsxError {
    fn from(e: XmlError) -> Self {
        BsxError::XmlParsing(e)
    }
}

impl From<AttrError> for BsxError {
    fn from(e: AttrError) -> Self {
        BsxError::XmlParsing(XmlError::InvalidAttr(e))
    }
}

impl From<Utf8Error> for BsxError {
    fn from(e: Utf8Error) -> Self {
        BsxError::InvalidUtf8(e)
    }
}

impl From<io::Error> for BsxError {
    fn from(e: io::Error) -> Self {
        BsxError::Io(e)
    }
}

impl fmt::Display for BsxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BsxError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            BsxError::InvalidUtf8(e) => write!(f, "Input is not valid UTF-8: {}", e),
            BsxError::MalformedDocument { reason } => {
                write!(f, "Malformed XML document: {}", reason)
            }
            BsxError::UnknownCode { code_type, value } => {
                write!(f, "Unknown {} code: {:?}", code_type, value)
            }
            BsxError::FieldIndexOutOfRange { index } => {
                write!(f, "Field index {} is outside the column catalogue", index)
            }
            BsxError::UnknownFieldName { name } => write!(f, "Unknown field name: {}", name),
            BsxError::KindMismatch { field, expected } => {
                write!(f, "Field {} expects a value of kind {:?}", field, expected)
            }
            BsxError::InvalidNumber { tag, value } => {
                write!(f, "Invalid number in <{}>: {:?}", tag, value)
            }
            BsxError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for BsxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BsxError::XmlParsing(e) => Some(e),
            BsxError::InvalidUtf8(e) => Some(e),
            BsxError::Io(e) => Some(e),
            _ => None,
        }
    }
}
