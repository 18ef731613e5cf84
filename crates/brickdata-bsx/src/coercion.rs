// crates/brickdata-bsx/src/coercion.rs

//! The type coercion table: how each item field's element text is turned
//! into a typed value and back.
//!
//! The table is a `static` array indexed by `ItemField::index`, so lookups
//! never allocate and the table is never mutated.

use crate::error::BsxError;
use crate::model::{Condition, ItemField, Status, SubCondition};
use crate::types::{FieldValue, ValueKind};

/// Decodes the text of a field element.
pub(crate) type DecodeFn = fn(ItemField, &str) -> Result<FieldValue, BsxError>;

/// Encodes a value; `None` if the value is not of the expected kind.
pub(crate) type EncodeFn = fn(&FieldValue) -> Option<String>;

/// How a single item field maps between element text and value.
#[derive(Clone, Copy)]
pub(crate) enum Coercion {
    /// Truth is the presence of the element; its text is never read or written.
    Presence,
    /// The element text is converted with the given pair of functions.
    Cast { decode: DecodeFn, encode: EncodeFn },
}

impl Coercion {
    const fn for_kind(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Flag => Coercion::Presence,
            ValueKind::Integer => Coercion::Cast {
                decode: decode_integer,
                encode: encode_integer,
            },
            ValueKind::Float => Coercion::Cast {
                decode: decode_float,
                encode: encode_float,
            },
            ValueKind::Status => Coercion::Cast {
                decode: decode_status,
                encode: encode_status,
            },
            ValueKind::Condition => Coercion::Cast {
                decode: decode_condition,
                encode: encode_condition,
            },
            ValueKind::SubCondition => Coercion::Cast {
                decode: decode_sub_condition,
                encode: encode_sub_condition,
            },
            ValueKind::Text => Coercion::Cast {
                decode: decode_text,
                encode: encode_text,
            },
        }
    }
}

static COERCIONS: [Coercion; ItemField::COUNT] = {
    let mut table = [Coercion::Presence; ItemField::COUNT];
    let mut i = 0;
    while i < ItemField::COUNT {
        table[i] = Coercion::for_kind(ItemField::ALL[i].kind());
        i += 1;
    }
    table
};

/// Returns the coercion entry for `field`.
pub(crate) fn coercion(field: ItemField) -> Coercion {
    COERCIONS[field.index()]
}

// --- Decoders ---

fn decode_integer(field: ItemField, text: &str) -> Result<FieldValue, BsxError> {
    text.trim()
        .parse()
        .map(FieldValue::Integer)
        .map_err(|_| invalid_number(field, text))
}

fn decode_float(field: ItemField, text: &str) -> Result<FieldValue, BsxError> {
    text.trim()
        .parse()
        .map(FieldValue::Float)
        .map_err(|_| invalid_number(field, text))
}

fn decode_status(_: ItemField, text: &str) -> Result<FieldValue, BsxError> {
    Status::from_code(text).map(FieldValue::Status)
}

fn decode_condition(_: ItemField, text: &str) -> Result<FieldValue, BsxError> {
    Condition::from_code(text).map(FieldValue::Condition)
}

fn decode_sub_condition(_: ItemField, text: &str) -> Result<FieldValue, BsxError> {
    SubCondition::from_code(text).map(FieldValue::SubCondition)
}

fn decode_text(_: ItemField, text: &str) -> Result<FieldValue, BsxError> {
    Ok(FieldValue::Text(text.into()))
}

fn invalid_number(field: ItemField, text: &str) -> BsxError {
    BsxError::InvalidNumber {
        tag: field.tag(),
        value: text.into(),
    }
}

// --- Encoders ---

fn encode_integer(value: &FieldValue) -> Option<String> {
    value.as_integer().map(|v| v.to_string())
}

fn encode_float(value: &FieldValue) -> Option<String> {
    value.as_float().map(|v| v.to_string())
}

fn encode_status(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Status(s) => Some(s.code().into()),
        _ => None,
    }
}

fn encode_condition(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Condition(c) => Some(c.code().into()),
        _ => None,
    }
}

fn encode_sub_condition(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::SubCondition(c) => Some(c.code().into()),
        _ => None,
    }
}

fn encode_text(value: &FieldValue) -> Option<String> {
    value.as_text().map(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn decode(field: ItemField, text: &str) -> Result<FieldValue, BsxError> {
        match coercion(field) {
            Coercion::Cast { decode, .. } => decode(field, text),
            Coercion::Presence => panic!("{} is a presence flag", field.tag()),
        }
    }

    fn encode(field: ItemField, value: &FieldValue) -> Option<String> {
        match coercion(field) {
            Coercion::Cast { encode, .. } => encode(value),
            Coercion::Presence => panic!("{} is a presence flag", field.tag()),
        }
    }

    #[test]
    fn test_table_matches_field_kinds() {
        for field in ItemField::ALL {
            let is_presence = matches!(coercion(*field), Coercion::Presence);
            assert_eq!(is_presence, field.kind() == ValueKind::Flag, "{}", field.tag());
        }
    }

    #[test]
    fn test_numeric_decoding() {
        assert_eq!(decode(ItemField::Qty, "10").unwrap(), FieldValue::Integer(10));
        assert_eq!(decode(ItemField::Qty, " 7\n").unwrap(), FieldValue::Integer(7));
        assert_eq!(decode(ItemField::Price, "0.25").unwrap(), FieldValue::Float(0.25));
        assert_eq!(decode(ItemField::Tp1, "3").unwrap(), FieldValue::Float(3.0));

        let err = decode(ItemField::Qty, "1.5").unwrap_err();
        assert!(matches!(err, BsxError::InvalidNumber { tag: "Qty", .. }));
        assert_eq!(err.kind(), ErrorKind::Format);

        let err = decode(ItemField::OrigPrice, "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_code_decoding() {
        assert_eq!(
            decode(ItemField::Condition, "U").unwrap(),
            FieldValue::Condition(Condition::Used)
        );
        assert_eq!(
            decode(ItemField::SubCondition, "?").unwrap(),
            FieldValue::SubCondition(SubCondition::None)
        );
        let err = decode(ItemField::Status, "Z").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
    }

    #[test]
    fn test_text_is_kept_verbatim() {
        assert_eq!(
            decode(ItemField::Comments, "  spaced  ").unwrap(),
            FieldValue::Text("  spaced  ".into())
        );
        assert_eq!(
            decode(ItemField::TotalWeight, "1.5g").unwrap(),
            FieldValue::Text("1.5g".into())
        );
    }

    #[test]
    fn test_encoding() {
        assert_eq!(encode(ItemField::ColorId, &FieldValue::Integer(5)).as_deref(), Some("5"));
        assert_eq!(encode(ItemField::Price, &FieldValue::Float(0.25)).as_deref(), Some("0.25"));
        assert_eq!(
            encode(ItemField::Status, &FieldValue::Status(Status::Exclude)).as_deref(),
            Some("X")
        );
        assert_eq!(encode(ItemField::Qty, &FieldValue::Text("10".into())), None);
    }
}
