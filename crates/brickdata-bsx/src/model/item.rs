// crates/brickdata-bsx/src/model/item.rs

//! The `<Item>` child catalogue.
//!
//! Declaration order is the canonical schema order: the encoder writes
//! children in this order and the decoder scans for them in this order.
//! Taken from BrickStock (`bricklink.cpp`).

use crate::types::ValueKind;

/// Declares the item field catalogue: variant, wire tag and value kind.
macro_rules! item_fields {
    ($($variant:ident => $tag:literal : $kind:ident),+ $(,)?) => {
        /// An item child element recognized by the schema.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum ItemField {
            $($variant,)+
        }

        impl ItemField {
            /// All item fields, in canonical schema order.
            pub const ALL: &'static [ItemField] = &[$(ItemField::$variant),+];

            /// The element tag of this field.
            pub const fn tag(self) -> &'static str {
                match self {
                    $(ItemField::$variant => $tag,)+
                }
            }

            /// Looks a field up by element tag. Unknown tags yield `None`.
            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some(ItemField::$variant),)+
                    _ => None,
                }
            }

            /// The kind of value this field carries.
            pub const fn kind(self) -> ValueKind {
                match self {
                    $(ItemField::$variant => ValueKind::$kind,)+
                }
            }
        }
    };
}

item_fields! {
    ItemId => "ItemID": Text,
    ItemTypeId => "ItemTypeID": Text,
    ColorId => "ColorID": Integer,
    ItemName => "ItemName": Text,
    ItemTypeName => "ItemTypeName": Text,
    ColorName => "ColorName": Text,
    CategoryId => "CategoryID": Integer,
    CategoryName => "CategoryName": Text,
    Status => "Status": Status,
    Qty => "Qty": Integer,
    Price => "Price": Float,
    Condition => "Condition": Condition,
    SubCondition => "SubCondition": SubCondition,
    // Alternate and Counterpart are not supported by BrickStore.
    Alternate => "Alternate": Flag,
    Counterpart => "Counterpart": Flag,
    Image => "Image": Text,
    Bulk => "Bulk": Integer,
    Sale => "Sale": Integer,
    Comments => "Comments": Text,
    Remarks => "Remarks": Text,
    Retain => "Retain": Flag,
    StockRoom => "StockRoom": Flag,
    Reserved => "Reserved": Text,
    LotId => "LotID": Integer,
    Tq1 => "TQ1": Integer,
    Tp1 => "TP1": Float,
    Tq2 => "TQ2": Integer,
    Tp2 => "TP2": Float,
    Tq3 => "TQ3": Integer,
    Tp3 => "TP3": Float,
    TotalWeight => "TotalWeight": Text,
    OrigPrice => "OrigPrice": Float,
    OrigQty => "OrigQty": Integer,
}

impl ItemField {
    /// Number of item fields in the catalogue.
    pub const COUNT: usize = 33;

    /// Position of this field in canonical schema order.
    pub const fn index(self) -> usize {
        self as usize
    }
}

const _: () = assert!(ItemField::ALL.len() == ItemField::COUNT);
