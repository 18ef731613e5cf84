// crates/brickdata-bsx/src/model/field.rs

//! The column catalogue shared by `ColumnOrder`, `ColumnWidths`,
//! `ColumnWidthsHidden` and `SortColumn`.
//!
//! On the wire a column is referenced by its zero-based index; the document
//! model uses the variant (and its name in the serde representation).
//! Order follows BrickStock's `cdocument.h`.

use crate::error::BsxError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One column of the item view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Field {
    Status = 0,
    Picture,
    PartNo,
    Description,
    Condition,
    Color,
    Quantity,
    Price,
    Total,
    Bulk,
    Sale,
    Comments,
    Remarks,
    Category,
    ItemType,
    TierQ1,
    TierP1,
    TierQ2,
    TierP2,
    TierQ3,
    TierP3,
    LotId,
    Retain,
    Stockroom,
    Reserved,
    Weight,
    YearReleased,
    QuantityOrig,
    QuantityDiff,
    PriceOrig,
    PriceDiff = 30,
}

impl Field {
    /// Number of columns in the catalogue.
    pub const COUNT: usize = 31;

    /// All columns, indexed by their wire index.
    pub const ALL: [Field; Field::COUNT] = [
        Field::Status,
        Field::Picture,
        Field::PartNo,
        Field::Description,
        Field::Condition,
        Field::Color,
        Field::Quantity,
        Field::Price,
        Field::Total,
        Field::Bulk,
        Field::Sale,
        Field::Comments,
        Field::Remarks,
        Field::Category,
        Field::ItemType,
        Field::TierQ1,
        Field::TierP1,
        Field::TierQ2,
        Field::TierP2,
        Field::TierQ3,
        Field::TierP3,
        Field::LotId,
        Field::Retain,
        Field::Stockroom,
        Field::Reserved,
        Field::Weight,
        Field::YearReleased,
        Field::QuantityOrig,
        Field::QuantityDiff,
        Field::PriceOrig,
        Field::PriceDiff,
    ];

    const NAMES: [&'static str; Field::COUNT] = [
        "Status",
        "Picture",
        "PartNo",
        "Description",
        "Condition",
        "Color",
        "Quantity",
        "Price",
        "Total",
        "Bulk",
        "Sale",
        "Comments",
        "Remarks",
        "Category",
        "ItemType",
        "TierQ1",
        "TierP1",
        "TierQ2",
        "TierP2",
        "TierQ3",
        "TierP3",
        "LotId",
        "Retain",
        "Stockroom",
        "Reserved",
        "Weight",
        "YearReleased",
        "QuantityOrig",
        "QuantityDiff",
        "PriceOrig",
        "PriceDiff",
    ];

    /// The wire index of this column.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The column at `index`, failing for indices outside the catalogue.
    pub fn from_index(index: usize) -> Result<Self, BsxError> {
        Field::ALL
            .get(index)
            .copied()
            .ok_or(BsxError::FieldIndexOutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
            })
    }

    /// The column at a signed wire index, as read from `ColumnOrder` or
    /// `SortColumn`.
    pub fn from_wire_index(index: i64) -> Result<Self, BsxError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Field::ALL.get(i).copied())
            .ok_or(BsxError::FieldIndexOutOfRange { index })
    }

    /// The column name used by the document model.
    pub fn name(self) -> &'static str {
        Field::NAMES[self.index()]
    }

    /// Looks a column up by name.
    pub fn from_name(name: &str) -> Result<Self, BsxError> {
        Field::NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| Field::ALL[i])
            .ok_or_else(|| BsxError::UnknownFieldName { name: name.into() })
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Field {
    type Err = BsxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::from_name(s)
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Field::from_name(&name).map_err(serde::de::Error::custom)
    }
}
