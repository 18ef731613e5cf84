// crates/brickdata-bsx/src/types.rs

//! Public, ergonomic data structures for representing a BSX document.

use crate::error::BsxError;
use crate::model::{Condition, Field, ItemField, SortDirection, Status, SubCondition};
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

// --- Root Structure ---

/// A decoded BSX file: an inventory and any number of persisted GUI states.
///
/// An empty `inventory` or `gui_states` is left out of the encoded file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The `<Item>` elements of the `<Inventory>` block, in document order.
    #[serde(rename = "Inventory", default, skip_serializing_if = "Vec::is_empty")]
    pub inventory: Vec<Item>,

    /// The `<GuiState>` elements, in document order.
    #[serde(rename = "GuiStates", default, skip_serializing_if = "Vec::is_empty")]
    pub gui_states: Vec<GuiState>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if the document holds neither items nor GUI states.
    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty() && self.gui_states.is_empty()
    }
}

// --- Item Values ---

/// The kind of value an item field carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Float,
    Status,
    Condition,
    SubCondition,
    /// Encoded purely by the presence of the element.
    Flag,
    Text,
}

/// A typed item field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Status(Status),
    Condition(Condition),
    SubCondition(SubCondition),
    Flag(bool),
    Text(String),
}

impl FieldValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Integer(_) => ValueKind::Integer,
            FieldValue::Float(_) => ValueKind::Float,
            FieldValue::Status(_) => ValueKind::Status,
            FieldValue::Condition(_) => ValueKind::Condition,
            FieldValue::SubCondition(_) => ValueKind::SubCondition,
            FieldValue::Flag(_) => ValueKind::Flag,
            FieldValue::Text(_) => ValueKind::Text,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Integer(v.into())
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Flag(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.into())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<Status> for FieldValue {
    fn from(v: Status) -> Self {
        FieldValue::Status(v)
    }
}

impl From<Condition> for FieldValue {
    fn from(v: Condition) -> Self {
        FieldValue::Condition(v)
    }
}

impl From<SubCondition> for FieldValue {
    fn from(v: SubCondition) -> Self {
        FieldValue::SubCondition(v)
    }
}

// --- Item ---

/// One inventory lot: a set of item fields with typed values.
///
/// Fields are kept in canonical schema order regardless of insertion order.
/// Every stored value matches the kind of its field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Item {
    fields: BTreeMap<ItemField, FieldValue>,
}

impl Item {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `field`, returning the previous value.
    ///
    /// # Errors
    /// Returns `BsxError::KindMismatch` if the value's kind differs from the
    /// field's kind.
    pub fn insert(
        &mut self,
        field: ItemField,
        value: impl Into<FieldValue>,
    ) -> Result<Option<FieldValue>, BsxError> {
        let value = value.into();
        if value.kind() != field.kind() {
            return Err(BsxError::KindMismatch {
                field: field.tag(),
                expected: field.kind(),
            });
        }
        Ok(self.fields.insert(field, value))
    }

    /// Builder-style variant of [`Item::insert`].
    pub fn with(mut self, field: ItemField, value: impl Into<FieldValue>) -> Result<Self, BsxError> {
        self.insert(field, value)?;
        Ok(self)
    }

    pub fn get(&self, field: ItemField) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    pub fn remove(&mut self, field: ItemField) -> Option<FieldValue> {
        self.fields.remove(&field)
    }

    pub fn contains(&self, field: ItemField) -> bool {
        self.fields.contains_key(&field)
    }

    /// `true` if `field` is a presence flag that is set.
    pub fn flag(&self, field: ItemField) -> bool {
        matches!(self.fields.get(&field), Some(FieldValue::Flag(true)))
    }

    /// Iterates over the stored fields in canonical schema order.
    pub fn iter(&self) -> btree_map::Iter<'_, ItemField, FieldValue> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a Item {
    type Item = (&'a ItemField, &'a FieldValue);
    type IntoIter = btree_map::Iter<'a, ItemField, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (field, value) in &self.fields {
            match value {
                FieldValue::Integer(v) => map.serialize_entry(field.tag(), v)?,
                FieldValue::Float(v) => map.serialize_entry(field.tag(), v)?,
                FieldValue::Status(v) => map.serialize_entry(field.tag(), v)?,
                FieldValue::Condition(v) => map.serialize_entry(field.tag(), v)?,
                FieldValue::SubCondition(v) => map.serialize_entry(field.tag(), v)?,
                FieldValue::Flag(v) => map.serialize_entry(field.tag(), v)?,
                FieldValue::Text(v) => map.serialize_entry(field.tag(), v)?,
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ItemVisitor)
    }
}

/// Reads each entry as the kind its tag declares; unknown tags are skipped.
struct ItemVisitor;

impl<'de> Visitor<'de> for ItemVisitor {
    type Value = Item;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of item field tags to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Item, A::Error> {
        let mut item = Item::new();
        while let Some(tag) = map.next_key::<String>()? {
            let Some(field) = ItemField::from_tag(&tag) else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };
            let value = match field.kind() {
                ValueKind::Integer => FieldValue::Integer(map.next_value()?),
                ValueKind::Float => FieldValue::Float(map.next_value()?),
                ValueKind::Status => FieldValue::Status(map.next_value()?),
                ValueKind::Condition => FieldValue::Condition(map.next_value()?),
                ValueKind::SubCondition => FieldValue::SubCondition(map.next_value()?),
                ValueKind::Flag => FieldValue::Flag(map.next_value()?),
                ValueKind::Text => FieldValue::Text(map.next_value()?),
            };
            item.fields.insert(field, value);
        }
        Ok(item)
    }
}

// --- GUI State ---

/// Persisted UI layout of an item list, keyed by the originating application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuiState {
    /// `@Application`
    #[serde(rename = "Application", default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,

    /// `@Version`
    #[serde(rename = "Version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// `<ItemView>`
    #[serde(rename = "ItemView", default, skip_serializing_if = "Option::is_none")]
    pub item_view: Option<ItemView>,
}

impl GuiState {
    /// `true` if the state carries no attributes and no item view.
    pub fn is_empty(&self) -> bool {
        self.application.as_deref().is_none_or(str::is_empty)
            && self.version.as_deref().is_none_or(str::is_empty)
            && self.item_view.is_none()
    }
}

/// Represents `<ItemView>`: column layout and sorting of the item list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    /// `<ColumnOrder>`: visual column order (need not list every column).
    #[serde(rename = "ColumnOrder", default, skip_serializing_if = "Option::is_none")]
    pub column_order: Option<Vec<Field>>,

    /// `<ColumnWidths>`
    #[serde(rename = "ColumnWidths", default, skip_serializing_if = "Option::is_none")]
    pub column_widths: Option<ColumnWidths>,

    /// `<ColumnWidthsHidden>`: widths to restore when hidden columns are shown.
    #[serde(
        rename = "ColumnWidthsHidden",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub column_widths_hidden: Option<ColumnWidths>,

    /// `<SortColumn>`
    #[serde(rename = "SortColumn", default, skip_serializing_if = "Option::is_none")]
    pub sort_column: Option<Field>,

    /// `<SortDirection>`
    #[serde(rename = "SortDirection", default, skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
}

impl ItemView {
    pub fn is_empty(&self) -> bool {
        self.column_order.is_none()
            && self.column_widths.is_none()
            && self.column_widths_hidden.is_none()
            && self.sort_column.is_none()
            && self.sort_direction.is_none()
    }
}

/// Per-column widths. May be sparse; the wire form always lists all columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnWidths(BTreeMap<Field, i32>);

impl ColumnWidths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every column set to width 0.
    pub fn zeroed() -> Self {
        Field::ALL.iter().map(|f| (*f, 0)).collect()
    }

    pub fn get(&self, field: Field) -> Option<i32> {
        self.0.get(&field).copied()
    }

    pub fn set(&mut self, field: Field, width: i32) -> Option<i32> {
        self.0.insert(field, width)
    }

    /// Builder-style variant of [`ColumnWidths::set`].
    pub fn with(mut self, field: Field, width: i32) -> Self {
        self.0.insert(field, width);
        self
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Iterates over the stored widths in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, i32)> + '_ {
        self.0.iter().map(|(f, w)| (*f, *w))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The canonical form: one width per column in index order, missing
    /// columns taken from `fallback`, then 0.
    pub fn expanded(&self, fallback: Option<&ColumnWidths>) -> [i32; Field::COUNT] {
        let mut widths = [0; Field::COUNT];
        for (slot, field) in widths.iter_mut().zip(Field::ALL) {
            *slot = self
                .get(field)
                .or_else(|| fallback.and_then(|f| f.get(field)))
                .unwrap_or(0);
        }
        widths
    }
}

impl FromIterator<(Field, i32)> for ColumnWidths {
    fn from_iter<I: IntoIterator<Item = (Field, i32)>>(iter: I) -> Self {
        ColumnWidths(iter.into_iter().collect())
    }
}
