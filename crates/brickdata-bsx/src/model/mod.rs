//! The BSX schema registry: element tags, attribute names, the item field
//! catalogue, the column catalogue and the fixed enumerated codes.
//!
//! Everything here is constant data consumed by the builder and resolver.

pub mod codes;
pub mod field;
pub mod item;

pub use codes::{Condition, SortDirection, Status, SubCondition};
pub use field::Field;
pub use item::ItemField;

/// Encoding declared in the XML prolog.
pub const XML_ENCODING: &str = "UTF-8";

/// Fixed document type declaration written after the XML prolog.
pub const XML_DOCTYPE: &str = "<!DOCTYPE BrickStockXML>";

/// Tag of the root element.
pub const ROOT_TAG: &str = "BrickStockXML";

// --- Root children ---

pub const INVENTORY_TAG: &str = "Inventory";
pub const GUI_STATE_TAG: &str = "GuiState";

// --- Inventory children ---

pub const ITEM_TAG: &str = "Item";

// --- GuiState attributes and children ---

pub const APPLICATION_ATTR: &str = "Application";
pub const VERSION_ATTR: &str = "Version";
pub const ITEM_VIEW_TAG: &str = "ItemView";

// --- ItemView children, in wire order ---

pub const COLUMN_ORDER_TAG: &str = "ColumnOrder";
pub const COLUMN_WIDTHS_TAG: &str = "ColumnWidths";
pub const COLUMN_WIDTHS_HIDDEN_TAG: &str = "ColumnWidthsHidden";
pub const SORT_COLUMN_TAG: &str = "SortColumn";
pub const SORT_DIRECTION_TAG: &str = "SortDirection";

/// Separator used by the comma-joined ItemView lists.
pub(crate) const LIST_SEPARATOR: char = ',';
