// crates/brickdata-bsx/tests/parsing.rs

use brickdata_bsx::{
    ColumnWidths, Condition, Document, EncodeOptions, Field, FieldValue, GuiState, Item,
    ItemField, ItemView, SortDirection, Status, SubCondition, decode_bytes, decode_stream,
    decode_text, encode_bytes, encode_text, encode_to_writer,
};
use std::fs;
use std::path::PathBuf;

/// Helper function to load a test file from the `tests/data/` directory.
fn load_test_file(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test file {:?}: {}", path, e))
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn scenario_item() -> Item {
    Item::new()
        .with(ItemField::ItemId, "3001")
        .and_then(|i| i.with(ItemField::ColorId, 5))
        .and_then(|i| i.with(ItemField::Qty, 10))
        .and_then(|i| i.with(ItemField::Price, 0.25))
        .and_then(|i| i.with(ItemField::Condition, Condition::New))
        .and_then(|i| i.with(ItemField::Retain, true))
        .expect("Failed to build scenario item")
}

/// Expands sparse width maps the way the encoder does.
fn canonicalize(document: &Document) -> Document {
    let mut document = document.clone();
    for state in &mut document.gui_states {
        if let Some(view) = &mut state.item_view {
            let widths = view.column_widths.clone();
            if let Some(w) = &mut view.column_widths {
                *w = Field::ALL.into_iter().zip(w.expanded(None)).collect();
            }
            if let Some(h) = &mut view.column_widths_hidden {
                *h = Field::ALL
                    .into_iter()
                    .zip(h.expanded(widths.as_ref()))
                    .collect();
            }
        }
    }
    document
}

#[test]
fn test_decode_fixture() {
    init_logger();
    let xml_content = load_test_file("inventory.bsx");
    let document = decode_text(&xml_content).expect("Failed to parse fixture");

    // 1. Inventory: the bare <Item/> is kept.
    assert_eq!(document.inventory.len(), 3);

    let brick = &document.inventory[0];
    assert_eq!(brick.get(ItemField::ItemId), Some(&FieldValue::Text("3001".into())));
    assert_eq!(brick.get(ItemField::ColorId), Some(&FieldValue::Integer(5)));
    assert_eq!(brick.get(ItemField::Status), Some(&FieldValue::Status(Status::Include)));
    assert_eq!(brick.get(ItemField::Price), Some(&FieldValue::Float(0.25)));
    assert_eq!(
        brick.get(ItemField::Comments),
        Some(&FieldValue::Text("Bin 12 & 13".into()))
    );
    assert!(brick.flag(ItemField::Retain));
    assert!(!brick.contains(ItemField::StockRoom));
    assert_eq!(brick.get(ItemField::Tp1), Some(&FieldValue::Float(0.2)));

    let set = &document.inventory[1];
    assert_eq!(
        set.get(ItemField::SubCondition),
        Some(&FieldValue::SubCondition(SubCondition::Incomplete))
    );
    // Text inside a presence flag is ignored.
    assert_eq!(set.get(ItemField::StockRoom), Some(&FieldValue::Flag(true)));
    assert_eq!(
        set.get(ItemField::TotalWeight),
        Some(&FieldValue::Text("412g".into()))
    );
    assert_eq!(set.len(), 11);

    assert!(document.inventory[2].is_empty());

    // 2. GUI states: the bare <GuiState/> is dropped.
    assert_eq!(document.gui_states.len(), 1);
    let state = &document.gui_states[0];
    assert_eq!(state.application.as_deref(), Some("BrickStore"));
    assert_eq!(state.version.as_deref(), Some("1"));

    let view = state.item_view.as_ref().expect("ItemView missing");
    assert_eq!(view.column_order.as_ref().map(Vec::len), Some(9));
    assert_eq!(view.sort_column, Some(Field::PartNo));
    assert_eq!(view.sort_direction, Some(SortDirection::Ascending));

    let widths = view.column_widths.as_ref().unwrap();
    assert_eq!(widths.len(), Field::COUNT);
    assert_eq!(widths.get(Field::Description), Some(250));
    assert_eq!(widths.get(Field::Bulk), Some(0));

    let hidden = view.column_widths_hidden.as_ref().unwrap();
    assert_eq!(hidden.get(Field::Bulk), Some(40));
    assert_eq!(hidden.get(Field::PriceDiff), Some(60));
}

/// 1. Decode the fixture
/// 2. Encode it (pretty and compact)
/// 3. Decode the output
/// 4. Assert the documents are identical.
#[test]
fn test_round_trip_fixture() {
    init_logger();
    let document = decode_text(&load_test_file("inventory.bsx")).unwrap();

    for options in [EncodeOptions::default(), EncodeOptions::compact()] {
        let encoded = encode_text(&document, &options).expect("Failed to encode");
        let decoded = decode_text(&encoded).expect("Failed to decode encoded document");
        assert_eq!(document, decoded, "Round trip mismatch (pretty={})", options.pretty_print);
    }
}

#[test]
fn test_round_trip_canonicalizes_sparse_widths() {
    let document = Document {
        inventory: vec![scenario_item(), Item::new()],
        gui_states: vec![
            GuiState {
                application: Some("brickdata".into()),
                version: None,
                item_view: Some(ItemView {
                    column_order: Some(vec![Field::Picture, Field::PartNo, Field::PriceDiff]),
                    column_widths: Some(ColumnWidths::new().with(Field::PartNo, 50)),
                    column_widths_hidden: Some(
                        ColumnWidths::new().with(Field::Weight, 33).with(Field::Status, 4),
                    ),
                    sort_column: Some(Field::Quantity),
                    sort_direction: Some(SortDirection::Descending),
                }),
            },
            GuiState {
                application: None,
                version: Some("2.1".into()),
                item_view: None,
            },
        ],
    };

    let bytes = encode_bytes(&document, &EncodeOptions::default()).unwrap();
    let decoded = decode_bytes(&bytes).unwrap();
    assert_ne!(decoded, document);
    assert_eq!(decoded, canonicalize(&document));
}

#[test]
fn test_scenario_item_encoding() {
    let document = Document {
        inventory: vec![scenario_item()],
        gui_states: Vec::new(),
    };
    let text = encode_text(&document, &EncodeOptions::compact()).unwrap();
    assert!(
        text.contains(
            "<Item><ItemID>3001</ItemID><ColorID>5</ColorID><Qty>10</Qty>\
             <Price>0.25</Price><Condition>N</Condition><Retain/></Item>"
        ),
        "Unexpected encoding: {}",
        text
    );

    let decoded = decode_text(&text).unwrap();
    assert_eq!(decoded.inventory.len(), 1);
    let item = &decoded.inventory[0];
    assert_eq!(item.len(), 6);
    assert_eq!(item, &scenario_item());
}

#[test]
fn test_presence_flags() {
    let item = Item::new()
        .with(ItemField::Alternate, true)
        .and_then(|i| i.with(ItemField::Counterpart, false))
        .unwrap();
    let document = Document {
        inventory: vec![item],
        gui_states: Vec::new(),
    };

    let text = encode_text(&document, &EncodeOptions::compact()).unwrap();
    assert!(text.contains("<Alternate/>"));
    assert!(!text.contains("Counterpart"));

    let decoded = decode_text(&text).unwrap();
    let item = &decoded.inventory[0];
    assert!(item.flag(ItemField::Alternate));
    // false and absent decode the same way.
    assert!(!item.contains(ItemField::Counterpart));
}

#[test]
fn test_hidden_width_falls_back_to_visible_width() {
    let document = Document {
        inventory: Vec::new(),
        gui_states: vec![GuiState {
            application: Some("brickdata".into()),
            version: None,
            item_view: Some(ItemView {
                column_widths: Some(ColumnWidths::new().with(Field::PartNo, 50)),
                column_widths_hidden: Some(ColumnWidths::new()),
                ..Default::default()
            }),
        }],
    };

    let text = encode_text(&document, &EncodeOptions::default()).unwrap();
    let decoded = decode_text(&text).unwrap();
    let view = decoded.gui_states[0].item_view.as_ref().unwrap();
    let hidden = view.column_widths_hidden.as_ref().unwrap();
    assert_eq!(hidden.get(Field::PartNo), Some(50));
    assert_eq!(hidden.get(Field::Status), Some(0));
}

#[test]
fn test_pretty_print_does_not_change_content() {
    let document = decode_text(&load_test_file("inventory.bsx")).unwrap();
    let pretty = encode_text(&document, &EncodeOptions::default()).unwrap();
    let compact = encode_text(&document, &EncodeOptions::compact()).unwrap();

    assert_ne!(pretty, compact);
    assert!(pretty.lines().count() > compact.lines().count());
    assert_eq!(decode_text(&pretty).unwrap(), decode_text(&compact).unwrap());
}

#[test]
fn test_writer_and_stream_entry_points() {
    let document = Document {
        inventory: vec![scenario_item()],
        gui_states: Vec::new(),
    };

    let mut buffer = Vec::new();
    encode_to_writer(&document, &mut buffer, &EncodeOptions::default()).unwrap();
    assert!(buffer.starts_with(b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE BrickStockXML>\n"));

    let decoded = decode_stream(buffer.as_slice()).unwrap();
    assert_eq!(decoded, document);
}

#[test]
fn test_json_representation() {
    let document = Document {
        inventory: vec![
            scenario_item()
                .with(ItemField::Status, Status::Extra)
                .unwrap(),
        ],
        gui_states: vec![GuiState {
            application: Some("BrickStore".into()),
            version: None,
            item_view: Some(ItemView {
                column_order: Some(vec![Field::PartNo, Field::Color]),
                column_widths: Some(ColumnWidths::new().with(Field::PartNo, 50)),
                sort_direction: Some(SortDirection::Ascending),
                ..Default::default()
            }),
        }],
    };

    let value = serde_json::to_value(&document).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "Inventory": [{
                "ItemID": "3001",
                "ColorID": 5,
                "Status": "E",
                "Qty": 10,
                "Price": 0.25,
                "Condition": "N",
                "Retain": true
            }],
            "GuiStates": [{
                "Application": "BrickStore",
                "ItemView": {
                    "ColumnOrder": ["PartNo", "Color"],
                    "ColumnWidths": { "PartNo": 50 },
                    "SortDirection": "A"
                }
            }]
        })
    );

    let back: Document = serde_json::from_value(value).unwrap();
    assert_eq!(back, document);
}

#[test]
fn test_json_ignores_unknown_item_keys() {
    let item: Item = serde_json::from_str(r#"{"Qty": 3, "Colour": "blue", "StockRoom": true}"#)
        .unwrap();
    assert_eq!(item.get(ItemField::Qty), Some(&FieldValue::Integer(3)));
    assert!(item.flag(ItemField::StockRoom));
    assert_eq!(item.len(), 2);
}
