// crates/brickdata-bsx/src/xml.rs

//! A small owned XML element tree on top of `quick-xml`'s event reader and
//! writer.
//!
//! The codec only needs a handful of tree operations: parse a document into
//! a tree, find direct children by tag, read text and attributes, build
//! elements and write them back out. Comments, processing instructions and
//! the prolog are dropped on parse.

use crate::error::BsxError;
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// An element with its attributes, text and child elements.
///
/// `text` is the concatenation of all character data directly inside the
/// element; for elements with children this is usually formatting whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Creates an element holding only `text`.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the value of attribute `key`, if present.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Sets attribute `key`, replacing an existing value.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Child elements in document order.
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// The first direct child named `tag`.
    pub fn find(&self, tag: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == tag)
    }

    /// All direct children named `tag`, in document order.
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children.iter().filter(move |c| c.name == tag)
    }

    /// Parses a complete XML document and returns its root element.
    ///
    /// # Errors
    /// Returns `BsxError::XmlParsing` for syntax errors reported by
    /// `quick-xml` and `BsxError::MalformedDocument` for structural problems
    /// (no root, several roots, unclosed elements, unknown entities).
    pub fn parse_str(xml: &str) -> Result<XmlElement, BsxError> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => stack.push(XmlElement::from_start(&e)?),
                Event::Empty(e) => {
                    let element = XmlElement::from_start(&e)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| BsxError::malformed("closing tag without an open element"))?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(e) => append_text(&mut stack, core::str::from_utf8(&e)?)?,
                Event::CData(e) => append_text(&mut stack, core::str::from_utf8(&e)?)?,
                Event::GeneralRef(e) => match e.resolve_char_ref()? {
                    Some(ch) => append_text(&mut stack, ch.encode_utf8(&mut [0; 4]))?,
                    None => {
                        let entity = resolve_entity(core::str::from_utf8(&e)?)?;
                        append_text(&mut stack, entity)?;
                    }
                },
                Event::Decl(_) | Event::DocType(_) | Event::Comment(_) | Event::PI(_) => {}
                Event::Eof => break,
            }
        }

        if let Some(open) = stack.last() {
            return Err(BsxError::malformed(format!(
                "element <{}> is never closed",
                open.name
            )));
        }
        root.ok_or_else(|| BsxError::malformed("document has no root element"))
    }

    fn from_start(start: &BytesStart<'_>) -> Result<XmlElement, BsxError> {
        let mut element = XmlElement::new(core::str::from_utf8(start.name().as_ref())?);
        for attr in start.attributes() {
            let attr = attr?;
            let key = core::str::from_utf8(attr.key.as_ref())?.to_owned();
            let value = attr.unescape_value()?.into_owned();
            element.attributes.push((key, value));
        }
        Ok(element)
    }

    /// Writes this element and its subtree as `quick-xml` events.
    ///
    /// Elements without text and children are written as empty tags.
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), BsxError> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.text.is_empty() && self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        if !self.text.is_empty() {
            writer.write_event(Event::Text(BytesText::new(&self.text)))?;
        }
        for child in &self.children {
            child.write_to(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }
}

/// Hands a finished element to its parent, or makes it the root.
fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), BsxError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_some() => {
            return Err(BsxError::malformed("document has more than one root element"));
        }
        None => *root = Some(element),
    }
    Ok(())
}

fn append_text(stack: &mut [XmlElement], text: &str) -> Result<(), BsxError> {
    match stack.last_mut() {
        Some(current) => current.text.push_str(text),
        None if text.trim().is_empty() => {}
        None => return Err(BsxError::malformed("text outside the root element")),
    }
    Ok(())
}

/// Resolves a named entity; only the predefined XML entities are known.
fn resolve_entity(name: &str) -> Result<&'static str, BsxError> {
    quick_xml::escape::resolve_predefined_entity(name)
        .ok_or_else(|| BsxError::malformed(format!("unknown entity &{};", name)))
}
