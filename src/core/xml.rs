//! Minimal XML layer for the FpMate grammar.
//!
//! Outbound: an ordered tree of [`Element`]s rendered compactly, childless
//! elements self-closing. Inbound: a document decoded into a
//! `serde_json::Value` tree where attributes and child elements are siblings
//! on the same object, a text-only element collapses to a string, text next to
//! attributes or children lands under `"_"`, and repeated names become arrays.

use crate::utils::error::{FpMateError, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use serde_json::{Map, Value};
use std::io::Write;

pub const TEXT_KEY: &str = "_";

/// Deepest element nesting accepted from the device; real replies stay under 5.
pub const MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Appends an attribute; emission order is insertion order.
    pub fn attr(mut self, key: &str, value: impl ToString) -> Self {
        self.attributes.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.name()).collect()
    }

    pub(crate) fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.text.is_none() && self.children.is_empty() {
            return emit(writer, Event::Empty(start));
        }

        emit(writer, Event::Start(start))?;
        if let Some(text) = &self.text {
            emit(writer, Event::Text(BytesText::new(text)))?;
        }
        for child in &self.children {
            child.write_to(writer)?;
        }
        emit(writer, Event::End(BytesEnd::new(self.name.as_str())))
    }
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| FpMateError::XmlError {
            message: e.to_string(),
        })
}

/// Renders `root` after an `<?xml version="1.0" encoding="utf-8"?>` prolog.
pub fn render_document(root: &Element) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)),
    )?;
    root.write_to(&mut writer)?;

    String::from_utf8(writer.into_inner()).map_err(|e| FpMateError::XmlError {
        message: e.to_string(),
    })
}

struct OpenNode {
    name: String,
    fields: Map<String, Value>,
    text: String,
}

impl OpenNode {
    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let name = std::str::from_utf8(start.name().as_ref())
            .map_err(|e| FpMateError::malformed(e.to_string()))?
            .to_string();

        let mut fields = Map::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| FpMateError::malformed(e.to_string()))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| FpMateError::malformed(e.to_string()))?
                .to_string();
            let value = attr
                .unescape_value()
                .map_err(|e| FpMateError::malformed(e.to_string()))?;
            insert_merged(&mut fields, key, Value::String(value.into_owned()));
        }

        Ok(Self {
            name,
            fields,
            text: String::new(),
        })
    }

    fn into_value(self) -> (String, Value) {
        let has_text = !self.text.trim().is_empty();
        let value = if self.fields.is_empty() {
            Value::String(if has_text { self.text } else { String::new() })
        } else {
            let mut fields = self.fields;
            if has_text {
                fields.insert(TEXT_KEY.to_string(), Value::String(self.text));
            }
            Value::Object(fields)
        };
        (self.name, value)
    }
}

fn insert_merged(fields: &mut Map<String, Value>, key: String, value: Value) {
    match fields.get_mut(&key) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            fields.insert(key, value);
        }
    }
}

/// Decodes a document into `{ rootName: rootValue }`.
pub fn parse_tree(xml: &str) -> Result<Value> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<OpenNode> = Vec::new();
    let mut root: Option<(String, Value)> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            FpMateError::malformed(format!(
                "XML error at byte {}: {}",
                reader.buffer_position(),
                e
            ))
        })?;

        match event {
            Event::Start(start) => {
                if stack.len() >= MAX_DEPTH {
                    return Err(FpMateError::malformed("element nesting too deep"));
                }
                stack.push(OpenNode::from_start(&start)?);
            }
            Event::Empty(start) => {
                let node = OpenNode::from_start(&start)?;
                close(node, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| FpMateError::malformed("unexpected closing tag"))?;
                close(node, &mut stack, &mut root)?;
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| FpMateError::malformed(e.to_string()))?;
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&text);
                }
            }
            Event::CData(data) => {
                let bytes = data.into_inner();
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&String::from_utf8_lossy(&bytes));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(FpMateError::malformed("document ended inside an element"));
    }

    let (name, value) = root.ok_or_else(|| FpMateError::malformed("document has no root element"))?;
    let mut document = Map::new();
    document.insert(name, value);
    Ok(Value::Object(document))
}

fn close(
    node: OpenNode,
    stack: &mut [OpenNode],
    root: &mut Option<(String, Value)>,
) -> Result<()> {
    let (name, value) = node.into_value();
    match stack.last_mut() {
        Some(parent) => {
            insert_merged(&mut parent.fields, name, value);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some((name, value));
            Ok(())
        }
        None => Err(FpMateError::malformed("more than one root element")),
    }
}
