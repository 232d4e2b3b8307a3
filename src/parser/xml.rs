// file: src/parser/xml.rs
// description: small element tree built from quick-xml events
// reference: https://docs.rs/quick-xml

use crate::error::{PrepError, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs;
use std::path::Path;

/// An XML element with its attributes, direct text and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| PrepError::file_operation(path, e))?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parses a whole document and returns its root element.
    pub fn parse(content: &str, file: &str) -> Result<Self> {
        let xml_error = |message: String| PrepError::Xml {
            file: file.to_string(),
            message,
        };

        let mut reader = Reader::from_str(content);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    stack.push(Self::open(e).map_err(xml_error)?);
                }
                Ok(Event::Empty(ref e)) => {
                    let element = Self::open(e).map_err(xml_error)?;
                    Self::attach(&mut stack, &mut root, element).map_err(xml_error)?;
                }
                Ok(Event::End(_)) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| xml_error("unexpected closing tag".to_string()))?;
                    Self::attach(&mut stack, &mut root, element).map_err(xml_error)?;
                }
                // Only text before the first child belongs to an element.
                Ok(Event::Text(ref e)) => {
                    if let Some(current) = stack.last_mut().filter(|c| c.children.is_empty()) {
                        let text = e.unescape().map_err(|err| xml_error(err.to_string()))?;
                        current.text.push_str(&text);
                    }
                }
                Ok(Event::CData(e)) => {
                    if let Some(current) = stack.last_mut().filter(|c| c.children.is_empty()) {
                        current.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(xml_error(format!(
                        "at byte {}: {}",
                        reader.error_position(),
                        e
                    )));
                }
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(xml_error(format!("unclosed element <{}>", open.name)));
        }

        root.ok_or_else(|| xml_error("document has no root element".to_string()))
    }

    fn open(start: &BytesStart<'_>) -> std::result::Result<Self, String> {
        let name = String::from_utf8_lossy(start.name().as_ref()).to_string();
        let mut attributes = Vec::new();

        for attr in start.attributes() {
            let attr = attr.map_err(|e| e.to_string())?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = attr.unescape_value().map_err(|e| e.to_string())?;
            attributes.push((key, value.to_string()));
        }

        Ok(Self {
            name,
            attributes,
            ..Self::default()
        })
    }

    fn attach(
        stack: &mut [XmlElement],
        root: &mut Option<XmlElement>,
        element: XmlElement,
    ) -> std::result::Result<(), String> {
        match stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None if root.is_none() => *root = Some(element),
            None => return Err(format!("second root element <{}>", element.name)),
        }
        Ok(())
    }

    /// Text inside this element up to its first child. Text that follows a
    /// child element is not kept.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First direct child with the given tag.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Every element below this one, in document order.
    pub fn descendants(&self) -> Vec<&XmlElement> {
        let mut out = Vec::new();
        self.collect_descendants(&mut out);
        out
    }

    fn collect_descendants<'a>(&'a self, out: &mut Vec<&'a XmlElement>) {
        for child in &self.children {
            out.push(child);
            child.collect_descendants(out);
        }
    }
}

/// Where a top-level element sits in its source file, for error reporting.
#[derive(Debug, Clone, Copy)]
pub struct ElementLocation<'a> {
    pub file: &'a str,
    pub element: &'a str,
    /// 1-based position among the root's children of the same tag.
    pub index: usize,
}

impl<'a> ElementLocation<'a> {
    pub fn new(file: &'a str, element: &'a str, index: usize) -> Self {
        Self {
            file,
            element,
            index,
        }
    }

    pub fn missing(&self, field: &str) -> PrepError {
        PrepError::MissingField {
            file: self.file.to_string(),
            element: self.element.to_string(),
            index: self.index,
            field: field.to_string(),
        }
    }

    pub fn empty(&self, field: &str) -> PrepError {
        PrepError::EmptyField {
            file: self.file.to_string(),
            element: self.element.to_string(),
            index: self.index,
            field: field.to_string(),
        }
    }
}
