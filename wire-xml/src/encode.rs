/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! XML Encoding module that uses Rust lifetimes to make
//! generating malformed XML a compilation error

use crate::escape::{escape, Context};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum XmlEncodeError {
    #[error("`{0}` is not a valid XML element name")]
    InvalidElementName(String),
    #[error("`{0}` is not a valid XML attribute name")]
    InvalidAttributeName(String),
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == ':'
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_numeric() || c == '-' || c == '.'
}

fn valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_name_start(first) => chars.all(is_name_char),
        _ => false,
    }
}

/// Writes an XML document into a `String`
///
/// ```rust
/// use wire_xml::encode::XmlWriter;
/// let mut out = String::new();
/// let mut writer = XmlWriter::new(&mut out);
/// let mut root = writer.start_el("Root").unwrap().finish();
/// let mut child = root.start_el("Child").unwrap();
/// child.write_attribute("id", "1").unwrap();
/// let mut child = child.finish();
/// child.data("a & b");
/// child.finish();
/// root.finish();
/// assert_eq!(out, r#"<Root><Child id="1">a &amp; b</Child></Root>"#);
/// ```
pub struct XmlWriter<'a> {
    doc: &'a mut String,
}

impl<'a> XmlWriter<'a> {
    pub fn new(doc: &'a mut String) -> Self {
        Self { doc }
    }

    pub fn start_el<'b>(&mut self, tag: &'b str) -> Result<ElWriter<'_, 'b>, XmlEncodeError> {
        ElWriter::new(self.doc, tag)
    }
}

/// An element whose start tag is still open: attributes may be added until [`ElWriter::finish`]
pub struct ElWriter<'a, 'b> {
    doc: &'a mut String,
    tag: &'b str,
}

impl<'a, 'b> ElWriter<'a, 'b> {
    fn new(doc: &'a mut String, tag: &'b str) -> Result<Self, XmlEncodeError> {
        if !valid_name(tag) {
            return Err(XmlEncodeError::InvalidElementName(tag.to_owned()));
        }
        doc.push('<');
        doc.push_str(tag);
        Ok(ElWriter { doc, tag })
    }

    pub fn write_attribute(&mut self, key: &str, value: &str) -> Result<&mut Self, XmlEncodeError> {
        if !valid_name(key) {
            return Err(XmlEncodeError::InvalidAttributeName(key.to_owned()));
        }
        self.doc.push(' ');
        self.doc.push_str(key);
        self.doc.push_str("=\"");
        self.doc.push_str(&escape(value, Context::Attribute));
        self.doc.push('"');
        Ok(self)
    }

    /// Writes an `xmlns` (or `xmlns:prefix`) declaration
    pub fn write_ns(mut self, namespace: &str, prefix: Option<&str>) -> Result<Self, XmlEncodeError> {
        match prefix {
            Some(prefix) => {
                let key = format!("xmlns:{}", prefix);
                self.write_attribute(&key, namespace)?;
            }
            None => {
                self.write_attribute("xmlns", namespace)?;
            }
        }
        Ok(self)
    }

    /// Closes the start tag; the returned scope writes the element's content
    pub fn finish(self) -> ScopeWriter<'a, 'b> {
        self.doc.push('>');
        ScopeWriter {
            doc: self.doc,
            tag: self.tag,
        }
    }
}

/// The content of an element, closed with [`ScopeWriter::finish`]
pub struct ScopeWriter<'a, 'b> {
    doc: &'a mut String,
    tag: &'b str,
}

impl<'a, 'b> ScopeWriter<'a, 'b> {
    pub fn data(&mut self, data: &str) {
        self.doc.push_str(&escape(data, Context::Text));
    }

    pub fn start_el<'c>(&mut self, tag: &'c str) -> Result<ElWriter<'_, 'c>, XmlEncodeError> {
        ElWriter::new(self.doc, tag)
    }

    pub fn finish(self) {
        self.doc.push_str("</");
        self.doc.push_str(self.tag);
        self.doc.push('>');
    }
}
