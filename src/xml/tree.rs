// Element tree for XML source documents
//
//  Copyright (C) 2014-2022 Ryan Specialty Group, LLC.
//
//  This file is part of cfgtrans.
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! A minimal element tree built from [`quick_xml`] events.
//!
//! Source documents are small,
//!   so the entire document is read into memory before it is lowered into
//!   declarations.
//! Only what lowering needs is retained:
//!   element names,
//!   attributes,
//!   the text preceding the first child element,
//!   and child elements.
//! Comments,
//!   processing instructions,
//!   and the text _following_ child elements are discarded.

use super::ReadError;
use crate::tpwrap::quick_xml::{Error as XmlError, InnerXmlError};
use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};
use std::io::BufRead;

/// An XML element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,

    /// Unescaped text and CDATA preceding the first child element,
    ///   or [`None`] if there is none.
    ///
    /// Whitespace is retained.
    pub text: Option<String>,

    pub children: Vec<Element>,
}

impl Element {
    /// Value of the attribute `name`,
    ///   if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// First child element named `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Child elements named `name`,
    ///   in document order.
    pub fn children_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// All descendants named `name`
    ///   (excluding `self`)
    ///   in document order.
    pub fn descendants_named<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &str, dest: &mut Vec<&'a Element>) {
        for child in &self.children {
            if child.name == name {
                dest.push(child);
            }

            child.collect_descendants(name, dest);
        }
    }

    fn push_text(&mut self, text: &str) {
        // Only text preceding the first child is retained.
        if self.children.is_empty() {
            self.text.get_or_insert_with(String::new).push_str(text);
        }
    }
}

/// Read the root element of the XML document `src`,
///   along with all of its descendants.
///
/// Reading stops after the root element is closed;
///   anything following it is ignored.
///
/// Errors
/// ======
/// - [`ReadError::Xml`] for malformed XML,
///     including mismatched end tags and input ending before the root
///     element is closed.
/// - [`ReadError::MissingRoot`] if the document contains no elements.
pub fn parse<B: BufRead>(src: B) -> Result<Element, ReadError> {
    let mut reader = Reader::from_reader(src);
    let mut buf = Vec::new();

    match read_root(&mut reader, &mut buf) {
        Ok(Some(root)) => Ok(root),
        Ok(None) => Err(ReadError::MissingRoot),
        Err(e) => Err(XmlError::new(e, reader.buffer_position()).into()),
    }
}

fn read_root<B: BufRead>(
    reader: &mut Reader<B>,
    buf: &mut Vec<u8>,
) -> Result<Option<Element>, InnerXmlError> {
    // Open elements;
    //   the root is at the bottom.
    let mut stack: Vec<Element> = Vec::new();

    loop {
        buf.clear();

        let closed = match reader.read_event_into(buf)? {
            Event::Start(ele) => {
                stack.push(open_element(reader, &ele)?);
                None
            }

            Event::Empty(ele) => Some(open_element(reader, &ele)?),

            // End names are checked by the reader.
            Event::End(_) => stack.pop(),

            Event::Text(text) => {
                if let Some(open) = stack.last_mut() {
                    open.push_text(&text.unescape()?);
                }
                None
            }

            Event::CData(cdata) => {
                if let Some(open) = stack.last_mut() {
                    open.push_text(&reader.decoder().decode(&cdata)?);
                }
                None
            }

            Event::Eof if stack.is_empty() => return Ok(None),

            Event::Eof => {
                return Err(InnerXmlError::UnexpectedEof(format!(
                    "</{}>",
                    stack.last().map_or("", |open| open.name.as_str()),
                )));
            }

            Event::Comment(_)
            | Event::Decl(_)
            | Event::PI(_)
            | Event::DocType(_) => None,
        };

        if let Some(ele) = closed {
            match stack.last_mut() {
                Some(parent) => parent.children.push(ele),
                None => return Ok(Some(ele)),
            }
        }
    }
}

fn open_element<B>(
    reader: &Reader<B>,
    ele: &BytesStart,
) -> Result<Element, InnerXmlError> {
    let decoder = reader.decoder();

    let attrs = ele
        .attributes()
        .map(|attr| {
            let attr = attr?;

            Ok((
                decoder.decode(attr.key.as_ref())?.into_owned(),
                attr.unescape_value()?.into_owned(),
            ))
        })
        .collect::<Result<Vec<_>, InnerXmlError>>()?;

    Ok(Element {
        name: decoder.decode(ele.name().as_ref())?.into_owned(),
        attrs,
        text: None,
        children: Vec::new(),
    })
}
