// XML frontend
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

//! Reading of XML source documents.
//!
//! A source document looks like this:
//!
//! ```xml
//! <config>
//!   <constant name="width">
//!     <value type="number">5</value>
//!   </constant>
//!   <constant name="area">
//!     <value type="expression">width width *</value>
//!   </constant>
//!
//!   <dictionary name="server">
//!     <entry name="host"><value type="string">localhost</value></entry>
//!     <entry name="limits">
//!       <value type="dictionary">
//!         <entry name="max"><value type="number">10</value></entry>
//!       </value>
//!     </entry>
//!   </dictionary>
//! </config>
//! ```
//!
//! The name of the root element is not significant.
//! Every `constant` and every `dictionary` element beneath the root is a
//!   declaration,
//!     no matter how deeply it is nested,
//!     and declarations are read in document order.
//! A declaration's value is its first `value` child;
//!   `entry` children of a `dictionary` are its entries.
//! The `type` attribute of a `value` determines how its content is
//!   interpreted
//!     (see [`ValueNode::from_kind`]).
//!
//! This frontend does not check that declarations are complete:
//!   a missing name or value is carried into the [`Document`] as [`None`]
//!   for the [translator](crate::translate) to report.

mod tree;

pub use tree::{parse, Element};

use crate::{
    diagnose::{Annotation, Diagnostic},
    doc::{ConstDecl, DictDecl, Document, EntryDecl, ValueNode},
    tpwrap::quick_xml::Error as XmlError,
};
use std::{
    error::Error,
    fmt::{self, Display},
    io::BufRead,
};

/// Read an XML source document into a [`Document`].
///
/// ```
/// use cfgtrans::doc::{ConstDecl, ValueNode};
/// use cfgtrans::xml::read_document;
///
/// let src = br#"<config>
///     <constant name="n"><value type="number">5</value></constant>
/// </config>"#;
///
/// let doc = read_document(&src[..]).unwrap();
///
/// assert_eq!(
///     vec![ConstDecl::new("n", ValueNode::Number(Some("5".into())))],
///     doc.constants,
/// );
/// ```
pub fn read_document<B: BufRead>(src: B) -> Result<Document, ReadError> {
    parse(src).map(|root| lower(&root))
}

/// Lower an element tree into declarations.
pub fn lower(root: &Element) -> Document {
    let constants = root
        .descendants_named("constant")
        .into_iter()
        .map(|ele| ConstDecl {
            name: ele.attr("name").map(String::from),
            value: ele.child("value").map(value_node),
        })
        .collect();

    let dictionaries = root
        .descendants_named("dictionary")
        .into_iter()
        .map(|ele| DictDecl {
            name: ele.attr("name").map(String::from),
            entries: entries(ele),
        })
        .collect();

    Document {
        constants,
        dictionaries,
    }
}

fn entries(ele: &Element) -> Vec<EntryDecl> {
    ele.children_named("entry")
        .map(|entry| EntryDecl {
            name: entry.attr("name").map(String::from),
            value: entry.child("value").map(value_node),
        })
        .collect()
}

fn value_node(ele: &Element) -> ValueNode {
    ValueNode::from_kind(ele.attr("type"), ele.text.clone(), entries(ele))
}

/// Error reading an XML source document.
#[derive(Debug, PartialEq)]
pub enum ReadError {
    /// The document is not well-formed XML.
    Xml(XmlError),

    /// The document contains no root element.
    MissingRoot,
}

impl Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Xml(e) => Display::fmt(e, f),
            Self::MissingRoot => write!(f, "document has no root element"),
        }
    }
}

impl Error for ReadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Xml(e) => Some(e),
            Self::MissingRoot => None,
        }
    }
}

impl From<XmlError> for ReadError {
    fn from(e: XmlError) -> Self {
        Self::Xml(e)
    }
}

impl Diagnostic for ReadError {
    fn describe(&self) -> Vec<Annotation> {
        match self {
            Self::Xml(_) => {
                Annotation::help("the source document must be well-formed XML")
                    .into()
            }
            Self::MissingRoot => Annotation::help(
                "declarations must be contained within a root element, \
                   such as `<config>`",
            )
            .into(),
        }
    }
}
