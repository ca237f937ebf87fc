// Source document model
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

//! Declarations of a source document.
//!
//! A [`Document`] is an ordered sequence of constant declarations followed
//!   by an ordered sequence of dictionary declarations.
//! This is the input to the [translator](crate::translate);
//!   it is produced by a frontend such as [`crate::xml`] or constructed
//!   directly.
//!
//! The model is deliberately permissive:
//!   names and value nodes are optional and value kinds are not
//!   restricted,
//!     so that a frontend can represent any document it reads and leave
//!     the translator to report what is wrong with it.
//! Nothing here is validated or evaluated.

/// A source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub constants: Vec<ConstDecl>,
    pub dictionaries: Vec<DictDecl>,
}

/// Declaration of a named constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstDecl {
    pub name: Option<String>,
    pub value: Option<ValueNode>,
}

impl ConstDecl {
    pub fn new<N: Into<String>>(name: N, value: ValueNode) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value),
        }
    }
}

/// Declaration of a top-level named dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictDecl {
    pub name: Option<String>,
    pub entries: Vec<EntryDecl>,
}

impl DictDecl {
    pub fn new<N: Into<String>>(name: N, entries: Vec<EntryDecl>) -> Self {
        Self {
            name: Some(name.into()),
            entries,
        }
    }
}

/// A keyed entry of a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDecl {
    pub name: Option<String>,
    pub value: Option<ValueNode>,
}

impl EntryDecl {
    pub fn new<N: Into<String>>(name: N, value: ValueNode) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value),
        }
    }
}

/// An unresolved value as it appears in the source document.
///
/// Text is raw:
///   a [`ValueNode::Number`] has not been parsed and a
///   [`ValueNode::Expression`] has not been evaluated.
/// [`None`] indicates that the node has no text at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueNode {
    /// Integer literal (kind `number`).
    Number(Option<String>),

    /// Text literal (kind `string`).
    String(Option<String>),

    /// Nested dictionary (kind `dictionary`).
    Dictionary(Vec<EntryDecl>),

    /// Postfix constant expression (kind `expression`).
    Expression(Option<String>),

    /// A node of an unrecognized kind,
    ///   or one that declares no kind at all.
    Unsupported(Option<String>),
}

impl ValueNode {
    /// Source name of each supported kind,
    ///   for use in diagnostics.
    pub const KINDS: [&'static str; 4] =
        ["number", "string", "dictionary", "expression"];

    /// Node of the given source `kind`.
    ///
    /// `text` is the node's text and `entries` its dictionary entries;
    ///   each is used only by the kinds to which it applies.
    pub fn from_kind(
        kind: Option<&str>,
        text: Option<String>,
        entries: Vec<EntryDecl>,
    ) -> Self {
        match kind {
            Some("number") => Self::Number(text),
            Some("string") => Self::String(text),
            Some("dictionary") => Self::Dictionary(entries),
            Some("expression") => Self::Expression(text),
            other => Self::Unsupported(other.map(String::from)),
        }
    }
}
