// Translation errors
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

//! Errors while translating a [`Document`](crate::doc::Document).

use crate::{
    diagnose::{Annotation, Diagnostic},
    doc::ValueNode,
    expr::ExprError,
    render::RenderError,
};
use std::{
    error::Error,
    fmt::{self, Display},
};

/// Error during translation.
///
/// Translation stops at the first error,
///   so there is only ever one.
#[derive(Debug, PartialEq, Eq)]
pub enum TranslateError {
    /// The document is missing a required part of a declaration.
    Structure(StructureError),

    /// A constant expression could not be evaluated.
    Expr(ExprError),

    /// A resolved value could not be rendered.
    Render(RenderError),

    /// A constant or dictionary name is not a valid identifier.
    InvalidName(NameKind, String),

    /// A value node declares a kind other than those of
    ///   [`ValueNode::KINDS`],
    ///     or declares no kind at all.
    UnsupportedValueKind(Option<String>),

    /// The text of a `number` node is not an integer.
    InvalidNumber(String),
}

impl TranslateError {
    /// Category of this error.
    ///
    /// Categories flatten the layered error types so that a caller can
    ///   tell what went wrong without matching on each layer.
    pub fn category(&self) -> ErrorCategory {
        use ErrorCategory as C;

        match self {
            Self::Structure(_) => C::Structure,
            Self::Expr(ExprError::InsufficientOperands(..)) => {
                C::InsufficientOperands
            }
            Self::Expr(ExprError::UnknownToken(_)) => C::UnknownToken,
            Self::Expr(ExprError::MalformedExpression(_)) => {
                C::MalformedExpression
            }
            Self::Expr(ExprError::IntegerOverflow(_)) => C::Overflow,
            Self::Render(RenderError::InvalidKey(_)) => C::InvalidKey,
            Self::InvalidName(..) => C::InvalidKey,
            Self::UnsupportedValueKind(_) => C::UnsupportedValueKind,
            Self::InvalidNumber(_) => C::InvalidNumber,
        }
    }
}

/// Coarse classification of a [`TranslateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Structure,
    InsufficientOperands,
    UnknownToken,
    MalformedExpression,
    InvalidKey,
    UnsupportedValueKind,
    InvalidNumber,
    Overflow,
}

/// What a validated name identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Constant,
    Dictionary,
}

impl Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Constant => write!(f, "constant"),
            Self::Dictionary => write!(f, "dictionary"),
        }
    }
}

impl Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use TranslateError::*;

        match self {
            Structure(e) => Display::fmt(e, f),
            Expr(e) => Display::fmt(e, f),
            Render(e) => Display::fmt(e, f),

            InvalidName(kind, name) => {
                write!(f, "invalid {kind} name `{name}`")
            }

            UnsupportedValueKind(Some(kind)) => {
                write!(f, "unsupported value type `{kind}`")
            }
            UnsupportedValueKind(None) => write!(f, "value has no type"),

            InvalidNumber(text) => write!(f, "invalid number `{text}`"),
        }
    }
}

impl Error for TranslateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use TranslateError::*;

        match self {
            Structure(e) => Some(e),
            Expr(e) => Some(e),
            Render(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StructureError> for TranslateError {
    fn from(e: StructureError) -> Self {
        Self::Structure(e)
    }
}

impl From<ExprError> for TranslateError {
    fn from(e: ExprError) -> Self {
        Self::Expr(e)
    }
}

impl From<RenderError> for TranslateError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

impl Diagnostic for TranslateError {
    fn describe(&self) -> Vec<Annotation> {
        use TranslateError::*;

        match self {
            Structure(e) => e.describe(),
            Expr(e) => e.describe(),
            Render(e) => e.describe(),

            InvalidName(..) => Annotation::help(
                "names must begin with a letter and contain only letters \
                   and digits",
            )
            .into(),

            UnsupportedValueKind(_) => Annotation::help(format!(
                "`type` must be one of {}",
                ValueNode::KINDS
                    .iter()
                    .map(|kind| format!("`{kind}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            ))
            .into(),

            InvalidNumber(_) => vec![
                Annotation::note("numbers must be integers"),
                Annotation::help(
                    "use a `string` value for text or an `expression` \
                       to compute a number",
                ),
            ],
        }
    }
}

/// A required part of a declaration is absent.
///
/// Paths are the names of enclosing declarations joined with `.`,
///   down to and including the declaration missing the part,
///   where known.
#[derive(Debug, PartialEq, Eq)]
pub enum StructureError {
    /// A constant declaration has no name.
    ///
    /// The value is the zero-based position of the declaration among all
    ///   constants in the document.
    MissingConstName(usize),

    /// The named constant has no value.
    MissingConstValue(String),

    /// A dictionary declaration has no name.
    ///
    /// The value is the zero-based position of the declaration among all
    ///   dictionaries in the document.
    MissingDictName(usize),

    /// A dictionary entry has no name.
    ///
    /// The value is the path of the dictionary containing the entry.
    MissingEntryName(String),

    /// A dictionary entry has no value.
    MissingEntryValue(String),

    /// A `number` value has no text.
    MissingNumber(String),
}

impl Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use StructureError::*;

        match self {
            MissingConstName(i) => {
                write!(f, "constant #{} is missing a name", i + 1)
            }
            MissingConstValue(name) => {
                write!(f, "constant `{name}` is missing a value")
            }
            MissingDictName(i) => {
                write!(f, "dictionary #{} is missing a name", i + 1)
            }
            MissingEntryName(path) => {
                write!(f, "entry of `{path}` is missing a name")
            }
            MissingEntryValue(path) => {
                write!(f, "entry `{path}` is missing a value")
            }
            MissingNumber(path) => {
                write!(f, "number `{path}` is missing its digits")
            }
        }
    }
}

impl Error for StructureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl Diagnostic for StructureError {
    fn describe(&self) -> Vec<Annotation> {
        use StructureError::*;

        match self {
            MissingConstName(_) | MissingDictName(_) | MissingEntryName(_) => {
                Annotation::help("provide a `name` attribute").into()
            }

            MissingConstValue(_) | MissingEntryValue(_) => {
                Annotation::help("provide a `value` element").into()
            }

            MissingNumber(_) => {
                Annotation::help("provide an integer as the value's text")
                    .into()
            }
        }
    }
}
