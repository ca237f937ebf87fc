// Document translation
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

//! Translation of a [`Document`] into the output language.
//!
//! Translation is a single top-to-bottom pass:
//!
//!   1. Each constant is resolved,
//!        its name validated,
//!        and its value defined in a fresh [`ConstTable`] so that it is
//!        visible to the expressions of every constant after it.
//!      It is emitted as `name is <value>;`.
//!   2. Each dictionary is resolved against the complete table,
//!        its name validated,
//!        and emitted as `name -> <value>`.
//!   3. The emitted lines are joined with newlines.
//!
//! Translation is all-or-nothing:
//!   the first error aborts the pass and no output is produced.
//!
//! ```
//! use cfgtrans::doc::{ConstDecl, DictDecl, Document, EntryDecl, ValueNode};
//! use cfgtrans::translate::translate;
//!
//! let doc = Document {
//!     constants: vec![
//!         ConstDecl::new("width", ValueNode::Number(Some("5".into()))),
//!         ConstDecl::new(
//!             "area",
//!             ValueNode::Expression(Some("width width *".into())),
//!         ),
//!     ],
//!     dictionaries: vec![DictDecl::new(
//!         "box",
//!         vec![EntryDecl::new("label", ValueNode::String(Some("sq".into())))],
//!     )],
//! };
//!
//! assert_eq!(
//!     Ok("width is 5;\narea is 25;\nbox -> {\nlabel -> @\"sq\".\n}".into()),
//!     translate(&doc),
//! );
//! ```

mod error;
mod trace;

pub use error::{ErrorCategory, NameKind, StructureError, TranslateError};
pub use trace::{DefaultTrace, HumanReadableTrace, TranslateTrace, VoidTrace};

use crate::{
    consts::ConstTable,
    doc::{Document, EntryDecl, ValueNode},
    expr, global,
    ident::is_ident,
    render::render,
    value::{Dict, Value},
};

/// Translate `doc` into the output language,
///   tracing with [`DefaultTrace`].
///
/// See the [module-level documentation](self) for more information.
pub fn translate(doc: &Document) -> Result<String, TranslateError> {
    translate_with(doc, &mut DefaultTrace::default())
}

/// Translate `doc` into the output language,
///   reporting progress to `trace`.
pub fn translate_with<T: TranslateTrace>(
    doc: &Document,
    trace: &mut T,
) -> Result<String, TranslateError> {
    let mut pass = Pass {
        consts: ConstTable::new(),
        lines: Vec::with_capacity(doc.constants.len() + doc.dictionaries.len()),
        trace,
    };

    match pass.run(doc) {
        Ok(()) => Ok(pass.lines.join("\n")),
        Err(e) => {
            pass.trace.trace_abort(&e);
            Err(e)
        }
    }
}

/// State of a single translation.
///
/// This exists only for the duration of one call to [`translate_with`].
struct Pass<'t, T: TranslateTrace> {
    consts: ConstTable,
    lines: Vec<String>,
    trace: &'t mut T,
}

impl<'t, T: TranslateTrace> Pass<'t, T> {
    fn run(&mut self, doc: &Document) -> Result<(), TranslateError> {
        for (i, decl) in doc.constants.iter().enumerate() {
            let name = decl
                .name
                .as_deref()
                .ok_or(StructureError::MissingConstName(i))?;

            let node = decl
                .value
                .as_ref()
                .ok_or_else(|| StructureError::MissingConstValue(name.into()))?;

            let value = resolve(node, &self.consts, name)?;
            validate_name(NameKind::Constant, name)?;

            self.trace.trace_resolved(NameKind::Constant, name, &value);

            let line = format!(
                "{name}{}{}{}",
                global::CONST_ASSIGN,
                render(&value)?,
                global::CONST_TERM,
            );

            self.consts.define(name, value);
            self.emit(line);
        }

        for (i, decl) in doc.dictionaries.iter().enumerate() {
            let name = decl
                .name
                .as_deref()
                .ok_or(StructureError::MissingDictName(i))?;

            let value = Value::Dictionary(resolve_entries(
                &decl.entries,
                &self.consts,
                name,
            )?);

            validate_name(NameKind::Dictionary, name)?;

            self.trace.trace_resolved(NameKind::Dictionary, name, &value);

            let line = format!("{name}{}{}", global::DICT_ARROW, render(&value)?);
            self.emit(line);
        }

        Ok(())
    }

    fn emit(&mut self, line: String) {
        self.trace.trace_emit(&line);
        self.lines.push(line);
    }
}

/// Resolve a value node into a [`Value`].
///
/// `path` names the declaration owning the node and is used only for
///   error reporting.
fn resolve(
    node: &ValueNode,
    consts: &ConstTable,
    path: &str,
) -> Result<Value, TranslateError> {
    match node {
        ValueNode::Number(Some(text)) => text
            .trim()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| TranslateError::InvalidNumber(text.clone())),

        ValueNode::Number(None) => {
            Err(StructureError::MissingNumber(path.into()).into())
        }

        ValueNode::String(text) => {
            Ok(Value::Text(text.clone().unwrap_or_default()))
        }

        ValueNode::Dictionary(entries) => {
            resolve_entries(entries, consts, path).map(Value::Dictionary)
        }

        ValueNode::Expression(text) => {
            Ok(Value::Integer(expr::eval(text.as_deref().unwrap_or(""), consts)?))
        }

        ValueNode::Unsupported(kind) => {
            Err(TranslateError::UnsupportedValueKind(kind.clone()))
        }
    }
}

/// Resolve each entry of a dictionary,
///   retaining their order.
///
/// Keys are not validated here;
///   they are validated at every depth when the dictionary is rendered.
fn resolve_entries(
    entries: &[EntryDecl],
    consts: &ConstTable,
    path: &str,
) -> Result<Dict, TranslateError> {
    let mut dict = Dict::new();

    for entry in entries {
        let key = entry
            .name
            .as_deref()
            .ok_or_else(|| StructureError::MissingEntryName(path.into()))?;

        let subpath = format!("{path}.{key}");

        let node = entry
            .value
            .as_ref()
            .ok_or_else(|| StructureError::MissingEntryValue(subpath.clone()))?;

        dict.insert(key, resolve(node, consts, &subpath)?);
    }

    Ok(dict)
}

fn validate_name(kind: NameKind, name: &str) -> Result<(), TranslateError> {
    if is_ident(name) {
        Ok(())
    } else {
        Err(TranslateError::InvalidName(kind, name.into()))
    }
}
