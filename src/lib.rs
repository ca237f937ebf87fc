// XML to configuration language translator
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

//! Translation of XML constant and dictionary declarations into a
//!   textual configuration language.
//!
//! The system is split into a pure core and a thin frontend:
//!
//!   - [`xml`] reads a source document into a [`doc::Document`];
//!   - [`translate`] walks that document,
//!       evaluating [postfix expressions](expr) against a
//!       [constant table](consts) and [rendering](render) each
//!       [`value::Value`] into the target syntax.
//!
//! The core performs no I/O;
//!   reading the source and writing the result is the job of the
//!   `cfgtrans` binary.

// We build docs for private items.
#![allow(rustdoc::private_intra_doc_links)]

pub mod global;

#[macro_use]
extern crate static_assertions;

pub mod consts;
pub mod diagnose;
pub mod doc;
pub mod expr;
pub mod ident;
pub mod render;
pub mod tpwrap;
pub mod translate;
pub mod value;
pub mod xml;
