// quick_xml wrappers
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

use std::fmt::Display;

/// Wrapped error type.
pub type InnerXmlError = quick_xml::Error;

/// Thin wrapper around [`quick_xml::Error`] to implement [`PartialEq`]
///   and to retain the byte offset at which reading failed.
///
/// Two errors are equal only if they occurred at the same offset and
///   render the same message;
///     [`quick_xml::Error`] does not implement [`PartialEq`],
///     and without this the trait could not be derived on any error type
///     containing it.
#[derive(Debug)]
pub struct Error {
    inner: InnerXmlError,
    offset: usize,
}

impl Error {
    pub fn new(inner: InnerXmlError, offset: usize) -> Self {
        Self { inner, offset }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
            && self.inner.to_string() == other.inner.to_string()
    }
}

impl Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        // NB: If we eventually use `source` to display a hierarchy of
        //   errors, then we likely do not want the duplication here.
        write!(fmt, "{} at byte {}", self.inner, self.offset)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}
