// Diagnostic system
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

//! Diagnostic system for error reporting.
//!
//! This system is heavily motivated by Rust's.
//! Source documents are small configuration files and the translator does
//!   not track source locations,
//!     so a diagnostic is a message followed by a series of
//!     [`Annotation`]s describing the circumstances of the failure and how
//!     the user may go about resolving it:
//!
//! ```text
//! error: insufficient operands for `+`
//!   note: `+` requires 2 operand(s), but only 1 available
//!   help: operators follow their operands in postfix notation, e.g. `2 3 +`
//! ```
//!
//! Errors are rendered into a [`Report`] by a [`Reporter`].

mod report;

pub use report::{PlainReporter, Report, Reporter};

use std::{borrow::Cow, error::Error, fmt, fmt::Display};

/// Diagnostic report.
///
/// This describes an error condition or other special event using a series
///   of [`Annotation`]s that supplement the [`Display`] message of the
///   error itself.
pub trait Diagnostic: Error + Sized {
    /// Produce a series of [`Annotation`]s describing the circumstances of
    ///   the diagnostic event.
    fn describe(&self) -> Vec<Annotation>;
}

/// Diagnostic severity level.
///
/// Lower levels are more severe
///   (e.g. level 1 is the worst).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
#[repr(u8)]
pub enum Level {
    /// A user-resolvable error.
    ///
    /// These represent errors resulting from the user's input.
    Error = 1,

    /// Useful information that supplements other messages.
    Note,

    /// Additional advice to the user that may help in debugging or fixing a
    ///   problem.
    ///
    /// Unlike other severity levels which provide concrete factual
    ///   information,
    ///     help messages may be more speculative.
    Help,
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A label associated with an [`Annotation`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Label<'a>(Cow<'a, str>);

impl<'a> Display for Label<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<'a> From<String> for Label<'a> {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

impl<'a> From<&'a str> for Label<'a> {
    fn from(s: &'a str) -> Self {
        Self(Cow::Borrowed(s))
    }
}

/// A label with an associated severity level.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Annotation<'l>(Level, Label<'l>);

impl<'l> Annotation<'l> {
    /// Supplemental information providing context for the error,
    ///   such as the declaration being processed when it occurred.
    pub fn note<L: Into<Label<'l>>>(label: L) -> Self {
        Self(Level::Note, label.into())
    }

    /// Additional information that may be used to help the user in
    ///   fixing a diagnostic.
    pub fn help<L: Into<Label<'l>>>(label: L) -> Self {
        Self(Level::Help, label.into())
    }
}

impl<'l> From<Annotation<'l>> for Vec<Annotation<'l>> {
    fn from(x: Annotation<'l>) -> Self {
        vec![x]
    }
}

impl<'l> Display for Annotation<'l> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.0, self.1)
    }
}
