// Diagnostic report rendering
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

//! Rendering of diagnostic reports.
//!
//! See the [parent module](super) for more information.

use super::{Annotation, Diagnostic, Level};
use std::fmt::{self, Display};

pub trait Reporter {
    /// Render diagnostic report.
    ///
    /// The provided [`Report`] implements [`Display`].
    ///
    /// Please be mindful of where this report is being rendered to
    ///   (via [`Display`]).
    /// If rendering to a standard stream,
    ///   it is a good idea to render the entire report to a string before
    ///   writing it,
    ///     otherwise the report may become interleaved with the output of
    ///     other concurrent processes.
    ///
    /// This method _does not return [`Result`]_ and should never fail.
    fn render<'d, D: Diagnostic>(&self, diagnostic: &'d D) -> Report<'d, D>;
}

/// Render diagnostic reports as plain text,
///   one annotation per line beneath the error message.
#[derive(Debug, Default)]
pub struct PlainReporter;

impl PlainReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for PlainReporter {
    fn render<'d, D: Diagnostic>(&self, diagnostic: &'d D) -> Report<'d, D> {
        Report::new(diagnostic)
    }
}

/// A rendered [`Diagnostic`].
///
/// The message is the [`Display`] of the diagnostic itself,
///   reported at [`Level::Error`];
///     each of its [`Annotation`]s follows on its own indented line.
#[derive(Debug)]
pub struct Report<'d, D: Diagnostic> {
    msg: &'d D,
    annotations: Vec<Annotation<'d>>,
}

impl<'d, D: Diagnostic> Report<'d, D> {
    fn new(diagnostic: &'d D) -> Self {
        Self {
            msg: diagnostic,
            annotations: diagnostic.describe(),
        }
    }
}

impl<'d, D: Diagnostic> Display for Report<'d, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Level::Error, self.msg)?;

        self.annotations
            .iter()
            .try_for_each(|annotation| write!(f, "\n  {annotation}"))
    }
}
