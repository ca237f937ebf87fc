// Translation tracing
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

//! Tracing for translation.
//!
//! This provides human-readable traces on standard error for each
//!   declaration as it is resolved and each line as it is emitted.
//! These traces are provided automatically when `cfg(test)`,
//!   which means that they are automatically included in the output of any
//!   test failure.
//!
//! Outside of tests,
//!   this can be enabled at build-time using the `translate-trace-stderr`
//!   feature flag
//!     (`cargo build --features translate-trace-stderr`).
//!
//! _These traces are not meant to be machine-readable!_
//! Do not try to use the human-readable traces in that way since the format
//!   is subject to change without notice.

use super::NameKind;
use crate::value::Value;

pub trait TranslateTrace: Default {
    /// Trace a declaration whose value has been resolved.
    ///
    /// There is no means to return an error and a failure to output the
    ///   trace should not interrupt processing.
    fn trace_resolved(&mut self, kind: NameKind, name: &str, value: &Value);

    /// Trace a line that has been emitted into the output.
    fn trace_emit(&mut self, line: &str);

    /// Trace the error that aborted translation.
    fn trace_abort(&mut self, err: &super::TranslateError);
}

/// Perform no tracing.
///
/// This should be used by default for non-test builds.
#[derive(Debug, PartialEq, Default)]
pub struct VoidTrace;

impl TranslateTrace for VoidTrace {
    fn trace_resolved(&mut self, _kind: NameKind, _name: &str, _value: &Value) {
        // Do nothing at all.
    }

    fn trace_emit(&mut self, _line: &str) {
        // Do nothing at all.
    }

    fn trace_abort(&mut self, _err: &super::TranslateError) {
        // Do nothing at all.
    }
}

/// Human-readable [`TranslateTrace`].
///
/// See [module-level](self) documentation for more information.
#[derive(Debug, PartialEq, Default)]
pub struct HumanReadableTrace;

impl HumanReadableTrace {
    fn note_cfg() {
        #[allow(unused_variables)]
        let cfg = ""; // so that this compiles without matching cfg
        #[cfg(feature = "translate-trace-stderr")]
        #[allow(unused_variables)]
        let cfg = "feature = \"translate-trace-stderr\"";
        #[cfg(test)] // takes precedence if both are set
        let cfg = "test";
        eprint!(
            "= note: this trace was output as a debugging aid \
                because `cfg({cfg})`.\n\n",
        );
    }
}

impl TranslateTrace for HumanReadableTrace {
    fn trace_resolved(&mut self, kind: NameKind, name: &str, value: &Value) {
        eprint!(
            "\
[translate] resolved {kind} `{name}`
|  |  {value:?}
|\n",
        );
    }

    fn trace_emit(&mut self, line: &str) {
        eprint!(
            "\
[translate] emit
|  |  {line:?}\n",
        );
        Self::note_cfg();
    }

    fn trace_abort(&mut self, err: &super::TranslateError) {
        eprint!(
            "\
[translate] !!! abort: {err}.
|  |  {err:?}\n",
        );
        Self::note_cfg();
    }
}

/// Trace used by [`translate`](super::translate).
#[cfg(any(test, feature = "translate-trace-stderr"))]
pub type DefaultTrace = HumanReadableTrace;

/// Trace used by [`translate`](super::translate).
#[cfg(not(any(test, feature = "translate-trace-stderr")))]
pub type DefaultTrace = VoidTrace;
