// Postfix expression errors
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

//! Errors while evaluating postfix expressions.

use super::Op;
use crate::diagnose::{Annotation, Diagnostic};
use std::{
    error::Error,
    fmt::{self, Display},
};

/// Error during expression evaluation.
///
/// Errors own the offending token text rather than borrowing from the
///   expression so that they may outlive the source document.
#[derive(Debug, PartialEq, Eq)]
pub enum ExprError {
    /// An operator was applied to a stack holding too few operands.
    ///
    /// The second value is the number of operands that were available.
    InsufficientOperands(Op, usize),

    /// A token is neither a literal,
    ///   an operator,
    ///   nor the name of a previously defined integer constant.
    UnknownToken(String),

    /// Evaluation completed with a stack depth other than one.
    ///
    /// The value is the final stack depth;
    ///   `0` indicates an empty expression or one that consumed all of
    ///   its operands.
    MalformedExpression(usize),

    /// A literal or the result of the given operator does not fit in an
    ///   [`i64`].
    IntegerOverflow(String),
}

impl Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ExprError::*;

        match self {
            InsufficientOperands(op, _) => {
                write!(f, "insufficient operands for `{op}`")
            }

            UnknownToken(tok) => {
                write!(f, "unknown token `{tok}` in expression")
            }

            MalformedExpression(_) => write!(f, "malformed expression"),

            IntegerOverflow(tok) => write!(f, "integer overflow at `{tok}`"),
        }
    }
}

impl Error for ExprError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl Diagnostic for ExprError {
    fn describe(&self) -> Vec<Annotation> {
        use ExprError::*;

        match self {
            InsufficientOperands(op, avail) => vec![
                Annotation::note(format!(
                    "`{op}` requires {} operand(s), but only {avail} available",
                    op.arity(),
                )),
                Annotation::help(
                    "operators follow their operands in postfix notation, \
                       e.g. `2 3 +`",
                ),
            ],

            UnknownToken(_) => Annotation::help(
                "a token must be an integer, `+`, `-`, `*`, `abs()`, \
                   or the name of an integer constant defined earlier in \
                   the document",
            )
            .into(),

            MalformedExpression(0) => Annotation::note(
                "the expression produced no value",
            )
            .into(),

            MalformedExpression(n) => vec![
                Annotation::note(format!(
                    "the expression left {n} values on the stack"
                )),
                Annotation::help(
                    "an expression must reduce to exactly one value; \
                       is an operator missing?",
                ),
            ],

            IntegerOverflow(_) => Annotation::note(
                "values must be between -9223372036854775808 and \
                   9223372036854775807",
            )
            .into(),
        }
    }
}
