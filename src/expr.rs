// Postfix constant expressions
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

//! Evaluation of constant expressions in postfix notation.
//!
//! An expression is a whitespace-delimited sequence of tokens,
//!   each of which is one of:
//!
//!   - an integer literal with an optional leading `-`
//!       (`5`, `-12`);
//!   - one of the binary operators `+`, `-`, or `*`;
//!   - the unary function `abs()`; or
//!   - the name of an integer constant defined earlier in the document.
//!
//! Operators follow their operands,
//!   so no precedence rules are needed;
//!     tokens are evaluated left-to-right against an explicit operand
//!     stack in a single pass.
//! A binary operator pops its right operand and then its left,
//!   so that `10 3 -` is `7`.
//!
//! ```
//! use cfgtrans::{consts::ConstTable, expr::eval, value::Value};
//!
//! let mut consts = ConstTable::new();
//! consts.define("WIDTH", Value::Integer(5));
//!
//! assert_eq!(Ok(7), eval("10 3 -", &consts));
//! assert_eq!(Ok(5), eval("-5 abs()", &consts));
//! assert_eq!(Ok(10), eval("WIDTH 2 *", &consts));
//! ```
//!
//! Arithmetic is checked:
//!   a result that does not fit in an [`i64`] is an
//!   [`ExprError::IntegerOverflow`] rather than a silent wraparound.

mod error;

pub use error::ExprError;

use crate::{consts::ConstTable, global};
use std::fmt::Display;

/// Operators and functions recognized by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Abs,
}

impl Op {
    /// Recognize `tok` as an operator,
    ///   if it is one.
    pub fn from_token(tok: &str) -> Option<Self> {
        match tok {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "abs()" => Some(Self::Abs),
            _ => None,
        }
    }

    /// Number of operands consumed from the stack.
    pub fn arity(self) -> usize {
        match self {
            Self::Add | Self::Sub | Self::Mul => 2,
            Self::Abs => 1,
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Abs => write!(f, "abs()"),
        }
    }
}

/// Evaluate the postfix expression `expr`,
///   resolving names against `consts`.
///
/// Only [`Integer`](crate::value::Value::Integer) constants may be
///   referenced;
///     a reference to any other constant is treated the same as a
///     reference to an undefined one.
///
/// Errors
/// ======
/// - [`ExprError::InsufficientOperands`] if an operator is applied to a
///     stack holding fewer operands than its [arity](Op::arity).
/// - [`ExprError::UnknownToken`] if a token is neither a literal,
///     an operator,
///     nor the name of an integer constant.
/// - [`ExprError::IntegerOverflow`] if a literal or intermediate result
///     does not fit in an [`i64`].
/// - [`ExprError::MalformedExpression`] if evaluation does not leave
///     exactly one value on the stack.
pub fn eval(expr: &str, consts: &ConstTable) -> Result<i64, ExprError> {
    let mut stack: Vec<i64> = Vec::with_capacity(global::EXPR_STACK_PREALLOC);

    for tok in expr.split_whitespace() {
        if is_literal(tok) {
            let n = tok
                .parse::<i64>()
                .map_err(|_| ExprError::IntegerOverflow(tok.into()))?;

            stack.push(n);
            continue;
        }

        if let Some(op) = Op::from_token(tok) {
            let result = apply(op, &mut stack)?;
            stack.push(result);
            continue;
        }

        match consts.lookup(tok).and_then(|value| value.as_integer()) {
            Some(n) => stack.push(n),
            None => return Err(ExprError::UnknownToken(tok.into())),
        }
    }

    match stack[..] {
        [result] => Ok(result),
        _ => Err(ExprError::MalformedExpression(stack.len())),
    }
}

/// Whether `tok` is an integer literal:
///   one or more ASCII digits with an optional leading `-`.
///
/// A lone `-` is the subtraction operator.
fn is_literal(tok: &str) -> bool {
    let digits = tok.strip_prefix('-').unwrap_or(tok);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Pop the operands of `op` from `stack` and compute its result.
///
/// For binary operators the top of the stack is the right-hand operand.
fn apply(op: Op, stack: &mut Vec<i64>) -> Result<i64, ExprError> {
    if stack.len() < op.arity() {
        return Err(ExprError::InsufficientOperands(op, stack.len()));
    }

    let overflow = || ExprError::IntegerOverflow(op.to_string());

    // Arity was checked above.
    let mut pop = || stack.pop().unwrap_or_default();

    match op {
        Op::Abs => pop().checked_abs().ok_or_else(overflow),
        Op::Add | Op::Sub | Op::Mul => {
            let b = pop();
            let a = pop();

            match op {
                Op::Add => a.checked_add(b),
                Op::Sub => a.checked_sub(b),
                _ => a.checked_mul(b),
            }
            .ok_or_else(overflow)
        }
    }
}

#[cfg(test)]
mod test;
