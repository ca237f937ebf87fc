// Tests for postfix constant expressions
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

use super::*;
use crate::{
    diagnose::{PlainReporter, Reporter},
    value::{Dict, Value},
};

fn empty() -> ConstTable {
    ConstTable::new()
}

#[test]
fn single_literal() {
    assert_eq!(Ok(42), eval("42", &empty()));
    assert_eq!(Ok(-42), eval("-42", &empty()));
    assert_eq!(Ok(0), eval("-0", &empty()));
}

#[test]
fn subtraction_left_operand_pushed_first() {
    assert_eq!(Ok(7), eval("10 3 -", &empty()));
    assert_eq!(Ok(-7), eval("3 10 -", &empty()));
}

#[test]
fn addition_and_multiplication() {
    assert_eq!(Ok(5), eval("2 3 +", &empty()));
    assert_eq!(Ok(-6), eval("2 -3 *", &empty()));
}

#[test]
fn abs_of_negative() {
    assert_eq!(Ok(5), eval("-5 abs()", &empty()));
    assert_eq!(Ok(5), eval("5 abs()", &empty()));
}

#[test]
fn nested_operations_without_precedence() {
    // (2 + 3) * 4
    assert_eq!(Ok(20), eval("2 3 + 4 *", &empty()));
    // 2 + (3 * 4)
    assert_eq!(Ok(14), eval("2 3 4 * +", &empty()));
    // |1 - 10| * 2
    assert_eq!(Ok(18), eval("1 10 - abs() 2 *", &empty()));
}

#[test]
fn arbitrary_whitespace_between_tokens() {
    assert_eq!(Ok(3), eval("  1\n\t2   + ", &empty()));
}

#[test]
fn references_integer_constant() {
    let mut consts = ConstTable::new();
    consts.define("WIDTH", Value::Integer(5));

    assert_eq!(Ok(10), eval("WIDTH 2 *", &consts));
    assert_eq!(Ok(25), eval("WIDTH WIDTH *", &consts));
}

#[test]
fn operator_on_empty_stack() {
    assert_eq!(
        Err(ExprError::InsufficientOperands(Op::Add, 0)),
        eval("+", &empty()),
    );
}

#[test]
fn binary_operator_with_one_operand() {
    assert_eq!(
        Err(ExprError::InsufficientOperands(Op::Mul, 1)),
        eval("2 *", &empty()),
    );

    // A lone `-` is an operator, not a literal.
    assert_eq!(
        Err(ExprError::InsufficientOperands(Op::Sub, 1)),
        eval("2 -", &empty()),
    );
}

#[test]
fn abs_on_empty_stack() {
    assert_eq!(
        Err(ExprError::InsufficientOperands(Op::Abs, 0)),
        eval("abs()", &empty()),
    );
}

#[test]
fn undefined_name_is_unknown_token() {
    assert_eq!(
        Err(ExprError::UnknownToken("UNKNOWN_NAME".into())),
        eval("UNKNOWN_NAME", &empty()),
    );
}

#[test]
fn non_integer_constant_is_unknown_token() {
    let mut consts = ConstTable::new();
    consts.define("greeting", "hello".into());
    consts.define("table", Dict::new().into());

    assert_eq!(
        Err(ExprError::UnknownToken("greeting".into())),
        eval("1 greeting +", &consts),
    );

    assert_eq!(
        Err(ExprError::UnknownToken("table".into())),
        eval("table", &consts),
    );
}

#[test]
fn malformed_literals_are_unknown_tokens() {
    for tok in ["+5", "5a", "--5", "1.5", "abs", "ABS()"] {
        assert_eq!(
            Err(ExprError::UnknownToken(tok.into())),
            eval(tok, &empty()),
            "token `{tok}`",
        );
    }
}

#[test]
fn first_error_wins() {
    // The unknown token is encountered before the operator would be.
    assert_eq!(
        Err(ExprError::UnknownToken("nope".into())),
        eval("nope +", &empty()),
    );
}

#[test]
fn empty_expression_is_malformed() {
    assert_eq!(Err(ExprError::MalformedExpression(0)), eval("", &empty()));
    assert_eq!(
        Err(ExprError::MalformedExpression(0)),
        eval(" \n ", &empty())
    );
}

#[test]
fn leftover_operands_are_malformed() {
    assert_eq!(
        Err(ExprError::MalformedExpression(2)),
        eval("1 2", &empty()),
    );

    assert_eq!(
        Err(ExprError::MalformedExpression(2)),
        eval("1 2 3 +", &empty()),
    );
}

#[test]
fn balanced_expressions_yield_single_value() {
    // n literals followed by n-1 binary operators always balance.
    for n in 1..10usize {
        let expr = std::iter::repeat("1")
            .take(n)
            .chain(std::iter::repeat("+").take(n - 1))
            .collect::<Vec<_>>()
            .join(" ");

        assert_eq!(Ok(n as i64), eval(&expr, &empty()), "`{expr}`");
    }
}

#[test]
fn literal_out_of_range() {
    assert_eq!(
        Err(ExprError::IntegerOverflow("99999999999999999999".into())),
        eval("99999999999999999999", &empty()),
    );
}

#[test]
fn arithmetic_overflow() {
    assert_eq!(
        Err(ExprError::IntegerOverflow("*".into())),
        eval("9223372036854775807 2 *", &empty()),
    );

    assert_eq!(
        Err(ExprError::IntegerOverflow("abs()".into())),
        eval("-9223372036854775808 abs()", &empty()),
    );
}

#[test]
fn extremes_within_range() {
    assert_eq!(
        Ok(i64::MIN),
        eval("-9223372036854775808", &empty()),
    );

    assert_eq!(
        Ok(i64::MAX),
        eval("9223372036854775806 1 +", &empty()),
    );
}

#[test]
fn insufficient_operands_report() {
    let err = eval("2 +", &empty()).unwrap_err();

    assert_eq!(
        "error: insufficient operands for `+`\n  \
            note: `+` requires 2 operand(s), but only 1 available\n  \
            help: operators follow their operands in postfix notation, \
            e.g. `2 3 +`",
        PlainReporter::new().render(&err).to_string(),
    );
}
