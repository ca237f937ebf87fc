// Rendering of values into the output language
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

//! Literal syntax of the output language.
//!
//! Each [`Value`] has a literal representation:
//!
//! | Value                | Literal                         |
//! |----------------------|---------------------------------|
//! | `Integer(-5)`        | `-5`                            |
//! | `Text("x")`          | `@"x"`                          |
//! | `Dictionary{a: 1}`   | `{`, `a -> 1.`, `}` (one per line) |
//!
//! Text is emitted verbatim between its delimiters.
//! Dictionary keys must be [identifiers](crate::ident) at every level of
//!   nesting;
//!     a key is validated immediately before its entry is rendered.

use crate::{
    diagnose::{Annotation, Diagnostic},
    global,
    ident::is_ident,
    value::{Dict, Value},
};
use std::{
    error::Error,
    fmt::{self, Display},
};

/// Render `value` as a literal of the output language.
///
/// ```
/// use cfgtrans::{render::render, value::{Dict, Value}};
///
/// let dict: Dict = [("a", Value::Integer(1)), ("b", "x".into())]
///     .into_iter()
///     .collect();
///
/// assert_eq!(
///     Ok("{\na -> 1.\nb -> @\"x\".\n}".to_string()),
///     render(&dict.into()),
/// );
/// ```
///
/// Errors
/// ======
/// - [`RenderError::InvalidKey`] if any dictionary key at any depth is not
///     an identifier.
///   Nothing is rendered in that case.
pub fn render(value: &Value) -> Result<String, RenderError> {
    let mut dest = String::new();
    render_into(value, &mut dest)?;

    Ok(dest)
}

/// Render `value` onto the end of `dest`.
///
/// On error,
///   `dest` may contain a partial rendering;
///     [`render`] discards it.
pub fn render_into(value: &Value, dest: &mut String) -> Result<(), RenderError> {
    match value {
        Value::Integer(n) => dest.push_str(&n.to_string()),

        Value::Text(s) => {
            dest.push_str(global::TEXT_OPEN);
            dest.push_str(s);
            dest.push_str(global::TEXT_CLOSE);
        }

        Value::Dictionary(dict) => render_dict(dict, dest)?,
    }

    Ok(())
}

fn render_dict(dict: &Dict, dest: &mut String) -> Result<(), RenderError> {
    dest.push_str(global::DICT_OPEN);
    dest.push('\n');

    for (key, value) in dict.iter() {
        if !is_ident(key) {
            return Err(RenderError::InvalidKey(key.into()));
        }

        dest.push_str(key);
        dest.push_str(global::DICT_ARROW);
        render_into(value, dest)?;
        dest.push_str(global::ENTRY_TERM);
        dest.push('\n');
    }

    dest.push_str(global::DICT_CLOSE);

    Ok(())
}

/// Error while rendering a [`Value`].
#[derive(Debug, PartialEq, Eq)]
pub enum RenderError {
    /// A dictionary key is not a valid identifier.
    InvalidKey(String),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidKey(key) => write!(f, "invalid key `{key}`"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl Diagnostic for RenderError {
    fn describe(&self) -> Vec<Annotation> {
        match self {
            Self::InvalidKey(_) => Annotation::help(
                "keys must begin with a letter and contain only letters \
                   and digits",
            )
            .into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn dict<const N: usize>(entries: [(&str, Value); N]) -> Value {
        entries.into_iter().collect::<Dict>().into()
    }

    #[test]
    fn renders_integers_as_decimal() {
        assert_eq!(Ok("5".into()), render(&Value::Integer(5)));
        assert_eq!(Ok("-12".into()), render(&Value::Integer(-12)));
        assert_eq!(Ok("0".into()), render(&Value::Integer(0)));
    }

    #[test]
    fn integer_rendering_parses_back() {
        for n in [i64::MIN, -1_000_000, -1, 0, 1, 42, i64::MAX] {
            let given = render(&Value::Integer(n)).map(|s| s.parse::<i64>());
            assert_eq!(Ok(Ok(n)), given);
        }
    }

    #[test]
    fn renders_text_verbatim() {
        assert_eq!(Ok("@\"hello\"".into()), render(&"hello".into()));
        assert_eq!(Ok("@\"\"".into()), render(&"".into()));
        assert_eq!(
            Ok("@\"two words\"".into()),
            render(&"two words".into())
        );
    }

    #[test]
    fn renders_dictionary_in_insertion_order() {
        let given = dict([("a", Value::Integer(1)), ("b", "x".into())]);

        assert_eq!(Ok("{\na -> 1.\nb -> @\"x\".\n}".into()), render(&given));
    }

    #[test]
    fn renders_empty_dictionary() {
        // No blank line between the braces.
        assert_eq!(Ok("{\n}".into()), render(&Dict::new().into()));
    }

    #[test]
    fn renders_nested_dictionary_inline() {
        let given = dict([
            ("outer", Value::Integer(1)),
            ("inner", dict([("deep", "y".into())])),
        ]);

        assert_eq!(
            Ok("{\nouter -> 1.\ninner -> {\ndeep -> @\"y\".\n}.\n}".into()),
            render(&given),
        );
    }

    #[test]
    fn invalid_key_fails() {
        let given = dict([("good2", Value::Integer(1)), ("1bad", "x".into())]);

        assert_eq!(Err(RenderError::InvalidKey("1bad".into())), render(&given));
    }

    #[test]
    fn valid_key_with_digits_succeeds() {
        let given = dict([("good2", Value::Integer(1))]);

        assert_eq!(Ok("{\ngood2 -> 1.\n}".into()), render(&given));
    }

    #[test]
    fn invalid_key_fails_at_any_depth() {
        let given = dict([(
            "a",
            dict([("b", dict([("bad key", Value::Integer(0))]))]),
        )]);

        assert_eq!(
            Err(RenderError::InvalidKey("bad key".into())),
            render(&given),
        );
    }
}
