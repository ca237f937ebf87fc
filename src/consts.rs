// Constant table
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

//! Constants resolved during a single translation pass.
//!
//! The [`ConstTable`] is populated top-to-bottom as constant declarations
//!   are resolved,
//!     and so only constants defined _earlier_ in the document are visible
//!     to an expression;
//!       there are no forward references.
//!
//! The table performs no validation of names;
//!   that is the responsibility of the [translator](crate::translate),
//!   which validates a name before defining it.

use crate::value::Value;
use fxhash::FxHashMap;

/// Ordered store of resolved constants.
///
/// A table is owned by a single translation and is discarded when that
///   translation completes.
#[derive(Debug, Default, PartialEq)]
pub struct ConstTable {
    /// Definitions in the order in which their names were first defined.
    defs: Vec<(String, Value)>,

    /// Index into [`Self::defs`] by name.
    index: FxHashMap<String, usize>,
}

impl ConstTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `name`.
    ///
    /// Redefining a name overwrites its prior value;
    ///   the constant retains the position of its first definition.
    /// Returns the previous value,
    ///   if any.
    pub fn define<N: Into<String>>(
        &mut self,
        name: N,
        value: Value,
    ) -> Option<Value> {
        let name = name.into();

        match self.index.get(&name) {
            Some(&i) => Some(std::mem::replace(&mut self.defs[i].1, value)),
            None => {
                self.index.insert(name.clone(), self.defs.len());
                self.defs.push((name, value));
                None
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.index.get(name).map(|&i| &self.defs[i].1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lookup_undefined_yields_none() {
        assert_eq!(None, ConstTable::new().lookup("missing"));
    }

    #[test]
    fn lookup_defined_yields_value() {
        let mut sut = ConstTable::new();

        assert_eq!(None, sut.define("width", Value::Integer(5)));
        assert_eq!(None, sut.define("label", "wide".into()));

        assert_eq!(Some(&Value::Integer(5)), sut.lookup("width"));
        assert_eq!(Some(&Value::from("wide")), sut.lookup("label"));
    }

    #[test]
    fn redefine_overwrites_keeping_position() {
        let mut sut = ConstTable::new();

        sut.define("a", Value::Integer(1));
        sut.define("b", Value::Integer(2));

        assert_eq!(
            Some(Value::Integer(1)),
            sut.define("a", Value::Integer(3))
        );

        assert_eq!(Some(&Value::Integer(3)), sut.lookup("a"));
        assert_eq!(Some(&Value::Integer(2)), sut.lookup("b"));
        assert_eq!(
            vec![
                ("a".to_string(), Value::Integer(3)),
                ("b".to_string(), Value::Integer(2)),
            ],
            sut.defs,
        );
    }

    #[test]
    fn does_not_validate_names() {
        let mut sut = ConstTable::new();
        sut.define("1 not an ident", Value::Integer(0));

        assert_eq!(Some(&Value::Integer(0)), sut.lookup("1 not an ident"));
    }
}
