// Translator value model
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

//! Resolved values.
//!
//! A [`Value`] is what a declaration resolves to after its literal has been
//!   parsed or its expression evaluated.
//! Values are pure data;
//!   see [`crate::render`] for their representation in the output
//!   language.

/// A resolved value.
///
/// Dictionaries nest arbitrarily.
/// They are built strictly from a tree-shaped source document and so can
///   never contain cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Text(String),
    Dictionary(Dict),
}

assert_impl_all!(Value: Send, Sync);

impl Value {
    /// The integer held by this value,
    ///   if any.
    ///
    /// Only integers may participate in expressions.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.into())
    }
}

impl From<Dict> for Value {
    fn from(dict: Dict) -> Self {
        Self::Dictionary(dict)
    }
}

/// Mapping of keys to [`Value`]s that retains insertion order.
///
/// Order is significant since it is preserved in rendered output.
/// Keys are stored as given and are validated only when rendered,
///   so that an invalid key is reported at the point it is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dict(Vec<(String, Value)>);

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `value` with `key`.
    ///
    /// If `key` is already present,
    ///   its value is replaced but the entry keeps its original position.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: Value) {
        let key = key.into();

        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Dict {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut dict = Self::new();
        iter.into_iter().for_each(|(k, v)| dict.insert(k, v));
        dict
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dict_retains_insertion_order() {
        let sut: Dict = [
            ("zed", Value::Integer(1)),
            ("alpha", "x".into()),
            ("mid", Value::Integer(3)),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            vec!["zed", "alpha", "mid"],
            sut.iter().map(|(k, _)| k).collect::<Vec<_>>(),
        );
    }

    #[test]
    fn dict_insert_existing_key_replaces_in_place() {
        let mut sut = Dict::new();
        sut.insert("a", Value::Integer(1));
        sut.insert("b", Value::Integer(2));
        sut.insert("a", Value::Integer(3));

        assert_eq!(2, sut.len());
        assert_eq!(Some(&Value::Integer(3)), sut.get("a"));
        assert_eq!(Some("a"), sut.iter().next().map(|(k, _)| k));
    }

    #[test]
    fn only_integers_are_integers() {
        assert_eq!(Some(-4), Value::Integer(-4).as_integer());
        assert_eq!(None, Value::from("4").as_integer());
        assert_eq!(None, Value::from(Dict::new()).as_integer());
    }
}
