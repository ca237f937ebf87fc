// Identifier validation
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

//! Identifiers of the output language.
//!
//! Constant names,
//!   dictionary names,
//!   and dictionary keys must all be identifiers:
//!     a single ASCII letter followed by any number of ASCII letters or
//!     digits.
//! Underscores and non-ASCII letters are not permitted.

/// Whether `name` is a valid identifier.
///
/// ```
/// use cfgtrans::ident::is_ident;
///
/// assert!(is_ident("good2"));
/// assert!(!is_ident("1bad"));
/// assert!(!is_ident("snake_case"));
/// assert!(!is_ident(""));
/// ```
pub fn is_ident(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}
