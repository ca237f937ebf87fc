// Global constants across the entirety of the system
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

//! System-wide static configuration.
//!
//! This module provides a system-wide configuration.
//! Subsystems should reference these values rather than defining their own
//!   and risk incompatibilities or maintenance issues as the output
//!   language changes.
//!
//! By convention,
//!   import this entire module rather than individual members and reference
//!   them as `global::foo` to emphasize their nature and risk.

/// Keyword separating a constant name from its value.
///
/// `name is 5;`
pub const CONST_ASSIGN: &str = " is ";

/// Terminator of a constant declaration line.
pub const CONST_TERM: &str = ";";

/// Separator between a dictionary key
///   (or top-level dictionary name)
///   and its value.
pub const DICT_ARROW: &str = " -> ";

/// Terminator of each dictionary entry line.
pub const ENTRY_TERM: &str = ".";

/// Opening delimiter of a dictionary block.
pub const DICT_OPEN: &str = "{";

/// Closing delimiter of a dictionary block.
pub const DICT_CLOSE: &str = "}";

/// Opening delimiter of a text literal.
pub const TEXT_OPEN: &str = "@\"";

/// Closing delimiter of a text literal.
pub const TEXT_CLOSE: &str = "\"";

/// Number of operands for which the expression evaluator pre-allocates
///   stack space.
///
/// The stack grows beyond this as needed;
///   this only avoids reallocation for the expressions one would expect
///   to find in a configuration file.
pub const EXPR_STACK_PREALLOC: usize = 8;
