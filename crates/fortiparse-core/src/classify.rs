// Fortiparse - FortiGate configuration parser
//
// Copyright (c) 2025 Fortiparse contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Multiline value detection.
//!
//! A `set` value that starts with the quote character but does not end with
//! it opens a multiline value. Following physical lines are appended to it
//! until one ends with an unescaped quote:
//!
//! ```text
//! set comments "first line
//! second line
//! last line"
//! ```
//!
//! The classifier is pure. It reports what a value means given whether a
//! multiline value is currently open; the scanner applies the transition.

/// Escape character that keeps a trailing quote from closing a value.
pub const ESCAPE_CHAR: char = '\\';

/// Default quote character.
pub const DEFAULT_QUOTE: char = '"';

/// What a candidate value means for multiline accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// A self-contained value (no multiline open, none opened).
    Complete,
    /// Starts a multiline value.
    Opening,
    /// Extends the open multiline value.
    Continuing,
    /// Extends and closes the open multiline value.
    Closing,
}

/// A trimmed value together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified<'a> {
    pub kind: Classification,
    pub value: &'a str,
}

/// Classify `value` against the quote character `quote`.
///
/// `multiline_open` tells whether a multiline value is currently being
/// accumulated. The returned value is `value` with surrounding whitespace
/// removed.
pub fn classify(value: &str, quote: char, multiline_open: bool) -> Classified<'_> {
    let value = value.trim();
    let kind = if multiline_open {
        if closes(value, quote) {
            Classification::Closing
        } else {
            Classification::Continuing
        }
    } else if opens(value, quote) {
        Classification::Opening
    } else {
        Classification::Complete
    };
    Classified { kind, value }
}

fn opens(value: &str, quote: char) -> bool {
    let mut chars = value.chars();
    match (chars.next(), chars.next_back()) {
        (None, _) => false,
        // A lone quote has no closing counterpart
        (Some(first), None) => first == quote,
        (Some(first), Some(last)) => first == quote && last != quote,
    }
}

fn closes(value: &str, quote: char) -> bool {
    let mut tail = value.chars().rev();
    match (tail.next(), tail.next()) {
        (Some(last), Some(before)) => last == quote && before != ESCAPE_CHAR,
        _ => false,
    }
}

/// Strip one pair of enclosing quotes from a single quoted string.
///
/// Returns `value` unchanged unless it starts and ends with `quote`, is at
/// least two characters long, and contains no unescaped `quote` in between
/// (so `"a" "b"` is left alone).
pub fn unquote(value: &str, quote: char) -> &str {
    let Some(inner) = value
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
    else {
        return value;
    };

    let mut escaped = false;
    for ch in inner.chars() {
        if escaped {
            escaped = false;
        } else if ch == ESCAPE_CHAR {
            escaped = true;
        } else if ch == quote {
            return value;
        }
    }
    // A trailing escape would have escaped the closing quote
    if escaped {
        return value;
    }
    inner
}
