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

//! Keyword table and command line parsing.
//!
//! | Keyword          | Action      |
//! |------------------|-------------|
//! | `config`, `edit` | enter block |
//! | `set`, `unset`   | mutate      |
//! | `next`, `end`    | exit block  |
//!
//! Keywords match case-insensitively. Any other leading token is an error.

use crate::error::{ScanError, ScanResult};
use std::fmt;

/// A recognized leading keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Config,
    Edit,
    Set,
    Unset,
    Next,
    End,
}

/// The effect class of a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    EnterBlock,
    Mutate,
    ExitBlock,
}

impl Keyword {
    /// All keywords, in table order.
    pub const ALL: [Keyword; 6] = [
        Keyword::Config,
        Keyword::Edit,
        Keyword::Set,
        Keyword::Unset,
        Keyword::Next,
        Keyword::End,
    ];

    /// Look up a token in the keyword table, ignoring case.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "config" => Some(Self::Config),
            "edit" => Some(Self::Edit),
            "set" => Some(Self::Set),
            "unset" => Some(Self::Unset),
            "next" => Some(Self::Next),
            "end" => Some(Self::End),
            _ => None,
        }
    }

    pub fn action(self) -> Action {
        match self {
            Self::Config | Self::Edit => Action::EnterBlock,
            Self::Set | Self::Unset => Action::Mutate,
            Self::Next | Self::End => Action::ExitBlock,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Edit => "edit",
            Self::Set => "set",
            Self::Unset => "unset",
            Self::Next => "next",
            Self::End => "end",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `config <segment>...`
    Config { path: Vec<String> },
    /// `edit <identifier words>...`; a bare `edit` has an empty identifier.
    Edit { id: String },
    /// `set <key> <value words>...`; `value` is the words rejoined with single spaces.
    Set { key: String, value: String },
    /// `unset <key>`
    Unset { key: String },
    Next,
    End,
}

impl Command {
    /// Parse a non-blank line.
    ///
    /// Returns `Ok(None)` for a blank line. Fails with an unknown-command
    /// error when the first token is not a keyword, and with a
    /// missing-operand error when `set` or `unset` has no key.
    pub fn parse(line: &str, line_num: usize) -> ScanResult<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            return Ok(None);
        };
        let keyword =
            Keyword::from_token(first).ok_or_else(|| ScanError::unknown_command(first, line_num))?;

        let command = match keyword {
            Keyword::Config => Self::Config {
                path: tokens.map(str::to_string).collect(),
            },
            Keyword::Edit => Self::Edit {
                id: tokens.collect::<Vec<_>>().join(" "),
            },
            Keyword::Set => {
                let key = required_key(tokens.next(), keyword, line_num)?;
                let value = tokens.collect::<Vec<_>>().join(" ");
                Self::Set { key, value }
            }
            Keyword::Unset => Self::Unset {
                key: required_key(tokens.next(), keyword, line_num)?,
            },
            Keyword::Next => Self::Next,
            Keyword::End => Self::End,
        };
        Ok(Some(command))
    }

    pub fn keyword(&self) -> Keyword {
        match self {
            Self::Config { .. } => Keyword::Config,
            Self::Edit { .. } => Keyword::Edit,
            Self::Set { .. } => Keyword::Set,
            Self::Unset { .. } => Keyword::Unset,
            Self::Next => Keyword::Next,
            Self::End => Keyword::End,
        }
    }
}

fn required_key(token: Option<&str>, keyword: Keyword, line_num: usize) -> ScanResult<String> {
    token
        .map(str::to_string)
        .ok_or_else(|| ScanError::missing_operand(format!("{} requires a key", keyword), line_num))
}
