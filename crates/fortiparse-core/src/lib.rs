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

//! Line scanner and tree builder for FortiGate-style configuration exports.
//!
//! A configuration export is a sequence of block statements:
//!
//! ```text
//! config system interface
//!     edit "port1"
//!         set ip 10.0.0.1 255.255.255.0
//!         set description "uplink
//! to core"
//!     next
//! end
//! ```
//!
//! The [`Scanner`] consumes such text one line at a time and builds a
//! [`ConfigTree`]: `config` and `edit` open nested blocks, `set` and `unset`
//! write values at the current block, `next` and `end` close blocks. Quoted
//! values spanning several physical lines are joined with `\n`.
//!
//! # Example
//!
//! ```
//! use fortiparse_core::{parse_with_options, ConfigValue, ScanOptions};
//!
//! let text = "config system interface\nedit \"port1\"\nset ip \"10.0.0.1/24\"\nnext\nend\n";
//! let options = ScanOptions::builder().unquote(true).build();
//! let tree = parse_with_options(text, options).unwrap();
//!
//! let ip = tree.get_path(&["system", "interface", "port1", "ip"]);
//! assert_eq!(ip.and_then(ConfigValue::as_str), Some("10.0.0.1/24"));
//! ```
//!
//! # Features
//!
//! - `serde`: implements `Serialize` for [`ConfigTree`] and [`ConfigValue`].

pub mod builder;
pub mod classify;
pub mod command;
mod error;
mod limits;
mod scanner;
pub mod stack;
pub mod traverse;
mod tree;

pub use classify::{classify, unquote, Classification, Classified, DEFAULT_QUOTE};
pub use command::{Action, Command, Keyword};
pub use error::{ScanError, ScanErrorKind, ScanResult};
pub use limits::Limits;
pub use scanner::{
    parse, parse_with_options, PendingMultiline, ScanOptions, ScanOptionsBuilder, ScanSummary,
    Scanner,
};
pub use stack::BlockStack;
pub use traverse::{traverse, StatsCollector, TreeVisitor, VisitorContext};
pub use tree::{ConfigTree, ConfigValue, Cursor};
