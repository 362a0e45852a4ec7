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

//! Command-line front end for the FortiGate configuration parser.
//!
//! # Commands
//!
//! - **parse**: configuration to JSON (pretty or compact) or a text tree, from a file or stdin
//! - **validate**: scan a file and report unbalanced blocks or unterminated values
//! - **inspect**: colored tree view
//! - **stats**: block, setting and unset counts
//! - **batch-parse**: convert many files to JSON, in parallel
//! - **completion**: shell completion scripts
//!
//! # Examples
//!
//! ```no_run
//! use fortiparse_cli::commands::{parse, validate, OutputFormat};
//! use fortiparse_core::ScanOptions;
//!
//! # fn main() -> Result<(), fortiparse_cli::error::CliError> {
//! validate("fw01.conf", true, ScanOptions::default())?;
//! parse(Some("fw01.conf"), None, OutputFormat::Text, ScanOptions::default(), false)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Limits
//!
//! Inputs larger than 1 GB are rejected before reading; set
//! `FORTIPARSE_MAX_FILE_SIZE` (bytes) to change the limit.
//!
//! # Logging
//!
//! The binary logs to stderr through `tracing`. The default filter is
//! `fortiparse=warn`; `--verbose` raises it to `debug` and `RUST_LOG`
//! overrides both.

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
