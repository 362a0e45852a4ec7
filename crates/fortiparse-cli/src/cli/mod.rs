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

//! CLI command definitions and argument parsing.
//!
//! - [`core`]: single-input commands (parse, validate, inspect, stats)
//! - [`batch`]: batch-parse
//! - [`utility`]: completion

mod batch;
mod core;
mod utility;

use crate::error::CliError;
use clap::{Args, Parser, Subcommand};
use fortiparse_core::{ScanOptions, DEFAULT_QUOTE};

pub use batch::BatchCommands;
pub use core::CoreCommands;
pub use utility::UtilityCommands;

/// fortiparse - FortiGate configuration parser
///
/// Turns FortiGate-style `config`/`edit`/`set` exports into JSON or an
/// indented tree, and checks them for unbalanced blocks.
///
/// ```bash
/// # Convert a backup to JSON
/// fortiparse parse fw01.conf --unquote
///
/// # Read from a pipe
/// ssh admin@fw01 'show full-configuration' | fortiparse parse --format text
///
/// # Convert a directory of backups
/// fortiparse batch-parse backups/*.conf --output-dir json/
/// ```
#[derive(Parser)]
#[command(name = "fortiparse")]
#[command(author, version, about = "fortiparse - FortiGate configuration parser", long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
///
/// ```text
/// Commands
/// ├── Core (parse, validate, inspect, stats)
/// ├── Batch (batch-parse)
/// └── Utility (completion)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Batch(BatchCommands),

    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command. `verbose` also enables per-file batch output.
    pub fn execute(self, verbose: bool) -> Result<(), CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Batch(cmd) => cmd.execute(verbose),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}

/// Scanner options shared by every command that reads a configuration.
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Quote character delimiting multiline values
    #[arg(long, value_name = "CHAR", default_value_t = DEFAULT_QUOTE)]
    pub quote: char,

    /// Strip enclosing quotes from single quoted values and identifiers
    #[arg(long)]
    pub unquote: bool,
}

impl ScanArgs {
    pub fn options(&self) -> ScanOptions {
        ScanOptions::builder()
            .quote(self.quote)
            .unquote(self.unquote)
            .build()
    }
}
