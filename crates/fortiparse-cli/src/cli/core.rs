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

//! Commands operating on a single configuration input.

use super::ScanArgs;
use crate::commands::{self, OutputFormat};
use crate::error::CliError;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum CoreCommands {
    /// Parse a configuration into JSON or a text tree
    ///
    /// Reads FILE, or standard input when FILE is omitted or `-`.
    Parse {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: Option<String>,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Keep keys in input order instead of sorting them
        #[arg(long)]
        insertion_order: bool,

        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Validate a configuration file
    ///
    /// Fails on lines the scanner rejects. In strict mode an unterminated
    /// multiline value or an unclosed block also fails.
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Strict mode (blocks and multiline values must be closed)
        #[arg(short, long)]
        strict: bool,

        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Print the parsed tree with colors
    Inspect {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Count blocks, settings and unset keys
    Stats {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        #[command(flatten)]
        scan: ScanArgs,
    },
}

impl CoreCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Parse {
                file,
                output,
                format,
                insertion_order,
                scan,
            } => commands::parse(
                file.as_deref(),
                output.as_deref(),
                format,
                scan.options(),
                insertion_order,
            ),
            CoreCommands::Validate { file, strict, scan } => {
                commands::validate(&file, strict, scan.options())
            }
            CoreCommands::Inspect { file, scan } => commands::inspect(&file, scan.options()),
            CoreCommands::Stats { file, scan } => commands::stats(&file, scan.options()),
        }
    }
}
