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

//! Batch processing commands.

use super::ScanArgs;
use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum BatchCommands {
    /// Convert many configuration files to JSON
    ///
    /// Writes `<stem>.json` for each input into the output directory. Runs
    /// in parallel for 4 or more files, or always with --parallel.
    BatchParse {
        /// Input file paths
        #[arg(value_name = "FILES", num_args = 1.., required = true)]
        files: Vec<String>,

        /// Directory receiving the JSON files
        #[arg(short, long, value_name = "DIR")]
        output_dir: String,

        /// Force parallel processing
        #[arg(short, long)]
        parallel: bool,

        #[command(flatten)]
        scan: ScanArgs,
    },
}

impl BatchCommands {
    pub fn execute(self, verbose: bool) -> Result<(), CliError> {
        match self {
            BatchCommands::BatchParse {
                files,
                output_dir,
                parallel,
                scan,
            } => commands::batch_parse(files, &output_dir, parallel, verbose, scan.options()),
        }
    }
}
