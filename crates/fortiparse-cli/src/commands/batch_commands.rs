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

//! Batch command implementations - convert many configuration files at once

use crate::batch::{BatchConfig, BatchProcessor, ParseOperation};
use crate::error::CliError;
use colored::Colorize;
use fortiparse_core::ScanOptions;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Parse every file and write `<stem>.json` into `output_dir`.
///
/// Runs in parallel when `parallel` is set or the batch is large enough.
/// All files are attempted; the command fails if any of them failed.
pub fn batch_parse(
    files: Vec<String>,
    output_dir: &str,
    parallel: bool,
    verbose: bool,
    options: ScanOptions,
) -> Result<(), CliError> {
    let paths: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();

    fs::create_dir_all(output_dir).map_err(|e| CliError::io_error(output_dir, e))?;

    let defaults = BatchConfig::default();
    let config = BatchConfig {
        parallel_threshold: if parallel { 1 } else { defaults.parallel_threshold },
        verbose,
        ..defaults
    };
    debug!(files = paths.len(), parallel_threshold = config.parallel_threshold, "starting batch");

    let operation = ParseOperation {
        options,
        ..ParseOperation::new(output_dir)
    };
    let results = BatchProcessor::new(config).process(&paths, &operation, true);

    if results.has_failures() {
        eprintln!();
        eprintln!("{}", "Parse failures:".red().bold());
        for failure in results.failures() {
            eprintln!("  {} {}", "✗".red(), failure.path.display());
            if let Err(e) = &failure.result {
                eprintln!("    {}", e.to_string().dimmed());
            }
        }
        return Err(CliError::BatchFailed {
            failed: results.failure_count(),
            total: results.total_files(),
        });
    }

    Ok(())
}
