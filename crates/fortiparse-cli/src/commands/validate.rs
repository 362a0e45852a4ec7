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

//! Validate command - scan a configuration and report its balance

use super::{incomplete_detail, read_file, scan_content};
use crate::error::CliError;
use colored::Colorize;
use fortiparse_core::ScanOptions;

/// Validate a configuration file.
///
/// Scans the file and prints a summary. A rejected line always fails. In
/// strict mode an unterminated multiline value or an unclosed block fails
/// too; otherwise they are reported as warnings.
///
/// # Output
///
/// Prints to stdout:
/// - Validation status (✓ or ✗) and file name
/// - Lines scanned and top-level sections
/// - Open blocks, unterminated value and stray block exits
pub fn validate(file: &str, strict: bool, options: ScanOptions) -> Result<(), CliError> {
    let content = read_file(file)?;

    let summary = match scan_content(&content, file, options) {
        Ok(summary) => summary,
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            return Err(e);
        }
    };

    let detail = incomplete_detail(&summary);
    if strict {
        if let Some(detail) = detail {
            println!("{} {}", "✗".red().bold(), file);
            println!("  {}", detail);
            return Err(CliError::unterminated(file, detail));
        }
    }

    println!("{} {}", "✓".green().bold(), file);
    println!("  Lines: {}", summary.lines);
    println!("  Sections: {}", summary.tree.len());
    println!("  Open blocks: {}", summary.open_blocks);
    println!("  Stray exits: {}", summary.underflows);
    if let Some(pending) = &summary.unterminated {
        println!(
            "  {} multiline value '{}' from line {} is not terminated",
            "warning:".yellow().bold(),
            pending.key,
            pending.start_line
        );
    }
    if strict {
        println!("  Mode: strict (blocks and multiline values must be closed)");
    }
    Ok(())
}
