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

//! CLI command implementations

mod batch_commands;
mod completion;
mod inspect;
mod parse;
mod stats;
mod validate;

pub use batch_commands::batch_parse;
pub use completion::{generate_completion_for_command, parse_shell, print_installation_instructions};
pub use inspect::inspect;
pub use parse::{parse, render_text, OutputFormat};
pub use stats::{collect_stats, stats};
pub use validate::validate;

use crate::error::CliError;
use fortiparse_core::{ScanOptions, ScanSummary, Scanner};
use std::fs;
use std::io::{self, Read, Write};
use tracing::{debug, warn};

/// Default maximum input size (1 GB).
/// Can be overridden via the `FORTIPARSE_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`] (bytes).
pub const MAX_FILE_SIZE_ENV: &str = "FORTIPARSE_MAX_FILE_SIZE";

/// Name used for standard input in messages.
pub const STDIN_NAME: &str = "<stdin>";

fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// Files larger than the configured maximum are rejected before reading.
///
/// # Errors
///
/// Returns `Err` if the metadata cannot be read, the file is too large, or
/// the content is not valid UTF-8.
///
/// ```no_run
/// use fortiparse_cli::commands::read_file;
///
/// # fn main() -> Result<(), fortiparse_cli::error::CliError> {
/// let content = read_file("fw01.conf")?;
/// assert!(!content.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    let content = fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))?;
    debug!(path, bytes = content.len(), "read input file");
    Ok(content)
}

/// Read from `file`, or from standard input when `file` is `None` or `-`.
///
/// Returns the content and the name to use in messages.
pub fn read_input(file: Option<&str>) -> Result<(String, String), CliError> {
    match file {
        Some(path) if path != "-" => Ok((read_file(path)?, path.to_string())),
        _ => Ok((read_stdin()?, STDIN_NAME.to_string())),
    }
}

fn read_stdin() -> Result<String, CliError> {
    let max_file_size = get_max_file_size();
    let mut content = String::new();
    io::stdin()
        .lock()
        .take(max_file_size.saturating_add(1))
        .read_to_string(&mut content)
        .map_err(|e| CliError::io_error(STDIN_NAME, e))?;

    if content.len() as u64 > max_file_size {
        return Err(CliError::file_too_large(
            STDIN_NAME,
            content.len() as u64,
            max_file_size,
        ));
    }
    debug!(bytes = content.len(), "read standard input");
    Ok(content)
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Prefix of comment lines such as the `#config-version=...` export header.
pub const COMMENT_PREFIX: char = '#';

/// Scan `content` line by line and log anything left unbalanced.
///
/// Comment lines are dropped unless a multiline value is open, in which
/// case they belong to the value. `input` names the source in log records
/// and errors.
pub fn scan_content(
    content: &str,
    input: &str,
    options: ScanOptions,
) -> Result<ScanSummary, CliError> {
    let mut scanner = Scanner::with_options(options);
    let mut comments = 0usize;
    for line in content.lines() {
        if !scanner.is_multiline_open() && line.trim_start().starts_with(COMMENT_PREFIX) {
            scanner.skip_line();
            comments += 1;
            continue;
        }
        scanner
            .scan_line(line)
            .map_err(|e| CliError::scan(input, e))?;
    }
    let summary = scanner.finish();

    debug!(
        input,
        lines = summary.lines,
        comments,
        top_level = summary.tree.len(),
        "scan finished"
    );
    if let Some(pending) = &summary.unterminated {
        warn!(
            input,
            key = %pending.key,
            start_line = pending.start_line,
            "multiline value not terminated at end of input"
        );
    }
    if summary.open_blocks > 0 {
        warn!(input, open_blocks = summary.open_blocks, "blocks left open at end of input");
    }
    if summary.underflows > 0 {
        warn!(input, underflows = summary.underflows, "block exits without an open block");
    }
    Ok(summary)
}

/// Describe why a summary is not clean, or `None` when it is.
pub fn incomplete_detail(summary: &ScanSummary) -> Option<String> {
    let mut problems = Vec::new();
    if let Some(pending) = &summary.unterminated {
        problems.push(format!(
            "multiline value '{}' opened at line {} is not terminated",
            pending.key, pending.start_line
        ));
    }
    if summary.open_blocks > 0 {
        problems.push(format!("{} block(s) left open", summary.open_blocks));
    }
    if problems.is_empty() {
        None
    } else {
        Some(problems.join("; "))
    }
}
