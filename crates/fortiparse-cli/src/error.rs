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

//! Structured error types for the CLI.
//!
//! All command handlers return `Result<T, CliError>`; `main` prints the
//! error and exits with a failure status.

use fortiparse_core::ScanError;
use fortiparse_json::JsonError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for CLI operations.
///
/// Implements `Clone` so batch results can be collected across threads.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured maximum.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// The scanner rejected a line.
    #[error("Scan error in '{input}': {error}")]
    Scan {
        /// File name, or `<stdin>`
        input: String,
        error: ScanError,
    },

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input ended inside a multiline value or an open block.
    #[error("'{input}' is incomplete: {detail}")]
    Unterminated { input: String, detail: String },

    /// One or more files of a batch failed.
    #[error("{failed} of {total} files failed")]
    BatchFailed { failed: usize, total: usize },
}

impl CliError {
    /// Create an I/O error with file path context.
    ///
    /// ```rust,no_run
    /// use fortiparse_cli::error::CliError;
    /// use std::fs;
    ///
    /// let result = fs::read_to_string("fw01.conf")
    ///     .map_err(|e| CliError::io_error("fw01.conf", e));
    /// ```
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    pub fn scan(input: impl Into<String>, error: ScanError) -> Self {
        Self::Scan {
            input: input.into(),
            error,
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn unterminated(input: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Unterminated {
            input: input.into(),
            detail: detail.into(),
        }
    }
}

impl From<JsonError> for CliError {
    fn from(source: JsonError) -> Self {
        Self::Json(source.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json(source.to_string())
    }
}
