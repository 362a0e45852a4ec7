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

//! Error types for configuration scanning.

use std::fmt;
use thiserror::Error;

/// The kind of error that aborted a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// Leading token matches no entry in the keyword table.
    UnknownCommand,
    /// A keyword that requires an operand was given none.
    MissingOperand,
    /// A configured resource limit was exceeded.
    Security,
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand => write!(f, "UnknownCommandError"),
            Self::MissingOperand => write!(f, "MissingOperandError"),
            Self::Security => write!(f, "SecurityError"),
        }
    }
}

/// A fatal error raised while scanning a configuration.
///
/// The line that raised the error has had no effect on the tree.
#[derive(Debug, Clone, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct ScanError {
    /// The kind of error.
    pub kind: ScanErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based).
    pub line: usize,
    /// Additional context (e.g., "inside block system.interface").
    pub context: Option<String>,
}

impl ScanError {
    /// Create a new error.
    pub fn new(kind: ScanErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            context: None,
        }
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn unknown_command(command: &str, line: usize) -> Self {
        Self::new(
            ScanErrorKind::UnknownCommand,
            format!("unknown command '{}'", command),
            line,
        )
    }

    pub fn missing_operand(message: impl Into<String>, line: usize) -> Self {
        Self::new(ScanErrorKind::MissingOperand, message, line)
    }

    pub fn security(message: impl Into<String>, line: usize) -> Self {
        Self::new(ScanErrorKind::Security, message, line)
    }
}

/// Result type for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;
