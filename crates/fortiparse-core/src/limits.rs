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

//! Resource limits for configuration scanning.

/// Configurable limits for scanner resources.
///
/// These bound the memory a single scan can consume. A line that would
/// exceed a limit is rejected before it touches the tree.
///
/// `Limits::default()` holds the recommended caps for untrusted input.
/// Scanners built with default [`ScanOptions`](crate::ScanOptions) use
/// [`Limits::unlimited`] and opt in through
/// [`ScanOptionsBuilder::limits`](crate::ScanOptionsBuilder::limits).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum physical line length in bytes (default: 1MB).
    pub max_line_length: usize,
    /// Maximum number of open blocks (default: 256).
    pub max_block_depth: usize,
    /// Maximum size of one accumulated multiline value in bytes (default: 10MB).
    pub max_multiline_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_line_length: 1024 * 1024,            // 1MB
            max_block_depth: 256,
            max_multiline_size: 10 * 1024 * 1024,   // 10MB
        }
    }
}

impl Limits {
    /// Create limits with no restrictions.
    pub fn unlimited() -> Self {
        Self {
            max_line_length: usize::MAX,
            max_block_depth: usize::MAX,
            max_multiline_size: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_line_length, 1024 * 1024);
        assert_eq!(limits.max_block_depth, 256);
        assert_eq!(limits.max_multiline_size, 10 * 1024 * 1024);
    }

    #[test]
    fn test_unlimited() {
        let limits = Limits::unlimited();
        assert_eq!(limits.max_line_length, usize::MAX);
        assert_eq!(limits.max_block_depth, usize::MAX);
        assert_eq!(limits.max_multiline_size, usize::MAX);
    }

    #[test]
    fn test_limits_clone_independent() {
        let original = Limits::default();
        let mut copy = original.clone();
        copy.max_block_depth = 4;
        assert_eq!(original.max_block_depth, 256);
        assert_eq!(copy.max_block_depth, 4);
    }
}
