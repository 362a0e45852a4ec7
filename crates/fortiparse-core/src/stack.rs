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

//! Stack of open blocks.

use crate::tree::Cursor;

/// The chain of currently open blocks, innermost last.
///
/// One frame is pushed per accepted `config`/`edit` statement and one is
/// popped per `next`/`end`. Popping or peeking an empty stack yields `None`;
/// the caller picks the fallback.
#[derive(Debug, Clone, Default)]
pub struct BlockStack {
    frames: Vec<Cursor>,
}

impl BlockStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cursor: Cursor) {
        self.frames.push(cursor);
    }

    pub fn pop(&mut self) -> Option<Cursor> {
        self.frames.pop()
    }

    pub fn top(&self) -> Option<&Cursor> {
        self.frames.last()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Current nesting depth.
    pub fn size(&self) -> usize {
        self.frames.len()
    }

    /// Frames from outermost to innermost.
    pub fn iter(&self) -> std::slice::Iter<'_, Cursor> {
        self.frames.iter()
    }
}
