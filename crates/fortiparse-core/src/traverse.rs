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

//! Tree traversal for converters and analysis.
//!
//! [`traverse`] walks a [`ConfigTree`] depth first in insertion order and
//! calls a [`TreeVisitor`] for each entry. Converters and the statistics
//! collector share this walk instead of recursing on their own.
//!
//! ```
//! use fortiparse_core::traverse::{traverse, StatsCollector};
//!
//! let tree = fortiparse_core::parse("config system global\nset hostname fw\nend").unwrap();
//! let mut stats = StatsCollector::default();
//! traverse(&tree, &mut stats).unwrap();
//! assert_eq!(stats.block_count, 2);
//! assert_eq!(stats.scalar_count, 1);
//! ```

use crate::tree::{ConfigTree, ConfigValue};

/// Context provided to visitors during traversal.
#[derive(Debug, Clone, Default)]
pub struct VisitorContext<'a> {
    /// Current nesting depth (0 = root level).
    pub depth: usize,
    /// Keys from the root to the level holding the visited entry.
    pub path: Vec<&'a str>,
}

impl<'a> VisitorContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a child context one level below `key`.
    pub fn child(&self, key: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(key);
        Self {
            depth: self.depth + 1,
            path,
        }
    }

    /// Get the current path as a string (for error messages).
    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            "root".to_string()
        } else {
            self.path.join(".")
        }
    }
}

/// Callbacks for each entry of a configuration tree.
///
/// Only `visit_scalar` is required; the rest default to doing nothing.
pub trait TreeVisitor {
    /// Error type returned by visitor methods.
    type Error;

    /// Called before the entries of a nested block.
    fn begin_block(&mut self, _key: &str, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after the entries of a nested block.
    fn end_block(&mut self, _key: &str, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_scalar(
        &mut self,
        key: &str,
        value: &str,
        ctx: &VisitorContext,
    ) -> Result<(), Self::Error>;

    /// Called for an `unset` key.
    fn visit_null(&mut self, _key: &str, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Walk `tree`, calling `visitor` for every entry.
pub fn traverse<V: TreeVisitor>(tree: &ConfigTree, visitor: &mut V) -> Result<(), V::Error> {
    traverse_level(tree, visitor, &VisitorContext::new())
}

fn traverse_level<'a, V: TreeVisitor>(
    level: &'a ConfigTree,
    visitor: &mut V,
    ctx: &VisitorContext<'a>,
) -> Result<(), V::Error> {
    for (key, value) in level {
        match value {
            ConfigValue::Scalar(s) => visitor.visit_scalar(key, s, ctx)?,
            ConfigValue::Null => visitor.visit_null(key, ctx)?,
            ConfigValue::Nested(child) => {
                visitor.begin_block(key, ctx)?;
                traverse_level(child, visitor, &ctx.child(key))?;
                visitor.end_block(key, ctx)?;
            }
        }
    }
    Ok(())
}

/// Statistics collector visitor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatsCollector {
    /// Number of nested blocks.
    pub block_count: usize,
    /// Number of scalar values.
    pub scalar_count: usize,
    /// Number of scalar values spanning more than one line.
    pub multiline_count: usize,
    /// Number of unset keys.
    pub null_count: usize,
    /// Maximum depth reached.
    pub max_depth: usize,
}

impl TreeVisitor for StatsCollector {
    type Error = std::convert::Infallible;

    fn begin_block(&mut self, _key: &str, ctx: &VisitorContext) -> Result<(), Self::Error> {
        self.block_count += 1;
        self.max_depth = self.max_depth.max(ctx.depth + 1);
        Ok(())
    }

    fn visit_scalar(
        &mut self,
        _key: &str,
        value: &str,
        ctx: &VisitorContext,
    ) -> Result<(), Self::Error> {
        self.scalar_count += 1;
        if value.contains('\n') {
            self.multiline_count += 1;
        }
        self.max_depth = self.max_depth.max(ctx.depth);
        Ok(())
    }

    fn visit_null(&mut self, _key: &str, ctx: &VisitorContext) -> Result<(), Self::Error> {
        self.null_count += 1;
        self.max_depth = self.max_depth.max(ctx.depth);
        Ok(())
    }
}
