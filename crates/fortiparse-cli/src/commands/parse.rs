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

//! Parse command - configuration text to JSON or an indented tree

use super::{read_input, scan_content, write_output};
use crate::error::CliError;
use clap::ValueEnum;
use fortiparse_core::{traverse, ConfigTree, ScanOptions, TreeVisitor, VisitorContext};
use fortiparse_json::{to_json, ToJsonConfig};
use std::convert::Infallible;

/// Output format of the `parse` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty JSON, 4-space indent
    #[default]
    Json,
    /// Single-line JSON
    Compact,
    /// Indented `key: value` tree
    Text,
}

/// Parse a configuration and write the resulting tree.
///
/// Reads `file`, or standard input when `file` is `None` or `-`, and writes
/// to `output` or stdout. JSON keys are sorted unless `insertion_order` is
/// set; the text format always keeps insertion order.
///
/// ```no_run
/// use fortiparse_cli::commands::{parse, OutputFormat};
/// use fortiparse_core::ScanOptions;
///
/// # fn main() -> Result<(), fortiparse_cli::error::CliError> {
/// parse(Some("fw01.conf"), Some("fw01.json"), OutputFormat::Json, ScanOptions::default(), false)?;
/// # Ok(())
/// # }
/// ```
pub fn parse(
    file: Option<&str>,
    output: Option<&str>,
    format: OutputFormat,
    options: ScanOptions,
    insertion_order: bool,
) -> Result<(), CliError> {
    let (content, input) = read_input(file)?;
    let summary = scan_content(&content, &input, options)?;

    let rendered = match format {
        OutputFormat::Json | OutputFormat::Compact => {
            let config = ToJsonConfig {
                pretty: format == OutputFormat::Json,
                sort_keys: !insertion_order,
                ..ToJsonConfig::default()
            };
            let mut json = to_json(&summary.tree, &config)?;
            json.push('\n');
            json
        }
        OutputFormat::Text => render_text(&summary.tree),
    };

    write_output(&rendered, output)
}

/// Render a tree as indented `key: value` lines.
///
/// Blocks end with `:`, explicit nulls print as `~`, and continuation lines
/// of multiline values are indented one step below their key.
pub fn render_text(tree: &ConfigTree) -> String {
    let mut renderer = TextRenderer::default();
    if let Err(never) = traverse(tree, &mut renderer) {
        match never {}
    }
    renderer.out
}

#[derive(Default)]
struct TextRenderer {
    out: String,
}

impl TextRenderer {
    fn line(&mut self, depth: usize, text: &str) {
        self.out.push_str(&"  ".repeat(depth));
        self.out.push_str(text);
        self.out.push('\n');
    }
}

impl TreeVisitor for TextRenderer {
    type Error = Infallible;

    fn begin_block(&mut self, key: &str, ctx: &VisitorContext) -> Result<(), Self::Error> {
        self.line(ctx.depth, &format!("{}:", key));
        Ok(())
    }

    fn visit_scalar(
        &mut self,
        key: &str,
        value: &str,
        ctx: &VisitorContext,
    ) -> Result<(), Self::Error> {
        let mut lines = value.split('\n');
        match lines.next() {
            Some(first) if !first.is_empty() => self.line(ctx.depth, &format!("{}: {}", key, first)),
            _ => self.line(ctx.depth, &format!("{}:", key)),
        }
        for continuation in lines {
            self.line(ctx.depth + 1, continuation);
        }
        Ok(())
    }

    fn visit_null(&mut self, key: &str, ctx: &VisitorContext) -> Result<(), Self::Error> {
        self.line(ctx.depth, &format!("{}: ~", key));
        Ok(())
    }
}
