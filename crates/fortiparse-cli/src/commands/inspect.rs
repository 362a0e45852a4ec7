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

//! Inspect command - colored tree view of a parsed configuration

use super::{read_file, scan_content};
use crate::error::CliError;
use colored::Colorize;
use fortiparse_core::{traverse, ScanOptions, TreeVisitor, VisitorContext};
use std::convert::Infallible;

/// Inspect and visualize the structure of a configuration file.
///
/// # Output
///
/// Displays the line count, the block depth at end of input and the tree
/// with blocks in yellow, multiline values summarized by line count and
/// unset keys dimmed.
pub fn inspect(file: &str, options: ScanOptions) -> Result<(), CliError> {
    let content = read_file(file)?;
    let summary = scan_content(&content, file, options)?;

    println!("{}", "FortiGate Configuration".bold().underline());
    println!();
    println!("{}  {}", "Lines:".cyan(), summary.lines);
    println!("{}  {}", "Open blocks:".cyan(), summary.open_blocks);
    if let Some(pending) = &summary.unterminated {
        println!(
            "{}  '{}' from line {}",
            "Unterminated:".red(),
            pending.key,
            pending.start_line
        );
    }

    println!();
    println!("{}", "Tree:".cyan());
    let mut printer = TreePrinter;
    if let Err(never) = traverse(&summary.tree, &mut printer) {
        match never {}
    }
    Ok(())
}

struct TreePrinter;

fn prefix(ctx: &VisitorContext) -> String {
    "  ".repeat(ctx.depth + 1)
}

impl TreeVisitor for TreePrinter {
    type Error = Infallible;

    fn begin_block(&mut self, key: &str, ctx: &VisitorContext) -> Result<(), Self::Error> {
        println!("{}{}:", prefix(ctx), key.yellow().bold());
        Ok(())
    }

    fn visit_scalar(
        &mut self,
        key: &str,
        value: &str,
        ctx: &VisitorContext,
    ) -> Result<(), Self::Error> {
        let line_count = value.lines().count();
        if line_count > 1 {
            let first = value.lines().next().unwrap_or_default();
            println!(
                "{}{}: {} {}",
                prefix(ctx),
                key.yellow(),
                first,
                format!("(+{} lines)", line_count - 1).dimmed()
            );
        } else {
            println!("{}{}: {}", prefix(ctx), key.yellow(), value.green());
        }
        Ok(())
    }

    fn visit_null(&mut self, key: &str, ctx: &VisitorContext) -> Result<(), Self::Error> {
        println!("{}{}: {}", prefix(ctx), key.yellow(), "~".dimmed());
        Ok(())
    }
}
