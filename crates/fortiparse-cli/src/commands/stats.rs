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

//! Stats command - structure counts for a configuration file

use super::{read_file, scan_content};
use crate::error::CliError;
use colored::Colorize;
use fortiparse_core::{traverse, ScanOptions, StatsCollector};

/// Collect structure statistics for a parsed configuration.
pub fn collect_stats(content: &str, input: &str, options: ScanOptions) -> Result<(StatsCollector, usize), CliError> {
    let summary = scan_content(content, input, options)?;
    let mut stats = StatsCollector::default();
    if let Err(never) = traverse(&summary.tree, &mut stats) {
        match never {}
    }
    Ok((stats, summary.lines))
}

/// Print block, setting and depth counts for a configuration file.
pub fn stats(file: &str, options: ScanOptions) -> Result<(), CliError> {
    let content = read_file(file)?;
    let (stats, lines) = collect_stats(&content, file, options)?;

    println!("{}", "Configuration Statistics".bold().underline());
    println!();
    println!("  {:<18} {}", "Lines:".cyan(), lines);
    println!("  {:<18} {}", "Blocks:".cyan(), stats.block_count);
    println!("  {:<18} {}", "Settings:".cyan(), stats.scalar_count);
    println!("  {:<18} {}", "Multiline values:".cyan(), stats.multiline_count);
    println!("  {:<18} {}", "Unset keys:".cyan(), stats.null_count);
    println!("  {:<18} {}", "Max depth:".cyan(), stats.max_depth);
    Ok(())
}
