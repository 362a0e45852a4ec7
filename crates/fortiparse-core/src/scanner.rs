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

//! Line scanner that assembles a [`ConfigTree`].
//!
//! The scanner consumes one physical line at a time. While a multiline
//! value is open, lines are appended to it verbatim (trimmed) and never
//! parsed as commands. Otherwise the line is parsed into a [`Command`] and
//! applied to the tree at the current cursor.
//!
//! ```
//! use fortiparse_core::Scanner;
//!
//! let mut scanner = Scanner::new();
//! for line in ["config system global", "set hostname fw01", "end"] {
//!     scanner.scan_line(line).unwrap();
//! }
//! let hostname = scanner.tree().get_path(&["system", "global", "hostname"]);
//! assert_eq!(hostname.and_then(|v| v.as_str()), Some("fw01"));
//! ```
//!
//! # Unbalanced input
//!
//! An `end` or `next` with no open block does not fail: the cursor resets
//! to the tree root and scanning continues. This lets fragments that begin
//! mid-block be scanned. [`Scanner::underflows`] counts such lines.
//!
//! Input that ends inside a multiline value keeps the partial value under
//! its key; [`Scanner::pending_multiline`] reports it.

use crate::builder::{descend, enter_fresh};
use crate::classify::{classify, unquote, Classification, DEFAULT_QUOTE};
use crate::command::Command;
use crate::error::{ScanError, ScanResult};
use crate::limits::Limits;
use crate::stack::BlockStack;
use crate::tree::{ConfigTree, ConfigValue, Cursor};

/// Options fixed at scanner construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Quote character used to detect multiline values (default `"`).
    pub quote: char,
    /// Strip enclosing quotes from single quoted values, `edit` identifiers
    /// and `config` path segments (default off).
    pub unquote: bool,
    /// Resource limits (default: none, see [`Limits::default`] for caps).
    pub limits: Limits,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            quote: DEFAULT_QUOTE,
            unquote: false,
            limits: Limits::unlimited(),
        }
    }
}

impl ScanOptions {
    /// Create a new builder for ScanOptions.
    pub fn builder() -> ScanOptionsBuilder {
        ScanOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of [`ScanOptions`].
///
/// ```
/// use fortiparse_core::ScanOptions;
///
/// let opts = ScanOptions::builder()
///     .quote('\'')
///     .unquote(true)
///     .max_block_depth(32)
///     .build();
/// assert_eq!(opts.quote, '\'');
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScanOptionsBuilder {
    options: ScanOptions,
}

impl ScanOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quote(mut self, quote: char) -> Self {
        self.options.quote = quote;
        self
    }

    pub fn unquote(mut self, unquote: bool) -> Self {
        self.options.unquote = unquote;
        self
    }

    pub fn limits(mut self, limits: Limits) -> Self {
        self.options.limits = limits;
        self
    }

    pub fn max_line_length(mut self, length: usize) -> Self {
        self.options.limits.max_line_length = length;
        self
    }

    pub fn max_block_depth(mut self, depth: usize) -> Self {
        self.options.limits.max_block_depth = depth;
        self
    }

    pub fn max_multiline_size(mut self, size: usize) -> Self {
        self.options.limits.max_multiline_size = size;
        self
    }

    pub fn build(self) -> ScanOptions {
        self.options
    }
}

/// A multiline value that has been opened but not yet closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMultiline {
    /// Key receiving the value, at the current cursor level.
    pub key: String,
    /// Line that opened the value (1-based).
    pub start_line: usize,
    /// Accumulated size in bytes.
    pub size: usize,
}

/// Final state of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub tree: ConfigTree,
    /// Blocks still open at end of input.
    pub open_blocks: usize,
    /// Multiline value still open at end of input.
    pub unterminated: Option<PendingMultiline>,
    /// `end`/`next` lines that found no open block.
    pub underflows: usize,
    /// Physical lines consumed.
    pub lines: usize,
}

impl ScanSummary {
    /// True when every block was closed, no multiline value was left open
    /// and no exit line underflowed.
    pub fn is_clean(&self) -> bool {
        self.open_blocks == 0 && self.unterminated.is_none() && self.underflows == 0
    }
}

/// One scan session: the tree under construction plus the cursor, the
/// block stack and multiline state.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    options: ScanOptions,
    tree: ConfigTree,
    cursor: Cursor,
    stack: BlockStack,
    multiline: Option<PendingMultiline>,
    line_number: usize,
    underflows: usize,
}

impl Scanner {
    /// Create a scanner with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ScanOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Create a scanner using `quote` as the quote character.
    pub fn with_quote(quote: char) -> Self {
        Self::with_options(ScanOptions::builder().quote(quote).build())
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan one physical line.
    ///
    /// # Errors
    ///
    /// Fails on an unrecognized leading keyword, a missing operand, or an
    /// exceeded limit. The failing line has no effect on the tree.
    pub fn scan_line(&mut self, line: &str) -> ScanResult<()> {
        self.line_number += 1;
        let line_num = self.line_number;

        if line.len() > self.options.limits.max_line_length {
            return Err(ScanError::security(
                format!(
                    "line length {} exceeds limit {}",
                    line.len(),
                    self.options.limits.max_line_length
                ),
                line_num,
            ));
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(());
        }

        if self.multiline.is_some() {
            return self.accumulate(line, line_num);
        }

        let command = Command::parse(trimmed, line_num)
            .map_err(|e| e.with_context(format!("inside block {}", self.cursor)))?;
        match command {
            Some(command) => self.dispatch(command, line_num),
            None => Ok(()),
        }
    }

    /// Consume one physical line without interpreting it.
    ///
    /// Only the line counter advances, so later errors keep their position.
    /// Callers use this to drop lines such as `#config-version=...` headers.
    pub fn skip_line(&mut self) {
        self.line_number += 1;
    }

    /// Scan a whole configuration text, line by line.
    ///
    /// Equivalent to calling [`Scanner::scan_line`] on each line in order.
    /// Stops at the first error.
    pub fn scan_str(&mut self, text: &str) -> ScanResult<()> {
        self.scan_lines(text.lines())
    }

    /// Scan a sequence of lines in order, stopping at the first error.
    pub fn scan_lines<I, S>(&mut self, lines: I) -> ScanResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.scan_line(line.as_ref())?;
        }
        Ok(())
    }

    /// Read-only snapshot of the tree built so far.
    pub fn tree(&self) -> &ConfigTree {
        &self.tree
    }

    pub fn into_tree(self) -> ConfigTree {
        self.tree
    }

    /// Level currently receiving mutations.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn stack(&self) -> &BlockStack {
        &self.stack
    }

    /// Number of open blocks.
    pub fn depth(&self) -> usize {
        self.stack.size()
    }

    pub fn is_multiline_open(&self) -> bool {
        self.multiline.is_some()
    }

    pub fn pending_multiline(&self) -> Option<&PendingMultiline> {
        self.multiline.as_ref()
    }

    /// Physical lines consumed so far, blank ones included.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn underflows(&self) -> usize {
        self.underflows
    }

    /// Consume the scanner and report its final state.
    pub fn finish(self) -> ScanSummary {
        ScanSummary {
            tree: self.tree,
            open_blocks: self.stack.size(),
            unterminated: self.multiline,
            underflows: self.underflows,
            lines: self.line_number,
        }
    }

    fn dispatch(&mut self, command: Command, line_num: usize) -> ScanResult<()> {
        match command {
            Command::Config { path } => {
                self.check_depth(line_num)?;
                let segments: Vec<&str> = path.iter().map(|s| self.normalize(s)).collect();
                let level = self.tree.level_mut(&self.cursor);
                let cursor = descend(level, self.cursor.clone(), &segments);
                self.open_block(cursor);
            }
            Command::Edit { id } => {
                self.check_depth(line_num)?;
                let key = self.normalize(&id);
                let level = self.tree.level_mut(&self.cursor);
                let cursor = enter_fresh(level, &self.cursor, key);
                self.open_block(cursor);
            }
            Command::Set { key, value } => {
                let classified = classify(&value, self.options.quote, false);
                if classified.kind == Classification::Opening {
                    self.check_multiline_size(classified.value.len(), line_num)?;
                    self.tree
                        .level_mut(&self.cursor)
                        .insert(key.clone(), classified.value);
                    self.multiline = Some(PendingMultiline {
                        key,
                        start_line: line_num,
                        size: classified.value.len(),
                    });
                } else {
                    let stored = self.normalize(classified.value).to_string();
                    self.tree.level_mut(&self.cursor).insert(key, stored);
                }
            }
            Command::Unset { key } => {
                self.tree.level_mut(&self.cursor).insert(key, ConfigValue::Null);
            }
            Command::Next | Command::End => self.close_block(),
        }
        Ok(())
    }

    fn accumulate(&mut self, line: &str, line_num: usize) -> ScanResult<()> {
        let classified = classify(line, self.options.quote, true);
        let Some(pending) = self.multiline.as_mut() else {
            return Ok(());
        };

        let new_size = pending
            .size
            .saturating_add(1)
            .saturating_add(classified.value.len());
        if new_size > self.options.limits.max_multiline_size {
            return Err(ScanError::security(
                format!(
                    "multiline value '{}' size {} exceeds limit {}",
                    pending.key, new_size, self.options.limits.max_multiline_size
                ),
                line_num,
            )
            .with_context(format!("value opened at line {}", pending.start_line)));
        }
        pending.size = new_size;

        let level = self.tree.level_mut(&self.cursor);
        if let Some(ConfigValue::Scalar(existing)) = level.get_mut(&pending.key) {
            existing.push('\n');
            existing.push_str(classified.value);
        } else {
            level.insert(pending.key.clone(), format!("\n{}", classified.value));
        }

        if classified.kind == Classification::Closing {
            if self.options.unquote {
                if let Some(ConfigValue::Scalar(value)) = level.get_mut(&pending.key) {
                    let stripped = unquote(value, self.options.quote);
                    if stripped.len() != value.len() {
                        *value = stripped.to_string();
                    }
                }
            }
            self.multiline = None;
        }
        Ok(())
    }

    fn open_block(&mut self, cursor: Cursor) {
        self.stack.push(cursor.clone());
        self.cursor = cursor;
    }

    fn close_block(&mut self) {
        if self.stack.pop().is_none() {
            self.underflows += 1;
        }
        self.cursor = self.stack.top().cloned().unwrap_or_default();
    }

    fn check_depth(&self, line_num: usize) -> ScanResult<()> {
        if self.stack.size() >= self.options.limits.max_block_depth {
            return Err(ScanError::security(
                format!(
                    "block depth {} exceeds limit {}",
                    self.stack.size() + 1,
                    self.options.limits.max_block_depth
                ),
                line_num,
            )
            .with_context(format!("inside block {}", self.cursor)));
        }
        Ok(())
    }

    fn check_multiline_size(&self, size: usize, line_num: usize) -> ScanResult<()> {
        if size > self.options.limits.max_multiline_size {
            return Err(ScanError::security(
                format!(
                    "multiline value size {} exceeds limit {}",
                    size, self.options.limits.max_multiline_size
                ),
                line_num,
            ));
        }
        Ok(())
    }

    fn normalize<'a>(&self, value: &'a str) -> &'a str {
        if self.options.unquote {
            unquote(value, self.options.quote)
        } else {
            value
        }
    }
}

/// Scan a whole configuration text with default options.
pub fn parse(text: &str) -> ScanResult<ConfigTree> {
    parse_with_options(text, ScanOptions::default())
}

/// Scan a whole configuration text with custom options.
pub fn parse_with_options(text: &str, options: ScanOptions) -> ScanResult<ConfigTree> {
    let mut scanner = Scanner::with_options(options);
    scanner.scan_str(text)?;
    Ok(scanner.into_tree())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanErrorKind;

    fn scan(lines: &[&str]) -> Scanner {
        let mut scanner = Scanner::new();
        for line in lines {
            scanner.scan_line(line).unwrap();
        }
        scanner
    }

    fn scalar<'a>(tree: &'a ConfigTree, path: &[&str]) -> Option<&'a str> {
        tree.get_path(path).and_then(ConfigValue::as_str)
    }

    // ==================== Block structure ====================

    #[test]
    fn test_interface_example_raw() {
        let scanner = scan(&[
            "config system interface",
            "edit \"port1\"",
            "set ip \"10.0.0.1/24\"",
            "next",
            "end",
        ]);
        assert_eq!(
            scalar(scanner.tree(), &["system", "interface", "\"port1\"", "ip"]),
            Some("\"10.0.0.1/24\"")
        );
        assert!(scanner.stack().is_empty());
        assert!(scanner.cursor().is_root());
    }

    #[test]
    fn test_interface_example_unquoted() {
        let options = ScanOptions::builder().unquote(true).build();
        let tree = parse_with_options(
            "config system interface\nedit \"port1\"\nset ip \"10.0.0.1/24\"\nnext\nend\n",
            options,
        )
        .unwrap();

        let port1: ConfigTree = [("ip", ConfigValue::from("10.0.0.1/24"))].into_iter().collect();
        let interface: ConfigTree = [("port1", port1)].into_iter().collect();
        let system: ConfigTree = [("interface", interface)].into_iter().collect();
        let expected: ConfigTree = [("system", system)].into_iter().collect();
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_multi_segment_config_pushes_one_frame() {
        let mut scanner = scan(&["config firewall address"]);
        assert_eq!(scanner.depth(), 1);
        assert_eq!(scanner.cursor().to_string(), "firewall.address");

        scanner.scan_line("end").unwrap();
        assert_eq!(scanner.depth(), 0);
        assert!(scanner.cursor().is_root());
        assert_eq!(scanner.underflows(), 0);
    }

    #[test]
    fn test_nested_config_inside_edit() {
        let scanner = scan(&[
            "config vpn ipsec phase1-interface",
            "edit \"tunnel\"",
            "config ipv4-exclude-range",
            "edit 1",
            "set start-ip 10.1.1.1",
            "next",
            "end",
            "set proposal aes256-sha256",
            "next",
            "end",
        ]);
        let tree = scanner.tree();
        assert_eq!(
            scalar(
                tree,
                &["vpn", "ipsec", "phase1-interface", "\"tunnel\"", "ipv4-exclude-range", "1", "start-ip"]
            ),
            Some("10.1.1.1")
        );
        assert_eq!(
            scalar(tree, &["vpn", "ipsec", "phase1-interface", "\"tunnel\"", "proposal"]),
            Some("aes256-sha256")
        );
        assert!(scanner.stack().is_empty());
    }

    #[test]
    fn test_sibling_edits_share_parent() {
        let scanner = scan(&[
            "config firewall policy",
            "edit 1",
            "set action accept",
            "next",
            "edit 2",
            "set action deny",
            "next",
            "end",
        ]);
        let policy = scanner
            .tree()
            .get_path(&["firewall", "policy"])
            .and_then(ConfigValue::as_tree)
            .unwrap();
        let ids: Vec<&String> = policy.keys().collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_edit_multi_word_identifier() {
        let scanner = scan(&["config firewall address", "edit \"my   server\"", "next", "end"]);
        assert!(scanner
            .tree()
            .get_path(&["firewall", "address", "\"my server\""])
            .is_some());
    }

    #[test]
    fn test_bare_edit_opens_empty_key() {
        let scanner = scan(&["config firewall address", "edit", "set subnet 1.1.1.1", "next", "end"]);
        assert_eq!(scalar(scanner.tree(), &["firewall", "address", "", "subnet"]), Some("1.1.1.1"));
        assert_eq!(scanner.depth(), 0);
        assert_eq!(scanner.underflows(), 0);
    }

    #[test]
    fn test_repeated_edit_replaces_entry() {
        let scanner = scan(&[
            "config firewall address",
            "edit a",
            "set subnet 1.1.1.1",
            "next",
            "edit a",
            "set comment again",
            "next",
            "end",
        ]);
        let entry = scanner
            .tree()
            .get_path(&["firewall", "address", "a"])
            .and_then(ConfigValue::as_tree)
            .unwrap();
        assert!(!entry.contains_key("subnet"));
        assert_eq!(entry.get("comment").and_then(ConfigValue::as_str), Some("again"));
    }

    #[test]
    fn test_repeated_config_reuses_block() {
        let scanner = scan(&[
            "config system global",
            "set hostname fw01",
            "end",
            "config system global",
            "set timezone 04",
            "end",
        ]);
        let global = scanner
            .tree()
            .get_path(&["system", "global"])
            .and_then(ConfigValue::as_tree)
            .unwrap();
        assert_eq!(global.len(), 2);
    }

    #[test]
    fn test_config_without_path_pushes_current_level() {
        let mut scanner = scan(&["config system", "config"]);
        assert_eq!(scanner.depth(), 2);
        assert_eq!(scanner.cursor().to_string(), "system");
        scanner.scan_line("end").unwrap();
        assert_eq!(scanner.cursor().to_string(), "system");
    }

    #[test]
    fn test_keywords_case_insensitive() {
        let scanner = scan(&["CONFIG system global", "SET hostname fw01", "End"]);
        assert_eq!(scalar(scanner.tree(), &["system", "global", "hostname"]), Some("fw01"));
        assert!(scanner.stack().is_empty());
    }

    // ==================== set / unset ====================

    #[test]
    fn test_unset_yields_explicit_null() {
        let scanner = scan(&["config system global", "set a 1", "unset a", "unset b", "end"]);
        let global = scanner
            .tree()
            .get_path(&["system", "global"])
            .and_then(ConfigValue::as_tree)
            .unwrap();
        assert_eq!(global.get("a"), Some(&ConfigValue::Null));
        assert_eq!(global.get("b"), Some(&ConfigValue::Null));
        assert!(global.get("c").is_none());
    }

    #[test]
    fn test_unset_overwrites_block() {
        let scanner = scan(&["config a", "config b", "end", "unset b", "end"]);
        assert_eq!(scanner.tree().get_path(&["a", "b"]), Some(&ConfigValue::Null));
    }

    #[test]
    fn test_set_value_words_rejoined() {
        let scanner = scan(&["set ip   192.168.1.99    255.255.255.0"]);
        assert_eq!(scalar(scanner.tree(), &["ip"]), Some("192.168.1.99 255.255.255.0"));
    }

    #[test]
    fn test_set_without_value_stores_empty() {
        let scanner = scan(&["set status"]);
        assert_eq!(scalar(scanner.tree(), &["status"]), Some(""));
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let scanner = scan(&["set a 1", "set a 2"]);
        assert_eq!(scalar(scanner.tree(), &["a"]), Some("2"));
    }

    #[test]
    fn test_unquote_keeps_compound_values() {
        let options = ScanOptions::builder().unquote(true).build();
        let tree = parse_with_options("set member \"a\" \"b\"\nset name \"x\"", options).unwrap();
        assert_eq!(scalar(&tree, &["member"]), Some("\"a\" \"b\""));
        assert_eq!(scalar(&tree, &["name"]), Some("x"));
    }

    // ==================== Multiline values ====================

    #[test]
    fn test_multiline_two_lines() {
        let scanner = scan(&["set description \"line one", "continues here\""]);
        assert_eq!(
            scalar(scanner.tree(), &["description"]),
            Some("\"line one\ncontinues here\"")
        );
        assert!(!scanner.is_multiline_open());
    }

    #[test]
    fn test_multiline_lines_are_not_commands() {
        let scanner = scan(&[
            "config system replacemsg",
            "set buffer \"<html>",
            "  end of nothing",
            "set not-a-key",
            "</html>\"",
            "end",
        ]);
        let msg = scanner
            .tree()
            .get_path(&["system", "replacemsg"])
            .and_then(ConfigValue::as_tree)
            .unwrap();
        assert_eq!(msg.len(), 1);
        assert_eq!(
            msg.get("buffer").and_then(ConfigValue::as_str),
            Some("\"<html>\nend of nothing\nset not-a-key\n</html>\"")
        );
        assert!(scanner.stack().is_empty());
    }

    #[test]
    fn test_multiline_unknown_keyword_inside_is_accepted() {
        let scanner = scan(&["set text \"start", "show me", "stop\""]);
        assert_eq!(scalar(scanner.tree(), &["text"]), Some("\"start\nshow me\nstop\""));
    }

    #[test]
    fn test_multiline_escaped_quote_continues() {
        let scanner = scan(&["set text \"a", "say \\\"", "b\""]);
        assert_eq!(scalar(scanner.tree(), &["text"]), Some("\"a\nsay \\\"\nb\""));
        assert!(!scanner.is_multiline_open());
    }

    #[test]
    fn test_multiline_blank_lines_skipped() {
        let scanner = scan(&["set text \"a", "", "   ", "b\""]);
        assert_eq!(scalar(scanner.tree(), &["text"]), Some("\"a\nb\""));
    }

    #[test]
    fn test_multiline_lone_quote_opens() {
        let scanner = scan(&["set text \"", "body", "\"", "tail\""]);
        assert_eq!(scalar(scanner.tree(), &["text"]), Some("\"\nbody\n\"\ntail\""));
        assert!(!scanner.is_multiline_open());
    }

    #[test]
    fn test_multiline_unterminated_is_observable() {
        let mut scanner = scan(&["config system global", "set motd \"hello", "world"]);
        assert!(scanner.is_multiline_open());
        let pending = scanner.pending_multiline().unwrap();
        assert_eq!(pending.key, "motd");
        assert_eq!(pending.start_line, 2);

        scanner.scan_line("end").unwrap();
        let summary = scanner.finish();
        assert!(!summary.is_clean());
        assert_eq!(summary.open_blocks, 1);
        assert_eq!(
            summary.unterminated.as_ref().map(|p| p.key.as_str()),
            Some("motd")
        );
        assert_eq!(
            scalar(&summary.tree, &["system", "global", "motd"]),
            Some("\"hello\nworld\nend")
        );
    }

    #[test]
    fn test_multiline_unquoted_on_close() {
        let options = ScanOptions::builder().unquote(true).build();
        let tree = parse_with_options("set description \"line one\ncontinues here\"", options).unwrap();
        assert_eq!(scalar(&tree, &["description"]), Some("line one\ncontinues here"));
    }

    #[test]
    fn test_custom_quote_character() {
        let mut scanner = Scanner::with_quote('\'');
        scanner
            .scan_str("set a \"not open\nset b 'open\nclosed'")
            .unwrap();
        assert_eq!(scalar(scanner.tree(), &["a"]), Some("\"not open"));
        assert_eq!(scalar(scanner.tree(), &["b"]), Some("'open\nclosed'"));
    }

    // ==================== Unbalanced exits ====================

    #[test]
    fn test_underflow_resets_to_root() {
        let mut scanner = scan(&["end", "next"]);
        assert_eq!(scanner.underflows(), 2);
        assert!(scanner.cursor().is_root());

        scanner.scan_line("set after ok").unwrap();
        assert_eq!(scalar(scanner.tree(), &["after"]), Some("ok"));
    }

    #[test]
    fn test_fragment_starting_mid_block() {
        let scanner = scan(&["set ip 1.1.1.1", "next", "edit port2", "set ip 2.2.2.2", "next", "end"]);
        let tree = scanner.tree();
        assert_eq!(scalar(tree, &["ip"]), Some("1.1.1.1"));
        assert_eq!(scalar(tree, &["port2", "ip"]), Some("2.2.2.2"));
        assert_eq!(scanner.underflows(), 2);
    }

    // ==================== Errors ====================

    #[test]
    fn test_unknown_command_is_fatal() {
        let mut scanner = Scanner::new();
        let err = scanner.scan_str("config system global\nbogus line\nset a 1").unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::UnknownCommand);
        assert_eq!(err.line, 2);
        assert_eq!(err.context.as_deref(), Some("inside block system.global"));
        // Nothing after the failing line was applied
        assert!(scanner
            .tree()
            .get_path(&["system", "global"])
            .and_then(ConfigValue::as_tree)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_skip_line_keeps_line_numbers() {
        let mut scanner = Scanner::new();
        scanner.skip_line();
        scanner.scan_line("config system global").unwrap();
        let err = scanner.scan_line("bogus").unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(scanner.line_number(), 3);
        assert_eq!(scanner.depth(), 1);
    }

    #[test]
    fn test_default_options_have_no_limits() {
        assert_eq!(ScanOptions::default().limits, Limits::unlimited());

        let mut scanner = Scanner::new();
        for i in 0..300 {
            scanner.scan_line(&format!("config l{}", i)).unwrap();
        }
        assert_eq!(scanner.depth(), 300);
        scanner.scan_line(&format!("set long {}", "x".repeat(2 * 1024 * 1024))).unwrap();
    }

    #[test]
    fn test_recommended_limits_are_opt_in() {
        let options = ScanOptions::builder().limits(Limits::default()).build();
        let mut scanner = Scanner::with_options(options);
        for i in 0..256 {
            scanner.scan_line(&format!("config l{}", i)).unwrap();
        }
        let err = scanner.scan_line("config l256").unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::Security);
        assert_eq!(err.line, 257);
    }

    #[test]
    fn test_block_depth_limit() {
        let options = ScanOptions::builder().max_block_depth(2).build();
        let mut scanner = Scanner::with_options(options);
        scanner.scan_line("config a").unwrap();
        scanner.scan_line("edit b").unwrap();
        let err = scanner.scan_line("config c").unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::Security);
        assert_eq!(scanner.depth(), 2);
        assert!(scanner.tree().get_path(&["a", "b", "c"]).is_none());
    }

    #[test]
    fn test_line_length_limit() {
        let options = ScanOptions::builder().max_line_length(10).build();
        let mut scanner = Scanner::with_options(options);
        let err = scanner.scan_line("set key a-very-long-value").unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::Security);
        assert!(scanner.tree().is_empty());
    }

    #[test]
    fn test_multiline_size_limit() {
        let options = ScanOptions::builder().max_multiline_size(12).build();
        let mut scanner = Scanner::with_options(options);
        scanner.scan_line("set a \"12345").unwrap();
        let err = scanner.scan_line("67890123\"").unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::Security);
        assert_eq!(scalar(scanner.tree(), &["a"]), Some("\"12345"));
    }

    // ==================== Whole text ====================

    #[test]
    fn test_scan_str_matches_line_by_line() {
        let text = "config system interface\r\n    edit \"port1\"\r\n        set ip \"10.0.0.1/24\"\r\n    next\r\nend\r\n";
        let whole = parse(text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        let by_line = scan(&lines).into_tree();
        assert_eq!(whole, by_line);
    }

    #[test]
    fn test_line_number_counts_blank_lines() {
        let mut scanner = Scanner::new();
        scanner.scan_str("\n\nset a 1\n").unwrap();
        assert_eq!(scanner.line_number(), 3);
    }

    #[test]
    fn test_summary_clean_for_balanced_input() {
        let mut scanner = Scanner::new();
        scanner.scan_str("config a\nedit b\nnext\nend").unwrap();
        let summary = scanner.finish();
        assert!(summary.is_clean());
        assert_eq!(summary.lines, 4);
    }
}
