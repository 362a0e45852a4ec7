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

//! Stress tests for large and deeply nested configurations.

use fortiparse_core::{
    parse, parse_with_options, traverse, Limits, ScanErrorKind, ScanOptions, StatsCollector,
};
use std::sync::Arc;
use std::thread;

#[test]
fn test_parse_10k_policies() {
    let mut doc = String::from("config firewall policy\n");
    for i in 0..10_000 {
        doc.push_str(&format!("    edit {}\n        set name \"rule-{}\"\n    next\n", i, i));
    }
    doc.push_str("end\n");

    let tree = parse(&doc).unwrap();
    let policy = tree
        .get_path(&["firewall", "policy"])
        .and_then(|v| v.as_tree())
        .unwrap();
    assert_eq!(policy.len(), 10_000);
}

#[test]
fn test_deep_nesting_stats() {
    let depth = 200;
    let mut doc = String::new();
    for i in 0..depth {
        doc.push_str(&format!("config level{}\n", i));
    }
    doc.push_str("set leaf value\n");
    for _ in 0..depth {
        doc.push_str("end\n");
    }

    let tree = parse(&doc).unwrap();
    let mut stats = StatsCollector::default();
    traverse(&tree, &mut stats).unwrap();
    assert_eq!(stats.block_count, depth);
    assert_eq!(stats.max_depth, depth);
}

#[test]
fn test_deep_nesting_exceeds_recommended_limit() {
    let doc = "config x\n".repeat(Limits::default().max_block_depth + 1);
    let options = ScanOptions::builder().limits(Limits::default()).build();
    let err = parse_with_options(&doc, options).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::Security);
}

#[test]
fn test_deep_nesting_with_default_options() {
    let doc = "config x\n".repeat(1_000);
    assert!(parse(&doc).is_ok());
}

#[test]
fn test_long_multiline_value() {
    let mut doc = String::from("config system replacemsg\nset buffer \"<html>\n");
    for i in 0..5_000 {
        doc.push_str(&format!("<p>paragraph {}</p>\n", i));
    }
    doc.push_str("</html>\"\nend\n");

    let tree = parse(&doc).unwrap();
    let buffer = tree
        .get_path(&["system", "replacemsg", "buffer"])
        .and_then(|v| v.as_str())
        .unwrap();
    assert_eq!(buffer.lines().count(), 5_002);
}

#[test]
fn test_concurrent_parsing() {
    let doc: Arc<str> = Arc::from("config system global\nset hostname fw\nend\n");
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let doc = Arc::clone(&doc);
            thread::spawn(move || parse(&doc).unwrap())
        })
        .collect();

    let trees: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(trees.windows(2).all(|w| w[0] == w[1]));
}
