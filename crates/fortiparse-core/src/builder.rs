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

//! Hierarchy building for `config` and `edit` statements.
//!
//! `config system interface` descends through `system` then `interface`,
//! creating any missing level. The whole descent yields one cursor; the
//! scanner pushes a single block frame for it, matching the single `end`
//! that closes the statement.

use crate::tree::{ConfigTree, Cursor};

/// Descend from `level` (designated by `at`) through `segments`.
///
/// Missing levels are created empty, existing nested levels are reused, and
/// a scalar or null in the way is replaced with an empty level. An empty
/// segment list returns `at` unchanged.
pub fn descend<S: AsRef<str>>(level: &mut ConfigTree, at: Cursor, segments: &[S]) -> Cursor {
    match segments.split_first() {
        None => at,
        Some((first, rest)) => {
            let key = first.as_ref();
            let next = at.child(key);
            descend(level.child_mut(key), next, rest)
        }
    }
}

/// Open a fresh, empty level under `key` and return its cursor.
///
/// Whatever was stored under `key` before is discarded.
pub fn enter_fresh(level: &mut ConfigTree, at: &Cursor, key: &str) -> Cursor {
    level.reset_child(key);
    at.child(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ConfigValue;

    #[test]
    fn test_descend_empty_segments_is_noop() {
        let mut tree = ConfigTree::new();
        let cursor = descend::<&str>(&mut tree, Cursor::root(), &[]);
        assert!(cursor.is_root());
        assert!(tree.is_empty());
    }

    #[test]
    fn test_descend_creates_intermediate_levels() {
        let mut tree = ConfigTree::new();
        let cursor = descend(&mut tree, Cursor::root(), &["system", "interface"]);

        assert_eq!(cursor.path(), ["system", "interface"]);
        let interface = tree.get_path(&["system", "interface"]).unwrap();
        assert_eq!(interface, &ConfigValue::Nested(ConfigTree::new()));
    }

    #[test]
    fn test_descend_reuses_existing_levels() {
        let mut tree = ConfigTree::new();
        tree.child_mut("system").insert("hostname", "fw01");

        let cursor = descend(&mut tree, Cursor::root(), &["system", "dns"]);
        assert_eq!(cursor.to_string(), "system.dns");

        let system = tree.get("system").unwrap().as_tree().unwrap();
        assert_eq!(system.get("hostname").and_then(ConfigValue::as_str), Some("fw01"));
        assert!(system.contains_key("dns"));
    }

    #[test]
    fn test_descend_existing_path_advances_cursor() {
        let mut tree = ConfigTree::new();
        descend(&mut tree, Cursor::root(), &["a", "b"]);
        let cursor = descend(&mut tree, Cursor::root(), &["a", "b"]);
        assert_eq!(cursor.path(), ["a", "b"]);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_descend_from_nested_level() {
        let mut tree = ConfigTree::new();
        let start = descend(&mut tree, Cursor::root(), &["vdom"]);
        let level = tree.level_mut(&start);
        let cursor = descend(level, start.clone(), &["root", "system"]);
        assert_eq!(cursor.to_string(), "vdom.root.system");
        assert!(tree.get_path(&["vdom", "root", "system"]).is_some());
    }

    #[test]
    fn test_descend_replaces_scalar_in_the_way() {
        let mut tree = ConfigTree::new();
        tree.insert("log", "disk");
        descend(&mut tree, Cursor::root(), &["log", "setting"]);
        assert!(tree.get_path(&["log", "setting"]).unwrap().is_nested());
    }

    #[test]
    fn test_enter_fresh_discards_previous_content() {
        let mut tree = ConfigTree::new();
        tree.child_mut("port1").insert("ip", "10.0.0.1");

        let cursor = enter_fresh(&mut tree, &Cursor::root(), "port1");
        assert_eq!(cursor.path(), ["port1"]);
        assert!(tree.get("port1").unwrap().as_tree().unwrap().is_empty());
    }
}
