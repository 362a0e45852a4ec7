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

//! Configuration tree, values and cursors.

use indexmap::map::{IndexMap, Iter, Keys};
use std::fmt;

/// A value stored under a key in a [`ConfigTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    /// A nested block (`config`/`edit`).
    Nested(ConfigTree),
    /// A `set` value, stored as written.
    Scalar(String),
    /// An explicit `unset`. Distinct from the key being absent.
    Null,
}

impl ConfigValue {
    /// Returns true if this value is a nested block.
    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Nested(_))
    }

    /// Returns true if this value was explicitly unset.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get the value as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as a nested tree.
    pub fn as_tree(&self) -> Option<&ConfigTree> {
        match self {
            Self::Nested(tree) => Some(tree),
            _ => None,
        }
    }

    /// Turn this value into an empty nested tree unless it already is one,
    /// and return the tree.
    fn make_nested(&mut self) -> &mut ConfigTree {
        match self {
            Self::Nested(tree) => tree,
            other => {
                *other = Self::Nested(ConfigTree::new());
                other.make_nested()
            }
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::Scalar(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::Scalar(s)
    }
}

impl From<ConfigTree> for ConfigValue {
    fn from(tree: ConfigTree) -> Self {
        Self::Nested(tree)
    }
}

/// One level of the configuration hierarchy.
///
/// Keys are unique within a level. Insertion order is preserved so that
/// output is deterministic; it carries no meaning otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigTree {
    entries: IndexMap<String, ConfigValue>,
}

impl ConfigTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys at this level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if this level has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert a value, returning the previous one. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Option<ConfigValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn iter(&self) -> Iter<'_, String, ConfigValue> {
        self.entries.iter()
    }

    pub fn keys(&self) -> Keys<'_, String, ConfigValue> {
        self.entries.keys()
    }

    /// Look up a value by a path of keys.
    ///
    /// An empty path returns `None`; use the tree itself for the root.
    pub fn get_path<S: AsRef<str>>(&self, path: &[S]) -> Option<&ConfigValue> {
        let (last, parents) = path.split_last()?;
        let mut level = self;
        for key in parents {
            level = level.get(key.as_ref())?.as_tree()?;
        }
        level.get(last.as_ref())
    }

    /// Resolve a cursor to the level it designates, if that level exists.
    pub fn level(&self, cursor: &Cursor) -> Option<&ConfigTree> {
        let mut level = self;
        for key in cursor.path() {
            level = level.get(key)?.as_tree()?;
        }
        Some(level)
    }

    /// Resolve a cursor for mutation, creating any missing level on the way.
    pub fn level_mut(&mut self, cursor: &Cursor) -> &mut ConfigTree {
        let mut level = self;
        for key in cursor.path() {
            level = level.child_mut(key);
        }
        level
    }

    /// Get the nested tree under `key`, creating it if absent.
    ///
    /// An existing scalar or null under `key` is replaced with an empty tree.
    pub fn child_mut(&mut self, key: &str) -> &mut ConfigTree {
        self.entries
            .entry(key.to_string())
            .or_insert_with(|| ConfigValue::Nested(ConfigTree::new()))
            .make_nested()
    }

    /// Replace whatever is under `key` with a fresh empty tree and return it.
    pub fn reset_child(&mut self, key: &str) -> &mut ConfigTree {
        self.entries
            .insert(key.to_string(), ConfigValue::Nested(ConfigTree::new()));
        self.child_mut(key)
    }

    /// Mutable access to a value at this level.
    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut ConfigValue> {
        self.entries.get_mut(key)
    }
}

impl<'a> IntoIterator for &'a ConfigTree {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for ConfigTree {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ConfigTree {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ConfigValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Nested(tree) => tree.serialize(serializer),
            Self::Scalar(s) => serializer.serialize_str(s),
            Self::Null => serializer.serialize_unit(),
        }
    }
}

/// A position in a [`ConfigTree`]: the keys leading from the root to one level.
///
/// The root cursor has an empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    path: Vec<String>,
}

impl Cursor {
    /// The cursor designating the tree root.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of levels below the root.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// A cursor one level below this one.
    pub fn child(&self, key: impl Into<String>) -> Self {
        let mut path = self.path.clone();
        path.push(key.into());
        Self { path }
    }
}

impl<S: Into<String>> FromIterator<S> for Cursor {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            path: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "root")
        } else {
            write!(f, "{}", self.path.join("."))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree() {
        let tree = ConfigTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.get("anything").is_none());
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut tree = ConfigTree::new();
        tree.insert("zeta", "1");
        tree.insert("alpha", "2");
        tree.insert("mid", "3");
        let keys: Vec<&String> = tree.keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_insert_existing_key_keeps_position() {
        let mut tree = ConfigTree::new();
        tree.insert("a", "1");
        tree.insert("b", "2");
        let previous = tree.insert("a", ConfigValue::Null);
        assert_eq!(previous, Some(ConfigValue::from("1")));
        let keys: Vec<&String> = tree.keys().collect();
        assert_eq!(keys, ["a", "b"]);
        assert!(tree.get("a").unwrap().is_null());
    }

    #[test]
    fn test_child_mut_creates_level() {
        let mut tree = ConfigTree::new();
        tree.child_mut("system").insert("hostname", "fw01");
        assert_eq!(
            tree.get_path(&["system", "hostname"]).and_then(ConfigValue::as_str),
            Some("fw01")
        );
    }

    #[test]
    fn test_child_mut_reuses_existing_level() {
        let mut tree = ConfigTree::new();
        tree.child_mut("system").insert("a", "1");
        tree.child_mut("system").insert("b", "2");
        assert_eq!(tree.get("system").unwrap().as_tree().unwrap().len(), 2);
    }

    #[test]
    fn test_child_mut_replaces_scalar() {
        let mut tree = ConfigTree::new();
        tree.insert("system", "oops");
        tree.child_mut("system");
        assert_eq!(tree.get("system"), Some(&ConfigValue::Nested(ConfigTree::new())));
    }

    #[test]
    fn test_reset_child_clears_level() {
        let mut tree = ConfigTree::new();
        tree.child_mut("port1").insert("ip", "1.1.1.1");
        tree.reset_child("port1");
        assert!(tree.get("port1").unwrap().as_tree().unwrap().is_empty());
    }

    #[test]
    fn test_get_path_missing_or_through_scalar() {
        let mut tree = ConfigTree::new();
        tree.insert("a", "scalar");
        assert!(tree.get_path(&["a", "b"]).is_none());
        assert!(tree.get_path(&["x"]).is_none());
        assert!(tree.get_path::<&str>(&[]).is_none());
    }

    #[test]
    fn test_level_and_level_mut() {
        let mut tree = ConfigTree::new();
        let cursor: Cursor = ["firewall", "policy", "1"].into_iter().collect();
        assert!(tree.level(&cursor).is_none());

        tree.level_mut(&cursor).insert("action", "accept");
        let level = tree.level(&cursor).unwrap();
        assert_eq!(level.get("action").and_then(ConfigValue::as_str), Some("accept"));
        assert!(tree.level(&Cursor::root()).is_some());
    }

    #[test]
    fn test_cursor_display_and_child() {
        let root = Cursor::root();
        assert!(root.is_root());
        assert_eq!(root.to_string(), "root");

        let child = root.child("system").child("interface");
        assert_eq!(child.depth(), 2);
        assert_eq!(child.to_string(), "system.interface");
        assert!(root.is_root());
    }

    #[test]
    fn test_value_accessors() {
        let scalar = ConfigValue::from("x");
        assert_eq!(scalar.as_str(), Some("x"));
        assert!(scalar.as_tree().is_none());
        assert!(!scalar.is_nested());

        let nested = ConfigValue::from(ConfigTree::new());
        assert!(nested.is_nested());
        assert!(nested.as_str().is_none());

        assert!(ConfigValue::Null.is_null());
        assert!(ConfigValue::Null.as_str().is_none());
    }

    #[test]
    fn test_from_iterator() {
        let tree: ConfigTree = [("a", ConfigValue::from("1")), ("b", ConfigValue::Null)]
            .into_iter()
            .collect();
        assert_eq!(tree.len(), 2);
        assert!(tree.get("b").unwrap().is_null());
    }
}
