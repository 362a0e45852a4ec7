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

//! Configuration tree to JSON conversion

use crate::error::JsonError;
use fortiparse_core::{ConfigTree, ConfigValue};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value as JsonValue};
use std::io::Write;

/// Configuration for JSON output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToJsonConfig {
    /// Indent nested levels on separate lines
    pub pretty: bool,
    /// Sort keys at every level; otherwise keep insertion order
    pub sort_keys: bool,
    /// Spaces per indentation level when pretty printing
    pub indent: usize,
}

impl Default for ToJsonConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            sort_keys: true,
            indent: 4,
        }
    }
}

impl ToJsonConfig {
    /// Single-line output with sorted keys.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Self::default()
        }
    }
}

/// Convert a tree to a JSON string
pub fn to_json(tree: &ConfigTree, config: &ToJsonConfig) -> Result<String, JsonError> {
    let mut buf = Vec::with_capacity(256);
    to_json_writer(tree, &mut buf, config)?;
    Ok(String::from_utf8(buf)?)
}

/// Write a tree as JSON to `writer`
pub fn to_json_writer<W: Write>(
    tree: &ConfigTree,
    writer: W,
    config: &ToJsonConfig,
) -> Result<(), JsonError> {
    if config.sort_keys {
        write_value(&to_json_value(tree), writer, config)
    } else {
        write_value(tree, writer, config)
    }
}

/// Convert a tree to a `serde_json::Value` with keys sorted at every level
pub fn to_json_value(tree: &ConfigTree) -> JsonValue {
    let mut entries: Vec<(&String, &ConfigValue)> = tree.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut map = Map::new();
    for (key, value) in entries {
        map.insert(key.clone(), value_to_json(value));
    }
    JsonValue::Object(map)
}

fn value_to_json(value: &ConfigValue) -> JsonValue {
    match value {
        ConfigValue::Nested(tree) => to_json_value(tree),
        ConfigValue::Scalar(s) => JsonValue::String(s.clone()),
        ConfigValue::Null => JsonValue::Null,
    }
}

fn write_value<T, W>(value: &T, writer: W, config: &ToJsonConfig) -> Result<(), JsonError>
where
    T: Serialize + ?Sized,
    W: Write,
{
    if config.pretty {
        let indent = " ".repeat(config.indent);
        let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(indent.as_bytes()));
        value.serialize(&mut ser)?;
    } else {
        serde_json::to_writer(writer, value)?;
    }
    Ok(())
}
