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

//! JSON output for parsed configurations.
//!
//! Blocks become JSON objects, `set` values become strings and `unset`
//! keys become `null`.
//!
//! ```rust
//! use fortiparse_json::{tree_to_json, to_json, ToJsonConfig};
//!
//! let tree = fortiparse_core::parse("config system global\nset hostname fw\nend").unwrap();
//! let json = tree_to_json(&tree).unwrap();
//! assert!(json.contains("\"hostname\": \"fw\""));
//!
//! let compact = to_json(&tree, &ToJsonConfig::compact()).unwrap();
//! assert_eq!(compact, r#"{"system":{"global":{"hostname":"fw"}}}"#);
//! ```

mod error;
mod to_json;

pub use error::JsonError;
pub use to_json::{to_json, to_json_value, to_json_writer, ToJsonConfig};

use fortiparse_core::ConfigTree;

/// Convert a tree to pretty-printed JSON with sorted keys.
pub fn tree_to_json(tree: &ConfigTree) -> Result<String, JsonError> {
    to_json(tree, &ToJsonConfig::default())
}
