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

//! Errors raised while producing JSON.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonError {
    /// Serialization or write failure.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Serialized output was not valid UTF-8.
    #[error("JSON output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
