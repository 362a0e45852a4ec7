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

//! Shell completion generation

use crate::error::CliError;
use clap::Command;
use clap_complete::{generate, Shell};
use std::io;

/// Supported shell names, as accepted by [`parse_shell`].
pub const SUPPORTED_SHELLS: &str = "bash, zsh, fish, powershell, elvish";

/// Resolve a shell name, ignoring case. `pwsh` is accepted for PowerShell.
pub fn parse_shell(shell: &str) -> Result<Shell, CliError> {
    match shell.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        "powershell" | "pwsh" => Ok(Shell::PowerShell),
        "elvish" => Ok(Shell::Elvish),
        _ => Err(CliError::invalid_input(format!(
            "Unsupported shell: '{}'. Supported shells: {}",
            shell, SUPPORTED_SHELLS
        ))),
    }
}

/// Write the completion script for `cmd` to stdout.
pub fn generate_completion_for_command(shell: Shell, cmd: &mut Command) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, &mut io::stdout());
}

/// Installation instructions for a shell's completion script.
///
/// ```
/// use fortiparse_cli::commands::print_installation_instructions;
///
/// assert!(print_installation_instructions("bash").contains("~/.bashrc"));
/// assert_eq!(print_installation_instructions("tcsh"), "Unsupported shell");
/// ```
pub fn print_installation_instructions(shell: &str) -> String {
    let Ok(shell) = parse_shell(shell) else {
        return "Unsupported shell".to_string();
    };
    match shell {
        Shell::Bash => {
            r#"# Bash completion installation:

# For current session only:
eval "$(fortiparse completion bash)"

# For persistent installation, add to your ~/.bashrc:
echo 'eval "$(fortiparse completion bash)"' >> ~/.bashrc
"#
        }
        Shell::Zsh => {
            r#"# Zsh completion installation:

# Save to a directory in $fpath:
fortiparse completion zsh > ~/.zsh/completions/_fortiparse
"#
        }
        Shell::Fish => {
            r#"# Fish completion installation:

fortiparse completion fish > ~/.config/fish/completions/fortiparse.fish
"#
        }
        Shell::PowerShell => {
            r#"# PowerShell completion installation:

# Add this line to the profile shown by $PROFILE:
fortiparse completion powershell | Out-String | Invoke-Expression
"#
        }
        _ => {
            r#"# Elvish completion installation:

# Add to your ~/.elvish/rc.elv:
eval (fortiparse completion elvish)
"#
        }
    }
    .to_string()
}
