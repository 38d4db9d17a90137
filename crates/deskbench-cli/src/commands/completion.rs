// Deskbench - Desktop Framework Benchmark Reports
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
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

use clap::Command;
use clap_complete::{generate, Generator};
use deskbench_core::ReportError;
use std::io;

/// Generate a shell completion script to stdout for a given command.
///
/// # Examples
///
/// ```no_run
/// use clap::Command;
/// use clap_complete::shells::Bash;
/// use deskbench_cli::commands::generate_completion_for_command;
///
/// # fn main() -> Result<(), deskbench_core::ReportError> {
/// let mut cmd = Command::new("deskbench");
/// generate_completion_for_command(Bash, &mut cmd)?;
/// # Ok(())
/// # }
/// ```
pub fn generate_completion_for_command<G: Generator>(
    generator: G,
    cmd: &mut Command,
) -> Result<(), ReportError> {
    let name = cmd.get_name().to_string();
    generate(generator, cmd, name, &mut io::stdout());
    Ok(())
}

/// Installation instructions for shell completions.
///
/// Shell names are case-insensitive. Returns `None` for shells without
/// completion support.
///
/// ```
/// use deskbench_cli::commands::installation_instructions;
///
/// assert!(installation_instructions("bash").unwrap().contains("~/.bashrc"));
/// assert!(installation_instructions("tcsh").is_none());
/// ```
pub fn installation_instructions(shell: &str) -> Option<&'static str> {
    let text = match shell.to_lowercase().as_str() {
        "bash" => {
            r#"# Bash completion installation:

# For current session only:
eval "$(deskbench completion bash)"

# For persistent installation, add to your ~/.bashrc:
echo 'eval "$(deskbench completion bash)"' >> ~/.bashrc

# Or save to completions directory:
deskbench completion bash > ~/.local/share/bash-completion/completions/deskbench
"#
        }
        "zsh" => {
            r#"# Zsh completion installation:

# For current session only:
eval "$(deskbench completion zsh)"

# Or save to a directory listed in $fpath:
deskbench completion zsh > ~/.zsh/completions/_deskbench
"#
        }
        "fish" => {
            r#"# Fish completion installation:

deskbench completion fish > ~/.config/fish/completions/deskbench.fish
"#
        }
        "powershell" | "pwsh" => {
            r#"# PowerShell completion installation:

# Add this line to the profile at $PROFILE:
deskbench completion powershell | Out-String | Invoke-Expression
"#
        }
        "elvish" => {
            r#"# Elvish completion installation:

# Add this line to ~/.elvish/rc.elv:
eval (deskbench completion elvish)
"#
        }
        _ => return None,
    };
    Some(text)
}
