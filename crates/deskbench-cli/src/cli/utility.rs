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

//! Utility commands.

use crate::commands;
use clap::CommandFactory;
use clap::Subcommand;
use clap_complete::shells::*;
use deskbench_core::ReportError;

/// Utility commands.
#[derive(Subcommand)]
pub enum UtilityCommands {
    /// Generate shell completion scripts
    ///
    /// Supported shells: bash, zsh, fish, powershell, elvish
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_name = "SHELL")]
        shell: String,

        /// Print installation instructions instead of generating script
        #[arg(short, long)]
        install: bool,
    },
}

impl UtilityCommands {
    /// Execute the utility command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the shell is not supported.
    pub fn execute(self) -> Result<(), ReportError> {
        match self {
            UtilityCommands::Completion { shell, install } => {
                if install {
                    let instructions = commands::installation_instructions(&shell).ok_or_else(
                        || ReportError::invalid_input(unsupported_shell(&shell)),
                    )?;
                    println!("{}", instructions);
                    Ok(())
                } else {
                    generate_completion(&shell)
                }
            }
        }
    }
}

fn unsupported_shell(shell: &str) -> String {
    format!(
        "Unsupported shell: '{}'. Supported shells: bash, zsh, fish, powershell, elvish",
        shell
    )
}

/// Generate shell completion for the specified shell.
///
/// Builds a command mirroring the binary's top level, since the parser
/// struct itself lives in `main.rs`.
fn generate_completion(shell: &str) -> Result<(), ReportError> {
    use clap::Parser;

    #[derive(Parser)]
    #[command(name = "deskbench")]
    #[command(author, version, about = "Deskbench - desktop framework benchmark reports")]
    struct TempCli {
        #[arg(short, long, global = true)]
        verbose: bool,

        #[command(subcommand)]
        command: super::Commands,
    }

    let mut cmd = TempCli::command();

    match shell.to_lowercase().as_str() {
        "bash" => commands::generate_completion_for_command(Bash, &mut cmd),
        "zsh" => commands::generate_completion_for_command(Zsh, &mut cmd),
        "fish" => commands::generate_completion_for_command(Fish, &mut cmd),
        "powershell" | "pwsh" => commands::generate_completion_for_command(PowerShell, &mut cmd),
        "elvish" => commands::generate_completion_for_command(Elvish, &mut cmd),
        _ => Err(ReportError::invalid_input(unsupported_shell(shell))),
    }
}
