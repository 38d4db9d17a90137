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

//! Generate command - Render the benchmark report

use super::write_stdout;
use colored::Colorize;
use deskbench_core::{generate_report, run, AggregateOptions, Inputs, ReportError, ReportPaths};

/// Render the report and write it to `paths.output`, or to stdout.
///
/// All inputs are loaded before anything is written, so a failed run leaves
/// an existing report untouched.
///
/// # Errors
///
/// Returns `Err` if an input cannot be loaded, a library has no stats
/// entry, or the output cannot be written.
pub fn generate(
    paths: &ReportPaths,
    options: AggregateOptions,
    to_stdout: bool,
) -> Result<(), ReportError> {
    if to_stdout {
        let inputs = Inputs::load(paths)?;
        let content = generate_report(&inputs, options)?;
        return write_stdout(&content);
    }

    let content = run(paths, options)?;
    eprintln!(
        "{} Wrote {} ({} bytes)",
        "✓".green().bold(),
        paths.output.display(),
        content.len()
    );
    Ok(())
}
