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

//! Summary command - Per-section cell coverage

use colored::Colorize;
use deskbench_core::{summarize, AggregateOptions, Inputs, ReportError, ReportPaths, SectionCoverage};

/// Print how many cells of each table carry data.
///
/// # Errors
///
/// Returns `Err` if an input cannot be loaded or a library has no stats
/// entry.
pub fn summary(paths: &ReportPaths, options: AggregateOptions) -> Result<(), ReportError> {
    let inputs = Inputs::load(paths)?;
    let report = summarize(&inputs, options);

    let mut current_app: Option<&str> = None;
    for section in &report.sections {
        if current_app != Some(section.app.as_str()) {
            println!("{}", section.app.bold());
            current_app = Some(section.app.as_str());
        }
        println!("{}", section_line(section));
    }

    println!();
    println!(
        "{} {}/{} cells populated",
        "Total:".bold(),
        report.total_populated(),
        report.total_cells()
    );
    Ok(())
}

fn section_line(section: &SectionCoverage) -> String {
    let counts = format!("{}/{}", section.populated, section.cells);
    let counts = if section.rows == 0 {
        "no data".dimmed().to_string()
    } else if section.populated + section.overridden == section.cells {
        counts.green().to_string()
    } else {
        counts.yellow().to_string()
    };

    let mut line = format!(
        "  {:<16} {:>2} rows  {}",
        section.metric.name(),
        section.rows,
        counts
    );
    if section.overridden > 0 {
        line.push_str(&format!(" ({} custom)", section.overridden));
    }
    line
}
