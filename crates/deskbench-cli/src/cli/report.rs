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

//! Report commands.

use crate::commands;
use clap::{Args, Subcommand};
use deskbench_core::config::{
    DEFAULT_BEGIN_TEMPLATE, DEFAULT_BENCHMARKS_FILE, DEFAULT_CONFIG_FILE, DEFAULT_END_TEMPLATE,
    DEFAULT_OUTPUT, DEFAULT_STATS_FILE,
};
use deskbench_core::{AggregateOptions, MedianOrdering, ReportError, ReportPaths};
use std::path::PathBuf;

/// Output value meaning "write to stdout".
const STDOUT_MARKER: &str = "-";

/// Input files and aggregation flags shared by every report command.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Report configuration (apps, architectures, libraries)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Benchmark results written by the runner
    #[arg(long, value_name = "FILE", default_value = DEFAULT_BENCHMARKS_FILE)]
    pub benchmarks: PathBuf,

    /// Repository statistics (stars, forks, last update)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_STATS_FILE)]
    pub stats: PathBuf,

    /// Template placed before the generated tables
    #[arg(long, value_name = "FILE", default_value = DEFAULT_BEGIN_TEMPLATE)]
    pub begin: PathBuf,

    /// Template appended after the generated tables
    #[arg(long, value_name = "FILE", default_value = DEFAULT_END_TEMPLATE)]
    pub end: PathBuf,

    /// Pick start time medians in numeric order instead of string order
    #[arg(long)]
    pub numeric_median: bool,
}

impl InputArgs {
    /// Builds the path set, writing the report to `output`.
    pub fn paths(&self, output: impl Into<PathBuf>) -> ReportPaths {
        ReportPaths {
            config: self.config.clone(),
            benchmarks: self.benchmarks.clone(),
            stats: self.stats.clone(),
            begin_template: self.begin.clone(),
            end_template: self.end.clone(),
            output: output.into(),
        }
    }

    /// Aggregation options selected by the flags.
    pub fn options(&self) -> AggregateOptions {
        let ordering = if self.numeric_median {
            MedianOrdering::Numeric
        } else {
            MedianOrdering::Lexicographic
        };
        AggregateOptions::default().with_median_ordering(ordering)
    }
}

/// Report commands.
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Generate the markdown report
    ///
    /// Reads every input, renders the comparison tables, and overwrites the
    /// output file. Nothing is written if any input fails to load.
    Generate {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output file path ("-" for stdout)
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
        output: String,
    },

    /// Show how many table cells have data
    ///
    /// Counts rows and populated cells per app and metric without writing
    /// a report.
    Summary {
        #[command(flatten)]
        inputs: InputArgs,
    },
}

impl ReportCommands {
    /// Execute the report command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), ReportError> {
        match self {
            ReportCommands::Generate { inputs, output } => {
                let to_stdout = output == STDOUT_MARKER;
                commands::generate(&inputs.paths(output), inputs.options(), to_stdout)
            }
            ReportCommands::Summary { inputs } => {
                commands::summary(&inputs.paths(DEFAULT_OUTPUT), inputs.options())
            }
        }
    }
}
