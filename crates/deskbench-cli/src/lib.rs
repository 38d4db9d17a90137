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

//! Deskbench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **generate**: Build the markdown report and write it (default `../README.md`)
//! - **summary**: Print per-section cell coverage without writing anything
//! - **completion**: Generate shell completion scripts
//!
//! # Inputs
//!
//! Every command that reads benchmark data accepts the same flags, defaulting
//! to the file names the benchmark runner writes in its working directory:
//!
//! | Flag | Default |
//! |------|---------|
//! | `--config` | `config.json` |
//! | `--benchmarks` | `benchmarks.json` |
//! | `--stats` | `stats.json` |
//! | `--begin` | `README.template.begin.md` |
//! | `--end` | `README.template.end.md` |
//!
//! # Example
//!
//! ```no_run
//! use deskbench_cli::commands::generate;
//! use deskbench_core::{AggregateOptions, ReportPaths};
//!
//! # fn main() -> Result<(), deskbench_core::ReportError> {
//! generate(&ReportPaths::default(), AggregateOptions::default(), false)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Commands return `Result<(), ReportError>`. The binary prints the error
//! to stderr and exits with a failure code; no report is written.

pub mod cli;
pub mod commands;
