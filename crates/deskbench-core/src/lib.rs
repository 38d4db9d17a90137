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

//! Deskbench core: benchmark aggregation and markdown report rendering.
//!
//! Builds the comparison README for desktop application frameworks from the
//! results of the benchmark runner.
//!
//! # Pipeline
//!
//! ```text
//! loader ──► aggregate ──► render ──► report
//! (JSON,     (StatMap per   (markdown   (assembly,
//!  templates) app/arch/      fragments)  single write)
//!             metric)
//! ```
//!
//! - [`loader`]: reads `config.json`, `benchmarks.json`, `stats.json`, and
//!   the begin/end templates, failing fast on any bad input
//! - [`aggregate`]: build size/time passthrough, memory means, start time
//!   medians
//! - [`render`]: header substitution, tables, footnotes
//! - [`report`]: assembly, export, and coverage summaries
//!
//! # Example
//!
//! ```no_run
//! use deskbench_core::{run, AggregateOptions, ReportPaths};
//!
//! # fn main() -> Result<(), deskbench_core::ReportError> {
//! let report = run(&ReportPaths::default(), AggregateOptions::default())?;
//! println!("{} bytes written", report.len());
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod format;
pub mod loader;
pub mod model;
pub mod render;
pub mod report;

pub use aggregate::{AggregateOptions, Aggregator, MedianOrdering};
pub use config::{ReportConfig, ReportPaths};
pub use error::{ReportError, Result};
pub use loader::Inputs;
pub use model::{Context, Metric, StatMap, StatValue};
pub use render::Renderer;
pub use report::{export_markdown, generate_report, run, summarize, ReportSummary, SectionCoverage};
