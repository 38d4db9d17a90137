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

//! Report assembly and export.

use crate::aggregate::{AggregateOptions, Aggregator};
use crate::config::ReportPaths;
use crate::error::{ReportError, Result};
use crate::loader::Inputs;
use crate::model::{Context, Metric};
use crate::render::{substitute_header, Renderer};
use std::fs;
use std::path::Path;
use tracing::info;

/// Assembles the full report: substituted begin template, one block per
/// app, then the end template verbatim.
///
/// The output depends only on `inputs` and `options`, so identical inputs
/// always produce identical bytes.
pub fn generate_report(inputs: &Inputs, options: AggregateOptions) -> Result<String> {
    let config = &inputs.config;
    let aggregator = Aggregator::new(config, &inputs.benchmarks).with_options(options);
    let renderer = Renderer::new(config, aggregator);

    let mut fragments =
        substitute_header(&inputs.begin_template, &config.libraries, &inputs.stats)?;
    for app in &config.apps {
        fragments.extend(renderer.app_block(app));
    }
    fragments.push(inputs.end_template.clone());

    Ok(fragments.concat())
}

/// Writes the report, replacing any existing file.
pub fn export_markdown(content: &str, path: &Path) -> Result<()> {
    fs::write(path, content).map_err(|e| ReportError::io_error(path, e))?;
    info!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}

/// Loads inputs, renders, and writes the report to `paths.output`.
///
/// Nothing is written unless every input loads and rendering succeeds.
pub fn run(paths: &ReportPaths, options: AggregateOptions) -> Result<String> {
    let inputs = Inputs::load(paths)?;
    let content = generate_report(&inputs, options)?;
    export_markdown(&content, &paths.output)?;
    Ok(content)
}

/// Table coverage for one (app, metric) section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionCoverage {
    /// App identifier.
    pub app: String,
    /// Section metric.
    pub metric: Metric,
    /// Architecture rows emitted.
    pub rows: usize,
    /// Cells across emitted rows.
    pub cells: usize,
    /// Cells showing at least one measured value.
    pub populated: usize,
    /// Cells replaced by a custom message.
    pub overridden: usize,
}

/// Coverage of every report section, in report order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// One entry per (app, metric).
    pub sections: Vec<SectionCoverage>,
}

impl ReportSummary {
    /// Total populated cells across sections.
    pub fn total_populated(&self) -> usize {
        self.sections.iter().map(|s| s.populated).sum()
    }

    /// Total cells across sections.
    pub fn total_cells(&self) -> usize {
        self.sections.iter().map(|s| s.cells).sum()
    }
}

/// Counts rows and populated cells per section without rendering.
pub fn summarize(inputs: &Inputs, options: AggregateOptions) -> ReportSummary {
    let config = &inputs.config;
    let aggregator = Aggregator::new(config, &inputs.benchmarks).with_options(options);
    let mut sections = Vec::new();

    for app in &config.apps {
        for metric in Metric::ALL {
            let mut coverage = SectionCoverage {
                app: app.clone(),
                metric,
                rows: 0,
                cells: 0,
                populated: 0,
                overridden: 0,
            };

            for architecture in &config.architectures {
                let stats = aggregator.stats(metric, app, &architecture.id);
                if stats.is_empty() {
                    continue;
                }

                coverage.rows += 1;
                coverage.cells += config.libraries.len();
                for library in &config.libraries {
                    if config.custom_message(app, &library.id).is_some() {
                        coverage.overridden += 1;
                    } else if Context::ALL
                        .iter()
                        .any(|context| stats.populated(&library.id, *context).is_some())
                    {
                        coverage.populated += 1;
                    }
                }
            }

            sections.push(coverage);
        }
    }

    ReportSummary { sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;
    use tempfile::TempDir;

    fn inputs() -> Inputs {
        let config = ReportConfig::new()
            .with_app("hello-world")
            .with_architecture("ubuntu-latest", "Linux")
            .with_architecture("windows-latest", "Windows")
            .with_library("electron", "Electron", "https://electronjs.org")
            .with_library("tauri", "Tauri", "https://tauri.app")
            .with_custom_message("hello-world", "tauri", "1", "Does not build");

        Inputs {
            config,
            benchmarks: serde_json::from_str(
                r#"{"ubuntu-latest": {"benchmarkData": {
                    "../benchmark/hello-world/electron": {"buildSize": 1500, "buildTime": 10},
                    "../benchmark/hello-world/electron/Release": {"benchmarks": [
                        {"memoryUsage": {"med": 2000, "sysMed": 3000}, "startTime": 250}
                    ]}
                }}}"#,
            )
            .unwrap(),
            stats: serde_json::from_str(
                r#"{
                    "electron": {"stars": 1000, "forks": 100, "lastUpdate": "today"},
                    "tauri": {"stars": 2000, "forks": 200, "lastUpdate": "yesterday"}
                }"#,
            )
            .unwrap(),
            begin_template: "# Comparison\n| **Github stars** |".to_string(),
            end_template: "\n## License\n".to_string(),
        }
    }

    #[test]
    fn test_generate_report_layout() {
        let report = generate_report(&inputs(), AggregateOptions::default()).unwrap();

        assert!(report.starts_with("# Comparison\n| **Github stars** | 1k | 2k |\n\n# hello-world\n"));
        assert!(report.ends_with("\n## License\n"));
        assert!(report.contains("| ***Linux*** | ≈1KB | N/A<sup>1</sup>|\n"));
        assert!(report.contains("| ***Linux*** | ≈2KB (Release) | N/A<sup>1</sup>|\n"));
        assert!(report.contains("| ***Linux*** | ≈3KB (Release) | N/A<sup>1</sup>|\n"));
        assert!(report.contains("| ***Linux*** | ≈250ms (Release) | N/A<sup>1</sup>|\n"));
        assert!(report.contains("**<sup>1</sup>**: Does not build  \n"));
        assert!(!report.contains("Windows"));
    }

    #[test]
    fn test_generate_report_is_deterministic() {
        let inputs = inputs();
        let first = generate_report(&inputs, AggregateOptions::default()).unwrap();
        let second = generate_report(&inputs, AggregateOptions::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_summarize_counts() {
        let summary = summarize(&inputs(), AggregateOptions::default());

        assert_eq!(summary.sections.len(), 5);
        for section in &summary.sections {
            assert_eq!(section.rows, 1);
            assert_eq!(section.cells, 2);
            assert_eq!(section.overridden, 1);
            assert_eq!(section.populated, 1);
        }
        assert_eq!(summary.total_cells(), 10);
        assert_eq!(summary.total_populated(), 5);
    }

    #[test]
    fn test_run_writes_output() {
        let dir = TempDir::new().unwrap();
        let inputs = inputs();
        let paths = ReportPaths::in_dir(dir.path());
        fs::write(&paths.config, serde_json::to_string(&inputs.config).unwrap()).unwrap();
        fs::write(
            &paths.benchmarks,
            serde_json::to_string(&inputs.benchmarks).unwrap(),
        )
        .unwrap();
        fs::write(&paths.stats, serde_json::to_string(&inputs.stats).unwrap()).unwrap();
        fs::write(&paths.begin_template, &inputs.begin_template).unwrap();
        fs::write(&paths.end_template, &inputs.end_template).unwrap();
        fs::write(&paths.output, "stale").unwrap();

        let content = run(&paths, AggregateOptions::default()).unwrap();
        assert_eq!(fs::read_to_string(&paths.output).unwrap(), content);
    }

    #[test]
    fn test_run_failure_leaves_output_untouched() {
        let dir = TempDir::new().unwrap();
        let paths = ReportPaths::in_dir(dir.path());
        fs::write(&paths.output, "previous report").unwrap();

        assert!(run(&paths, AggregateOptions::default()).is_err());
        assert_eq!(fs::read_to_string(&paths.output).unwrap(), "previous report");
    }
}
