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

//! Statistic aggregation.
//!
//! Turns raw benchmark records into one [`StatMap`] per
//! (app, architecture, metric). Libraries without a record are left out of
//! the map entirely, and an architecture missing from `benchmarks.json`
//! yields an empty map for every metric.
//!
//! # Example
//!
//! ```
//! use deskbench_core::aggregate::Aggregator;
//! use deskbench_core::config::ReportConfig;
//! use deskbench_core::model::{BenchmarkData, Context};
//!
//! let config = ReportConfig::new()
//!     .with_app("hello-world")
//!     .with_architecture("ubuntu-latest", "Linux")
//!     .with_library("tauri", "Tauri", "https://tauri.app");
//! let data: BenchmarkData = serde_json::from_str(r#"{
//!     "ubuntu-latest": {"benchmarkData": {
//!         "../benchmark/hello-world/tauri": {"buildSize": 4200000}
//!     }}
//! }"#).unwrap();
//!
//! let stats = Aggregator::new(&config, &data).build_size_stats("hello-world", "ubuntu-latest");
//! assert_eq!(stats.get("tauri", Context::Release).map(|v| v.get()), Some(4200000.0));
//! ```

use crate::config::ReportConfig;
use crate::format::round_half_up;
use crate::model::{
    BenchmarkData, BenchmarkKey, BenchmarkRecord, Context, MemoryUsage, Metric, RunSample,
    StatMap, StatValue,
};
use tracing::trace;

/// Ordering applied to start times before picking the median.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MedianOrdering {
    /// Order by the decimal string form of each value, so `1000` sorts
    /// before `999`. Matches the reports produced so far.
    #[default]
    Lexicographic,
    /// Order by numeric value.
    Numeric,
}

/// Tunables for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggregateOptions {
    /// Start time ordering.
    pub median_ordering: MedianOrdering,
}

impl AggregateOptions {
    /// Sets the start time ordering.
    pub fn with_median_ordering(mut self, ordering: MedianOrdering) -> Self {
        self.median_ordering = ordering;
        self
    }
}

/// Computes statistics from benchmark data for the configured libraries.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    config: &'a ReportConfig,
    data: &'a BenchmarkData,
    options: AggregateOptions,
}

impl<'a> Aggregator<'a> {
    /// Creates an aggregator with default options.
    pub fn new(config: &'a ReportConfig, data: &'a BenchmarkData) -> Self {
        Self {
            config,
            data,
            options: AggregateOptions::default(),
        }
    }

    /// Replaces the aggregation options.
    pub fn with_options(mut self, options: AggregateOptions) -> Self {
        self.options = options;
        self
    }

    /// Computes `metric` for one app on one architecture.
    pub fn stats(&self, metric: Metric, app: &str, architecture: &str) -> StatMap {
        match metric {
            Metric::BuildSize => self.build_size_stats(app, architecture),
            Metric::BuildTime => self.build_time_stats(app, architecture),
            Metric::Memory => self.memory_stats(app, architecture),
            Metric::SystemMemory => self.system_memory_stats(app, architecture),
            Metric::StartTime => self.start_time_stats(app, architecture),
        }
    }

    /// Raw build size in bytes, on the release track.
    pub fn build_size_stats(&self, app: &str, architecture: &str) -> StatMap {
        self.build_stat(app, architecture, |record| record.build_size, |v| v)
    }

    /// Build time rounded to whole milliseconds, on the release track.
    pub fn build_time_stats(&self, app: &str, architecture: &str) -> StatMap {
        self.build_stat(app, architecture, |record| record.build_time, round_half_up)
    }

    /// Floored mean of the per-run process memory medians.
    pub fn memory_stats(&self, app: &str, architecture: &str) -> StatMap {
        self.run_stat(app, architecture, |runs| {
            mean_of_runs(runs, |memory| memory.med)
        })
    }

    /// Floored mean of the per-run system memory medians.
    pub fn system_memory_stats(&self, app: &str, architecture: &str) -> StatMap {
        self.run_stat(app, architecture, |runs| {
            mean_of_runs(runs, |memory| memory.sys_med)
        })
    }

    /// Rounded median start time.
    pub fn start_time_stats(&self, app: &str, architecture: &str) -> StatMap {
        let ordering = self.options.median_ordering;
        self.run_stat(app, architecture, |runs| median_start_time(runs, ordering))
    }

    fn build_stat(
        &self,
        app: &str,
        architecture: &str,
        field: impl Fn(&BenchmarkRecord) -> Option<f64>,
        transform: impl Fn(f64) -> f64,
    ) -> StatMap {
        let mut stats = StatMap::new();
        let Some(arch_data) = self.data.get(architecture) else {
            trace!("No benchmark data for architecture {}", architecture);
            return stats;
        };

        for library in &self.config.libraries {
            let key = BenchmarkKey::build(app, &library.id);
            let value = arch_data
                .record(&key, &self.config.benchmark_prefix)
                .and_then(|record| field(record))
                .filter(|v| StatValue::new(*v).is_populated());

            if let Some(value) = value {
                stats.insert(library.id.as_str(), Context::Release, StatValue::new(transform(value)));
            }
        }

        stats
    }

    fn run_stat(
        &self,
        app: &str,
        architecture: &str,
        reduce: impl Fn(&[RunSample]) -> f64,
    ) -> StatMap {
        let mut stats = StatMap::new();
        let Some(arch_data) = self.data.get(architecture) else {
            trace!("No benchmark data for architecture {}", architecture);
            return stats;
        };

        for library in &self.config.libraries {
            for context in Context::ALL {
                let key = BenchmarkKey::run(app, &library.id, context);
                let runs = arch_data
                    .record(&key, &self.config.benchmark_prefix)
                    .and_then(|record| record.benchmarks.as_deref());

                if let Some(runs) = runs {
                    stats.insert(library.id.as_str(), context, StatValue::new(reduce(runs)));
                }
            }
        }

        stats
    }
}

/// Floored arithmetic mean of one memory field across runs.
///
/// Runs without the field count as zero but still count toward the divisor.
/// An empty slice yields NaN.
pub fn mean_of_runs(runs: &[RunSample], select: impl Fn(&MemoryUsage) -> Option<f64>) -> f64 {
    let sum: f64 = runs
        .iter()
        .map(|run| {
            run.memory_usage
                .as_ref()
                .and_then(&select)
                .filter(|v| !v.is_nan())
                .unwrap_or(0.0)
        })
        .sum();

    (sum / runs.len() as f64).floor()
}

/// Rounded element at index `len / 2` of the sorted start times, or 0 when
/// no run recorded one.
pub fn median_start_time(runs: &[RunSample], ordering: MedianOrdering) -> f64 {
    let mut times: Vec<f64> = runs.iter().filter_map(|run| run.start_time).collect();
    if times.is_empty() {
        return 0.0;
    }

    match ordering {
        MedianOrdering::Lexicographic => times.sort_by_cached_key(|t| t.to_string()),
        MedianOrdering::Numeric => times.sort_by(|a, b| a.total_cmp(b)),
    }

    round_half_up(times[times.len() / 2])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ReportConfig {
        ReportConfig::new()
            .with_app("hello-world")
            .with_architecture("ubuntu-latest", "Linux")
            .with_architecture("windows-latest", "Windows")
            .with_library("electron", "Electron", "https://electronjs.org")
            .with_library("tauri", "Tauri", "https://tauri.app")
            .with_library("wails", "Wails", "https://wails.io")
    }

    fn data() -> BenchmarkData {
        serde_json::from_str(
            r#"{
            "ubuntu-latest": {"benchmarkData": {
                "../benchmark/hello-world/electron": {"buildSize": 250000000, "buildTime": 81234.6},
                "../benchmark/hello-world/tauri": {"buildSize": 0, "buildTime": 40000.4},
                "../benchmark/hello-world/electron/Release": {"benchmarks": [
                    {"memoryUsage": {"med": 100, "sysMed": 1000}, "startTime": 900},
                    {"memoryUsage": {"med": 200, "sysMed": 2000}, "startTime": 1000},
                    {"memoryUsage": {"med": null}, "startTime": 950}
                ]},
                "../benchmark/hello-world/electron/Debug": {"benchmarks": []},
                "../benchmark/hello-world/tauri/Debug": {"buildSize": 3}
            }}
        }"#,
        )
        .unwrap()
    }

    fn run(start_time: Option<f64>) -> RunSample {
        RunSample {
            memory_usage: None,
            start_time,
        }
    }

    #[test]
    fn test_build_size_passthrough() {
        let (config, data) = (config(), data());
        let stats = Aggregator::new(&config, &data).build_size_stats("hello-world", "ubuntu-latest");

        assert_eq!(
            stats.get("electron", Context::Release),
            Some(StatValue::new(250_000_000.0))
        );
        assert_eq!(stats.get("electron", Context::Debug), None);
    }

    #[test]
    fn test_build_size_omits_zero_and_missing() {
        let (config, data) = (config(), data());
        let stats = Aggregator::new(&config, &data).build_size_stats("hello-world", "ubuntu-latest");

        assert!(!stats.contains_library("tauri"));
        assert!(!stats.contains_library("wails"));
        assert_eq!(stats.len(), 1);
    }

    #[test]
    fn test_build_time_rounded() {
        let (config, data) = (config(), data());
        let stats = Aggregator::new(&config, &data).build_time_stats("hello-world", "ubuntu-latest");

        assert_eq!(
            stats.get("electron", Context::Release),
            Some(StatValue::new(81235.0))
        );
        assert_eq!(stats.get("tauri", Context::Release), Some(StatValue::new(40000.0)));
    }

    #[test]
    fn test_memory_mean_counts_missing_samples() {
        let (config, data) = (config(), data());
        let stats = Aggregator::new(&config, &data).memory_stats("hello-world", "ubuntu-latest");

        assert_eq!(
            stats.get("electron", Context::Release),
            Some(StatValue::new(100.0))
        );
    }

    #[test]
    fn test_system_memory_mean() {
        let (config, data) = (config(), data());
        let stats = Aggregator::new(&config, &data).system_memory_stats("hello-world", "ubuntu-latest");

        assert_eq!(
            stats.get("electron", Context::Release),
            Some(StatValue::new(1000.0))
        );
    }

    #[test]
    fn test_empty_run_list_is_present_but_unpopulated() {
        let (config, data) = (config(), data());
        let stats = Aggregator::new(&config, &data).memory_stats("hello-world", "ubuntu-latest");

        let debug = stats.get("electron", Context::Debug).unwrap();
        assert!(debug.get().is_nan());
        assert!(!debug.is_populated());
    }

    #[test]
    fn test_record_without_runs_is_skipped() {
        let (config, data) = (config(), data());
        let stats = Aggregator::new(&config, &data).memory_stats("hello-world", "ubuntu-latest");

        assert!(!stats.contains_library("tauri"));
    }

    #[test]
    fn test_start_time_lexicographic_median() {
        let (config, data) = (config(), data());
        let stats = Aggregator::new(&config, &data).start_time_stats("hello-world", "ubuntu-latest");

        // "1000" < "900" < "950"
        assert_eq!(
            stats.get("electron", Context::Release),
            Some(StatValue::new(900.0))
        );
    }

    #[test]
    fn test_start_time_numeric_median() {
        let (config, data) = (config(), data());
        let options = AggregateOptions::default().with_median_ordering(MedianOrdering::Numeric);
        let stats = Aggregator::new(&config, &data)
            .with_options(options)
            .start_time_stats("hello-world", "ubuntu-latest");

        assert_eq!(
            stats.get("electron", Context::Release),
            Some(StatValue::new(950.0))
        );
    }

    #[test]
    fn test_missing_architecture_yields_empty_maps() {
        let (config, data) = (config(), data());
        let aggregator = Aggregator::new(&config, &data);

        for metric in Metric::ALL {
            assert!(aggregator.stats(metric, "hello-world", "windows-latest").is_empty());
        }
    }

    #[test]
    fn test_unknown_app_yields_empty_maps() {
        let (config, data) = (config(), data());
        let aggregator = Aggregator::new(&config, &data);

        assert!(aggregator.stats(Metric::Memory, "file-explorer", "ubuntu-latest").is_empty());
    }

    #[test]
    fn test_mean_of_runs() {
        let runs = vec![
            RunSample {
                memory_usage: Some(MemoryUsage {
                    med: Some(100.0),
                    sys_med: None,
                }),
                start_time: None,
            },
            RunSample {
                memory_usage: Some(MemoryUsage {
                    med: Some(200.0),
                    sys_med: None,
                }),
                start_time: None,
            },
            run(None),
        ];
        assert_eq!(mean_of_runs(&runs, |m| m.med), 100.0);
        assert_eq!(mean_of_runs(&runs, |m| m.sys_med), 0.0);
    }

    #[test]
    fn test_median_start_time_edge_cases() {
        assert_eq!(median_start_time(&[], MedianOrdering::Lexicographic), 0.0);
        assert_eq!(median_start_time(&[run(None)], MedianOrdering::Numeric), 0.0);
        assert_eq!(
            median_start_time(&[run(Some(10.5))], MedianOrdering::Numeric),
            11.0
        );
        // Upper of the two middle elements for even counts.
        let runs = [run(Some(1.0)), run(Some(2.0)), run(Some(3.0)), run(Some(4.0))];
        assert_eq!(median_start_time(&runs, MedianOrdering::Numeric), 3.0);
    }
}
